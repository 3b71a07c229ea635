//! Builder for configuring [`Masker`] instances.

use std::sync::Arc;

use crate::{locale::Locale, masker::Masker};

/// Configures and constructs [`Masker`] instances.
///
/// # Examples
/// ```
/// use colmask_core::{Locale, MaskerBuilder};
///
/// let masker = MaskerBuilder::new()
///     .with_column("phone")
///     .with_locale(Locale::FrFr)
///     .build();
/// assert_eq!(masker.column(), "phone");
/// assert_eq!(masker.locale().as_str(), "fr_FR");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MaskerBuilder {
    column: String,
    locale: Locale,
}

impl MaskerBuilder {
    /// Creates a builder with no column and the default locale.
    ///
    /// # Examples
    /// ```
    /// use colmask_core::MaskerBuilder;
    ///
    /// let builder = MaskerBuilder::new();
    /// assert_eq!(builder.column(), "");
    /// assert_eq!(builder.locale().as_str(), "en_US");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header name of the column to mask.
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Returns the configured column name.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Sets the locale passed to the fake-data generator.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Returns the configured locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Constructs a [`Masker`].
    ///
    /// The column name is matched exactly against the header when the run
    /// starts, so an empty name selects an unnamed header field.
    ///
    /// # Examples
    /// ```
    /// use colmask_core::MaskerBuilder;
    ///
    /// let masker = MaskerBuilder::new().build();
    /// assert_eq!(masker.column(), "");
    /// ```
    #[must_use]
    pub fn build(self) -> Masker {
        Masker::new(Arc::from(self.column), self.locale)
    }
}
