//! Locale identifiers accepted by the fake-data generator.
//!
//! The supported set mirrors the locale data shipped with the `fake` crate.
//! Only telephone fabrication is locale-sensitive. Detection never consults
//! the locale.

use std::{fmt, str::FromStr};

use crate::error::LocaleError;

/// A locale with fake-data tables.
///
/// Parsing accepts `ll_CC` or `ll-CC` in any case.
///
/// # Examples
/// ```
/// use colmask_core::Locale;
///
/// let locale: Locale = "fr-fr".parse()?;
/// assert_eq!(locale, Locale::FrFr);
/// assert_eq!(locale.as_str(), "fr_FR");
/// assert_eq!(Locale::default().as_str(), "en_US");
/// # Ok::<(), colmask_core::LocaleError>(())
/// ```
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Locale {
    /// English (United States).
    #[default]
    EnUs,
    /// French (France).
    FrFr,
    /// Japanese (Japan).
    JaJp,
    /// Portuguese (Brazil).
    PtBr,
    /// Chinese (China).
    ZhCn,
    /// Chinese (Taiwan).
    ZhTw,
    /// Arabic (Saudi Arabia).
    ArSa,
}

const ALL: [Locale; 7] = [
    Locale::EnUs,
    Locale::FrFr,
    Locale::JaJp,
    Locale::PtBr,
    Locale::ZhCn,
    Locale::ZhTw,
    Locale::ArSa,
];

impl Locale {
    /// Returns the canonical identifier, e.g. `en_US`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::FrFr => "fr_FR",
            Self::JaJp => "ja_JP",
            Self::PtBr => "pt_BR",
            Self::ZhCn => "zh_CN",
            Self::ZhTw => "zh_TW",
            Self::ArSa => "ar_SA",
        }
    }

    /// Iterates over every supported locale.
    pub fn supported() -> impl Iterator<Item = Self> {
        ALL.into_iter()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalised = normalise(raw).ok_or_else(|| LocaleError::Malformed {
            provided: raw.to_owned(),
        })?;
        Self::supported()
            .find(|locale| locale.as_str() == normalised)
            .ok_or_else(|| LocaleError::Unsupported {
                provided: normalised,
                supported: Self::supported()
                    .map(Self::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

fn normalise(raw: &str) -> Option<String> {
    let (language, region) = raw.trim().split_once(['_', '-'])?;
    let language_ok = (2..=3).contains(&language.len())
        && language.chars().all(|c| c.is_ascii_alphabetic());
    let region_ok = region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic());
    if !(language_ok && region_ok) {
        return None;
    }
    Some(format!(
        "{}_{}",
        language.to_ascii_lowercase(),
        region.to_ascii_uppercase()
    ))
}
