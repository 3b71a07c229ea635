//! Error types for the colmask core library.
//!
//! Fatal pipeline failures surface as [`MaskError`]. Value-level failures are
//! modelled by [`FabricationError`] and [`FakeDataError`] but never escape the
//! fabricator; they are logged and the original value is kept.

use std::{fmt, io, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors raised while parsing a [`crate::Locale`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LocaleError {
    /// The identifier did not look like `ll_CC`.
    #[error("`{provided}` is not a locale identifier; expected a form such as `en_US`")]
    Malformed {
        /// Raw value supplied by the caller.
        provided: String,
    },
    /// The identifier is well-formed but no fake-data tables exist for it.
    #[error("locale `{provided}` is not supported; choose one of: {supported}")]
    Unsupported {
        /// Normalised identifier supplied by the caller.
        provided: String,
        /// Comma-separated list of supported identifiers.
        supported: String,
    },
}

/// Errors raised by a [`crate::FakeData`] implementation.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FakeDataError {
    /// A number with this many digits cannot be represented.
    #[error("cannot generate a number with {digits} digits")]
    TooManyDigits {
        /// Requested digit count.
        digits: u32,
    },
    /// The system clock produced a date outside the representable range.
    #[error("current date is outside the supported calendar range")]
    ClockOutOfRange,
    /// A custom generator failed for its own reasons.
    #[error("fake data generator failed: {message}")]
    Generator {
        /// Human-readable explanation supplied by the generator.
        message: String,
    },
}

/// Internal failures while fabricating a replacement value.
///
/// The fabricator never returns these to callers; they decide which log level
/// is used before falling back to the original value.
#[derive(Debug, Error)]
pub(crate) enum FabricationError {
    /// The value was classified as a date but no known format accepted it.
    #[error("could not parse date `{value}`")]
    UnparseableDate {
        /// Original cell content.
        value: String,
    },
    /// The value was classified as currency but its amount is not numeric.
    #[error("could not parse currency amount `{value}`: {source}")]
    InvalidAmount {
        /// Original cell content.
        value: String,
        /// Underlying float parse failure.
        #[source]
        source: std::num::ParseFloatError,
    },
    /// The fake-data generator failed.
    #[error(transparent)]
    FakeData(#[from] FakeDataError),
}

/// Fatal errors that abort a masking run.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum MaskError {
    /// The input contained no header row.
    #[error("input contains no header row")]
    MissingHeader,
    /// The header row does not contain the requested column.
    #[error("column `{column}` not found in the CSV header")]
    ColumnNotFound {
        /// Column name requested by the caller.
        column: Arc<str>,
    },
    /// Reading from or writing to the CSV stream failed.
    #[error("csv stream failed: {0}")]
    Csv(#[from] csv::Error),
    /// Flushing the output stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

define_error_codes! {
    /// Stable codes describing [`MaskError`] variants.
    enum MaskErrorCode for MaskError {
        /// The input contained no header row.
        MissingHeader => MissingHeader => "COLMASK_MISSING_HEADER",
        /// The header row does not contain the requested column.
        ColumnNotFound => ColumnNotFound { .. } => "COLMASK_COLUMN_NOT_FOUND",
        /// Reading from or writing to the CSV stream failed.
        Csv => Csv(..) => "COLMASK_CSV",
        /// Flushing the output stream failed.
        Io => Io(..) => "COLMASK_IO",
    }
}
