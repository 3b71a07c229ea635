//! Colmask core library.
//!
//! Detects the format of values in one CSV column and replaces each with a
//! fabricated look-alike. The pipeline streams one row at a time and never
//! drops, adds or reorders rows.

mod blank_lines;
mod builder;
mod dates;
mod detect;
mod error;
mod fabricate;
mod fake;
mod locale;
mod masker;
mod summary;

pub use crate::{
    builder::MaskerBuilder,
    dates::parse_date,
    detect::{ValueKind, detect_value_kind},
    error::{FakeDataError, LocaleError, MaskError, MaskErrorCode},
    fabricate::fabricate_value,
    fake::{FakeData, RandomFakeData},
    locale::Locale,
    masker::Masker,
    summary::{KindCounts, MaskSummary},
};
