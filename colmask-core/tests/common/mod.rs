//! Shared fixtures for colmask-core integration tests.

use chrono::NaiveDate;
use colmask_core::{FakeData, FakeDataError, Locale, RandomFakeData};

/// Seeded generator with a pinned "today" so date output is predictable.
#[must_use]
pub fn seeded_fake(seed: u64) -> RandomFakeData {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
    RandomFakeData::seeded(seed).with_today(today)
}

/// Generator that panics whenever it is asked for a phone number and
/// otherwise defers to a seeded generator.
pub struct PanicOnPhone {
    inner: RandomFakeData,
}

impl PanicOnPhone {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: seeded_fake(0),
        }
    }
}

impl FakeData for PanicOnPhone {
    fn generate_date(&mut self) -> Result<NaiveDate, FakeDataError> {
        self.inner.generate_date()
    }

    fn generate_phone(&mut self, _locale: Locale) -> Result<String, FakeDataError> {
        panic!("phone generator exploded");
    }

    fn generate_digits(&mut self, digits: u32) -> Result<u64, FakeDataError> {
        self.inner.generate_digits(digits)
    }

    fn generate_letters(&mut self, len: usize) -> String {
        self.inner.generate_letters(len)
    }
}

/// Parses CSV text into rows of owned fields.
#[must_use]
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes())
        .records()
        .map(|record| {
            record
                .expect("output must be valid CSV")
                .iter()
                .map(ToOwned::to_owned)
                .collect()
        })
        .collect()
}
