//! Fake-data capability used by the fabricator.
//!
//! [`FakeData`] is the seam between fabrication logic and randomness. The
//! default [`RandomFakeData`] draws dates and phone numbers from the `fake`
//! crate's locale data and everything else from a [`rand`] generator; tests
//! can supply a seeded instance or their own implementation.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, Utc};
use fake::{
    Fake,
    faker::{chrono::raw::DateTimeBetween, phone_number::raw::PhoneNumber},
    locales::{AR_SA, EN, FR_FR, JA_JP, PT_BR, ZH_CN, ZH_TW},
};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::{error::FakeDataError, locale::Locale};

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const MAX_DIGITS: u32 = 19;

/// Source of synthetic values.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use colmask_core::{FakeData, FakeDataError, Locale};
///
/// struct Fixed;
///
/// impl FakeData for Fixed {
///     fn generate_date(&mut self) -> Result<NaiveDate, FakeDataError> {
///         NaiveDate::from_ymd_opt(2020, 1, 2).ok_or(FakeDataError::ClockOutOfRange)
///     }
///     fn generate_phone(&mut self, _locale: Locale) -> Result<String, FakeDataError> {
///         Ok("555-000-0000".into())
///     }
///     fn generate_digits(&mut self, _digits: u32) -> Result<u64, FakeDataError> {
///         Ok(7)
///     }
///     fn generate_letters(&mut self, len: usize) -> String {
///         "x".repeat(len)
///     }
/// }
///
/// let mut fake = Fixed;
/// assert_eq!(fake.generate_letters(3), "xxx");
/// ```
pub trait FakeData {
    /// Returns a random recent date.
    ///
    /// # Errors
    /// Returns [`FakeDataError`] if no date can be produced.
    fn generate_date(&mut self) -> Result<NaiveDate, FakeDataError>;

    /// Returns a random phone number formatted for `locale`.
    ///
    /// # Errors
    /// Returns [`FakeDataError`] if no phone number can be produced.
    fn generate_phone(&mut self, locale: Locale) -> Result<String, FakeDataError>;

    /// Returns a random integer with at most `digits` decimal digits.
    ///
    /// # Errors
    /// Returns [`FakeDataError::TooManyDigits`] if the range does not fit in a
    /// `u64`.
    fn generate_digits(&mut self, digits: u32) -> Result<u64, FakeDataError>;

    /// Returns `len` random ASCII letters.
    fn generate_letters(&mut self, len: usize) -> String;
}

/// [`FakeData`] backed by a [`rand`] generator and the `fake` crate.
///
/// Dates fall between 1 January of the current decade and today. Phone
/// numbers follow the formats `fake` ships for the requested locale.
///
/// # Examples
/// ```
/// use colmask_core::{FakeData, RandomFakeData};
///
/// let mut first = RandomFakeData::seeded(7);
/// let mut second = RandomFakeData::seeded(7);
/// assert_eq!(first.generate_letters(8), second.generate_letters(8));
/// ```
#[derive(Debug, Clone)]
pub struct RandomFakeData<R = SmallRng> {
    rng: R,
    today: Option<NaiveDate>,
}

impl RandomFakeData<SmallRng> {
    /// Creates a generator seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    /// Creates a deterministic generator from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomFakeData<R> {
    /// Wraps an existing random number generator.
    #[must_use]
    pub const fn from_rng(rng: R) -> Self {
        Self { rng, today: None }
    }

    /// Pins the date treated as "today" instead of reading the system clock.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl<R: Rng> FakeData for RandomFakeData<R> {
    fn generate_date(&mut self) -> Result<NaiveDate, FakeDataError> {
        let today = self.today();
        let decade = today.year() - today.year().rem_euclid(10);
        let start = NaiveDate::from_ymd_opt(decade, 1, 1)
            .and_then(midnight_utc)
            .ok_or(FakeDataError::ClockOutOfRange)?;
        // Exclusive bound, so today itself stays reachable.
        let end = today
            .checked_add_days(Days::new(1))
            .and_then(midnight_utc)
            .ok_or(FakeDataError::ClockOutOfRange)?;
        let picked: DateTime<Utc> = DateTimeBetween(EN, start, end).fake_with_rng(&mut self.rng);
        Ok(picked.date_naive())
    }

    fn generate_phone(&mut self, locale: Locale) -> Result<String, FakeDataError> {
        let rng = &mut self.rng;
        Ok(match locale {
            Locale::EnUs => PhoneNumber(EN).fake_with_rng(rng),
            Locale::FrFr => PhoneNumber(FR_FR).fake_with_rng(rng),
            Locale::JaJp => PhoneNumber(JA_JP).fake_with_rng(rng),
            Locale::PtBr => PhoneNumber(PT_BR).fake_with_rng(rng),
            Locale::ZhCn => PhoneNumber(ZH_CN).fake_with_rng(rng),
            Locale::ZhTw => PhoneNumber(ZH_TW).fake_with_rng(rng),
            Locale::ArSa => PhoneNumber(AR_SA).fake_with_rng(rng),
        })
    }

    fn generate_digits(&mut self, digits: u32) -> Result<u64, FakeDataError> {
        if digits > MAX_DIGITS {
            return Err(FakeDataError::TooManyDigits { digits });
        }
        let upper = 10_u64
            .checked_pow(digits)
            .ok_or(FakeDataError::TooManyDigits { digits })?;
        Ok(self.rng.gen_range(0..upper))
    }

    fn generate_letters(&mut self, len: usize) -> String {
        (0..len)
            .filter_map(|_| LETTERS.choose(&mut self.rng).copied().map(char::from))
            .collect()
    }
}

fn midnight_utc(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::{fixture, rstest};

    #[fixture]
    fn fake() -> RandomFakeData {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        RandomFakeData::seeded(42).with_today(today)
    }

    #[rstest]
    fn generate_date_stays_within_current_decade(mut fake: RandomFakeData) {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date");
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        for _ in 0..200 {
            let date = fake.generate_date().expect("date must generate");
            assert!(date >= start && date <= today, "{date} out of range");
        }
    }

    #[test]
    fn generate_date_on_decade_boundary_returns_that_day() {
        let today = NaiveDate::from_ymd_opt(2030, 1, 1).expect("valid date");
        let mut fake = RandomFakeData::seeded(1).with_today(today);
        assert_eq!(fake.generate_date().expect("date must generate"), today);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(2, 100)]
    #[case(3, 1_000)]
    #[case(19, 10_000_000_000_000_000_000)]
    fn generate_digits_respects_upper_bound(
        mut fake: RandomFakeData,
        #[case] digits: u32,
        #[case] upper: u64,
    ) {
        for _ in 0..100 {
            let value = fake.generate_digits(digits).expect("digits must generate");
            assert!(value < upper, "{value} >= {upper}");
        }
    }

    #[rstest]
    fn generate_digits_rejects_unrepresentable_ranges(mut fake: RandomFakeData) {
        let err = fake.generate_digits(20).expect_err("20 digits overflow u64");
        assert_eq!(err, FakeDataError::TooManyDigits { digits: 20 });
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(64)]
    fn generate_letters_has_requested_length(mut fake: RandomFakeData, #[case] len: usize) {
        let letters = fake.generate_letters(len);
        assert_eq!(letters.chars().count(), len);
        assert!(letters.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[rstest]
    fn generate_phone_fills_every_placeholder(mut fake: RandomFakeData) {
        for locale in Locale::supported() {
            for _ in 0..20 {
                let phone = fake.generate_phone(locale).expect("phone must generate");
                assert!(
                    !phone.contains(['#', '^']),
                    "{locale} produced `{phone}`"
                );
                assert!(phone.chars().filter(char::is_ascii_digit).count() >= 7);
            }
        }
    }

    #[rstest]
    fn generate_phone_uses_french_numbering_for_fr_fr(mut fake: RandomFakeData) {
        for _ in 0..20 {
            let phone = fake
                .generate_phone(Locale::FrFr)
                .expect("phone must generate");
            assert!(phone.starts_with('0') || phone.starts_with("+33"), "{phone}");
        }
    }

    #[test]
    fn seeded_generators_are_reproducible() {
        let mut first = RandomFakeData::seeded(9);
        let mut second = RandomFakeData::seeded(9);
        let locale = Locale::default();
        assert_eq!(
            first.generate_phone(locale).expect("phone must generate"),
            second.generate_phone(locale).expect("phone must generate"),
        );
        assert_eq!(
            first.generate_digits(3).expect("digits must generate"),
            second.generate_digits(3).expect("digits must generate"),
        );
    }
}
