//! Unit tests for value fabrication and its fallback behaviour.

use super::*;

use chrono::NaiveDate;
use colmask_test_support::tracing::RecordingLayer;
use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use crate::{error::FakeDataError, fake::RandomFakeData};

struct FailingFakeData;

impl FakeData for FailingFakeData {
    fn generate_date(&mut self) -> Result<NaiveDate, FakeDataError> {
        Err(FakeDataError::ClockOutOfRange)
    }

    fn generate_phone(&mut self, locale: Locale) -> Result<String, FakeDataError> {
        Err(FakeDataError::Generator {
            message: format!("no phone numbers for {locale}"),
        })
    }

    fn generate_digits(&mut self, digits: u32) -> Result<u64, FakeDataError> {
        Err(FakeDataError::TooManyDigits { digits })
    }

    fn generate_letters(&mut self, len: usize) -> String {
        "?".repeat(len)
    }
}

#[fixture]
fn fake() -> RandomFakeData {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
    RandomFakeData::seeded(11).with_today(today)
}

fn is_digits(raw: &str, max_len: usize) -> bool {
    !raw.is_empty() && raw.len() <= max_len && raw.chars().all(|c| c.is_ascii_digit())
}

#[rstest]
#[case("2023-05-01")]
#[case("05/01/2023")]
#[case("2023-05-01T10:00:00Z")]
fn date_is_replaced_with_iso_date(mut fake: RandomFakeData, #[case] original: &str) {
    let masked = fabricate_value(original, ValueKind::Date, Locale::default(), &mut fake);
    let parsed = NaiveDate::parse_from_str(&masked, "%Y-%m-%d").expect("masked value is ISO");
    assert!(parsed >= NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"));
    assert_eq!(masked.len(), 10);
}

#[rstest]
fn unparseable_date_is_kept_and_warned(mut fake: RandomFakeData) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let masked = tracing::subscriber::with_default(subscriber, || {
        fabricate_value("2023-99-99", ValueKind::Date, Locale::default(), &mut fake)
    });

    assert_eq!(masked, "2023-99-99");
    let events = layer.events();
    assert!(events.iter().any(|event| {
        event.level == Level::WARN
            && event
                .fields
                .get("message")
                .is_some_and(|message| message.contains("could not parse date"))
    }));
}

#[rstest]
#[case("$1,234.56")]
#[case("$5")]
#[case(" $99.10 ")]
fn currency_is_replaced_with_random_amount(mut fake: RandomFakeData, #[case] original: &str) {
    let masked = fabricate_value(original, ValueKind::Currency, Locale::default(), &mut fake);
    let amount = masked.strip_prefix('$').expect("masked value starts with `$`");
    let (dollars, cents) = amount.split_once('.').expect("masked value has cents");
    assert!(is_digits(dollars, 3), "dollars `{dollars}`");
    assert!(is_digits(cents, 2), "cents `{cents}`");
}

#[rstest]
fn non_numeric_currency_is_kept_and_logged(mut fake: RandomFakeData) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let masked = tracing::subscriber::with_default(subscriber, || {
        fabricate_value("$12abc", ValueKind::Currency, Locale::default(), &mut fake)
    });

    assert_eq!(masked, "$12abc");
    assert!(
        layer
            .events()
            .iter()
            .any(|event| event.level == Level::ERROR
                && event.fields.get("kind") == Some(&"currency".to_owned()))
    );
}

#[rstest]
fn telephone_uses_locale_formats(mut fake: RandomFakeData) {
    let locale: Locale = "fr_FR".parse().expect("fr_FR is supported");
    let masked = fabricate_value("555-123-4567", ValueKind::Telephone, locale, &mut fake);
    let digit_count = masked.chars().filter(char::is_ascii_digit).count();
    assert!(masked.starts_with('0') || masked.starts_with("+33"), "{masked}");
    assert!(digit_count >= 10, "{masked}");
}

#[rstest]
#[case("alice")]
#[case("naïve café")]
#[case("x")]
#[case("")]
fn unknown_preserves_character_count(mut fake: RandomFakeData, #[case] original: &str) {
    let masked = fabricate_value(original, ValueKind::Unknown, Locale::default(), &mut fake);
    assert_eq!(masked.chars().count(), original.chars().count());
    assert!(masked.chars().all(|c| c.is_ascii_alphabetic()));
}

#[rstest]
#[case("2023-05-01", ValueKind::Date)]
#[case("$1,234.56", ValueKind::Currency)]
#[case("+1 (555) 123-4567", ValueKind::Telephone)]
fn generator_failure_returns_original(#[case] original: &str, #[case] kind: ValueKind) {
    let masked = fabricate_value(original, kind, Locale::default(), &mut FailingFakeData);
    assert_eq!(masked, original);
}

#[test]
fn accepts_trait_objects() {
    let mut boxed: Box<dyn FakeData> = Box::new(RandomFakeData::seeded(5));
    let masked = fabricate_value("abc", ValueKind::Unknown, Locale::default(), boxed.as_mut());
    assert_eq!(masked.len(), 3);
}
