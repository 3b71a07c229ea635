//! Replacement of classified values with synthetic look-alikes.

use tracing::{debug, error, warn};

use crate::{
    dates::parse_date,
    detect::ValueKind,
    error::FabricationError,
    fake::FakeData,
    locale::Locale,
};

const DOLLAR_DIGITS: u32 = 3;
const CENT_DIGITS: u32 = 2;

/// Produces a synthetic replacement for `value` based on its `kind`.
///
/// - [`ValueKind::Date`]: a random recent date as `YYYY-MM-DD`, provided the
///   original parses as a date.
/// - [`ValueKind::Currency`]: `$<up to 3 digits>.<up to 2 digits>`, provided
///   the original amount is numeric. The original magnitude is not kept.
/// - [`ValueKind::Telephone`]: a phone number formatted for `locale`.
/// - [`ValueKind::Unknown`]: random letters with the same character count.
///
/// This function never fails. Any internal error is logged and `value` is
/// returned unchanged.
///
/// # Examples
/// ```
/// use colmask_core::{Locale, RandomFakeData, ValueKind, fabricate_value};
///
/// let mut fake = RandomFakeData::seeded(3);
/// let masked = fabricate_value("secret", ValueKind::Unknown, Locale::default(), &mut fake);
/// assert_eq!(masked.len(), "secret".len());
///
/// let kept = fabricate_value("2023-99-99", ValueKind::Date, Locale::default(), &mut fake);
/// assert_eq!(kept, "2023-99-99");
/// ```
pub fn fabricate_value<F>(value: &str, kind: ValueKind, locale: Locale, fake: &mut F) -> String
where
    F: FakeData + ?Sized,
{
    match try_fabricate(value, kind, locale, fake) {
        Ok(replacement) => replacement,
        Err(err @ FabricationError::UnparseableDate { .. }) => {
            warn!(error = %err, "could not parse date; keeping original value");
            value.to_owned()
        }
        Err(err) => {
            error!(error = %err, kind = kind.as_str(), "fabrication failed; keeping original value");
            value.to_owned()
        }
    }
}

fn try_fabricate<F>(
    value: &str,
    kind: ValueKind,
    locale: Locale,
    fake: &mut F,
) -> Result<String, FabricationError>
where
    F: FakeData + ?Sized,
{
    match kind {
        ValueKind::Date => {
            parse_date(value).ok_or_else(|| FabricationError::UnparseableDate {
                value: value.to_owned(),
            })?;
            Ok(fake.generate_date()?.format("%Y-%m-%d").to_string())
        }
        ValueKind::Currency => {
            let digits: String = value
                .trim()
                .chars()
                .filter(|c| !matches!(c, '$' | ','))
                .collect();
            // Validation only; the amount itself is discarded.
            digits
                .parse::<f64>()
                .map_err(|source| FabricationError::InvalidAmount {
                    value: value.to_owned(),
                    source,
                })?;
            let dollars = fake.generate_digits(DOLLAR_DIGITS)?;
            let cents = fake.generate_digits(CENT_DIGITS)?;
            Ok(format!("${dollars}.{cents}"))
        }
        ValueKind::Telephone => Ok(fake.generate_phone(locale)?),
        ValueKind::Unknown => {
            debug!("value has no recognised format; replacing with random letters");
            Ok(fake.generate_letters(value.chars().count()))
        }
    }
}

#[cfg(test)]
mod tests;
