//! Row pipeline that streams a CSV file and masks one column.
//!
//! The header is copied first and used to resolve the target column. Each
//! data row is then classified, fabricated and written before the next row is
//! read. Row-level problems never abort the run: short rows, blank lines and
//! rows whose processing panics are written unchanged. A blank line comes out
//! as `""`, the `csv` writer's form of an empty row.

use std::{
    any::Any,
    io::{Read, Write},
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use csv::{Reader, ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{Span, debug, error, field, info, instrument, warn};

use crate::{
    blank_lines::BlankLineReader,
    detect::{ValueKind, detect_value_kind},
    error::MaskError,
    fabricate::fabricate_value,
    fake::FakeData,
    locale::Locale,
    summary::MaskSummary,
};

/// Masks a single named column of a CSV stream.
///
/// # Examples
/// ```
/// use colmask_core::{MaskerBuilder, RandomFakeData};
///
/// let masker = MaskerBuilder::new().with_column("phone").build();
/// let input = "id,phone\n1,555-123-4567\n";
/// let mut output = Vec::new();
/// let summary = masker.mask(input.as_bytes(), &mut output, &mut RandomFakeData::seeded(1))?;
///
/// let text = String::from_utf8(output)?;
/// let mut lines = text.lines();
/// assert_eq!(lines.next(), Some("id,phone"));
/// assert!(lines.next().is_some_and(|row| row.starts_with("1,")));
/// assert_eq!(summary.rows(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Masker {
    column: Arc<str>,
    locale: Locale,
}

enum RowOutcome {
    Masked(StringRecord, ValueKind),
    Short,
    Failed(String),
}

impl Masker {
    pub(crate) const fn new(column: Arc<str>, locale: Locale) -> Self {
        Self { column, locale }
    }

    /// Returns the header name of the masked column.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns the locale used for fabrication.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Reads CSV from `input`, masks the configured column and writes the
    /// result to `output`.
    ///
    /// The header is written before the column is resolved, so a missing
    /// column leaves exactly the header in `output`. Rows are never dropped,
    /// added or reordered, and every other column is written as read. A blank
    /// first line is a header with no fields, so no column matches it.
    ///
    /// # Errors
    /// Returns [`MaskError::MissingHeader`] for empty input,
    /// [`MaskError::ColumnNotFound`] when the header lacks the column, and
    /// [`MaskError::Csv`] or [`MaskError::Io`] when the streams fail.
    #[instrument(
        name = "mask.run",
        err,
        skip_all,
        fields(column = %self.column, locale = %self.locale, column_index = field::Empty),
    )]
    pub fn mask<R, W, F>(&self, input: R, output: W, fake: &mut F) -> Result<MaskSummary, MaskError>
    where
        R: Read,
        W: Write,
        F: FakeData + ?Sized,
    {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(BlankLineReader::new(input));
        let mut writer = WriterBuilder::new().flexible(true).from_writer(output);
        let mut record = StringRecord::new();

        if !reader.read_record(&mut record)? {
            return Err(MaskError::MissingHeader);
        }
        writer.write_record(&record)?;
        let header = if came_from_blank_line(&mut reader) {
            StringRecord::new()
        } else {
            record.clone()
        };

        let Some(column_index) = header.iter().position(|name| name == &*self.column) else {
            writer.flush()?;
            return Err(MaskError::ColumnNotFound {
                column: Arc::clone(&self.column),
            });
        };
        Span::current().record("column_index", column_index);
        info!("masking started");

        let mut summary = MaskSummary::new(column_index);
        // Header is row 1.
        let mut row = 1_usize;
        while reader.read_record(&mut record)? {
            row += 1;
            if came_from_blank_line(&mut reader) {
                warn!(row, "blank line; writing an empty row");
                writer.write_record(&record)?;
                summary.record_short();
                continue;
            }
            match self.process_row(&record, column_index, fake) {
                RowOutcome::Masked(masked, kind) => {
                    debug!(row, kind = kind.as_str(), "row masked");
                    writer.write_record(&masked)?;
                    summary.record_masked(kind);
                }
                RowOutcome::Short => {
                    warn!(
                        row,
                        fields = record.len(),
                        "row has fewer columns than expected; writing it unchanged"
                    );
                    writer.write_record(&record)?;
                    summary.record_short();
                }
                RowOutcome::Failed(reason) => {
                    error!(row, error = %reason, "error processing row; writing original row");
                    writer.write_record(&record)?;
                    summary.record_failed();
                }
            }
        }
        writer.flush()?;

        info!(
            rows = summary.rows(),
            masked = summary.masked(),
            short_rows = summary.short_rows(),
            failed_rows = summary.failed_rows(),
            "masking completed"
        );
        Ok(summary)
    }

    fn process_row<F>(&self, record: &StringRecord, column_index: usize, fake: &mut F) -> RowOutcome
    where
        F: FakeData + ?Sized,
    {
        let Some(original) = record.get(column_index) else {
            return RowOutcome::Short;
        };
        let locale = self.locale;
        let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
            let kind = detect_value_kind(original);
            let masked = fabricate_value(original, kind, locale, fake);
            (replace_field(record, column_index, &masked), kind)
        }));
        match attempt {
            Ok((masked, kind)) => RowOutcome::Masked(masked, kind),
            Err(payload) => RowOutcome::Failed(panic_message(payload.as_ref())),
        }
    }
}

fn came_from_blank_line<R: Read>(reader: &mut Reader<BlankLineReader<R>>) -> bool {
    let end = reader.position().byte();
    reader.get_mut().take_marker_before(end)
}

fn replace_field(record: &StringRecord, index: usize, value: &str) -> StringRecord {
    record
        .iter()
        .enumerate()
        .map(|(position, field)| if position == index { value } else { field })
        .collect()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "row processing panicked".to_owned())
}
