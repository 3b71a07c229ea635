//! Counters describing a completed masking run.

use crate::detect::ValueKind;

/// Per-kind classification counts for the target column.
///
/// # Examples
/// ```
/// use colmask_core::{KindCounts, ValueKind};
///
/// let counts = KindCounts::default();
/// assert_eq!(counts.get(ValueKind::Date), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindCounts {
    date: usize,
    currency: usize,
    telephone: usize,
    unknown: usize,
}

impl KindCounts {
    /// Returns how many cells were classified as `kind`.
    #[must_use]
    pub const fn get(&self, kind: ValueKind) -> usize {
        match kind {
            ValueKind::Date => self.date,
            ValueKind::Currency => self.currency,
            ValueKind::Telephone => self.telephone,
            ValueKind::Unknown => self.unknown,
        }
    }

    pub(crate) fn record(&mut self, kind: ValueKind) {
        let slot = match kind {
            ValueKind::Date => &mut self.date,
            ValueKind::Currency => &mut self.currency,
            ValueKind::Telephone => &mut self.telephone,
            ValueKind::Unknown => &mut self.unknown,
        };
        *slot += 1;
    }
}

/// Outcome of [`crate::Masker::mask`].
///
/// Every data row falls into exactly one of `masked`, `short_rows` or
/// `failed_rows`, so their sum equals `rows`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskSummary {
    column_index: usize,
    rows: usize,
    masked: usize,
    short_rows: usize,
    failed_rows: usize,
    kinds: KindCounts,
}

impl MaskSummary {
    pub(crate) fn new(column_index: usize) -> Self {
        Self {
            column_index,
            rows: 0,
            masked: 0,
            short_rows: 0,
            failed_rows: 0,
            kinds: KindCounts::default(),
        }
    }

    /// Zero-based position of the target column in the header.
    #[must_use]
    pub const fn column_index(&self) -> usize {
        self.column_index
    }

    /// Number of data rows read and written, excluding the header.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Rows whose target cell went through the fabricator.
    #[must_use]
    pub const fn masked(&self) -> usize {
        self.masked
    }

    /// Rows too short to contain the target column, written unchanged.
    #[must_use]
    pub const fn short_rows(&self) -> usize {
        self.short_rows
    }

    /// Rows whose processing failed, written unchanged.
    #[must_use]
    pub const fn failed_rows(&self) -> usize {
        self.failed_rows
    }

    /// Classification counts for masked rows.
    #[must_use]
    pub const fn kinds(&self) -> &KindCounts {
        &self.kinds
    }

    pub(crate) fn record_masked(&mut self, kind: ValueKind) {
        self.rows += 1;
        self.masked += 1;
        self.kinds.record(kind);
    }

    pub(crate) fn record_short(&mut self) {
        self.rows += 1;
        self.short_rows += 1;
    }

    pub(crate) fn record_failed(&mut self) {
        self.rows += 1;
        self.failed_rows += 1;
    }
}
