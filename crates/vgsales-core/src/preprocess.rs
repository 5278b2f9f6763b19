//! Dataset preprocessing.
//!
//! Turns the raw string rows into typed [`SalesRecord`]s. This is a pure
//! filter: no value is rewritten beyond type coercion, and row order among
//! survivors is preserved. Rows are dropped, never failed on; the counts
//! end up in [`CleanReport`] so the pages can surface them.

use serde::Serialize;

use crate::dataset::{Dataset, RawDataset, SalesRecord};

/// Row counts from one cleaning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    /// Rows in the raw dataset.
    pub input_rows: usize,
    /// Rows that survived cleaning.
    pub kept_rows: usize,
    /// Rows dropped because the year did not parse.
    pub dropped_missing_year: usize,
    /// Rows dropped because a sales column did not parse.
    pub dropped_missing_sales: usize,
}

impl CleanReport {
    /// Total number of dropped rows.
    pub fn dropped(&self) -> usize {
        self.dropped_missing_year + self.dropped_missing_sales
    }
}

/// Coerce a CSV field to a finite number. Empty and unparseable fields are
/// missing, mirroring a lenient to-numeric conversion.
pub(crate) fn coerce_numeric(field: &str) -> Option<f64> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce a year field. Years arrive as integers or float-formatted
/// integers ("2006.0") depending on how the CSV was exported.
pub(crate) fn coerce_year(field: &str) -> Option<i32> {
    coerce_numeric(field).map(|v| v as i32)
}

/// Clean a raw dataset.
///
/// Year is coerced first and rows without one are dropped; then the five
/// sales columns are coerced and rows missing any of them are dropped. A bad
/// rank is carried as `None`; it is never a reason to drop a row.
pub fn clean(raw: &RawDataset) -> (Dataset, CleanReport) {
    let mut report = CleanReport {
        input_rows: raw.len(),
        ..CleanReport::default()
    };

    let mut records = Vec::with_capacity(raw.len());
    for row in raw.records() {
        let Some(year) = coerce_year(&row.year) else {
            report.dropped_missing_year += 1;
            continue;
        };

        let sales = [
            coerce_numeric(&row.na_sales),
            coerce_numeric(&row.eu_sales),
            coerce_numeric(&row.jp_sales),
            coerce_numeric(&row.other_sales),
            coerce_numeric(&row.global_sales),
        ];
        let [Some(na), Some(eu), Some(jp), Some(other), Some(global)] = sales else {
            report.dropped_missing_sales += 1;
            continue;
        };

        records.push(SalesRecord {
            rank: row.rank.trim().parse().ok(),
            name: row.name.clone(),
            platform: row.platform.clone(),
            year,
            genre: row.genre.clone(),
            publisher: row.publisher.clone(),
            na_sales: na,
            eu_sales: eu,
            jp_sales: jp,
            other_sales: other,
            global_sales: global,
        });
    }

    report.kept_rows = records.len();
    if report.dropped() > 0 {
        tracing::debug!(
            "cleaning dropped {} of {} rows ({} missing year, {} missing sales)",
            report.dropped(),
            report.input_rows,
            report.dropped_missing_year,
            report.dropped_missing_sales
        );
    }

    (Dataset::new(records), report)
}
