//! Aggregation engine.
//!
//! Group-by sums over the cleaned dataset, the shared basis for every chart
//! panel. Groups are accumulated in first-seen input order, then presented
//! either in ascending key order (the chronological/alphabetical chart axes)
//! or descending by value (the top-N rankings), with first-seen order as the
//! stable tie-break.

use std::cmp::Ordering;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::dataset::{Dataset, SalesColumn, SalesRecord};

/// Grouping dimensions supported by the chart panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Year,
    Name,
    Platform,
    Genre,
    Publisher,
}

impl Dimension {
    fn key_of(self, record: &SalesRecord) -> GroupKey {
        match self {
            Dimension::Year => GroupKey::Year(record.year),
            Dimension::Name => GroupKey::Label(record.name.clone()),
            Dimension::Platform => GroupKey::Label(record.platform.clone()),
            Dimension::Genre => GroupKey::Label(record.genre.clone()),
            Dimension::Publisher => GroupKey::Label(record.publisher.clone()),
        }
    }
}

/// A group-by key: a year for the time axis, a label otherwise.
///
/// Serializes untagged, so chart series carry plain numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum GroupKey {
    Year(i32),
    Label(String),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Year(year) => write!(f, "{year}"),
            GroupKey::Label(label) => f.write_str(label),
        }
    }
}

/// Presentation order of the aggregated groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending key order: chronological for years, lexicographic for
    /// labels.
    ByKey,
    /// Descending by aggregate value; ties keep first-seen input order.
    ValueDesc,
}

/// What to aggregate and how to present it.
#[derive(Debug, Clone)]
pub struct AggregateSpec {
    pub dimension: Dimension,
    pub metric: SalesColumn,
    pub top_n: Option<usize>,
    pub sort: SortOrder,
}

impl AggregateSpec {
    /// Sum of global sales per group, every group, ascending key order.
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            metric: SalesColumn::GlobalSales,
            top_n: None,
            sort: SortOrder::ByKey,
        }
    }

    /// Present groups in descending value order.
    pub fn sorted_desc(mut self) -> Self {
        self.sort = SortOrder::ValueDesc;
        self
    }

    /// Keep only the first `n` groups after sorting.
    pub fn top_n(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }
}

/// One aggregated group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub key: GroupKey,
    pub value: f64,
}

/// Aggregate the dataset per `spec`.
///
/// An empty dataset yields an empty result, not an error. The sum of all
/// group values equals the sum of the metric over the whole dataset.
pub fn aggregate(data: &Dataset, spec: &AggregateSpec) -> Vec<AggregateRow> {
    let mut index: FxHashMap<GroupKey, usize> = FxHashMap::default();
    let mut rows: Vec<AggregateRow> = Vec::new();

    for record in data.records() {
        let key = spec.dimension.key_of(record);
        let value = spec.metric.value(record);
        match index.get(&key) {
            Some(&at) => rows[at].value += value,
            None => {
                index.insert(key.clone(), rows.len());
                rows.push(AggregateRow { key, value });
            }
        }
    }

    match spec.sort {
        SortOrder::ByKey => rows.sort_by(|a, b| a.key.cmp(&b.key)),
        // Sales values are finite after cleaning; stable sort keeps the
        // first-seen order on ties.
        SortOrder::ValueDesc => {
            rows.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
        }
    }

    if let Some(n) = spec.top_n {
        rows.truncate(n);
    }

    rows
}
