//! Filter engine.
//!
//! Zero or more membership predicates over the categorical columns, ANDed
//! together. An empty allow-list means "no restriction on that column", so
//! an entirely empty spec returns the dataset unchanged.

use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, SalesRecord};

/// Allow-lists for the four filterable columns. Values match exactly against
/// the dataset, the way a picklist built from the dataset's own distinct
/// values would.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    pub platforms: Vec<String>,
    pub years: Vec<i32>,
    pub genres: Vec<String>,
    pub publishers: Vec<String>,
}

impl FilterSpec {
    /// Whether no predicate is set at all.
    pub fn is_unrestricted(&self) -> bool {
        self.platforms.is_empty()
            && self.years.is_empty()
            && self.genres.is_empty()
            && self.publishers.is_empty()
    }

    /// Whether a record satisfies every predicate.
    pub fn matches(&self, record: &SalesRecord) -> bool {
        allowed(&self.platforms, &record.platform)
            && (self.years.is_empty() || self.years.contains(&record.year))
            && allowed(&self.genres, &record.genre)
            && allowed(&self.publishers, &record.publisher)
    }
}

fn allowed(list: &[String], value: &str) -> bool {
    list.is_empty() || list.iter().any(|v| v == value)
}

/// Apply the filter, preserving row order.
///
/// The result is an owned dataset so further aggregation and statistics run
/// without re-reading from disk.
pub fn apply(data: &Dataset, spec: &FilterSpec) -> Dataset {
    let records = data
        .records()
        .iter()
        .filter(|r| spec.matches(r))
        .cloned()
        .collect();
    Dataset::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, platform: &str, year: i32) -> SalesRecord {
        SalesRecord {
            rank: None,
            name: name.to_string(),
            platform: platform.to_string(),
            year,
            genre: "Sports".to_string(),
            publisher: "Nintendo".to_string(),
            na_sales: 0.0,
            eu_sales: 0.0,
            jp_sales: 0.0,
            other_sales: 0.0,
            global_sales: 1.0,
        }
    }

    fn sample() -> Dataset {
        Dataset::new(vec![record("A", "X", 2000), record("B", "Y", 2000)])
    }

    #[test]
    fn test_empty_spec_is_identity() {
        let data = sample();
        let filtered = apply(&data, &FilterSpec::default());
        assert_eq!(filtered, data);
    }

    #[test]
    fn test_platform_filter_selects_matching_row() {
        let data = sample();
        let spec = FilterSpec {
            platforms: vec!["X".to_string()],
            ..FilterSpec::default()
        };
        let filtered = apply(&data, &spec);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].name, "A");
    }

    #[test]
    fn test_predicates_are_anded() {
        let data = Dataset::new(vec![
            record("A", "X", 2000),
            record("B", "X", 2001),
            record("C", "Y", 2000),
        ]);
        let spec = FilterSpec {
            platforms: vec!["X".to_string()],
            years: vec![2001],
            ..FilterSpec::default()
        };
        let filtered = apply(&data, &spec);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].name, "B");
    }

    #[test]
    fn test_result_is_subset_satisfying_predicates() {
        let data = Dataset::new(vec![
            record("A", "X", 2000),
            record("B", "Y", 2001),
            record("C", "X", 2002),
        ]);
        let spec = FilterSpec {
            platforms: vec!["X".to_string()],
            ..FilterSpec::default()
        };
        let filtered = apply(&data, &spec);
        for row in filtered.records() {
            assert!(spec.matches(row));
            assert!(data.records().contains(row));
        }
    }

    #[test]
    fn test_multiple_allowed_values() {
        let data = Dataset::new(vec![
            record("A", "X", 2000),
            record("B", "Y", 2000),
            record("C", "Z", 2000),
        ]);
        let spec = FilterSpec {
            platforms: vec!["X".to_string(), "Z".to_string()],
            ..FilterSpec::default()
        };
        let filtered = apply(&data, &spec);
        let names: Vec<_> = filtered.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_spec_deserializes_from_partial_json() {
        let spec: FilterSpec = serde_json::from_str(r#"{"platforms": ["Wii"]}"#).unwrap();
        assert_eq!(spec.platforms, vec!["Wii"]);
        assert!(spec.years.is_empty());

        let empty: FilterSpec = serde_json::from_str("{}").unwrap();
        assert!(empty.is_unrestricted());
    }
}
