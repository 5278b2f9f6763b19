//! Prediction adapter.
//!
//! Bridges the prediction form and the regression model: maps the selected
//! category labels to their encoded values, assembles the fixed-order
//! feature vector, and invokes the model. As a side product it builds the
//! year-indexed historical series for the same platform/genre/publisher
//! combination, matched against the raw dataset with normalized labels.

use serde::{Deserialize, Serialize};

use crate::dataset::RawDataset;
use crate::labels;
use crate::model::{FeatureVector, RegressionModel};
use crate::preprocess::{coerce_numeric, coerce_year};

/// The prediction form's inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub rank: u32,
    pub platform: String,
    pub year: i32,
    pub genre: String,
    pub publisher: String,
    pub na_sales: f64,
    pub eu_sales: f64,
    pub jp_sales: f64,
    pub other_sales: f64,
}

/// One point of the historical overlay series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlySales {
    pub year: i32,
    pub global_sales: f64,
}

/// A prediction plus the historical context to chart it against.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    /// Estimated global sales, millions of units.
    pub predicted_global_sales: f64,
    /// Historical global sales per year for the selected
    /// platform/genre/publisher combination, chronological. Empty when no
    /// historical rows match; callers report "no historical data" instead
    /// of charting an empty series.
    pub history: Vec<YearlySales>,
}

/// Run the model for one hypothetical title.
///
/// The *unmodified* labels go through the encoder tables (they come from
/// picklists generated from those same tables, so lookup failure panics as
/// an invariant violation). The normalized labels are only used to match
/// historical rows.
pub fn predict(
    model: &RegressionModel,
    input: &PredictionInput,
    raw: &RawDataset,
) -> PredictionOutcome {
    let platform_code = labels::PLATFORMS.require_code(&input.platform);
    let genre_code = labels::GENRES.require_code(&input.genre);
    let publisher_code = labels::PUBLISHERS.require_code(&input.publisher);

    let features = FeatureVector::new(
        f64::from(input.rank),
        f64::from(platform_code),
        f64::from(input.year),
        f64::from(genre_code),
        f64::from(publisher_code),
        input.na_sales,
        input.eu_sales,
        input.jp_sales,
        input.other_sales,
    );

    PredictionOutcome {
        predicted_global_sales: model.predict(&features),
        history: historical_series(raw, input),
    }
}

/// Uppercased, whitespace-trimmed form used for historical matching.
fn normalize(label: &str) -> String {
    label.trim().to_uppercase()
}

/// Sum historical global sales by year for rows whose normalized platform,
/// genre and publisher all match the selection. Runs on the raw dataset;
/// rows whose year or global sales do not parse are skipped.
fn historical_series(raw: &RawDataset, input: &PredictionInput) -> Vec<YearlySales> {
    let platform = normalize(&input.platform);
    let genre = normalize(&input.genre);
    let publisher = normalize(&input.publisher);

    let mut by_year: Vec<YearlySales> = Vec::new();
    for row in raw.records() {
        if normalize(&row.platform) != platform
            || normalize(&row.genre) != genre
            || normalize(&row.publisher) != publisher
        {
            continue;
        }
        let (Some(year), Some(global)) = (coerce_year(&row.year), coerce_numeric(&row.global_sales))
        else {
            continue;
        };
        match by_year.iter().position(|p| p.year == year) {
            Some(at) => by_year[at].global_sales += global,
            None => by_year.push(YearlySales {
                year,
                global_sales: global,
            }),
        }
    }

    by_year.sort_by_key(|p| p.year);
    by_year
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RawRecord;
    use crate::model::FEATURE_COUNT;

    fn raw_row(platform: &str, genre: &str, publisher: &str, year: &str, global: &str) -> RawRecord {
        RawRecord {
            rank: "1".to_string(),
            name: "Game".to_string(),
            platform: platform.to_string(),
            year: year.to_string(),
            genre: genre.to_string(),
            publisher: publisher.to_string(),
            na_sales: "0.0".to_string(),
            eu_sales: "0.0".to_string(),
            jp_sales: "0.0".to_string(),
            other_sales: "0.0".to_string(),
            global_sales: global.to_string(),
        }
    }

    fn input() -> PredictionInput {
        PredictionInput {
            rank: 10,
            platform: "Wii".to_string(),
            year: 2010,
            genre: "Sports".to_string(),
            publisher: "Nintendo".to_string(),
            na_sales: 1.0,
            eu_sales: 2.0,
            jp_sales: 3.0,
            other_sales: 4.0,
        }
    }

    fn identity_model() -> RegressionModel {
        RegressionModel {
            model: "linear_regression".to_string(),
            intercept: 0.0,
            coefficients: vec![1.0; FEATURE_COUNT],
        }
    }

    #[test]
    fn test_feature_vector_order() {
        let model = RegressionModel {
            model: "linear_regression".to_string(),
            intercept: 0.0,
            // Picks out the platform code (index 1) and year (index 2).
            coefficients: vec![0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        };
        let outcome = predict(&model, &input(), &RawDataset::default());
        let expected = f64::from(labels::PLATFORMS.require_code("Wii")) + 2010.0;
        assert!((outcome.predicted_global_sales - expected).abs() < 1e-9);
    }

    #[test]
    fn test_history_matches_normalized_labels() {
        let raw = RawDataset::from_records(vec![
            // Differently-cased and padded labels still match.
            raw_row(" wii ", "SPORTS", "nintendo", "2006", "10.0"),
            raw_row("Wii", "Sports", "Nintendo", "2006", "5.0"),
            raw_row("Wii", "Racing", "Nintendo", "2006", "99.0"),
            raw_row("PS2", "Sports", "Nintendo", "2006", "99.0"),
        ]);
        let outcome = predict(&identity_model(), &input(), &raw);
        assert_eq!(
            outcome.history,
            vec![YearlySales {
                year: 2006,
                global_sales: 15.0
            }]
        );
    }

    #[test]
    fn test_history_is_chronological() {
        let raw = RawDataset::from_records(vec![
            raw_row("Wii", "Sports", "Nintendo", "2010", "1.0"),
            raw_row("Wii", "Sports", "Nintendo", "2006", "2.0"),
            raw_row("Wii", "Sports", "Nintendo", "2008", "3.0"),
        ]);
        let outcome = predict(&identity_model(), &input(), &raw);
        let years: Vec<_> = outcome.history.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2006, 2008, 2010]);
    }

    #[test]
    fn test_history_skips_unparseable_rows() {
        let raw = RawDataset::from_records(vec![
            raw_row("Wii", "Sports", "Nintendo", "N/A", "1.0"),
            raw_row("Wii", "Sports", "Nintendo", "2006", "bad"),
            raw_row("Wii", "Sports", "Nintendo", "2006", "2.5"),
        ]);
        let outcome = predict(&identity_model(), &input(), &raw);
        assert_eq!(
            outcome.history,
            vec![YearlySales {
                year: 2006,
                global_sales: 2.5
            }]
        );
    }

    #[test]
    fn test_no_matching_history_is_empty() {
        let raw = RawDataset::from_records(vec![raw_row("PS2", "Racing", "Sega", "2006", "1.0")]);
        let outcome = predict(&identity_model(), &input(), &raw);
        assert!(outcome.history.is_empty());
    }
}
