//! The pre-trained regression model.
//!
//! The model is an external artifact: a JSON document holding the intercept
//! and coefficients of a linear regression fit offline. It is treated as an
//! opaque predict capability: nothing here trains, refits, or inspects it
//! beyond validating its shape at load time.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of features the model was fit on.
pub const FEATURE_COUNT: usize = 9;

/// Model input in the fixed order the model was fit on:
/// rank, platform code, year, genre code, publisher code, NA sales,
/// EU sales, JP sales, other sales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Assemble the vector in the model's feature order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rank: f64,
        platform_code: f64,
        year: f64,
        genre_code: f64,
        publisher_code: f64,
        na_sales: f64,
        eu_sales: f64,
        jp_sales: f64,
        other_sales: f64,
    ) -> Self {
        Self([
            rank,
            platform_code,
            year,
            genre_code,
            publisher_code,
            na_sales,
            eu_sales,
            jp_sales,
            other_sales,
        ])
    }
}

/// Serialized linear regression parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionModel {
    /// Model family tag, informational only.
    pub model: String,
    /// Fitted intercept.
    pub intercept: f64,
    /// One fitted coefficient per feature, in feature order.
    pub coefficients: Vec<f64>,
}

impl RegressionModel {
    /// Load the artifact from disk.
    ///
    /// # Errors
    /// Unreadable files propagate as IO errors; an undeserializable document
    /// or a wrong coefficient count is [`Error::Model`]. Both are fatal; a
    /// corrupt artifact terminates the page render.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let model: Self =
            serde_json::from_slice(&bytes).map_err(|e| Error::Model(e.to_string()))?;
        if model.coefficients.len() != FEATURE_COUNT {
            return Err(Error::Model(format!(
                "expected {FEATURE_COUNT} coefficients, found {}",
                model.coefficients.len()
            )));
        }
        Ok(model)
    }

    /// Predict global sales (millions of units) for one feature vector.
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.0)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(intercept: f64, coefficients: Vec<f64>) -> String {
        serde_json::to_string(&RegressionModel {
            model: "linear_regression".to_string(),
            intercept,
            coefficients,
        })
        .unwrap()
    }

    #[test]
    fn test_predict_is_intercept_plus_dot_product() {
        let model = RegressionModel {
            model: "linear_regression".to_string(),
            intercept: 0.5,
            coefficients: vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0],
        };
        let features = FeatureVector::new(1.0, 2.0, 2006.0, 3.0, 4.0, 0.1, 0.2, 0.3, 0.4);
        assert!((model.predict(&features) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_load_round_trips() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("model.json");
        fs::write(&path, artifact(0.25, vec![0.0; FEATURE_COUNT])).unwrap();

        let model = RegressionModel::load(&path).unwrap();
        assert_eq!(model.intercept, 0.25);
        assert_eq!(model.coefficients.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_load_rejects_wrong_coefficient_count() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("model.json");
        fs::write(&path, artifact(0.0, vec![1.0, 2.0])).unwrap();

        let err = RegressionModel::load(&path).unwrap_err();
        assert!(matches!(err, Error::Model(_)));
    }

    #[test]
    fn test_load_rejects_corrupt_artifact() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("model.json");
        fs::write(&path, b"not json").unwrap();

        let err = RegressionModel::load(&path).unwrap_err();
        assert!(matches!(err, Error::Model(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = RegressionModel::load(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
