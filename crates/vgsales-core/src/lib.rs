//! Core engine for the video game sales dashboard.
//!
//! This crate provides:
//! - Dataset store (flat CSV cache, upload-once semantics)
//! - Preprocessing with drop counts
//! - Group-by aggregation behind every chart panel
//! - Composable membership filters
//! - One-way ANOVA, Pearson correlation, distribution summaries
//! - Label encoder tables and the regression model adapter

pub mod aggregate;
pub mod context;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod labels;
pub mod model;
pub mod paths;
pub mod predict;
pub mod preprocess;
pub mod stats;
pub mod store;

pub use aggregate::{AggregateRow, AggregateSpec, Dimension, GroupKey, SortOrder, aggregate};
pub use context::PageContext;
pub use dataset::{Dataset, RawDataset, RawRecord, SalesColumn, SalesRecord};
pub use error::{Error, Result};
pub use filter::FilterSpec;
pub use labels::LabelMap;
pub use model::{FEATURE_COUNT, FeatureVector, RegressionModel};
pub use paths::{DATASET_FILE, DataPaths, MODEL_FILE};
pub use predict::{PredictionInput, PredictionOutcome, YearlySales};
pub use preprocess::{CleanReport, clean};
pub use stats::{
    AnovaResult, AnovaRow, CorrelationMatrix, DistributionStats, SIGNIFICANCE_LEVEL, anova,
    correlation, distribution_by_platform,
};
