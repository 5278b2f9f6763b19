//! Error types for vgsales-core.

use thiserror::Error;

/// Result type for vgsales-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vgsales-core.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the dataset CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required dataset column is absent.
    #[error("dataset is missing required column: {0}")]
    MissingColumn(String),

    /// The model artifact could not be read or has the wrong shape.
    #[error("invalid model artifact: {0}")]
    Model(String),

    /// ANOVA needs at least two platform groups.
    #[error("at least two platform groups are required for ANOVA, found {found}")]
    InsufficientGroups {
        /// Number of distinct groups actually present.
        found: usize,
    },

    /// ANOVA needs more observations than groups.
    #[error("not enough observations to compare platform groups")]
    InsufficientData,

    /// A statistic was requested over zero rows.
    #[error("no rows to analyze")]
    EmptyDataset,

    /// A statistical computation could not be set up.
    #[error("statistics error: {0}")]
    Statistics(String),
}
