//! Data directory layout.
//!
//! Resolves the fixed file locations shared by every page: the cached
//! dataset CSV and the serialized regression model. Keeping the resolution
//! in one place ensures the CLI and server agree on where the files live.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// File name of the cached dataset CSV inside the data directory.
pub const DATASET_FILE: &str = "video_game_sales_dataset.csv";

/// File name of the serialized regression model inside the data directory.
pub const MODEL_FILE: &str = "sales_prediction_model.json";

/// Fixed file locations for a dashboard data directory.
///
/// ```text
/// <data_dir>/
/// ├── video_game_sales_dataset.csv   # uploaded dataset, written once
/// └── sales_prediction_model.json    # pre-trained model, read-only
/// ```
#[derive(Debug, Clone)]
pub struct DataPaths {
    /// Directory holding the dataset and model files.
    pub data_dir: PathBuf,
}

impl DataPaths {
    /// Create a layout rooted at `data_dir`. Does not touch the filesystem.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the cached dataset CSV.
    pub fn dataset_path(&self) -> PathBuf {
        self.data_dir.join(DATASET_FILE)
    }

    /// Path of the serialized regression model.
    pub fn model_path(&self) -> PathBuf {
        self.data_dir.join(MODEL_FILE)
    }

    /// Create the data directory if it does not exist yet.
    ///
    /// # Errors
    /// Returns an error if directory creation fails.
    pub fn ensure_exists(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new(Path::new("."))
    }
}
