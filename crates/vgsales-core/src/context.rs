//! Per-render page context.
//!
//! Pages share no in-memory state. Each page render loads the dataset from
//! the store, cleans it, works on the result, and discards it at the end of
//! the render cycle. This context object is that lifecycle made explicit.

use crate::dataset::{Dataset, RawDataset};
use crate::error::Result;
use crate::paths::DataPaths;
use crate::preprocess::{self, CleanReport};
use crate::store;

/// Everything a page render needs, reloaded from disk at the start of the
/// cycle.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// The dataset as uploaded, for previews and historical matching.
    pub raw: RawDataset,
    /// The cleaned dataset, for aggregation, filtering and statistics.
    pub data: Dataset,
    /// Counts from the cleaning pass.
    pub report: CleanReport,
}

impl PageContext {
    /// Load and clean the cached dataset.
    ///
    /// Returns `Ok(None)` when no dataset has been uploaded yet; the page
    /// renders its wait/prompt state.
    ///
    /// # Errors
    /// Propagates store failures (unreadable or unparseable cache file).
    pub fn load(paths: &DataPaths) -> Result<Option<Self>> {
        let Some(raw) = store::load(&paths.dataset_path())? else {
            return Ok(None);
        };
        let (data, report) = preprocess::clean(&raw);
        Ok(Some(Self { raw, data, report }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SAMPLE_CSV: &str = "\
Rank,Name,Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales
1,Wii Sports,Wii,2006,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74
2,Broken Row,NES,N/A,Platform,Nintendo,1.0,1.0,1.0,1.0,4.0
";

    #[test]
    fn test_load_without_dataset_is_none() {
        let temp = tempfile::TempDir::new().unwrap();
        let paths = DataPaths::new(temp.path());
        assert!(PageContext::load(&paths).unwrap().is_none());
    }

    #[test]
    fn test_load_cleans_and_reports() {
        let temp = tempfile::TempDir::new().unwrap();
        let paths = DataPaths::new(temp.path());
        fs::write(paths.dataset_path(), SAMPLE_CSV).unwrap();

        let ctx = PageContext::load(&paths).unwrap().unwrap();
        assert_eq!(ctx.raw.len(), 2);
        assert_eq!(ctx.data.len(), 1);
        assert_eq!(ctx.report.dropped_missing_year, 1);
    }
}
