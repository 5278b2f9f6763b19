//! Dataset store.
//!
//! The dataset lives as a single flat CSV at a fixed path. Pages never share
//! in-memory state; every render re-reads this file from disk.

use std::fs;
use std::path::Path;

use crate::dataset::RawDataset;
use crate::error::Result;

/// Load the cached dataset if one exists.
///
/// Returns `Ok(None)` when no file is present; callers render a wait/prompt
/// state instead of treating that as fatal.
///
/// # Errors
/// Unreadable or unparseable files are fatal and propagate.
pub fn load(path: &Path) -> Result<Option<RawDataset>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(path)?;
    let raw = RawDataset::parse(&bytes)?;
    tracing::debug!("loaded dataset: {} rows from {}", raw.len(), path.display());
    Ok(Some(raw))
}

/// Persist an uploaded dataset and return its parse.
///
/// The bytes are parsed first so an unparseable upload is rejected loudly,
/// then written to `path` verbatim. Write failures surface immediately and
/// are never retried.
///
/// Concurrent uploads race on this path unguarded: last writer wins, no
/// locking, no atomic rename. Acceptable for a single-user local tool.
///
/// # Errors
/// Returns parse errors for invalid CSV and IO errors for failed writes.
pub fn save_upload(path: &Path, bytes: &[u8]) -> Result<RawDataset> {
    let raw = RawDataset::parse(bytes)?;
    fs::write(path, bytes)?;
    tracing::info!("cached dataset: {} rows at {}", raw.len(), path.display());
    Ok(raw)
}
