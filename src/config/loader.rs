// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{RawSnapshotFile, SnapshotFile};
use crate::errors::Result;

/// Load a snapshot file from a given path and return the raw `RawSnapshotFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (ids, references, cycles). Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawSnapshotFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    parse_str(&contents)
}

/// Parse snapshot TOML that is already in memory.
pub fn parse_str(contents: &str) -> Result<RawSnapshotFile> {
    let snapshot: RawSnapshotFile = toml::from_str(contents)?;
    Ok(snapshot)
}

/// Load a snapshot file from path and validate it.
///
/// Checks for:
/// - at least one task, integer and unique ids,
/// - non-empty titles and durations of at least one day,
/// - unknown or self-referencing `after` entries,
/// - dependency cycles.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<SnapshotFile> {
    let path = path.as_ref();
    let raw = load_from_path(path)?;
    let snapshot = SnapshotFile::try_from(raw)?;
    debug!(path = %path.display(), tasks = snapshot.tasks.len(), "loaded snapshot file");
    Ok(snapshot)
}

/// Default snapshot path: `Tododag.toml` in the current working directory.
pub fn default_snapshot_path() -> PathBuf {
    PathBuf::from("Tododag.toml")
}
