// src/config/mod.rs

//! Snapshot file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a snapshot file from disk (`loader.rs`).
//! - Validate ids, references and acyclicity (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_snapshot_path, load_and_validate, load_from_path, parse_str};
pub use model::{ConfigSection, RawSnapshotFile, SnapshotFile, TaskConfig};
