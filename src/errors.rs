// src/errors.rs

//! Crate-wide error aliases and helpers.

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::TaskId;

#[derive(Error, Debug)]
pub enum TododagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cycle detected in DAG: {0}")]
    DagCycle(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Dependency rejected: {0}")]
    Dependency(#[from] DependencyError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Reasons a proposed set of dependency edges is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DependencyError {
    /// A dependency id does not resolve to a task in the snapshot.
    #[error("dependency {0} does not exist")]
    UnknownDependency(TaskId),

    #[error("task {0} cannot depend on itself")]
    SelfDependency(TaskId),

    /// Accepting the edges would close a cycle; `from -> to` is the edge that
    /// reached a task already on the dependency path. `task` is `None` for a
    /// task that has not been created yet.
    #[error("circular dependency detected: task {from} depends on task {to}, which already depends on it")]
    Cycle {
        task: Option<TaskId>,
        from: TaskId,
        to: TaskId,
    },

    /// The dependency is not due strictly before the dependent.
    #[error("\"{title}\" (task {dependency}) is due {dependency_due} which is not before this task's due date {due}")]
    DueDateOrder {
        dependency: TaskId,
        title: String,
        dependency_due: NaiveDate,
        due: NaiveDate,
    },
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TododagError>;
