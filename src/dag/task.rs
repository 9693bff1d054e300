// src/dag/task.rs

//! Task and edge types the engine operates on.

use chrono::NaiveDate;

use crate::types::TaskId;

/// A single todo item as seen by the graph engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub due: NaiveDate,
    /// Number of days the task takes. Always >= 1 for validated snapshots.
    pub duration: u32,
    /// Opaque image reference carried along for the caller; never read here.
    pub image: Option<String>,
}

impl Task {
    /// New task with the default duration of one day.
    pub fn new(id: TaskId, title: impl Into<String>, due: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            due,
            duration: 1,
            image: None,
        }
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }
}

/// Directed edge: `dependent` cannot start until `dependency` has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyEdge {
    pub dependent: TaskId,
    pub dependency: TaskId,
}

impl DependencyEdge {
    pub fn new(dependent: TaskId, dependency: TaskId) -> Self {
        Self {
            dependent,
            dependency,
        }
    }
}
