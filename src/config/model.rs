// src/config/model.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::dag::{DagGraph, Task};
use crate::types::{ScheduleAnchor, TaskId};

/// Snapshot file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// project_start = "2026-10-01"
///
/// [task.1]
/// title = "Write outline"
/// due = "2026-10-05"
/// duration = 2
///
/// [task.2]
/// title = "Draft chapter"
/// due = "2026-10-12"
/// after = [1]
/// ```
///
/// Dates are quoted `YYYY-MM-DD` strings. All sections are optional at this
/// stage; validation rejects a file without tasks.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSnapshotFile {
    /// Global settings from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All tasks from `[task.<id>]`, keyed by the id as written.
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ConfigSection {
    /// Fixed date that tasks without dependencies start on.
    ///
    /// When absent, schedules are anchored at the time of the call.
    #[serde(default)]
    pub project_start: Option<NaiveDate>,
}

/// `[task.<id>]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TaskConfig {
    pub title: String,

    pub due: NaiveDate,

    /// Days of work; defaults to 1.
    #[serde(default = "default_duration")]
    pub duration: u32,

    /// Ids of the tasks this one depends on.
    #[serde(default)]
    pub after: Vec<TaskId>,

    /// Opaque image reference, carried through untouched.
    #[serde(default)]
    pub image: Option<String>,
}

fn default_duration() -> u32 {
    1
}

/// A validated snapshot file.
///
/// Task ids are parsed and unique, every `after` reference resolves, and the
/// dependency edges form a DAG.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    pub config: ConfigSection,
    pub tasks: BTreeMap<TaskId, TaskConfig>,
}

impl SnapshotFile {
    /// Only `config::validate` should call this.
    pub(crate) fn new_unchecked(config: ConfigSection, tasks: BTreeMap<TaskId, TaskConfig>) -> Self {
        Self { config, tasks }
    }

    /// Build the engine snapshot. Tasks are ordered by ascending id.
    pub fn graph(&self) -> DagGraph {
        DagGraph::from_adjacency(self.tasks.iter().map(|(id, cfg)| {
            let task = Task {
                id: *id,
                title: cfg.title.clone(),
                due: cfg.due,
                duration: cfg.duration,
                image: cfg.image.clone(),
            };
            (task, cfg.after.clone())
        }))
    }

    /// Anchor for tasks without dependencies.
    pub fn anchor(&self) -> ScheduleAnchor {
        self.config
            .project_start
            .map(ScheduleAnchor::from_date)
            .unwrap_or_default()
    }
}
