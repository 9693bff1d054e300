// src/engine/core.rs

//! Stateless facade over the graph algorithms.
//!
//! The engine keeps no graph state between calls: every operation borrows a
//! snapshot owned by the caller and returns freshly computed values. The only
//! configuration is the [`ScheduleAnchor`] used for tasks without
//! dependencies, resolved once per call.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::dag::{self, CriticalPathAnalysis, DagGraph};
use crate::engine::report::ScheduleReport;
use crate::engine::validation::{validate_dependencies, DependencyProposal};
use crate::errors::DependencyError;
use crate::types::{ScheduleAnchor, TaskId};

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphEngine {
    anchor: ScheduleAnchor,
}

impl GraphEngine {
    pub fn new(anchor: ScheduleAnchor) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> ScheduleAnchor {
        self.anchor
    }

    pub fn is_cyclic(&self, task: Option<TaskId>, dependencies: &[TaskId], graph: &DagGraph) -> bool {
        dag::is_cyclic(task, dependencies, graph)
    }

    pub fn topological_order(&self, graph: &DagGraph) -> Vec<TaskId> {
        dag::topological_order(graph)
    }

    pub fn earliest_start(&self, task: TaskId, graph: &DagGraph) -> Option<DateTime<Utc>> {
        dag::earliest_start_from(task, graph, self.anchor.resolve())
    }

    pub fn critical_path(&self, graph: &DagGraph) -> BTreeSet<TaskId> {
        dag::critical_path_from(graph, self.anchor.resolve())
    }

    pub fn analyze(&self, graph: &DagGraph) -> CriticalPathAnalysis {
        dag::analyze(graph, self.anchor.resolve())
    }

    pub fn report(&self, graph: &DagGraph) -> ScheduleReport {
        ScheduleReport::build(graph, self.anchor.resolve())
    }

    pub fn validate(&self, proposal: &DependencyProposal, graph: &DagGraph) -> Result<(), DependencyError> {
        validate_dependencies(proposal, graph)
    }
}
