// src/engine/validation.rs

//! Validation of proposed dependency edges before the caller stores them.
//!
//! This is the request-flow check that sits next to cycle detection: the
//! graph must stay acyclic, and every dependency must be due strictly before
//! the task that depends on it.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::dag::{find_cycle, DagGraph};
use crate::errors::DependencyError;
use crate::types::TaskId;

/// A set of dependencies the caller wants to attach to a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyProposal {
    /// Task receiving the dependencies; `None` for a task not created yet.
    pub task: Option<TaskId>,
    /// The complete new dependency list (replaces any stored one).
    pub dependencies: Vec<TaskId>,
    /// Due date the task will have. When absent the date rule is skipped.
    pub due: Option<NaiveDate>,
}

impl DependencyProposal {
    pub fn new(task: Option<TaskId>, dependencies: Vec<TaskId>) -> Self {
        Self {
            task,
            dependencies,
            due: None,
        }
    }

    pub fn with_due(mut self, due: NaiveDate) -> Self {
        self.due = Some(due);
        self
    }
}

/// Check a proposal against the snapshot.
///
/// Checks run in order: every dependency exists, the task does not list
/// itself, no cycle is closed, then the due-date rule. The first failure is
/// returned.
pub fn validate_dependencies(
    proposal: &DependencyProposal,
    graph: &DagGraph,
) -> Result<(), DependencyError> {
    ensure_dependencies_exist(proposal, graph)?;
    ensure_no_self_dependency(proposal)?;
    ensure_acyclic(proposal, graph)?;
    ensure_due_before(proposal, graph)?;

    debug!(task = ?proposal.task, deps = ?proposal.dependencies, "dependency proposal accepted");
    Ok(())
}

fn ensure_dependencies_exist(
    proposal: &DependencyProposal,
    graph: &DagGraph,
) -> Result<(), DependencyError> {
    match proposal.dependencies.iter().find(|dep| !graph.contains(**dep)) {
        Some(dep) => Err(DependencyError::UnknownDependency(*dep)),
        None => Ok(()),
    }
}

fn ensure_no_self_dependency(proposal: &DependencyProposal) -> Result<(), DependencyError> {
    match proposal.task {
        Some(task) if proposal.dependencies.contains(&task) => {
            Err(DependencyError::SelfDependency(task))
        }
        _ => Ok(()),
    }
}

fn ensure_acyclic(proposal: &DependencyProposal, graph: &DagGraph) -> Result<(), DependencyError> {
    match find_cycle(proposal.task, &proposal.dependencies, graph) {
        Some(edge) => {
            info!(task = ?proposal.task, from = edge.from, to = edge.to, "rejecting circular dependency");
            Err(DependencyError::Cycle {
                task: proposal.task,
                from: edge.from,
                to: edge.to,
            })
        }
        None => Ok(()),
    }
}

fn ensure_due_before(proposal: &DependencyProposal, graph: &DagGraph) -> Result<(), DependencyError> {
    let Some(due) = proposal.due else {
        return Ok(());
    };

    for dep in proposal.dependencies.iter().filter_map(|id| graph.task(*id)) {
        if dep.due >= due {
            return Err(DependencyError::DueDateOrder {
                dependency: dep.id,
                title: dep.title.clone(),
                dependency_due: dep.due,
                due,
            });
        }
    }
    Ok(())
}
