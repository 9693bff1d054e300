// src/config/validate.rs

use std::collections::BTreeMap;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::{RawSnapshotFile, SnapshotFile, TaskConfig};
use crate::errors::{Result, TododagError};
use crate::types::TaskId;

impl TryFrom<RawSnapshotFile> for SnapshotFile {
    type Error = crate::errors::TododagError;

    fn try_from(raw: RawSnapshotFile) -> std::result::Result<Self, Self::Error> {
        ensure_has_tasks(&raw)?;
        let tasks = parse_task_ids(raw.task)?;
        validate_tasks(&tasks)?;
        validate_task_dependencies(&tasks)?;
        validate_dag(&tasks)?;
        Ok(SnapshotFile::new_unchecked(raw.config, tasks))
    }
}

fn ensure_has_tasks(cfg: &RawSnapshotFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(TododagError::ConfigError(
            "snapshot must contain at least one [task.<id>] section".to_string(),
        ));
    }
    Ok(())
}

fn parse_task_ids(raw: BTreeMap<String, TaskConfig>) -> Result<BTreeMap<TaskId, TaskConfig>> {
    let mut tasks = BTreeMap::new();
    for (key, task) in raw {
        let id: TaskId = key.trim().parse().map_err(|_| {
            TododagError::ConfigError(format!("task key '{key}' is not an integer id"))
        })?;
        if tasks.insert(id, task).is_some() {
            return Err(TododagError::ConfigError(format!(
                "task id {id} is defined more than once"
            )));
        }
    }
    Ok(tasks)
}

/// Longest duration a snapshot may give a single task (100 years).
pub const MAX_DURATION_DAYS: u32 = 36_500;

fn validate_tasks(tasks: &BTreeMap<TaskId, TaskConfig>) -> Result<()> {
    for (id, task) in tasks.iter() {
        if task.title.trim().is_empty() {
            return Err(TododagError::ConfigError(format!(
                "task {id} must have a non-empty `title`"
            )));
        }
        if task.duration == 0 {
            return Err(TododagError::ConfigError(format!(
                "task {id} `duration` must be >= 1 day (got 0)"
            )));
        }
        if task.duration > MAX_DURATION_DAYS {
            return Err(TododagError::ConfigError(format!(
                "task {id} `duration` must be <= {MAX_DURATION_DAYS} days (got {})",
                task.duration
            )));
        }
    }
    Ok(())
}

fn validate_task_dependencies(tasks: &BTreeMap<TaskId, TaskConfig>) -> Result<()> {
    for (id, task) in tasks.iter() {
        for dep in task.after.iter() {
            if dep == id {
                return Err(TododagError::ConfigError(format!(
                    "task {id} cannot depend on itself in `after`"
                )));
            }
            if !tasks.contains_key(dep) {
                return Err(TododagError::ConfigError(format!(
                    "task {id} has unknown dependency {dep} in `after`"
                )));
            }
        }
    }
    Ok(())
}

fn validate_dag(tasks: &BTreeMap<TaskId, TaskConfig>) -> Result<()> {
    // Edge direction: dependency -> dependent.
    let mut graph: DiGraphMap<TaskId, ()> = DiGraphMap::new();

    for id in tasks.keys() {
        graph.add_node(*id);
    }

    for (id, task) in tasks.iter() {
        for dep in task.after.iter() {
            graph.add_edge(*dep, *id, ());
        }
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(TododagError::DagCycle(format!(
            "cycle detected in task DAG involving task {}",
            cycle.node_id()
        ))),
    }
}
