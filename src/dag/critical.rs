// src/dag/critical.rs

//! Critical-path analysis: forward and backward passes over the snapshot.

use std::collections::{BTreeSet, HashMap};
use std::ops::ControlFlow;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, trace};

use crate::dag::graph::DagGraph;
use crate::dag::schedule::ForwardPass;
use crate::dag::traversal::{walk, Step};
use crate::types::{add_days, sub_days, ScheduleAnchor, TaskId};

/// Earliest and latest start and finish of one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleTimes {
    pub earliest_start: DateTime<Utc>,
    pub earliest_finish: DateTime<Utc>,
    pub latest_start: DateTime<Utc>,
    pub latest_finish: DateTime<Utc>,
}

impl ScheduleTimes {
    /// How long the task can slip without delaying the project.
    pub fn slack(&self) -> TimeDelta {
        self.latest_start - self.earliest_start
    }

    /// Zero slack, allowing for sub-second jitter.
    pub fn is_critical(&self) -> bool {
        self.slack().num_milliseconds().abs() < CRITICAL_TOLERANCE_MS
    }
}

/// Slack below this is treated as zero.
const CRITICAL_TOLERANCE_MS: i64 = 1_000;

/// Result of a full critical-path analysis.
#[derive(Debug, Clone)]
pub struct CriticalPathAnalysis {
    pub anchor: DateTime<Utc>,
    /// Latest earliest-finish over all tasks; the anchor for an empty snapshot.
    pub project_finish: DateTime<Utc>,
    times: HashMap<TaskId, ScheduleTimes>,
}

impl CriticalPathAnalysis {
    pub fn times(&self, task: TaskId) -> Option<&ScheduleTimes> {
        self.times.get(&task)
    }

    /// Ids of zero-slack tasks, ascending.
    pub fn critical_tasks(&self) -> BTreeSet<TaskId> {
        self.times
            .iter()
            .filter(|(_, t)| t.is_critical())
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn is_critical(&self, task: TaskId) -> bool {
        self.times.get(&task).is_some_and(ScheduleTimes::is_critical)
    }
}

/// Ids of the tasks on the critical path, anchored at the current time.
pub fn critical_path(graph: &DagGraph) -> BTreeSet<TaskId> {
    critical_path_from(graph, ScheduleAnchor::Now.resolve())
}

/// Ids of the tasks on the critical path with roots starting at `anchor`.
pub fn critical_path_from(graph: &DagGraph, anchor: DateTime<Utc>) -> BTreeSet<TaskId> {
    analyze(graph, anchor).critical_tasks()
}

/// Run both passes and keep the per-task times.
pub fn analyze(graph: &DagGraph, anchor: DateTime<Utc>) -> CriticalPathAnalysis {
    // Forward pass.
    let earliest = ForwardPass::new(graph, anchor).run();
    let finish_of = |id: TaskId| -> Option<DateTime<Utc>> {
        let start = earliest.get(&id)?;
        Some(add_days(*start, graph.task(id)?.duration))
    };
    let project_finish = graph
        .task_ids()
        .filter_map(finish_of)
        .fold(anchor, |latest, finish| latest.max(finish));

    // Backward pass: a task must finish before any of its dependents' latest
    // start; tasks nothing depends on may finish as late as the project.
    let mut latest_starts: HashMap<TaskId, DateTime<Utc>> = HashMap::with_capacity(graph.len());
    let mut latest_finishes: HashMap<TaskId, DateTime<Utc>> = HashMap::with_capacity(graph.len());
    let mut marks = HashMap::with_capacity(graph.len());

    for id in graph.task_ids() {
        let _ = walk(
            id,
            &mut marks,
            |node| graph.known_dependents_of(node).collect(),
            |step| {
                if let Step::Finished(node) = step {
                    let latest_finish = graph
                        .known_dependents_of(node)
                        .filter_map(|dependent| latest_starts.get(&dependent).copied())
                        .min()
                        .unwrap_or(project_finish);
                    let duration = graph.task(node).map_or(0, |t| t.duration);
                    let latest_start = sub_days(latest_finish, duration);
                    trace!(task = node, %latest_start, %latest_finish, "latest times");
                    latest_finishes.insert(node, latest_finish);
                    latest_starts.insert(node, latest_start);
                }
                ControlFlow::Continue(())
            },
        );
    }

    let mut times = HashMap::with_capacity(graph.len());
    for id in graph.task_ids() {
        let (Some(earliest_start), Some(earliest_finish)) = (earliest.get(&id).copied(), finish_of(id)) else {
            continue;
        };
        let (Some(latest_start), Some(latest_finish)) =
            (latest_starts.get(&id).copied(), latest_finishes.get(&id).copied())
        else {
            continue;
        };
        times.insert(
            id,
            ScheduleTimes {
                earliest_start,
                earliest_finish,
                latest_start,
                latest_finish,
            },
        );
    }

    let analysis = CriticalPathAnalysis {
        anchor,
        project_finish,
        times,
    };
    debug!(
        tasks = graph.len(),
        critical = analysis.critical_tasks().len(),
        %project_finish,
        "critical path analysis complete"
    );
    analysis
}
