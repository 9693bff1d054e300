// src/dag/schedule.rs

//! Earliest-start calculation (the forward pass).

use std::collections::HashMap;
use std::ops::ControlFlow;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::dag::graph::DagGraph;
use crate::dag::traversal::{walk, Step, VisitState};
use crate::types::{add_days, ScheduleAnchor, TaskId};

/// Earliest date `task` could start, anchored at the current time.
///
/// Returns `None` if the task is not in the snapshot. The value depends on
/// when it is called and is meant for display, not storage.
pub fn earliest_start(task: TaskId, graph: &DagGraph) -> Option<DateTime<Utc>> {
    earliest_start_from(task, graph, ScheduleAnchor::Now.resolve())
}

/// Earliest date `task` could start if tasks without dependencies start at
/// `anchor`.
pub fn earliest_start_from(
    task: TaskId,
    graph: &DagGraph,
    anchor: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let mut pass = ForwardPass::new(graph, anchor);
    pass.earliest_start(task)
}

/// Memoized forward pass over one snapshot.
///
/// A task's earliest start is the latest finish among its direct
/// dependencies, or the anchor if it has none. Finishes past the end of the
/// representable date range clamp to it. Values are computed on demand
/// and cached for the lifetime of the pass; only ancestors of the requested
/// tasks are visited.
#[derive(Debug)]
pub struct ForwardPass<'g> {
    graph: &'g DagGraph,
    anchor: DateTime<Utc>,
    marks: HashMap<TaskId, VisitState>,
    starts: HashMap<TaskId, DateTime<Utc>>,
}

impl<'g> ForwardPass<'g> {
    pub fn new(graph: &'g DagGraph, anchor: DateTime<Utc>) -> Self {
        Self {
            graph,
            anchor,
            marks: HashMap::new(),
            starts: HashMap::new(),
        }
    }

    /// Earliest start of `task`, computing it and its ancestors if needed.
    pub fn earliest_start(&mut self, task: TaskId) -> Option<DateTime<Utc>> {
        if !self.graph.contains(task) {
            return None;
        }
        if let Some(start) = self.starts.get(&task) {
            return Some(*start);
        }

        let graph = self.graph;
        let anchor = self.anchor;
        let starts = &mut self.starts;

        let _ = walk(
            task,
            &mut self.marks,
            |node| graph.known_dependencies_of(node).collect(),
            |step| {
                if let Step::Finished(node) = step {
                    // Dependencies still on the path (cyclic input) have no
                    // value yet and are skipped.
                    let start = graph
                        .known_dependencies_of(node)
                        .filter_map(|dep| {
                            let dep_start = starts.get(&dep)?;
                            let duration = graph.task(dep)?.duration;
                            Some(add_days(*dep_start, duration))
                        })
                        .fold(anchor, |latest, finish| latest.max(finish));
                    trace!(task = node, %start, "earliest start");
                    starts.insert(node, start);
                }
                ControlFlow::Continue(())
            },
        );

        self.starts.get(&task).copied()
    }

    /// Earliest finish of `task`: earliest start plus its duration.
    pub fn earliest_finish(&mut self, task: TaskId) -> Option<DateTime<Utc>> {
        let start = self.earliest_start(task)?;
        let duration = self.graph.task(task)?.duration;
        Some(add_days(start, duration))
    }

    /// Run the pass over every task and return all earliest starts.
    pub fn run(mut self) -> HashMap<TaskId, DateTime<Utc>> {
        for id in self.graph.task_ids() {
            self.earliest_start(id);
        }
        debug!(tasks = self.starts.len(), anchor = %self.anchor, "forward pass complete");
        self.starts
    }
}
