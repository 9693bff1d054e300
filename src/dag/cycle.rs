// src/dag/cycle.rs

//! Cycle detection for proposed dependency edges.

use std::collections::HashMap;
use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::dag::graph::DagGraph;
use crate::dag::traversal::{walk, Step};
use crate::types::TaskId;

/// Node in the cycle search. A task that does not exist yet has no id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Node {
    Proposed,
    Existing(TaskId),
}

/// The edge that closed a cycle: `from` depends on `to`, and `to` was already
/// on the dependency path leading to `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleEdge {
    pub from: TaskId,
    pub to: TaskId,
}

/// Whether giving `candidate` exactly the dependencies in `dependencies`
/// would produce a cycle reachable from it.
///
/// `candidate` is `None` for a task that has not been created yet. For an
/// existing task its stored dependencies are ignored in favour of the
/// proposed set; every other task keeps its stored edges.
pub fn is_cyclic(candidate: Option<TaskId>, dependencies: &[TaskId], graph: &DagGraph) -> bool {
    find_cycle(candidate, dependencies, graph).is_some()
}

/// Like [`is_cyclic`], but returns the edge that closed the cycle.
pub fn find_cycle(
    candidate: Option<TaskId>,
    dependencies: &[TaskId],
    graph: &DagGraph,
) -> Option<CycleEdge> {
    let root = candidate.map_or(Node::Proposed, Node::Existing);
    let resolve = |id: TaskId| {
        // The candidate itself is always traversable, even before it exists.
        (Some(id) == candidate || graph.contains(id)).then_some(Node::Existing(id))
    };

    let neighbours = |node: Node| -> Vec<Node> {
        match node {
            Node::Existing(id) if Some(id) != candidate => graph
                .dependencies_of(id)
                .iter()
                .filter_map(|dep| resolve(*dep))
                .collect(),
            _ => dependencies.iter().filter_map(|dep| resolve(*dep)).collect(),
        }
    };

    let mut found = None;
    let mut marks = HashMap::new();
    let _ = walk(root, &mut marks, neighbours, |step| match step {
        Step::BackEdge { from, to } => {
            trace!(?from, ?to, "back edge reached");
            found = match (from, to) {
                (Node::Existing(from), Node::Existing(to)) => Some(CycleEdge { from, to }),
                // Nothing can depend on a task that does not exist yet, so
                // the proposed node is never the target of a back edge.
                _ => None,
            };
            ControlFlow::Break(())
        }
        Step::Finished(_) => ControlFlow::Continue(()),
    });

    debug!(
        ?candidate,
        proposed = dependencies.len(),
        cyclic = found.is_some(),
        "cycle check complete"
    );
    found
}
