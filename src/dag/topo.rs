// src/dag/topo.rs

use std::collections::HashMap;
use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::dag::graph::DagGraph;
use crate::dag::traversal::{walk, Step};
use crate::types::TaskId;

/// Order all tasks so that every dependency comes before its dependents.
///
/// Depth-first post-order, starting from each task in snapshot order, so the
/// result is deterministic and covers disconnected tasks. On a cyclic
/// snapshot the back edges are ignored: the result still lists every task
/// once, but the order is not meaningful.
pub fn topological_order(graph: &DagGraph) -> Vec<TaskId> {
    let mut order = Vec::with_capacity(graph.len());
    let mut marks = HashMap::with_capacity(graph.len());
    let mut back_edges = 0usize;

    for id in graph.task_ids() {
        let _ = walk(
            id,
            &mut marks,
            |node| graph.known_dependencies_of(node).collect(),
            |step| {
                match step {
                    Step::Finished(node) => order.push(node),
                    Step::BackEdge { from, to } => {
                        back_edges += 1;
                        trace!(from, to, "ignoring back edge during topological sort");
                    }
                }
                ControlFlow::Continue(())
            },
        );
    }

    debug!(tasks = order.len(), back_edges, "topological order computed");
    order
}
