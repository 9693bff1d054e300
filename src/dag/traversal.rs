// src/dag/traversal.rs

//! Explicit-stack depth-first walk shared by the graph algorithms.
//!
//! Every algorithm in this crate is a post-order DFS over one adjacency
//! direction. Running it on a heap-allocated stack keeps long dependency
//! chains from exhausting the call stack.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::ControlFlow;

/// Per-node mark kept across one or more walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VisitState {
    /// On the active path.
    InProgress,
    /// Fully explored.
    Done,
}

/// Event reported to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step<N> {
    /// All neighbours of the node have been explored (post-order).
    Finished(N),
    /// `from` has an edge to `to`, which is still on the active path.
    BackEdge { from: N, to: N },
}

struct Frame<N> {
    node: N,
    pending: Vec<N>,
    cursor: usize,
}

/// Walk depth-first from `root`, calling `visit` on every post-order finish
/// and every back edge.
///
/// `marks` may be shared between walks: nodes already marked are not
/// re-entered, which is how callers cover disconnected components and reuse
/// memoized work. The visitor can stop the walk early with
/// `ControlFlow::Break`.
pub(crate) fn walk<N, F, V>(
    root: N,
    marks: &mut HashMap<N, VisitState>,
    mut neighbours: F,
    mut visit: V,
) -> ControlFlow<()>
where
    N: Copy + Eq + Hash,
    F: FnMut(N) -> Vec<N>,
    V: FnMut(Step<N>) -> ControlFlow<()>,
{
    if marks.contains_key(&root) {
        return ControlFlow::Continue(());
    }

    marks.insert(root, VisitState::InProgress);
    let mut stack = vec![Frame {
        node: root,
        pending: neighbours(root),
        cursor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let from = frame.node;

        let Some(&next) = frame.pending.get(frame.cursor) else {
            stack.pop();
            marks.insert(from, VisitState::Done);
            visit(Step::Finished(from))?;
            continue;
        };
        frame.cursor += 1;

        match marks.get(&next) {
            None => {
                marks.insert(next, VisitState::InProgress);
                stack.push(Frame {
                    node: next,
                    pending: neighbours(next),
                    cursor: 0,
                });
            }
            Some(VisitState::InProgress) => visit(Step::BackEdge { from, to: next })?,
            Some(VisitState::Done) => {}
        }
    }

    ControlFlow::Continue(())
}
