// tests/graph_snapshot.rs
mod common;
use crate::common::builders::{base_date, SnapshotBuilder, TaskBuilder};
use crate::common::init_tracing;

use tododag::dag::{topological_order, DagGraph, DependencyEdge, Task};

#[test]
fn duplicate_edges_are_counted_once() {
    init_tracing();
    let graph = SnapshotBuilder::new()
        .with_task(TaskBuilder::new(1))
        .with_task(TaskBuilder::new(2).after(1).after(1))
        .with_edge(2, 1)
        .build();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.dependencies_of(2), &[1]);
    assert_eq!(graph.dependents_of(1), &[2]);
}

#[test]
fn duplicate_dangling_edges_are_counted_once() {
    init_tracing();
    let graph = SnapshotBuilder::new()
        .with_task(TaskBuilder::new(1))
        .with_task(TaskBuilder::new(2).after(1))
        // Unknown dependent, repeated.
        .with_edge(99, 1)
        .with_edge(99, 1)
        .with_edge(99, 1)
        // Unknown dependency, repeated.
        .with_edge(2, 42)
        .with_edge(2, 42)
        .build();

    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.dependents_of(1), &[2, 99]);
    assert_eq!(graph.dependencies_of(2), &[1, 42]);
    assert!(graph.dependents_of(99).is_empty());
    assert_eq!(topological_order(&graph), vec![1, 2]);
}

#[test]
fn later_task_with_same_id_replaces_earlier_one() {
    init_tracing();
    let due = base_date();
    let graph = DagGraph::new(
        [
            Task::new(1, "first", due),
            Task::new(2, "other", due),
            Task::new(1, "second", due).with_duration(4),
        ],
        [DependencyEdge::new(2, 1)],
    );

    assert_eq!(graph.len(), 2);
    assert_eq!(graph.task_ids().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(graph.task(1).map(|t| t.title.as_str()), Some("second"));
    assert_eq!(graph.task(1).map(|t| t.duration), Some(4));
}

#[test]
fn from_adjacency_matches_flat_edge_list() {
    init_tracing();
    let due = base_date();
    let graph = DagGraph::from_adjacency([
        (Task::new(1, "a", due), vec![]),
        (Task::new(2, "b", due), vec![1, 1]),
        (Task::new(3, "c", due), vec![1, 2]),
    ]);

    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.dependents_of(1), &[2, 3]);
    assert_eq!(graph.leaves().collect::<Vec<_>>(), vec![3]);
}
