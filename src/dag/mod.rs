// src/dag/mod.rs

//! Dependency graph snapshot and the algorithms that run over it.
//!
//! - [`graph`] holds the read-only snapshot with forward and reverse edges.
//! - [`cycle`] checks whether a proposed edge set would close a cycle.
//! - [`topo`] orders tasks so dependencies come first.
//! - [`schedule`] computes earliest starts (forward pass).
//! - [`critical`] adds the backward pass and flags zero-slack tasks.

pub mod critical;
pub mod cycle;
pub mod graph;
pub mod schedule;
pub mod task;
pub mod topo;
pub(crate) mod traversal;

pub use critical::{analyze, critical_path, critical_path_from, CriticalPathAnalysis, ScheduleTimes};
pub use cycle::{find_cycle, is_cyclic, CycleEdge};
pub use graph::DagGraph;
pub use schedule::{earliest_start, earliest_start_from, ForwardPass};
pub use task::{DependencyEdge, Task};
pub use topo::topological_order;
