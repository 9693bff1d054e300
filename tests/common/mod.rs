#![allow(dead_code)]

pub use tododag_test_utils::{builders, fixed_anchor, init_tracing};

use tododag::dag::DagGraph;
use tododag_test_utils::builders::{SnapshotBuilder, TaskBuilder};

/// A(2) depends on B(3), which depends on C(1).
pub fn chain() -> DagGraph {
    SnapshotBuilder::new()
        .with_task(TaskBuilder::new(1).title("A").duration(2).after(2))
        .with_task(TaskBuilder::new(2).title("B").duration(3).after(3))
        .with_task(TaskBuilder::new(3).title("C").duration(1))
        .build()
}

/// 1 (1 day) fans out to 2 (2 days) and 3 (5 days).
pub fn fan_out() -> DagGraph {
    SnapshotBuilder::new()
        .with_task(TaskBuilder::new(1).duration(1))
        .with_task(TaskBuilder::new(2).duration(2).after(1))
        .with_task(TaskBuilder::new(3).duration(5).after(1))
        .build()
}
