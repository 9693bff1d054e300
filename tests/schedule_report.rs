// tests/schedule_report.rs
mod common;
use crate::common::builders::{SnapshotBuilder, TaskBuilder};
use crate::common::{chain, fan_out, fixed_anchor, init_tracing};

use std::collections::BTreeSet;

use chrono::{TimeDelta, Utc};
use tododag::engine::{DependencyProposal, GraphEngine, ScheduleReport};
use tododag::types::ScheduleAnchor;

#[test]
fn rows_follow_topological_order_with_depths() {
    init_tracing();
    let report = ScheduleReport::build(&chain(), fixed_anchor());

    let ids: Vec<i64> = report.rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);

    let depths: Vec<usize> = report.rows.iter().map(|r| r.depth).collect();
    assert_eq!(depths, vec![0, 1, 2]);

    let a = report.row(1).expect("row for A");
    assert_eq!(a.depends_on, vec!["B".to_string()]);
    assert!(a.critical);
}

#[test]
fn depth_uses_the_longest_dependency_chain() {
    init_tracing();
    // 4 depends directly on 1 and, through 3 and 2, on 1 again.
    let graph = SnapshotBuilder::new()
        .with_task(TaskBuilder::new(1))
        .with_task(TaskBuilder::new(2).after(1))
        .with_task(TaskBuilder::new(3).after(2))
        .with_task(TaskBuilder::new(4).after(1).after(3))
        .build();
    let report = ScheduleReport::build(&graph, fixed_anchor());

    assert_eq!(report.row(4).map(|r| r.depth), Some(3));
}

#[test]
fn report_carries_slack_and_project_finish() {
    init_tracing();
    let anchor = fixed_anchor();
    let report = ScheduleReport::build(&fan_out(), anchor);

    assert_eq!(report.project_finish, anchor + TimeDelta::days(6));
    assert_eq!(report.row(2).map(|r| r.slack), Some(TimeDelta::days(3)));

    let critical: BTreeSet<i64> = report.critical_rows().map(|r| r.id).collect();
    assert_eq!(critical, BTreeSet::from([1, 3]));
}

#[test]
fn engine_with_fixed_anchor_is_reproducible() {
    init_tracing();
    let anchor = fixed_anchor();
    let engine = GraphEngine::new(ScheduleAnchor::Fixed(anchor));
    let graph = chain();

    assert_eq!(engine.earliest_start(1, &graph), Some(anchor + TimeDelta::days(4)));
    assert_eq!(engine.earliest_start(1, &graph), engine.earliest_start(1, &graph));
    assert_eq!(engine.critical_path(&graph), BTreeSet::from([1, 2, 3]));
    assert_eq!(engine.topological_order(&graph), vec![3, 2, 1]);
    assert!(engine.is_cyclic(Some(3), &[1], &graph));
    assert!(engine.validate(&DependencyProposal::new(Some(3), vec![1]), &graph).is_err());
    assert_eq!(engine.analyze(&graph).project_finish, anchor + TimeDelta::days(6));
    assert_eq!(engine.report(&graph).rows.len(), 3);
}

#[test]
fn default_engine_anchors_at_now() {
    init_tracing();
    let engine = GraphEngine::default();
    assert_eq!(engine.anchor(), ScheduleAnchor::Now);

    let before = Utc::now();
    let report = engine.report(&fan_out());
    assert!(report.anchor >= before && report.anchor <= Utc::now());
}

#[test]
fn anchor_parses_from_text() {
    assert_eq!("now".parse::<ScheduleAnchor>(), Ok(ScheduleAnchor::Now));

    let anchor: ScheduleAnchor = "2026-10-01".parse().expect("valid date");
    assert_eq!(anchor.to_string(), "2026-10-01");
    assert!("tomorrow".parse::<ScheduleAnchor>().is_err());
}

#[test]
fn available_dependencies_skip_the_excluded_task() {
    init_tracing();
    let graph = fan_out();
    let ids: Vec<i64> = graph.available_dependencies(Some(2)).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(graph.available_dependencies(None).len(), 3);
}
