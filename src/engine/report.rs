// src/engine/report.rs

//! Per-task schedule rows for display: the dependency tree view and the
//! schedule table both read from a [`ScheduleReport`].

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::dag::{analyze, topological_order, DagGraph};
use crate::types::TaskId;

/// One task in the report, in topological position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub id: TaskId,
    pub title: String,
    pub due: NaiveDate,
    pub duration: u32,
    /// Length of the longest dependency chain below this task (0 for roots).
    pub depth: usize,
    /// Titles of the direct dependencies that exist in the snapshot.
    pub depends_on: Vec<String>,
    pub earliest_start: DateTime<Utc>,
    pub earliest_finish: DateTime<Utc>,
    pub latest_start: DateTime<Utc>,
    pub latest_finish: DateTime<Utc>,
    pub slack: TimeDelta,
    pub critical: bool,
}

/// Everything the caller needs to render a schedule for one snapshot.
#[derive(Debug, Clone)]
pub struct ScheduleReport {
    pub anchor: DateTime<Utc>,
    pub project_finish: DateTime<Utc>,
    pub rows: Vec<ReportRow>,
}

impl ScheduleReport {
    pub fn build(graph: &DagGraph, anchor: DateTime<Utc>) -> Self {
        let order = topological_order(graph);
        let analysis = analyze(graph, anchor);

        // Dependencies precede dependents in `order`, so one sweep suffices.
        let mut depths: HashMap<TaskId, usize> = HashMap::with_capacity(order.len());
        for id in &order {
            let depth = graph
                .known_dependencies_of(*id)
                .filter_map(|dep| depths.get(&dep).map(|d| d + 1))
                .max()
                .unwrap_or(0);
            depths.insert(*id, depth);
        }

        let rows = order
            .iter()
            .filter_map(|id| {
                let task = graph.task(*id)?;
                let times = analysis.times(*id)?;
                Some(ReportRow {
                    id: task.id,
                    title: task.title.clone(),
                    due: task.due,
                    duration: task.duration,
                    depth: depths.get(id).copied().unwrap_or(0),
                    depends_on: graph
                        .known_dependencies_of(*id)
                        .filter_map(|dep| graph.task(dep).map(|t| t.title.clone()))
                        .collect(),
                    earliest_start: times.earliest_start,
                    earliest_finish: times.earliest_finish,
                    latest_start: times.latest_start,
                    latest_finish: times.latest_finish,
                    slack: times.slack(),
                    critical: times.is_critical(),
                })
            })
            .collect();

        Self {
            anchor,
            project_finish: analysis.project_finish,
            rows,
        }
    }

    pub fn critical_rows(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|row| row.critical)
    }

    pub fn row(&self, id: TaskId) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.id == id)
    }
}
