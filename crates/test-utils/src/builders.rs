#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use tododag::dag::{DagGraph, DependencyEdge, Task};
use tododag::types::TaskId;

/// Base date used by builders when a test does not care about due dates.
pub fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 1).expect("valid base date")
}

/// Builder for `DagGraph` to simplify test setup.
pub struct SnapshotBuilder {
    tasks: Vec<Task>,
    edges: Vec<DependencyEdge>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_task(mut self, task: TaskBuilder) -> Self {
        let (task, deps) = task.build();
        self.edges
            .extend(deps.into_iter().map(|dep| DependencyEdge::new(task.id, dep)));
        self.tasks.push(task);
        self
    }

    /// Add a raw edge, e.g. one pointing at a task that does not exist.
    pub fn with_edge(mut self, dependent: TaskId, dependency: TaskId) -> Self {
        self.edges.push(DependencyEdge::new(dependent, dependency));
        self
    }

    pub fn build(self) -> DagGraph {
        DagGraph::new(self.tasks, self.edges)
    }
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single `Task` plus its dependency ids.
pub struct TaskBuilder {
    task: Task,
    deps: Vec<TaskId>,
}

impl TaskBuilder {
    pub fn new(id: TaskId) -> Self {
        Self {
            task: Task::new(id, format!("task {id}"), base_date()),
            deps: Vec::new(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.task.title = title.to_string();
        self
    }

    pub fn duration(mut self, days: u32) -> Self {
        self.task.duration = days;
        self
    }

    pub fn due(mut self, due: NaiveDate) -> Self {
        self.task.due = due;
        self
    }

    /// Due `days` after the base date.
    pub fn due_in(mut self, days: u64) -> Self {
        self.task.due = base_date() + Days::new(days);
        self
    }

    pub fn after(mut self, dep: TaskId) -> Self {
        self.deps.push(dep);
        self
    }

    pub fn build(self) -> (Task, Vec<TaskId>) {
        (self.task, self.deps)
    }
}
