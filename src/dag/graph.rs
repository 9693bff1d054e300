// src/dag/graph.rs

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::dag::task::{DependencyEdge, Task};
use crate::types::TaskId;

/// Internal node structure: stores the task plus immediate deps and dependents.
#[derive(Debug, Clone)]
struct DagNode {
    task: Task,
    /// Direct dependencies: tasks that must finish before this one can start.
    deps: Vec<TaskId>,
    /// Direct dependents: tasks that depend on this one.
    dependents: Vec<TaskId>,
}

/// Read-only snapshot of tasks and their dependency edges.
///
/// Built once per engine call from a flat edge list. Both directions are
/// indexed so neighbour lookups are O(1). Edges may reference ids that have
/// no task; those are kept but every algorithm skips them.
#[derive(Debug, Clone, Default)]
pub struct DagGraph {
    nodes: HashMap<TaskId, DagNode>,
    /// Task ids in snapshot iteration order.
    order: Vec<TaskId>,
    /// Number of distinct edges (dangling ones included).
    edge_count: usize,
}

impl DagGraph {
    /// Build a snapshot from tasks and a flat edge list.
    ///
    /// Tasks keep the order they are given in. A later task with an id that
    /// was already seen replaces the earlier one. Duplicate edges collapse.
    pub fn new(tasks: impl IntoIterator<Item = Task>, edges: impl IntoIterator<Item = DependencyEdge>) -> Self {
        let mut nodes: HashMap<TaskId, DagNode> = HashMap::new();
        let mut order = Vec::new();

        // First pass: create nodes without edges.
        for task in tasks {
            let id = task.id;
            let node = DagNode {
                task,
                deps: Vec::new(),
                dependents: Vec::new(),
            };
            if nodes.insert(id, node).is_none() {
                order.push(id);
            }
        }

        // Second pass: populate both adjacency directions. Each distinct
        // edge is counted once, dangling or not.
        let mut seen: HashSet<DependencyEdge> = HashSet::new();
        let mut dangling = 0;
        for edge in edges {
            if !seen.insert(edge) {
                continue;
            }
            let DependencyEdge {
                dependent,
                dependency,
            } = edge;

            if !nodes.contains_key(&dependent) || !nodes.contains_key(&dependency) {
                dangling += 1;
                warn!(dependent, dependency, "dependency edge references an unknown task");
            }
            if let Some(node) = nodes.get_mut(&dependent) {
                node.deps.push(dependency);
            }
            if let Some(node) = nodes.get_mut(&dependency) {
                node.dependents.push(dependent);
            }
        }
        let edge_count = seen.len();

        debug!(
            tasks = order.len(),
            edges = edge_count,
            dangling,
            "built dependency graph snapshot"
        );

        Self {
            nodes,
            order,
            edge_count,
        }
    }

    /// Build a snapshot from tasks paired with their dependency ids.
    pub fn from_adjacency(tasks: impl IntoIterator<Item = (Task, Vec<TaskId>)>) -> Self {
        let mut all_tasks = Vec::new();
        let mut edges = Vec::new();
        for (task, deps) in tasks {
            edges.extend(deps.into_iter().map(|dep| DependencyEdge::new(task.id, dep)));
            all_tasks.push(task);
        }
        Self::new(all_tasks, edges)
    }

    /// Number of tasks in the snapshot.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether a task with this id exists.
    pub fn contains(&self, id: TaskId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// All task ids in snapshot order.
    pub fn task_ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.order.iter().copied()
    }

    /// All tasks in snapshot order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.order.iter().filter_map(|id| self.task(*id))
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.nodes.get(&id).map(|n| &n.task)
    }

    /// Immediate dependencies of a task as stored, including unknown ids.
    pub fn dependencies_of(&self, id: TaskId) -> &[TaskId] {
        self.nodes
            .get(&id)
            .map(|n| n.deps.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate dependents of a task (tasks that list this one as a dependency).
    pub fn dependents_of(&self, id: TaskId) -> &[TaskId] {
        self.nodes
            .get(&id)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// Dependencies of a task that resolve to tasks in this snapshot.
    pub(crate) fn known_dependencies_of(&self, id: TaskId) -> impl Iterator<Item = TaskId> + '_ {
        self.dependencies_of(id)
            .iter()
            .copied()
            .filter(|dep| self.contains(*dep))
    }

    /// Dependents of a task that resolve to tasks in this snapshot.
    pub(crate) fn known_dependents_of(&self, id: TaskId) -> impl Iterator<Item = TaskId> + '_ {
        self.dependents_of(id)
            .iter()
            .copied()
            .filter(|dep| self.contains(*dep))
    }

    /// Tasks that may be offered as dependencies: every task except `exclude`.
    pub fn available_dependencies(&self, exclude: Option<TaskId>) -> Vec<&Task> {
        self.tasks()
            .filter(|task| Some(task.id) != exclude)
            .collect()
    }

    /// Tasks nothing depends on.
    pub fn leaves(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.task_ids()
            .filter(|id| self.known_dependents_of(*id).next().is_none())
    }
}
