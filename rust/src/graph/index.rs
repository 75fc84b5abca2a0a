//! Predecessor/successor adjacency built from raw dependency edges.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::models::{Dependency, DependencyType, Task};

use super::GraphError;

/// One side of a dependency edge as seen from a task.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    /// The task on the other end of the edge.
    pub task_id: String,
    pub lag_days: f64,
    pub dependency_type: DependencyType,
}

/// Adjacency maps for one computation. Rebuilt per call, never cached.
#[derive(Clone, Debug, Default)]
pub struct DependencyIndex {
    task_ids: Vec<String>,
    predecessors: FxHashMap<String, Vec<Edge>>,
    successors: FxHashMap<String, Vec<Edge>>,
}

impl DependencyIndex {
    /// Build adjacency maps in O(V+E).
    ///
    /// Performs no validation: dangling endpoints and self-loops are indexed
    /// as given. Use [`DependencyIndex::validated`] to reject them.
    pub fn build(tasks: &[Task], dependencies: &[Dependency]) -> Self {
        let mut index = Self::from_dependencies(dependencies);
        index.task_ids = tasks.iter().map(|t| t.id.clone()).collect();
        index
    }

    /// Build adjacency maps from edges alone, with no task list.
    pub fn from_dependencies(dependencies: &[Dependency]) -> Self {
        let mut predecessors: FxHashMap<String, Vec<Edge>> =
            FxHashMap::with_capacity_and_hasher(dependencies.len(), Default::default());
        let mut successors: FxHashMap<String, Vec<Edge>> =
            FxHashMap::with_capacity_and_hasher(dependencies.len(), Default::default());

        for dep in dependencies {
            predecessors
                .entry(dep.to_task_id.clone())
                .or_default()
                .push(Edge {
                    task_id: dep.from_task_id.clone(),
                    lag_days: dep.lag_days,
                    dependency_type: dep.dependency_type,
                });
            successors
                .entry(dep.from_task_id.clone())
                .or_default()
                .push(Edge {
                    task_id: dep.to_task_id.clone(),
                    lag_days: dep.lag_days,
                    dependency_type: dep.dependency_type,
                });
        }

        Self {
            task_ids: Vec::new(),
            predecessors,
            successors,
        }
    }

    /// Validate the inputs, then build.
    pub fn validated(tasks: &[Task], dependencies: &[Dependency]) -> Result<Self, GraphError> {
        validate_graph(tasks, dependencies)?;
        Ok(Self::build(tasks, dependencies))
    }

    /// Task ids in input order.
    pub fn task_ids(&self) -> &[String] {
        &self.task_ids
    }

    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    /// Incoming edges of `task_id`; each edge names the predecessor.
    pub fn predecessors(&self, task_id: &str) -> &[Edge] {
        self.predecessors
            .get(task_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Outgoing edges of `task_id`; each edge names the successor.
    pub fn successors(&self, task_id: &str) -> &[Edge] {
        self.successors
            .get(task_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn predecessor_ids<'a>(&'a self, task_id: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.predecessors(task_id).iter().map(|e| e.task_id.as_str())
    }

    pub fn successor_ids<'a>(&'a self, task_id: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.successors(task_id).iter().map(|e| e.task_id.as_str())
    }
}

/// Check the inputs before any pass runs.
///
/// Reports, in order: duplicate task ids, tasks ending before they start,
/// self-loops, non-finite lags, and endpoints missing from the task list.
pub fn validate_graph(tasks: &[Task], dependencies: &[Dependency]) -> Result<(), GraphError> {
    let mut seen: FxHashSet<&str> =
        FxHashSet::with_capacity_and_hasher(tasks.len(), Default::default());
    for task in tasks {
        if !seen.insert(task.id.as_str()) {
            return Err(GraphError::DuplicateTask(task.id.clone()));
        }
        if task.end_date < task.start_date {
            return Err(GraphError::InvalidTaskDates {
                task_id: task.id.clone(),
                start_date: task.start_date,
                end_date: task.end_date,
            });
        }
    }

    for dep in dependencies {
        if dep.from_task_id == dep.to_task_id {
            return Err(GraphError::SelfLoop(dep.from_task_id.clone()));
        }
        if !dep.lag_days.is_finite() {
            return Err(GraphError::InvalidLag {
                from: dep.from_task_id.clone(),
                to: dep.to_task_id.clone(),
            });
        }
        for endpoint in [&dep.from_task_id, &dep.to_task_id] {
            if !seen.contains(endpoint.as_str()) {
                return Err(GraphError::DanglingDependency {
                    from: dep.from_task_id.clone(),
                    to: dep.to_task_id.clone(),
                    missing: endpoint.clone(),
                });
            }
        }
    }

    Ok(())
}
