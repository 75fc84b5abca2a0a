//! Task dependency graph: indexing, validation, cycle detection and ordering.

mod cycles;
mod index;
mod topo;
pub mod walk;

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::models::{Dependency, Task};

pub use cycles::{detect_cycles, find_cycles};
pub use index::{validate_graph, DependencyIndex, Edge};
pub use topo::{sort_tasks, topological_sort};
pub use walk::{try_walk, walk, Direction, Scope};

/// Errors raised while building or verifying the task graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("duplicate task id: {0}")]
    DuplicateTask(String),
    #[error("task {task_id} ends ({end_date}) before it starts ({start_date})")]
    InvalidTaskDates {
        task_id: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
    #[error("task {0} depends on itself")]
    SelfLoop(String),
    #[error("dependency {from} -> {to} has a non-finite lag")]
    InvalidLag { from: String, to: String },
    #[error("dependency {from} -> {to} references unknown task {missing}")]
    DanglingDependency {
        from: String,
        to: String,
        missing: String,
    },
    #[error("cyclic dependency: {}", format_cycles(.cycles))]
    CyclicDependency { cycles: Vec<Vec<String>> },
}

fn format_cycles(cycles: &[Vec<String>]) -> String {
    cycles
        .iter()
        .map(|cycle| cycle.join(" -> "))
        .collect::<Vec<_>>()
        .join("; ")
}

/// A validated, acyclic task graph with its topological order.
///
/// The only input the forward and backward passes accept, so neither can
/// run on a graph that has not been checked.
#[derive(Clone, Debug)]
pub struct ScheduleGraph {
    index: DependencyIndex,
    order: Vec<String>,
    durations: FxHashMap<String, f64>,
}

impl ScheduleGraph {
    /// Validate inputs, reject cycles, and compute the processing order.
    ///
    /// All cycles are reported together in
    /// [`GraphError::CyclicDependency`].
    pub fn build(tasks: &[Task], dependencies: &[Dependency]) -> Result<Self, GraphError> {
        let index = DependencyIndex::validated(tasks, dependencies)?;

        let cycles = find_cycles(&index);
        if !cycles.is_empty() {
            return Err(GraphError::CyclicDependency { cycles });
        }
        let order = topological_sort(&index)?;

        let durations = tasks
            .iter()
            .map(|t| (t.id.clone(), t.duration_days()))
            .collect();

        Ok(Self {
            index,
            order,
            durations,
        })
    }

    pub fn index(&self) -> &DependencyIndex {
        &self.index
    }

    /// Task ids with every predecessor before its successors.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Duration of `task_id` in days; 0 for unknown ids.
    pub fn duration(&self, task_id: &str) -> f64 {
        self.durations.get(task_id).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
