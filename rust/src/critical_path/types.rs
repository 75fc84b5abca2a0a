//! Result types for critical path calculation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::models::Dependency;

/// Per-task timing information, in days from the project origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskTiming {
    /// ES
    pub earliest_start: f64,
    /// EF = ES + duration
    pub earliest_finish: f64,
    /// LS = LF - duration
    pub latest_start: f64,
    /// LF
    pub latest_finish: f64,
    /// `max(0, LS - ES)`
    pub slack: f64,
}

impl TaskTiming {
    pub fn is_critical(&self, epsilon: f64) -> bool {
        self.slack.abs() <= epsilon
    }
}

/// Outcome of the full pipeline over one task set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CriticalPath {
    /// Zero-slack task ids, in topological order.
    pub task_ids: Vec<String>,
    /// Project duration: the largest earliest finish.
    pub total_duration: f64,
    /// Slack for every task.
    pub slack: FxHashMap<String, f64>,
    /// ES/EF/LS/LF and slack for every task.
    pub timings: FxHashMap<String, TaskTiming>,
    /// Tolerance the critical set was classified with.
    pub critical_epsilon: f64,
}

impl CriticalPath {
    pub fn is_critical(&self, task_id: &str) -> bool {
        self.task_ids.iter().any(|id| id == task_id)
    }

    pub fn timing(&self, task_id: &str) -> Option<&TaskTiming> {
        self.timings.get(task_id)
    }

    /// Dependencies that drive the critical path: both ends critical and
    /// the successor starts exactly when the predecessor's finish plus lag
    /// allows, both within [`CriticalPath::critical_epsilon`]. Used to
    /// highlight critical links in the Gantt view.
    pub fn critical_dependencies<'a>(&self, dependencies: &'a [Dependency]) -> Vec<&'a Dependency> {
        let epsilon = self.critical_epsilon;
        dependencies
            .iter()
            .filter(|dep| {
                let (Some(from), Some(to)) = (
                    self.timings.get(&dep.from_task_id),
                    self.timings.get(&dep.to_task_id),
                ) else {
                    return false;
                };
                from.is_critical(epsilon)
                    && to.is_critical(epsilon)
                    && (from.earliest_finish + dep.lag_days - to.earliest_start).abs() <= epsilon
            })
            .collect()
    }
}
