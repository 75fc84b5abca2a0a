//! Slack calculation and critical path extraction.

use rustc_hash::FxHashMap;

use crate::graph::ScheduleGraph;

use super::backward::BackwardPassResult;
use super::forward::ForwardPassResult;
use super::types::{CriticalPath, TaskTiming};

/// Slack per task: `max(0, LS - ES)`.
pub fn calculate_slack(
    earliest_start: &FxHashMap<String, f64>,
    latest_start: &FxHashMap<String, f64>,
) -> FxHashMap<String, f64> {
    earliest_start
        .iter()
        .filter_map(|(task_id, &es)| {
            latest_start
                .get(task_id)
                .map(|&ls| (task_id.clone(), (ls - es).max(0.0)))
        })
        .collect()
}

/// Assemble the result: timings, slack, and the tasks whose slack is
/// within `epsilon` of zero, listed in topological order.
pub fn extract_critical_path(
    graph: &ScheduleGraph,
    forward: &ForwardPassResult,
    backward: &BackwardPassResult,
    project_duration: f64,
    epsilon: f64,
) -> CriticalPath {
    let slack = calculate_slack(&forward.earliest_start, &backward.latest_start);

    let mut timings: FxHashMap<String, TaskTiming> =
        FxHashMap::with_capacity_and_hasher(graph.len(), Default::default());
    let mut task_ids = Vec::new();

    for task_id in graph.order() {
        let timing = TaskTiming {
            earliest_start: forward.earliest_start.get(task_id).copied().unwrap_or(0.0),
            earliest_finish: forward.earliest_finish.get(task_id).copied().unwrap_or(0.0),
            latest_start: backward.latest_start.get(task_id).copied().unwrap_or(0.0),
            latest_finish: backward.latest_finish.get(task_id).copied().unwrap_or(0.0),
            slack: slack.get(task_id).copied().unwrap_or(0.0),
        };
        if timing.is_critical(epsilon) {
            task_ids.push(task_id.clone());
        }
        timings.insert(task_id.clone(), timing);
    }

    CriticalPath {
        task_ids,
        total_duration: project_duration,
        slack,
        timings,
        critical_epsilon: epsilon,
    }
}
