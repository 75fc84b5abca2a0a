//! Backward pass: latest start and finish for every task.

use rustc_hash::FxHashMap;

use crate::graph::{walk, Direction, ScheduleGraph, Scope};
use crate::log_debug;

/// Latest times keyed by task id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackwardPassResult {
    pub latest_start: FxHashMap<String, f64>,
    pub latest_finish: FxHashMap<String, f64>,
}

/// Compute latest start/finish in reverse topological order.
///
/// `LF(t)` is `project_duration` without successors, otherwise the smallest
/// `LS(s) - lag(t -> s)` over successors `s`, capped at `project_duration`.
/// `LS(t) = LF(t) - duration(t)`.
pub fn backward_pass(
    graph: &ScheduleGraph,
    project_duration: f64,
    verbosity: u8,
) -> BackwardPassResult {
    let n = graph.len();
    let mut latest_start: FxHashMap<String, f64> =
        FxHashMap::with_capacity_and_hasher(n, Default::default());
    let mut latest_finish: FxHashMap<String, f64> =
        FxHashMap::with_capacity_and_hasher(n, Default::default());

    walk(
        graph.index(),
        Direction::Backward,
        Scope::Global(graph.order()),
        |task_id, successors| {
            let mut finish = project_duration;
            for edge in successors {
                if let Some(&start) = latest_start.get(edge.task_id.as_str()) {
                    finish = finish.min(start - edge.lag_days);
                }
            }
            let start = finish - graph.duration(task_id);

            log_debug!(verbosity, "  backward {}: ls={} lf={}", task_id, start, finish);

            latest_start.insert(task_id.to_string(), start);
            latest_finish.insert(task_id.to_string(), finish);
        },
    );

    BackwardPassResult {
        latest_start,
        latest_finish,
    }
}
