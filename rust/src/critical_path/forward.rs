//! Forward pass: earliest start and finish for every task.

use rustc_hash::FxHashMap;

use crate::graph::{walk, Direction, ScheduleGraph, Scope};
use crate::models::DependencyType;
use crate::{log_checks, log_debug};

/// Earliest times keyed by task id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForwardPassResult {
    pub earliest_start: FxHashMap<String, f64>,
    pub earliest_finish: FxHashMap<String, f64>,
}

impl ForwardPassResult {
    /// Largest earliest finish, or 0 for an empty graph.
    pub fn project_duration(&self) -> f64 {
        self.earliest_finish.values().copied().fold(0.0, f64::max)
    }
}

/// Compute earliest start/finish in topological order.
///
/// `ES(t)` is 0 without predecessors, otherwise the largest
/// `EF(p) + lag(p -> t)` over predecessors `p`, never below 0.
/// `EF(t) = ES(t) + duration(t)`. Every edge is applied as finish-to-start.
pub fn forward_pass(graph: &ScheduleGraph, verbosity: u8) -> ForwardPassResult {
    let n = graph.len();
    let mut earliest_start: FxHashMap<String, f64> =
        FxHashMap::with_capacity_and_hasher(n, Default::default());
    let mut earliest_finish: FxHashMap<String, f64> =
        FxHashMap::with_capacity_and_hasher(n, Default::default());

    walk(
        graph.index(),
        Direction::Forward,
        Scope::Global(graph.order()),
        |task_id, predecessors| {
            let mut start = 0.0_f64;
            for edge in predecessors {
                if edge.dependency_type != DependencyType::FinishToStart {
                    log_checks!(
                        verbosity,
                        "  {} -> {}: {} applied as finish_to_start",
                        edge.task_id,
                        task_id,
                        edge.dependency_type.as_str()
                    );
                }
                if let Some(&finish) = earliest_finish.get(edge.task_id.as_str()) {
                    start = start.max(finish + edge.lag_days);
                }
            }
            let finish = start + graph.duration(task_id);

            log_debug!(verbosity, "  forward {}: es={} ef={}", task_id, start, finish);

            earliest_start.insert(task_id.to_string(), start);
            earliest_finish.insert(task_id.to_string(), finish);
        },
    );

    ForwardPassResult {
        earliest_start,
        earliest_finish,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dependency, Task};
    use chrono::{Duration, NaiveDate};

    fn make_task(id: &str, duration: i64) -> Task {
        let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        Task::new(id, start, start + Duration::days(duration))
    }

    fn run(tasks: &[Task], deps: &[Dependency]) -> ForwardPassResult {
        forward_pass(&ScheduleGraph::build(tasks, deps).unwrap(), 0)
    }

    #[test]
    fn test_linear_chain() {
        let tasks = vec![make_task("a", 2), make_task("b", 3), make_task("c", 1)];
        let deps = vec![Dependency::new("a", "b"), Dependency::new("b", "c")];
        let result = run(&tasks, &deps);

        assert_eq!(result.earliest_start["a"], 0.0);
        assert_eq!(result.earliest_finish["a"], 2.0);
        assert_eq!(result.earliest_start["b"], 2.0);
        assert_eq!(result.earliest_finish["b"], 5.0);
        assert_eq!(result.earliest_start["c"], 5.0);
        assert_eq!(result.earliest_finish["c"], 6.0);
        assert_eq!(result.project_duration(), 6.0);
    }

    #[test]
    fn test_join_takes_latest_predecessor() {
        let tasks = vec![make_task("a", 2), make_task("b", 5), make_task("c", 1)];
        let deps = vec![Dependency::new("a", "c"), Dependency::new("b", "c")];
        let result = run(&tasks, &deps);

        assert_eq!(result.earliest_start["c"], 5.0);
        assert_eq!(result.earliest_finish["c"], 6.0);
    }

    #[test]
    fn test_positive_lag() {
        let tasks = vec![make_task("a", 2), make_task("b", 2)];
        let deps = vec![Dependency::new("a", "b").with_lag(3.0)];
        let result = run(&tasks, &deps);

        assert_eq!(result.earliest_start["b"], 5.0);
        assert_eq!(result.earliest_finish["b"], 7.0);
    }

    #[test]
    fn test_negative_lag_overlaps() {
        let tasks = vec![make_task("a", 4), make_task("b", 2)];
        let deps = vec![Dependency::new("a", "b").with_lag(-1.0)];
        let result = run(&tasks, &deps);

        assert_eq!(result.earliest_start["b"], 3.0);
        assert_eq!(result.project_duration(), 5.0);
    }

    #[test]
    fn test_lead_never_precedes_origin() {
        let tasks = vec![make_task("a", 2), make_task("b", 1)];
        let deps = vec![Dependency::new("a", "b").with_lag(-5.0)];
        let result = run(&tasks, &deps);

        assert_eq!(result.earliest_start["b"], 0.0);
    }

    #[test]
    fn test_empty_graph() {
        let result = run(&[], &[]);
        assert!(result.earliest_start.is_empty());
        assert_eq!(result.project_duration(), 0.0);
    }
}
