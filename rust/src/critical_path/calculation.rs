//! Critical path calculation: index, cycle check, forward pass, backward
//! pass, slack.

use thiserror::Error;

use crate::config::CpmConfig;
use crate::graph::{GraphError, ScheduleGraph};
use crate::models::{Dependency, Task};
use crate::{log_changes, log_checks};

use super::backward::backward_pass;
use super::forward::forward_pass;
use super::slack::extract_critical_path;
use super::types::CriticalPath;

/// Error types for critical path calculation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CriticalPathError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("critical epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),
}

/// Calculate the critical path with the default configuration.
///
/// # Returns
/// * `Ok(CriticalPath)` with the critical set, project duration and slack
/// * `Err(CriticalPathError::Graph(GraphError::CyclicDependency { .. }))`
///   if the dependencies form a cycle; no timings are produced
///
/// An empty task list yields an empty result, not an error.
pub fn calculate_critical_path(
    tasks: &[Task],
    dependencies: &[Dependency],
) -> Result<CriticalPath, CriticalPathError> {
    calculate_critical_path_with_config(tasks, dependencies, &CpmConfig::default())
}

/// Calculate the critical path using `config` for the criticality
/// tolerance and logging.
pub fn calculate_critical_path_with_config(
    tasks: &[Task],
    dependencies: &[Dependency],
    config: &CpmConfig,
) -> Result<CriticalPath, CriticalPathError> {
    let epsilon = config.critical_epsilon;
    if !epsilon.is_finite() || epsilon < 0.0 {
        return Err(CriticalPathError::InvalidEpsilon(epsilon));
    }

    let graph = ScheduleGraph::build(tasks, dependencies).map_err(|err| {
        log_checks!(config.verbosity, "Rejected task graph: {}", err);
        err
    })?;

    Ok(calculate_for_graph(&graph, config))
}

/// Run the passes over an already verified graph.
pub fn calculate_for_graph(graph: &ScheduleGraph, config: &CpmConfig) -> CriticalPath {
    let verbosity = config.verbosity;

    let forward = forward_pass(graph, verbosity);
    let project_duration = forward.project_duration();
    let backward = backward_pass(graph, project_duration, verbosity);
    let result = extract_critical_path(
        graph,
        &forward,
        &backward,
        project_duration,
        config.critical_epsilon,
    );

    log_changes!(
        verbosity,
        "Critical path: duration={} tasks={:?}",
        result.total_duration,
        result.task_ids
    );

    result
}
