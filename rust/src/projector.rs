//! Per-task date projection after a local edit, such as dragging one bar.
//!
//! Only the task's direct predecessors are consulted. The result is not
//! globally consistent; re-run the full critical path calculation when
//! every task needs to agree.

use chrono::{Duration, NaiveDate};
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::calendar::{CalendarError, WorkingWeek};
use crate::graph::{try_walk, DependencyIndex, Direction, GraphError, Scope};
use crate::models::{Dependency, ProjectedDates, Task};

/// Errors that can occur while projecting a single task.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("task not found: {0}")]
    TaskNotFound(String),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error("projected dates for task {0} fall outside the supported range")]
    OutOfRange(String),
}

/// Recompute `task`'s dates from its direct predecessors.
///
/// Without predecessors the task's own dates are returned. Otherwise the
/// new start is the latest predecessor end plus the sum of incoming lags
/// (truncated to whole days), and the original duration is kept.
pub fn project_task_dates(
    task: &Task,
    tasks: &[Task],
    dependencies: &[Dependency],
) -> Result<ProjectedDates, ProjectionError> {
    let index = DependencyIndex::from_dependencies(dependencies);
    let by_id: FxHashMap<&str, &Task> = tasks.iter().map(|t| (t.id.as_str(), t)).collect();

    let mut latest_end: Option<NaiveDate> = None;
    let mut total_lag = 0.0;

    try_walk(
        &index,
        Direction::Forward,
        Scope::Local(task.id.as_str()),
        |task_id, predecessors| -> Result<(), GraphError> {
            for edge in predecessors {
                if edge.task_id == task_id {
                    return Err(GraphError::SelfLoop(task_id.to_string()));
                }
                if !edge.lag_days.is_finite() {
                    return Err(GraphError::InvalidLag {
                        from: edge.task_id.clone(),
                        to: task_id.to_string(),
                    });
                }
                let predecessor = by_id.get(edge.task_id.as_str()).ok_or_else(|| {
                    GraphError::DanglingDependency {
                        from: edge.task_id.clone(),
                        to: task_id.to_string(),
                        missing: edge.task_id.clone(),
                    }
                })?;
                latest_end = latest_end.max(Some(predecessor.end_date));
                total_lag += edge.lag_days;
            }
            Ok(())
        },
    )?;

    let Some(latest_end) = latest_end else {
        return Ok(ProjectedDates {
            start_date: task.start_date,
            end_date: task.end_date,
        });
    };

    let out_of_range = || ProjectionError::OutOfRange(task.id.clone());
    let lag = Duration::try_days(total_lag.trunc() as i64).ok_or_else(out_of_range)?;
    let start_date = latest_end.checked_add_signed(lag).ok_or_else(out_of_range)?;
    let end_date = start_date
        .checked_add_signed(task.end_date - task.start_date)
        .ok_or_else(out_of_range)?;

    Ok(ProjectedDates {
        start_date,
        end_date,
    })
}

/// Look up `task_id` in `tasks`, then [`project_task_dates`].
pub fn project_task_dates_by_id(
    task_id: &str,
    tasks: &[Task],
    dependencies: &[Dependency],
) -> Result<ProjectedDates, ProjectionError> {
    let task = tasks
        .iter()
        .find(|t| t.id == task_id)
        .ok_or_else(|| ProjectionError::TaskNotFound(task_id.to_string()))?;
    project_task_dates(task, tasks, dependencies)
}

impl ProjectedDates {
    /// Shift both dates forward by the same amount so the start lands on a
    /// working day.
    pub fn align_to_working_week(self, week: &WorkingWeek) -> Result<Self, CalendarError> {
        let start_date = week.adjust_to_working_day(self.start_date)?;
        let end_date = self
            .end_date
            .checked_add_signed(start_date - self.start_date)
            .ok_or(CalendarError::OutOfRange(self.end_date))?;
        Ok(Self {
            start_date,
            end_date,
        })
    }
}
