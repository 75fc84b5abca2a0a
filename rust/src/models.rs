//! Core value types exchanged with the task repository and the Gantt view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Relationship between two tasks joined by a dependency edge.
///
/// Only finish-to-start semantics are applied by the passes; the other
/// tags are carried through so the caller's data survives a round trip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyType {
    #[default]
    FinishToStart,
    StartToStart,
    FinishToFinish,
    StartToFinish,
}

impl DependencyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FinishToStart => "finish_to_start",
            Self::StartToStart => "start_to_start",
            Self::FinishToFinish => "finish_to_finish",
            Self::StartToFinish => "start_to_finish",
        }
    }
}

/// A task as stored by the project repository.
///
/// The engine never mutates a task; derived values are returned keyed by `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Task {
    pub fn new(id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            start_date,
            end_date,
        }
    }

    /// Duration in days (`end_date - start_date`).
    pub fn duration_days(&self) -> f64 {
        (self.end_date - self.start_date).num_days() as f64
    }
}

/// A directed edge: `from_task_id` must finish before `to_task_id` starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    pub from_task_id: String,
    pub to_task_id: String,
    #[serde(default, rename = "type")]
    pub dependency_type: DependencyType,
    /// Signed offset in days; negative values overlap the tasks.
    #[serde(default)]
    pub lag_days: f64,
}

impl Dependency {
    /// Finish-to-start dependency with no lag.
    pub fn new(from_task_id: impl Into<String>, to_task_id: impl Into<String>) -> Self {
        Self {
            from_task_id: from_task_id.into(),
            to_task_id: to_task_id.into(),
            dependency_type: DependencyType::FinishToStart,
            lag_days: 0.0,
        }
    }

    pub fn with_lag(mut self, lag_days: f64) -> Self {
        self.lag_days = lag_days;
        self
    }

    pub fn with_type(mut self, dependency_type: DependencyType) -> Self {
        self.dependency_type = dependency_type;
        self
    }
}

/// New dates for a single task, as produced by the date projector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedDates {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_duration_from_dates() {
        let task = Task::new("a", d(2025, 1, 6), d(2025, 1, 9));
        assert_eq!(task.duration_days(), 3.0);

        let milestone = Task::new("m", d(2025, 1, 6), d(2025, 1, 6));
        assert_eq!(milestone.duration_days(), 0.0);
    }

    #[test]
    fn test_dependency_defaults_when_fields_absent() {
        let dep: Dependency =
            serde_json::from_str(r#"{"from_task_id":"a","to_task_id":"b"}"#).unwrap();
        assert_eq!(dep.dependency_type, DependencyType::FinishToStart);
        assert_eq!(dep.lag_days, 0.0);
    }

    #[test]
    fn test_dependency_type_tag_names() {
        let dep = Dependency::new("a", "b")
            .with_type(DependencyType::StartToStart)
            .with_lag(-1.0);
        let json = serde_json::to_value(&dep).unwrap();
        assert_eq!(json["type"], "start_to_start");
        assert_eq!(json["lag_days"], -1.0);
        assert_eq!(DependencyType::StartToStart.as_str(), "start_to_start");
    }

    #[test]
    fn test_task_deserializes_iso_dates() {
        let task: Task = serde_json::from_str(
            r#"{"id":"t1","start_date":"2025-03-03","end_date":"2025-03-07"}"#,
        )
        .unwrap();
        assert_eq!(task.start_date, d(2025, 3, 3));
        assert_eq!(task.duration_days(), 4.0);
    }
}
