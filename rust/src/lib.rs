//! Dependency-aware scheduling for Gantt charts.
//!
//! Provides Critical Path Method analysis over tasks linked by
//! finish-to-start dependencies, single-task date projection after local
//! edits, and working-week calendar arithmetic.
//!
//! ```
//! use chrono::NaiveDate;
//! use gantt_cpm::{calculate_critical_path, Dependency, Task};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
//! let tasks = vec![
//!     Task::new("a", day(6), day(8)),
//!     Task::new("b", day(6), day(9)),
//! ];
//! let deps = vec![Dependency::new("a", "b")];
//!
//! let result = calculate_critical_path(&tasks, &deps).unwrap();
//! assert_eq!(result.total_duration, 5.0);
//! assert_eq!(result.task_ids, vec!["a", "b"]);
//! ```

pub mod calendar;
pub mod config;
pub mod critical_path;
pub mod graph;
pub mod logging;
mod models;
pub mod projector;

pub use calendar::{CalendarError, WorkingWeek};
pub use config::{CpmConfig, DEFAULT_CRITICAL_EPSILON};
pub use critical_path::{
    calculate_critical_path, calculate_critical_path_with_config, calculate_for_graph,
    CriticalPath, CriticalPathError, TaskTiming,
};
pub use graph::{
    detect_cycles, sort_tasks, validate_graph, DependencyIndex, GraphError, ScheduleGraph,
};
pub use models::{Dependency, DependencyType, ProjectedDates, Task};
pub use projector::{project_task_dates, project_task_dates_by_id, ProjectionError};
