//! Configuration types for the CPM pipeline.

use serde::{Deserialize, Serialize};

use crate::calendar::WorkingWeek;

/// Default tolerance when classifying a task as critical.
///
/// Absorbs rounding from date-to-number conversions so a task does not
/// flip between critical and non-critical across recomputations.
pub const DEFAULT_CRITICAL_EPSILON: f64 = 1e-2;

/// Configuration for critical path computation and calendar math.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpmConfig {
    /// Weekdays counted by working-day arithmetic.
    pub working_week: WorkingWeek,
    /// Slack at or below this value marks a task critical.
    pub critical_epsilon: f64,
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    pub verbosity: u8,
}

impl Default for CpmConfig {
    fn default() -> Self {
        Self {
            working_week: WorkingWeek::default(),
            critical_epsilon: DEFAULT_CRITICAL_EPSILON,
            verbosity: 0,
        }
    }
}

impl CpmConfig {
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_working_week(mut self, working_week: WorkingWeek) -> Self {
        self.working_week = working_week;
        self
    }

    pub fn with_critical_epsilon(mut self, critical_epsilon: f64) -> Self {
        self.critical_epsilon = critical_epsilon;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_config_defaults() {
        let config = CpmConfig::default();
        assert!((config.critical_epsilon - 1e-2).abs() < 1e-12);
        assert_eq!(config.verbosity, 0);
        assert_eq!(config.working_week, WorkingWeek::default());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: CpmConfig = serde_json::from_str(r#"{"verbosity": 2}"#).unwrap();
        assert_eq!(config.verbosity, 2);
        assert!((config.critical_epsilon - DEFAULT_CRITICAL_EPSILON).abs() < 1e-12);

        let config: CpmConfig =
            serde_json::from_str(r#"{"working_week": ["Sun", "Mon"]}"#).unwrap();
        assert!(config.working_week.contains(Weekday::Sun));
        assert!(!config.working_week.contains(Weekday::Fri));
    }
}
