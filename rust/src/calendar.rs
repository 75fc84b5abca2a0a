//! Working-day date math over a single weekly pattern.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from calendar arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("working week must contain at least one working day")]
    NoWorkingDays,
    #[error("day number {0} is not in 0..=6")]
    InvalidDayNumber(u8),
    #[error("date arithmetic overflowed past {0}")]
    OutOfRange(NaiveDate),
}

/// The set of weekdays on which work happens.
///
/// Never empty, so every stepping loop below terminates within a week.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct WorkingWeek {
    /// Indexed by `Weekday::num_days_from_monday`.
    days: [bool; 7],
}

impl Default for WorkingWeek {
    /// Monday through Friday.
    fn default() -> Self {
        Self {
            days: [true, true, true, true, true, false, false],
        }
    }
}

impl WorkingWeek {
    pub fn new(weekdays: &[Weekday]) -> Result<Self, CalendarError> {
        let mut days = [false; 7];
        for day in weekdays {
            days[day.num_days_from_monday() as usize] = true;
        }
        if !days.contains(&true) {
            return Err(CalendarError::NoWorkingDays);
        }
        Ok(Self { days })
    }

    /// Build from day numbers where 0 = Sunday and 6 = Saturday, the
    /// numbering used by the web Gantt view.
    pub fn from_day_numbers(numbers: &[u8]) -> Result<Self, CalendarError> {
        let weekdays = numbers
            .iter()
            .map(|&n| match n {
                0 => Ok(Weekday::Sun),
                1..=6 => Weekday::try_from(n - 1).map_err(|_| CalendarError::InvalidDayNumber(n)),
                _ => Err(CalendarError::InvalidDayNumber(n)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&weekdays)
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        self.days[weekday.num_days_from_monday() as usize]
    }

    /// Working weekdays in Monday-first order.
    pub fn weekdays(&self) -> Vec<Weekday> {
        let mut day = Weekday::Mon;
        let mut result = Vec::with_capacity(7);
        for _ in 0..7 {
            if self.contains(day) {
                result.push(day);
            }
            day = day.succ();
        }
        result
    }

    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.contains(date.weekday())
    }

    /// Advance one day at a time until `date` falls on a working day.
    /// A date already on a working day is returned unchanged.
    pub fn adjust_to_working_day(&self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        let mut current = date;
        while !self.is_working_day(current) {
            current = next_day(current)?;
        }
        Ok(current)
    }

    /// Step forward one calendar day at a time, counting only working days,
    /// until `n` have been counted.
    ///
    /// `n == 0` returns `date` unchanged, even when it is not a working day.
    pub fn add_working_days(&self, date: NaiveDate, n: u32) -> Result<NaiveDate, CalendarError> {
        let mut current = date;
        let mut counted = 0;
        while counted < n {
            current = next_day(current)?;
            if self.is_working_day(current) {
                counted += 1;
            }
        }
        Ok(current)
    }

    /// Working days in `start..=end`; zero when `end < start`.
    pub fn count_working_days(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter(|d| self.is_working_day(*d))
            .count() as u32
    }
}

impl TryFrom<Vec<Weekday>> for WorkingWeek {
    type Error = CalendarError;

    fn try_from(weekdays: Vec<Weekday>) -> Result<Self, Self::Error> {
        Self::new(&weekdays)
    }
}

impl From<WorkingWeek> for Vec<Weekday> {
    fn from(week: WorkingWeek) -> Self {
        week.weekdays()
    }
}

fn next_day(date: NaiveDate) -> Result<NaiveDate, CalendarError> {
    date.succ_opt().ok_or(CalendarError::OutOfRange(date))
}
