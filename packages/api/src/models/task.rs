//! # Task model and status derivation
//!
//! [`TaskInfo`] mirrors the backend's task record. [`TaskStatus`] is never
//! stored anywhere — it is derived from the completion flag and the due date
//! whenever a card or a statistic needs it. The comparison happens at day
//! granularity on the UTC calendar: a task due earlier today is still
//! pending, a task due yesterday is overdue.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A task record from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Due date-time, UTC.
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub completed: bool,
    /// Owner reference.
    #[serde(default)]
    pub user: Option<String>,
}

/// Display status of a task. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    Overdue,
    Pending,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "Completed",
            TaskStatus::Overdue => "Overdue",
            TaskStatus::Pending => "Pending",
        }
    }
}

impl TaskInfo {
    /// Classify this task relative to the given UTC calendar day.
    ///
    /// Completion wins regardless of the due date.
    pub fn status_at(&self, today: NaiveDate) -> TaskStatus {
        if self.completed {
            TaskStatus::Completed
        } else if self.date.date_naive() < today {
            TaskStatus::Overdue
        } else {
            TaskStatus::Pending
        }
    }

    /// Classify this task against the current UTC day.
    pub fn status(&self) -> TaskStatus {
        self.status_at(Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn task(date: DateTime<Utc>, completed: bool) -> TaskInfo {
        TaskInfo {
            id: "t1".to_string(),
            title: "Buy groceries".to_string(),
            description: String::new(),
            date,
            completed,
            user: None,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_completed_wins_over_any_date() {
        let overdue_date = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(
            task(overdue_date, true).status_at(day(2026, 8, 7)),
            TaskStatus::Completed
        );
        let future_date = Utc.with_ymd_and_hms(2027, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(
            task(future_date, true).status_at(day(2026, 8, 7)),
            TaskStatus::Completed
        );
    }

    #[test]
    fn test_due_before_today_is_overdue() {
        let date = Utc.with_ymd_and_hms(2026, 8, 6, 23, 59, 59).unwrap();
        assert_eq!(task(date, false).status_at(day(2026, 8, 7)), TaskStatus::Overdue);
    }

    #[test]
    fn test_due_today_is_pending() {
        // Even a time earlier today counts as pending: day granularity.
        let date = Utc.with_ymd_and_hms(2026, 8, 7, 0, 0, 1).unwrap();
        assert_eq!(task(date, false).status_at(day(2026, 8, 7)), TaskStatus::Pending);
    }

    #[test]
    fn test_due_later_is_pending() {
        let date = Utc.with_ymd_and_hms(2026, 8, 20, 9, 0, 0).unwrap();
        assert_eq!(task(date, false).status_at(day(2026, 8, 7)), TaskStatus::Pending);
    }
}
