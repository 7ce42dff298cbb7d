//! Notification models. Notifications are derived and ephemeral — the
//! backend generates them from due/overdue tasks on every request, so there
//! is no id to key on; the client tracks viewed state by list index.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A due/overdue alert for the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationInfo {
    pub message: String,
    /// Task the alert refers to, when it refers to one.
    #[serde(rename = "taskId", default)]
    pub task_id: Option<String>,
    /// Due date of the underlying task.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// When the backend generated the alert.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Fleet-wide summary included in the admin notification response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSummary {
    #[serde(rename = "totalUsers", default)]
    pub total_users: u32,
    #[serde(rename = "totalTasks", default)]
    pub total_tasks: u32,
    #[serde(rename = "overdueTasks", default)]
    pub overdue_tasks: u32,
    #[serde(rename = "dueToday", default)]
    pub due_today: u32,
}

/// Admin notification response: alerts plus the fleet summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminNotifications {
    #[serde(default)]
    pub alerts: Vec<NotificationInfo>,
    #[serde(default)]
    pub summary: Option<NotificationSummary>,
}
