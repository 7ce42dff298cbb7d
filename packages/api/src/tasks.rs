//! Task CRUD and notification endpoints.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Serialize;

use crate::client::{client, ApiError};
use crate::models::notification::{AdminNotifications, NotificationInfo};
use crate::models::task::TaskInfo;

/// Payload for creating a task.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
}

/// Partial update; only the present fields change.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Patch that only flips the completion flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }
}

/// `GET /tasks` — the authenticated user's tasks.
pub async fn get_tasks() -> Result<Vec<TaskInfo>, ApiError> {
    client().get_json("/tasks").await
}

/// `GET /tasks/:id`.
pub async fn get_task(id: &str) -> Result<TaskInfo, ApiError> {
    client().get_json(&format!("/tasks/{id}")).await
}

/// `POST /tasks` — returns the created record.
pub async fn create_task(payload: &TaskPayload) -> Result<TaskInfo, ApiError> {
    client().post_json("/tasks", payload).await
}

/// `PUT /tasks/:id` — returns the updated record.
pub async fn update_task(id: &str, patch: &TaskPatch) -> Result<TaskInfo, ApiError> {
    client().put_json(&format!("/tasks/{id}"), patch).await
}

/// `DELETE /tasks/:id` — true when the backend confirmed with 204.
pub async fn delete_task(id: &str) -> Result<bool, ApiError> {
    let status = client().delete(&format!("/tasks/{id}")).await?;
    Ok(status == StatusCode::NO_CONTENT)
}

/// `GET /notifications` — due/overdue alerts for the current user.
pub async fn get_user_notifications() -> Result<Vec<NotificationInfo>, ApiError> {
    client().get_json("/notifications").await
}

/// `GET /notifications/admin` — fleet-wide alerts plus summary.
pub async fn get_admin_notifications() -> Result<AdminNotifications, ApiError> {
    client().get_json("/notifications/admin").await
}
