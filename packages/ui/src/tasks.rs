//! Task cache shared across pages.
//!
//! The cache mirrors the latest successful `GET /tasks` response for the
//! authenticated user. Writes go to the backend first; the cache then
//! mutates optimistically (replace by id on update, drop on confirmed
//! delete). Nothing here reconciles concurrent edits — the last responding
//! write wins.

use api::tasks::{TaskPatch, TaskPayload};
use api::{ApiError, TaskInfo};
use dioxus::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TasksState {
    pub tasks: Vec<TaskInfo>,
    pub loading: bool,
}

/// Get the shared task cache.
pub fn use_tasks() -> Signal<TasksState> {
    use_context::<Signal<TasksState>>()
}

/// Provider component that keeps the cache in step with the session.
#[component]
pub fn TasksProvider(children: Element) -> Element {
    let auth = crate::use_auth();
    let mut tasks_state = use_signal(TasksState::default);

    // Fetch when a session appears; drop the cache on logout.
    let _ = use_resource(move || async move {
        if auth().authenticated {
            refresh_tasks(tasks_state).await;
        } else {
            tasks_state.set(TasksState::default());
        }
    });

    use_context_provider(|| tasks_state);

    rsx! {
        {children}
    }
}

/// Reload the cache from the backend. A failure keeps the previous list.
pub async fn refresh_tasks(mut state: Signal<TasksState>) {
    state.write().loading = true;
    match api::tasks::get_tasks().await {
        Ok(tasks) => state.set(TasksState {
            tasks,
            loading: false,
        }),
        Err(err) => {
            tracing::error!("failed to load tasks: {err}");
            state.write().loading = false;
        }
    }
}

/// Create a task. The caller decides when to refresh (the task list page
/// refetches on mount).
pub async fn create_task(payload: TaskPayload) -> Result<TaskInfo, ApiError> {
    api::tasks::create_task(&payload).await
}

/// Update a task and replace it in the cache on success.
pub async fn update_task(
    mut state: Signal<TasksState>,
    id: &str,
    patch: TaskPatch,
) -> Result<(), ApiError> {
    let updated = api::tasks::update_task(id, &patch).await?;
    let mut s = state.write();
    if let Some(slot) = s.tasks.iter_mut().find(|t| t.id == id) {
        *slot = updated;
    }
    Ok(())
}

/// Delete a task; the cached entry goes away once the backend confirms.
pub async fn delete_task(mut state: Signal<TasksState>, id: &str) {
    match api::tasks::delete_task(id).await {
        Ok(true) => state.write().tasks.retain(|t| t.id != id),
        Ok(false) => {}
        Err(err) => tracing::error!("failed to delete task {id}: {err}"),
    }
}

/// Fetch a single task without touching the cache.
pub async fn fetch_task(id: &str) -> Result<TaskInfo, ApiError> {
    api::tasks::get_task(id).await
}
