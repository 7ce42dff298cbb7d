//! Profile page: account info and task statistics.

use api::TaskStatus;
use chrono::Utc;
use dioxus::prelude::*;
use ui::{use_auth, use_tasks};

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let tasks = use_tasks();
    let nav = use_navigator();

    if !auth().loading && !auth().authenticated {
        nav.replace(Route::Login {});
    }

    let state = tasks();
    let today = Utc::now().date_naive();
    let total = state.tasks.len();
    let completed = state.tasks.iter().filter(|t| t.completed).count();
    let overdue = state
        .tasks
        .iter()
        .filter(|t| t.status_at(today) == TaskStatus::Overdue)
        .count();
    // Newest first; the backend appends, so the tail is the most recent.
    let recent: Vec<_> = state.tasks.iter().rev().take(5).cloned().collect();

    rsx! {
        div { class: "profile-page",
            h1 { class: "page-title", "My profile" }

            if let Some(ref user) = auth().user {
                div { class: "profile-card",
                    div { class: "profile-fields",
                        p {
                            span { class: "profile-label", "Username: " }
                            span { class: "profile-value", "{user.username}" }
                        }
                        p {
                            span { class: "profile-label", "Email: " }
                            span { class: "profile-value", "{user.email}" }
                        }
                        p {
                            span { class: "profile-label", "Role: " }
                            span { class: "profile-value", {user.role.label()} }
                        }
                    }
                    Link { class: "btn btn--primary", to: Route::Settings {}, "Settings" }
                }
            }

            div { class: "stat-grid",
                div { class: "stat-card stat-card--total",
                    p { class: "stat-label", "Total tasks" }
                    p { class: "stat-value", "{total}" }
                }
                div { class: "stat-card stat-card--completed",
                    p { class: "stat-label", "Completed" }
                    p { class: "stat-value", "{completed}" }
                }
                div { class: "stat-card stat-card--overdue",
                    p { class: "stat-label", "Overdue" }
                    p { class: "stat-value", "{overdue}" }
                }
            }

            div { class: "profile-card",
                p { class: "profile-recent-title", "Latest tasks" }
                if recent.is_empty() {
                    p { class: "muted", "Nothing here yet." }
                } else {
                    ul { class: "profile-recent-list",
                        for task in recent.iter() {
                            li { key: "{task.id}", class: "profile-recent-item",
                                span { "{task.title}" }
                                span {
                                    class: if task.completed { "task-status task-status--completed" } else { "task-status task-status--pending" },
                                    if task.completed { "Completed" } else { "Pending" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
