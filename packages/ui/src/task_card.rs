//! Card for a single task in the list grid.

use api::tasks::TaskPatch;
use api::{TaskInfo, TaskStatus};
use dioxus::prelude::*;

/// Task card with completion toggle, status badge, and actions. Editing is
/// disabled once a task is completed; navigation is delegated to the page
/// through the event handlers.
#[component]
pub fn TaskCard(
    task: TaskInfo,
    on_edit: EventHandler<String>,
    on_view: EventHandler<String>,
) -> Element {
    let tasks = crate::use_tasks();

    let status = task.status();
    let status_class = match status {
        TaskStatus::Completed => "task-status task-status--completed",
        TaskStatus::Overdue => "task-status task-status--overdue",
        TaskStatus::Pending => "task-status task-status--pending",
    };
    let status_label = status.label();
    let due = task.date.format("%d/%m/%Y").to_string();

    let completed = task.completed;
    let toggle_id = task.id.clone();
    let delete_id = task.id.clone();
    let edit_id = task.id.clone();
    let view_id = task.id.clone();

    let toggle = move |_| {
        let id = toggle_id.clone();
        spawn(async move {
            if let Err(err) = crate::update_task(tasks, &id, TaskPatch::completed(!completed)).await
            {
                tracing::error!("failed to toggle task {id}: {err}");
            }
        });
    };

    let delete = move |_| {
        let id = delete_id.clone();
        spawn(async move {
            crate::delete_task(tasks, &id).await;
        });
    };

    rsx! {
        div {
            class: if completed { "task-card task-card--done" } else { "task-card" },

            header { class: "task-card-header",
                h2 {
                    class: if completed { "task-card-title task-card-title--done" } else { "task-card-title" },
                    "{task.title}"
                }
                input {
                    r#type: "checkbox",
                    class: "task-card-check",
                    checked: completed,
                    onchange: toggle,
                }
            }

            if !task.description.is_empty() {
                p { class: "task-card-description", "{task.description}" }
            }

            div { class: "task-card-actions",
                button {
                    class: "btn btn--danger",
                    onclick: delete,
                    "Delete"
                }
                button {
                    class: "btn btn--primary",
                    disabled: completed,
                    onclick: move |_| {
                        if !completed {
                            on_edit.call(edit_id.clone());
                        }
                    },
                    "Edit"
                }
                button {
                    class: "btn btn--success",
                    onclick: move |_| on_view.call(view_id.clone()),
                    "View"
                }
            }

            p { class: "task-card-footer",
                span { class: "task-card-date", "Due: {due}" }
                " — "
                span { class: "{status_class}", "{status_label}" }
            }
        }
    }
}
