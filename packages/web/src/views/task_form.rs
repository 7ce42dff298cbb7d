//! Create/edit task form. Both routes land on the same view; edit mode
//! loads the task into the fields first.

use api::tasks::{TaskPatch, TaskPayload};
use chrono::{DateTime, NaiveDate, Utc};
use dioxus::prelude::*;
use ui::{create_task, fetch_task, update_task, use_auth, use_tasks};

use crate::Route;

#[component]
pub fn TaskNew() -> Element {
    rsx! {
        TaskFormView { id: None::<String> }
    }
}

#[component]
pub fn TaskEdit(id: String) -> Element {
    rsx! {
        TaskFormView { id: Some(id) }
    }
}

#[component]
fn TaskFormView(id: Option<String>) -> Element {
    let auth = use_auth();
    let tasks = use_tasks();
    let nav = use_navigator();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut date = use_signal(|| Utc::now().date_naive().to_string());
    let mut submitted = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    if !auth().loading && !auth().authenticated {
        nav.replace(Route::Login {});
    }

    // Edit mode: load the task into the form.
    let edit_id = id.clone();
    let _ = use_resource(move || {
        let edit_id = edit_id.clone();
        async move {
            let Some(edit_id) = edit_id else { return };
            match fetch_task(&edit_id).await {
                Ok(task) => {
                    title.set(task.title);
                    description.set(task.description);
                    date.set(task.date.date_naive().to_string());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    let submit_id = id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submitted.set(true);
        if title().trim().is_empty() || description().trim().is_empty() {
            return;
        }
        let submit_id = submit_id.clone();
        spawn(async move {
            error.set(None);
            let due = parse_due_date(&date());
            let result = match submit_id {
                Some(task_id) => {
                    update_task(
                        tasks,
                        &task_id,
                        TaskPatch {
                            title: Some(title().trim().to_string()),
                            description: Some(description().trim().to_string()),
                            date: Some(due),
                            completed: None,
                        },
                    )
                    .await
                }
                None => create_task(TaskPayload {
                    title: title().trim().to_string(),
                    description: description().trim().to_string(),
                    date: due,
                })
                .await
                .map(|_| ()),
            };
            match result {
                Ok(()) => {
                    nav.push(Route::Tasks {});
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let today = Utc::now().date_naive().to_string();
    let title_missing = submitted() && title().trim().is_empty();
    let description_missing = submitted() && description().trim().is_empty();
    let editing = id.is_some();

    rsx! {
        div { class: "form-page",
            div { class: "form-card",
                h1 { class: "form-title",
                    if editing { "Edit task" } else { "New task" }
                }

                if let Some(ref err) = error() {
                    div { class: "form-error-banner", "{err}" }
                }

                form { onsubmit: handle_submit,
                    label { r#for: "title", "Title" }
                    input {
                        id: "title",
                        r#type: "text",
                        class: if title_missing { "form-input form-input--invalid" } else { "form-input" },
                        placeholder: if title_missing { "A title is required" } else { "e.g. Buy groceries" },
                        value: title(),
                        autofocus: true,
                        oninput: move |evt| title.set(evt.value()),
                    }

                    label { r#for: "description", "Description" }
                    textarea {
                        id: "description",
                        rows: 5,
                        class: if description_missing { "form-input form-input--invalid" } else { "form-input" },
                        placeholder: if description_missing { "A description is required" } else { "e.g. Go to the supermarket for dinner" },
                        value: description(),
                        oninput: move |evt| description.set(evt.value()),
                    }

                    label { r#for: "date", "Due date" }
                    input {
                        id: "date",
                        r#type: "date",
                        class: "form-input",
                        min: "{today}",
                        value: date(),
                        oninput: move |evt| date.set(evt.value()),
                    }

                    div { class: "form-actions",
                        button { class: "btn btn--primary", r#type: "submit", "Save" }
                        button {
                            class: "btn btn--danger",
                            r#type: "button",
                            onclick: move |_| {
                                nav.push(Route::Tasks {});
                            },
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

/// Parse the date input; an empty or malformed value falls back to now.
fn parse_due_date(raw: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_else(Utc::now)
}
