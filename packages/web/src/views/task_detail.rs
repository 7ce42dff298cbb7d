//! Read-only task view.

use api::TaskInfo;
use dioxus::prelude::*;
use ui::{fetch_task, use_auth};

use crate::Route;

#[component]
pub fn TaskDetail(id: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut task = use_signal(|| Option::<TaskInfo>::None);
    let mut failed = use_signal(|| false);

    if !auth().loading && !auth().authenticated {
        nav.replace(Route::Login {});
    }

    let fetch_id = id.clone();
    let _ = use_resource(move || {
        let fetch_id = fetch_id.clone();
        async move {
            match fetch_task(&fetch_id).await {
                Ok(loaded) => task.set(Some(loaded)),
                Err(_) => failed.set(true),
            }
        }
    });

    rsx! {
        div { class: "form-page",
            if let Some(ref t) = task() {
                div { class: "form-card",
                    h1 { class: "form-title", "{t.title}" }
                    p { class: "task-detail-description", "{t.description}" }
                    p { class: "task-detail-date",
                        "Due: "
                        {t.date.format("%d/%m/%Y, %H:%M").to_string()}
                    }
                    Link { class: "btn btn--primary", to: Route::Tasks {}, "Back to tasks" }
                }
            } else {
                p { class: "muted",
                    if failed() { "Task not found." } else { "Loading task..." }
                }
            }
        }
    }
}
