//! Task list page.

use dioxus::prelude::*;
use ui::{refresh_tasks, use_auth, use_tasks, TaskCard};

use crate::Route;

#[component]
pub fn Tasks() -> Element {
    let auth = use_auth();
    let tasks = use_tasks();
    let nav = use_navigator();

    if !auth().loading && !auth().authenticated {
        nav.replace(Route::Login {});
    }

    // Refetch on every visit so the grid reflects the latest server state.
    let _ = use_resource(move || async move {
        if auth().authenticated {
            refresh_tasks(tasks).await;
        }
    });

    let state = tasks();

    rsx! {
        if state.tasks.is_empty() {
            h1 { class: "empty-title",
                if state.loading { "Loading tasks..." } else { "No tasks yet" }
            }
        } else {
            div { class: "task-grid",
                for task in state.tasks.iter() {
                    TaskCard {
                        key: "{task.id}",
                        task: task.clone(),
                        on_edit: move |id: String| {
                            nav.push(Route::TaskEdit { id });
                        },
                        on_view: move |id: String| {
                            nav.push(Route::TaskDetail { id });
                        },
                    }
                }
            }
        }
    }
}
