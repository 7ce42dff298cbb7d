//! Landing page.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "hero",
            h1 { class: "hero-title", "Welcome to your task manager" }
            p { class: "hero-subtitle",
                "Organise your to-dos, keep your ideas in one place, and stay productive."
            }
            Link { class: "btn btn--primary", to: Route::Tasks {}, "View my tasks" }
        }
    }
}
