//! App navigation bar and the notifications bell.

use dioxus::prelude::*;

use crate::icons::FaBell;
use crate::notifications::{mark_all_as_viewed, use_notifications};
use crate::Icon;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav { class: "navbar",
            {children}
        }
    }
}

/// Bell with an unread badge. Opening the dropdown marks every current
/// alert as viewed, so the badge clears immediately.
#[component]
pub fn NotificationsBell() -> Element {
    let notifications = use_notifications();
    let mut open = use_signal(|| false);

    let state = notifications();
    let unviewed = state.unviewed_count();

    let toggle = move |_| {
        let opening = !open();
        open.set(opening);
        if opening {
            mark_all_as_viewed(notifications);
        }
    };

    rsx! {
        div { class: "bell",
            button { class: "bell-button", title: "Notifications", onclick: toggle,
                Icon { icon: FaBell, width: 16, height: 16 }
                if unviewed > 0 {
                    span { class: "bell-badge", "{unviewed}" }
                }
            }

            if open() {
                div { class: "bell-dropdown",
                    if let Some(ref summary) = state.summary {
                        div { class: "bell-summary",
                            span { "{summary.overdue_tasks} overdue" }
                            span { "{summary.due_today} due today" }
                            span { "{summary.total_tasks} tasks across {summary.total_users} users" }
                        }
                    }

                    if state.notifications.is_empty() {
                        p { class: "bell-empty", "Nothing due. All caught up." }
                    } else {
                        ul { class: "bell-list",
                            for (index, item) in state.notifications.iter().enumerate() {
                                li { key: "{index}", class: "bell-item",
                                    span { "{item.message}" }
                                    if let Some(date) = item.date {
                                        span { class: "bell-item-date",
                                            {date.format("%d/%m/%Y").to_string()}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
