//! This crate contains all shared UI for the workspace.

use std::time::Duration;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{log_out, sign_in, sign_up, use_auth, AuthProvider, AuthState, LogoutButton};

mod tasks;
pub use tasks::{
    create_task, delete_task, fetch_task, refresh_tasks, update_task, use_tasks, TasksProvider,
    TasksState,
};

mod notifications;
pub use notifications::{
    mark_all_as_viewed, mark_as_viewed, refresh_notifications, use_notifications,
    NotificationsProvider, NotificationsState,
};

mod flash;
pub use flash::{show_flash, use_flash, Flash, FlashBanner, FlashLevel, FlashProvider};

pub mod pagination;
pub use pagination::{Pager, Pagination};

mod task_card;
pub use task_card::TaskCard;

mod navbar;
pub use navbar::{Navbar, NotificationsBell};

/// Sleep on either target; the UI has no tokio runtime in the browser.
pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
