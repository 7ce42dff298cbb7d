//! Notification polling and unread tracking.
//!
//! While a session is open, the provider fetches due/overdue alerts
//! immediately and then on a fixed interval. Admin sessions use the
//! fleet-wide endpoint and also receive a summary. Unread state is the
//! difference between the current alert list and the persisted
//! [`ViewedSet`]; logging out resets both.

use std::time::Duration;

use api::{NotificationInfo, NotificationSummary, Role};
use dioxus::prelude::*;
use store::ViewedSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationsState {
    pub notifications: Vec<NotificationInfo>,
    pub summary: Option<NotificationSummary>,
    pub loading: bool,
    pub viewed: ViewedSet,
}

impl NotificationsState {
    /// Alerts the user has not seen yet.
    pub fn unviewed_count(&self) -> usize {
        self.viewed.unviewed_count(self.notifications.len())
    }
}

/// Get the shared notification state.
pub fn use_notifications() -> Signal<NotificationsState> {
    use_context::<Signal<NotificationsState>>()
}

/// Provider component that polls the backend while a session is open.
#[component]
pub fn NotificationsProvider(children: Element) -> Element {
    let auth = crate::use_auth();
    let mut state = use_signal(NotificationsState::default);

    // Load the viewed set and the first batch when a session appears;
    // reset everything on logout.
    let _ = use_resource(move || async move {
        let session = auth();
        match session.user {
            Some(ref user) if session.authenticated => {
                let viewed = ViewedSet::load(&store::local_store(), &user.id);
                state.write().viewed = viewed;
                refresh_notifications(state, user.role).await;
            }
            _ => {
                let local = store::local_store();
                let mut s = state.write();
                s.viewed.reset(&local);
                s.notifications.clear();
                s.summary = None;
            }
        }
    });

    // Fixed-interval poll. Overlapping polls are not coalesced; a slow
    // response simply lands before or after the next one.
    use_effect(move || {
        let poll_secs = api::config().notification_poll_secs as u64;
        if poll_secs == 0 {
            return;
        }
        spawn(async move {
            loop {
                crate::sleep(Duration::from_secs(poll_secs)).await;
                let session = auth();
                if !session.authenticated {
                    continue;
                }
                if let Some(user) = session.user {
                    refresh_notifications(state, user.role).await;
                }
            }
        });
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Reload alerts from the role-appropriate endpoint. A failed poll empties
/// the list and the next tick tries again.
pub async fn refresh_notifications(mut state: Signal<NotificationsState>, role: Role) {
    state.write().loading = true;
    if role.is_admin() {
        match api::tasks::get_admin_notifications().await {
            Ok(resp) => {
                let mut s = state.write();
                s.notifications = resp.alerts;
                s.summary = resp.summary;
            }
            Err(err) => {
                tracing::error!("failed to load admin notifications: {err}");
                let mut s = state.write();
                s.notifications.clear();
                s.summary = None;
            }
        }
    } else {
        match api::tasks::get_user_notifications().await {
            Ok(alerts) => {
                let mut s = state.write();
                s.notifications = alerts;
                s.summary = None;
            }
            Err(err) => {
                tracing::error!("failed to load notifications: {err}");
                let mut s = state.write();
                s.notifications.clear();
                s.summary = None;
            }
        }
    }
    state.write().loading = false;
}

/// Mark every current alert as viewed; the unread count drops to zero.
pub fn mark_all_as_viewed(mut state: Signal<NotificationsState>) {
    let total = state().notifications.len();
    let local = store::local_store();
    state.write().viewed.mark_all(&local, total);
}

/// Mark one alert as viewed.
pub fn mark_as_viewed(mut state: Signal<NotificationsState>, index: usize) {
    let local = store::local_store();
    state.write().viewed.mark(&local, index);
}
