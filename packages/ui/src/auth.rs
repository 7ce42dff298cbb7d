//! Authentication context and hooks for the UI.

use std::time::Duration;

use api::auth::{LoginRequest, RegisterRequest};
use api::UserInfo;
use dioxus::prelude::*;

/// Session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub authenticated: bool,
    pub loading: bool,
    /// Transient error messages from the last sign-in/sign-up attempt.
    pub errors: Vec<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            authenticated: false,
            loading: true,
            errors: Vec::new(),
        }
    }
}

impl AuthState {
    fn resolved(user: Option<UserInfo>) -> Self {
        Self {
            authenticated: user.is_some(),
            user,
            loading: false,
            errors: Vec::new(),
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that restores and manages the session.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Resolve the stored session on mount.
    let _ = use_resource(move || async move {
        let user = verify_session().await;
        auth_state.set(AuthState::resolved(user));
    });

    // Error banners dismiss themselves after a few seconds.
    use_effect(move || {
        if !auth_state().errors.is_empty() {
            spawn(async move {
                crate::sleep(Duration::from_secs(5)).await;
                auth_state.write().errors.clear();
            });
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Resolve the current session against the backend.
///
/// If verification fails while a token is stored, the token is refreshed
/// once and verification retried; a second failure clears the token.
async fn verify_session() -> Option<UserInfo> {
    match api::auth::verify().await {
        Ok(user) => user,
        Err(err) => {
            if store::load_token().is_some() {
                if let Ok(fresh) = api::auth::refresh_token().await {
                    store::save_token(&fresh.token);
                    if let Ok(user) = api::auth::verify().await {
                        return user;
                    }
                }
                store::clear_token();
            }
            tracing::debug!("session verification failed: {err}");
            None
        }
    }
}

/// Register a new account and open a session with it.
pub async fn sign_up(mut auth: Signal<AuthState>, req: RegisterRequest) {
    match api::auth::register(&req).await {
        Ok(resp) => {
            if let Some(ref token) = resp.token {
                store::save_token(token);
            }
            auth.set(AuthState::resolved(Some(resp.user)));
        }
        Err(err) => {
            auth.write().errors = err.messages();
        }
    }
}

/// Open a session with existing credentials.
pub async fn sign_in(mut auth: Signal<AuthState>, req: LoginRequest) {
    match api::auth::login(&req).await {
        Ok(resp) => {
            if let Some(ref token) = resp.token {
                store::save_token(token);
            }
            auth.set(AuthState::resolved(Some(resp.user)));
        }
        Err(err) => {
            auth.write().errors = err.messages();
        }
    }
}

/// Close the session. The backend call is best effort; local state and the
/// stored token are cleared regardless.
pub async fn log_out(mut auth: Signal<AuthState>) {
    if let Err(err) = api::auth::logout().await {
        tracing::debug!("logout request failed: {err}");
    }
    store::clear_token();
    auth.set(AuthState::resolved(None));
}

/// Button that closes the session and returns to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();

    let onclick = move |_| async move {
        log_out(auth).await;
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
