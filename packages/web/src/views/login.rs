//! Login page view with email/password form.

use api::auth::LoginRequest;
use dioxus::prelude::*;
use ui::{sign_in, use_auth};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitted = use_signal(|| false);

    // Already signed in: straight to the task list.
    if !auth().loading && auth().authenticated {
        nav.replace(Route::Tasks {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        submitted.set(true);
        if email().trim().is_empty() || password().is_empty() {
            return;
        }
        spawn(async move {
            sign_in(
                auth,
                LoginRequest {
                    email: email().trim().to_string(),
                    password: password(),
                },
            )
            .await;
        });
    };

    let email_missing = submitted() && email().trim().is_empty();
    let password_missing = submitted() && password().is_empty();

    rsx! {
        div { class: "form-page",
            div { class: "form-card",
                for error in auth().errors {
                    div { class: "form-error-banner", "{error}" }
                }

                h1 { class: "form-title", "Sign in" }

                form { onsubmit: handle_login,
                    input {
                        r#type: "email",
                        class: if email_missing { "form-input form-input--invalid" } else { "form-input" },
                        placeholder: if email_missing { "An email address is required" } else { "Email" },
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        class: if password_missing { "form-input form-input--invalid" } else { "form-input" },
                        placeholder: if password_missing { "A password is required" } else { "Password" },
                        value: password(),
                        autocomplete: "current-password",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button { class: "btn btn--primary form-submit", r#type: "submit", "Sign in" }
                }

                p { class: "form-footnote",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Sign up" }
                }
            }
        }
    }
}
