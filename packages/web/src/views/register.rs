//! Registration page view.

use api::auth::RegisterRequest;
use dioxus::prelude::*;
use ui::{sign_up, use_auth};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitted = use_signal(|| false);

    if !auth().loading && auth().authenticated {
        nav.replace(Route::Tasks {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        submitted.set(true);
        if username().trim().is_empty() || email().trim().is_empty() || password().is_empty() {
            return;
        }
        spawn(async move {
            sign_up(
                auth,
                RegisterRequest {
                    username: username().trim().to_string(),
                    email: email().trim().to_string(),
                    password: password(),
                },
            )
            .await;
        });
    };

    let username_missing = submitted() && username().trim().is_empty();
    let email_missing = submitted() && email().trim().is_empty();
    let password_missing = submitted() && password().is_empty();

    rsx! {
        div { class: "form-page",
            div { class: "form-card",
                for error in auth().errors {
                    div { class: "form-error-banner", "{error}" }
                }

                h1 { class: "form-title", "Sign up" }

                form { onsubmit: handle_register,
                    input {
                        r#type: "text",
                        class: if username_missing { "form-input form-input--invalid" } else { "form-input" },
                        placeholder: if username_missing { "A username is required" } else { "Username" },
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
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
                        autocomplete: "new-password",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button { class: "btn btn--primary form-submit", r#type: "submit", "Sign up" }
                }

                p { class: "form-footnote",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
