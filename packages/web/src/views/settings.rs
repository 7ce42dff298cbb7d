//! Account settings: profile update, password change, account deletion.

use api::auth::{ChangePasswordRequest, DeleteAccountRequest, UpdateProfileRequest};
use dioxus::prelude::*;
use ui::{log_out, show_flash, use_auth, use_flash, FlashLevel};

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
enum SettingsTab {
    Profile,
    Password,
    Danger,
}

#[component]
pub fn Settings() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let flash = use_flash();

    let mut active_tab = use_signal(|| SettingsTab::Profile);
    let mut loading = use_signal(|| false);

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);

    let mut delete_password = use_signal(String::new);
    let mut confirm_delete = use_signal(|| false);

    if !auth().loading && !auth().authenticated {
        nav.replace(Route::Login {});
    }

    // Keep the profile form in step with the cached user.
    use_effect(move || {
        if let Some(ref user) = auth().user {
            username.set(user.username.clone());
            email.set(user.email.clone());
        }
    });

    let handle_update_profile = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            loading.set(true);
            let req = UpdateProfileRequest {
                username: username().trim().to_string(),
                email: email().trim().to_string(),
            };
            match api::auth::update_profile(&req).await {
                Ok(updated) => {
                    auth.write().user = Some(updated);
                    show_flash(flash, FlashLevel::Success, "Profile updated");
                }
                Err(err) => show_flash(flash, FlashLevel::Error, err.messages().join("; ")),
            }
            loading.set(false);
        });
    };

    let handle_change_password = move |evt: FormEvent| {
        evt.prevent_default();
        if new_password() != confirm_password() {
            show_flash(flash, FlashLevel::Error, "Passwords do not match");
            return;
        }
        spawn(async move {
            loading.set(true);
            let req = ChangePasswordRequest {
                current_password: current_password(),
                new_password: new_password(),
            };
            match api::auth::change_password(&req).await {
                Ok(()) => {
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                    show_flash(flash, FlashLevel::Success, "Password changed");
                }
                Err(err) => show_flash(flash, FlashLevel::Error, err.messages().join("; ")),
            }
            loading.set(false);
        });
    };

    let handle_delete_account = move |evt: FormEvent| {
        evt.prevent_default();
        if !confirm_delete() {
            show_flash(flash, FlashLevel::Error, "Confirm the deletion first");
            return;
        }
        spawn(async move {
            loading.set(true);
            let req = DeleteAccountRequest {
                password: delete_password(),
                confirm_delete: true,
            };
            match api::auth::delete_account(&req).await {
                Ok(()) => {
                    log_out(auth).await;
                    nav.push(Route::Home {});
                }
                Err(err) => show_flash(flash, FlashLevel::Error, err.messages().join("; ")),
            }
            loading.set(false);
        });
    };

    let tab_class = |tab: SettingsTab| {
        if active_tab() == tab {
            "tab tab--active"
        } else {
            "tab"
        }
    };

    let tab_body = match active_tab() {
        SettingsTab::Profile => rsx! {
            div { class: "form-card",
                h2 { class: "form-section-title", "Update profile" }
                form { onsubmit: handle_update_profile,
                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        r#type: "text",
                        class: "form-input",
                        required: true,
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        class: "form-input",
                        required: true,
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                    button {
                        class: "btn btn--primary form-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Updating..." } else { "Update profile" }
                    }
                }
            }
        },
        SettingsTab::Password => rsx! {
            div { class: "form-card",
                h2 { class: "form-section-title", "Change password" }
                form { onsubmit: handle_change_password,
                    label { r#for: "current-password", "Current password" }
                    input {
                        id: "current-password",
                        r#type: "password",
                        class: "form-input",
                        required: true,
                        autocomplete: "current-password",
                        value: current_password(),
                        oninput: move |evt| current_password.set(evt.value()),
                    }
                    label { r#for: "new-password", "New password" }
                    input {
                        id: "new-password",
                        r#type: "password",
                        class: "form-input",
                        required: true,
                        minlength: 6,
                        autocomplete: "new-password",
                        value: new_password(),
                        oninput: move |evt| new_password.set(evt.value()),
                    }
                    label { r#for: "confirm-password", "Confirm new password" }
                    input {
                        id: "confirm-password",
                        r#type: "password",
                        class: "form-input",
                        required: true,
                        autocomplete: "new-password",
                        value: confirm_password(),
                        oninput: move |evt| confirm_password.set(evt.value()),
                    }
                    button {
                        class: "btn btn--primary form-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Changing..." } else { "Change password" }
                    }
                }
            }
        },
        SettingsTab::Danger => rsx! {
            div { class: "form-card form-card--danger",
                h2 { class: "form-section-title form-section-title--danger", "Delete account" }
                p { class: "muted",
                    "This cannot be undone. Your account and every task in it will be removed."
                }
                form { onsubmit: handle_delete_account,
                    label { r#for: "delete-password", "Password" }
                    input {
                        id: "delete-password",
                        r#type: "password",
                        class: "form-input",
                        required: true,
                        autocomplete: "current-password",
                        value: delete_password(),
                        oninput: move |evt| delete_password.set(evt.value()),
                    }
                    label { class: "form-checkbox",
                        input {
                            r#type: "checkbox",
                            checked: confirm_delete(),
                            onchange: move |evt| confirm_delete.set(evt.checked()),
                        }
                        "I understand my account will be deleted permanently"
                    }
                    button {
                        class: "btn btn--danger form-submit",
                        r#type: "submit",
                        disabled: loading() || !confirm_delete(),
                        if loading() { "Deleting..." } else { "Delete account" }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "settings-page",
            h1 { class: "page-title", "Account settings" }

            div { class: "tab-row",
                button { class: tab_class(SettingsTab::Profile), onclick: move |_| active_tab.set(SettingsTab::Profile), "Profile" }
                button { class: tab_class(SettingsTab::Password), onclick: move |_| active_tab.set(SettingsTab::Password), "Password" }
                button { class: tab_class(SettingsTab::Danger), onclick: move |_| active_tab.set(SettingsTab::Danger), "Delete account" }
            }

            {tab_body}
        }
    }
}
