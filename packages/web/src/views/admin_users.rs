//! User administration panel: search, stats, and a paginated table with
//! block/unblock, delete, and (for super admins) role changes.

use api::{Role, UserInfo};
use dioxus::prelude::*;
use ui::{show_flash, use_auth, use_flash, FlashLevel, Pager, Pagination};

use crate::Route;

#[component]
pub fn AdminUsers() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let flash = use_flash();

    let mut users = use_signal(Vec::<UserInfo>::new);
    let mut loading = use_signal(|| true);
    let mut search = use_signal(String::new);
    let mut pager = use_signal(|| Pager::new(10));

    if !auth().loading && !auth().authenticated {
        nav.replace(Route::Login {});
    }

    // Load the list once the session resolves to an admin.
    let _ = use_resource(move || async move {
        let session = auth();
        let Some(ref user) = session.user else { return };
        if !user.role.is_admin() {
            loading.set(false);
            return;
        }
        loading.set(true);
        match api::auth::get_users().await {
            Ok(list) => users.set(list),
            Err(err) => show_flash(flash, FlashLevel::Error, err.messages().join("; ")),
        }
        loading.set(false);
    });

    let session = auth();
    let Some(current) = session.user.clone() else {
        return rsx! {
            p { class: "muted", "Loading..." }
        };
    };

    match current.role {
        Role::User => {
            return rsx! {
                div { class: "admin-denied",
                    h1 { class: "page-title", "User administration" }
                    p { "You do not have administrator permissions." }
                }
            };
        }
        Role::Admin | Role::SuperAdmin => {}
    }

    let all = users();
    let needle = search().to_lowercase();
    let filtered: Vec<UserInfo> = all
        .iter()
        .filter(|u| {
            u.username.to_lowercase().contains(&needle)
                || u.email.to_lowercase().contains(&needle)
                || u.role.as_str().contains(&needle)
        })
        .cloned()
        .collect();

    let total_users = all.len();
    let active_users = all.iter().filter(|u| u.is_active).count();
    let blocked_users = total_users - active_users;

    let page = pager();
    let visible: Vec<UserInfo> = page.slice(&filtered).to_vec();
    let total_filtered = filtered.len();
    let is_super = matches!(current.role, Role::SuperAdmin);
    let current_id = current.id.clone();

    rsx! {
        div { class: "admin-page",
            h1 { class: "page-title", "User administration" }
            p { class: "admin-subtitle",
                "Signed in as "
                span { class: "admin-subtitle-name", "{current.username}" }
                " ({current.role.label()})"
            }

            div { class: "admin-toolbar",
                input {
                    r#type: "text",
                    class: "form-input admin-search",
                    placeholder: "Search users...",
                    value: search(),
                    oninput: move |evt| {
                        search.set(evt.value());
                        pager.write().set_page(1);
                    },
                }
                if !search().is_empty() {
                    button {
                        class: "btn btn--muted",
                        onclick: move |_| {
                            search.set(String::new());
                            pager.write().set_page(1);
                        },
                        "Clear"
                    }
                }
            }

            div { class: "stat-grid",
                div { class: "stat-card stat-card--total",
                    p { class: "stat-label", "Total users" }
                    p { class: "stat-value", "{total_users}" }
                }
                div { class: "stat-card stat-card--completed",
                    p { class: "stat-label", "Active" }
                    p { class: "stat-value", "{active_users}" }
                }
                div { class: "stat-card stat-card--overdue",
                    p { class: "stat-label", "Blocked" }
                    p { class: "stat-value", "{blocked_users}" }
                }
            }

            if loading() {
                p { class: "muted", "Loading users..." }
            } else {
                div { class: "admin-table-wrap",
                    table { class: "admin-table",
                        thead {
                            tr {
                                th { "Username" }
                                th { "Email" }
                                th { "Role" }
                                th { "Status" }
                                th { "Registered" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for row in visible.iter() {
                                UserRow {
                                    key: "{row.id}",
                                    row: row.clone(),
                                    current_id: current_id.clone(),
                                    is_super,
                                    users,
                                }
                            }
                        }
                    }
                    if visible.is_empty() {
                        p { class: "admin-empty",
                            if search().is_empty() { "No registered users." } else { "No users match the search." }
                        }
                    }
                }

                Pagination {
                    current_page: page.page,
                    per_page: page.per_page,
                    total_items: total_filtered,
                    on_page_change: move |p| pager.write().set_page(p),
                    on_per_page_change: move |n| pager.write().set_per_page(n),
                }
            }
        }
    }
}

#[component]
fn UserRow(
    row: UserInfo,
    current_id: String,
    is_super: bool,
    users: Signal<Vec<UserInfo>>,
) -> Element {
    let flash = use_flash();

    let registered = row
        .created_at
        .map(|d| d.format("%d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| "—".to_string());

    let is_self = row.id == current_id;
    // Admin accounts are never deletable from the panel.
    let deletable = !is_self && matches!(row.role, Role::User);

    let toggle_id = row.id.clone();
    let currently_active = row.is_active;
    let handle_toggle = move |_| {
        let id = toggle_id.clone();
        spawn(async move {
            match api::auth::toggle_user_status(&id, !currently_active).await {
                Ok(resp) => {
                    show_flash(flash, FlashLevel::Success, resp.message);
                    let mut list = users.write();
                    if let Some(u) = list.iter_mut().find(|u| u.id == id) {
                        u.is_active = !currently_active;
                    }
                }
                Err(err) => show_flash(flash, FlashLevel::Error, err.messages().join("; ")),
            }
        });
    };

    let delete_id = row.id.clone();
    let delete_name = row.username.clone();
    let handle_delete = move |_| {
        if !confirm_delete(&delete_name) {
            return;
        }
        let id = delete_id.clone();
        spawn(async move {
            match api::auth::delete_user(&id).await {
                Ok(()) => {
                    show_flash(flash, FlashLevel::Success, "User deleted");
                    users.write().retain(|u| u.id != id);
                }
                Err(err) => show_flash(flash, FlashLevel::Error, err.messages().join("; ")),
            }
        });
    };

    let role_id = row.id.clone();
    let handle_role_change = move |evt: FormEvent| {
        let role = match evt.value().as_str() {
            "admin" => Role::Admin,
            "super_admin" => Role::SuperAdmin,
            _ => Role::User,
        };
        let id = role_id.clone();
        spawn(async move {
            match api::auth::change_user_role(&id, role).await {
                Ok(resp) => {
                    show_flash(flash, FlashLevel::Success, resp.message);
                    let mut list = users.write();
                    if let Some(u) = list.iter_mut().find(|u| u.id == id) {
                        u.role = role;
                    }
                }
                Err(err) => show_flash(flash, FlashLevel::Error, err.messages().join("; ")),
            }
        });
    };

    rsx! {
        tr {
            td { class: "admin-cell-name", "{row.username}" }
            td { "{row.email}" }
            td {
                if is_super && !is_self {
                    select {
                        class: "admin-role-select",
                        value: row.role.as_str(),
                        onchange: handle_role_change,
                        option { value: "user", selected: row.role == Role::User, "User" }
                        option { value: "admin", selected: row.role == Role::Admin, "Admin" }
                        option { value: "super_admin", selected: row.role == Role::SuperAdmin, "Super admin" }
                    }
                } else {
                    span {
                        class: if row.role.is_admin() { "role-badge role-badge--admin" } else { "role-badge" },
                        {row.role.label()}
                    }
                }
            }
            td {
                span {
                    class: if row.is_active { "status-badge status-badge--active" } else { "status-badge status-badge--blocked" },
                    if row.is_active { "Active" } else { "Blocked" }
                }
            }
            td { class: "admin-cell-date", "{registered}" }
            td {
                div { class: "admin-actions",
                    if !is_self {
                        button {
                            class: if row.is_active { "btn btn--danger btn--small" } else { "btn btn--success btn--small" },
                            onclick: handle_toggle,
                            if row.is_active { "Block" } else { "Unblock" }
                        }
                    }
                    if deletable {
                        button {
                            class: "btn btn--danger btn--small",
                            onclick: handle_delete,
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

/// Browser confirm dialog; on native builds there is no dialog to show.
fn confirm_delete(username: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!(
                    "Delete user \"{username}\"? This cannot be undone."
                ))
                .ok()
            })
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = username;
        true
    }
}
