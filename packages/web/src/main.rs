use dioxus::prelude::*;

use ui::{AuthProvider, FlashBanner, FlashProvider, LogoutButton, Navbar, NotificationsBell,
    NotificationsProvider, TasksProvider};
use views::{AdminUsers, Home, Login, Profile, Register, Settings, TaskDetail, TaskEdit, TaskNew,
    Tasks};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/tasks")]
    Tasks {},
    #[route("/add-task")]
    TaskNew {},
    #[route("/tasks/view/:id")]
    TaskDetail { id: String },
    #[route("/tasks/:id")]
    TaskEdit { id: String },
    #[route("/profile")]
    Profile {},
    #[route("/settings")]
    Settings {},
    #[route("/admin")]
    AdminUsers {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    api::configure(client_config());
    dioxus::launch(App);
}

/// Backend base URL comes from the build environment when set; everything
/// else keeps its default.
fn client_config() -> api::ClientConfig {
    match option_env!("TASKTRACK_API_URL") {
        Some(url) => api::ClientConfig::default().with_base_url(url),
        None => api::ClientConfig::default(),
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            TasksProvider {
                NotificationsProvider {
                    FlashProvider {
                        Router::<Route> {}
                    }
                }
            }
        }
    }
}

/// Navbar plus the routed page.
#[component]
fn Shell() -> Element {
    let auth = ui::use_auth();
    let session = auth();

    rsx! {
        Navbar {
            Link { class: "navbar-brand", to: Route::Home {},
                h1 { "TaskTrack" }
            }
            div { class: "navbar-links",
                if session.authenticated {
                    if let Some(ref user) = session.user {
                        span { class: "navbar-welcome", "Welcome, {user.username}" }
                        if user.role.is_admin() {
                            Link { class: "btn btn--muted", to: Route::AdminUsers {}, "Users" }
                        }
                    }
                    Link { class: "btn btn--primary", to: Route::TaskNew {}, "New task" }
                    Link { class: "btn btn--muted", to: Route::Profile {}, "Profile" }
                    NotificationsBell {}
                    LogoutButton { class: "btn btn--danger" }
                } else {
                    Link { class: "btn btn--primary", to: Route::Login {}, "Sign in" }
                    Link { class: "btn btn--success", to: Route::Register {}, "Sign up" }
                }
            }
        }

        FlashBanner {}

        main { class: "page",
            Outlet::<Route> {}
        }
    }
}
