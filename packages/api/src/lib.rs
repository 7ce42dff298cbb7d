//! # API crate — typed REST client for the TaskTrack backend
//!
//! Every page and shared store in the workspace talks to the backend through this
//! crate. The backend itself is an external service; this crate owns the wire
//! models, the shared HTTP client, and one async function per endpoint.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Shared `reqwest` client (lazy singleton), bearer-token attach, [`ApiError`] |
//! | [`config`] | [`ClientConfig`] — base URL, poll interval, TOML (de)serialisation |
//! | [`auth`] | Session, profile, and user-administration endpoints |
//! | [`tasks`] | Task CRUD and notification endpoints |
//! | [`models`] | Wire models (`UserInfo`, `TaskInfo`, `NotificationInfo`, …) |
//!
//! ## Conventions
//!
//! The backend speaks JSON with Mongo-style field names (`_id`, camelCase); the
//! models carry the serde renames so the rest of the workspace sees plain Rust
//! names. Error bodies arrive either as a bare array of message strings or as
//! `{ "message": "..." }` — both decode into [`ApiError::Backend`].

pub mod auth;
pub mod client;
pub mod config;
pub mod models;
pub mod tasks;

pub use client::{configure, ApiError};
pub use config::ClientConfig;
pub use models::notification::{AdminNotifications, NotificationInfo, NotificationSummary};
pub use models::task::{TaskInfo, TaskStatus};
pub use models::user::{Role, UserInfo};

/// Runtime configuration the client was initialised with (defaults if
/// [`configure`] was never called).
pub fn config() -> &'static ClientConfig {
    client::current_config()
}
