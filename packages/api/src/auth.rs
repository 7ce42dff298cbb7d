//! Session, profile, and user-administration endpoints.
//!
//! One async function per backend route. Request payloads live here next to
//! the functions that send them; field names follow the backend's camelCase
//! convention via serde renames.

use serde::{Deserialize, Serialize};

use crate::client::{client, ApiError};
use crate::models::user::{Role, UserInfo};

/// Registration payload.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Profile update payload.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProfileRequest {
    pub username: String,
    pub email: String,
}

/// Password change payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Account deletion payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAccountRequest {
    pub password: String,
    pub confirm_delete: bool,
}

/// Login/register response: the user record plus a session token when the
/// backend issues one.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(flatten)]
    pub user: UserInfo,
}

/// Refresh response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Status-bearing message the backend returns for admin mutations.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `POST /register` — create an account and open a session.
pub async fn register(req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    client().post_json("/register", req).await
}

/// `POST /login` — open a session.
pub async fn login(req: &LoginRequest) -> Result<AuthResponse, ApiError> {
    client().post_json("/login", req).await
}

/// `GET /verify` — resolve the current session to a user, if any.
pub async fn verify() -> Result<Option<UserInfo>, ApiError> {
    client().get_json_opt("/verify").await
}

/// `POST /logout` — close the session on the backend.
pub async fn logout() -> Result<(), ApiError> {
    client().post_unit("/logout").await
}

/// `POST /refresh-token` — exchange the stored token for a fresh one.
pub async fn refresh_token() -> Result<TokenResponse, ApiError> {
    client().post_empty_json("/refresh-token").await
}

/// `PUT /profile` — update username/email; returns the updated record.
pub async fn update_profile(req: &UpdateProfileRequest) -> Result<UserInfo, ApiError> {
    client().put_json("/profile", req).await
}

/// `PUT /change-password`.
pub async fn change_password(req: &ChangePasswordRequest) -> Result<(), ApiError> {
    client().put_unit("/change-password", req).await
}

/// `DELETE /account` — the password travels in the body.
pub async fn delete_account(req: &DeleteAccountRequest) -> Result<(), ApiError> {
    client().delete_json("/account", req).await
}

/// `GET /users` — every account, admin only.
pub async fn get_users() -> Result<Vec<UserInfo>, ApiError> {
    client().get_json("/users").await
}

/// `GET /users/:id`.
pub async fn get_user(id: &str) -> Result<UserInfo, ApiError> {
    client().get_json(&format!("/users/{id}")).await
}

#[derive(Debug, Clone, Serialize)]
struct ToggleStatusRequest {
    #[serde(rename = "isActive")]
    is_active: bool,
}

/// `PUT /users/:id/toggle-status` — block or unblock an account.
pub async fn toggle_user_status(id: &str, is_active: bool) -> Result<MessageResponse, ApiError> {
    client()
        .put_json(
            &format!("/users/{id}/toggle-status"),
            &ToggleStatusRequest { is_active },
        )
        .await
}

/// `DELETE /users/:id`.
pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    client().delete(&format!("/users/{id}")).await?;
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
struct ChangeRoleRequest {
    role: Role,
}

/// `PUT /users/:id/change-role` — super admin only.
pub async fn change_user_role(id: &str, role: Role) -> Result<MessageResponse, ApiError> {
    client()
        .put_json(&format!("/users/{id}/change-role"), &ChangeRoleRequest { role })
        .await
}
