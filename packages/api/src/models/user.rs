//! # User model
//!
//! [`UserInfo`] is the backend's user record as the client sees it: the id,
//! profile fields, the account role, and the active flag the admin panel
//! toggles. The backend names fields in its own convention (`_id`,
//! `isActive`, `createdAt`); serde renames keep the Rust side clean.
//!
//! [`Role`] is a closed enum — every place that branches on the role matches
//! exhaustively, so a new role fails to compile instead of silently falling
//! through a string comparison.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role, ordered by privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Whether this role can access the user-administration panel.
    pub fn is_admin(&self) -> bool {
        match self {
            Role::Admin | Role::SuperAdmin => true,
            Role::User => false,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
            Role::SuperAdmin => "Super admin",
        }
    }

    /// Wire value, as the backend spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }
}

/// A user record from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(rename = "isActive", default = "default_active")]
    pub is_active: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_decodes_from_wire_names() {
        let role: Role = serde_json::from_str("\"super_admin\"").unwrap();
        assert_eq!(role, Role::SuperAdmin);
        assert!(role.is_admin());
        assert!(!Role::User.is_admin());
    }

    #[test]
    fn test_user_decodes_backend_field_names() {
        let user: UserInfo = serde_json::from_str(
            r#"{
                "_id": "64b0f",
                "username": "ada",
                "email": "ada@example.com",
                "role": "admin",
                "isActive": false,
                "createdAt": "2026-01-12T09:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(user.id, "64b0f");
        assert_eq!(user.role, Role::Admin);
        assert!(!user.is_active);
        assert!(user.created_at.is_some());
    }

    #[test]
    fn test_user_missing_optional_fields() {
        let user: UserInfo =
            serde_json::from_str(r#"{"_id": "1", "username": "bo", "email": "bo@example.com"}"#)
                .unwrap();
        assert_eq!(user.role, Role::User);
        assert!(user.is_active);
        assert!(user.created_at.is_none());
    }
}
