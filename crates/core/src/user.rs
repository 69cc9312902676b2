//! Authenticated user profile as returned by the backend.

use serde::{Deserialize, Serialize};

use crate::{Role, UserId};

/// User account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    /// User is active and can authenticate.
    #[default]
    Active,
    /// User is deactivated and cannot authenticate.
    Inactive,
}

impl core::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UserStatus::Active => f.write_str("ACTIVE"),
            UserStatus::Inactive => f.write_str("INACTIVE"),
        }
    }
}

/// Profile of the authenticated user, stored alongside the session
/// token and read by the shell for role gating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}
