//! Role tier for staff accounts.

use serde::{Deserialize, Serialize};

/// Capability tier assigned server-side and only *read* by the client.
///
/// Role checks on this side are presentation gating, never access
/// control; the backend re-validates every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full access, including account management.
    Admin,
    /// Operational access: narrower dashboard, no account management.
    Staff,
}

impl Role {
    /// Whether this role may see the account-management surface.
    pub fn manages_accounts(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Staff => "STAFF",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
