//! The authenticated session.

use serde::{Deserialize, Serialize};

use propkit_core::UserProfile;

/// Client-held proof of authentication: the opaque bearer token plus
/// the authenticated user's profile.
///
/// # Invariants
/// - Token and profile travel together: there is no way to hold one
///   without the other, so save/clear can never split them.
/// - The token is opaque; it is never decoded or expiry-checked on
///   this side. Validity is whatever the server says on the next call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}
