//! The auth context bridging session storage to the rendered UI.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

use propkit_core::UserProfile;

use crate::{Session, SessionStore, SessionStoreError};

/// Failure while changing session state.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token must be a non-empty string")]
    EmptyToken,

    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

/// Owns the session lifecycle and exposes it reactively.
///
/// One context is shared (via `Arc`) by every view and by the API
/// client; no view holds a private session. Besides the client's 401
/// interceptor (which goes through [`AuthContext::invalidate`]), this
/// is the only mutator of session state.
pub struct AuthContext {
    store: Arc<dyn SessionStore>,
    state: watch::Sender<Option<Session>>,
}

impl AuthContext {
    /// Build the context from persisted state, restoring any prior
    /// session so a reload keeps the user logged in without a new
    /// authentication round trip.
    pub fn initialize(store: Arc<dyn SessionStore>) -> Result<Self, AuthError> {
        let restored = store.load()?;
        if restored.is_some() {
            tracing::debug!("restored persisted session");
        }
        let (state, _) = watch::channel(restored);
        Ok(Self { store, state })
    }

    /// Store credentials and update the in-memory state so dependent
    /// views re-render immediately.
    pub fn login(&self, token: impl Into<String>, user: UserProfile) -> Result<(), AuthError> {
        let token = token.into();
        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }

        let session = Session::new(token, user);
        self.store.save(&session)?;
        self.state.send_replace(Some(session));
        Ok(())
    }

    /// Voluntary logout. Clears storage and in-memory state; does not
    /// navigate — the caller decides whether and where to redirect.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.store.clear()?;
        self.state.send_replace(None);
        Ok(())
    }

    /// Involuntary logout, used when the server reports the session as
    /// no longer valid. The in-memory session is dropped even if the
    /// store cannot be cleared; a storage failure must not leave the
    /// app believing it is still authenticated.
    pub fn invalidate(&self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear persisted session during invalidation");
        }
        self.state.send_replace(None);
    }

    /// True iff a token is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Current profile, `None` when logged out.
    pub fn user(&self) -> Option<UserProfile> {
        self.state.borrow().as_ref().map(|s| s.user.clone())
    }

    /// Current bearer token, `None` when logged out. Read by the API
    /// client at call time, never cached across requests.
    pub fn token(&self) -> Option<String> {
        self.state.borrow().as_ref().map(|s| s.token.clone())
    }

    /// Watch the session state; receivers observe login and logout
    /// transitions without polling.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.state.subscribe()
    }
}
