//! Durable session persistence.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use crate::Session;

/// Storage failure while persisting or clearing a session.
///
/// A *read* never fails with a parse error: a malformed file is
/// treated as logged-out (see [`SessionStore::load`]).
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("session storage io error: {0}")]
    Io(#[from] io::Error),

    #[error("session could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("no writable location for the session file")]
    NoStorageLocation,
}

/// Single source of truth for "who is logged in", surviving reloads.
///
/// Token and user are one [`Session`] value, so both are always saved
/// and cleared together.
pub trait SessionStore: Send + Sync {
    /// Persist the session. Token shape is not validated here; any
    /// non-empty string the server issued is accepted as-is.
    fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Read back a previously persisted session.
    ///
    /// Returns `Ok(None)` when nothing is persisted *or* when the
    /// persisted value is malformed — both mean logged-out.
    fn load(&self) -> Result<Option<Session>, SessionStoreError>;

    /// Remove the persisted session. Clearing an already-empty store
    /// succeeds.
    fn clear(&self) -> Result<(), SessionStoreError>;
}

/// File-backed store: one JSON document in the user's config dir.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store at the default location (`<config_dir>/propkit/session.json`).
    pub fn new() -> Result<Self, SessionStoreError> {
        let dir = dirs::config_dir().ok_or(SessionStoreError::NoStorageLocation)?;
        Ok(Self::at_path(dir.join("propkit").join("session.json")))
    }

    /// Store at an explicit path. Useful for tests and packaged installs.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(session)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Session>(&bytes) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // Malformed persisted state means logged-out, not an error.
                tracing::warn!(path = %self.path.display(), error = %e, "discarding malformed session file");
                Ok(None)
            }
        }
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and embedded use.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        *self.inner.lock().expect("session store poisoned") = Some(session.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        Ok(self.inner.lock().expect("session store poisoned").clone())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        *self.inner.lock().expect("session store poisoned") = None;
        Ok(())
    }
}
