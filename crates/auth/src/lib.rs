//! `propkit-auth` — session state and its lifecycle.
//!
//! This crate is intentionally decoupled from HTTP: it owns "who is
//! logged in" (the [`Session`]), where that survives reloads (the
//! [`SessionStore`]), and the reactive view of it the rest of the
//! application consumes (the [`AuthContext`]).

pub mod context;
pub mod session;
pub mod store;

pub use context::{AuthContext, AuthError};
pub use session::Session;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, SessionStoreError};
