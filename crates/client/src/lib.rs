//! `propkit-client` — the single HTTP channel between the UI and the
//! backend.
//!
//! Every screen talks to the server through one [`ApiClient`]: the
//! bearer token is attached uniformly on the way out, and every
//! response status passes through the same interceptor stack on the
//! way in. The shipped [`SessionInvalidator`] stage implements the
//! global policy that a single 401 anywhere ends the whole session.

pub mod client;
pub mod envelope;
pub mod error;
pub mod freshness;
pub mod interceptor;
pub mod resources;

pub use client::{ApiClient, ApiClientBuilder};
pub use envelope::LoginResponse;
pub use error::ApiError;
pub use freshness::{FetchSequencer, FetchTicket};
pub use interceptor::{LoginRedirect, ResponseInterceptor, SessionInvalidator};
pub use resources::{Credentials, NewTenant};
