//! Response interceptor stack.
//!
//! Every response status is shown to every stage before the caller
//! sees the result, so cross-cutting policy (today: the 401 rule) has
//! exactly one place to live and can be unit-tested without a view
//! triggering it.

use std::sync::Arc;

use reqwest::StatusCode;

use propkit_auth::AuthContext;

/// A pipeline stage run against every response.
pub trait ResponseInterceptor: Send + Sync {
    fn on_status(&self, status: StatusCode);
}

/// Receiver of the forced navigation that accompanies session
/// invalidation. The shell's navigator implements this; tests use a
/// recording stub.
pub trait LoginRedirect: Send + Sync {
    fn redirect_to_login(&self);
}

/// The unrecoverable-session policy: any 401, from any call path,
/// clears the whole session and forces navigation to the login
/// screen. The failing call still observes its error afterwards.
pub struct SessionInvalidator {
    auth: Arc<AuthContext>,
    redirect: Arc<dyn LoginRedirect>,
}

impl SessionInvalidator {
    pub fn new(auth: Arc<AuthContext>, redirect: Arc<dyn LoginRedirect>) -> Self {
        Self { auth, redirect }
    }
}

impl ResponseInterceptor for SessionInvalidator {
    fn on_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            tracing::info!("401 received; invalidating session");
            self.auth.invalidate();
            self.redirect.redirect_to_login();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use propkit_auth::MemorySessionStore;
    use propkit_core::{Role, UserId, UserProfile, UserStatus};

    #[derive(Default)]
    struct RecordingRedirect {
        calls: AtomicUsize,
    }

    impl LoginRedirect for RecordingRedirect {
        fn redirect_to_login(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn logged_in_context() -> Arc<AuthContext> {
        let ctx = AuthContext::initialize(Arc::new(MemorySessionStore::new())).unwrap();
        ctx.login(
            "tok-1",
            UserProfile {
                id: UserId::new(),
                full_name: "Ada Stone".to_string(),
                email: "ada@example.com".to_string(),
                role: Role::Admin,
                status: UserStatus::Active,
            },
        )
        .unwrap();
        Arc::new(ctx)
    }

    #[test]
    fn unauthorized_status_clears_session_and_redirects() {
        let auth = logged_in_context();
        let redirect = Arc::new(RecordingRedirect::default());
        let stage = SessionInvalidator::new(auth.clone(), redirect.clone());

        stage.on_status(StatusCode::UNAUTHORIZED);

        assert!(!auth.is_authenticated());
        assert_eq!(redirect.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn other_statuses_leave_the_session_alone() {
        let auth = logged_in_context();
        let redirect = Arc::new(RecordingRedirect::default());
        let stage = SessionInvalidator::new(auth.clone(), redirect.clone());

        for status in [
            StatusCode::OK,
            StatusCode::NOT_FOUND,
            StatusCode::UNPROCESSABLE_ENTITY,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            stage.on_status(status);
        }

        assert!(auth.is_authenticated());
        assert_eq!(redirect.calls.load(Ordering::SeqCst), 0);
    }
}
