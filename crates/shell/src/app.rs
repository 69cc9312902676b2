//! The assembled application shell.

use std::sync::Arc;

use thiserror::Error;

use propkit_auth::{AuthContext, AuthError, SessionStore};
use propkit_client::{ApiClient, ApiClientBuilder, ApiError, Credentials, SessionInvalidator};
use propkit_core::Role;

use crate::dashboard::DashboardVariant;
use crate::nav::{nav_items, NavItem};
use crate::navigator::{HistoryNavigator, Navigator};
use crate::routes::{guard, Route, RouteDecision};

/// Failure surfaced by a shell flow.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Composition root of the client application.
///
/// One shell per process: it owns the single shared [`AuthContext`],
/// the single [`ApiClient`] wired with the 401 interceptor, and the
/// navigator the interceptor redirects through. Views receive these by
/// reference — nothing here is an ambient global.
pub struct AppShell {
    auth: Arc<AuthContext>,
    client: Arc<ApiClient>,
    navigator: Arc<HistoryNavigator>,
}

impl AppShell {
    /// Wire the full pipeline against a fixed backend base address,
    /// restoring any persisted session.
    pub fn assemble(
        base_url: impl Into<String>,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self, ShellError> {
        let auth = Arc::new(AuthContext::initialize(store)?);
        let navigator = Arc::new(HistoryNavigator::new());
        let client = ApiClientBuilder::new(base_url, auth.clone())
            .with_interceptor(Arc::new(SessionInvalidator::new(
                auth.clone(),
                navigator.clone(),
            )))
            .build()?;

        Ok(Self {
            auth,
            client: Arc::new(client),
            navigator,
        })
    }

    pub fn auth(&self) -> &Arc<AuthContext> {
        &self.auth
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    pub fn navigator(&self) -> &Arc<HistoryNavigator> {
        &self.navigator
    }

    /// Post credentials; on success store the session and land on the
    /// dashboard. On failure nothing is stored and no navigation
    /// happens — the login form stays open for a retry.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), ShellError> {
        let login = self
            .client
            .login(&Credentials {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        self.auth.login(login.token, login.user)?;
        self.navigator.replace(Route::Dashboard);
        Ok(())
    }

    /// Voluntary logout; the shell chooses to land on the login screen.
    pub fn sign_out(&self) -> Result<(), ShellError> {
        self.auth.logout()?;
        self.navigator.replace(Route::Login);
        Ok(())
    }

    /// Guarded navigation: allowed routes are entered, everything else
    /// lands on the login screen.
    pub fn open(&self, route: Route) -> RouteDecision {
        let decision = guard(route, &self.auth);
        match decision {
            RouteDecision::Allow(route) => self.navigator.replace(route),
            RouteDecision::RedirectToLogin => self.navigator.replace(Route::Login),
        }
        decision
    }

    /// Navigation entries for the current user; empty when logged out.
    pub fn navigation(&self) -> Vec<NavItem> {
        self.current_role().map(nav_items).unwrap_or_default()
    }

    /// Dashboard variant for the current user, `None` when logged out.
    pub fn dashboard(&self) -> Option<DashboardVariant> {
        self.current_role().map(DashboardVariant::for_role)
    }

    fn current_role(&self) -> Option<Role> {
        self.auth.user().map(|u| u.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propkit_auth::MemorySessionStore;
    use propkit_core::{UserId, UserProfile, UserStatus};

    fn shell() -> AppShell {
        // The base address is never dialed in these tests.
        AppShell::assemble("http://127.0.0.1:9", Arc::new(MemorySessionStore::new())).unwrap()
    }

    fn seed_login(shell: &AppShell, role: Role) {
        shell
            .auth()
            .login(
                "tok-seed",
                UserProfile {
                    id: UserId::new(),
                    full_name: "Ada Stone".to_string(),
                    email: "ada@example.com".to_string(),
                    role,
                    status: UserStatus::Active,
                },
            )
            .unwrap();
    }

    #[test]
    fn opening_a_protected_route_logged_out_lands_on_login() {
        let shell = shell();

        let decision = shell.open(Route::Tenants);

        assert_eq!(decision, RouteDecision::RedirectToLogin);
        assert_eq!(shell.navigator().current(), Route::Login);
    }

    #[test]
    fn opening_a_protected_route_logged_in_enters_it() {
        let shell = shell();
        seed_login(&shell, Role::Staff);

        let decision = shell.open(Route::Leases);

        assert_eq!(decision, RouteDecision::Allow(Route::Leases));
        assert_eq!(shell.navigator().current(), Route::Leases);
    }

    #[test]
    fn navigation_and_dashboard_follow_the_role() {
        let shell = shell();
        assert!(shell.navigation().is_empty());
        assert_eq!(shell.dashboard(), None);

        seed_login(&shell, Role::Admin);
        assert_eq!(shell.dashboard(), Some(DashboardVariant::Admin));
        assert!(shell
            .navigation()
            .iter()
            .any(|i| i.route == Route::Accounts));
    }

    #[test]
    fn sign_out_clears_session_and_returns_to_login() {
        let shell = shell();
        seed_login(&shell, Role::Staff);
        shell.navigator().replace(Route::Payments);

        shell.sign_out().unwrap();

        assert!(!shell.auth().is_authenticated());
        assert_eq!(shell.navigator().current(), Route::Login);
    }
}
