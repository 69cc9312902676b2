//! In-process navigation state.

use std::sync::Mutex;

use propkit_client::LoginRedirect;

use crate::Route;

/// Navigation seam between the shell and whatever actually moves the
/// screen. A UI binding supplies its own implementation; tests and the
/// default shell use [`HistoryNavigator`].
pub trait Navigator: Send + Sync {
    /// Replace the current route (no history entry semantics here).
    fn replace(&self, route: Route);
    fn current(&self) -> Route;
}

/// Plain in-process navigator. Starts on the login screen.
pub struct HistoryNavigator {
    current: Mutex<Route>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(Route::Login),
        }
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for HistoryNavigator {
    fn replace(&self, route: Route) {
        let mut current = self.current.lock().expect("navigator poisoned");
        if *current != route {
            tracing::debug!(from = current.path(), to = route.path(), "navigate");
        }
        *current = route;
    }

    fn current(&self) -> Route {
        *self.current.lock().expect("navigator poisoned")
    }
}

/// The forced navigation half of the 401 policy: the client's
/// interceptor knows only this trait, the shell decides it means the
/// login screen.
impl LoginRedirect for HistoryNavigator {
    fn redirect_to_login(&self) {
        self.replace(Route::Login);
    }
}
