//! Route table and the route guard.

use propkit_auth::AuthContext;

/// Every navigable screen of the administration tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Tenants,
    Properties,
    Landlords,
    Leases,
    Invoices,
    Payments,
    Maintenance,
    /// Account management; rendered in navigation for admins only.
    Accounts,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Tenants => "/tenants",
            Route::Properties => "/properties",
            Route::Landlords => "/landlords",
            Route::Leases => "/leases",
            Route::Invoices => "/invoices",
            Route::Payments => "/payments",
            Route::Maintenance => "/maintenance",
            Route::Accounts => "/accounts",
        }
    }

    /// Everything except the login screen sits behind the guard.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

/// Outcome of guarding a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested subtree unchanged.
    Allow(Route),
    /// Render the login screen and nothing else — no flash of
    /// protected content.
    RedirectToLogin,
}

/// Gate access to the authenticated shell.
///
/// Purely synchronous and derived: no network call, no loading state.
pub fn guard(route: Route, auth: &AuthContext) -> RouteDecision {
    if route.requires_auth() && !auth.is_authenticated() {
        RouteDecision::RedirectToLogin
    } else {
        RouteDecision::Allow(route)
    }
}
