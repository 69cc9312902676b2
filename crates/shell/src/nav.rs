//! Role-gated navigation entries.

use propkit_core::Role;

use crate::Route;

/// One entry in the main navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

/// The common item set every staff member sees, in render order.
const COMMON_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", route: Route::Dashboard },
    NavItem { label: "Tenants", route: Route::Tenants },
    NavItem { label: "Properties", route: Route::Properties },
    NavItem { label: "Landlords", route: Route::Landlords },
    NavItem { label: "Leases", route: Route::Leases },
    NavItem { label: "Invoices", route: Route::Invoices },
    NavItem { label: "Payments", route: Route::Payments },
    NavItem { label: "Maintenance", route: Route::Maintenance },
];

/// Navigation for a role: the common set, plus account management for
/// admins. Advisory gating only — what is *permitted* is the server's
/// decision on every call.
pub fn nav_items(role: Role) -> Vec<NavItem> {
    let mut items = COMMON_ITEMS.to_vec();
    if role.manages_accounts() {
        items.push(NavItem {
            label: "Account Management",
            route: Route::Accounts,
        });
    }
    items
}
