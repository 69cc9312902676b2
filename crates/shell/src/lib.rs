//! `propkit-shell` — the authenticated application shell.
//!
//! Routes and the route guard, the in-process navigator, role-gated
//! navigation, dashboard selection, and the [`AppShell`] flows that
//! wire session, client and navigation together. Everything here is a
//! view-model: a UI binding renders these types, it never re-derives
//! the logic.

pub mod app;
pub mod dashboard;
pub mod nav;
pub mod navigator;
pub mod routes;

pub use app::{AppShell, ShellError};
pub use dashboard::{AdminSummary, DashboardVariant, StaffWorklist};
pub use nav::{nav_items, NavItem};
pub use navigator::{HistoryNavigator, Navigator};
pub use routes::{guard, Route, RouteDecision};
