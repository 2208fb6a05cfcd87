//! Route classification and the navigation guard.
//!
//! Routes are tagged `Public` or `Protected` when the table is built; the
//! guard never string-matches route names against a hardcoded list. The
//! guard itself is a pure decision function over the session store and the
//! clock: every evaluation ends in an allow or a redirect, never an error.

pub mod guard;
pub mod table;

pub use guard::{GuardDecision, NavigationGuard};
pub use table::{Route, RouteClass, RouteTable, DASHBOARD_ROUTE, HOME_ROUTE, LOGIN_ROUTE};
