use std::sync::Arc;

use tracing::debug;

use crate::auth::{SessionState, SessionStore};

use super::table::{RouteClass, RouteTable, DASHBOARD_ROUTE, LOGIN_ROUTE};

/// Outcome of a guard evaluation. Every transition ends in exactly one of
/// these; the guard has no error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the transition proceed to its target.
    Allow,
    /// Send the transition to the named route instead.
    Redirect(&'static str),
}

/// Navigation guard evaluated once per attempted route transition.
///
/// Decision order matters: expiry is checked before the sliding refresh and
/// before the home/protected rules, so a stale credential is never treated
/// as valid for one extra transition.
pub struct NavigationGuard {
    routes: RouteTable,
    store: Arc<SessionStore>,
}

impl NavigationGuard {
    pub fn new(routes: RouteTable, store: Arc<SessionStore>) -> Self {
        Self { routes, store }
    }

    /// Decide whether the transition to the route named `target` proceeds.
    ///
    /// - An expired session is cleared and redirected to login, regardless
    ///   of target.
    /// - A valid session gets its activity stamp refreshed (sliding
    ///   expiration), then authenticated users are bounced from the landing
    ///   page to the dashboard.
    /// - Without a session, protected targets redirect to login and public
    ///   targets pass through.
    pub fn evaluate(&self, target: &str) -> GuardDecision {
        match self.store.state() {
            SessionState::Expired => {
                debug!(route = target, "Session expired, clearing and redirecting to login");
                self.store.clear();
                GuardDecision::Redirect(LOGIN_ROUTE)
            }
            SessionState::Valid => {
                self.store.touch();
                if self.routes.is_home(target) {
                    debug!(route = target, "Authenticated user on landing page, redirecting");
                    GuardDecision::Redirect(DASHBOARD_ROUTE)
                } else {
                    GuardDecision::Allow
                }
            }
            SessionState::Unauthenticated => match self.routes.classify(target) {
                RouteClass::Protected => {
                    debug!(route = target, "Unauthenticated access to protected route");
                    GuardDecision::Redirect(LOGIN_ROUTE)
                }
                RouteClass::Public => GuardDecision::Allow,
            },
        }
    }
}
