use std::collections::HashMap;

/// Name of the landing route; authenticated users get bounced to the
/// dashboard instead of seeing it.
pub const HOME_ROUTE: &str = "home";

/// Name of the login route, the redirect target for unauthenticated and
/// expired sessions.
pub const LOGIN_ROUTE: &str = "login";

/// Name of the dashboard route, the redirect target for authenticated users
/// hitting the landing page.
pub const DASHBOARD_ROUTE: &str = "dashboard";

/// Access classification for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Reachable without a session.
    Public,
    /// Requires a valid session.
    Protected,
}

/// A route definition: name, path pattern, and access classification.
#[derive(Debug, Clone)]
pub struct Route {
    pub name: String,
    pub path: String,
    pub class: RouteClass,
    /// Marks the landing page. At most one route should carry this.
    pub home: bool,
}

impl Route {
    pub fn public(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            class: RouteClass::Public,
            home: false,
        }
    }

    pub fn protected(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            class: RouteClass::Protected,
            home: false,
        }
    }

    /// The landing page: public, plus the home marker.
    pub fn home(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            class: RouteClass::Public,
            home: true,
        }
    }
}

/// Route table with classification resolved at construction time.
///
/// Routes the table does not know about classify as `Protected`; an
/// unregistered name must never open a hole past the guard.
pub struct RouteTable {
    routes: HashMap<String, Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            routes: routes
                .into_iter()
                .map(|route| (route.name.clone(), route))
                .collect(),
        }
    }

    /// The sprintboard route table.
    pub fn standard() -> Self {
        Self::new(vec![
            Route::home(HOME_ROUTE, "/"),
            Route::public(LOGIN_ROUTE, "/login"),
            Route::public("signup", "/signup"),
            Route::protected(DASHBOARD_ROUTE, "/dashboard"),
            Route::protected("projects", "/projects"),
            Route::protected("project", "/project/:id"),
            Route::protected("sprint", "/sprint/:id"),
            Route::protected("profile", "/profile"),
            Route::protected("members", "/members"),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.get(name)
    }

    /// Classify a route by name. Unknown names default to `Protected`.
    pub fn classify(&self, name: &str) -> RouteClass {
        self.routes
            .get(name)
            .map(|route| route.class)
            .unwrap_or(RouteClass::Protected)
    }

    /// Whether `name` is the landing page.
    pub fn is_home(&self, name: &str) -> bool {
        self.routes.get(name).map(|route| route.home).unwrap_or(false)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}
