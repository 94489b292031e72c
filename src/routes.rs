//! Routes
//!
//! Views are switched by a session-owned signal rather than the URL.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Projects,
    Tasks,
    Team,
}

impl Route {
    /// Entries of the sidebar, in order
    pub const NAV: [Route; 4] = [Route::Dashboard, Route::Projects, Route::Tasks, Route::Team];

    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Login => "Sign in",
            Route::Register => "Create account",
            Route::Dashboard => "Dashboard",
            Route::Projects => "Projects",
            Route::Tasks => "Tasks",
            Route::Team => "Team",
        }
    }

    /// Route guard: protected views fall back to Login without a session
    pub fn resolve(requested: Route, authenticated: bool) -> Route {
        if requested.is_protected() && !authenticated {
            Route::Login
        } else {
            requested
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_redirects_to_login() {
        for route in Route::NAV {
            assert_eq!(Route::resolve(route, false), Route::Login);
            assert_eq!(Route::resolve(route, true), route);
        }
    }

    #[test]
    fn test_public_routes_always_reachable() {
        assert_eq!(Route::resolve(Route::Register, false), Route::Register);
        assert_eq!(Route::resolve(Route::Login, true), Route::Login);
    }
}
