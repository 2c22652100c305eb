//! core/router.rs
//! Which screen is showing, plus the navigation history.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Home,
}

#[derive(Debug, Default)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Moves to `to`. Navigating to the current route is a no-op.
    pub fn navigate(&mut self, to: Route) -> bool {
        if self.current == to {
            return false;
        }
        tracing::debug!(from = ?self.current, ?to, "navigate");
        self.history.push(self.current);
        self.current = to;
        true
    }

    /// Routes left behind, oldest first.
    #[cfg(test)]
    pub fn history(&self) -> &[Route] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_login() {
        let router = Router::new();
        assert_eq!(router.current(), Route::Login);
        assert!(router.history().is_empty());
    }

    #[test]
    fn navigating_to_current_route_is_ignored() {
        let mut router = Router::new();
        assert!(router.navigate(Route::Home));
        assert!(!router.navigate(Route::Home));
        assert_eq!(router.history(), [Route::Login]);
    }

    #[test]
    fn logout_round_trip_records_history() {
        let mut router = Router::new();
        router.navigate(Route::Home);
        router.navigate(Route::Login);
        assert_eq!(router.current(), Route::Login);
        assert_eq!(router.history(), [Route::Login, Route::Home]);
    }
}
