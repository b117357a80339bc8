//! Client-side router with a back stack

use tracing::debug;

use super::Route;

/// Result of a route transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChange {
    pub from: Route,
    pub to: Route,
}

impl RouteChange {
    /// Whether the catalog listing was just entered from another route
    pub fn enters_catalog(&self) -> bool {
        self.to == Route::Catalog && self.from != Route::Catalog
    }
}

/// Tracks the current route and the routes visited before it
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    /// Create a router positioned at `initial` with no history
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Navigate to `route`, pushing the current route onto the back stack.
    ///
    /// Navigating to the route already shown does nothing.
    pub fn navigate(&mut self, route: Route) -> Option<RouteChange> {
        if route == self.current {
            return None;
        }

        let from = std::mem::replace(&mut self.current, route);
        self.history.push(from.clone());

        let change = RouteChange { from, to: self.current.clone() };
        debug!(from = %change.from, to = %change.to, "navigate");
        Some(change)
    }

    /// Return to the previous route. With an empty back stack this falls back
    /// to the catalog unless it is already shown.
    pub fn back(&mut self) -> Option<RouteChange> {
        let target = match self.history.pop() {
            Some(route) => route,
            None if self.current != Route::Catalog => Route::Catalog,
            None => return None,
        };

        let from = std::mem::replace(&mut self.current, target);
        let change = RouteChange { from, to: self.current.clone() };
        debug!(from = %change.from, to = %change.to, "back");
        Some(change)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Catalog)
    }
}
