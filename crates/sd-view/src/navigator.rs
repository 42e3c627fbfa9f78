//! Route history with an authentication guard.

use sd_core::Session;
use sd_core::enums::ResourceKind;

use crate::route::Route;

/// Where a navigation request ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    Arrived(Route),
    /// The target needed a session; `/signin` was pushed instead.
    Redirected { requested: Route },
}

impl NavOutcome {
    /// The route now on top of the history.
    #[must_use]
    pub fn route(&self) -> &Route {
        match self {
            Self::Arrived(route) => route,
            Self::Redirected { .. } => &Route::SignIn,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<Route>,
    pending: Option<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// History starts at the landing route.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: vec![Route::Landing],
            pending: None,
        }
    }

    #[must_use]
    pub fn current(&self) -> &Route {
        self.history.last().unwrap_or(&Route::Landing)
    }

    #[must_use]
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    /// Route remembered from a guarded redirect.
    #[must_use]
    pub const fn pending(&self) -> Option<&Route> {
        self.pending.as_ref()
    }

    /// Push `route`, or `/signin` when it is protected and `session` is
    /// missing or blank. Navigating to the current route pushes nothing.
    pub fn navigate(&mut self, route: Route, session: Option<&Session>) -> NavOutcome {
        let authenticated = session.is_some_and(Session::is_valid);
        if route.is_protected() && !authenticated {
            tracing::debug!(requested = %route, "guarded route; redirecting to sign-in");
            self.push(Route::SignIn);
            self.pending = Some(route.clone());
            return NavOutcome::Redirected { requested: route };
        }
        self.push(route.clone());
        NavOutcome::Arrived(route)
    }

    /// Open the detail route of a list item.
    pub fn select(
        &mut self,
        kind: ResourceKind,
        id: impl Into<String>,
        session: Option<&Session>,
    ) -> NavOutcome {
        self.navigate(Route::detail(kind, id), session)
    }

    /// Pop to the previous entry. Returns `None` at the start of history.
    ///
    /// The caller re-runs the revealed view's own fetch; no data is kept
    /// per history entry.
    pub fn back(&mut self) -> Option<&Route> {
        if self.history.len() <= 1 {
            return None;
        }
        self.history.pop();
        self.history.last()
    }

    /// After a successful login, resume the remembered route or go home.
    pub fn resume_after_login(&mut self, session: &Session) -> NavOutcome {
        let target = self.pending.take().unwrap_or(Route::Home);
        self.navigate(target, Some(session))
    }

    /// After logout, history collapses to the landing route.
    pub fn reset(&mut self) {
        self.history = vec![Route::Landing];
        self.pending = None;
    }

    fn push(&mut self, route: Route) {
        if self.current() != &route {
            self.history.push(route);
        }
    }
}
