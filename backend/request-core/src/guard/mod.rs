//! Session-aware route guard.

use crate::LOGIN_LOCATION;
use crate::navigation::Navigator;
use crate::session::TokenStore;

use std::sync::Arc;

use log::debug;

/// Outcome of one guarded-navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// A session is present; render the requested content.
    Allowed,
    /// No session; the user has been sent to the login location.
    Redirected,
}

/// Decides, per navigation attempt, whether protected content may render.
///
/// Reads the session store directly - it never goes through the pipeline
/// and never validates the token over the network; a locally stored token
/// is sufficient. Decisions are not cached: every navigation evaluates the
/// store again. The original destination is discarded on redirect; there is
/// no "return to" memory.
#[derive(Clone)]
pub struct SessionGuard {
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    login_location: String,
}

impl SessionGuard {
    pub fn new(store: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            store,
            navigator,
            login_location: LOGIN_LOCATION.to_string(),
        }
    }

    pub fn with_login_location(mut self, location: impl Into<String>) -> Self {
        self.login_location = location.into();
        self
    }

    /// Evaluate one navigation attempt onto guarded content.
    pub fn evaluate(&self) -> GuardDecision {
        if self.store.get().is_some() {
            return GuardDecision::Allowed;
        }

        debug!("No session, redirecting to {}", self.login_location);
        self.navigator.redirect_to(&self.login_location);
        GuardDecision::Redirected
    }

    /// Build protected content only when the navigation is allowed.
    ///
    /// The closure is never invoked on redirect, so guarded content is not
    /// even materialized for logged-out users.
    pub fn render<T>(&self, protected: impl FnOnce() -> T) -> Option<T> {
        match self.evaluate() {
            GuardDecision::Allowed => Some(protected()),
            GuardDecision::Redirected => None,
        }
    }
}
