//! Injected navigation capability.
//!
//! The browser original mutated `window.location` directly; here the
//! full-redirect is a trait so the pipeline and guard can be exercised in
//! tests without real navigation.

use parking_lot::Mutex;

use log::debug;

/// Performs a full redirect to a location string.
///
/// Implementations must treat redirecting to the location the user is
/// already at as a safe no-op: two racing auth failures will both ask for
/// the login page.
pub trait Navigator: Send + Sync {
    fn redirect_to(&self, location: &str);
}

/// In-memory navigator that records distinct transitions.
///
/// Ships as a real implementation (not test-gated) so host applications can
/// assert navigation in their own tests.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The location most recently navigated to.
    pub fn current(&self) -> Option<String> {
        self.visited.lock().last().cloned()
    }

    /// Every distinct transition, in order.
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to(&self, location: &str) {
        let mut visited = self.visited.lock();
        if visited.last().is_some_and(|current| current == location) {
            debug!("Already at {location}, ignoring redirect");
            return;
        }
        visited.push(location.to_string());
    }
}
