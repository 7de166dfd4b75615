//! Shared shell state and the shell's navigator.

use request_core::guard::SessionGuard;
use request_core::navigation::Navigator;
use request_core::pipeline::Pipeline;
use request_core::session::TokenStore;

use std::sync::Arc;

use log::{debug, info};
use parking_lot::RwLock;

/// The shell's stand-in for `window.location`.
///
/// Holds the current location string; a redirect to the location the user
/// is already at is a no-op, which is what makes racing session evictions
/// benign.
pub struct ShellNavigator {
    location: RwLock<String>,
}

impl ShellNavigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            location: RwLock::new(initial.into()),
        }
    }

    /// Location the user is currently at.
    pub fn current(&self) -> String {
        self.location.read().clone()
    }
}

impl Navigator for ShellNavigator {
    fn redirect_to(&self, location: &str) {
        let mut current = self.location.write();
        if *current == location {
            debug!("Already at {location}, ignoring redirect");
            return;
        }

        info!("Navigating to {location}");
        *current = location.to_string();
    }
}

/// Everything the command handlers need, wired once at startup.
///
/// The store is the same `Arc` the pipeline and guard hold - there is one
/// session, read by both, owned by neither.
pub struct ShellState {
    pipeline: Pipeline,
    store: Arc<dyn TokenStore>,
    guard: SessionGuard,
    navigator: Arc<ShellNavigator>,
}

impl ShellState {
    pub fn new(
        pipeline: Pipeline,
        store: Arc<dyn TokenStore>,
        navigator: Arc<ShellNavigator>,
    ) -> Self {
        let guard = SessionGuard::new(
            Arc::clone(&store),
            Arc::clone(&navigator) as Arc<dyn Navigator>,
        );

        Self {
            pipeline,
            store,
            guard,
            navigator,
        }
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    pub fn guard(&self) -> &SessionGuard {
        &self.guard
    }

    pub fn navigator(&self) -> &ShellNavigator {
        &self.navigator
    }

    /// Presence of a locally stored token is all "logged in" means.
    pub fn logged_in(&self) -> bool {
        self.store.get().is_some()
    }
}
