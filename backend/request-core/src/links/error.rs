//! Inspects transport outcomes and evicts stale sessions.

use crate::UNAUTHENTICATED_CODE;
use crate::navigation::Navigator;
use crate::session::TokenStore;

use common::Outcome;

use std::sync::Arc;

use log::{error, info};

/// Last link in the chain.
///
/// Failures are logged sub-error by sub-error, tagged with the operation
/// name. A failure is classified unauthenticated when any sub-error carries
/// the `UNAUTHENTICATED` code or the transport status is 401 - either
/// signal alone is enough. On that classification the session is cleared
/// and the user redirected to login, at most once per failing operation no
/// matter how many sub-errors matched.
///
/// The outcome itself is never altered: callers receive exactly what the
/// transport produced, side effects are additive.
pub struct ErrorLink {
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    login_location: String,
}

impl ErrorLink {
    pub fn new(
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        login_location: impl Into<String>,
    ) -> Self {
        Self {
            store,
            navigator,
            login_location: login_location.into(),
        }
    }

    pub fn inspect(&self, operation_name: &str, outcome: &Outcome) {
        let Some(detail) = outcome.failure() else {
            return;
        };

        for sub in &detail.sub_errors {
            error!(
                "Operation '{operation_name}' error: {} (code: {})",
                sub.message,
                sub.code.as_deref().unwrap_or("none")
            );
        }
        error!("Operation '{operation_name}' failed: {}", detail.message);

        // A network-level failure with no sub-errors and no status never
        // reaches this branch.
        let stale = detail.has_code(UNAUTHENTICATED_CODE)
            || detail
                .transport_status
                .is_some_and(|status| status.is_unauthorized());

        if stale {
            info!(
                "Operation '{operation_name}' rejected as unauthenticated, \
                 evicting session"
            );
            self.store.clear();
            self.navigator.redirect_to(&self.login_location);
        }
    }
}
