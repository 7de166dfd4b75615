//! Attaches the persisted session to outgoing operations.

use crate::session::TokenStore;

use common::{AUTHORIZATION_HEADER, Operation};

use std::sync::Arc;

use log::trace;

const BEARER_PREFIX: &str = "Bearer ";

/// First link in the chain: reads the session store and, when a token is
/// present, writes `Bearer <token>` into the operation's authorization
/// header. With no token the header bag is left exactly as the caller
/// built it. Never fails, never clears or refreshes the session.
pub struct CredentialLink {
    store: Arc<dyn TokenStore>,
}

impl CredentialLink {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    pub fn attach(&self, operation: &mut Operation) {
        let Some(token) = self.store.get() else {
            trace!(
                "Operation '{}' submitted without a session",
                operation.name()
            );
            return;
        };

        operation.set_header(
            AUTHORIZATION_HEADER,
            format!("{BEARER_PREFIX}{}", token.as_str()),
        );
    }
}
