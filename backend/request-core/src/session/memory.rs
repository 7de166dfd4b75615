//! In-process token store for tests and ephemeral sessions.

use crate::session::TokenStore;

use common::RedactedToken;

use parking_lot::RwLock;

#[derive(Default)]
pub struct MemoryTokenStore {
    slot: RwLock<Option<RedactedToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<RedactedToken> {
        self.slot.read().clone()
    }

    fn set(&self, token: RedactedToken) {
        *self.slot.write() = Some(token);
    }

    fn clear(&self) {
        *self.slot.write() = None;
    }
}
