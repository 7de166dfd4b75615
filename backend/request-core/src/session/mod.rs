//! Session token persistence.
//!
//! A session is a single optional opaque token: present means "logged in"
//! for guard purposes, nothing client-side validates expiry or signature.
//! The store is the only mutable state shared between the request pipeline
//! and the route guard, so both take it as an injected `Arc<dyn TokenStore>`
//! instead of reaching for a hidden global.
//!
//! # Storage failures
//!
//! The contract is infallible on purpose: a store that cannot be read
//! reports "no token" (the user is treated as logged out), a write or clear
//! that fails is logged and swallowed. Callers never branch on storage
//! errors.

mod file;
mod memory;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;

use common::RedactedToken;

/// Synchronous persistence for the one session token.
///
/// Writes must be visible to every subsequent `get` on the same store, and
/// `clear` must be safe to repeat: two in-flight operations failing with an
/// authentication error will both try to evict the session.
pub trait TokenStore: Send + Sync {
    /// Read the current token, if any.
    fn get(&self) -> Option<RedactedToken>;

    /// Store a token, overwriting any existing one.
    fn set(&self, token: RedactedToken);

    /// Remove the token. Idempotent.
    fn clear(&self);
}
