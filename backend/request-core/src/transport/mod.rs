//! The transport boundary.
//!
//! The pipeline treats transport as a black box: one async call that takes
//! the fully-prepared operation and always comes back with an `Outcome`.
//! Retry, batching, and timeout policy belong to the adapter, not the core.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;

use common::{Operation, Outcome};

/// Executes one operation against the gateway.
///
/// Never errors out of band: connectivity failures, malformed bodies, and
/// HTTP-level rejections are all folded into the returned `Outcome` so the
/// error link sees every piece of evidence in one place.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, operation: Operation) -> Outcome;
}
