//! The outbound request pipeline and session-aware route guard.
//!
//! Every API operation passes through a fixed middleware chain: the
//! credential link attaches the persisted session token, the transport
//! adapter performs the exchange, and the error link classifies failures,
//! evicting a stale session when the server says so. The route guard reads
//! the same session store independently on navigation.

pub mod config;
pub mod error;
pub mod guard;
pub mod links;
pub mod navigation;
pub mod pipeline;
pub mod session;
pub mod transport;

#[cfg(test)]
mod tests;

/// Machine-readable code servers attach to authentication failures.
///
/// Must match the gateway byte for byte; either this code on any sub-error
/// or a 401 transport status evicts the session.
pub const UNAUTHENTICATED_CODE: &str = "UNAUTHENTICATED";

/// Location users are sent to when no valid session is present.
pub const LOGIN_LOCATION: &str = "/login";

/// File the session token persists under, inside the app data directory.
pub const SESSION_TOKEN_FILE: &str = "auth_token";

pub const DEFAULT_GATEWAY_HOST: &str = "localhost:4000";
pub const DEFAULT_GATEWAY_BASE_URL: &str =
    const_format::concatcp!("http://", DEFAULT_GATEWAY_HOST);
pub const DEFAULT_OPERATIONS_PATH: &str = "/graphql";
