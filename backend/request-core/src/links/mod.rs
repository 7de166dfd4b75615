//! The middleware links every outbound operation passes through.
//!
//! Order is load-bearing: the credential link runs before transport so the
//! server sees the session, and the error link runs after transport so
//! classification sees the real outcome.

mod credential;
mod error;

pub use credential::CredentialLink;
pub use error::ErrorLink;
