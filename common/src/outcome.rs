//! Result of executing an operation.

use crate::HttpStatusCode;

use serde_json::Value;

/// What came back from the transport adapter for one operation.
///
/// A tagged variant instead of a loosely-shaped error object so that
/// classification logic downstream is exhaustive and statically checked.
/// Produced by the transport, inspected (never mutated) by the error link,
/// and handed to the caller unchanged.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The server answered the operation.
    Success { payload: Value },
    /// The exchange failed at the application or network level.
    Failure(FailureDetail),
}

impl Outcome {
    pub fn success(payload: Value) -> Self {
        Outcome::Success { payload }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Failure detail, if this outcome is a failure.
    pub fn failure(&self) -> Option<&FailureDetail> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure(detail) => Some(detail),
        }
    }
}

/// Structured failure: application-level sub-errors plus the transport
/// status, kept side by side so no evidence is lost between layers.
#[derive(Debug, Clone)]
pub struct FailureDetail {
    /// Human-readable summary of the failure.
    pub message: String,
    /// Application-level errors reported by the server, possibly empty.
    pub sub_errors: Vec<SubError>,
    /// HTTP status, when the exchange got far enough to produce one.
    pub transport_status: Option<HttpStatusCode>,
}

impl FailureDetail {
    /// A network-level failure: no server response, so no sub-errors and
    /// no transport status.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sub_errors: Vec::new(),
            transport_status: None,
        }
    }

    /// True if any sub-error carries the given machine-readable code.
    pub fn has_code(&self, code: &str) -> bool {
        self.sub_errors
            .iter()
            .any(|sub| sub.code.as_deref() == Some(code))
    }
}

/// One item in a failure's error list.
#[derive(Debug, Clone)]
pub struct SubError {
    /// Human-readable message from the server.
    pub message: String,
    /// Optional machine-readable code (e.g. `UNAUTHENTICATED`).
    pub code: Option<String>,
}

impl SubError {
    pub fn new(message: impl Into<String>, code: Option<String>) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }
}
