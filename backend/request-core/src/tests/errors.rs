// Unit tests for error aggregation and display.

use crate::error::{ConfigError, CoreError, PipelineError, SessionError, TransportError};

use common::ErrorLocation;

use std::path::PathBuf;

#[test]
fn given_domain_errors_when_wrapped_then_core_error_displays_transparently() {
    let session: CoreError = SessionError::read(
        PathBuf::from("/tmp/auth_token"),
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    )
    .into();
    assert!(session.to_string().contains("Token Read Error"));
    assert!(session.to_string().contains("auth_token"));

    let pipeline: CoreError = PipelineError::missing("transport").into();
    assert!(pipeline.to_string().contains("transport"));

    let config: CoreError = ConfigError::ValidationError {
        location: ErrorLocation::capture(),
        reason: String::from("gateway timeout_secs must be non-zero"),
    }
    .into();
    assert!(config.to_string().contains("timeout_secs"));

    let transport: CoreError = TransportError::from(url::ParseError::EmptyHost).into();
    assert!(transport.to_string().contains("URL Parse Error"));
}

/// Every variant carries the call site so a swallowed warning can still be
/// traced.
#[test]
fn given_tracked_constructor_when_called_then_location_is_this_file() {
    let error = PipelineError::missing("navigator");

    assert!(error.to_string().contains("errors.rs"));
}
