// Unit tests for RedactedToken
// The session token must never leak through Debug, Display, or serde.

use crate::RedactedToken;

/// **VALUE**: Verifies the token value never appears in Debug output.
///
/// **WHY THIS MATTERS**: Errors and state snapshots get logged with `{:?}`
/// all over the shell. One leaked token in a log file is a full session
/// compromise.
///
/// **BUG THIS CATCHES**: Would catch if someone replaces the manual Debug
/// impl with `#[derive(Debug)]`.
#[test]
fn given_token_when_debug_formatted_then_value_is_redacted() {
    let token = RedactedToken::new("super-secret-session-token");

    let debug = format!("{:?}", token);

    assert!(!debug.contains("super-secret"), "Debug must not leak the token");
    assert!(debug.contains("REDACTED"), "Debug should show the redaction marker");
}

#[test]
fn given_token_when_display_formatted_then_value_is_redacted() {
    let token = RedactedToken::new("super-secret-session-token");

    let display = format!("{}", token);

    assert!(!display.contains("super-secret"));
    assert!(display.contains("REDACTED"));
}

/// **VALUE**: Verifies serde serialization is refused outright.
///
/// **WHY THIS MATTERS**: Config and state structs in this workspace derive
/// Serialize. If a token field sneaks into one of them, serialization must
/// fail loudly instead of writing the token to disk.
#[test]
fn given_token_when_serialized_then_errors() {
    let token = RedactedToken::new("super-secret-session-token");

    let result = serde_json::to_string(&token);

    assert!(result.is_err(), "Serialization must be refused");
}

#[test]
fn given_token_when_read_explicitly_then_value_and_length_available() {
    let token = RedactedToken::new("abc");

    assert_eq!(token.as_str(), "abc");
    assert_eq!(token.len(), 3);
    assert!(!token.is_empty());
}
