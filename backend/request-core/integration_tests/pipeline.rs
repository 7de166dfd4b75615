//! End-to-end pipeline scenarios: credential attachment, classification,
//! and session eviction against a mock gateway.

use crate::helpers::{data_body, errors_body, start_shell};

use request_core::session::TokenStore;
use request_core::{LOGIN_LOCATION, UNAUTHENTICATED_CODE};

use common::{AUTHORIZATION_HEADER, Operation, Outcome, RedactedToken};

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: The happy path end to end - token attached, payload
/// returned, session untouched.
///
/// **WHY THIS MATTERS**: This is the request every page makes on every
/// render. The mock only matches when the exact `Bearer t1` header
/// arrives, so a regression in credential attachment fails loudly here.
#[tokio::test]
async fn given_session_t1_when_get_x_submitted_then_payload_returned_and_session_kept() {
    let shell = start_shell().await;
    shell.store.set(RedactedToken::new("t1"));

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header(AUTHORIZATION_HEADER, "Bearer t1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(data_body(json!({"value": 42}))),
        )
        .expect(1)
        .mount(&shell.server)
        .await;

    let outcome = shell
        .pipeline
        .submit(Operation::new("GetX", json!({})))
        .await;

    match outcome {
        Outcome::Success { payload } => assert_eq!(payload["value"], 42),
        Outcome::Failure(detail) => panic!("unexpected failure: {}", detail.message),
    }

    assert_eq!(
        shell.store.get().map(|t| t.as_str().to_string()),
        Some("t1".into())
    );
    assert!(shell.navigator.visited().is_empty());
}

/// **VALUE**: The full eviction path - an UNAUTHENTICATED sub-error clears
/// the session, records one redirect, and still surfaces the failure.
#[tokio::test]
async fn given_session_t1_when_get_y_rejected_then_session_evicted_and_failure_surfaced() {
    let shell = start_shell().await;
    shell.store.set(RedactedToken::new("t1"));

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(errors_body(json!([
            {
                "message": "session expired",
                "extensions": { "code": UNAUTHENTICATED_CODE }
            }
        ]))))
        .expect(1)
        .mount(&shell.server)
        .await;

    let outcome = shell
        .pipeline
        .submit(Operation::new("GetY", json!({})))
        .await;

    let detail = outcome.failure().expect("failure surfaced");
    assert!(detail.has_code(UNAUTHENTICATED_CODE));
    assert_eq!(detail.message, "session expired");

    assert!(shell.store.get().is_none());
    assert_eq!(shell.navigator.visited(), vec![LOGIN_LOCATION.to_string()]);
}

#[tokio::test]
async fn given_no_session_when_submitted_then_request_carries_no_authorization_header() {
    let shell = start_shell().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(data_body(json!({"ok": true}))),
        )
        .mount(&shell.server)
        .await;

    shell
        .pipeline
        .submit(Operation::new("GetProducts", json!({})))
        .await;

    let requests = shell
        .server
        .received_requests()
        .await
        .expect("requests recorded");
    assert_eq!(requests.len(), 1);
    assert!(
        !requests[0].headers.contains_key(AUTHORIZATION_HEADER),
        "anonymous request must not carry an authorization header"
    );
}

/// A bare 401, with no coded sub-error, is enough to evict.
#[tokio::test]
async fn given_401_response_when_submitted_then_session_evicted() {
    let shell = start_shell().await;
    shell.store.set(RedactedToken::new("t1"));

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(401).set_body_json(errors_body(json!([
            { "message": "token expired" }
        ]))))
        .mount(&shell.server)
        .await;

    let outcome = shell
        .pipeline
        .submit(Operation::new("GetProfile", json!({})))
        .await;

    let detail = outcome.failure().expect("failure surfaced");
    assert_eq!(detail.transport_status.map(|s| s.0), Some(401));

    assert!(shell.store.get().is_none());
    assert_eq!(shell.navigator.visited(), vec![LOGIN_LOCATION.to_string()]);
}

/// Connectivity failure: no evidence of a stale session, so the session
/// must survive.
#[tokio::test]
async fn given_unreachable_gateway_when_submitted_then_failure_without_eviction() {
    let shell = start_shell().await;
    shell.store.set(RedactedToken::new("t1"));

    // Shut the gateway down so the connection is refused.
    drop(shell.server);

    let outcome = shell
        .pipeline
        .submit(Operation::new("GetX", json!({})))
        .await;

    let detail = outcome.failure().expect("failure surfaced");
    assert!(detail.sub_errors.is_empty());
    assert!(detail.transport_status.is_none());

    assert!(shell.store.get().is_some());
    assert!(shell.navigator.visited().is_empty());
}

/// **VALUE**: Two racing operations both rejected as unauthenticated end
/// with one cleared session and one observable navigation target.
///
/// **WHY THIS MATTERS**: Pages fire several queries per render. When a
/// session goes stale they all fail together; the second eviction must be
/// a no-op, not a second redirect.
#[tokio::test]
async fn given_racing_auth_failures_when_submitted_then_single_navigation_target() {
    let shell = start_shell().await;
    shell.store.set(RedactedToken::new("t1"));

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(errors_body(json!([
            {
                "message": "session expired",
                "extensions": { "code": UNAUTHENTICATED_CODE }
            }
        ]))))
        .mount(&shell.server)
        .await;

    let (first, second) = tokio::join!(
        shell.pipeline.submit(Operation::new("GetY", json!({}))),
        shell.pipeline.submit(Operation::new("GetZ", json!({}))),
    );

    assert!(first.failure().is_some());
    assert!(second.failure().is_some());

    assert!(shell.store.get().is_none());
    assert_eq!(shell.navigator.visited(), vec![LOGIN_LOCATION.to_string()]);
}
