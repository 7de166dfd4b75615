//! Wire-decoding tests for the HTTP transport adapter.

use crate::helpers::{data_body, errors_body};

use request_core::transport::{HttpTransport, Transport};

use common::{Operation, Outcome};

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn transport_for(server: &MockServer) -> HttpTransport {
    HttpTransport::new(&server.uri(), "/graphql").expect("transport builds")
}

#[tokio::test]
async fn given_data_envelope_when_sent_then_success_with_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({"operationName": "GetX"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(data_body(json!({"value": 42}))),
        )
        .mount(&server)
        .await;

    let outcome = transport_for(&server)
        .await
        .send(Operation::new("GetX", json!({})))
        .await;

    match outcome {
        Outcome::Success { payload } => assert_eq!(payload["value"], 42),
        Outcome::Failure(detail) => panic!("unexpected failure: {}", detail.message),
    }
}

/// **VALUE**: Verifies the variables reach the gateway inside the
/// envelope.
///
/// **WHY THIS MATTERS**: The payload is the caller's query input; dropping
/// or renaming it turns every parameterized operation into garbage the
/// server rejects.
#[tokio::test]
async fn given_operation_payload_when_sent_then_variables_are_in_the_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "operationName": "Login",
            "variables": { "email": "test@example.com" }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(data_body(json!({"ok": true}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let outcome = transport_for(&server)
        .await
        .send(Operation::new(
            "Login",
            json!({"email": "test@example.com", "password": "password"}),
        ))
        .await;

    assert!(outcome.is_success());
}

#[tokio::test]
async fn given_errors_envelope_when_sent_then_sub_errors_and_codes_are_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(errors_body(json!([
            { "message": "Invalid credentials" },
            { "message": "stale session", "extensions": { "code": "UNAUTHENTICATED" } }
        ]))))
        .mount(&server)
        .await;

    let outcome = transport_for(&server)
        .await
        .send(Operation::new("Login", json!({})))
        .await;

    let detail = outcome.failure().expect("failure decoded");
    assert_eq!(detail.message, "Invalid credentials");
    assert_eq!(detail.sub_errors.len(), 2);
    assert_eq!(detail.sub_errors[0].code, None);
    assert_eq!(detail.sub_errors[1].code.as_deref(), Some("UNAUTHENTICATED"));
    // A 200 with application errors carries no transport status.
    assert!(detail.transport_status.is_none());
}

#[tokio::test]
async fn given_401_with_errors_body_when_sent_then_status_and_sub_errors_both_survive() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(401).set_body_json(errors_body(json!([
            { "message": "expired" }
        ]))))
        .mount(&server)
        .await;

    let outcome = transport_for(&server)
        .await
        .send(Operation::new("GetX", json!({})))
        .await;

    let detail = outcome.failure().expect("failure decoded");
    assert_eq!(detail.transport_status.map(|s| s.0), Some(401));
    assert_eq!(detail.sub_errors.len(), 1);
}

#[tokio::test]
async fn given_rejection_without_json_body_when_sent_then_status_is_the_only_evidence() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let outcome = transport_for(&server)
        .await
        .send(Operation::new("GetX", json!({})))
        .await;

    let detail = outcome.failure().expect("failure decoded");
    assert_eq!(detail.message, "HTTP 500");
    assert!(detail.sub_errors.is_empty());
    assert_eq!(detail.transport_status.map(|s| s.0), Some(500));
}

#[tokio::test]
async fn given_connection_refused_when_sent_then_network_failure_without_evidence() {
    let server = MockServer::start().await;
    let transport = transport_for(&server).await;
    drop(server);

    let outcome = transport
        .send(Operation::new("GetX", json!({})))
        .await;

    let detail = outcome.failure().expect("failure decoded");
    assert!(detail.sub_errors.is_empty());
    assert!(detail.transport_status.is_none());
}

#[test]
fn given_base_url_with_path_when_built_then_operations_path_appends() {
    let transport =
        HttpTransport::new("http://localhost:4000/api", "/graphql").expect("builds");

    assert_eq!(
        transport.endpoint().as_str(),
        "http://localhost:4000/api/graphql"
    );
}

#[test]
fn given_invalid_base_url_when_built_then_construction_fails() {
    assert!(HttpTransport::new("not a url", "/graphql").is_err());
}
