// Unit tests for the pipeline composer, using a scripted transport.

use crate::navigation::{Navigator, RecordingNavigator};
use crate::pipeline::Pipeline;
use crate::session::{MemoryTokenStore, TokenStore};
use crate::transport::Transport;
use crate::{LOGIN_LOCATION, UNAUTHENTICATED_CODE};

use common::{
    AUTHORIZATION_HEADER, FailureDetail, Operation, Outcome, RedactedToken, SubError,
};

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;

/// Transport double that answers with a scripted outcome and records what
/// the pipeline actually handed it.
struct ScriptedTransport {
    outcome: Outcome,
    seen: Mutex<Vec<Operation>>,
}

impl ScriptedTransport {
    fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn seen(&self) -> Vec<Operation> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, operation: Operation) -> Outcome {
        self.seen.lock().push(operation);
        self.outcome.clone()
    }
}

struct Harness {
    pipeline: Pipeline,
    store: Arc<MemoryTokenStore>,
    navigator: Arc<RecordingNavigator>,
    transport: Arc<ScriptedTransport>,
}

fn harness(outcome: Outcome) -> Harness {
    let store = Arc::new(MemoryTokenStore::new());
    let navigator = Arc::new(RecordingNavigator::new());
    let transport = Arc::new(ScriptedTransport::new(outcome));

    let pipeline = Pipeline::builder()
        .store(Arc::clone(&store) as Arc<dyn TokenStore>)
        .navigator(Arc::clone(&navigator) as Arc<dyn Navigator>)
        .transport(Arc::clone(&transport) as Arc<dyn Transport>)
        .build()
        .expect("pipeline builds");

    Harness {
        pipeline,
        store,
        navigator,
        transport,
    }
}

/// **VALUE**: Verifies the chain order - the transport must see the
/// credential the link attached.
///
/// **WHY THIS MATTERS**: The order is load-bearing. If the credential link
/// ran after transport, every request would go out anonymous and the
/// server's 401 would evict a perfectly good session.
#[tokio::test]
async fn given_stored_token_when_submitted_then_transport_sees_bearer_header() {
    let h = harness(Outcome::success(json!({"value": 42})));
    h.store.set(RedactedToken::new("t1"));

    h.pipeline
        .submit(Operation::new("GetX", json!({})))
        .await;

    let seen = h.transport.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].header(AUTHORIZATION_HEADER), Some("Bearer t1"));
}

#[tokio::test]
async fn given_no_session_when_submitted_then_transport_sees_no_authorization() {
    let h = harness(Outcome::success(json!({"value": 42})));

    h.pipeline
        .submit(Operation::new("GetX", json!({})))
        .await;

    let seen = h.transport.seen();
    assert_eq!(seen[0].header(AUTHORIZATION_HEADER), None);
}

#[tokio::test]
async fn given_success_outcome_when_submitted_then_payload_and_session_survive() {
    let h = harness(Outcome::success(json!({"value": 42})));
    h.store.set(RedactedToken::new("t1"));

    let outcome = h
        .pipeline
        .submit(Operation::new("GetX", json!({})))
        .await;

    match outcome {
        Outcome::Success { payload } => assert_eq!(payload["value"], 42),
        Outcome::Failure(detail) => panic!("unexpected failure: {}", detail.message),
    }
    assert_eq!(
        h.store.get().map(|t| t.as_str().to_string()),
        Some("t1".into())
    );
    assert!(h.navigator.visited().is_empty());
}

/// **VALUE**: Verifies classification runs after transport and the caller
/// still receives the untouched failure.
///
/// **WHY THIS MATTERS**: Side effects are additive, never substitutive - a
/// caller racing the redirect must still get a well-formed failure
/// outcome, not an exception or a swallowed result.
#[tokio::test]
async fn given_unauthenticated_failure_when_submitted_then_session_evicted_and_outcome_surfaced() {
    let h = harness(Outcome::Failure(FailureDetail {
        message: String::from("not logged in"),
        sub_errors: vec![SubError::new(
            "not logged in",
            Some(UNAUTHENTICATED_CODE.into()),
        )],
        transport_status: None,
    }));
    h.store.set(RedactedToken::new("t1"));

    let outcome = h
        .pipeline
        .submit(Operation::new("GetY", json!({})))
        .await;

    let detail = outcome.failure().expect("failure surfaced to caller");
    assert_eq!(detail.message, "not logged in");
    assert!(detail.has_code(UNAUTHENTICATED_CODE));

    assert!(h.store.get().is_none());
    assert_eq!(h.navigator.visited(), vec![LOGIN_LOCATION.to_string()]);
}

#[tokio::test]
async fn given_two_failing_auth_submissions_then_eviction_is_idempotent() {
    let h = harness(Outcome::Failure(FailureDetail {
        message: String::from("not logged in"),
        sub_errors: vec![SubError::new(
            "not logged in",
            Some(UNAUTHENTICATED_CODE.into()),
        )],
        transport_status: None,
    }));
    h.store.set(RedactedToken::new("t1"));

    h.pipeline.submit(Operation::new("GetY", json!({}))).await;
    h.pipeline.submit(Operation::new("GetZ", json!({}))).await;

    assert!(h.store.get().is_none());
    assert_eq!(h.navigator.visited(), vec![LOGIN_LOCATION.to_string()]);
}

/// Concurrent submissions are independent traversals sharing only the
/// store; both must complete with their own outcome.
#[tokio::test]
async fn given_concurrent_submissions_then_both_resolve_independently() {
    let h = harness(Outcome::success(json!({"value": 42})));
    h.store.set(RedactedToken::new("t1"));

    let (first, second) = tokio::join!(
        h.pipeline.submit(Operation::new("GetX", json!({}))),
        h.pipeline.submit(Operation::new("GetX", json!({}))),
    );

    assert!(first.is_success());
    assert!(second.is_success());
    assert_eq!(h.transport.seen().len(), 2);
}

#[test]
fn given_builder_missing_transport_when_built_then_error_names_the_component() {
    let store = Arc::new(MemoryTokenStore::new());
    let navigator = Arc::new(RecordingNavigator::new());

    let result = Pipeline::builder()
        .store(store as Arc<dyn TokenStore>)
        .navigator(navigator as Arc<dyn Navigator>)
        .build();

    let error = result.err().expect("build must fail");
    assert!(error.to_string().contains("transport"));
}
