//! Shared harness for pipeline integration tests.
//!
//! Wires a real `HttpTransport` to a wiremock gateway, with the in-memory
//! store and recording navigator standing in for persistence and the
//! browser location.

use request_core::navigation::{Navigator, RecordingNavigator};
use request_core::pipeline::Pipeline;
use request_core::session::{MemoryTokenStore, TokenStore};
use request_core::transport::{HttpTransport, Transport};

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::MockServer;

pub struct TestShell {
    pub server: MockServer,
    pub pipeline: Pipeline,
    pub store: Arc<MemoryTokenStore>,
    pub navigator: Arc<RecordingNavigator>,
}

pub async fn start_shell() -> TestShell {
    let server = MockServer::start().await;

    let store = Arc::new(MemoryTokenStore::new());
    let navigator = Arc::new(RecordingNavigator::new());
    let transport =
        HttpTransport::new(&server.uri(), "/graphql").expect("transport builds");

    let pipeline = Pipeline::builder()
        .store(Arc::clone(&store) as Arc<dyn TokenStore>)
        .navigator(Arc::clone(&navigator) as Arc<dyn Navigator>)
        .transport(Arc::new(transport) as Arc<dyn Transport>)
        .build()
        .expect("pipeline builds");

    TestShell {
        server,
        pipeline,
        store,
        navigator,
    }
}

/// Gateway success envelope.
pub fn data_body(data: Value) -> Value {
    json!({ "data": data })
}

/// Gateway application-failure envelope.
pub fn errors_body(errors: Value) -> Value {
    json!({ "errors": errors })
}
