//! The pipeline composer.

use crate::LOGIN_LOCATION;
use crate::error::PipelineError;
use crate::links::{CredentialLink, ErrorLink};
use crate::navigation::Navigator;
use crate::session::TokenStore;
use crate::transport::Transport;

use common::{Operation, Outcome};

use std::sync::Arc;

use log::debug;

/// Single entry point for submitting operations.
///
/// Composes exactly credential link -> transport -> error link, in that
/// fixed order: credentials must be attached before the exchange, and
/// classification must see the real transport outcome, not a pre-transport
/// stub.
///
/// Cheap to clone; clones share the same store, transport, and navigator.
/// Submissions are independent traversals - concurrent operations share
/// nothing but the session store.
#[derive(Clone)]
pub struct Pipeline {
    inner: Arc<PipelineInner>,
}

struct PipelineInner {
    credential: CredentialLink,
    transport: Arc<dyn Transport>,
    errors: ErrorLink,
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Run one operation through the chain and hand back exactly what the
    /// transport produced.
    pub async fn submit(&self, mut operation: Operation) -> Outcome {
        debug!(
            "Submitting operation '{}' ({})",
            operation.name(),
            operation.id()
        );

        self.inner.credential.attach(&mut operation);

        let name = operation.name().to_owned();
        let outcome = self.inner.transport.send(operation).await;

        self.inner.errors.inspect(&name, &outcome);

        outcome
    }
}

/// Builder wiring the injected collaborators together.
pub struct PipelineBuilder {
    store: Option<Arc<dyn TokenStore>>,
    transport: Option<Arc<dyn Transport>>,
    navigator: Option<Arc<dyn Navigator>>,
    login_location: String,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            transport: None,
            navigator: None,
            login_location: LOGIN_LOCATION.to_string(),
        }
    }

    /// Session store shared with the route guard.
    pub fn store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Where the error link sends users on session eviction.
    pub fn login_location(mut self, location: impl Into<String>) -> Self {
        self.login_location = location.into();
        self
    }

    pub fn build(self) -> Result<Pipeline, PipelineError> {
        let store = self.store.ok_or_else(|| PipelineError::missing("session store"))?;
        let transport = self
            .transport
            .ok_or_else(|| PipelineError::missing("transport"))?;
        let navigator = self
            .navigator
            .ok_or_else(|| PipelineError::missing("navigator"))?;

        Ok(Pipeline {
            inner: Arc::new(PipelineInner {
                credential: CredentialLink::new(Arc::clone(&store)),
                errors: ErrorLink::new(store, navigator, self.login_location),
                transport,
            }),
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
