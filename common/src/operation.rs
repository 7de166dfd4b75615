//! Outbound operation description.

use std::collections::HashMap;

use serde_json::Value;
use uuid::Uuid;

/// Header name the credential link writes the bearer token into.
///
/// Lowercase on purpose: the transport sends it verbatim and HTTP/2 requires
/// lowercase field names.
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// A single outbound API call description.
///
/// Created by a caller, carried through the request pipeline, and consumed
/// by the transport adapter. The header bag is mutated in place by the
/// credential link; nothing else in the pipeline touches the operation.
#[derive(Debug, Clone)]
pub struct Operation {
    id: Uuid,
    name: String,
    payload: Value,
    headers: HashMap<String, String>,
}

impl Operation {
    /// Create an operation with an empty header bag.
    pub fn new(name: impl Into<String>, payload: Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            payload,
            headers: HashMap::new(),
        }
    }

    /// Correlation id, used only for diagnostics.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Operation name as sent to the server (e.g. `Login`, `GetProducts`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Request variables.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// The full header bag, as the transport will send it.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Look up a header by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Set a header, overwriting any existing value under the same name.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }
}
