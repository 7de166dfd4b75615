//! HTTP transport adapter.
//!
//! Speaks the gateway's JSON-over-HTTP operation protocol: a POST of
//! `{"operationName", "variables"}` to the operations endpoint, answered
//! with `{"data"}` on success or `{"errors": [...]}` on application
//! failure, where each error may carry a machine-readable
//! `extensions.code`.

use crate::error::TransportError;
use crate::transport::Transport;

use common::{FailureDetail, HttpStatusCode, Operation, Outcome, SubError};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde_json::json;
use url::Url;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpTransport {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: &str, operations_path: &str) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, operations_path, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: &str,
        operations_path: &str,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        // Normalize the trailing slash so join() appends instead of
        // replacing the last path segment.
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        let endpoint = base.join(operations_path.trim_start_matches('/'))?;

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { endpoint, client })
    }

    /// Full URL operations are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Response envelope as the gateway sends it.
#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Vec<WireError>,
}

#[derive(Debug, Deserialize)]
struct WireError {
    message: String,
    #[serde(default)]
    extensions: Option<WireExtensions>,
}

#[derive(Debug, Deserialize)]
struct WireExtensions {
    code: Option<String>,
}

impl WireError {
    fn into_sub_error(self) -> SubError {
        let code = self.extensions.and_then(|ext| ext.code);
        SubError::new(self.message, code)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, operation: Operation) -> Outcome {
        let body = json!({
            "operationName": operation.name(),
            "variables": operation.payload(),
        });

        let mut request = self.client.post(self.endpoint.clone()).json(&body);
        for (name, value) in operation.headers() {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("Operation '{}' transport failure: {e}", operation.name());
                return Outcome::Failure(FailureDetail::network(e.to_string()));
            }
        };

        let status = response.status().as_u16();
        let rejected = !response.status().is_success();

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                return Outcome::Failure(FailureDetail::network(format!(
                    "failed to read response body: {e}"
                )));
            }
        };

        let wire: WireResponse = match serde_json::from_str(&text) {
            Ok(wire) => wire,
            Err(e) if rejected => {
                // Rejected without a decodable body: the status is the
                // only evidence we have.
                debug!("Operation '{}' rejected with HTTP {status}: {e}", operation.name());
                return Outcome::Failure(FailureDetail {
                    message: format!("HTTP {status}"),
                    sub_errors: Vec::new(),
                    transport_status: Some(HttpStatusCode(status)),
                });
            }
            Err(e) => {
                return Outcome::Failure(FailureDetail::network(format!(
                    "malformed response body: {e}"
                )));
            }
        };

        let transport_status = rejected.then_some(HttpStatusCode(status));

        if !wire.errors.is_empty() {
            let sub_errors: Vec<SubError> = wire
                .errors
                .into_iter()
                .map(WireError::into_sub_error)
                .collect();
            let message = sub_errors[0].message.clone();
            return Outcome::Failure(FailureDetail {
                message,
                sub_errors,
                transport_status,
            });
        }

        if rejected {
            return Outcome::Failure(FailureDetail {
                message: format!("HTTP {status}"),
                sub_errors: Vec::new(),
                transport_status,
            });
        }

        match wire.data {
            Some(data) => Outcome::success(data),
            None => Outcome::Failure(FailureDetail::network(
                "response carried neither data nor errors",
            )),
        }
    }
}
