//! Submitting arbitrary operations.

use crate::error::ShellError;
use crate::state::ShellState;

use common::{Operation, Outcome};

use log::debug;
use serde_json::Value;

/// Submit a named operation with a JSON payload and hand back the data.
///
/// The pipeline has already logged the failure and handled any session
/// eviction by the time this returns; the shell only converts the outcome
/// into its own error type for display.
pub async fn call(state: &ShellState, name: &str, payload: Value) -> Result<Value, ShellError> {
    debug!("Calling operation '{name}'");

    let outcome = state.pipeline().submit(Operation::new(name, payload)).await;

    match outcome {
        Outcome::Success { payload } => Ok(payload),
        Outcome::Failure(detail) => {
            Err(ShellError::operation(format!("{name}: {}", detail.message)))
        }
    }
}
