//! Login and logout.

use crate::error::ShellError;
use crate::router;
use crate::state::ShellState;

use request_core::navigation::Navigator;

use common::{Operation, Outcome, RedactedToken};

use log::{error, info};
use serde_json::json;

/// Submit the `Login` operation and persist the returned session token.
///
/// On success the session is created from the response and the user lands
/// on the dashboard. A failure outcome is surfaced as an error; nothing is
/// stored.
pub async fn login(state: &ShellState, email: &str, password: &str) -> Result<(), ShellError> {
    info!("Logging in as {email}");

    let operation = Operation::new(
        "Login",
        json!({ "email": email, "password": password }),
    );
    let outcome = state.pipeline().submit(operation).await;

    let payload = match outcome {
        Outcome::Success { payload } => payload,
        Outcome::Failure(detail) => {
            error!("Login failed: {}", detail.message);
            return Err(ShellError::login(detail.message));
        }
    };

    let Some(token) = payload["login"]["token"].as_str() else {
        return Err(ShellError::login("login response carried no token"));
    };

    state.store().set(RedactedToken::new(token));
    info!("Session established ({} chars)", token.len());

    state.navigator().redirect_to(router::DASHBOARD);
    Ok(())
}

/// Clear the session and return to the login page.
///
/// Both steps are idempotent, so logging out twice is harmless.
pub fn logout(state: &ShellState) {
    info!("Logging out");
    state.store().clear();
    state.navigator().redirect_to(router::LOGIN);
}
