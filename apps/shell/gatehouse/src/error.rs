use common::ErrorLocation;

use thiserror::Error;

/// Errors surfaced by the shell itself.
///
/// Core errors are converted at the command boundary so the loop only ever
/// prints one error type; location tracking is preserved through the
/// conversion.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Wiring failed before the loop could start
    #[error("Startup Error: {message} {location}")]
    Startup {
        message: String,
        location: ErrorLocation,
    },

    /// The login operation failed or returned no token
    #[error("Login Error: {message} {location}")]
    Login {
        message: String,
        location: ErrorLocation,
    },

    /// A submitted operation came back as a failure
    #[error("Operation Error: {message} {location}")]
    Operation {
        message: String,
        location: ErrorLocation,
    },
}

impl ShellError {
    #[track_caller]
    pub fn startup(message: impl Into<String>) -> Self {
        ShellError::Startup {
            message: message.into(),
            location: ErrorLocation::capture(),
        }
    }

    #[track_caller]
    pub fn login(message: impl Into<String>) -> Self {
        ShellError::Login {
            message: message.into(),
            location: ErrorLocation::capture(),
        }
    }

    #[track_caller]
    pub fn operation(message: impl Into<String>) -> Self {
        ShellError::Operation {
            message: message.into(),
            location: ErrorLocation::capture(),
        }
    }
}
