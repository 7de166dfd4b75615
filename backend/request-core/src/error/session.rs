//! Error types for session token persistence.
//!
//! The public `TokenStore` contract is infallible (a failing store reads as
//! "logged out"); these errors exist so the diagnostics that get swallowed
//! still carry the path and source.

use common::ErrorLocation;

use std::path::PathBuf;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SessionError {
    #[error("Token Read Error: {path}: {source} {location}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Token Write Error: {path}: {source} {location}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Token Clear Error: {path}: {source} {location}")]
    Clear {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn read(path: PathBuf, source: std::io::Error) -> Self {
        SessionError::Read {
            path,
            source,
            location: ErrorLocation::capture(),
        }
    }

    #[track_caller]
    pub fn write(path: PathBuf, source: std::io::Error) -> Self {
        SessionError::Write {
            path,
            source,
            location: ErrorLocation::capture(),
        }
    }

    #[track_caller]
    pub fn clear(path: PathBuf, source: std::io::Error) -> Self {
        SessionError::Clear {
            path,
            source,
            location: ErrorLocation::capture(),
        }
    }
}
