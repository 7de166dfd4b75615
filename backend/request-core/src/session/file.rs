//! File-backed token store.

use crate::SESSION_TOKEN_FILE;
use crate::error::SessionError;
use crate::session::TokenStore;

use common::RedactedToken;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

/// Persists the session token as a single file under the app data
/// directory, surviving process restarts the way browser storage survives
/// page loads.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the token as `auth_token` inside `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_TOKEN_FILE),
        }
    }

    /// Store the token at an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the token file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<String>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::read(self.path.clone(), e)),
        }
    }

    /// Atomic write: temp file plus rename, so a crash mid-write cannot
    /// leave a truncated token behind.
    fn write(&self, token: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SessionError::write(parent.to_path_buf(), e))?;
        }

        let temp_path = self.path.with_extension("tmp");

        fs::write(&temp_path, token)
            .map_err(|e| SessionError::write(temp_path.clone(), e))?;

        fs::rename(&temp_path, &self.path)
            .map_err(|e| SessionError::write(self.path.clone(), e))
    }

    fn remove(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::clear(self.path.clone(), e)),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<RedactedToken> {
        match self.read() {
            // An empty file is no session.
            Ok(Some(raw)) if raw.trim().is_empty() => None,
            Ok(Some(raw)) => Some(RedactedToken::new(raw.trim().to_string())),
            Ok(None) => None,
            Err(e) => {
                warn!("Unreadable session store, treating as logged out: {e}");
                None
            }
        }
    }

    fn set(&self, token: RedactedToken) {
        if let Err(e) = self.write(token.as_str()) {
            warn!("Failed to persist session token ({} chars): {e}", token.len());
            return;
        }
        debug!("Session token persisted to {}", self.path.display());
    }

    fn clear(&self) {
        if let Err(e) = self.remove() {
            warn!("Failed to clear session token: {e}");
            return;
        }
        debug!("Session token cleared");
    }
}
