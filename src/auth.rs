//! Session lookup for authenticated requests
//!
//! The session itself lives outside this crate (written by a login flow,
//! cleared on logout). Everything here only reads it, once per request.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::api::RawResponse;
use crate::error::Unauthenticated;

/// The bearer token of a logged-in user.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Pull the session out of a successful login or signup response.
    pub fn from_login(response: &RawResponse) -> Option<Self> {
        if !response.is_success() {
            return None;
        }
        response
            .body
            .get("token")
            .and_then(|t| t.as_str())
            .filter(|t| !t.is_empty())
            .map(Self::new)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("token", &"<redacted>").finish()
    }
}

/// Source of the current session.
///
/// Called fresh for every authenticated request; implementations must not
/// cache beyond what their backing store does.
pub trait CredentialProvider: Send + Sync {
    fn current(&self) -> Result<Session, Unauthenticated>;
}

/// A session (or its absence) handed in explicitly by the caller.
#[derive(Debug, Clone, Default)]
pub struct StaticSession(Option<Session>);

impl StaticSession {
    pub fn new(session: Option<Session>) -> Self {
        Self(session)
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl From<Session> for StaticSession {
    fn from(session: Session) -> Self {
        Self(Some(session))
    }
}

impl CredentialProvider for StaticSession {
    fn current(&self) -> Result<Session, Unauthenticated> {
        self.0.clone().ok_or(Unauthenticated)
    }
}

/// Session persisted as JSON on disk, re-read on every lookup.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Option<Session> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Could not read session file");
                return None;
            }
        };

        match serde_json::from_str::<Session>(&content) {
            Ok(session) if !session.token.is_empty() => Some(session),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring malformed session file");
                None
            }
        }
    }

    pub fn save(&self, session: &Session) -> io::Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string(session).map_err(io::Error::other)?;
        fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), "Saved session");
        Ok(())
    }

    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

impl CredentialProvider for FileSessionStore {
    fn current(&self) -> Result<Session, Unauthenticated> {
        self.load().ok_or(Unauthenticated)
    }
}
