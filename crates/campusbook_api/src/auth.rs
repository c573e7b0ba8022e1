// --- File: crates/campusbook_api/src/auth.rs ---
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use tracing::debug;

// --- Auth Data Structures ---

#[derive(Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: String,
}

/// The logged-in user as returned by the backend.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub message: Option<String>,
    pub token: String,
    pub user: UserProfile,
}

/// Register returns the created user but no token; the user logs in next.
#[derive(Deserialize, Debug, Clone)]
pub struct RegisterResponse {
    pub message: Option<String>,
    pub user: UserProfile,
}

// --- Token persistence ---

/// Persists the bearer token between runs, the client-side counterpart of
/// the browser's local storage entry.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> TokenStore {
        TokenStore { path: path.into() }
    }

    /// The stored token, if a non-empty one exists.
    pub fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    pub fn save(&self, token: &str) -> io::Result<()> {
        debug!(path = %self.path.display(), "persisting auth token");
        std::fs::write(&self.path, token)
    }

    /// Removes the stored token; missing files are fine.
    pub fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}
