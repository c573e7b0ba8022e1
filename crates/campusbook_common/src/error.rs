// --- File: crates/campusbook_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all CampusBook errors.
///
/// This enum provides a common set of error variants that can be used across
/// all crates. Each crate can extend this by implementing
/// From<SpecificError> for CampusbookError.
///
/// The variants mirror how failures surface to the user: validation errors
/// are shown inline and never reach the network, conflict errors block a
/// booking, auth errors force a logout, network errors are transient
/// notifications, and server errors carry the backend's message verbatim.
#[derive(Error, Debug)]
pub enum CampusbookError {
    /// Local pre-submit validation failed; the request was never sent
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A booking interval overlaps an existing non-cancelled booking
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Authentication failed or the session expired (401)
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Transport-level failure; local state is left unchanged
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Non-2xx response from the backend; message is surfaced verbatim
    #[error("{message}")]
    ServerError { status_code: u16, message: String },

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The backend did not respond within the configured timeout
    #[error("Timeout: {0}")]
    TimeoutError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl CampusbookError {
    /// Whether the error should be shown as a transient notification rather
    /// than an inline form error.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            CampusbookError::NetworkError(_) | CampusbookError::TimeoutError(_)
        )
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, CampusbookError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, CampusbookError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, CampusbookError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| CampusbookError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, CampusbookError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| CampusbookError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Common error conversions
impl From<reqwest::Error> for CampusbookError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CampusbookError::TimeoutError(err.to_string())
        } else {
            CampusbookError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CampusbookError {
    fn from(err: serde_json::Error) -> Self {
        CampusbookError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for CampusbookError {
    fn from(err: std::io::Error) -> Self {
        CampusbookError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> CampusbookError {
    CampusbookError::ValidationError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> CampusbookError {
    CampusbookError::ConflictError(message.to_string())
}

pub fn auth_error<T: fmt::Display>(message: T) -> CampusbookError {
    CampusbookError::AuthError(message.to_string())
}

pub fn config_error<T: fmt::Display>(message: T) -> CampusbookError {
    CampusbookError::ConfigError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> CampusbookError {
    CampusbookError::NotFoundError(message.to_string())
}

pub fn server_error<T: fmt::Display>(status_code: u16, message: T) -> CampusbookError {
    CampusbookError::ServerError {
        status_code,
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> CampusbookError {
    CampusbookError::InternalError(message.to_string())
}
