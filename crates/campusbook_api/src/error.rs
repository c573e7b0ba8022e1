// --- File: crates/campusbook_api/src/error.rs ---
use campusbook_common::CampusbookError;
use thiserror::Error;

/// Errors from talking to the CampusBook backend.
///
/// Non-2xx responses carry the backend's `message` field verbatim; that text
/// is what the Display impl shows, so it can be surfaced to the user
/// unchanged.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, timeout)
    #[error("API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Non-2xx response with the backend's message
    #[error("{message}")]
    ServerError { status_code: u16, message: String },

    /// 409 from the backend: the requested interval is already taken
    #[error("{0}")]
    Conflict(String),

    /// 401 from the backend; the stored token has been cleared
    #[error("Session expired, please log in again")]
    AuthRequired,

    /// Error parsing an API response body
    #[error("Failed to parse API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Reading or writing the persisted token failed
    #[error("Token storage error: {0}")]
    TokenStore(#[from] std::io::Error),
}

/// Convert ApiError into the shared taxonomy for the session layer.
impl From<ApiError> for CampusbookError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::RequestError(e) if e.is_timeout() => {
                CampusbookError::TimeoutError(e.to_string())
            }
            ApiError::RequestError(e) => CampusbookError::NetworkError(e.to_string()),
            ApiError::ServerError {
                status_code,
                message,
            } => CampusbookError::ServerError {
                status_code,
                message,
            },
            ApiError::Conflict(message) => CampusbookError::ConflictError(message),
            ApiError::AuthRequired => {
                CampusbookError::AuthError("Session expired, please log in again".to_string())
            }
            ApiError::ParseError(e) => CampusbookError::ParseError(e.to_string()),
            ApiError::TokenStore(e) => CampusbookError::InternalError(e.to_string()),
        }
    }
}
