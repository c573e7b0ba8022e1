// --- File: crates/campusbook_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities

// Re-export error types and utilities for easier access
pub use error::{
    auth_error, config_error, conflict, internal_error, not_found, server_error, validation_error,
    CampusbookError, Context,
};

// Re-export HTTP utilities for easier access
pub use http::client::{create_client, HTTP_CLIENT};
