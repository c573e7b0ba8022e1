// --- File: crates/campusbook_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Backend API Config ---
// Base URL of the deployed booking backend; the only value most
// installations ever need to change.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the REST backend, e.g. "http://localhost:3000".
    pub base_url: String,
    /// Request timeout in seconds for every call to the backend.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 30,
        }
    }
}

// --- Booking Config ---
// Campus operating hours and slot length. Times are zero-padded "HH:MM"
// strings here; the core crate parses them into minute-of-day values.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct BookingConfig {
    pub open_time: String,
    pub close_time: String,
    pub slot_minutes: u16,
}

impl Default for BookingConfig {
    fn default() -> Self {
        BookingConfig {
            open_time: "06:00".to_string(),
            close_time: "19:00".to_string(),
            slot_minutes: 30,
        }
    }
}

// --- Auth Config ---
// Where the bearer token is persisted between runs.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct AuthConfig {
    pub token_file: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig {
            token_file: ".campusbook_token".to_string(),
        }
    }
}

// --- Current User Config ---
// Identity attached to bookings created from this client. Replaced by the
// profile returned from /api/auth/me once the user has logged in.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct UserConfig {
    pub student_id: String,
    pub display_name: String,
}

// --- Unified App Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub booking: BookingConfig,
    pub auth: AuthConfig,
    pub user: UserConfig,
}
