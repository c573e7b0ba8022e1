// --- File: crates/campusbook_api/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
pub mod availability;
pub mod bookings;
pub mod client;
pub mod error;
pub mod facilities;
pub mod service;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse, TokenStore, UserProfile};
pub use availability::{AvailabilityResponse, SlotsResponse};
pub use bookings::{BookingPayload, BookingUpdate};
pub use client::ApiClient;
pub use error::ApiError;
pub use facilities::FacilityPayload;
pub use service::BookingService;
