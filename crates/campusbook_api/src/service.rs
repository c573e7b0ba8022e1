// --- File: crates/campusbook_api/src/service.rs ---
//! The service seam between the session layer and the backend.
//!
//! `BookingService` abstracts every REST operation the front-end performs so
//! the session flows can be driven against the real [`ApiClient`] or the
//! in-memory mock below, which behaves like a tiny backend (including
//! conflict rejection) without any network.

use crate::auth::{AuthResponse, RegisterRequest, RegisterResponse, UserProfile};
use crate::availability::{AvailabilityResponse, SlotsResponse};
use crate::bookings::{BookingPayload, BookingUpdate};
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::facilities::FacilityPayload;
use async_trait::async_trait;
use campusbook_core::models::{Booking, Facility};
use campusbook_core::time::TimeOfDay;
use chrono::NaiveDate;

#[async_trait]
pub trait BookingService: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError>;
    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn current_user(&self) -> Result<UserProfile, ApiError>;

    async fn list_facilities(&self) -> Result<Vec<Facility>, ApiError>;
    async fn get_facility(&self, id: i64) -> Result<Facility, ApiError>;
    async fn create_facility(&self, payload: FacilityPayload) -> Result<Facility, ApiError>;
    async fn update_facility(&self, id: i64, payload: FacilityPayload)
        -> Result<Facility, ApiError>;
    async fn delete_facility(&self, id: i64) -> Result<(), ApiError>;

    async fn list_bookings(&self, student_id: Option<String>) -> Result<Vec<Booking>, ApiError>;
    async fn get_booking(&self, id: i64) -> Result<Booking, ApiError>;
    async fn create_booking(&self, payload: BookingPayload) -> Result<Booking, ApiError>;
    async fn update_booking(&self, id: i64, payload: BookingUpdate) -> Result<Booking, ApiError>;
    async fn cancel_booking(&self, id: i64) -> Result<Booking, ApiError>;
    async fn delete_booking(&self, id: i64) -> Result<(), ApiError>;

    async fn check_availability(
        &self,
        facility_id: i64,
        date: NaiveDate,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<AvailabilityResponse, ApiError>;
    async fn fetch_slots(&self, facility_id: i64, date: NaiveDate)
        -> Result<SlotsResponse, ApiError>;
}

#[async_trait]
impl BookingService for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        ApiClient::login(self, username, password).await
    }

    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        ApiClient::register(self, request).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        ApiClient::logout(self).await
    }

    async fn current_user(&self) -> Result<UserProfile, ApiError> {
        ApiClient::current_user(self).await
    }

    async fn list_facilities(&self) -> Result<Vec<Facility>, ApiError> {
        ApiClient::list_facilities(self).await
    }

    async fn get_facility(&self, id: i64) -> Result<Facility, ApiError> {
        ApiClient::get_facility(self, id).await
    }

    async fn create_facility(&self, payload: FacilityPayload) -> Result<Facility, ApiError> {
        ApiClient::create_facility(self, payload).await
    }

    async fn update_facility(
        &self,
        id: i64,
        payload: FacilityPayload,
    ) -> Result<Facility, ApiError> {
        ApiClient::update_facility(self, id, payload).await
    }

    async fn delete_facility(&self, id: i64) -> Result<(), ApiError> {
        ApiClient::delete_facility(self, id).await
    }

    async fn list_bookings(&self, student_id: Option<String>) -> Result<Vec<Booking>, ApiError> {
        ApiClient::list_bookings(self, student_id).await
    }

    async fn get_booking(&self, id: i64) -> Result<Booking, ApiError> {
        ApiClient::get_booking(self, id).await
    }

    async fn create_booking(&self, payload: BookingPayload) -> Result<Booking, ApiError> {
        ApiClient::create_booking(self, payload).await
    }

    async fn update_booking(&self, id: i64, payload: BookingUpdate) -> Result<Booking, ApiError> {
        ApiClient::update_booking(self, id, payload).await
    }

    async fn cancel_booking(&self, id: i64) -> Result<Booking, ApiError> {
        ApiClient::cancel_booking(self, id).await
    }

    async fn delete_booking(&self, id: i64) -> Result<(), ApiError> {
        ApiClient::delete_booking(self, id).await
    }

    async fn check_availability(
        &self,
        facility_id: i64,
        date: NaiveDate,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<AvailabilityResponse, ApiError> {
        ApiClient::check_availability(self, facility_id, date, start, end).await
    }

    async fn fetch_slots(
        &self,
        facility_id: i64,
        date: NaiveDate,
    ) -> Result<SlotsResponse, ApiError> {
        ApiClient::fetch_slots(self, facility_id, date).await
    }
}

/// In-memory stand-in for the backend, used by session tests.
pub mod mock {
    use super::*;
    use campusbook_core::conflict::{is_booked, overlaps};
    use campusbook_core::grid::{slot_grid, OperatingWindow};
    use campusbook_core::models::BookingStatus;
    use std::sync::Mutex;

    struct MockState {
        facilities: Vec<Facility>,
        bookings: Vec<Booking>,
        next_facility_id: i64,
        next_booking_id: i64,
        token: Option<String>,
    }

    /// Behaves like the real backend for the operations the front-end uses:
    /// ids are assigned sequentially, conflicting bookings are rejected with
    /// the backend's message, and the slots endpoint derives its grid from
    /// the stored bookings.
    pub struct InMemoryBookingService {
        state: Mutex<MockState>,
        window: OperatingWindow,
        slot_minutes: u16,
    }

    impl Default for InMemoryBookingService {
        fn default() -> Self {
            Self::new()
        }
    }

    impl InMemoryBookingService {
        pub fn new() -> Self {
            let open = TimeOfDay::from_hm(6, 0).expect("valid open time");
            let close = TimeOfDay::from_hm(19, 0).expect("valid close time");
            let window = OperatingWindow::new(open, close).expect("valid window");
            Self::with_window(window, 30)
        }

        pub fn with_window(window: OperatingWindow, slot_minutes: u16) -> Self {
            InMemoryBookingService {
                state: Mutex::new(MockState {
                    facilities: Vec::new(),
                    bookings: Vec::new(),
                    next_facility_id: 1,
                    next_booking_id: 1,
                    token: None,
                }),
                window,
                slot_minutes,
            }
        }

        fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
            self.state.lock().expect("mock state lock")
        }
    }

    const CONFLICT_MESSAGE: &str =
        "The requested time slot conflicts with an existing booking for this facility";

    #[async_trait]
    impl BookingService for InMemoryBookingService {
        async fn login(&self, username: &str, _password: &str) -> Result<AuthResponse, ApiError> {
            let mut state = self.lock();
            let token = format!("mock-token-{username}");
            state.token = Some(token.clone());
            Ok(AuthResponse {
                message: Some("Login successful".to_string()),
                token,
                user: UserProfile {
                    id: 1,
                    username: username.to_string(),
                    name: username.to_string(),
                    email: format!("{username}@campus.test"),
                    role: "STUDENT".to_string(),
                },
            })
        }

        async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiError> {
            Ok(RegisterResponse {
                message: Some("User registered successfully".to_string()),
                user: UserProfile {
                    id: 1,
                    username: request.username,
                    name: request.name,
                    email: request.email,
                    role: request.role,
                },
            })
        }

        async fn logout(&self) -> Result<(), ApiError> {
            self.lock().token = None;
            Ok(())
        }

        async fn current_user(&self) -> Result<UserProfile, ApiError> {
            let state = self.lock();
            match &state.token {
                None => Err(ApiError::AuthRequired),
                Some(token) => {
                    let username = token.trim_start_matches("mock-token-").to_string();
                    Ok(UserProfile {
                        id: 1,
                        username: username.clone(),
                        name: username.clone(),
                        email: format!("{username}@campus.test"),
                        role: "STUDENT".to_string(),
                    })
                }
            }
        }

        async fn list_facilities(&self) -> Result<Vec<Facility>, ApiError> {
            Ok(self.lock().facilities.clone())
        }

        async fn get_facility(&self, id: i64) -> Result<Facility, ApiError> {
            self.lock()
                .facilities
                .iter()
                .find(|f| f.id == id)
                .cloned()
                .ok_or(ApiError::ServerError {
                    status_code: 404,
                    message: format!("Facility not found with id: {id}"),
                })
        }

        async fn create_facility(&self, payload: FacilityPayload) -> Result<Facility, ApiError> {
            let mut state = self.lock();
            let facility = Facility {
                id: state.next_facility_id,
                name: payload.name,
                location: payload.location,
                capacity: payload.capacity,
                facility_type: payload.facility_type,
            };
            state.next_facility_id += 1;
            state.facilities.push(facility.clone());
            Ok(facility)
        }

        async fn update_facility(
            &self,
            id: i64,
            payload: FacilityPayload,
        ) -> Result<Facility, ApiError> {
            let mut state = self.lock();
            let facility = state
                .facilities
                .iter_mut()
                .find(|f| f.id == id)
                .ok_or(ApiError::ServerError {
                    status_code: 404,
                    message: format!("Facility not found with id: {id}"),
                })?;
            facility.name = payload.name;
            facility.location = payload.location;
            facility.capacity = payload.capacity;
            facility.facility_type = payload.facility_type;
            Ok(facility.clone())
        }

        async fn delete_facility(&self, id: i64) -> Result<(), ApiError> {
            let mut state = self.lock();
            let before = state.facilities.len();
            state.facilities.retain(|f| f.id != id);
            if state.facilities.len() == before {
                return Err(ApiError::ServerError {
                    status_code: 404,
                    message: format!("Facility not found with id: {id}"),
                });
            }
            Ok(())
        }

        async fn list_bookings(&self, student_id: Option<String>) -> Result<Vec<Booking>, ApiError> {
            let state = self.lock();
            Ok(state
                .bookings
                .iter()
                .filter(|b| match &student_id {
                    Some(student_id) => &b.student_id == student_id,
                    None => true,
                })
                .cloned()
                .collect())
        }

        async fn get_booking(&self, id: i64) -> Result<Booking, ApiError> {
            self.lock()
                .bookings
                .iter()
                .find(|b| b.id == id)
                .cloned()
                .ok_or(ApiError::ServerError {
                    status_code: 404,
                    message: format!("Booking not found with id: {id}"),
                })
        }

        async fn create_booking(&self, payload: BookingPayload) -> Result<Booking, ApiError> {
            let mut state = self.lock();
            if is_booked(
                payload.facility_id,
                payload.date,
                payload.start_time,
                payload.end_time,
                &state.bookings,
            ) {
                return Err(ApiError::Conflict(CONFLICT_MESSAGE.to_string()));
            }
            let facility = state
                .facilities
                .iter()
                .find(|f| f.id == payload.facility_id)
                .cloned();
            let booking = Booking {
                id: state.next_booking_id,
                facility_id: payload.facility_id,
                student_id: payload.student_id,
                date: payload.date,
                start_time: payload.start_time,
                end_time: payload.end_time,
                status: BookingStatus::Confirmed,
                notes: payload.notes,
                facility,
            };
            state.next_booking_id += 1;
            state.bookings.push(booking.clone());
            Ok(booking)
        }

        async fn update_booking(
            &self,
            id: i64,
            payload: BookingUpdate,
        ) -> Result<Booking, ApiError> {
            let mut state = self.lock();
            let facility_id = state
                .bookings
                .iter()
                .find(|b| b.id == id)
                .map(|b| b.facility_id)
                .ok_or(ApiError::ServerError {
                    status_code: 404,
                    message: format!("Booking not found with id: {id}"),
                })?;
            // Conflict check excludes the booking being edited
            let clashes = state.bookings.iter().any(|b| {
                b.id != id
                    && b.facility_id == facility_id
                    && b.status != BookingStatus::Cancelled
                    && b.date == payload.date
                    && overlaps(payload.start_time, payload.end_time, b.start_time, b.end_time)
            });
            if clashes {
                return Err(ApiError::Conflict(CONFLICT_MESSAGE.to_string()));
            }
            let booking = state
                .bookings
                .iter_mut()
                .find(|b| b.id == id)
                .ok_or(ApiError::ServerError {
                    status_code: 404,
                    message: format!("Booking not found with id: {id}"),
                })?;
            booking.date = payload.date;
            booking.start_time = payload.start_time;
            booking.end_time = payload.end_time;
            booking.status = payload.status;
            Ok(booking.clone())
        }

        async fn cancel_booking(&self, id: i64) -> Result<Booking, ApiError> {
            let mut state = self.lock();
            let booking = state
                .bookings
                .iter_mut()
                .find(|b| b.id == id)
                .ok_or(ApiError::ServerError {
                    status_code: 404,
                    message: format!("Booking not found with id: {id}"),
                })?;
            booking.status = BookingStatus::Cancelled;
            Ok(booking.clone())
        }

        async fn delete_booking(&self, id: i64) -> Result<(), ApiError> {
            let mut state = self.lock();
            let before = state.bookings.len();
            state.bookings.retain(|b| b.id != id);
            if state.bookings.len() == before {
                return Err(ApiError::ServerError {
                    status_code: 404,
                    message: format!("Booking not found with id: {id}"),
                });
            }
            Ok(())
        }

        async fn check_availability(
            &self,
            facility_id: i64,
            date: NaiveDate,
            start: TimeOfDay,
            end: TimeOfDay,
        ) -> Result<AvailabilityResponse, ApiError> {
            let state = self.lock();
            Ok(AvailabilityResponse {
                facility_id,
                date,
                start_time: start,
                end_time: end,
                available: !is_booked(facility_id, date, start, end, &state.bookings),
            })
        }

        async fn fetch_slots(
            &self,
            facility_id: i64,
            date: NaiveDate,
        ) -> Result<SlotsResponse, ApiError> {
            let state = self.lock();
            Ok(SlotsResponse {
                facility_id,
                date,
                slots: slot_grid(facility_id, date, &state.bookings, self.window, self.slot_minutes),
            })
        }
    }
}
