// --- File: crates/services/campusbook_app/src/session.rs ---
//! The UI actions: every flow a page triggers lives here, awaited in
//! sequence by the caller. Each mutation goes through the backend first,
//! then updates [`AppState`] so dependent views re-render from fresh data.

use crate::app_state::AppState;
use campusbook_api::auth::{RegisterRequest, UserProfile};
use campusbook_api::bookings::{BookingPayload, BookingUpdate};
use campusbook_api::facilities::FacilityPayload;
use campusbook_api::service::BookingService;
use campusbook_common::{config_error, conflict, validation_error, CampusbookError};
use campusbook_config::AppConfig;
use campusbook_core::grid::OperatingWindow;
use campusbook_core::models::{Booking, Facility};
use campusbook_core::time::TimeOfDay;
use campusbook_core::validate::{validate, BookingDraft, BookingRejection};
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::{info, warn};

/// One user's interactive session against the booking backend.
pub struct Session<S> {
    service: Arc<S>,
    config: Arc<AppConfig>,
    state: AppState,
}

impl<S: BookingService> Session<S> {
    pub fn new(service: Arc<S>, config: Arc<AppConfig>) -> Session<S> {
        Session {
            service,
            config,
            state: AppState::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn operating_window(&self) -> Result<OperatingWindow, CampusbookError> {
        let open: TimeOfDay = self
            .config
            .booking
            .open_time
            .parse()
            .map_err(|err| config_error(format!("invalid open_time: {err}")))?;
        let close: TimeOfDay = self
            .config
            .booking
            .close_time
            .parse()
            .map_err(|err| config_error(format!("invalid close_time: {err}")))?;
        OperatingWindow::new(open, close)
            .ok_or_else(|| config_error("open_time must be before close_time"))
    }

    // --- Data loading ---

    /// Fetches facilities and bookings into the state cache.
    pub async fn refresh(&mut self) -> Result<(), CampusbookError> {
        let facilities = self.service.list_facilities().await?;
        self.state.set_facilities(facilities);
        let bookings = self.service.list_bookings(None).await?;
        self.state.set_bookings(bookings);
        Ok(())
    }

    /// Re-fetches bookings, optionally server-filtered by student id.
    pub async fn refresh_bookings(
        &mut self,
        student_id: Option<String>,
    ) -> Result<(), CampusbookError> {
        let bookings = self.service.list_bookings(student_id).await?;
        self.state.set_bookings(bookings);
        Ok(())
    }

    // --- Availability ---

    /// Enters the availability view for a facility and date, loading the
    /// slot grid. Past dates are unselectable.
    pub async fn open_availability(
        &mut self,
        facility_id: i64,
        date: NaiveDate,
    ) -> Result<(), CampusbookError> {
        if date < Local::now().date_naive() {
            return Err(validation_error("Cannot select a past date"));
        }
        self.state.select_facility(Some(facility_id));
        self.state.select_date(date);
        self.load_slots().await?;
        Ok(())
    }

    /// Fetches the slot grid for the current context. Returns whether the
    /// response was applied; a response that lost the race against a newer
    /// context switch is dropped.
    pub async fn load_slots(&mut self) -> Result<bool, CampusbookError> {
        let token = self
            .state
            .begin_slot_request()
            .ok_or_else(|| validation_error("Select a date and facility first"))?;
        let response = self
            .service
            .fetch_slots(token.facility_id(), token.date())
            .await?;
        Ok(self.state.apply_slot_response(token, response.slots))
    }

    /// Toggles the free slot starting at `start` in the current grid.
    pub fn toggle_slot(&mut self, start: TimeOfDay) -> bool {
        self.state.toggle_slot(start)
    }

    // --- Booking flows ---

    /// Validates the current selection and submits it as a booking.
    ///
    /// Local validation failures never reach the network; the server stays
    /// the final arbiter of conflicts, so its rejection surfaces verbatim.
    pub async fn submit_booking(
        &mut self,
        notes: Option<String>,
    ) -> Result<Booking, CampusbookError> {
        let range = self
            .state
            .selection()
            .booking_range()
            .ok_or_else(|| validation_error("No slots selected"))?;
        let draft = BookingDraft {
            facility_id: self.state.selected_facility(),
            date: self.state.selected_date(),
            start: Some(range.start),
            end: Some(range.end),
            student_id: self.config.user.student_id.clone(),
            notes,
        };

        let window = self.operating_window()?;
        let now = Local::now().naive_local();
        let validated = validate(
            &draft,
            window,
            self.state.bookings(),
            now.date(),
            TimeOfDay::from(now.time()),
        )
        .map_err(|rejection| match rejection {
            BookingRejection::Conflict => conflict(rejection),
            other => validation_error(other),
        })?;

        let booking = self
            .service
            .create_booking(BookingPayload::from(validated))
            .await?;
        info!(booking_id = booking.id, "booking created");
        self.state.upsert_booking(booking.clone());
        self.state.clear_selection();
        // Reload the grid so the fresh booking shows as blocked
        if let Err(err) = self.load_slots().await {
            warn!("failed to refresh slots after booking: {err}");
        }
        Ok(booking)
    }

    /// Books `[start, end)` on one facility/date by selecting the covering
    /// slots and submitting, exactly as tapping them one by one would.
    pub async fn book_range(
        &mut self,
        facility_id: i64,
        date: NaiveDate,
        start: TimeOfDay,
        end: TimeOfDay,
        notes: Option<String>,
    ) -> Result<Booking, CampusbookError> {
        if start >= end {
            return Err(validation_error("End time must be after start time"));
        }
        self.open_availability(facility_id, date).await?;

        let starts: Vec<TimeOfDay> = self
            .state
            .slots()
            .iter()
            .filter(|s| s.start >= start && s.end <= end)
            .map(|s| s.start)
            .collect();
        for slot_start in &starts {
            if !self.state.toggle_slot(*slot_start) {
                self.state.clear_selection();
                return Err(conflict("One of the requested slots is already booked"));
            }
        }
        let covered = self
            .state
            .selection()
            .booking_range()
            .is_some_and(|range| range.start == start && range.end == end);
        if !covered {
            self.state.clear_selection();
            return Err(validation_error(
                "Times must align with the 30-minute slot grid",
            ));
        }
        self.submit_booking(notes).await
    }

    /// Soft-cancel; the booking stays in the history with status CANCELLED.
    pub async fn cancel_booking(&mut self, id: i64) -> Result<Booking, CampusbookError> {
        let booking = self.service.cancel_booking(id).await?;
        info!(booking_id = id, "booking cancelled");
        self.state.upsert_booking(booking.clone());
        Ok(booking)
    }

    /// Full update of one booking (admin edit form).
    pub async fn update_booking(
        &mut self,
        id: i64,
        update: BookingUpdate,
    ) -> Result<Booking, CampusbookError> {
        let booking = self.service.update_booking(id, update).await?;
        self.state.upsert_booking(booking.clone());
        Ok(booking)
    }

    /// Hard delete, admin only.
    pub async fn delete_booking(&mut self, id: i64) -> Result<(), CampusbookError> {
        self.service.delete_booking(id).await?;
        self.state.remove_booking(id);
        Ok(())
    }

    // --- Facility management (admin) ---

    pub async fn add_facility(
        &mut self,
        payload: FacilityPayload,
    ) -> Result<Facility, CampusbookError> {
        let facility = self.service.create_facility(payload).await?;
        info!(facility_id = facility.id, name = %facility.name, "facility created");
        self.state.upsert_facility(facility.clone());
        Ok(facility)
    }

    pub async fn update_facility(
        &mut self,
        id: i64,
        payload: FacilityPayload,
    ) -> Result<Facility, CampusbookError> {
        let facility = self.service.update_facility(id, payload).await?;
        self.state.upsert_facility(facility.clone());
        Ok(facility)
    }

    pub async fn remove_facility(&mut self, id: i64) -> Result<(), CampusbookError> {
        self.service.delete_facility(id).await?;
        self.state.remove_facility(id);
        Ok(())
    }

    // --- Auth ---

    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<UserProfile, CampusbookError> {
        let response = self.service.login(username, password).await?;
        Ok(response.user)
    }

    pub async fn register(
        &mut self,
        request: RegisterRequest,
    ) -> Result<UserProfile, CampusbookError> {
        let response = self.service.register(request).await?;
        Ok(response.user)
    }

    pub async fn logout(&mut self) -> Result<(), CampusbookError> {
        self.service.logout().await?;
        Ok(())
    }

    pub async fn current_user(&self) -> Result<UserProfile, CampusbookError> {
        Ok(self.service.current_user().await?)
    }
}
