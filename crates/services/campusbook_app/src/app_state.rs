// --- File: crates/services/campusbook_app/src/app_state.rs ---
use campusbook_core::models::{Booking, Facility, Slot};
use campusbook_core::selection::SlotSelection;
use campusbook_core::time::TimeOfDay;
use chrono::NaiveDate;
use tracing::debug;

/// Identifies one in-flight slot fetch.
///
/// The token captures the (facility, date) context and a monotonically
/// increasing sequence number at the moment the fetch starts. A response is
/// only applied while its token is still the latest issued, so a reply that
/// arrives after the user switched date or facility is discarded instead of
/// overwriting newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRequestToken {
    seq: u64,
    facility_id: i64,
    date: NaiveDate,
}

impl SlotRequestToken {
    pub fn facility_id(&self) -> i64 {
        self.facility_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// The front-end's shared state: the fetched collections, the current
/// availability context and the in-progress slot selection.
///
/// There is exactly one writer at a time (UI actions run to completion in
/// sequence), so no locking is involved; mutations go through these methods
/// and dependent views re-render from the result.
#[derive(Debug, Default)]
pub struct AppState {
    facilities: Vec<Facility>,
    bookings: Vec<Booking>,
    slots: Vec<Slot>,
    selection: SlotSelection,
    selected_facility: Option<i64>,
    selected_date: Option<NaiveDate>,
    slot_request_seq: u64,
}

impl AppState {
    pub fn new() -> AppState {
        AppState::default()
    }

    // --- Accessors ---

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn selection(&self) -> &SlotSelection {
        &self.selection
    }

    pub fn selected_facility(&self) -> Option<i64> {
        self.selected_facility
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn slot_at(&self, start: TimeOfDay) -> Option<&Slot> {
        self.slots.iter().find(|s| s.start == start)
    }

    // --- Collection mutators ---

    pub fn set_facilities(&mut self, facilities: Vec<Facility>) {
        self.facilities = facilities;
        // The selected facility may be gone after a refresh
        if let Some(id) = self.selected_facility {
            if !self.facilities.iter().any(|f| f.id == id) {
                self.clear_context();
            }
        }
    }

    pub fn set_bookings(&mut self, bookings: Vec<Booking>) {
        self.bookings = bookings;
    }

    /// Insert or replace a booking by id.
    pub fn upsert_booking(&mut self, booking: Booking) {
        match self.bookings.iter_mut().find(|b| b.id == booking.id) {
            Some(existing) => *existing = booking,
            None => self.bookings.push(booking),
        }
    }

    pub fn remove_booking(&mut self, id: i64) {
        self.bookings.retain(|b| b.id != id);
    }

    pub fn upsert_facility(&mut self, facility: Facility) {
        match self.facilities.iter_mut().find(|f| f.id == facility.id) {
            Some(existing) => *existing = facility,
            None => self.facilities.push(facility),
        }
    }

    pub fn remove_facility(&mut self, id: i64) {
        self.facilities.retain(|f| f.id != id);
        if self.selected_facility == Some(id) {
            self.clear_context();
        }
    }

    // --- Availability context ---

    /// Changing facility drops the selection and the stale grid.
    pub fn select_facility(&mut self, facility_id: Option<i64>) {
        if self.selected_facility != facility_id {
            self.selected_facility = facility_id;
            self.slots.clear();
            self.selection.clear();
        }
    }

    /// Changing date drops the selection and the stale grid.
    pub fn select_date(&mut self, date: NaiveDate) {
        if self.selected_date != Some(date) {
            self.selected_date = Some(date);
            self.slots.clear();
            self.selection.clear();
        }
    }

    fn clear_context(&mut self) {
        self.selected_facility = None;
        self.slots.clear();
        self.selection.clear();
    }

    // --- Slot fetch guard ---

    /// Starts a slot fetch for the current context. Returns None until both
    /// a facility and a date are selected.
    pub fn begin_slot_request(&mut self) -> Option<SlotRequestToken> {
        let facility_id = self.selected_facility?;
        let date = self.selected_date?;
        self.slot_request_seq += 1;
        Some(SlotRequestToken {
            seq: self.slot_request_seq,
            facility_id,
            date,
        })
    }

    /// Applies a slot response unless it is stale. Returns whether the grid
    /// was updated; a stale response leaves all state untouched.
    pub fn apply_slot_response(&mut self, token: SlotRequestToken, slots: Vec<Slot>) -> bool {
        let current = self.slot_request_seq == token.seq
            && self.selected_facility == Some(token.facility_id)
            && self.selected_date == Some(token.date);
        if !current {
            debug!(
                facility_id = token.facility_id,
                date = %token.date,
                "discarding stale slot response"
            );
            return false;
        }
        self.slots = slots;
        self.selection.clear();
        true
    }

    // --- Selection ---

    /// Toggles the grid slot starting at `start`. Booked or unknown slots
    /// are rejected; only free slots ever reach the selection machine.
    pub fn toggle_slot(&mut self, start: TimeOfDay) -> bool {
        let slot = match self.slot_at(start) {
            Some(slot) if !slot.booked => *slot,
            _ => return false,
        };
        self.selection.toggle(slot.start, slot.end);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}
