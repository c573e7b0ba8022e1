// --- File: crates/campusbook_core/src/grid.rs ---
use crate::conflict::is_booked;
use crate::models::{Booking, Slot};
use crate::time::TimeOfDay;
use chrono::NaiveDate;
use tracing::debug;

/// Daily open/close bounds outside which no slot may be generated or booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingWindow {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl OperatingWindow {
    /// Returns None unless `open < close`.
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Option<OperatingWindow> {
        if open < close {
            Some(OperatingWindow { open, close })
        } else {
            None
        }
    }

    /// Whether `[start, end)` lies entirely within the window.
    pub fn contains(&self, start: TimeOfDay, end: TimeOfDay) -> bool {
        start >= self.open && end <= self.close
    }

    pub fn slot_count(&self, slot_minutes: u16) -> usize {
        if slot_minutes == 0 {
            return 0;
        }
        (self.open.minutes_until(self.close) / slot_minutes) as usize
    }
}

/// Generates the slot grid for one facility/date: fixed-length slots in
/// ascending order, no gaps, no overlap, each marked booked against the
/// supplied bookings. A trailing partial slot that would cross the close
/// time is not emitted.
pub fn slot_grid(
    facility_id: i64,
    date: NaiveDate,
    bookings: &[Booking],
    window: OperatingWindow,
    slot_minutes: u16,
) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(window.slot_count(slot_minutes));
    if slot_minutes == 0 {
        return slots;
    }

    debug!(facility_id, %date, "generating slot grid {} - {}", window.open, window.close);

    let mut cursor = window.open;
    while cursor < window.close {
        let end = match cursor.checked_add_minutes(slot_minutes) {
            Some(end) if end <= window.close => end,
            _ => break,
        };
        slots.push(Slot {
            start: cursor,
            end,
            booked: is_booked(facility_id, date, cursor, end, bookings),
        });
        cursor = end;
    }
    slots
}
