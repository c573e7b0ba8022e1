// --- File: crates/campusbook_core/src/conflict.rs ---
use crate::models::{Booking, BookingStatus};
use crate::time::TimeOfDay;
use chrono::NaiveDate;

/// Half-open interval overlap test over minute-of-day values:
/// `[a_start, a_end)` intersects `[b_start, b_end)`.
pub fn overlaps(
    a_start: TimeOfDay,
    a_end: TimeOfDay,
    b_start: TimeOfDay,
    b_end: TimeOfDay,
) -> bool {
    !(a_end <= b_start || a_start >= b_end)
}

/// Whether `[slot_start, slot_end)` collides with any existing booking for
/// the same facility and date. Cancelled bookings do not block a slot.
pub fn is_booked(
    facility_id: i64,
    date: NaiveDate,
    slot_start: TimeOfDay,
    slot_end: TimeOfDay,
    bookings: &[Booking],
) -> bool {
    bookings.iter().any(|b| {
        b.facility_id == facility_id
            && b.date == date
            && b.status != BookingStatus::Cancelled
            && overlaps(slot_start, slot_end, b.start_time, b.end_time)
    })
}
