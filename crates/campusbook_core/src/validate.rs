// --- File: crates/campusbook_core/src/validate.rs ---
use crate::conflict::is_booked;
use crate::grid::OperatingWindow;
use crate::models::Booking;
use crate::time::TimeOfDay;
use chrono::NaiveDate;
use thiserror::Error;

/// The booking form as the user left it: any field may still be unfilled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    pub facility_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
    pub student_id: String,
    pub notes: Option<String>,
}

/// Why a draft was rejected before submission. Shown inline; the request
/// is never sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingRejection {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("End time must be after start time")]
    InvalidRange,
    #[error("Cannot book a date in the past")]
    PastDate,
    #[error("Start time has already passed")]
    PastTime,
    #[error("Facility opens at {0}")]
    BeforeOpening(TimeOfDay),
    #[error("Facility closes at {0}")]
    AfterClosing(TimeOfDay),
    #[error("This time slot conflicts with an existing booking")]
    Conflict,
}

/// A draft that passed every check, with all fields present.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBooking {
    pub facility_id: i64,
    pub student_id: String,
    pub date: NaiveDate,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub notes: Option<String>,
}

/// Ordered pre-submit checks; the first failing check wins.
///
/// `today` and `now` are passed in rather than read from the clock so the
/// caller decides what "now" means. The conflict re-check runs against the
/// locally cached bookings; the server remains the final arbiter, so a
/// passing validation does not guarantee acceptance.
pub fn validate(
    draft: &BookingDraft,
    window: OperatingWindow,
    bookings: &[Booking],
    today: NaiveDate,
    now: TimeOfDay,
) -> Result<ValidatedBooking, BookingRejection> {
    let (facility_id, date, start, end) =
        match (draft.facility_id, draft.date, draft.start, draft.end) {
            (Some(facility_id), Some(date), Some(start), Some(end))
                if !draft.student_id.trim().is_empty() =>
            {
                (facility_id, date, start, end)
            }
            _ => return Err(BookingRejection::MissingFields),
        };

    if start >= end {
        return Err(BookingRejection::InvalidRange);
    }
    if date < today {
        return Err(BookingRejection::PastDate);
    }
    if date == today && start <= now {
        return Err(BookingRejection::PastTime);
    }
    if start < window.open {
        return Err(BookingRejection::BeforeOpening(window.open));
    }
    if end > window.close {
        return Err(BookingRejection::AfterClosing(window.close));
    }
    if is_booked(facility_id, date, start, end, bookings) {
        return Err(BookingRejection::Conflict);
    }

    Ok(ValidatedBooking {
        facility_id,
        student_id: draft.student_id.clone(),
        date,
        start,
        end,
        notes: draft.notes.clone(),
    })
}
