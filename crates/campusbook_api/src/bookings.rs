// --- File: crates/campusbook_api/src/bookings.rs ---
use campusbook_core::time::TimeOfDay;
use campusbook_core::models::BookingStatus;
use campusbook_core::validate::ValidatedBooking;
use chrono::NaiveDate;
use serde::Serialize;

/// Body for POST /api/bookings. Built from a validated draft so an invalid
/// payload cannot reach the network.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub facility_id: i64,
    pub student_id: String,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<ValidatedBooking> for BookingPayload {
    fn from(booking: ValidatedBooking) -> Self {
        BookingPayload {
            facility_id: booking.facility_id,
            student_id: booking.student_id,
            date: booking.date,
            start_time: booking.start,
            end_time: booking.end,
            notes: booking.notes,
        }
    }
}

/// Body for PUT /api/bookings/{id}, the admin edit form.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingUpdate {
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub status: BookingStatus,
}
