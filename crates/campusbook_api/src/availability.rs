// --- File: crates/campusbook_api/src/availability.rs ---
use campusbook_core::models::Slot;
use campusbook_core::time::TimeOfDay;
use chrono::NaiveDate;
use serde::Deserialize;

/// Response of GET /api/availability: a single yes/no range check.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub facility_id: i64,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub available: bool,
}

/// Response of GET /api/availability/slots: the day's 30-minute grid with
/// each slot marked booked or free.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SlotsResponse {
    pub facility_id: i64,
    pub date: NaiveDate,
    pub slots: Vec<Slot>,
}
