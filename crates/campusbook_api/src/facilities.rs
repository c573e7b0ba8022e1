// --- File: crates/campusbook_api/src/facilities.rs ---
use serde::Serialize;

/// Body for POST /api/facilities and PUT /api/facilities/{id}.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FacilityPayload {
    pub name: String,
    pub location: String,
    pub capacity: u32,
    #[serde(rename = "type")]
    pub facility_type: String,
}
