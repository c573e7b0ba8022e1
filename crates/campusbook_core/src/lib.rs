// --- File: crates/campusbook_core/src/lib.rs ---
// Declare modules within this crate
pub mod calendar;
pub mod conflict;
#[cfg(test)]
mod conflict_test;
pub mod grid;
#[cfg(test)]
mod grid_test;
pub mod models;
pub mod selection;
#[cfg(test)]
mod selection_proptest;
pub mod stats;
pub mod time;
pub mod validate;

pub use grid::{slot_grid, OperatingWindow};
pub use models::{Booking, BookingStatus, Facility, Slot};
pub use selection::{BookingRange, SlotSelection};
pub use time::TimeOfDay;
pub use validate::{validate, BookingDraft, BookingRejection, ValidatedBooking};
