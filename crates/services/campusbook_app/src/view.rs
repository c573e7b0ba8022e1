// --- File: crates/services/campusbook_app/src/view.rs ---
//! Text rendering for the terminal front-end. Pure functions from state to
//! strings; nothing here mutates anything.

use crate::app_state::AppState;
use campusbook_core::models::{Booking, BookingStatus};
use campusbook_core::selection::SlotSelection;
use campusbook_core::stats::{
    facility_name, facility_utilisation, filter_bookings, BookingFilter, StatusBreakdown,
};
use std::fmt::Write;

/// Dashboard stat tiles: facilities plus per-status booking counts.
pub fn render_dashboard(state: &AppState) -> String {
    let breakdown = StatusBreakdown::of(state.bookings());
    let mut out = String::new();
    let _ = writeln!(out, "Total Facilities : {}", state.facilities().len());
    let _ = writeln!(out, "Confirmed        : {}", breakdown.confirmed);
    let _ = writeln!(out, "Pending          : {}", breakdown.pending);
    let _ = writeln!(out, "Cancelled        : {}", breakdown.cancelled);
    let _ = writeln!(out, "Completed        : {}", breakdown.completed);
    out
}

pub fn render_facilities(state: &AppState) -> String {
    if state.facilities().is_empty() {
        return "No facilities available\n".to_string();
    }
    let mut out = String::new();
    for facility in state.facilities() {
        let _ = writeln!(
            out,
            "#{:<4} {:<28} {:<20} capacity {:>3}  [{}]",
            facility.id, facility.name, facility.location, facility.capacity, facility.facility_type
        );
    }
    out
}

/// The slot grid with its three visual states: free, selected, booked.
pub fn render_slot_grid(state: &AppState) -> String {
    if state.slots().is_empty() {
        return "No slots loaded - pick a date and facility first\n".to_string();
    }
    let mut out = String::new();
    for slot in state.slots() {
        let marker = if slot.booked {
            "Booked"
        } else if state.selection().contains(slot.start) {
            "Selected"
        } else {
            "Free"
        };
        let _ = writeln!(out, "{} - {}  {}", slot.start, slot.end, marker);
    }
    if let Some(label) = selection_label(state.selection()) {
        let _ = writeln!(out, "\n{label}");
    }
    out
}

/// The book-button label, e.g. "2 slots selected - 09:00 to 10:00 (60 min)".
pub fn selection_label(selection: &SlotSelection) -> Option<String> {
    let range = selection.booking_range()?;
    let count = selection.len();
    let plural = if count > 1 { "s" } else { "" };
    Some(format!(
        "{count} slot{plural} selected - {} to {} ({} min)",
        range.start,
        range.end,
        range.duration_minutes()
    ))
}

/// The booking history table, filtered like the bookings page.
pub fn render_bookings(state: &AppState, filter: &BookingFilter) -> String {
    let rows = filter_bookings(state.bookings(), state.facilities(), filter);
    if rows.is_empty() {
        return "No bookings found\n".to_string();
    }
    let mut out = String::new();
    for booking in rows {
        let _ = writeln!(out, "{}", booking_row(state, booking));
    }
    out
}

fn booking_row(state: &AppState, booking: &Booking) -> String {
    let name = booking
        .facility
        .as_ref()
        .map(|f| f.name.clone())
        .unwrap_or_else(|| facility_name(state.facilities(), booking.facility_id));
    let notes = booking.notes.as_deref().unwrap_or("-");
    format!(
        "#{:<4} {:<28} {:<10} {}  {} - {}  {:<9}  {}",
        booking.id,
        name,
        booking.student_id,
        booking.date,
        booking.start_time,
        booking.end_time,
        booking.status.label(),
        notes
    )
}

/// Admin panel: status breakdown with percentage bars plus facility
/// utilisation.
pub fn render_admin(state: &AppState) -> String {
    let breakdown = StatusBreakdown::of(state.bookings());
    let mut out = String::from("Booking Status Overview\n");
    for status in BookingStatus::ALL {
        let percent = breakdown.percentage(status);
        let _ = writeln!(
            out,
            "  {:<9} {:>3}  {:>3}%  {}",
            status.label(),
            breakdown.count(status),
            percent,
            bar(percent)
        );
    }

    let _ = writeln!(out, "\nFacility Utilisation");
    let utilisation = facility_utilisation(state.facilities(), state.bookings());
    if utilisation.is_empty() {
        let _ = writeln!(out, "  (no facilities)");
    }
    for entry in utilisation {
        let _ = writeln!(
            out,
            "  {:<28} {:>3} booking(s)  {:>3}%  {}",
            entry.name, entry.bookings, entry.share_percent, bar(entry.share_percent)
        );
    }
    out
}

/// A 20-cell percentage bar.
fn bar(percent: u32) -> String {
    let filled = (percent.min(100) / 5) as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(20 - filled))
}
