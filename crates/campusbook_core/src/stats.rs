// --- File: crates/campusbook_core/src/stats.rs ---
use crate::models::{Booking, BookingStatus, Facility};

/// Per-status booking counts for the dashboard and admin overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusBreakdown {
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
    pub completed: usize,
}

impl StatusBreakdown {
    pub fn of(bookings: &[Booking]) -> StatusBreakdown {
        let mut breakdown = StatusBreakdown::default();
        for booking in bookings {
            match booking.status {
                BookingStatus::Confirmed => breakdown.confirmed += 1,
                BookingStatus::Pending => breakdown.pending += 1,
                BookingStatus::Cancelled => breakdown.cancelled += 1,
                BookingStatus::Completed => breakdown.completed += 1,
            }
        }
        breakdown
    }

    pub fn total(&self) -> usize {
        self.confirmed + self.pending + self.cancelled + self.completed
    }

    pub fn count(&self, status: BookingStatus) -> usize {
        match status {
            BookingStatus::Confirmed => self.confirmed,
            BookingStatus::Pending => self.pending,
            BookingStatus::Cancelled => self.cancelled,
            BookingStatus::Completed => self.completed,
        }
    }

    /// Rounded percentage of the total; 0 when there are no bookings.
    pub fn percentage(&self, status: BookingStatus) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        ((self.count(status) as f64 / total as f64) * 100.0).round() as u32
    }
}

/// How heavily one facility is booked relative to the others.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityUtilisation {
    pub facility_id: i64,
    pub name: String,
    pub bookings: usize,
    pub share_percent: u32,
}

/// Share of non-cancelled bookings per facility. Facilities with no
/// bookings are included at zero; ordering follows the facility list.
pub fn facility_utilisation(
    facilities: &[Facility],
    bookings: &[Booking],
) -> Vec<FacilityUtilisation> {
    let active: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.status != BookingStatus::Cancelled)
        .collect();
    let total = active.len();

    facilities
        .iter()
        .map(|facility| {
            let count = active.iter().filter(|b| b.facility_id == facility.id).count();
            let share_percent = if total == 0 {
                0
            } else {
                ((count as f64 / total as f64) * 100.0).round() as u32
            };
            FacilityUtilisation {
                facility_id: facility.id,
                name: facility.name.clone(),
                bookings: count,
                share_percent,
            }
        })
        .collect()
}

/// Facility name lookup with the fallback the tables show for unknown ids.
pub fn facility_name(facilities: &[Facility], facility_id: i64) -> String {
    facilities
        .iter()
        .find(|f| f.id == facility_id)
        .map(|f| f.name.clone())
        .unwrap_or_else(|| "Unknown Facility".to_string())
}

/// Free-text query plus status filter for the booking history table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFilter {
    pub query: Option<String>,
    pub status: Option<BookingStatus>,
}

/// Filters bookings the way the history table does: the query matches the
/// facility name, student id or status label (case-insensitive), the status
/// filter matches exactly.
pub fn filter_bookings<'a>(
    bookings: &'a [Booking],
    facilities: &[Facility],
    filter: &BookingFilter,
) -> Vec<&'a Booking> {
    let query = filter
        .query
        .as_deref()
        .map(str::to_lowercase)
        .filter(|q| !q.is_empty());

    bookings
        .iter()
        .filter(|b| {
            if let Some(status) = filter.status {
                if b.status != status {
                    return false;
                }
            }
            match &query {
                None => true,
                Some(q) => {
                    let name = b
                        .facility
                        .as_ref()
                        .map(|f| f.name.clone())
                        .unwrap_or_else(|| facility_name(facilities, b.facility_id));
                    name.to_lowercase().contains(q)
                        || b.student_id.to_lowercase().contains(q)
                        || b.status.label().to_lowercase().contains(q)
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booking(id: i64, facility_id: i64, status: BookingStatus) -> Booking {
        Booking {
            id,
            facility_id,
            student_id: format!("S-{id:04}"),
            date: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
            start_time: "09:00".parse().unwrap(),
            end_time: "10:00".parse().unwrap(),
            status,
            notes: None,
            facility: None,
        }
    }

    fn facility(id: i64, name: &str) -> Facility {
        Facility {
            id,
            name: name.to_string(),
            location: "Main Campus".to_string(),
            capacity: 20,
            facility_type: "study_room".to_string(),
        }
    }

    #[test]
    fn breakdown_counts_every_status() {
        let bookings = vec![
            booking(1, 1, BookingStatus::Confirmed),
            booking(2, 1, BookingStatus::Confirmed),
            booking(3, 2, BookingStatus::Pending),
            booking(4, 2, BookingStatus::Cancelled),
        ];
        let breakdown = StatusBreakdown::of(&bookings);
        assert_eq!(breakdown.confirmed, 2);
        assert_eq!(breakdown.pending, 1);
        assert_eq!(breakdown.cancelled, 1);
        assert_eq!(breakdown.completed, 0);
        assert_eq!(breakdown.total(), 4);
        assert_eq!(breakdown.percentage(BookingStatus::Confirmed), 50);
    }

    #[test]
    fn breakdown_of_nothing_is_all_zero() {
        let breakdown = StatusBreakdown::of(&[]);
        assert_eq!(breakdown.total(), 0);
        assert_eq!(breakdown.percentage(BookingStatus::Confirmed), 0);
    }

    #[test]
    fn utilisation_skips_cancelled_and_keeps_empty_facilities() {
        let facilities = vec![facility(1, "Gym"), facility(2, "Lab"), facility(3, "Pool")];
        let bookings = vec![
            booking(1, 1, BookingStatus::Confirmed),
            booking(2, 1, BookingStatus::Completed),
            booking(3, 2, BookingStatus::Confirmed),
            booking(4, 2, BookingStatus::Cancelled),
        ];
        let util = facility_utilisation(&facilities, &bookings);
        assert_eq!(util.len(), 3);
        assert_eq!(util[0].bookings, 2);
        assert_eq!(util[0].share_percent, 67);
        assert_eq!(util[1].bookings, 1);
        assert_eq!(util[2].bookings, 0);
        assert_eq!(util[2].share_percent, 0);
    }

    #[test]
    fn filter_matches_query_and_status() {
        let facilities = vec![facility(1, "Main Gym"), facility(2, "Chemistry Lab")];
        let bookings = vec![
            booking(1, 1, BookingStatus::Confirmed),
            booking(2, 2, BookingStatus::Confirmed),
            booking(3, 2, BookingStatus::Cancelled),
        ];

        let by_name = filter_bookings(
            &bookings,
            &facilities,
            &BookingFilter {
                query: Some("gym".to_string()),
                status: None,
            },
        );
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 1);

        let by_status = filter_bookings(
            &bookings,
            &facilities,
            &BookingFilter {
                query: None,
                status: Some(BookingStatus::Cancelled),
            },
        );
        assert_eq!(by_status.len(), 1);
        assert_eq!(by_status[0].id, 3);

        let by_student = filter_bookings(
            &bookings,
            &facilities,
            &BookingFilter {
                query: Some("s-0002".to_string()),
                status: None,
            },
        );
        assert_eq!(by_student.len(), 1);
        assert_eq!(by_student[0].id, 2);
    }

    #[test]
    fn unknown_facility_gets_fallback_name() {
        assert_eq!(facility_name(&[], 42), "Unknown Facility");
    }
}
