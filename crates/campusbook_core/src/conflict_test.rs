#[cfg(test)]
mod tests {
    use crate::conflict::{is_booked, overlaps};
    use crate::models::{Booking, BookingStatus};
    use crate::time::TimeOfDay;
    use chrono::NaiveDate;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn booking(facility_id: i64, date: &str, start: &str, end: &str, status: BookingStatus) -> Booking {
        Booking {
            id: 1,
            facility_id,
            student_id: "S-1001".to_string(),
            date: date.parse().unwrap(),
            start_time: t(start),
            end_time: t(end),
            status,
            notes: None,
            facility: None,
        }
    }

    #[test]
    fn overlap_is_half_open() {
        // Touching intervals do not overlap
        assert!(!overlaps(t("09:00"), t("09:30"), t("09:30"), t("10:00")));
        assert!(!overlaps(t("09:30"), t("10:00"), t("09:00"), t("09:30")));
        // Any shared minute does
        assert!(overlaps(t("09:00"), t("09:30"), t("09:15"), t("09:45")));
        assert!(overlaps(t("09:00"), t("10:00"), t("09:15"), t("09:45")));
        assert!(overlaps(t("09:15"), t("09:45"), t("09:00"), t("10:00")));
    }

    #[test]
    fn slot_overlapping_confirmed_booking_is_booked() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let bookings = vec![booking(1, "2026-08-10", "09:00", "10:00", BookingStatus::Confirmed)];

        assert!(is_booked(1, date, t("09:00"), t("09:30"), &bookings));
        assert!(is_booked(1, date, t("09:30"), t("10:00"), &bookings));
        assert!(!is_booked(1, date, t("10:00"), t("10:30"), &bookings));
        assert!(!is_booked(1, date, t("08:30"), t("09:00"), &bookings));
    }

    #[test]
    fn cancelled_bookings_do_not_block() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let bookings = vec![booking(1, "2026-08-10", "09:00", "10:00", BookingStatus::Cancelled)];
        assert!(!is_booked(1, date, t("09:00"), t("09:30"), &bookings));
    }

    #[test]
    fn pending_and_completed_bookings_block() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let bookings = vec![
            booking(1, "2026-08-10", "09:00", "09:30", BookingStatus::Pending),
            booking(1, "2026-08-10", "11:00", "11:30", BookingStatus::Completed),
        ];
        assert!(is_booked(1, date, t("09:00"), t("09:30"), &bookings));
        assert!(is_booked(1, date, t("11:00"), t("11:30"), &bookings));
    }

    #[test]
    fn other_facility_or_date_never_conflicts() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let bookings = vec![
            booking(2, "2026-08-10", "09:00", "10:00", BookingStatus::Confirmed),
            booking(1, "2026-08-11", "09:00", "10:00", BookingStatus::Confirmed),
        ];
        assert!(!is_booked(1, date, t("09:00"), t("09:30"), &bookings));
    }
}
