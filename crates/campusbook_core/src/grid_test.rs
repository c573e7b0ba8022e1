#[cfg(test)]
mod tests {
    use crate::grid::{slot_grid, OperatingWindow};
    use crate::models::{Booking, BookingStatus};
    use crate::time::TimeOfDay;
    use chrono::NaiveDate;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn window(open: &str, close: &str) -> OperatingWindow {
        OperatingWindow::new(t(open), t(close)).unwrap()
    }

    fn booking(start: &str, end: &str, status: BookingStatus) -> Booking {
        Booking {
            id: 7,
            facility_id: 1,
            student_id: "S-1001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
            start_time: t(start),
            end_time: t(end),
            status,
            notes: None,
            facility: None,
        }
    }

    #[test]
    fn campus_window_yields_26_half_hour_slots() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let slots = slot_grid(1, date, &[], window("06:00", "19:00"), 30);

        assert_eq!(slots.len(), 26);
        assert_eq!(slots[0].start, t("06:00"));
        assert_eq!(slots[0].end, t("06:30"));
        assert_eq!(slots[25].start, t("18:30"));
        assert_eq!(slots[25].end, t("19:00"));
        assert!(slots.iter().all(|s| !s.booked));
    }

    #[test]
    fn slots_are_gap_free_and_non_overlapping() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let slots = slot_grid(1, date, &[], window("07:00", "21:00"), 30);

        assert_eq!(slots.len(), 28);
        for pair in slots.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn trailing_partial_slot_is_dropped() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        // 06:00-18:45 leaves a 15-minute tail that must not become a slot
        let slots = slot_grid(1, date, &[], window("06:00", "18:45"), 30);

        assert_eq!(slots.len(), 25);
        assert_eq!(slots.last().unwrap().end, t("18:30"));
    }

    #[test]
    fn bookings_mark_overlapping_slots() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let bookings = vec![booking("09:00", "10:00", BookingStatus::Confirmed)];
        let slots = slot_grid(1, date, &bookings, window("06:00", "19:00"), 30);

        let booked: Vec<String> = slots
            .iter()
            .filter(|s| s.booked)
            .map(|s| s.start.to_string())
            .collect();
        assert_eq!(booked, vec!["09:00", "09:30"]);
    }

    #[test]
    fn cancelled_bookings_leave_slots_free() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let bookings = vec![booking("09:00", "10:00", BookingStatus::Cancelled)];
        let slots = slot_grid(1, date, &bookings, window("06:00", "19:00"), 30);
        assert!(slots.iter().all(|s| !s.booked));
    }

    #[test]
    fn booking_straddling_slot_boundary_marks_both_slots() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let bookings = vec![booking("09:15", "09:45", BookingStatus::Confirmed)];
        let slots = slot_grid(1, date, &bookings, window("06:00", "19:00"), 30);

        let booked: Vec<String> = slots
            .iter()
            .filter(|s| s.booked)
            .map(|s| s.start.to_string())
            .collect();
        assert_eq!(booked, vec!["09:00", "09:30"]);
    }

    #[test]
    fn zero_slot_length_produces_no_slots() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        assert!(slot_grid(1, date, &[], window("06:00", "19:00"), 0).is_empty());
    }

    #[test]
    fn window_rejects_inverted_bounds() {
        assert!(OperatingWindow::new(t("19:00"), t("06:00")).is_none());
        assert!(OperatingWindow::new(t("09:00"), t("09:00")).is_none());
    }
}
