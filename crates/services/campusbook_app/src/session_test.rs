#[cfg(test)]
mod tests {
    use crate::session::Session;
    use campusbook_api::facilities::FacilityPayload;
    use campusbook_api::service::mock::InMemoryBookingService;
    use campusbook_common::CampusbookError;
    use campusbook_config::AppConfig;
    use campusbook_core::models::BookingStatus;
    use campusbook_core::time::TimeOfDay;
    use chrono::{Duration, Local, NaiveDate};
    use std::sync::Arc;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    // Validation runs against the real clock, so tests book well in the future
    fn future_date() -> NaiveDate {
        Local::now().date_naive() + Duration::days(30)
    }

    fn test_config() -> Arc<AppConfig> {
        let mut config = AppConfig::default();
        config.user.student_id = "S-1001".to_string();
        config.user.display_name = "Kofi Mensah".to_string();
        Arc::new(config)
    }

    fn new_session() -> Session<InMemoryBookingService> {
        Session::new(Arc::new(InMemoryBookingService::new()), test_config())
    }

    fn facility_payload(name: &str) -> FacilityPayload {
        FacilityPayload {
            name: name.to_string(),
            location: "Science Block".to_string(),
            capacity: 12,
            facility_type: "study_room".to_string(),
        }
    }

    #[tokio::test]
    async fn toggling_two_slots_books_the_combined_range() {
        let mut session = new_session();
        let facility = session.add_facility(facility_payload("Study Room A")).await.unwrap();

        session.open_availability(facility.id, future_date()).await.unwrap();
        assert_eq!(session.state().slots().len(), 26);

        assert!(session.toggle_slot(t("09:00")));
        assert!(session.toggle_slot(t("09:30")));
        let range = session.state().selection().booking_range().unwrap();
        assert_eq!(range.start, t("09:00"));
        assert_eq!(range.end, t("10:00"));
        assert_eq!(range.duration_minutes(), 60);

        let booking = session.submit_booking(Some("group study".to_string())).await.unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.start_time, t("09:00"));
        assert_eq!(booking.end_time, t("10:00"));

        // Selection is gone, the reloaded grid shows the range as blocked
        assert!(session.state().selection().is_empty());
        let booked: Vec<String> = session
            .state()
            .slots()
            .iter()
            .filter(|s| s.booked)
            .map(|s| s.start.to_string())
            .collect();
        assert_eq!(booked, vec!["09:00", "09:30"]);
        assert_eq!(session.state().bookings().len(), 1);
    }

    #[tokio::test]
    async fn book_range_selects_the_covering_slots() {
        let mut session = new_session();
        let facility = session.add_facility(facility_payload("Study Room A")).await.unwrap();

        let booking = session
            .book_range(facility.id, future_date(), t("10:00"), t("11:30"), None)
            .await
            .unwrap();
        assert_eq!(booking.start_time, t("10:00"));
        assert_eq!(booking.end_time, t("11:30"));

        // The same range cannot be booked twice
        let err = session
            .book_range(facility.id, future_date(), t("10:30"), t("11:00"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, CampusbookError::ConflictError(_)));
    }

    #[tokio::test]
    async fn submitting_without_a_selection_never_reaches_the_network() {
        let mut session = new_session();
        let facility = session.add_facility(facility_payload("Study Room A")).await.unwrap();
        session.open_availability(facility.id, future_date()).await.unwrap();

        let err = session.submit_booking(None).await.unwrap_err();
        assert!(matches!(err, CampusbookError::ValidationError(_)));

        session.refresh().await.unwrap();
        assert!(session.state().bookings().is_empty());
    }

    #[tokio::test]
    async fn times_off_the_slot_grid_are_rejected() {
        let mut session = new_session();
        let facility = session.add_facility(facility_payload("Study Room A")).await.unwrap();

        let err = session
            .book_range(facility.id, future_date(), t("09:15"), t("10:15"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, CampusbookError::ValidationError(_)));
        assert!(session.state().selection().is_empty());
    }

    #[tokio::test]
    async fn past_dates_are_unselectable() {
        let mut session = new_session();
        let facility = session.add_facility(facility_payload("Study Room A")).await.unwrap();

        let yesterday = Local::now().date_naive() - Duration::days(1);
        let err = session.open_availability(facility.id, yesterday).await.unwrap_err();
        assert!(matches!(err, CampusbookError::ValidationError(_)));
    }

    #[tokio::test]
    async fn cancelling_frees_the_slots_again() {
        let mut session = new_session();
        let facility = session.add_facility(facility_payload("Study Room A")).await.unwrap();

        let booking = session
            .book_range(facility.id, future_date(), t("09:00"), t("10:00"), None)
            .await
            .unwrap();

        let cancelled = session.cancel_booking(booking.id).await.unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);
        assert_eq!(
            session.state().bookings()[0].status,
            BookingStatus::Cancelled
        );

        // The freed range books cleanly a second time
        session
            .book_range(facility.id, future_date(), t("09:00"), t("10:00"), None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn editing_and_deleting_bookings_updates_the_cache() {
        let mut session = new_session();
        let facility = session.add_facility(facility_payload("Study Room A")).await.unwrap();
        let booking = session
            .book_range(facility.id, future_date(), t("09:00"), t("10:00"), None)
            .await
            .unwrap();

        let edited = session
            .update_booking(
                booking.id,
                campusbook_api::bookings::BookingUpdate {
                    date: future_date(),
                    start_time: t("14:00"),
                    end_time: t("15:00"),
                    status: BookingStatus::Pending,
                },
            )
            .await
            .unwrap();
        assert_eq!(edited.start_time, t("14:00"));
        assert_eq!(session.state().bookings()[0].status, BookingStatus::Pending);

        session.delete_booking(booking.id).await.unwrap();
        assert!(session.state().bookings().is_empty());
    }

    #[tokio::test]
    async fn facility_management_updates_the_cache() {
        let mut session = new_session();
        let facility = session.add_facility(facility_payload("Study Room A")).await.unwrap();
        assert_eq!(session.state().facilities().len(), 1);

        let mut payload = facility_payload("Study Room A+");
        payload.capacity = 20;
        let updated = session.update_facility(facility.id, payload).await.unwrap();
        assert_eq!(updated.capacity, 20);
        assert_eq!(session.state().facilities()[0].name, "Study Room A+");

        session.remove_facility(facility.id).await.unwrap();
        assert!(session.state().facilities().is_empty());
    }

    #[tokio::test]
    async fn login_yields_the_backend_profile() {
        let mut session = new_session();
        let user = session.login("kmensah", "secret").await.unwrap();
        assert_eq!(user.username, "kmensah");

        let me = session.current_user().await.unwrap();
        assert_eq!(me.username, "kmensah");

        session.logout().await.unwrap();
        let err = session.current_user().await.unwrap_err();
        assert!(matches!(err, CampusbookError::AuthError(_)));
    }
}
