// --- File: crates/campusbook_core/src/calendar.rs ---
use crate::models::Booking;
use chrono::{Datelike, Duration, NaiveDate};

/// One cell of the mini-calendar month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the leading cells borrowed from the previous month.
    pub in_month: bool,
    pub is_today: bool,
    pub is_past: bool,
    pub is_selected: bool,
    /// Only set for non-past days; past days render greyed out regardless.
    pub has_bookings: bool,
}

impl CalendarDay {
    /// Past dates are greyed out and unclickable.
    pub fn selectable(&self) -> bool {
        !self.is_past && self.in_month
    }
}

/// Builds the month grid for the mini calendar: leading days from the
/// previous month so the first row starts on Sunday, then every day of the
/// month with its display flags. Returns an empty grid for an invalid
/// year/month pair.
pub fn month_grid(
    year: i32,
    month: u32,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    bookings: &[Booking],
) -> Vec<CalendarDay> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => first,
        None => return Vec::new(),
    };
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let days_in_month = match next_month {
        Some(next) => next.signed_duration_since(first).num_days(),
        None => return Vec::new(),
    };

    let lead = first.weekday().num_days_from_sunday() as i64;
    let mut days = Vec::with_capacity((lead + days_in_month) as usize);

    for i in 0..lead {
        let date = first - Duration::days(lead - i);
        days.push(CalendarDay {
            date,
            in_month: false,
            is_today: date == today,
            is_past: date < today,
            is_selected: false,
            has_bookings: false,
        });
    }

    for offset in 0..days_in_month {
        let date = first + Duration::days(offset);
        let is_past = date < today;
        days.push(CalendarDay {
            date,
            in_month: true,
            is_today: date == today,
            is_past,
            is_selected: selected == Some(date),
            has_bookings: !is_past && bookings.iter().any(|b| b.date == date),
        });
    }

    days
}
