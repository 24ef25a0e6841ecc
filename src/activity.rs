/// Activity heatmap bucketing and trailing-window selection.
use chrono::{Days, Local, NaiveDate};

use crate::types::{Activity, ActivityDay, ActivityLevel};

const HALF_HOUR: f64 = 1800.0;
const TWO_HOURS: f64 = 7200.0;
const FOUR_HOURS: f64 = 14400.0;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Negative and non-finite durations count as no activity.
pub fn clamp_seconds(total_seconds: f64) -> f64 {
    if total_seconds.is_finite() && total_seconds > 0.0 {
        total_seconds
    } else {
        0.0
    }
}

pub fn classify(total_seconds: f64) -> ActivityLevel {
    let seconds = clamp_seconds(total_seconds);
    if seconds == 0.0 {
        ActivityLevel::None
    } else if seconds < HALF_HOUR {
        ActivityLevel::Low
    } else if seconds < TWO_HOURS {
        ActivityLevel::Medium
    } else if seconds < FOUR_HOURS {
        ActivityLevel::High
    } else {
        ActivityLevel::Peak
    }
}

/// `count` is whole minutes, rounded half up.
pub fn to_activity(day: &ActivityDay) -> Activity {
    let seconds = clamp_seconds(day.total_seconds);
    Activity {
        date: day.date.clone(),
        count: (seconds / 60.0).round() as u32,
        level: classify(seconds),
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// First day of a window ending at `as_of`; saturates at the earliest representable date.
pub fn window_start(as_of: NaiveDate, window_days: u32) -> NaiveDate {
    as_of
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN)
}

/// Keep activities dated within `[as_of - window_days, as_of]`, both ends inclusive.
///
/// Entries whose date does not parse are dropped one by one; the rest still pass through.
pub fn select_window(activities: &[Activity], window_days: u32, as_of: NaiveDate) -> Vec<Activity> {
    let start = window_start(as_of, window_days);

    activities
        .iter()
        .filter(|activity| match parse_date(&activity.date) {
            Some(date) => date >= start && date <= as_of,
            None => {
                tracing::debug!(date = %activity.date, "Dropping activity with malformed date");
                false
            }
        })
        .cloned()
        .collect()
}

pub fn select_window_today(activities: &[Activity], window_days: u32) -> Vec<Activity> {
    select_window(activities, window_days, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, total_seconds: f64) -> ActivityDay {
        ActivityDay {
            date: date.to_string(),
            total_seconds,
        }
    }

    fn date(value: &str) -> NaiveDate {
        parse_date(value).unwrap()
    }

    #[test]
    fn classify_boundaries() {
        let cases = [
            (0.0, 0),
            (1.0, 1),
            (1799.0, 1),
            (1800.0, 2),
            (7199.0, 2),
            (7200.0, 3),
            (14399.0, 3),
            (14400.0, 4),
            (100000.0, 4),
        ];
        for (seconds, level) in cases {
            assert_eq!(classify(seconds).as_u8(), level, "seconds = {seconds}");
        }
    }

    #[test]
    fn classify_clamps_invalid_durations() {
        assert_eq!(classify(-30.0), ActivityLevel::None);
        assert_eq!(classify(f64::NAN), ActivityLevel::None);
        assert_eq!(classify(f64::INFINITY), ActivityLevel::None);
        assert_eq!(to_activity(&day("2024-01-01", -120.0)).count, 0);
    }

    #[test]
    fn to_activity_rounds_minutes_half_up() {
        assert_eq!(to_activity(&day("2024-01-01", 89.0)).count, 1);
        assert_eq!(to_activity(&day("2024-01-01", 90.0)).count, 2);
        assert_eq!(to_activity(&day("2024-01-01", 150.0)).count, 3);

        let activity = to_activity(&day("2024-01-02", 5000.0));
        assert_eq!(activity.date, "2024-01-02");
        assert_eq!(activity.count, 83);
        assert_eq!(activity.level, ActivityLevel::Medium);
    }

    #[test]
    fn select_window_drops_malformed_dates() {
        let days = [
            day("2024-01-01", 0.0),
            day("2024-01-02", 5000.0),
            day("bad-date", 100.0),
        ];
        let activities: Vec<Activity> = days.iter().map(to_activity).collect();
        let levels: Vec<u8> = activities.iter().map(|a| a.level.as_u8()).collect();
        assert_eq!(levels[..2], [0u8, 2]);

        let selected = select_window(&activities, 30, date("2024-01-02"));
        assert_eq!(selected, activities[..2].to_vec());
    }

    #[test]
    fn select_window_boundaries_are_inclusive() {
        let activities: Vec<Activity> = ["2023-12-02", "2023-12-03", "2024-01-02", "2024-01-03"]
            .iter()
            .map(|d| to_activity(&day(d, 60.0)))
            .collect();

        let selected = select_window(&activities, 30, date("2024-01-02"));
        let dates: Vec<&str> = selected.iter().map(|a| a.date.as_str()).collect();
        assert_eq!(dates, vec!["2023-12-03", "2024-01-02"]);
    }

    #[test]
    fn select_window_preserves_order_and_is_idempotent() {
        let activities: Vec<Activity> = ["2024-01-05", "2024-01-01", "2024-01-03"]
            .iter()
            .map(|d| to_activity(&day(d, 4000.0)))
            .collect();
        let as_of = date("2024-01-05");

        let once = select_window(&activities, 7, as_of);
        let twice = select_window(&once, 7, as_of);
        assert_eq!(once, activities);
        assert_eq!(once, twice);
    }

    #[test]
    fn select_window_zero_days_keeps_only_as_of() {
        let activities: Vec<Activity> = ["2024-01-01", "2024-01-02"]
            .iter()
            .map(|d| to_activity(&day(d, 10.0)))
            .collect();
        let selected = select_window(&activities, 0, date("2024-01-02"));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, "2024-01-02");
    }

    #[test]
    fn select_window_today_ends_at_current_date() {
        let today = Local::now().date_naive();
        let too_old = today.checked_sub_days(Days::new(31)).unwrap();
        let activities = vec![
            to_activity(&day(&today.format(DATE_FORMAT).to_string(), 600.0)),
            to_activity(&day(&too_old.format(DATE_FORMAT).to_string(), 600.0)),
        ];

        let selected = select_window_today(&activities, 30);
        assert_eq!(selected, activities[..1].to_vec());
    }

    #[test]
    fn window_start_saturates() {
        assert_eq!(window_start(date("2024-01-02"), 30), date("2023-12-03"));
        assert_eq!(window_start(date("2024-01-02"), u32::MAX), NaiveDate::MIN);
    }
}
