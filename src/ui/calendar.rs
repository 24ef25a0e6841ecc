use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};
use ratatui::{
    style::Style,
    text::{Line, Span, Text},
};

use super::theme::Palette;
use crate::activity::parse_date;
use crate::types::{Activity, ActivityLevel};

/// Week columns (Sunday first) covering `start..=end`; days outside the range are `None`.
pub fn calendar_grid(
    activities: &[Activity],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<[Option<ActivityLevel>; 7]> {
    let levels: HashMap<NaiveDate, ActivityLevel> = activities
        .iter()
        .filter_map(|activity| parse_date(&activity.date).map(|date| (date, activity.level)))
        .collect();

    let lead = u64::from(start.weekday().num_days_from_sunday());
    let Some(mut day) = start.checked_sub_days(Days::new(lead)) else {
        return Vec::new();
    };

    let mut weeks = Vec::new();
    while day <= end {
        let mut week = [None; 7];
        for slot in week.iter_mut() {
            if day >= start && day <= end {
                *slot = Some(levels.get(&day).copied().unwrap_or_default());
            }
            day = match day.succ_opt() {
                Some(next) => next,
                None => return weeks,
            };
        }
        weeks.push(week);
    }
    weeks
}

/// Columns a window of `days` needs, two characters per week.
pub fn calendar_width(days: u32) -> u16 {
    let weeks = days / 7 + 2;
    u16::try_from(weeks * 2).unwrap_or(u16::MAX)
}

pub fn build_calendar_text(weeks: &[[Option<ActivityLevel>; 7]], total_minutes: u32, palette: Palette) -> Text<'static> {
    let mut lines: Vec<Line> = (0..7)
        .map(|row| {
            let spans: Vec<Span> = weeks
                .iter()
                .map(|week| match week[row] {
                    Some(level) => Span::styled("■ ", Style::default().fg(palette.level(level))),
                    None => Span::raw("  "),
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    lines.push(Line::from(Span::styled(
        format!("{} in window", super::helpers::format_minutes(total_minutes)),
        Style::default().fg(palette.dim()),
    )));
    Text::from(lines)
}
