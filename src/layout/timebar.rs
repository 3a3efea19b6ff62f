use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::model::{SegmentKind, TimeWindow, TimebarSegment};

use super::calendar::{month_end, month_start};

/// Emit the calendar axis for a window: one segment per month from the
/// window start's month through the window end's month, each followed by
/// its 7-day week segments clipped at the month's last day.
///
/// Week numbers use the original heuristic
/// `ceil((day_of_month + weekday_of_month_start) / 7)` with the weekday
/// counted from Sunday. This is intentionally not ISO-8601 numbering.
pub fn generate_timebar(window: &TimeWindow) -> Vec<TimebarSegment> {
    let mut segments = Vec::new();
    let mut month = month_start(window.start);
    let last_month = month_start(window.end);

    while month <= last_month {
        let last_day = month_end(month);
        segments.push(TimebarSegment {
            id: format!("month-{}", month.format("%Y-%m")),
            label: month.format("%b %Y").to_string(),
            start: month,
            end: last_day,
            kind: SegmentKind::Month,
        });

        let weekday_offset = month.weekday().num_days_from_sunday();
        let mut week_start = month;
        while week_start <= last_day {
            let number = (week_start.day() + weekday_offset).div_ceil(7);
            segments.push(TimebarSegment {
                id: format!("week-{}-{number}", month.format("%Y-%m")),
                label: format!("W{number}"),
                start: week_start,
                end: (week_start + Duration::days(6)).min(last_day),
                kind: SegmentKind::Week,
            });
            week_start += Duration::days(7);
        }

        month = match month.checked_add_months(Months::new(1)) {
            Some(next) => next,
            None => break,
        };
    }

    segments
}
