use chrono::NaiveDate;

use crate::model::{Task, TimeWindow};

use super::calendar::{month_end, shift_month};

/// Derive the padded visible window from every usable date in the
/// collection: one calendar month of slack before the earliest date and
/// two after the latest. Tasks without any parseable date contribute
/// nothing; an entirely dateless collection yields a zero-span window
/// centered on `now`.
pub fn compute_window(tasks: &[Task], now: NaiveDate) -> TimeWindow {
    let dates = tasks.iter().flat_map(|t| {
        [t.created_time, t.due_date, t.last_edited_time]
            .into_iter()
            .flatten()
            .map(|instant| instant.date_naive())
    });

    let (min, max) = match dates.fold(None::<(NaiveDate, NaiveDate)>, |acc, d| {
        Some(match acc {
            Some((lo, hi)) => (lo.min(d), hi.max(d)),
            None => (d, d),
        })
    }) {
        Some(bounds) => bounds,
        None => {
            tracing::debug!("no usable dates in task collection, degenerate window");
            return TimeWindow::at(now);
        }
    };

    TimeWindow {
        start: shift_month(min, -1),
        end: month_end(shift_month(max, 2)),
        now,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn task_created(y: i32, m: u32, day: u32) -> Task {
        let mut t = Task::new("t");
        t.created_time = Some(Utc.with_ymd_and_hms(y, m, day, 12, 0, 0).unwrap());
        t
    }

    #[test]
    fn empty_collection_yields_zero_span_window() {
        let now = d(2024, 6, 1);
        let window = compute_window(&[], now);
        assert_eq!(window.start, now);
        assert_eq!(window.end, now);
        assert_eq!(window.now, now);
    }

    #[test]
    fn dateless_tasks_degrade_like_an_empty_collection() {
        let now = d(2024, 6, 1);
        let window = compute_window(&[Task::new("no dates")], now);
        assert_eq!(window.start, window.end);
    }

    #[test]
    fn window_pads_one_month_back_and_two_forward() {
        let window = compute_window(&[task_created(2024, 3, 15)], d(2024, 3, 20));
        assert_eq!(window.start, d(2024, 2, 1));
        assert_eq!(window.end, d(2024, 5, 31));
        assert_eq!(window.now, d(2024, 3, 20));
    }

    #[test]
    fn window_spans_all_date_fields_across_tasks() {
        let mut early = task_created(2024, 1, 10);
        early.due_date = Some(Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap());
        let mut late = task_created(2024, 4, 2);
        late.last_edited_time = Some(Utc.with_ymd_and_hms(2024, 7, 9, 0, 0, 0).unwrap());

        let window = compute_window(&[early, late], d(2024, 5, 1));
        assert_eq!(window.start, d(2023, 12, 1));
        assert_eq!(window.end, d(2024, 9, 30));
    }

    #[test]
    fn window_always_contains_the_source_dates() {
        let window = compute_window(&[task_created(2024, 12, 31)], d(2025, 1, 1));
        assert!(window.start <= d(2024, 12, 31));
        assert!(window.end >= d(2024, 12, 31));
    }
}
