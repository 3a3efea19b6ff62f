use chrono::{Datelike, Duration, Months, NaiveDate};

/// First day of the month containing `date`.
pub(crate) fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub(crate) fn month_end(date: NaiveDate) -> NaiveDate {
    match month_start(date).checked_add_months(Months::new(1)) {
        Some(next) => next - Duration::days(1),
        None => date,
    }
}

/// First day of the month `offset` months after (or before, if negative)
/// the month containing `date`. Saturates at the calendar limits.
pub(crate) fn shift_month(date: NaiveDate, offset: i32) -> NaiveDate {
    let start = month_start(date);
    let shifted = if offset >= 0 {
        start.checked_add_months(Months::new(offset as u32))
    } else {
        start.checked_sub_months(Months::new(offset.unsigned_abs()))
    };
    shifted.unwrap_or(start)
}
