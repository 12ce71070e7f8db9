use chrono::{NaiveDate, NaiveDateTime};
use js_sys::Date;

/// Current local wall-clock time as reported by the browser
pub fn current_datetime() -> NaiveDateTime {
    let now = Date::new_0();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed

    NaiveDate::from_ymd_opt(now.get_full_year() as i32, month, now.get_date())
        .and_then(|date| date.and_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds()))
        .unwrap_or_default()
}

/// Today's local date
pub fn today() -> NaiveDate {
    current_datetime().date()
}
