use chrono::NaiveDate;
use js_sys::Date;

/// Get today's date in the browser's local timezone
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    local_date(&now).unwrap_or_default()
}

/// Milliseconds since the epoch, used to derive new lecture IDs
pub fn now_millis() -> u64 {
    Date::now().max(0.0) as u64
}

/// Local calendar date of a JS date. Reading the local components avoids
/// the day shift a UTC conversion would introduce west of Greenwich.
fn local_date(date: &Date) -> Option<NaiveDate> {
    let year = date.get_full_year() as i32;
    let month = date.get_month() + 1; // JavaScript months are 0-indexed
    let day = date.get_date();

    NaiveDate::from_ymd_opt(year, month, day)
}
