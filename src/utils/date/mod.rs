// Date utility functions

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Timelike};

/// Combine a calendar date and a wall-clock time into a local instant.
///
/// Times that fall into a DST gap are pushed forward in 30 minute steps;
/// ambiguous times resolve to the earlier instant.
pub fn combine_date_with_time(date: NaiveDate, time: NaiveTime) -> DateTime<Local> {
    let mut naive = date.and_time(time);
    for _ in 0..3 {
        match Local.from_local_datetime(&naive) {
            LocalResult::Single(dt) => return dt,
            LocalResult::Ambiguous(dt, _) => return dt,
            LocalResult::None => naive += Duration::minutes(30),
        }
    }
    Local::now()
}

/// Round a minute down onto a `step` grid (`step` of 0 is treated as 1).
pub fn snap_minute(minute: u32, step: u32) -> u32 {
    let step = step.max(1);
    (minute / step) * step
}

/// Convert a 24-hour value to `(hour_12, is_pm)`.
pub fn to_12_hour(hour: u32) -> (u32, bool) {
    let is_pm = hour >= 12;
    let hour_12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    (hour_12, is_pm)
}

/// Convert a 12-hour value plus meridiem back to 24-hour.
pub fn from_12_hour(hour_12: u32, is_pm: bool) -> u32 {
    let base = hour_12 % 12;
    if is_pm {
        base + 12
    } else {
        base
    }
}

/// Hour and minute of `dt`, with seconds dropped.
pub fn hour_minute(dt: &DateTime<Local>) -> (u32, u32) {
    (dt.hour(), dt.minute())
}
