use chrono::{DateTime, TimeDelta, Utc};

/// `now − window_days`, saturating instead of overflowing.
///
/// A window too large to represent reaches back to the earliest instant; a
/// negative one too large to represent lands on the latest, leaving an empty range.
pub fn window_start(now: DateTime<Utc>, window_days: i64) -> DateTime<Utc> {
    TimeDelta::try_days(window_days)
        .and_then(|delta| now.checked_sub_signed(delta))
        .unwrap_or(if window_days >= 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}
