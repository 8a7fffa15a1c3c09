use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};

/// Current local wall-clock time, the evaluation instant for past-day checks
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Attach the browser's UTC offset to a local slot start.
///
/// Returns `None` for local times skipped by a DST transition.
pub fn to_local_offset(instant: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    Local
        .from_local_datetime(&instant)
        .earliest()
        .map(|local| local.fixed_offset())
}
