//! Wall-clock helpers: epoch-millisecond timestamps, the sleep window, and
//! whole-day age math.
//!
//! The simulation is driven by real time rather than an in-world calendar,
//! so every operation takes an explicit `now` in epoch milliseconds. Tests
//! construct timestamps directly; the CLI feeds in [`now_ms`].

use chrono::{DateTime, Local, TimeZone, Timelike, Utc};

/// Milliseconds in one minute.
pub const MINUTE_MS: i64 = 60_000;

/// Milliseconds in one day.
pub const DAY_MS: i64 = 86_400_000;

/// Hour at which the pet falls asleep (inclusive).
pub const SLEEP_START_HOUR: u32 = 22;

/// Hour at which the pet wakes up (exclusive end of the sleep window).
pub const WAKE_HOUR: u32 = 7;

/// Current wall-clock time as epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Local hour of day (0..24) for an epoch-millisecond timestamp.
///
/// Falls back to the UTC hour if the timestamp is outside the representable
/// local range, which cannot happen for timestamps produced by [`now_ms`].
pub fn local_hour(now: i64) -> u32 {
    match Local.timestamp_millis_opt(now) {
        chrono::LocalResult::Single(dt) => dt.hour(),
        _ => DateTime::<Utc>::from_timestamp_millis(now)
            .map(|dt| dt.hour())
            .unwrap_or(0),
    }
}

/// Whether a given hour of day falls in the sleep window 22:00-06:59.
///
/// The window wraps past midnight, so membership is a disjunction rather
/// than a range check.
pub fn is_sleep_hour(hour: u32) -> bool {
    hour >= SLEEP_START_HOUR || hour < WAKE_HOUR
}

/// Whole elapsed minutes between two timestamps, never negative.
pub fn elapsed_minutes(from: i64, to: i64) -> i64 {
    ((to - from) / MINUTE_MS).max(0)
}

/// Whole elapsed days between a birth timestamp and `now`, never negative.
pub fn elapsed_days(birth: i64, now: i64) -> u32 {
    ((now - birth) / DAY_MS).max(0) as u32
}
