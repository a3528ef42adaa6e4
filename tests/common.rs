#![allow(dead_code)]
//! Shared helpers for `booru-query` integration tests.

use booru_query::DateContext;
use jiff::civil::date;
use jiff::tz::TimeZone;

/// Compilation context pinned to noon, 2021-06-15, UTC.
pub fn fixed_context() -> DateContext {
    context_at(2021, 6, 15)
}

pub fn context_at(year: i16, month: i8, day: i8) -> DateContext {
    let now = date(year, month, day)
        .at(12, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .unwrap()
        .timestamp();
    DateContext::new(TimeZone::UTC, now)
}

/// Epoch seconds of a civil datetime in UTC.
pub fn utc_seconds(year: i16, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> i64 {
    date(year, month, day)
        .at(hour, minute, second, 0)
        .to_zoned(TimeZone::UTC)
        .unwrap()
        .timestamp()
        .as_second()
}
