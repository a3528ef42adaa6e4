//! Resolution of calendar date expressions into inclusive timestamp spans.
//!
//! A date expression names a calendar unit; the resolved span covers that
//! whole unit, from its first second to its last:
//!
//! - `` (empty)     => unbounded on both sides
//! - `today`        => midnight today .. one second before the next midnight
//! - `yesterday`    => the same, shifted one day back
//! - `2020`         => 2020-01-01 00:00:00 .. 2020-12-31 23:59:59
//! - `2020-2`       => 2020-02-01 00:00:00 .. 2020-02-29 23:59:59
//! - `2020-12-31`   => 2020-12-31 00:00:00 .. 2020-12-31 23:59:59
//!
//! Month and year rollover (December, the last day of a month) and leap
//! years fall out of calendar arithmetic rather than hand-rolled tables.
//! Everything else is a [`DateFormatError`].
//!
//! "Today" is whatever the supplied [`DateContext`] says it is. The context
//! is the only clock in this crate; resolution never reads process-global
//! time, so repeated runs against a pinned context are reproducible.

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive `[start, end]` pair of epoch seconds. `None` means the span
/// is unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl DateSpan {
    pub const UNBOUNDED: DateSpan = DateSpan {
        start: None,
        end: None,
    };

    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }

    /// Whether `timestamp` falls inside the span. Open sides always match.
    pub fn contains(&self, timestamp: i64) -> bool {
        if let Some(bound) = self.start {
            if timestamp < bound {
                return false;
            }
        }
        if let Some(bound) = self.end {
            if timestamp > bound {
                return false;
            }
        }
        true
    }
}

/// The reference clock for `today`/`yesterday` and for projecting civil
/// dates onto the epoch timeline.
#[derive(Debug, Clone)]
pub struct DateContext {
    tz: TimeZone,
    today: Date,
}

impl DateContext {
    /// Pins the context to an explicit instant in an explicit zone.
    pub fn new(tz: TimeZone, now: Timestamp) -> Self {
        let today = now.to_zoned(tz.clone()).date();
        Self { tz, today }
    }

    /// Reads the system clock and zone once. The returned context stays
    /// fixed afterwards.
    pub fn capture() -> Self {
        let tz = TimeZone::system();
        let zoned = Timestamp::now().to_zoned(tz.clone());
        Self {
            today: zoned.date(),
            tz,
        }
    }

    pub fn today(&self) -> Date {
        self.today
    }

    fn epoch_second(&self, date: Date) -> Option<i64> {
        let zoned = self.tz.to_zoned(date.at(0, 0, 0, 0)).ok()?;
        Some(zoned.timestamp().as_second())
    }
}

/// Raised when an expression matches none of the recognized date forms, or
/// names a calendar unit that does not exist (month 13, February 30th).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatError {
    expression: String,
}

impl DateFormatError {
    /// The offending expression as the user typed it, surrounding
    /// whitespace stripped.
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl fmt::Display for DateFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid date expression: {:?}", self.expression)
    }
}

impl std::error::Error for DateFormatError {}

/// Resolves one date expression against `context`. Matching is
/// case-insensitive and ignores surrounding whitespace.
///
/// ```
/// use date_span::{resolve_expression, DateContext};
///
/// let context = DateContext::capture();
/// assert!(resolve_expression("2020-02-29", &context).is_ok());
/// assert!(resolve_expression("2021-02-29", &context).is_err());
/// ```
pub fn resolve_expression(
    expression: &str,
    context: &DateContext,
) -> Result<DateSpan, DateFormatError> {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return Ok(DateSpan::UNBOUNDED);
    }

    let span = match trimmed.to_ascii_lowercase().as_str() {
        "today" => day_span(context.today, context),
        "yesterday" => context
            .today
            .yesterday()
            .ok()
            .and_then(|date| day_span(date, context)),
        numeric => numeric_span(numeric, context),
    };

    span.ok_or_else(|| DateFormatError {
        expression: trimmed.to_string(),
    })
}

/// `YYYY`, `YYYY-MM`, or `YYYY-MM-DD`, with one- or two-digit month and day.
fn numeric_span(expression: &str, context: &DateContext) -> Option<DateSpan> {
    let mut parts = expression.split('-');
    let year = parts.next()?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i16 = year.parse().ok()?;

    match (parts.next(), parts.next(), parts.next()) {
        (None, ..) => year_span(year, context),
        (Some(month), None, _) => month_span(year, component(month)?, context),
        (Some(month), Some(day), None) => {
            let date = Date::new(year, component(month)?, component(day)?).ok()?;
            day_span(date, context)
        }
        _ => None,
    }
}

fn component(piece: &str) -> Option<i8> {
    if piece.is_empty() || piece.len() > 2 || !piece.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    piece.parse().ok()
}

fn year_span(year: i16, context: &DateContext) -> Option<DateSpan> {
    let start = Date::new(year, 1, 1).ok()?;
    let next = Date::new(year.checked_add(1)?, 1, 1).ok()?;
    span_until(start, next, context)
}

fn month_span(year: i16, month: i8, context: &DateContext) -> Option<DateSpan> {
    let start = Date::new(year, month, 1).ok()?;
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    let next = Date::new(next_year, next_month, 1).ok()?;
    span_until(start, next, context)
}

fn day_span(date: Date, context: &DateContext) -> Option<DateSpan> {
    span_until(date, date.tomorrow().ok()?, context)
}

/// Inclusive span from midnight of `start` to one second before midnight of
/// `next`, both projected through the context's zone.
fn span_until(start: Date, next: Date, context: &DateContext) -> Option<DateSpan> {
    let start_ts = context.epoch_second(start)?;
    let end_ts = context.epoch_second(next)?.checked_sub(1)?;
    Some(DateSpan {
        start: Some(start_ts),
        end: Some(end_ts),
    })
}
