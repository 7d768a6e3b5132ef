//! Calendar dates for use-by and frozen-on bookkeeping.
//!
//! Dates are plain year/month/day triples. There is no calendar arithmetic:
//! a use-by string is parsed leniently as `int-int-int` whenever it is
//! compared, and ordering is field by field (year, then month, then day).

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A year-month-day triple.
///
/// Fields are not range-checked, so `2024-13-40` parses and orders like any
/// other date. The derived ordering compares year, then month, then day.
///
/// # Examples
///
/// ```
/// use larder::core::CalendarDate;
///
/// let date = CalendarDate::parse("2024-03-05").unwrap();
/// assert_eq!(date, CalendarDate::new(2024, 3, 5));
/// assert_eq!(date.to_string(), "2024-3-5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: i32,
    day: i32,
}

impl CalendarDate {
    /// Creates a date from its fields.
    #[must_use]
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Parses the leading `int-int-int` of a string.
    ///
    /// Leading whitespace is skipped before each number, signs are accepted,
    /// and anything after the third number is ignored. Returns `None` when
    /// three numbers cannot be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use larder::core::CalendarDate;
    ///
    /// assert!(CalendarDate::parse("2024-1-9").is_some());
    /// assert!(CalendarDate::parse("2024-01-09T10:00").is_some());
    /// assert!(CalendarDate::parse("2024/01/09").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let caps = date_regex().captures(s)?;
        let field = |i: usize| caps.get(i)?.as_str().parse::<i32>().ok();
        Some(Self::new(field(1)?, field(2)?, field(3)?))
    }

    /// Converts a chrono date.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn from_naive(date: NaiveDate) -> Self {
        // month() and day() are at most 31
        Self::new(date.year(), date.month() as i32, date.day() as i32)
    }

    /// Today's date in the local time zone.
    #[must_use]
    pub fn today() -> Self {
        Self::from_naive(Local::now().date_naive())
    }

    /// Year field.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Month field.
    #[must_use]
    pub const fn month(self) -> i32 {
        self.month
    }

    /// Day field.
    #[must_use]
    pub const fn day(self) -> i32 {
        self.day
    }

    /// Returns `true` if `self` is strictly earlier than `other`.
    #[must_use]
    pub fn is_before(self, other: Self) -> bool {
        self < other
    }
}

/// Renders as `Y-M-D` without zero padding (`2024-3-5`).
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

#[allow(clippy::expect_used)]
fn date_regex() -> &'static Regex {
    static DATE: OnceLock<Regex> = OnceLock::new();
    DATE.get_or_init(|| {
        Regex::new(r"^\s*([+-]?[0-9]+)-\s*([+-]?[0-9]+)-\s*([+-]?[0-9]+)").expect("valid regex")
    })
}

/// Source of "today" for item construction and expiry queries.
pub trait Clock {
    /// The current calendar date.
    fn today(&self) -> CalendarDate;
}

/// Reads the local wall-clock date on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::today()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}
