//! Date Range Parsing
//!
//! Turns the raw token produced by a date-range picker widget into a
//! canonical pair of calendar-date bounds the query layer can consume
//! directly. Accepted token forms:
//!
//! - `"2024-01-01"` — a single date, treated as a single-day range
//! - `"2024-01-01,2024-01-31"` — an explicit start/end pair
//!
//! A reversed pair is normalized by swapping the bounds rather than
//! rejected, so the invariant `start <= end` always holds for a parsed
//! range.

use chrono::NaiveDate;
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A pair of inclusive calendar-date bounds with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range from two bounds, swapping them into order if reversed.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Parse a raw picker token into a canonical range.
    ///
    /// # Errors
    ///
    /// Returns [`DateParseError`] when the token is not a date or a
    /// comma-separated pair of dates.
    pub fn parse(token: &str) -> Result<Self, DateParseError> {
        let mut parts = token.splitn(3, ',');
        let first = parts.next().unwrap_or_default().trim();
        let second = parts.next().map(str::trim);

        if parts.next().is_some() {
            return Err(DateParseError::new(token));
        }

        let start = parse_date(first).ok_or_else(|| DateParseError::new(token))?;
        let end = match second {
            Some(raw) => parse_date(raw).ok_or_else(|| DateParseError::new(token))?,
            // A lone date is a single-day range.
            None => start,
        };

        Ok(Self::new(start, end))
    }

    /// The lower bound.
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The upper bound.
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Both bounds, lower first.
    #[must_use]
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// The two bounds rendered as `YYYY-MM-DD` strings, lower first.
    #[must_use]
    pub fn into_values(self) -> Vec<String> {
        vec![
            self.start.format(DATE_FORMAT).to_string(),
            self.end.format(DATE_FORMAT).to_string(),
        ]
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Error returned when a picker token cannot be read as a date or range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    /// The token that failed to parse
    pub token: String,
}

impl DateParseError {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid date or date range", self.token)
    }
}

impl std::error::Error for DateParseError {}
