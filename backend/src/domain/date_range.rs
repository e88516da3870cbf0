//! Strict ISO-8601 date-range parsing.
//!
//! Accepted forms, nothing else:
//! - `YYYY-MM-DD` (midnight UTC),
//! - `YYYY-MM-DDTHH:MM:SS[.fff]` with `Z` or a `±HH:MM` offset (converted to UTC),
//! - `YYYY-MM-DDTHH:MM:SS[.fff]` without offset (read as UTC).

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::domain::Error;

/// Which end of a range a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    /// Inclusive lower bound.
    Start,
    /// Inclusive upper bound.
    End,
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start_date"),
            Self::End => f.write_str("end_date"),
        }
    }
}

/// Reasons a pair of date parameters is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateRangeError {
    /// A bound is not a strict ISO-8601 date or date-time.
    #[error("{bound} must be an ISO 8601 date or date-time, got '{value}'")]
    InvalidFormat {
        /// Offending bound.
        bound: RangeBound,
        /// Raw text received.
        value: String,
    },
    /// The start lies after the end.
    #[error("start_date ({start}) must not be after end_date ({end})")]
    Inverted {
        /// Parsed start, RFC 3339.
        start: String,
        /// Parsed end, RFC 3339.
        end: String,
    },
}

impl From<DateRangeError> for Error {
    fn from(value: DateRangeError) -> Self {
        Error::invalid_input(value.to_string())
    }
}

/// An ordered pair of UTC instants.
///
/// ## Invariants
/// - `start <= end`; equal bounds form a zero-width range.
///
/// Only [`parse_date_range`] constructs values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    /// Inclusive lower bound.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Inclusive upper bound.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Query pairs forwarded upstream: the UTC calendar date of each bound.
    ///
    /// ```
    /// use events_gateway::domain::parse_date_range;
    ///
    /// let range = parse_date_range("2025-07-01", "2025-07-10T23:30:00-02:00").unwrap();
    /// assert_eq!(
    ///     range.query_pairs(),
    ///     [
    ///         ("start_date".to_owned(), "2025-07-01".to_owned()),
    ///         ("end_date".to_owned(), "2025-07-11".to_owned()),
    ///     ]
    /// );
    /// ```
    pub fn query_pairs(&self) -> [(String, String); 2] {
        [
            (
                RangeBound::Start.to_string(),
                self.start.format("%Y-%m-%d").to_string(),
            ),
            (
                RangeBound::End.to_string(),
                self.end.format("%Y-%m-%d").to_string(),
            ),
        ]
    }
}

/// Parse two textual bounds into a validated [`DateRange`].
///
/// # Errors
/// [`DateRangeError::InvalidFormat`] when either bound is not strict
/// ISO-8601, [`DateRangeError::Inverted`] when `start > end`.
///
/// # Examples
/// ```
/// use events_gateway::domain::{DateRangeError, parse_date_range};
///
/// assert!(parse_date_range("2025-07-01", "2025-07-01").is_ok());
/// assert!(matches!(
///     parse_date_range("2025-07-10", "2025-07-01"),
///     Err(DateRangeError::Inverted { .. })
/// ));
/// ```
pub fn parse_date_range(start_text: &str, end_text: &str) -> Result<DateRange, DateRangeError> {
    let start = parse_bound(start_text, RangeBound::Start)?;
    let end = parse_bound(end_text, RangeBound::End)?;
    if start > end {
        return Err(DateRangeError::Inverted {
            start: start.to_rfc3339(),
            end: end.to_rfc3339(),
        });
    }
    Ok(DateRange { start, end })
}

fn parse_bound(text: &str, bound: RangeBound) -> Result<DateTime<Utc>, DateRangeError> {
    parse_iso_instant(text).ok_or_else(|| DateRangeError::InvalidFormat {
        bound,
        value: text.to_owned(),
    })
}

/// Parse one strict ISO-8601 date or date-time into a UTC instant.
///
/// Returns `None` for anything outside the accepted forms listed in the
/// module documentation.
pub fn parse_iso_instant(text: &str) -> Option<DateTime<Utc>> {
    if is_calendar_date(text) {
        return NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive));
    }
    if !has_date_time_prefix(text) {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn is_calendar_date(text: &str) -> bool {
    matches_pattern(text.as_bytes(), b"dddd-dd-dd")
}

fn has_date_time_prefix(text: &str) -> bool {
    text.as_bytes()
        .get(..19)
        .is_some_and(|prefix| matches_pattern(prefix, b"dddd-dd-ddTdd:dd:dd"))
}

/// `d` matches an ASCII digit, every other pattern byte matches itself.
fn matches_pattern(bytes: &[u8], pattern: &[u8]) -> bool {
    bytes.len() == pattern.len()
        && bytes.iter().zip(pattern).all(|(byte, expected)| match expected {
            b'd' => byte.is_ascii_digit(),
            other => byte == other,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn utc(text: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(text)
            .expect("valid fixture")
            .with_timezone(&Utc)
    }

    #[rstest]
    #[case("2025-07-01", "2025-07-10", "2025-07-01T00:00:00Z", "2025-07-10T00:00:00Z")]
    #[case("2025-07-01", "2025-07-01", "2025-07-01T00:00:00Z", "2025-07-01T00:00:00Z")]
    #[case(
        "2025-07-01T10:00:00+02:00",
        "2025-07-01T08:00:00Z",
        "2025-07-01T08:00:00Z",
        "2025-07-01T08:00:00Z"
    )]
    #[case(
        "2025-07-01T10:00:00",
        "2025-07-01T10:00:00.250",
        "2025-07-01T10:00:00Z",
        "2025-07-01T10:00:00.250Z"
    )]
    #[case(
        "2024-02-29",
        "2024-03-01T00:00:00-05:00",
        "2024-02-29T00:00:00Z",
        "2024-03-01T05:00:00Z"
    )]
    fn accepts_ordered_iso_pairs(
        #[case] start: &str,
        #[case] end: &str,
        #[case] expected_start: &str,
        #[case] expected_end: &str,
    ) {
        let range = parse_date_range(start, end).expect("range should parse");
        assert_eq!(range.start(), utc(expected_start));
        assert_eq!(range.end(), utc(expected_end));
    }

    #[rstest]
    #[case("2025-07-10", "2025-07-01")]
    #[case("2025-07-01T00:00:00.001Z", "2025-07-01")]
    #[case("2025-07-01T00:00:00Z", "2025-07-01T01:59:59+02:00")]
    fn rejects_inverted_pairs_however_close(#[case] start: &str, #[case] end: &str) {
        let error = parse_date_range(start, end).expect_err("range must be rejected");
        assert!(matches!(error, DateRangeError::Inverted { .. }), "{error:?}");
    }

    #[rstest]
    #[case::slashes("2025/07/01")]
    #[case::day_first("01-07-2025")]
    #[case::short_month("2025-7-01")]
    #[case::impossible_day("2025-02-30")]
    #[case::impossible_month("2025-13-01")]
    #[case::trailing_garbage("2025-07-01x")]
    #[case::trailing_space("2025-07-01 ")]
    #[case::space_separator("2025-07-01 10:00:00")]
    #[case::short_hour("2025-07-01T1:00:00")]
    #[case::bad_offset("2025-07-01T10:00:00+2")]
    #[case::words("yesterday")]
    #[case::empty("")]
    fn rejects_malformed_start(#[case] start: &str) {
        let error = parse_date_range(start, "2025-07-10").expect_err("must be rejected");
        assert_eq!(
            error,
            DateRangeError::InvalidFormat {
                bound: RangeBound::Start,
                value: start.to_owned(),
            }
        );
    }

    #[rstest]
    fn reports_the_malformed_end_bound() {
        let error = parse_date_range("2025-07-01", "July 10").expect_err("must be rejected");
        assert_eq!(
            error.to_string(),
            "end_date must be an ISO 8601 date or date-time, got 'July 10'"
        );
    }

    #[rstest]
    fn range_errors_become_invalid_input() {
        let error: Error = parse_date_range("2025-07-10", "2025-07-01")
            .expect_err("inverted")
            .into();
        assert_eq!(error.kind(), crate::domain::ErrorKind::InvalidInput);
        assert!(error.message().contains("must not be after"));
    }
}
