//! Date parsing for textual birthdays.
//!
//! Built-in shapes, tried in order:
//! - ISO calendar date: `2000-06-15`
//! - RFC 3339: `2000-06-15T10:00:00Z`, `2000-06-15T10:00:00+02:00` (local date)
//! - naive ISO date-time: `2000-06-15T10:00:00`, `2000-06-15 10:00`
//! - RFC 2822: `Thu, 15 Jun 2000 10:00:00 +0000` (local date)
//! - `2000/06/15`, `06/15/2000`
//! - month names: `June 15, 2000`, `Jun 15 2000`, `15 June 2000`
//!
//! Extra `chrono` format strings can be appended with [`DateParser::with_formats`].

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use tracing::{debug, trace};

use super::AgeError;

const ISO_DATE: &str = "%Y-%m-%d";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const LOOSE_DATE_FORMATS: &[&str] =
    &["%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%B %d %Y", "%d %B %Y"];

/// Parses textual dates with the built-in shapes plus optional extra formats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateParser {
    extra_formats: Vec<String>,
}

impl DateParser {
    /// Parser that also tries `formats` (chrono `strftime` syntax) after the built-ins.
    #[must_use]
    pub fn with_formats<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { extra_formats: formats.into_iter().map(Into::into).collect() }
    }

    #[must_use]
    pub fn extra_formats(&self) -> &[String] {
        &self.extra_formats
    }

    /// Parse `input` into a calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`AgeError::Unparseable`] when no format matches, including
    /// well-formed but impossible dates such as `2023-02-30`.
    pub fn parse(&self, input: &str) -> Result<NaiveDate, AgeError> {
        let s = input.trim();

        if let Some(date) = parse_builtin(s) {
            return Ok(date);
        }

        for fmt in &self.extra_formats {
            if let Some(date) = parse_with_format(s, fmt) {
                trace!(format = %fmt, "matched configured format");
                return Ok(date);
            }
        }

        debug!(input = %s, "no date format matched");
        Err(AgeError::Unparseable(input.to_string()))
    }
}

/// Parse `input` with the built-in shapes only.
///
/// # Errors
///
/// Returns [`AgeError::Unparseable`] when no built-in shape matches.
pub fn parse_date(input: &str) -> Result<NaiveDate, AgeError> {
    DateParser::default().parse(input)
}

fn parse_builtin(s: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, ISO_DATE) {
        return Some(d);
    }

    // Offset-carrying timestamps land on the local calendar date
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    if let Some(d) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(d.date());
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    LOOSE_DATE_FORMATS.iter().find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

fn parse_with_format(s: &str, fmt: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, fmt)
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(s, fmt).ok().map(|dt| dt.date()))
}
