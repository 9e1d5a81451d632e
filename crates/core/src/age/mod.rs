//! Age in completed years from a birth date.
//!
//! The reference date ("today") is always an explicit input. Use
//! [`compute_age_today`] when the local system date is what you want.
//!
//! ```
//! use agecalc_core::{DateInput, compute_age};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
//! let birthday = DateInput::from("2000-06-15");
//! assert_eq!(compute_age(Some(&birthday), today), Ok(Some(23)));
//! assert_eq!(compute_age(None, today), Ok(None));
//! ```

pub mod parse;

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use parse::{DateParser, parse_date};

/// Error type for age computation.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AgeError {
    #[error("unparseable date: {0:?}")]
    Unparseable(String),
}

/// A birthday as supplied by a caller: a native date or something to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    /// Calendar date
    Date(NaiveDate),
    /// Date and wall-clock time; only the date part is used
    DateTime(NaiveDateTime),
    /// Textual date, parsed on use
    Text(String),
}

impl DateInput {
    /// True when the input carries no date at all (empty or blank text).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, DateInput::Text(s) if s.trim().is_empty())
    }

    /// Resolve the input to a calendar date using `parser` for text.
    ///
    /// Blank text resolves to `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`AgeError::Unparseable`] when text input matches none of the
    /// parser's formats.
    pub fn resolve_with(&self, parser: &DateParser) -> Result<Option<NaiveDate>, AgeError> {
        match self {
            DateInput::Date(d) => Ok(Some(*d)),
            DateInput::DateTime(dt) => Ok(Some(dt.date())),
            DateInput::Text(_) if self.is_blank() => Ok(None),
            DateInput::Text(s) => parser.parse(s).map(Some),
        }
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            DateInput::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            DateInput::Text(s) => f.write_str(s),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> Self {
        DateInput::Date(d)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::DateTime(dt)
    }
}

/// Converted to the local wall clock, the same way offset-carrying text is.
impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(dt: DateTime<Tz>) -> Self {
        DateInput::DateTime(dt.with_timezone(&Local).naive_local())
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

/// Completed years from `birth` to `today`.
///
/// Negative when `birth` lies after `today`. A February 29 birthday reaches
/// its anniversary on March 1 in non-leap years.
#[must_use]
pub fn years_between(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();

    let month_diff = today.month().cmp(&birth.month());
    if month_diff == Ordering::Less
        || (month_diff == Ordering::Equal && today.day() < birth.day())
    {
        age -= 1;
    }

    age
}

/// Age in completed years of someone born on `birthday`, as of `today`.
///
/// Returns `Ok(None)` when no birthday is supplied or the text is blank.
///
/// # Errors
///
/// Returns [`AgeError::Unparseable`] when a textual birthday cannot be parsed.
pub fn compute_age(
    birthday: Option<&DateInput>,
    today: NaiveDate,
) -> Result<Option<i32>, AgeError> {
    compute_age_with(&DateParser::default(), birthday, today)
}

/// Like [`compute_age`], parsing text with a caller-supplied [`DateParser`].
///
/// # Errors
///
/// Returns [`AgeError::Unparseable`] when a textual birthday cannot be parsed.
pub fn compute_age_with(
    parser: &DateParser,
    birthday: Option<&DateInput>,
    today: NaiveDate,
) -> Result<Option<i32>, AgeError> {
    let Some(input) = birthday else {
        return Ok(None);
    };

    let Some(birth) = input.resolve_with(parser)? else {
        debug!("blank birthday, age unknown");
        return Ok(None);
    };

    let age = years_between(birth, today);
    debug!(%birth, %today, age, "computed age");
    Ok(Some(age))
}

/// [`compute_age`] against the local system date.
///
/// # Errors
///
/// Returns [`AgeError::Unparseable`] when a textual birthday cannot be parsed.
pub fn compute_age_today(birthday: Option<&DateInput>) -> Result<Option<i32>, AgeError> {
    compute_age(birthday, Local::now().date_naive())
}
