//! Resolve loosely written dates to a calendar date and a weekday label.
//!
//! Accepted input includes `2025/6/6`, `2025-06-06`, `2025.6.6`, `20250606`,
//! `2025年6月6日`, `令和7年6月6日`, `6月6日` (year supplied by the caller)
//! and full-width variants of all of these. The pipeline is
//! [`normalize`] → [`resolve_era`] → [`complete_year`] → [`build_date`] →
//! [`weekday_label`], wrapped for hosts by [`parse_and_format`].

mod complete;
mod consts;
mod era;
mod normalize;
mod pipeline;
mod prelude;
mod types;
mod weekday;

pub use complete::complete_year;
pub use consts::*;
pub use era::{resolve_era, EraDate, EraResolution};
pub use normalize::{has_month_marker, normalize, NormalizedInput};
pub use pipeline::{parse_and_format, parse_date, FormatOptions, Outcome};
pub use types::{days_in_month, is_leap_year, Day, Month, Year};
pub use weekday::{weekday_label, Locale, UnknownLocale, Weekday};

use crate::prelude::*;
use std::str::FromStr;

/// A validated proleptic Gregorian date.
///
/// Construction always goes through `Year`/`Month`/`Day` validation, so an
/// impossible triple such as 2025-02-29 can never be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}/{month}/{day}")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid era date: {_0}")]
    InvalidEra(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Input to [`build_date`]: either normalized text or an era triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSource {
    Text(NormalizedInput),
    Era(EraDate),
}

impl From<EraResolution> for DateSource {
    fn from(resolution: EraResolution) -> Self {
        match resolution {
            EraResolution::Gregorian(text) => Self::Text(text),
            EraResolution::Era(date) => Self::Era(date),
        }
    }
}

impl CalendarDate {
    /// Creates a date from raw numbers, validating month and day ranges.
    ///
    /// # Errors
    /// Returns the first of `InvalidYear`, `InvalidMonth` or `InvalidDay` that
    /// applies.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Self::from_year(Year::new(year)?, month, day)
    }

    fn from_year(year: Year, month: u8, day: u8) -> Result<Self, ParseError> {
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Converts to (year, month, day)
    pub const fn to_ymd(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::of(*self)
    }

    /// `YYYY/M/D` style fields; the year comes from the field itself.
    fn from_fields(year: &str, month: &str, day: &str) -> Result<Self, ParseError> {
        Self::from_ymd(parse_u16(year)?, parse_u8(month)?, parse_u8(day)?)
    }

    /// Positional `YYYYMMDD`.
    fn from_compact(s: &str) -> Result<Self, ParseError> {
        if s.len() != COMPACT_LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(format!(
                "expected {COMPACT_LEN} digits (YYYYMMDD): {s}"
            )));
        }
        Self::from_fields(&s[..4], &s[4..6], &s[6..])
    }

    /// Builds a date from normalized, era-free text.
    ///
    /// Three fields are year/month/day and a single field must be compact
    /// `YYYYMMDD`. Two fields are month/day in `current_year`; without a
    /// current year they are rejected.
    fn from_text(text: &str, current_year: Option<u16>) -> Result<Self, ParseError> {
        let fields = split_fields(text)?;
        match (fields.as_slice(), current_year) {
            ([year, month, day], _) => Self::from_fields(year, month, day),
            ([compact], _) => Self::from_compact(compact),
            ([month, day], Some(year)) => {
                Self::from_year(Year::new(year)?, parse_u8(month)?, parse_u8(day)?)
            }
            ([_, _], None) => Err(ParseError::InvalidFormat(format!("missing year: {text}"))),
            _ => Err(ParseError::InvalidFormat(format!(
                "Too many separators: expected 0-2, found {}",
                fields.len() - 1
            ))),
        }
    }
}

/// Date Builder: validates the resolved fields into a [`CalendarDate`].
///
/// `current_year` is only consulted for two-field text such as `6/6`, which
/// is read as month/day.
///
/// # Errors
/// Any non-numeric or empty field, wrong field count, mixed delimiters or
/// out-of-range component.
pub fn build_date(source: DateSource, current_year: u16) -> Result<CalendarDate, ParseError> {
    match source {
        DateSource::Era(era) => CalendarDate::from_year(era.year()?, era.month, era.day),
        DateSource::Text(text) => CalendarDate::from_text(&text, Some(current_year)),
    }
}

// --- field helpers shared with the era resolver ---

fn ascii_digits(s: &str) -> Result<&str, ParseError> {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        Ok(s)
    } else {
        Err(ParseError::InvalidFormat(format!("not a number: {s:?}")))
    }
}

/// Parses a year-sized field. Signs are rejected even though `str::parse`
/// would accept a leading `+`.
pub(crate) fn parse_u16(s: &str) -> Result<u16, ParseError> {
    ascii_digits(s)?
        .parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

pub(crate) fn parse_u8(s: &str) -> Result<u8, ParseError> {
    ascii_digits(s)?
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Splits on whichever one of `FIELD_SEPARATORS` the text uses.
pub(crate) fn split_fields(s: &str) -> Result<Vec<&str>, ParseError> {
    let mut present = FIELD_SEPARATORS.iter().copied().filter(|sep| s.contains(*sep));
    match (present.next(), present.next()) {
        (None, _) => Ok(vec![s]),
        (Some(sep), None) => Ok(s.split(sep).collect()),
        (Some(first), Some(second)) => Err(ParseError::InvalidFormat(format!(
            "Mixed delimiters ({first} and {second}): {s}"
        ))),
    }
}

/// Accepts any fully specified form: three fields, compact `YYYYMMDD` or an
/// era date. Year-less input is rejected since there is no current year.
impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }
        match resolve_era(normalize(s))? {
            EraResolution::Era(era) => Self::from_year(era.year()?, era.month, era.day),
            EraResolution::Gregorian(text) => Self::from_text(&text, None),
        }
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = ParseError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_ymd(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
