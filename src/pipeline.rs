//! Host-facing entry points.
//!
//! [`parse_date`] keeps the detailed [`ParseError`]; [`parse_and_format`]
//! collapses everything into the three-way [`Outcome`] a host displays.
//! Neither reads the clock: the caller supplies the current year.

use serde::{Deserialize, Serialize};

use crate::complete::complete_year;
use crate::era::{resolve_era, EraResolution};
use crate::normalize::{has_month_marker, normalize};
use crate::weekday::{weekday_label, Locale};
use crate::{build_date, CalendarDate, DateSource, ParseError};

/// Result handed back to the host.
///
/// Serializes as `{"kind":"empty"}`, `{"kind":"ok","weekday":"金曜日"}` or
/// `{"kind":"invalid"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Outcome {
    /// Blank input; the host should clear its output.
    Empty,
    Ok { weekday: &'static str },
    Invalid,
}

impl Outcome {
    /// Text a host writes next to the input cell.
    pub const fn display_text(self, locale: Locale) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Ok { weekday } => weekday,
            Self::Invalid => locale.invalid_marker(),
        }
    }
}

/// Host-supplied parameters for a formatting call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    pub current_year: u16,
    #[serde(default)]
    pub locale: Locale,
}

impl FormatOptions {
    pub const fn new(current_year: u16) -> Self {
        Self {
            current_year,
            locale: Locale::Ja,
        }
    }

    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn format(&self, raw: &str) -> Outcome {
        parse_and_format(raw, self.current_year, self.locale)
    }
}

/// Runs the full pipeline on one raw input.
///
/// # Errors
/// `ParseError::EmptyInput` for blank input, otherwise whichever stage
/// rejected it first.
pub fn parse_date(raw: &str, current_year: u16) -> Result<CalendarDate, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let source = match resolve_era(normalize(raw))? {
        EraResolution::Era(era) => DateSource::Era(era),
        EraResolution::Gregorian(text) => {
            DateSource::Text(complete_year(text, current_year, has_month_marker(raw)))
        }
    };
    build_date(source, current_year)
}

pub fn parse_and_format(raw: &str, current_year: u16, locale: Locale) -> Outcome {
    match parse_date(raw, current_year) {
        Ok(date) => {
            let weekday = weekday_label(date, locale);
            tracing::trace!(raw, %date, weekday, "resolved weekday");
            Outcome::Ok { weekday }
        }
        Err(ParseError::EmptyInput) => Outcome::Empty,
        Err(err) => {
            tracing::debug!(raw, error = %err, "rejected date input");
            Outcome::Invalid
        }
    }
}
