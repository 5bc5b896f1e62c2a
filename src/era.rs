//! Era Resolver: recognises `令和` era dates.
//!
//! An era date must carry all three fields. Once the era name has been seen
//! there is no fallback to generic parsing: `令和7/6` is an error, not a
//! month/day guess.

use crate::consts::{ERA_FIRST_YEAR, ERA_NAME};
use crate::normalize::NormalizedInput;
use crate::types::Year;
use crate::{parse_u8, parse_u16, split_fields, ParseError};

/// An era-qualified `(era-year, month, day)` triple, not yet validated as a
/// calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraDate {
    pub era_year: u16,
    pub month: u8,
    pub day: u8,
}

impl EraDate {
    /// Absolute Gregorian year of this era date.
    ///
    /// # Errors
    /// See [`Year::from_era_year`].
    pub fn year(&self) -> Result<Year, ParseError> {
        Year::from_era_year(self.era_year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EraResolution {
    /// No era name; continue with year completion.
    Gregorian(NormalizedInput),
    Era(EraDate),
}

fn parse_era_year(field: &str) -> Result<u16, ParseError> {
    if field == ERA_FIRST_YEAR {
        return Ok(1);
    }
    parse_u16(field)
}

/// # Errors
/// Returns `ParseError::InvalidEra` when the era name is misplaced or the
/// remainder does not split into exactly three fields, and `InvalidFormat`
/// for non-numeric fields.
pub fn resolve_era(input: NormalizedInput) -> Result<EraResolution, ParseError> {
    let Some(rest) = input.strip_prefix(ERA_NAME) else {
        if input.contains(ERA_NAME) {
            return Err(ParseError::InvalidEra(format!(
                "{ERA_NAME} must lead the date: {input}"
            )));
        }
        return Ok(EraResolution::Gregorian(input));
    };

    let fields = split_fields(rest)?;
    let [era_year, month, day] = fields.as_slice() else {
        return Err(ParseError::InvalidEra(format!(
            "expected era-year, month and day, found {} field(s) in {input}",
            fields.len()
        )));
    };

    let date = EraDate {
        era_year: parse_era_year(era_year)?,
        month: parse_u8(month)?,
        day: parse_u8(day)?,
    };
    tracing::trace!(?date, "resolved era date");
    Ok(EraResolution::Era(date))
}
