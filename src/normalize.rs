//! Normalizer: the first pipeline stage.
//!
//! Turns untrusted cell text into a half-width, whitespace-free string in
//! which the year and month markers have become [`CANONICAL_SEPARATOR`] and
//! the day marker is gone. This stage never fails; later stages reject
//! whatever it cannot make sense of.

use crate::consts::{
    CANONICAL_SEPARATOR, DAY_MARKER, FULLWIDTH_END, FULLWIDTH_OFFSET, FULLWIDTH_START,
    MONTH_MARKER, YEAR_MARKER,
};
use crate::prelude::*;

/// Output of [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, Into)]
pub struct NormalizedInput(String);

impl NormalizedInput {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wraps a string produced by a later stage (era stripping, year
    /// completion) that is already in normalized form.
    pub(crate) const fn from_normalized(text: String) -> Self {
        Self(text)
    }
}

/// Maps a full-width ASCII variant (U+FF01..=U+FF5E) to its half-width form.
fn to_half_width(c: char) -> char {
    let code = c as u32;
    if (FULLWIDTH_START..=FULLWIDTH_END).contains(&code) {
        char::from_u32(code - FULLWIDTH_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

pub fn normalize(raw: &str) -> NormalizedInput {
    let text: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(to_half_width)
        .filter_map(|c| match c {
            YEAR_MARKER | MONTH_MARKER => Some(CANONICAL_SEPARATOR),
            DAY_MARKER => None,
            other => Some(other),
        })
        .collect();

    tracing::trace!(raw, normalized = %text, "normalized input");
    NormalizedInput(text)
}

/// Whether the raw input spelled out a month with the month marker (月).
///
/// Year completion only applies to marker forms such as `6月6日`; a bare
/// `6/6` is left to the date builder.
pub fn has_month_marker(raw: &str) -> bool {
    raw.contains(MONTH_MARKER)
}
