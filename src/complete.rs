//! Year Completion: supplies the year for `M月D日` forms.

use crate::consts::{CANONICAL_SEPARATOR, FIELD_SEPARATORS};
use crate::normalize::NormalizedInput;

/// Prepends `current_year` when the input named a month with `月` but
/// carried no year field.
///
/// "No year field" means fewer than two delimiters after normalization:
/// `6月6日` normalizes to `6/6` and becomes `2025/6/6`, while `2025年6月6日`
/// already has its year. Inputs without the month marker are never touched,
/// so `6/6` and `20250606` reach the date builder unchanged.
pub fn complete_year(
    input: NormalizedInput,
    current_year: u16,
    had_month_marker: bool,
) -> NormalizedInput {
    let delimiters = input
        .chars()
        .filter(|c| FIELD_SEPARATORS.contains(c))
        .count();
    if !had_month_marker || delimiters >= 2 {
        return input;
    }

    let completed = format!("{current_year}{CANONICAL_SEPARATOR}{input}");
    tracing::trace!(%completed, "completed missing year");
    NormalizedInput::from_normalized(completed)
}
