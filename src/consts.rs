/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Canonical field delimiter; every marker is rewritten to this
pub const CANONICAL_SEPARATOR: char = '/';
/// Field delimiters accepted as equivalent to [`CANONICAL_SEPARATOR`]
pub const FIELD_SEPARATORS: [char; 3] = ['/', '-', '.'];

/// Year marker (年), rewritten to [`CANONICAL_SEPARATOR`]
pub const YEAR_MARKER: char = '年';
/// Month marker (月), rewritten to [`CANONICAL_SEPARATOR`]
pub const MONTH_MARKER: char = '月';
/// Day marker (日), dropped during normalization
pub const DAY_MARKER: char = '日';

/// Name of the supported era (Reiwa)
pub const ERA_NAME: &str = "令和";
/// Era-year field meaning "first year of the era" (元年)
pub const ERA_FIRST_YEAR: &str = "元";
/// Absolute year = era-year + `ERA_OFFSET` (Reiwa 1 = 2019)
pub const ERA_OFFSET: u16 = 2018;

/// Length of the compact `YYYYMMDD` form
pub const COMPACT_LEN: usize = 8;

/// First code point of the full-width ASCII block (！)
pub(crate) const FULLWIDTH_START: u32 = 0xFF01;
/// Last code point of the full-width ASCII block (～)
pub(crate) const FULLWIDTH_END: u32 = 0xFF5E;
/// Distance between a full-width character and its ASCII counterpart
pub(crate) const FULLWIDTH_OFFSET: u32 = 0xFEE0;
