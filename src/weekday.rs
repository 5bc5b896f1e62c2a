//! Weekday Formatter.
//!
//! The weekday is computed arithmetically (Sakamoto's method) and labels come
//! from fixed tables, so output never depends on the host's locale settings.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::CalendarDate;

/// Day of the week, numbered from Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Sunday = 0 through Saturday = 6
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Weekday of a proleptic Gregorian date.
    pub fn of(date: CalendarDate) -> Self {
        // Month offsets for Sakamoto's method, January first.
        const OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

        let month = date.month();
        // January and February count as months 13 and 14 of the previous
        // year; year 0 is fine here since the formula never goes negative.
        let y = u32::from(date.year()) - u32::from(month < 3);
        let raw = y + y / 4 - y / 100 + y / 400
            + OFFSETS[usize::from(month - 1)]
            + u32::from(date.day());
        Self::ALL[(raw % 7) as usize]
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        locale.table()[self.index()]
    }
}

const JA_LABELS: [&str; 7] = [
    "日曜日", "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日",
];
const EN_LONG_LABELS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const EN_SHORT_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Label set used for weekday names and the invalid-date marker.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    #[default]
    #[display(fmt = "ja")]
    Ja,
    #[display(fmt = "en-long")]
    EnLong,
    #[display(fmt = "en-short")]
    EnShort,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown locale: {0} (expected ja, en-long or en-short)")]
pub struct UnknownLocale(pub String);

impl Locale {
    const fn table(self) -> &'static [&'static str; 7] {
        match self {
            Self::Ja => &JA_LABELS,
            Self::EnLong => &EN_LONG_LABELS,
            Self::EnShort => &EN_SHORT_LABELS,
        }
    }

    /// Text shown in place of a weekday when the input is not a date.
    pub const fn invalid_marker(self) -> &'static str {
        match self {
            Self::Ja => "無効な日付",
            Self::EnLong => "Invalid date",
            Self::EnShort => "Invalid",
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ja" => Ok(Self::Ja),
            "en-long" => Ok(Self::EnLong),
            "en-short" => Ok(Self::EnShort),
            other => Err(UnknownLocale(other.to_owned())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = UnknownLocale;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

/// Localized weekday label for a date.
pub fn weekday_label(date: CalendarDate, locale: Locale) -> &'static str {
    Weekday::of(date).label(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_known_weekdays() {
        let cases = [
            ((2025, 6, 6), Weekday::Friday),
            ((2024, 2, 29), Weekday::Thursday),
            ((2000, 1, 1), Weekday::Saturday),
            ((1970, 1, 1), Weekday::Thursday),
            ((2019, 5, 1), Weekday::Wednesday),
            ((1900, 3, 1), Weekday::Thursday),
            ((1, 1, 1), Weekday::Monday),
        ];
        for ((y, m, d), expected) in cases {
            assert_eq!(Weekday::of(date(y, m, d)), expected, "{y}-{m}-{d}");
        }
    }

    #[test]
    fn test_labels_per_locale() {
        let friday = date(2025, 6, 6);
        assert_eq!(weekday_label(friday, Locale::Ja), "金曜日");
        assert_eq!(weekday_label(friday, Locale::EnLong), "Friday");
        assert_eq!(weekday_label(friday, Locale::EnShort), "Fri");
    }

    #[test]
    fn test_consecutive_days_cycle() {
        let start = Weekday::of(date(2025, 6, 1));
        for offset in 0..30u8 {
            let expected = Weekday::ALL[(start.index() + usize::from(offset)) % 7];
            assert_eq!(Weekday::of(date(2025, 6, 1 + offset)), expected);
        }
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("ja".parse::<Locale>().unwrap(), Locale::Ja);
        assert_eq!("en-long".parse::<Locale>().unwrap(), Locale::EnLong);
        assert_eq!(" en-short ".parse::<Locale>().unwrap(), Locale::EnShort);
        let err = "fr".parse::<Locale>().unwrap_err();
        assert_eq!(err, UnknownLocale("fr".to_owned()));
        assert!(err.to_string().contains("Unknown locale: fr"));
    }

    #[test]
    fn test_locale_serde() {
        assert_eq!(serde_json::to_string(&Locale::EnLong).unwrap(), r#""en-long""#);
        let locale: Locale = serde_json::from_str(r#""en-short""#).unwrap();
        assert_eq!(locale, Locale::EnShort);
        assert!(serde_json::from_str::<Locale>(r#""de""#).is_err());
    }

    #[test]
    fn test_invalid_marker() {
        assert_eq!(Locale::default().invalid_marker(), "無効な日付");
        assert_eq!(Locale::EnLong.invalid_marker(), "Invalid date");
    }
}
