use hizuke::{
    build_date, days_in_month, normalize, parse_and_format, parse_date, CalendarDate, DateSource,
    Locale, Outcome, Weekday,
};
use proptest::prelude::*;

/// Days since 1970-01-01 (Howard Hinnant's `days_from_civil`).
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = if month > 2 { month - 3 } else { month + 9 };
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn reference_weekday(year: u16, month: u8, day: u8) -> Weekday {
    let days = days_from_civil(i64::from(year), i64::from(month), i64::from(day));
    // 1970-01-01 was a Thursday (index 4).
    Weekday::ALL[(days + 4).rem_euclid(7) as usize]
}

fn valid_ymd() -> impl Strategy<Value = (u16, u8, u8)> {
    (1u16..=9999, 1u8..=12).prop_flat_map(|(year, month)| {
        (Just(year), Just(month), 1..=days_in_month(year, month))
    })
}

fn to_full_width(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '0'..='9' => char::from_u32(c as u32 + 0xFEE0).unwrap_or(c),
            other => other,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        rng_seed: proptest::test_runner::RngSeed::Fixed(0),
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn valid_triples_build_and_match_reference_weekday((y, m, d) in valid_ymd()) {
        let text = format!("{y}/{m}/{d}");
        let date = build_date(DateSource::Text(normalize(&text)), 2025).unwrap();
        prop_assert_eq!(date.to_ymd(), (y, m, d));
        prop_assert_eq!(date.weekday(), reference_weekday(y, m, d));
    }

    #[test]
    fn display_round_trips((y, m, d) in valid_ymd()) {
        let date = CalendarDate::from_ymd(y, m, d).unwrap();
        let shown = date.to_string();
        prop_assert_eq!(shown.parse::<CalendarDate>().unwrap(), date);
        prop_assert_eq!(parse_date(&shown, 1).unwrap(), date);
    }

    #[test]
    fn out_of_range_days_are_invalid(
        (y, m) in (1u16..=9999, 1u8..=12),
        extra in 1u8..=5,
    ) {
        let day = days_in_month(y, m) + extra;
        let text = format!("{y}/{m}/{day}");
        prop_assert_eq!(parse_and_format(&text, 2025, Locale::Ja), Outcome::Invalid);
    }

    #[test]
    fn normalize_is_idempotent(raw in any::<String>()) {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(once.as_str()), once);
    }

    #[test]
    fn digit_free_text_is_invalid(raw in "[a-zA-Z!?#@_]{1,16}") {
        prop_assert_eq!(parse_and_format(&raw, 2025, Locale::Ja), Outcome::Invalid);
    }

    #[test]
    fn never_panics_on_arbitrary_input(raw in any::<String>(), year in any::<u16>()) {
        let _ = parse_and_format(&raw, year, Locale::EnLong);
    }

    #[test]
    fn era_years_offset_by_2018(era_year in 1u16..=100, (m, d) in (1u8..=12, 1u8..=28)) {
        let text = format!("令和{era_year}年{m}月{d}日");
        let date = parse_date(&text, 1).unwrap();
        prop_assert_eq!(date.to_ymd(), (era_year + 2018, m, d));
    }

    #[test]
    fn full_width_matches_half_width((y, m, d) in valid_ymd()) {
        let half = format!("{y}年{m}月{d}日");
        let full = to_full_width(&half);
        prop_assert_eq!(parse_date(&full, 2025), parse_date(&half, 2025));
    }
}
