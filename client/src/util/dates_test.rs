use time::Month;

use super::*;

fn date(iso: &str) -> Date {
    parse_iso_date(iso).unwrap()
}

fn stepped(iso: &str, months: u32) -> String {
    format_iso_date(add_months(date(iso), months).unwrap())
}

#[test]
fn parse_rejects_impossible_dates() {
    assert_eq!(parse_iso_date("2024-02-30"), None);
    assert_eq!(parse_iso_date("2023-02-29"), None);
    assert_eq!(parse_iso_date("2024-13-01"), None);
    assert_eq!(parse_iso_date("soon"), None);
    assert_eq!(date("2024-02-29").day(), 29);
}

#[test]
fn parse_ignores_time_suffix() {
    assert_eq!(date("2024-11-18T10:30:00Z"), date("2024-11-18"));
}

#[test]
fn days_in_month_tracks_leap_years() {
    assert_eq!(days_in_month(2024, Month::February), 29);
    assert_eq!(days_in_month(2025, Month::February), 28);
    assert_eq!(days_in_month(2025, Month::April), 30);
}

#[test]
fn add_months_crosses_year_boundary() {
    assert_eq!(stepped("2024-12-20", 1), "2025-01-20");
    assert_eq!(stepped("2024-12-20", 11), "2025-11-20");
    assert_eq!(stepped("2024-12-20", 0), "2024-12-20");
}

#[test]
fn add_months_rolls_over_short_months() {
    assert_eq!(stepped("2025-01-31", 1), "2025-03-03");
    assert_eq!(stepped("2024-01-31", 1), "2024-03-02");
    assert_eq!(stepped("2025-03-31", 1), "2025-05-01");
}

#[test]
fn us_format_drops_padding() {
    assert_eq!(format_us(date("2024-01-05")), "1/5/2024");
    assert_eq!(format_us(date("2024-11-18")), "11/18/2024");
}
