//! Calendar helpers on `time::Date` for `YYYY-MM-DD` strings.
//!
//! Month stepping follows JavaScript `Date` overflow: Jan 31 + 1 month is
//! Mar 3 (Mar 2 in a leap year), which is what the repayment schedule
//! displays.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, Month};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const US_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

/// Parse the date part of an ISO-8601 string. Impossible dates are `None`.
pub fn parse_iso_date(iso: &str) -> Option<Date> {
    Date::parse(iso.get(..10)?, ISO_DATE).ok()
}

pub fn format_iso_date(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_default()
}

/// `M/D/YYYY`, no zero padding.
pub fn format_us(date: Date) -> String {
    date.format(US_DATE).unwrap_or_default()
}

pub fn days_in_month(year: i32, month: Month) -> u8 {
    time::util::days_in_year_month(year, month)
}

/// Step forward `months`, rolling surplus days into the following month.
/// `None` only when the result leaves the supported year range.
pub fn add_months(date: Date, months: u32) -> Option<Date> {
    let zero_based = u32::from(u8::from(date.month())) - 1 + months;
    let year = date.year().checked_add(i32::try_from(zero_based / 12).ok()?)?;
    let month = Month::try_from(u8::try_from(zero_based % 12 + 1).ok()?).ok()?;
    let day = date.day();
    if day <= days_in_month(year, month) {
        return Date::from_calendar_date(year, month, day).ok();
    }
    Date::from_calendar_date(year, month, 1)
        .ok()?
        .checked_add(Duration::days(i64::from(day) - 1))
}
