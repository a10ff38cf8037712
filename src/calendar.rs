//! ISO week calendar arithmetic.
//!
//! The week count of a year is closed form. Mapping ISO components to and
//! from Gregorian dates goes through chrono. Arithmetic works on day numbers
//! counted from the proleptic Gregorian `0001-01-01` (day 1), the numbering of
//! [`chrono::Datelike::num_days_from_ce`].

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

use crate::consts::{LONG_YEAR_WEEKS, SHORT_YEAR_WEEKS};
use crate::error::Error;
use crate::types::{Day, Week, Year};
use crate::validation::Components;

/// Day of the week of December 31st of `year`, where 0 is Sunday.
pub const fn p_of_year(year: i64) -> i64 {
    (year + year.div_euclid(4) - year.div_euclid(100) + year.div_euclid(400)).rem_euclid(7)
}

/// Number of ISO weeks in `year`, either 52 or 53.
///
/// A year is "long" when it ends on a Thursday, or when the previous one
/// ends on a Wednesday (the year then starts on a Thursday in a leap year).
pub const fn weeks_of_year(year: i64) -> u8 {
    if p_of_year(year) == 4 || p_of_year(year - 1) == 3 {
        LONG_YEAR_WEEKS
    } else {
        SHORT_YEAR_WEEKS
    }
}

/// Day number of a Gregorian date.
pub fn date_to_days(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

/// Gregorian date of a day number.
///
/// # Errors
/// Returns `Error::DateOutOfRange` if chrono cannot represent the day.
pub fn days_to_date(days: i64) -> Result<NaiveDate, Error> {
    i32::try_from(days)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or_else(|| Error::DateOutOfRange(format!("day number {days} is not a representable date")))
}

/// ISO `(year, week, weekday)` of `date` after shifting it back by `offset_days`.
///
/// # Errors
/// Returns `Error::DateOutOfRange` if the shifted date falls outside ISO
/// years 0001-9999.
pub fn gregorian_to_isoweek(date: NaiveDate, offset_days: i64) -> Result<(Year, Week, Day), Error> {
    let shifted = TimeDelta::try_days(offset_days)
        .and_then(|delta| date.checked_sub_signed(delta))
        .ok_or_else(|| Error::DateOutOfRange(format!("{date} shifted by {offset_days} days")))?;
    date_to_components(shifted)
}

/// Gregorian date of an ISO triple, shifted forward by `offset_days`.
///
/// # Errors
/// Returns `Error::Parse` if the components do not form a valid ISO week
/// date, or `Error::DateOutOfRange` if the shifted date is not representable.
pub fn isoweek_to_gregorian(year: u16, week: u8, weekday: u8, offset_days: i64) -> Result<NaiveDate, Error> {
    let components = Components::from_values(year, week, weekday)?;
    shifted_date(
        components_to_days(components.year, components.week, components.day),
        offset_days,
    )
}

/// Day number of typed components.
#[allow(clippy::expect_used)]
pub(crate) fn components_to_days(year: Year, week: Week, weekday: Day) -> i64 {
    let monday = NaiveDate::from_isoywd_opt(i32::from(year.get()), u32::from(week.get()), Weekday::Mon)
        .expect("validated iso weeks of years 0001-9999 are representable");
    date_to_days(monday) + i64::from(weekday.get() - 1)
}

/// Typed components of a day number, rejecting ISO years outside 0001-9999.
pub(crate) fn days_to_components(days: i64) -> Result<(Year, Week, Day), Error> {
    date_to_components(days_to_date(days)?)
}

fn date_to_components(date: NaiveDate) -> Result<(Year, Week, Day), Error> {
    let iso = date.iso_week();
    let year = u16::try_from(iso.year())
        .ok()
        .and_then(|y| Year::new(y).ok())
        .ok_or_else(|| Error::DateOutOfRange(format!("{date} falls in ISO year {}", iso.year())))?;
    // chrono yields weeks 1..=53 and weekdays 1..=7
    let week = u8::try_from(iso.week()).unwrap_or_default();
    let weekday = u8::try_from(date.weekday().number_from_monday()).unwrap_or_default();
    Ok((year, Week::new(week, year)?, Day::new(weekday)?))
}

/// Gregorian date of `days` shifted forward by `offset_days`.
pub(crate) fn shifted_date(days: i64, offset_days: i64) -> Result<NaiveDate, Error> {
    let shifted = days
        .checked_add(offset_days)
        .ok_or_else(|| Error::DateOutOfRange(format!("day number {days} shifted by {offset_days} days")))?;
    days_to_date(shifted)
}
