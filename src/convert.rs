//! Single-value conversions with an explicit runtime offset.
//!
//! These are the building blocks for columnar integrations, where the offset
//! is a per-call argument rather than part of a type. Each function shifts by
//! the offset exactly once: subtracted on the way into ISO weeks, added on the
//! way out.

use chrono::{NaiveDateTime, TimeDelta};

use crate::base::WeekBased;
use crate::error::Error;
use crate::isoweek::IsoWeek;
use crate::isoweekdate::IsoWeekDate;
use crate::patterns::Grammar;
use crate::prelude::*;
use crate::validation;

/// Offset as a number of days or as an arbitrary duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub enum Offset {
    Days(i64),
    Duration(TimeDelta),
}

impl Default for Offset {
    fn default() -> Self {
        Self::Days(0)
    }
}

impl Offset {
    /// # Errors
    /// Returns `Error::OutOfRange` if a day count does not fit a `TimeDelta`.
    pub fn to_delta(self) -> Result<TimeDelta, Error> {
        match self {
            Self::Days(days) => TimeDelta::try_days(days).ok_or(Error::OutOfRange {
                name:  "offset",
                value: days,
                rule:  "representable as a duration",
            }),
            Self::Duration(delta) => Ok(delta),
        }
    }
}

fn shift_back(datetime: NaiveDateTime, offset: Offset) -> Result<NaiveDateTime, Error> {
    let delta = offset.to_delta()?;
    if !delta.is_zero() {
        tracing::trace!(%datetime, %delta, "shifting datetime into iso week");
    }
    datetime
        .checked_sub_signed(delta)
        .ok_or_else(|| Error::DateOutOfRange(format!("{datetime} shifted by -{delta}")))
}

fn shift_forward(datetime: NaiveDateTime, offset: Offset) -> Result<NaiveDateTime, Error> {
    let delta = offset.to_delta()?;
    if !delta.is_zero() {
        tracing::trace!(%datetime, %delta, "shifting datetime out of iso week");
    }
    datetime
        .checked_add_signed(delta)
        .ok_or_else(|| Error::DateOutOfRange(format!("{datetime} shifted by {delta}")))
}

/// `YYYY-Www` of `datetime` after subtracting `offset`.
///
/// # Errors
/// Returns `Error::OutOfRange` for an unrepresentable offset or
/// `Error::DateOutOfRange` if the shifted datetime leaves ISO years 0001-9999.
pub fn datetime_to_isoweek(datetime: NaiveDateTime, offset: impl Into<Offset>) -> Result<String, Error> {
    let shifted = shift_back(datetime, offset.into())?;
    Ok(IsoWeek::<0>::from_datetime(shifted)?.to_string())
}

/// `YYYY-Www-D` of `datetime` after subtracting `offset`.
///
/// # Errors
/// Same as [`datetime_to_isoweek`].
pub fn datetime_to_isoweekdate(datetime: NaiveDateTime, offset: impl Into<Offset>) -> Result<String, Error> {
    let shifted = shift_back(datetime, offset.into())?;
    Ok(IsoWeekDate::<0>::from_datetime(shifted)?.to_string())
}

/// Midnight of `weekday` in the week `value`, plus `offset`.
///
/// # Errors
/// Returns `Error::Parse` if `value` is not a valid `YYYY-Www` string,
/// `Error::OutOfRange` for a weekday outside 1..=7, or
/// `Error::DateOutOfRange` if the result is not representable.
pub fn isoweek_to_datetime(value: &str, offset: impl Into<Offset>, weekday: u8) -> Result<NaiveDateTime, Error> {
    let start = IsoWeek::<0>::parse(value)?.to_datetime_at(weekday)?;
    shift_forward(start, offset.into())
}

/// Midnight of the week date `value`, plus `offset`.
///
/// # Errors
/// Returns `Error::Parse` if `value` is not a valid `YYYY-Www-D` string, or
/// `Error::DateOutOfRange` if the result is not representable.
pub fn isoweekdate_to_datetime(value: &str, offset: impl Into<Offset>) -> Result<NaiveDateTime, Error> {
    let start = IsoWeekDate::<0>::parse(value)?.to_datetime()?;
    shift_forward(start, offset.into())
}

/// Whether `value` has the `YYYY-Www` shape. The week count is not checked.
pub fn is_isoweek(value: &str) -> bool {
    validation::is_match(value, Grammar::Week)
}

/// Whether `value` has the `YYYY-Www-D` shape. The week count is not checked.
pub fn is_isoweekdate(value: &str) -> bool {
    validation::is_match(value, Grammar::WeekDate)
}
