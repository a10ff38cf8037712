use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{NaiveDate, TimeDelta};

use crate::base::sealed::Sealed;
use crate::base::{Castable, Operand, WeekBased};
use crate::error::{Error, ParseError};
use crate::isoweek::IsoWeek;
use crate::patterns::Grammar;
use crate::range::{Inclusive, WeekRange};
use crate::types::{Day, Week, Year};
use crate::validation::Components;

/// An ISO week date in the `YYYY-Www-D` format.
///
/// Arithmetic works in days. `OFFSET` behaves as for [`IsoWeek`].
#[derive(Clone, Copy)]
pub struct IsoWeekDate<const OFFSET: i64 = 0> {
    year: Year,
    week: Week,
    day:  Day,
}

impl<const OFFSET: i64> WeekBased for IsoWeekDate<OFFSET> {
    const GRAMMAR: Grammar = Grammar::WeekDate;
    const NAME: &'static str = "IsoWeekDate";
    const OFFSET_DAYS: i64 = OFFSET;
    const UNIT_DAYS: i64 = 1;
}

impl<const OFFSET: i64> Sealed for IsoWeekDate<OFFSET> {
    fn from_components(components: Components) -> Self {
        Self {
            year: components.year,
            week: components.week,
            day:  components.day,
        }
    }

    fn components(&self) -> Components {
        Components::new(self.year, self.week, self.day)
    }
}

impl<const OFFSET: i64> IsoWeekDate<OFFSET> {
    /// Builds a value from numbers, validated like a parsed string.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` for numbers the grammar cannot
    /// spell and `ParseError::InvalidWeek` for week 53 of a short year.
    pub fn from_values(year: u16, week: u8, weekday: u8) -> Result<Self, ParseError> {
        Self::parse(&Grammar::WeekDate.render(year, week, weekday))
    }

    pub const fn to_values(&self) -> (u16, u8, u8) {
        (self.year.get(), self.week.get(), self.day.get())
    }

    /// Returns a copy with the given components replaced.
    ///
    /// # Errors
    /// Same as [`IsoWeekDate::from_values`].
    pub fn replace(&self, year: Option<u16>, week: Option<u8>, weekday: Option<u8>) -> Result<Self, ParseError> {
        Self::from_values(
            year.unwrap_or(self.year.get()),
            week.unwrap_or(self.week.get()),
            weekday.unwrap_or(self.day.get()),
        )
    }

    /// ISO weekday, Monday = 1 .. Sunday = 7
    pub const fn weekday(&self) -> u8 {
        self.day.get()
    }

    pub const fn day(&self) -> u8 {
        self.weekday()
    }

    /// The week this date belongs to, keeping the offset.
    pub fn isoweek(&self) -> IsoWeek<OFFSET> {
        IsoWeek::from_components(self.components())
    }

    /// Gregorian date, offset applied.
    ///
    /// # Errors
    /// Returns `Error::DateOutOfRange` if the offset leaves chrono's range.
    pub fn to_date(&self) -> Result<NaiveDate, Error> {
        self.start_date()
    }

    /// The `n` following days, every `step`-th one.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` if `n < 1` or `step < 1`, or
    /// `Error::DateOutOfRange` if the last day is past 9999.
    pub fn daysout(&self, n: i64, step: i64) -> Result<WeekRange<Self>, Error> {
        if n < 1 {
            return Err(Error::OutOfRange {
                name:  "n_days",
                value: n,
                rule:  "strictly positive",
            });
        }
        WeekRange::new(self.checked_add(1)?, self.checked_add(n)?, step, Inclusive::Both)
    }
}

impl<const OFFSET: i64> fmt::Display for IsoWeekDate<OFFSET> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{}-{}", self.year, self.week, self.day)
    }
}

impl<const OFFSET: i64> fmt::Debug for IsoWeekDate<OFFSET> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IsoWeekDate({self}) with offset {OFFSET} days")
    }
}

impl<const OFFSET: i64> FromStr for IsoWeekDate<OFFSET> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<const A: i64, const B: i64> PartialEq<IsoWeekDate<B>> for IsoWeekDate<A> {
    fn eq(&self, other: &IsoWeekDate<B>) -> bool {
        A == B && self.components() == other.components()
    }
}

impl<const OFFSET: i64> Eq for IsoWeekDate<OFFSET> {}

impl<const A: i64, const B: i64> PartialEq<IsoWeek<B>> for IsoWeekDate<A> {
    fn eq(&self, _other: &IsoWeek<B>) -> bool {
        false
    }
}

/// Same offset only, see [`IsoWeek`]'s `PartialOrd`.
///
/// ```compile_fail
/// use iso_week_date::{IsoWeekDate, WeekBased};
///
/// let a = IsoWeekDate::<0>::parse("2023-W01-1").unwrap();
/// let b = IsoWeekDate::<2>::parse("2023-W01-1").unwrap();
/// let _ = a > b;
/// ```
impl<const OFFSET: i64> PartialOrd for IsoWeekDate<OFFSET> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const OFFSET: i64> Ord for IsoWeekDate<OFFSET> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components().cmp(&other.components())
    }
}

impl<const OFFSET: i64> Hash for IsoWeekDate<OFFSET> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Self::NAME.hash(state);
        OFFSET.hash(state);
        self.components().hash(state);
    }
}

impl<const OFFSET: i64> Add<i64> for IsoWeekDate<OFFSET> {
    type Output = Result<Self, Error>;

    fn add(self, days: i64) -> Self::Output {
        self.checked_add(days)
    }
}

impl<const OFFSET: i64> Sub<i64> for IsoWeekDate<OFFSET> {
    type Output = Result<Self, Error>;

    fn sub(self, days: i64) -> Self::Output {
        self.checked_sub(days)
    }
}

impl<const OFFSET: i64> Add<TimeDelta> for IsoWeekDate<OFFSET> {
    type Output = Result<Self, Error>;

    fn add(self, delta: TimeDelta) -> Self::Output {
        self.add_duration(delta)
    }
}

impl<const OFFSET: i64> Sub<TimeDelta> for IsoWeekDate<OFFSET> {
    type Output = Result<Self, Error>;

    fn sub(self, delta: TimeDelta) -> Self::Output {
        self.sub_duration(delta)
    }
}

/// Difference in days.
impl<const OFFSET: i64> Sub for IsoWeekDate<OFFSET> {
    type Output = i64;

    fn sub(self, other: Self) -> Self::Output {
        self.diff(&other)
    }
}

impl<const OFFSET: i64> From<IsoWeekDate<OFFSET>> for Castable<'_, IsoWeekDate<OFFSET>> {
    fn from(value: IsoWeekDate<OFFSET>) -> Self {
        Self::Value(value)
    }
}

impl<const OFFSET: i64> From<IsoWeekDate<OFFSET>> for Operand<IsoWeekDate<OFFSET>> {
    fn from(value: IsoWeekDate<OFFSET>) -> Self {
        Self::Value(value)
    }
}

impl<const OFFSET: i64> serde::Serialize for IsoWeekDate<OFFSET> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, const OFFSET: i64> serde::Deserialize<'de> for IsoWeekDate<OFFSET> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
