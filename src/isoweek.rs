use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::base::sealed::Sealed;
use crate::base::{Castable, Operand, WeekBased};
use crate::calendar::shifted_date;
use crate::consts::{DAYS_PER_WEEK, MAX_WEEKDAY, MIN_WEEKDAY};
use crate::error::{Error, ParseError};
use crate::isoweekdate::IsoWeekDate;
use crate::patterns::Grammar;
use crate::range::{Inclusive, WeekRange};
use crate::types::{Day, Week, Year};
use crate::validation::Components;

/// An ISO week in the `YYYY-Www` format.
///
/// `OFFSET` shifts every Gregorian conversion by a whole number of days and
/// is part of the type: values with different offsets never compare or
/// combine. Configure a variant with a type alias:
///
/// ```
/// use iso_week_date::{IsoWeek, WeekBased};
///
/// type FiscalWeek = IsoWeek<-3>;
///
/// let week = FiscalWeek::parse("2023-W01").unwrap();
/// assert_eq!(week.to_date(1).unwrap().to_string(), "2022-12-30");
/// ```
#[derive(Clone, Copy)]
pub struct IsoWeek<const OFFSET: i64 = 0> {
    year: Year,
    week: Week,
}

impl<const OFFSET: i64> WeekBased for IsoWeek<OFFSET> {
    const GRAMMAR: Grammar = Grammar::Week;
    const NAME: &'static str = "IsoWeek";
    const OFFSET_DAYS: i64 = OFFSET;
    const UNIT_DAYS: i64 = DAYS_PER_WEEK;
}

impl<const OFFSET: i64> Sealed for IsoWeek<OFFSET> {
    fn from_components(components: Components) -> Self {
        Self {
            year: components.year,
            week: components.week,
        }
    }

    fn components(&self) -> Components {
        Components::new(self.year, self.week, Day::MONDAY)
    }
}

impl<const OFFSET: i64> IsoWeek<OFFSET> {
    /// Builds a value from numbers, validated like a parsed string.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` for numbers the grammar cannot
    /// spell (year 0 or above 9999, week 0 or above 53) and
    /// `ParseError::InvalidWeek` for week 53 of a short year.
    pub fn from_values(year: u16, week: u8) -> Result<Self, ParseError> {
        Self::parse(&Grammar::Week.render(year, week, MIN_WEEKDAY))
    }

    pub const fn to_values(&self) -> (u16, u8) {
        (self.year.get(), self.week.get())
    }

    /// Returns a copy with the given components replaced.
    ///
    /// # Errors
    /// Same as [`IsoWeek::from_values`]; replacing only the year can make
    /// week 53 invalid.
    pub fn replace(&self, year: Option<u16>, week: Option<u8>) -> Result<Self, ParseError> {
        Self::from_values(year.unwrap_or(self.year.get()), week.unwrap_or(self.week.get()))
    }

    /// Gregorian date of `weekday` (1 = first day) in this week, offset applied.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` if `weekday` is not in 1..=7.
    pub fn to_date(&self, weekday: u8) -> Result<NaiveDate, Error> {
        let weekday = check_weekday("weekday", weekday)?;
        shifted_date(self.day_number() + i64::from(weekday - 1), OFFSET)
    }

    /// Midnight of [`IsoWeek::to_date`].
    ///
    /// # Errors
    /// Same as [`IsoWeek::to_date`].
    pub fn to_datetime_at(&self, weekday: u8) -> Result<NaiveDateTime, Error> {
        Ok(self.to_date(weekday)?.and_time(NaiveTime::MIN))
    }

    /// The seven Gregorian dates of this week.
    ///
    /// # Errors
    /// Returns `Error::DateOutOfRange` if the offset leaves chrono's range.
    pub fn days(&self) -> Result<[NaiveDate; 7], Error> {
        let mut days = [self.to_date(MIN_WEEKDAY)?; 7];
        for (weekday, day) in (MIN_WEEKDAY..=MAX_WEEKDAY).zip(days.iter_mut()).skip(1) {
            *day = self.to_date(weekday)?;
        }
        Ok(days)
    }

    /// The `n`-th day of the week, 1 being the first.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` if `n` is not in 1..=7.
    pub fn nth(&self, n: u8) -> Result<NaiveDate, Error> {
        let n = check_weekday("n", n)?;
        self.to_date(n)
    }

    /// Whether `other`, once cast to this type, is this week.
    ///
    /// # Errors
    /// Returns the cast error of `other`.
    pub fn contains<'a>(&self, other: impl Into<Castable<'a, Self>>) -> Result<bool, Error> {
        Ok(Self::cast(other)? == *self)
    }

    /// [`IsoWeek::contains`] for each element, in order.
    ///
    /// # Errors
    /// Returns the first cast error.
    pub fn contains_all<'a, I>(&self, values: I) -> Result<Vec<bool>, Error>
    where
        I: IntoIterator,
        I::Item: Into<Castable<'a, Self>>,
    {
        values.into_iter().map(|value| self.contains(value)).collect()
    }

    /// The `n` following weeks, every `step`-th one.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` if `n < 1` or `step < 1`, or
    /// `Error::DateOutOfRange` if the last week is past 9999.
    pub fn weeksout(&self, n: i64, step: i64) -> Result<WeekRange<Self>, Error> {
        if n < 1 {
            return Err(Error::OutOfRange {
                name:  "n_weeks",
                value: n,
                rule:  "strictly positive",
            });
        }
        WeekRange::new(self.checked_add(1)?, self.checked_add(n)?, step, Inclusive::Both)
    }
}

fn check_weekday(name: &'static str, weekday: u8) -> Result<u8, Error> {
    if (MIN_WEEKDAY..=MAX_WEEKDAY).contains(&weekday) {
        Ok(weekday)
    } else {
        Err(Error::OutOfRange {
            name,
            value: i64::from(weekday),
            rule: "between 1 and 7",
        })
    }
}

impl<const OFFSET: i64> fmt::Display for IsoWeek<OFFSET> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{}", self.year, self.week)
    }
}

impl<const OFFSET: i64> fmt::Debug for IsoWeek<OFFSET> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IsoWeek({self}) with offset {OFFSET} days")
    }
}

impl<const OFFSET: i64> FromStr for IsoWeek<OFFSET> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<const A: i64, const B: i64> PartialEq<IsoWeek<B>> for IsoWeek<A> {
    fn eq(&self, other: &IsoWeek<B>) -> bool {
        A == B && self.year == other.year && self.week == other.week
    }
}

impl<const OFFSET: i64> Eq for IsoWeek<OFFSET> {}

/// A week is never equal to a week date.
impl<const A: i64, const B: i64> PartialEq<IsoWeekDate<B>> for IsoWeek<A> {
    fn eq(&self, _other: &IsoWeekDate<B>) -> bool {
        false
    }
}

/// Ordering exists only within one offset, so mixing offsets does not compile:
///
/// ```compile_fail
/// use iso_week_date::{IsoWeek, WeekBased};
///
/// let a = IsoWeek::<0>::parse("2023-W01").unwrap();
/// let b = IsoWeek::<1>::parse("2023-W05").unwrap();
/// let _ = a < b;
/// ```
///
/// [`WeekBased::try_cmp`] reports the mismatch at runtime instead.
impl<const OFFSET: i64> PartialOrd for IsoWeek<OFFSET> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const OFFSET: i64> Ord for IsoWeek<OFFSET> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.week).cmp(&(other.year, other.week))
    }
}

impl<const OFFSET: i64> Hash for IsoWeek<OFFSET> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Self::NAME.hash(state);
        OFFSET.hash(state);
        self.year.hash(state);
        self.week.hash(state);
    }
}

impl<const OFFSET: i64> Add<i64> for IsoWeek<OFFSET> {
    type Output = Result<Self, Error>;

    fn add(self, weeks: i64) -> Self::Output {
        self.checked_add(weeks)
    }
}

impl<const OFFSET: i64> Sub<i64> for IsoWeek<OFFSET> {
    type Output = Result<Self, Error>;

    fn sub(self, weeks: i64) -> Self::Output {
        self.checked_sub(weeks)
    }
}

impl<const OFFSET: i64> Add<TimeDelta> for IsoWeek<OFFSET> {
    type Output = Result<Self, Error>;

    fn add(self, delta: TimeDelta) -> Self::Output {
        self.add_duration(delta)
    }
}

impl<const OFFSET: i64> Sub<TimeDelta> for IsoWeek<OFFSET> {
    type Output = Result<Self, Error>;

    fn sub(self, delta: TimeDelta) -> Self::Output {
        self.sub_duration(delta)
    }
}

/// Difference in weeks.
impl<const OFFSET: i64> Sub for IsoWeek<OFFSET> {
    type Output = i64;

    fn sub(self, other: Self) -> Self::Output {
        self.diff(&other)
    }
}

impl<const OFFSET: i64> From<IsoWeek<OFFSET>> for Castable<'_, IsoWeek<OFFSET>> {
    fn from(value: IsoWeek<OFFSET>) -> Self {
        Self::Value(value)
    }
}

impl<const OFFSET: i64> From<IsoWeek<OFFSET>> for Operand<IsoWeek<OFFSET>> {
    fn from(value: IsoWeek<OFFSET>) -> Self {
        Self::Value(value)
    }
}

impl<const OFFSET: i64> serde::Serialize for IsoWeek<OFFSET> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, const OFFSET: i64> serde::Deserialize<'de> for IsoWeek<OFFSET> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
