//! Behaviour shared by [`IsoWeek`](crate::IsoWeek) and [`IsoWeekDate`](crate::IsoWeekDate).
//!
//! Both variants store validated components and implement [`WeekBased`];
//! everything else (parsing, Gregorian conversion, arithmetic, comparison
//! guards and ranges) is provided here once, in terms of a day number.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};

use crate::calendar::{self, components_to_days, days_to_components, shifted_date};
use crate::consts::{DATE_SEPARATOR, QUARTERS, WEEKS_PER_QUARTER};
use crate::error::{Error, ParseError};
use crate::patterns::Grammar;
use crate::range::{Inclusive, WeekRange};
use crate::validation::{self, Components};

/// Inputs that can be coerced into a week value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Castable<'a, T> {
    /// Dashed canonical form only; use [`WeekBased::from_compact`] for `YYYYWnn`
    Str(&'a str),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    /// Already a value of the target type
    Value(T),
}

impl<'a, T> From<&'a str> for Castable<'a, T> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a, T> From<&'a String> for Castable<'a, T> {
    fn from(value: &'a String) -> Self {
        Self::Str(value.as_str())
    }
}

impl<T> From<NaiveDate> for Castable<'_, T> {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T> From<NaiveDateTime> for Castable<'_, T> {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

/// Timezone aware datetimes are taken at their local wall clock time.
impl<T, Tz: TimeZone> From<DateTime<Tz>> for Castable<'_, T> {
    fn from(value: DateTime<Tz>) -> Self {
        Self::DateTime(value.naive_local())
    }
}

/// Right hand side of an addition or subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<T> {
    /// Whole weeks for `IsoWeek`, whole days for `IsoWeekDate`
    Units(i64),
    /// Applied to the Gregorian datetime of the first day
    Duration(TimeDelta),
    /// Another value of the same type
    Value(T),
}

impl<T> From<i64> for Operand<T> {
    fn from(value: i64) -> Self {
        Self::Units(value)
    }
}

impl<T> From<TimeDelta> for Operand<T> {
    fn from(value: TimeDelta) -> Self {
        Self::Duration(value)
    }
}

/// Result of subtracting an [`Operand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difference<T> {
    /// Subtracting units or a duration yields a shifted value
    Value(T),
    /// Subtracting a value yields the distance in units
    Units(i64),
}

pub(crate) mod sealed {
    use crate::validation::Components;

    /// Raw component access. Unnameable outside the crate, so values can
    /// only come from validated constructors.
    pub trait Sealed {
        fn from_components(components: Components) -> Self;

        fn components(&self) -> Components;
    }
}

/// An ISO week value with a fixed grammar and a fixed day offset.
///
/// Implemented by [`IsoWeek`](crate::IsoWeek) and
/// [`IsoWeekDate`](crate::IsoWeekDate) only.
pub trait WeekBased: sealed::Sealed + Copy + Ord + Hash + fmt::Display + fmt::Debug {
    /// Grammar of the canonical string
    const GRAMMAR: Grammar;
    /// Days added when converting to Gregorian, subtracted when converting from it
    const OFFSET_DAYS: i64;
    /// Days in one arithmetic unit
    const UNIT_DAYS: i64;
    /// Type name used in error messages
    const NAME: &'static str;

    /// Day number of the first day represented, without offset.
    fn day_number(&self) -> i64 {
        let components = self.components();
        components_to_days(components.year, components.week, components.day)
    }

    /// # Errors
    /// Returns `Error::DateOutOfRange` if the day falls outside ISO years 0001-9999.
    fn from_day_number(days: i64) -> Result<Self, Error> {
        let (year, week, day) = days_to_components(days)?;
        Ok(Self::from_components(Components::new(year, week, day)))
    }

    /// Parses the dashed canonical form.
    ///
    /// # Errors
    /// Returns `ParseError` if the string is malformed or the week does not
    /// exist in its year.
    fn parse(value: &str) -> Result<Self, ParseError> {
        validation::parse(value, Self::GRAMMAR).map(Self::from_components)
    }

    /// Parses the compact (dash-free) form.
    ///
    /// # Errors
    /// Same as [`WeekBased::parse`].
    fn from_compact(value: &str) -> Result<Self, ParseError> {
        validation::parse_compact(value, Self::GRAMMAR).map(Self::from_components)
    }

    /// Value containing `date` once shifted back by the offset.
    ///
    /// # Errors
    /// Returns `Error::DateOutOfRange` if the shifted date falls outside ISO
    /// years 0001-9999.
    fn from_date(date: NaiveDate) -> Result<Self, Error> {
        let (year, week, day) = calendar::gregorian_to_isoweek(date, Self::OFFSET_DAYS)?;
        Ok(Self::from_components(Components::new(year, week, day)))
    }

    /// # Errors
    /// Same as [`WeekBased::from_date`].
    fn from_datetime(datetime: NaiveDateTime) -> Result<Self, Error> {
        Self::from_date(datetime.date())
    }

    /// Value containing the current UTC date.
    ///
    /// # Errors
    /// Same as [`WeekBased::from_date`].
    fn from_today() -> Result<Self, Error> {
        Self::from_date(Utc::now().date_naive())
    }

    /// Coerces any [`Castable`] input.
    ///
    /// # Errors
    /// Returns the `ParseError` of [`WeekBased::parse`] for strings, or the
    /// conversion error for dates.
    fn cast<'a>(value: impl Into<Castable<'a, Self>>) -> Result<Self, Error> {
        match value.into() {
            Castable::Str(s) => Ok(Self::parse(s)?),
            Castable::Date(date) => Self::from_date(date),
            Castable::DateTime(datetime) => Self::from_datetime(datetime),
            Castable::Value(value) => Ok(value),
        }
    }

    fn year(&self) -> u16 {
        self.components().year.get()
    }

    fn week(&self) -> u8 {
        self.components().week.get()
    }

    /// Quarter 1-4, week 53 belongs to the fourth.
    fn quarter(&self) -> u8 {
        ((self.week() - 1) / WEEKS_PER_QUARTER + 1).min(QUARTERS)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn offset_days(&self) -> i64 {
        Self::OFFSET_DAYS
    }

    fn to_compact(&self) -> String {
        self.to_string().replace(DATE_SEPARATOR, "")
    }

    /// Gregorian date of the first day represented, offset applied.
    ///
    /// # Errors
    /// Returns `Error::DateOutOfRange` if the offset leaves chrono's range.
    fn start_date(&self) -> Result<NaiveDate, Error> {
        shifted_date(self.day_number(), Self::OFFSET_DAYS)
    }

    /// Midnight of [`WeekBased::start_date`].
    ///
    /// # Errors
    /// Same as [`WeekBased::start_date`].
    fn to_datetime(&self) -> Result<NaiveDateTime, Error> {
        Ok(self.start_date()?.and_time(NaiveTime::MIN))
    }

    /// Shifts by `n` units.
    ///
    /// # Errors
    /// Returns `Error::DateOutOfRange` if the result leaves ISO years 0001-9999.
    fn checked_add(&self, n: i64) -> Result<Self, Error> {
        let days = n
            .checked_mul(Self::UNIT_DAYS)
            .and_then(|delta| self.day_number().checked_add(delta))
            .ok_or_else(|| Error::DateOutOfRange(format!("{self} shifted by {n}")))?;
        Self::from_day_number(days)
    }

    /// # Errors
    /// Same as [`WeekBased::checked_add`].
    fn checked_sub(&self, n: i64) -> Result<Self, Error> {
        let negated = n
            .checked_neg()
            .ok_or_else(|| Error::DateOutOfRange(format!("{self} shifted by -({n})")))?;
        self.checked_add(negated)
    }

    /// Adds `delta` to [`WeekBased::to_datetime`] and converts back.
    ///
    /// # Errors
    /// Returns `Error::DateOutOfRange` if the result leaves ISO years 0001-9999.
    fn add_duration(&self, delta: TimeDelta) -> Result<Self, Error> {
        let shifted = self
            .to_datetime()?
            .checked_add_signed(delta)
            .ok_or_else(|| Error::DateOutOfRange(format!("{self} shifted by {delta}")))?;
        Self::from_datetime(shifted)
    }

    /// # Errors
    /// Same as [`WeekBased::add_duration`].
    fn sub_duration(&self, delta: TimeDelta) -> Result<Self, Error> {
        let shifted = self
            .to_datetime()?
            .checked_sub_signed(delta)
            .ok_or_else(|| Error::DateOutOfRange(format!("{self} shifted by -{delta}")))?;
        Self::from_datetime(shifted)
    }

    /// Distance from `other` to `self` in units.
    fn diff(&self, other: &Self) -> i64 {
        (self.day_number() - other.day_number()).div_euclid(Self::UNIT_DAYS)
    }

    /// Checks that `U` is the same variant with the same offset.
    ///
    /// # Errors
    /// Returns `Error::TypeMismatch` for the other variant and
    /// `Error::IncompatibleVariant` for a different offset.
    fn check_variant<U: WeekBased>(&self, operation: &'static str) -> Result<(), Error> {
        if U::GRAMMAR != Self::GRAMMAR {
            return Err(Error::TypeMismatch {
                operation,
                operand: U::NAME,
                target: Self::NAME,
            });
        }
        if U::OFFSET_DAYS != Self::OFFSET_DAYS {
            return Err(Error::IncompatibleVariant {
                operation,
                name: Self::NAME,
                left: Self::OFFSET_DAYS,
                right: U::OFFSET_DAYS,
            });
        }
        Ok(())
    }

    /// [`WeekBased::diff`] against any week value.
    ///
    /// # Errors
    /// See [`WeekBased::check_variant`].
    fn try_diff<U: WeekBased>(&self, other: &U) -> Result<i64, Error> {
        self.check_variant::<U>("subtract")?;
        Ok((self.day_number() - other.day_number()).div_euclid(Self::UNIT_DAYS))
    }

    /// Ordering against any week value.
    ///
    /// # Errors
    /// See [`WeekBased::check_variant`].
    fn try_cmp<U: WeekBased>(&self, other: &U) -> Result<Ordering, Error> {
        self.check_variant::<U>("compare")?;
        Ok(self.components().cmp(&other.components()))
    }

    /// # Errors
    /// Returns `Error::TypeMismatch` for `Operand::Value`, otherwise as
    /// [`WeekBased::checked_add`] / [`WeekBased::add_duration`].
    fn add_operand(&self, operand: Operand<Self>) -> Result<Self, Error> {
        match operand {
            Operand::Units(n) => self.checked_add(n),
            Operand::Duration(delta) => self.add_duration(delta),
            Operand::Value(_) => Err(Error::TypeMismatch {
                operation: "add",
                operand:   Self::NAME,
                target:    Self::NAME,
            }),
        }
    }

    /// # Errors
    /// As [`WeekBased::checked_sub`] / [`WeekBased::sub_duration`].
    fn sub_operand(&self, operand: Operand<Self>) -> Result<Difference<Self>, Error> {
        match operand {
            Operand::Units(n) => self.checked_sub(n).map(Difference::Value),
            Operand::Duration(delta) => self.sub_duration(delta).map(Difference::Value),
            Operand::Value(other) => Ok(Difference::Units(self.diff(&other))),
        }
    }

    /// Lazily adds each operand, one result per element.
    fn add_all<I>(self, operands: I) -> impl Iterator<Item = Result<Self, Error>>
    where
        I: IntoIterator,
        I::Item: Into<Operand<Self>>,
    {
        operands.into_iter().map(move |operand| self.add_operand(operand.into()))
    }

    /// Lazily subtracts each operand, one result per element.
    fn sub_all<I>(self, operands: I) -> impl Iterator<Item = Result<Difference<Self>, Error>>
    where
        I: IntoIterator,
        I::Item: Into<Operand<Self>>,
    {
        operands.into_iter().map(move |operand| self.sub_operand(operand.into()))
    }

    /// # Errors
    /// Returns `Error::DateOutOfRange` past 9999.
    fn next(&self) -> Result<Self, Error> {
        self.checked_add(1)
    }

    /// # Errors
    /// Returns `Error::DateOutOfRange` before 0001.
    fn previous(&self) -> Result<Self, Error> {
        self.checked_sub(1)
    }

    fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    fn is_between(&self, lower: &Self, upper: &Self, inclusive: Inclusive) -> bool {
        let above = if inclusive.includes_start() {
            lower <= self
        } else {
            lower < self
        };
        let below = if inclusive.includes_end() {
            self <= upper
        } else {
            self < upper
        };
        above && below
    }

    /// Lazy sequence from `start` to `end` stepping `step` units.
    ///
    /// # Errors
    /// Returns the cast error of either endpoint, `Error::InvalidRange` if
    /// `start > end`, or `Error::OutOfRange` if `step < 1`.
    fn range<'a, 'b>(
        start: impl Into<Castable<'a, Self>>,
        end: impl Into<Castable<'b, Self>>,
        step: i64,
        inclusive: Inclusive,
    ) -> Result<WeekRange<Self>, Error> {
        WeekRange::new(Self::cast(start)?, Self::cast(end)?, step, inclusive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::test_utils::{date, datetime, week, week_date};
    use crate::{IsoWeek, IsoWeekDate};

    type ShiftedWeek = IsoWeek<1>;

    #[test]
    fn test_cast_inputs() {
        struct TestCase {
            input:    Castable<'static, IsoWeek>,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                input:    Castable::Str("2023-W05"),
                expected: "2023-W05",
            },
            TestCase {
                input:    Castable::Date(date(2023, 1, 1)),
                expected: "2022-W52",
            },
            TestCase {
                input:    Castable::DateTime(datetime(2023, 1, 2, 23, 59)),
                expected: "2023-W01",
            },
            TestCase {
                input:    Castable::Value(week("2020-W53")),
                expected: "2020-W53",
            },
        ];

        for case in cases {
            assert_eq!(IsoWeek::<0>::cast(case.input).unwrap().to_string(), case.expected);
        }
    }

    #[test]
    fn test_cast_string_rejects_compact_form() {
        let err = IsoWeek::<0>::cast("2023W05").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(IsoWeek::<0>::range("2023W01", "2023-W05", 1, Inclusive::Both).is_err());
        assert_eq!(IsoWeek::<0>::from_compact("2023W05").unwrap(), week("2023-W05"));
    }

    #[test]
    fn test_cast_string_reports_dashed_error() {
        let err = IsoWeek::<0>::cast("2024-W53").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SemanticRange);

        let err = IsoWeek::<0>::cast("garbage").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(err.to_string().contains("YYYY-WNN"));
    }

    #[test]
    fn test_cast_timezone_aware() {
        let utc = date(2023, 1, 2).and_hms_opt(0, 0, 0).unwrap().and_utc();
        assert_eq!(IsoWeek::<0>::cast(utc).unwrap(), week("2023-W01"));
    }

    #[test]
    fn test_quarter() {
        struct TestCase {
            value:   &'static str,
            quarter: u8,
        }

        let cases = [
            TestCase { value: "2023-W01", quarter: 1 },
            TestCase { value: "2023-W13", quarter: 1 },
            TestCase { value: "2023-W14", quarter: 2 },
            TestCase { value: "2023-W39", quarter: 3 },
            TestCase { value: "2023-W52", quarter: 4 },
            TestCase { value: "2020-W53", quarter: 4 },
        ];

        for case in &cases {
            assert_eq!(week(case.value).quarter(), case.quarter, "{}", case.value);
        }
        assert_eq!(week_date("2020-W53-7").quarter(), 4);
    }

    #[test]
    fn test_accessors() {
        let value = week_date("2023-W07-4");
        assert_eq!(value.year(), 2023);
        assert_eq!(value.week(), 7);
        assert_eq!(value.name(), "IsoWeekDate");
        assert_eq!(value.offset_days(), 0);
        assert_eq!(value.to_compact(), "2023W074");
        assert_eq!(ShiftedWeek::parse("2023-W07").unwrap().offset_days(), 1);
    }

    #[test]
    fn test_offset_shifts_gregorian_conversion() {
        // With a one day offset the week runs Tuesday to Monday
        let shifted = ShiftedWeek::from_date(date(2023, 1, 2)).unwrap();
        assert_eq!(shifted.to_string(), "2022-W52");
        assert_eq!(shifted.start_date().unwrap(), date(2022, 12, 27));

        let shifted = ShiftedWeek::from_date(date(2023, 1, 3)).unwrap();
        assert_eq!(shifted.to_string(), "2023-W01");
        assert_eq!(shifted.to_datetime().unwrap(), datetime(2023, 1, 3, 0, 0));
    }

    #[test]
    fn test_arithmetic_inverse() {
        let values = [week("2015-W53"), week("2020-W01"), week("2023-W52"), week("0001-W02")];
        for x in values {
            for n in [-52_i64, -1, 0, 1, 7, 53, 520] {
                let Ok(shifted) = x.checked_add(n) else {
                    continue;
                };
                assert_eq!(shifted.checked_sub(n).unwrap(), x, "{x} + {n}");
                assert_eq!(shifted.diff(&x), n, "{x} + {n}");
            }
        }

        let x = week_date("2020-W53-5");
        for n in [-400_i64, -1, 0, 3, 365] {
            let shifted = x.checked_add(n).unwrap();
            assert_eq!(shifted.checked_sub(n).unwrap(), x);
            assert_eq!(shifted.diff(&x), n);
        }
    }

    #[test]
    fn test_checked_add_out_of_range() {
        assert!(matches!(week("9999-W52").checked_add(1), Err(Error::DateOutOfRange(_))));
        assert!(matches!(week("0001-W01").previous(), Err(Error::DateOutOfRange(_))));
        assert!(matches!(week("2023-W01").checked_add(i64::MAX), Err(Error::DateOutOfRange(_))));
        assert!(matches!(week("2023-W01").checked_sub(i64::MIN), Err(Error::DateOutOfRange(_))));
    }

    #[test]
    fn test_duration_arithmetic() {
        let value = week("2023-W01");
        assert_eq!(value.add_duration(TimeDelta::hours(1234)).unwrap(), week("2023-W08"));
        assert_eq!(value.sub_duration(TimeDelta::hours(1234)).unwrap(), week("2022-W45"));
        assert_eq!(value.add_duration(TimeDelta::weeks(2)).unwrap(), week("2023-W03"));
        assert_eq!(value.sub_duration(TimeDelta::weeks(2)).unwrap(), week("2022-W51"));
    }

    #[test]
    fn test_add_operand() {
        let value = week("2023-W01");
        assert_eq!(value.add_operand(Operand::Units(1)).unwrap(), week("2023-W02"));
        assert_eq!(
            value.add_operand(TimeDelta::days(7).into()).unwrap(),
            week("2023-W02")
        );

        let err = value.add_operand(Operand::Value(value)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_sub_operand() {
        let value = week("2023-W01");
        assert_eq!(
            value.sub_operand(Operand::Units(1)).unwrap(),
            Difference::Value(week("2022-W52"))
        );
        assert_eq!(
            value.sub_operand(Operand::Value(week("2022-W51"))).unwrap(),
            Difference::Units(2)
        );
        assert_eq!(
            value.sub_operand(Operand::Duration(TimeDelta::weeks(2))).unwrap(),
            Difference::Value(week("2022-W51"))
        );
    }

    #[test]
    fn test_add_all_is_lazy() {
        let value = week("2023-W01");
        let results: Vec<IsoWeek> = value
            .add_all((1_i64..).map(Operand::<IsoWeek>::Units))
            .take(3)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(results, vec![week("2023-W02"), week("2023-W03"), week("2023-W04")]);
    }

    #[test]
    fn test_add_all_reports_per_element() {
        let value = week("2023-W01");
        let mut results = value.add_all([Operand::Units(1), Operand::Value(value), Operand::Units(2)]);
        assert!(results.next().unwrap().is_ok());
        assert!(results.next().unwrap().is_err());
        assert_eq!(results.next().unwrap().unwrap(), week("2023-W03"));
        assert!(results.next().is_none());
    }

    #[test]
    fn test_sub_all_mixed() {
        let value = week("2023-W01");
        let results: Vec<Difference<IsoWeek>> = value
            .sub_all([
                Operand::Units(1),
                Operand::Duration(TimeDelta::weeks(2)),
                Operand::Value(week("2022-W50")),
            ])
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(
            results,
            vec![
                Difference::Value(week("2022-W52")),
                Difference::Value(week("2022-W51")),
                Difference::Units(3),
            ]
        );
    }

    #[test]
    fn test_try_cmp() {
        let a = week("2023-W01");
        let b = week("2023-W02");
        assert_eq!(a.try_cmp(&b).unwrap(), Ordering::Less);
        assert_eq!(b.try_cmp(&a).unwrap(), Ordering::Greater);
        assert_eq!(a.try_cmp(&a).unwrap(), Ordering::Equal);

        let shifted = ShiftedWeek::parse("2023-W01").unwrap();
        let err = a.try_cmp(&shifted).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleVariant);

        let err = a.try_cmp(&week_date("2023-W01-1")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_try_diff() {
        let a = week_date("2023-W01-1");
        assert_eq!(a.try_diff(&week_date("2022-W52-3")).unwrap(), 5);

        let shifted = IsoWeekDate::<3>::parse("2022-W52-3").unwrap();
        assert!(matches!(
            a.try_diff(&shifted),
            Err(Error::IncompatibleVariant { left: 0, right: 3, .. })
        ));
    }

    #[test]
    fn test_next_previous() {
        assert_eq!(week("2020-W53").next().unwrap(), week("2021-W01"));
        assert_eq!(week("2021-W01").previous().unwrap(), week("2020-W53"));
        assert_eq!(week_date("2023-W01-1").previous().unwrap(), week_date("2022-W52-7"));
    }

    #[test]
    fn test_is_before_after() {
        let a = week("2023-W01");
        let b = week("2023-W02");
        assert!(a.is_before(&b));
        assert!(!b.is_before(&a));
        assert!(b.is_after(&a));
        assert!(!a.is_after(&a));
    }

    #[test]
    fn test_is_between() {
        struct TestCase {
            inclusive: Inclusive,
            value:     &'static str,
            expected:  bool,
        }

        let lower = week("2023-W01");
        let upper = week("2023-W10");

        let cases = [
            TestCase { inclusive: Inclusive::Both, value: "2023-W01", expected: true },
            TestCase { inclusive: Inclusive::Both, value: "2023-W10", expected: true },
            TestCase { inclusive: Inclusive::Left, value: "2023-W01", expected: true },
            TestCase { inclusive: Inclusive::Left, value: "2023-W10", expected: false },
            TestCase { inclusive: Inclusive::Right, value: "2023-W01", expected: false },
            TestCase { inclusive: Inclusive::Right, value: "2023-W10", expected: true },
            TestCase { inclusive: Inclusive::Neither, value: "2023-W01", expected: false },
            TestCase { inclusive: Inclusive::Neither, value: "2023-W05", expected: true },
            TestCase { inclusive: Inclusive::Both, value: "2023-W11", expected: false },
        ];

        for case in &cases {
            assert_eq!(
                week(case.value).is_between(&lower, &upper, case.inclusive),
                case.expected,
                "{} {}",
                case.value,
                case.inclusive
            );
        }
    }

    #[test]
    fn test_from_today() {
        let today = Utc::now().date_naive();
        let value = IsoWeekDate::<0>::from_today().unwrap();
        // Tolerate a UTC midnight rollover between the two calls
        let value_date = value.start_date().unwrap();
        assert!(value_date == today || value_date == today.succ_opt().unwrap());
    }
}
