//! ISO 8601 week dates as validated value types.
//!
//! [`IsoWeek`] holds a `YYYY-Www` value and [`IsoWeekDate`] a `YYYY-Www-D`
//! value. Both are small `Copy` types storing validated components; their
//! `Display` is the canonical string. Shared behaviour lives on the
//! [`WeekBased`] trait, which must be in scope to parse, convert or do
//! arithmetic.
//!
//! ```
//! use chrono::NaiveDate;
//! use iso_week_date::{Inclusive, IsoWeek, IsoWeekDate, WeekBased};
//!
//! let week: IsoWeek = "2023-W01".parse().unwrap();
//! assert_eq!(week.to_date(1).unwrap(), NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
//! assert_eq!((week - 1_i64).unwrap().to_string(), "2022-W52");
//!
//! // January 1st 2023 is a Sunday and belongs to the last week of 2022
//! let day = IsoWeekDate::<0>::from_date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()).unwrap();
//! assert_eq!(day.to_string(), "2022-W52-7");
//!
//! let weeks: Vec<String> = IsoWeek::<0>::range("2023-W01", "2023-W10", 2, Inclusive::Both)
//!     .unwrap()
//!     .as_strings()
//!     .collect();
//! assert_eq!(weeks, ["2023-W01", "2023-W03", "2023-W05", "2023-W07", "2023-W09"]);
//! ```
//!
//! # Offsets
//!
//! The const parameter of both types shifts every Gregorian conversion by a
//! whole number of days. It is part of the type, so values with different
//! offsets cannot be ordered or subtracted, and are never equal.

mod base;
mod calendar;
mod consts;
pub mod convert;
mod error;
mod isoweek;
mod isoweekdate;
mod patterns;
mod prelude;
mod range;
pub mod schema;
#[cfg(test)]
mod test_utils;
mod types;
mod validation;

pub use base::{Castable, Difference, Operand, WeekBased};
pub use calendar::{date_to_days, days_to_date, gregorian_to_isoweek, isoweek_to_gregorian, p_of_year, weeks_of_year};
pub use consts::*;
pub use error::{Error, ErrorKind, ParseError};
pub use isoweek::IsoWeek;
pub use isoweekdate::IsoWeekDate;
pub use patterns::{Grammar, WEEK_MATCH, WEEKDAY_MATCH, YEAR_MATCH, compact};
pub use range::{Inclusive, WeekRange};
pub use types::{Day, Week, Year};
pub use validation::{is_compact_match, is_match, is_valid, validate, validate_compact};
