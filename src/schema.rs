//! Validated string fields for schema and serde integrations.
//!
//! [`IsoWeekStr`] and [`IsoWeekDateStr`] keep the original string but can
//! only be built from a valid one. Deserialization failures name the rule
//! that was violated, so a pattern mismatch and a week that does not exist in
//! its year surface as different messages.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::base::WeekBased;
use crate::error::{ErrorKind, ParseError};
use crate::isoweek::IsoWeek;
use crate::isoweekdate::IsoWeekDate;
use crate::patterns::Grammar;
use crate::prelude::*;
use crate::validation;

/// Rejection of a schema field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The string does not have the shape of the grammar.
    #[error("Invalid {grammar} pattern")]
    Pattern { grammar: Grammar, value: String },

    /// The week does not exist in the stated year.
    #[error("Invalid week number. Year {year} has only {weeks} weeks.")]
    WeekNumber { year: u16, weeks: u8, value: String },
}

impl SchemaError {
    fn from_parse(err: &ParseError, grammar: Grammar, value: String) -> Self {
        match *err {
            ParseError::InvalidWeek { year, weeks, .. } => Self::WeekNumber { year, weeks, value },
            _ => Self::Pattern { grammar, value },
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Pattern { .. } => ErrorKind::Format,
            Self::WeekNumber { .. } => ErrorKind::SemanticRange,
        }
    }

    /// The rejected input
    pub fn value(&self) -> &str {
        match self {
            Self::Pattern { value, .. } | Self::WeekNumber { value, .. } => value,
        }
    }
}

fn check(value: String, grammar: Grammar) -> Result<String, SchemaError> {
    match validation::parse(&value, grammar) {
        Ok(_) => Ok(value),
        Err(err) => Err(SchemaError::from_parse(&err, grammar, value)),
    }
}

/// A string holding a valid `YYYY-Www` value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IsoWeekStr(String);

impl IsoWeekStr {
    /// # Errors
    /// Returns `SchemaError` naming the violated rule.
    pub fn new(value: impl Into<String>) -> Result<Self, SchemaError> {
        check(value.into(), Grammar::Week).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// # Errors
    /// Never fails for a value built through validation; the `Result` mirrors
    /// [`WeekBased::parse`].
    pub fn to_isoweek<const OFFSET: i64>(&self) -> Result<IsoWeek<OFFSET>, ParseError> {
        IsoWeek::parse(&self.0)
    }
}

impl TryFrom<String> for IsoWeekStr {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for IsoWeekStr {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for IsoWeekStr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A string holding a valid `YYYY-Www-D` value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IsoWeekDateStr(String);

impl IsoWeekDateStr {
    /// # Errors
    /// Returns `SchemaError` naming the violated rule.
    pub fn new(value: impl Into<String>) -> Result<Self, SchemaError> {
        check(value.into(), Grammar::WeekDate).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// # Errors
    /// See [`IsoWeekStr::to_isoweek`].
    pub fn to_isoweekdate<const OFFSET: i64>(&self) -> Result<IsoWeekDate<OFFSET>, ParseError> {
        IsoWeekDate::parse(&self.0)
    }
}

impl TryFrom<String> for IsoWeekDateStr {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for IsoWeekDateStr {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for IsoWeekDateStr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
