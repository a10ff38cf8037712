//! Structural and semantic validation of ISO week strings.

use regex::Captures;

use crate::error::ParseError;
use crate::patterns::Grammar;
use crate::types::{Day, Week, Year};

/// Validated components of an ISO week (date) string.
///
/// Only built inside the crate, from checked `Year`/`Week`/`Day` values.
/// Week-only values always carry `Day::MONDAY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Components {
    pub(crate) year: Year,
    pub(crate) week: Week,
    pub(crate) day:  Day,
}

impl Components {
    pub(crate) const fn new(year: Year, week: Week, day: Day) -> Self {
        Self { year, week, day }
    }

    /// Builds components from plain numbers, checking the week count of `year`.
    pub(crate) fn from_values(year: u16, week: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let week = Week::new(week, year)?;
        let day = Day::new(day)?;
        Ok(Self { year, week, day })
    }
}

/// Checks `candidate` against the dashed form of `grammar`.
///
/// # Errors
/// Returns `ParseError::InvalidFormat` if the string does not match the
/// grammar, or `ParseError::InvalidWeek` if the week does not exist in the
/// stated year.
pub fn validate(candidate: &str, grammar: Grammar) -> Result<&str, ParseError> {
    parse(candidate, grammar)?;
    Ok(candidate)
}

/// Checks `candidate` against the compact (dash-free) form of `grammar`.
///
/// # Errors
/// Same as [`validate`], with the compact format named in the error.
pub fn validate_compact(candidate: &str, grammar: Grammar) -> Result<&str, ParseError> {
    parse_compact(candidate, grammar)?;
    Ok(candidate)
}

/// Structural match of the dashed grammar, without the week count check.
pub fn is_match(candidate: &str, grammar: Grammar) -> bool {
    grammar.regex().is_match(candidate)
}

/// Structural match of the compact grammar, without the week count check.
pub fn is_compact_match(candidate: &str, grammar: Grammar) -> bool {
    grammar.compact_regex().is_match(candidate)
}

/// Full validation as a predicate.
pub fn is_valid(candidate: &str, grammar: Grammar) -> bool {
    validate(candidate, grammar).is_ok()
}

/// Validates a dashed string and extracts its components.
pub(crate) fn parse(candidate: &str, grammar: Grammar) -> Result<Components, ParseError> {
    let captures = grammar.regex().captures(candidate).ok_or_else(|| {
        tracing::debug!(value = candidate, %grammar, "rejected: pattern mismatch");
        ParseError::InvalidFormat {
            value:  candidate.to_owned(),
            format: grammar.format().to_owned(),
        }
    })?;
    extract(candidate, grammar, &captures)
}

/// Validates a compact string and extracts its components.
pub(crate) fn parse_compact(candidate: &str, grammar: Grammar) -> Result<Components, ParseError> {
    let captures = grammar.compact_regex().captures(candidate).ok_or_else(|| {
        tracing::debug!(value = candidate, %grammar, "rejected: compact pattern mismatch");
        ParseError::InvalidFormat {
            value:  candidate.to_owned(),
            format: grammar.compact_format(),
        }
    })?;
    extract(candidate, grammar, &captures)
}

fn extract(candidate: &str, grammar: Grammar, captures: &Captures<'_>) -> Result<Components, ParseError> {
    let invalid_format = || ParseError::InvalidFormat {
        value:  candidate.to_owned(),
        format: grammar.format().to_owned(),
    };

    // Groups: 1 = year, 2 = "Wnn", 3 = weekday
    let year: u16 = captures
        .get(1)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(invalid_format)?;
    let week: u8 = captures
        .get(2)
        .and_then(|m| m.as_str().trim_start_matches('W').parse().ok())
        .ok_or_else(invalid_format)?;
    let day: u8 = match grammar {
        Grammar::Week => Day::MONDAY.get(),
        Grammar::WeekDate => captures
            .get(3)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(invalid_format)?,
    };

    let year = Year::new(year).map_err(|_| invalid_format())?;
    let weeks = year.weeks();
    let week = Week::new(week, year).map_err(|_| {
        tracing::debug!(value = candidate, %grammar, year = year.get(), weeks, "rejected: week out of range");
        ParseError::InvalidWeek {
            value: candidate.to_owned(),
            year: year.get(),
            weeks,
        }
    })?;
    let day = Day::new(day).map_err(|_| invalid_format())?;

    Ok(Components { year, week, day })
}
