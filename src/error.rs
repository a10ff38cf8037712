use crate::consts::{MAX_WEEKDAY, MAX_YEAR, MIN_WEEKDAY, MIN_YEAR};
use crate::prelude::*;

/// Coarse classification of every error this crate produces.
///
/// Schema integrations key their user-facing messages on this, so the
/// `Display` names are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// The input does not have the shape of the expected grammar
    #[display(fmt = "format")]
    Format,
    /// Well formed, but a number is outside its valid range
    #[display(fmt = "semantic_range")]
    SemanticRange,
    /// The operation does not support the given operand kind
    #[display(fmt = "type_mismatch")]
    TypeMismatch,
    /// Both operands are week values, but with different offsets
    #[display(fmt = "incompatible_variant")]
    IncompatibleVariant,
}

/// Errors produced while parsing or validating ISO week strings and components.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(
        fmt = "Invalid isoweek date format. Format must match the '{format}' pattern, where YYYY is a year between \
               0001 and 9999, W is a literal character, NN is a week number between 1 and 53 and D is a day number \
               between 1 and 7, but found '{value}'"
    )]
    InvalidFormat { value: String, format: String },
    #[display(fmt = "Invalid week number in '{value}'. Year {year} has only {weeks} weeks")]
    InvalidWeek { value: String, year: u16, weeks: u8 },
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid week {week} for year {year:04}")]
    InvalidWeekNumber { year: u16, week: u8 },
    #[display(fmt = "Invalid weekday: {} (must be {}-{})", "_0", MIN_WEEKDAY, MAX_WEEKDAY)]
    InvalidDay(u8),
}

impl std::error::Error for ParseError {}

impl ParseError {
    /// Separates pattern mismatches from numbers outside their range.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat { .. } => ErrorKind::Format,
            Self::InvalidWeek { .. } | Self::InvalidYear(_) | Self::InvalidWeekNumber { .. } | Self::InvalidDay(_) => {
                ErrorKind::SemanticRange
            },
        }
    }
}

/// Crate-wide error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Error parsing or validating a week string or component.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A numeric argument is outside its valid range.
    #[error("Invalid `{name}`: {value} (must be {rule})")]
    OutOfRange {
        name:  &'static str,
        value: i64,
        rule:  &'static str,
    },

    /// The operation does not accept this kind of operand.
    #[error("Cannot {operation} type `{operand}` with `{target}`")]
    TypeMismatch {
        operation: &'static str,
        operand:   &'static str,
        target:    &'static str,
    },

    /// Ordering or difference between values with different offsets.
    #[error("Cannot {operation} `{name}`'s with different offsets ({left} days and {right} days)")]
    IncompatibleVariant {
        operation: &'static str,
        name:      &'static str,
        left:      i64,
        right:     i64,
    },

    /// Range start is after its end.
    #[error("`start` must be before `end` value, found: {start} > {end}")]
    InvalidRange { start: String, end: String },

    /// Unknown endpoint inclusion mode.
    #[error("Invalid `inclusive` value '{0}'. Must be one of both, left, right, neither")]
    InvalidInclusive(String),

    /// A computed date falls outside ISO years 0001-9999.
    #[error("Date out of supported range: {0}")]
    DateOutOfRange(String),
}

impl Error {
    /// Classification of the error, see [`ErrorKind`].
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(err) => err.kind(),
            Self::OutOfRange { .. } | Self::InvalidRange { .. } | Self::InvalidInclusive(_) | Self::DateOutOfRange(_) => {
                ErrorKind::SemanticRange
            },
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::IncompatibleVariant { .. } => ErrorKind::IncompatibleVariant,
        }
    }
}
