//! The two ISO week grammars and their compact (dash-free) forms.
//!
//! Compact regexes are never written by hand: they are derived from the
//! dashed ones by dropping the separator between capture groups, so both
//! stay in lockstep.

use std::sync::LazyLock;

use regex::Regex;

use crate::consts::{DATE_SEPARATOR, ISOWEEK_DATE_FORMAT, ISOWEEK_FORMAT, ISOWEEKDATE_DATE_FORMAT, ISOWEEKDATE_FORMAT};
use crate::prelude::*;

/// Year between 0001 and 9999.
///
/// Either four digits led by 1-9, or led by 0 with at least one non-zero
/// digit among the last three.
pub const YEAR_MATCH: &str = r"([1-9][0-9]{3}|0[0-9]{2}[1-9]|0[0-9][1-9][0-9]|0[1-9][0-9]{2})";

/// Literal `W` followed by a week between 01 and 53.
pub const WEEK_MATCH: &str = r"(W0[1-9]|W[1-4][0-9]|W5[0-3])";

/// ISO weekday between 1 and 7.
pub const WEEKDAY_MATCH: &str = r"([1-7])";

static ISOWEEK_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(&Grammar::Week.pattern()));
static ISOWEEKDATE_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(&Grammar::WeekDate.pattern()));
static ISOWEEK_COMPACT_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(&Grammar::Week.compact_pattern()));
static ISOWEEKDATE_COMPACT_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(&Grammar::WeekDate.compact_pattern()));

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("iso week grammars are valid regular expressions")
}

/// Removes the separators between capture groups of a dashed pattern.
pub fn compact(pattern: &str) -> String {
    pattern.replace(")-(", ")(")
}

/// The recognized string grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Grammar {
    /// `YYYY-Www`
    #[display(fmt = "iso week")]
    Week,
    /// `YYYY-Www-D`
    #[display(fmt = "iso week date")]
    WeekDate,
}

impl Grammar {
    /// Anchored regular expression source of the dashed form
    pub fn pattern(self) -> String {
        match self {
            Self::Week => format!("^{YEAR_MATCH}-{WEEK_MATCH}$"),
            Self::WeekDate => format!("^{YEAR_MATCH}-{WEEK_MATCH}-{WEEKDAY_MATCH}$"),
        }
    }

    /// Regular expression source of the compact form
    pub fn compact_pattern(self) -> String {
        compact(&self.pattern())
    }

    pub fn regex(self) -> &'static Regex {
        match self {
            Self::Week => &ISOWEEK_REGEX,
            Self::WeekDate => &ISOWEEKDATE_REGEX,
        }
    }

    pub fn compact_regex(self) -> &'static Regex {
        match self {
            Self::Week => &ISOWEEK_COMPACT_REGEX,
            Self::WeekDate => &ISOWEEKDATE_COMPACT_REGEX,
        }
    }

    /// Human readable layout, e.g. `YYYY-WNN`
    pub const fn format(self) -> &'static str {
        match self {
            Self::Week => ISOWEEK_FORMAT,
            Self::WeekDate => ISOWEEKDATE_FORMAT,
        }
    }

    /// Human readable compact layout, e.g. `YYYYWNN`
    pub fn compact_format(self) -> String {
        self.format().replace(DATE_SEPARATOR, "")
    }

    /// strftime-style tokens producing this grammar from a date
    pub const fn date_format(self) -> &'static str {
        match self {
            Self::Week => ISOWEEK_DATE_FORMAT,
            Self::WeekDate => ISOWEEKDATE_DATE_FORMAT,
        }
    }

    /// Renders components the way this grammar spells them.
    ///
    /// Numbers are not checked here; the output is meant to be validated.
    pub fn render(self, year: u16, week: u8, weekday: u8) -> String {
        match self {
            Self::Week => format!("{year:04}-W{week:02}"),
            Self::WeekDate => format!("{year:04}-W{week:02}-{weekday}"),
        }
    }
}
