/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// First week of every ISO year
pub const MIN_WEEK: u8 = 1;
/// Week count of a "short" ISO year
pub const SHORT_YEAR_WEEKS: u8 = 52;
/// Week count of a "long" ISO year, also the largest week number the grammar accepts
pub const LONG_YEAR_WEEKS: u8 = 53;

/// Monday, using the ISO numbering convention
pub const MIN_WEEKDAY: u8 = 1;
/// Sunday, using the ISO numbering convention
pub const MAX_WEEKDAY: u8 = 7;
/// Days in one ISO week
pub const DAYS_PER_WEEK: i64 = 7;

/// Weeks in each of the first three quarters; the fourth absorbs week 53
pub const WEEKS_PER_QUARTER: u8 = 13;
/// Quarters in a year
pub const QUARTERS: u8 = 4;

/// Component separator of the canonical (extended) form
pub const DATE_SEPARATOR: char = '-';
/// Literal marking the week component
pub const WEEK_DESIGNATOR: char = 'W';

/// Human readable layout of the week-only form
pub const ISOWEEK_FORMAT: &str = "YYYY-WNN";
/// strftime-style tokens producing the week-only form
pub const ISOWEEK_DATE_FORMAT: &str = "%G-W%V";

/// Human readable layout of the week+day form
pub const ISOWEEKDATE_FORMAT: &str = "YYYY-WNN-D";
/// strftime-style tokens producing the week+day form
pub const ISOWEEKDATE_DATE_FORMAT: &str = "%G-W%V-%u";
