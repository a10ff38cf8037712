use std::iter::FusedIterator;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::base::WeekBased;
use crate::error::Error;
use crate::prelude::*;

/// Which endpoints of a range are yielded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Inclusive {
    #[default]
    #[display(fmt = "both")]
    Both,
    #[display(fmt = "left")]
    Left,
    #[display(fmt = "right")]
    Right,
    #[display(fmt = "neither")]
    Neither,
}

impl Inclusive {
    pub const fn includes_start(self) -> bool {
        matches!(self, Self::Both | Self::Left)
    }

    pub const fn includes_end(self) -> bool {
        matches!(self, Self::Both | Self::Right)
    }
}

impl FromStr for Inclusive {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(Self::Both),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "neither" => Ok(Self::Neither),
            _ => Err(Error::InvalidInclusive(s.to_owned())),
        }
    }
}

/// Lazy, one-shot sequence of week values between two endpoints.
///
/// Values are computed on demand as `start + index` for `index` in
/// `first..last` stepping by `step`, where the bounds depend on
/// [`Inclusive`].
#[derive(Debug)]
pub struct WeekRange<T> {
    start: T,
    index: i64,
    last:  i64,
    step:  i64,
}

impl<T: WeekBased> WeekRange<T> {
    /// Creates a new range.
    ///
    /// # Errors
    /// Returns `Error::InvalidRange` if `start > end`, or
    /// `Error::OutOfRange` if `step < 1`.
    pub fn new(start: T, end: T, step: i64, inclusive: Inclusive) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvalidRange {
                start: start.to_string(),
                end:   end.to_string(),
            });
        }
        if step < 1 {
            return Err(Error::OutOfRange {
                name:  "step",
                value: step,
                rule:  "greater than or equal to 1",
            });
        }

        let delta = end.diff(&start);
        let first = i64::from(!inclusive.includes_start());
        let last = if inclusive.includes_end() { delta + 1 } else { delta };

        let range = Self {
            start,
            index: first,
            last,
            step,
        };
        tracing::trace!(%start, %end, step, %inclusive, len = range.len(), "week range created");
        Ok(range)
    }

    /// Yields canonical strings instead of values.
    pub fn as_strings(self) -> impl Iterator<Item = String> {
        self.map(|value| value.to_string())
    }

    fn remaining(&self) -> usize {
        if self.index >= self.last {
            return 0;
        }
        usize::try_from((self.last - self.index - 1) / self.step + 1).unwrap_or(usize::MAX)
    }
}

impl<T: WeekBased> Iterator for WeekRange<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.last {
            return None;
        }
        let value = self.start.checked_add(self.index).ok()?;
        self.index = self.index.saturating_add(self.step);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: WeekBased> ExactSizeIterator for WeekRange<T> {}

impl<T: WeekBased> FusedIterator for WeekRange<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::test_utils::{date, week, week_date};
    use crate::{IsoWeek, IsoWeekDate};

    #[test]
    fn test_inclusive_cases() {
        struct TestCase {
            inclusive: Inclusive,
            expected:  &'static [&'static str],
        }

        let cases = [
            TestCase {
                inclusive: Inclusive::Both,
                expected:  &["2023-W01", "2023-W02", "2023-W03", "2023-W04"],
            },
            TestCase {
                inclusive: Inclusive::Left,
                expected:  &["2023-W01", "2023-W02", "2023-W03"],
            },
            TestCase {
                inclusive: Inclusive::Right,
                expected:  &["2023-W02", "2023-W03", "2023-W04"],
            },
            TestCase {
                inclusive: Inclusive::Neither,
                expected:  &["2023-W02", "2023-W03"],
            },
        ];

        for case in &cases {
            let values: Vec<String> = WeekRange::new(week("2023-W01"), week("2023-W04"), 1, case.inclusive)
                .unwrap()
                .as_strings()
                .collect();
            assert_eq!(values, case.expected, "{}", case.inclusive);
        }
    }

    #[test]
    fn test_step() {
        let range = IsoWeek::<0>::range("2023-W01", "2023-W10", 2, Inclusive::Both).unwrap();
        assert_eq!(range.len(), 5);
        let values: Vec<String> = range.as_strings().collect();
        assert_eq!(values, ["2023-W01", "2023-W03", "2023-W05", "2023-W07", "2023-W09"]);

        let values: Vec<String> = IsoWeek::<0>::range("2023-W01", "2023-W07", 2, Inclusive::Both)
            .unwrap()
            .as_strings()
            .collect();
        assert_eq!(values, ["2023-W01", "2023-W03", "2023-W05", "2023-W07"]);
    }

    #[test]
    fn test_range_crosses_long_year() {
        let values: Vec<IsoWeek> = IsoWeek::<0>::range("2020-W52", "2021-W02", 1, Inclusive::Both)
            .unwrap()
            .collect();
        assert_eq!(
            values,
            [week("2020-W52"), week("2020-W53"), week("2021-W01"), week("2021-W02")]
        );
    }

    #[test]
    fn test_range_of_week_dates_from_dates() {
        let values: Vec<IsoWeekDate> = IsoWeekDate::<0>::range(date(2022, 12, 30), date(2023, 1, 3), 1, Inclusive::Both)
            .unwrap()
            .collect();
        assert_eq!(values.len(), 5);
        assert_eq!(values[0], week_date("2022-W52-5"));
        assert_eq!(values[4], week_date("2023-W01-2"));
    }

    #[test]
    fn test_single_point_ranges() {
        let value = week("2023-W05");
        assert_eq!(WeekRange::new(value, value, 1, Inclusive::Both).unwrap().count(), 1);
        assert_eq!(WeekRange::new(value, value, 1, Inclusive::Left).unwrap().count(), 0);
        assert_eq!(WeekRange::new(value, value, 1, Inclusive::Neither).unwrap().count(), 0);
    }

    #[test]
    fn test_invalid_ranges() {
        let err = WeekRange::new(week("2023-W02"), week("2023-W01"), 1, Inclusive::Both).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidRange {
                start: "2023-W02".to_owned(),
                end:   "2023-W01".to_owned(),
            }
        );

        for step in [0, -1] {
            let err = WeekRange::new(week("2023-W01"), week("2023-W02"), step, Inclusive::Both).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::SemanticRange);
        }

        let err = IsoWeek::<0>::range("2023-W01", "2023-W54", 1, Inclusive::Both).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_size_hint_tracks_consumption() {
        let mut range = WeekRange::new(week("2023-W01"), week("2023-W10"), 3, Inclusive::Both).unwrap();
        assert_eq!(range.size_hint(), (4, Some(4)));
        range.next();
        assert_eq!(range.len(), 3);
        assert_eq!(range.by_ref().count(), 3);
        assert_eq!(range.next(), None);
        assert_eq!(range.len(), 0);
    }

    #[test]
    fn test_inclusive_parse() {
        assert_eq!("left".parse::<Inclusive>().unwrap(), Inclusive::Left);
        assert_eq!("neither".parse::<Inclusive>().unwrap(), Inclusive::Neither);
        assert_eq!(
            "all".parse::<Inclusive>(),
            Err(Error::InvalidInclusive("all".to_owned()))
        );
        assert_eq!(Inclusive::default(), Inclusive::Both);
    }

    #[test]
    fn test_inclusive_serde() {
        let json = serde_json::to_string(&Inclusive::Right).unwrap();
        assert_eq!(json, "\"right\"");
        let parsed: Inclusive = serde_json::from_str("\"both\"").unwrap();
        assert_eq!(parsed, Inclusive::Both);
        assert!(serde_json::from_str::<Inclusive>("\"Both\"").is_err());
    }
}
