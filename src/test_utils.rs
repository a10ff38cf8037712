use chrono::{NaiveDate, NaiveDateTime};

use crate::{IsoWeek, IsoWeekDate};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn datetime(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(hour, min, 0).unwrap()
}

pub fn week(value: &str) -> IsoWeek {
    value.parse().unwrap()
}

pub fn week_date(value: &str) -> IsoWeekDate {
    value.parse().unwrap()
}
