use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;
use std::str::FromStr;

use crate::error::ScheduleError;

/// Holidays observed by the stock configuration.
pub const DEFAULT_HOLIDAYS: [&str; 2] = ["2025-05-01", "2025-12-25"];

/// An immutable set of settlement holidays. Saturdays and Sundays are
/// always non-business days; the set lists the additional closures.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct HolidayCalendar {
    holidays: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn new<I>(holidays: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Builds a calendar from ISO-8601 `yyyy-mm-dd` strings. A string that
    /// fails to parse fails the whole construction.
    pub fn from_iso_dates<'a, I>(dates: I) -> Result<Self, ScheduleError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let holidays = dates
            .into_iter()
            .map(NaiveDate::from_str)
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(Self { holidays })
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.is_holiday(date)
    }

    /// Earliest business day on or after `date` (the "following"
    /// adjustment). Already-open dates pass through unchanged, so the
    /// adjustment is idempotent. Errs only if stepping forward runs past
    /// the last representable calendar date.
    pub fn next_business_day(&self, date: NaiveDate) -> Result<NaiveDate, ScheduleError> {
        let mut candidate = date;
        while !self.is_business_day(candidate) {
            candidate = candidate
                .succ_opt()
                .ok_or(ScheduleError::DateOverflow(candidate))?;
        }
        Ok(candidate)
    }
}

/// The calendar holding [`DEFAULT_HOLIDAYS`].
pub fn default_holidays() -> Result<HolidayCalendar, ScheduleError> {
    HolidayCalendar::from_iso_dates(DEFAULT_HOLIDAYS)
}
