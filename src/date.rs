//! Day-granularity calendar date.

use std::str::FromStr;

use crate::ParseError;
use crate::consts::{
    DATE_SEPARATOR, DAYS_PER_ERA, DAYS_PER_WEEK, DECEMBER, EPOCH_WEEKDAY_OFFSET, GREGORIAN_CYCLE,
    JANUARY, MIN_DAY, UNIX_EPOCH_SHIFT,
};
use crate::prelude::*;
use crate::types::{Day, Month, Weekday, Year, days_in_month};

/// A proleptic Gregorian date at day granularity.
///
/// Carries no time of day, so two values naming the same calendar day are
/// always equal. Ordering follows the calendar (year, then month, then day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl CalendarDate {
    /// Builds a date from already-validated components.
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Builds a date from raw numbers.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns `true` when both dates fall in the same month of the same year.
    pub fn same_month(&self, other: &Self) -> bool {
        self.year == other.year && self.month == other.month
    }

    /// First day of this date's month.
    pub fn first_of_month(&self) -> Self {
        Self::from_ymd(self.year(), self.month(), MIN_DAY).unwrap_or(*self)
    }

    /// Days since 1970-01-01 (negative before it).
    pub fn day_number(&self) -> i64 {
        let (month, day) = (i64::from(self.month()), i64::from(self.day()));
        // Years start in March so the leap day is the last day of the year.
        let year = i64::from(self.year()) - i64::from(month <= 2);
        let era = year.div_euclid(i64::from(GREGORIAN_CYCLE));
        let year_of_era = year.rem_euclid(i64::from(GREGORIAN_CYCLE));
        let month_from_march = (month + 9) % 12;
        let day_of_year = (153 * month_from_march + 2) / 5 + day - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
        era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_SHIFT
    }

    /// Inverse of [`CalendarDate::day_number`].
    ///
    /// Returns `None` when the day falls outside `MIN_YEAR..=MAX_YEAR`.
    pub fn from_day_number(days: i64) -> Option<Self> {
        let shifted = days.checked_add(UNIX_EPOCH_SHIFT)?;
        let era = shifted.div_euclid(DAYS_PER_ERA);
        let day_of_era = shifted.rem_euclid(DAYS_PER_ERA);
        let year_of_era =
            (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let month_from_march = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * month_from_march + 2) / 5 + 1;
        let month = if month_from_march < 10 {
            month_from_march + 3
        } else {
            month_from_march - 9
        };
        let year = era
            .checked_mul(i64::from(GREGORIAN_CYCLE))?
            .checked_add(year_of_era + i64::from(month <= 2))?;

        Self::from_ymd(
            u16::try_from(year).ok()?,
            u8::try_from(month).ok()?,
            u8::try_from(day).ok()?,
        )
        .ok()
    }

    /// ISO weekday of this date.
    pub fn weekday(&self) -> Weekday {
        let offset = (self.day_number() + EPOCH_WEEKDAY_OFFSET).rem_euclid(DAYS_PER_WEEK as i64);
        Weekday::from_days_from_monday(offset as u8)
    }

    /// The following day, or `None` past 9999-12-31.
    pub fn succ(&self) -> Option<Self> {
        if self.day() < days_in_month(self.year(), self.month()) {
            return Self::from_ymd(self.year(), self.month(), self.day() + 1).ok();
        }
        if self.month() == DECEMBER {
            let year = self.year().checked_add(1)?;
            Self::from_ymd(year, JANUARY, MIN_DAY).ok()
        } else {
            Self::from_ymd(self.year(), self.month() + 1, MIN_DAY).ok()
        }
    }

    /// The preceding day, or `None` before 0001-01-01.
    pub fn pred(&self) -> Option<Self> {
        self.checked_add_days(-1)
    }

    /// Shifts by a signed number of days.
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        Self::from_day_number(self.day_number().checked_add(days)?)
    }

    /// Shifts by whole months, clamping the day to the target month's length.
    pub fn checked_add_months(&self, months: i32) -> Option<Self> {
        let total = (i32::from(self.year()) * 12 + self.month.index()).checked_add(months)?;
        let year = u16::try_from(total.div_euclid(12)).ok()?;
        let month = u8::try_from(total.rem_euclid(12) + 1).ok()?;
        let year_typed = Year::new(year).ok()?;
        let day = self.day().min(days_in_month(year_typed.get(), month));
        Self::from_ymd(year, month, day).ok()
    }

    fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s)",
                parts.len()
            )));
        };

        Self::from_ymd(
            Self::parse_component(year)?,
            Self::parse_component(month)?,
            Self::parse_component(day)?,
        )
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
