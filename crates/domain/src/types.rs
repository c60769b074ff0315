// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::macros::format_description;
use time::{Date, Month, Weekday};

/// A calendar date at day granularity, used as a lookup key.
///
/// The text form is ISO `YYYY-MM-DD`. Two keys are equal iff they share
/// year, month and day; there is no time or offset component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(Date);

impl DateKey {
    /// Wraps a `time::Date`.
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self(date)
    }

    /// Creates a key from calendar components.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParseError` if the components do not form a real date.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, DomainError> {
        let month_value: Month =
            Month::try_from(month).map_err(|err| DomainError::DateParseError {
                date_string: format!("{year:04}-{month:02}-{day:02}"),
                error: err.to_string(),
            })?;
        Date::from_calendar_date(year, month_value, day)
            .map(Self)
            .map_err(|err| DomainError::DateParseError {
                date_string: format!("{year:04}-{month:02}-{day:02}"),
                error: err.to_string(),
            })
    }

    /// Parses an ISO `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParseError` if the string is not a valid date.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
            .map(Self)
            .map_err(|err| DomainError::DateParseError {
                date_string: value.to_string(),
                error: err.to_string(),
            })
    }

    /// Returns the underlying date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.0
    }

    /// Returns the following calendar day.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` at the end of the supported range.
    pub fn next_day(&self) -> Result<Self, DomainError> {
        self.0
            .next_day()
            .map(Self)
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("advancing past {self}"),
            })
    }

    /// Returns the month containing this date.
    #[must_use]
    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.0.year(),
            month: u8::from(self.0.month()),
        }
    }

    /// Returns the day of the week.
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns whether this date falls on a Saturday or Sunday.
    #[must_use]
    pub const fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Saturday | Weekday::Sunday)
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl FromStr for DateKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateKey> for String {
    fn from(value: DateKey) -> Self {
        value.to_string()
    }
}

impl From<Date> for DateKey {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

/// A calendar month, the unit in which availability and prices are loaded.
///
/// The text form is `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    /// 1-based month number.
    month: u8,
}

impl YearMonth {
    /// Creates a year-month from a `time::Month`.
    #[must_use]
    pub fn new(year: i32, month: Month) -> Self {
        Self {
            year,
            month: u8::from(month),
        }
    }

    /// Creates a year-month from a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidYearMonth` if `month` is not in `1..=12`.
    pub fn from_numbers(year: i32, month: u8) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidYearMonth(format!(
                "month {month} is not between 1 and 12"
            )));
        }
        Ok(Self { year, month })
    }

    /// Parses a `YYYY-MM` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidYearMonth` if the string is malformed.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        let (year, month) = trimmed
            .rsplit_once('-')
            .ok_or_else(|| DomainError::InvalidYearMonth(format!("'{value}' is not YYYY-MM")))?;
        let year: i32 = year
            .parse()
            .map_err(|_| DomainError::InvalidYearMonth(format!("'{value}' has an invalid year")))?;
        let month: u8 = month
            .parse()
            .map_err(|_| DomainError::InvalidYearMonth(format!("'{value}' has an invalid month")))?;
        Self::from_numbers(year, month)
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the 1-based month number.
    #[must_use]
    pub const fn month_number(&self) -> u8 {
        self.month
    }

    /// Returns the month.
    #[must_use]
    pub fn month(&self) -> Month {
        Month::try_from(self.month).unwrap_or(Month::January)
    }

    /// Returns the first day of the month.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the year is outside the supported range.
    pub fn first_day(&self) -> Result<DateKey, DomainError> {
        Date::from_calendar_date(self.year, self.month(), 1)
            .map(DateKey)
            .map_err(|_| DomainError::DateArithmeticOverflow {
                operation: format!("locating the first day of {self}"),
            })
    }

    /// Returns the last day of the month.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the year is outside the supported range.
    pub fn last_day(&self) -> Result<DateKey, DomainError> {
        (28..=31)
            .rev()
            .find_map(|day| Date::from_calendar_date(self.year, self.month(), day).ok())
            .map(DateKey)
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("locating the last day of {self}"),
            })
    }

    /// Returns every day of the month in order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the year is outside the supported range.
    pub fn days(&self) -> Result<Vec<DateKey>, DomainError> {
        let first: DateKey = self.first_day()?;
        let last: DateKey = self.last_day()?;
        let mut days: Vec<DateKey> = Vec::with_capacity(31);
        let mut current: DateKey = first;
        while current <= last {
            days.push(current);
            if current == last {
                break;
            }
            current = current.next_day()?;
        }
        Ok(days)
    }

    /// Returns whether `date` falls inside this month.
    #[must_use]
    pub fn contains(&self, date: DateKey) -> bool {
        date.year_month() == *self
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

/// Which end of a stay policy a request violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StayBound {
    /// The stay is shorter than the minimum.
    Minimum,
    /// The stay is longer than the maximum.
    Maximum,
}

/// Minimum and maximum permitted stay length, in nights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingPolicy {
    min_stay_nights: u32,
    max_stay_nights: u32,
}

impl BookingPolicy {
    /// Longest stay accepted when no booking type narrows it.
    pub const DEFAULT_MAX_STAY_NIGHTS: u32 = 365;

    /// Creates a validated booking policy.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBookingPolicy` if the minimum is zero or
    /// exceeds the maximum.
    pub const fn new(min_stay_nights: u32, max_stay_nights: u32) -> Result<Self, DomainError> {
        if min_stay_nights == 0 || max_stay_nights < min_stay_nights {
            return Err(DomainError::InvalidBookingPolicy {
                min_stay_nights,
                max_stay_nights,
            });
        }
        Ok(Self {
            min_stay_nights,
            max_stay_nights,
        })
    }

    /// Returns the minimum stay in nights.
    #[must_use]
    pub const fn min_stay_nights(&self) -> u32 {
        self.min_stay_nights
    }

    /// Returns the maximum stay in nights.
    #[must_use]
    pub const fn max_stay_nights(&self) -> u32 {
        self.max_stay_nights
    }
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            min_stay_nights: 1,
            max_stay_nights: Self::DEFAULT_MAX_STAY_NIGHTS,
        }
    }
}

/// The kind of stay being booked.
///
/// Each kind carries its own minimum stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BookingType {
    /// A full academic semester.
    #[default]
    Semester,
    /// A month-by-month stay.
    Monthly,
    /// A stay of a few nights.
    ShortTerm,
}

impl BookingType {
    /// Parses a booking type name (`semester`, `monthly`, `short-term`).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBookingType` for unknown names.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "semester" => Ok(Self::Semester),
            "monthly" => Ok(Self::Monthly),
            "short-term" | "short_term" | "shortterm" => Ok(Self::ShortTerm),
            _ => Err(DomainError::InvalidBookingType(value.to_string())),
        }
    }

    /// Converts this booking type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Semester => "semester",
            Self::Monthly => "monthly",
            Self::ShortTerm => "short-term",
        }
    }

    /// Minimum number of nights for this booking type.
    #[must_use]
    pub const fn min_stay_nights(&self) -> u32 {
        match self {
            Self::Semester => 60,
            Self::Monthly => 30,
            Self::ShortTerm => 3,
        }
    }

    /// The stay policy implied by this booking type.
    #[must_use]
    pub const fn policy(&self) -> BookingPolicy {
        BookingPolicy {
            min_stay_nights: self.min_stay_nights(),
            max_stay_nights: BookingPolicy::DEFAULT_MAX_STAY_NIGHTS,
        }
    }
}

impl std::fmt::Display for BookingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A bookable room category and its list price.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomType {
    /// Stable identifier (e.g., "single").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price charged for a night with no explicit price.
    pub base_price: u64,
    /// Rooms of this type currently free.
    pub available: u32,
}

impl RoomType {
    /// Creates a new `RoomType`.
    #[must_use]
    pub fn new(id: &str, name: &str, base_price: u64, available: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            base_price,
            available,
        }
    }
}
