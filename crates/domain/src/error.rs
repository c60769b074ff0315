// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{DateKey, StayBound};

/// Errors that can occur during calendar validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Check-out is not strictly after check-in.
    InvalidRange {
        /// The requested check-in date.
        check_in: DateKey,
        /// The requested check-out date.
        check_out: DateKey,
    },
    /// The number of nights falls outside the stay policy.
    StayPolicyViolation {
        /// Which bound of the policy was violated.
        bound: StayBound,
        /// The number of nights requested.
        nights: i64,
        /// The limit that was violated.
        limit: u32,
    },
    /// A date inside the requested range cannot be booked.
    UnavailableDate(DateKey),
    /// A date inside the requested range has no loaded availability data.
    AvailabilityUnknown(DateKey),
    /// A provider supplied a negative price.
    InvalidPrice {
        /// The date the price was supplied for.
        date: DateKey,
        /// The rejected price.
        price: i64,
    },
    /// A date inside the requested range has no price and prices are mandatory.
    UnpricedDate(DateKey),
    /// A date lies before the reference "today".
    PastDate {
        /// The rejected date.
        date: DateKey,
        /// The reference date.
        today: DateKey,
    },
    /// Available units exceed total units.
    InvalidAvailabilityEntry {
        /// The available unit count.
        available_units: u32,
        /// The total unit count.
        total_units: u32,
    },
    /// A supplied status disagrees with the unit count about being sold out.
    InconsistentAvailabilityStatus {
        /// The available unit count.
        available_units: u32,
        /// The supplied status.
        status: String,
    },
    /// Minimum stay is zero or exceeds the maximum.
    InvalidBookingPolicy {
        /// The requested minimum stay in nights.
        min_stay_nights: u32,
        /// The requested maximum stay in nights.
        max_stay_nights: u32,
    },
    /// Booking type name is not recognised.
    InvalidBookingType(String),
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a year-month from a string, or the month is out of range.
    InvalidYearMonth(String),
    /// Date arithmetic left the supported calendar range.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Select a valid date range: check-out {check_out} must be after check-in {check_in}"
                )
            }
            Self::StayPolicyViolation {
                bound,
                nights,
                limit,
            } => match bound {
                StayBound::Minimum => write!(
                    f,
                    "Stay of {nights} nights is shorter than the minimum of {limit} nights"
                ),
                StayBound::Maximum => write!(
                    f,
                    "Stay of {nights} nights is longer than the maximum of {limit} nights"
                ),
            },
            Self::UnavailableDate(date) => write!(f, "Date {date} is not available"),
            Self::AvailabilityUnknown(date) => {
                write!(f, "Availability for {date} could not be loaded")
            }
            Self::InvalidPrice { date, price } => {
                write!(f, "Invalid price {price} for {date}: prices must not be negative")
            }
            Self::UnpricedDate(date) => write!(f, "No price is available for {date}"),
            Self::PastDate { date, today } => {
                write!(f, "Date {date} is in the past (today is {today})")
            }
            Self::InvalidAvailabilityEntry {
                available_units,
                total_units,
            } => {
                write!(
                    f,
                    "Invalid availability: {available_units} available units exceeds {total_units} total units"
                )
            }
            Self::InconsistentAvailabilityStatus {
                available_units,
                status,
            } => {
                write!(
                    f,
                    "Invalid availability: status '{status}' does not match {available_units} available units"
                )
            }
            Self::InvalidBookingPolicy {
                min_stay_nights,
                max_stay_nights,
            } => {
                write!(
                    f,
                    "Invalid booking policy: minimum stay {min_stay_nights} must be at least 1 and no more than maximum stay {max_stay_nights}"
                )
            }
            Self::InvalidBookingType(msg) => write!(f, "Invalid booking type: {msg}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidYearMonth(msg) => write!(f, "Invalid year-month: {msg}"),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
