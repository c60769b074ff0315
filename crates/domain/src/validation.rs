// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::availability::{AvailabilityLookup, DateAvailability};
use crate::error::DomainError;
use crate::pricing::{PriceLookup, stay_nights};
use crate::types::{BookingPolicy, DateKey, StayBound};

/// Counts the nights between two dates; check-out is exclusive.
///
/// Negative when `check_out` precedes `check_in`.
#[must_use]
pub fn nights_between(check_in: DateKey, check_out: DateKey) -> i64 {
    (check_out.date() - check_in.date()).whole_days()
}

/// Validates a requested stay.
///
/// Checks run in this order and the first failure is returned:
/// 1. `check_out` must be strictly after `check_in`
/// 2. the night count must lie within the policy bounds
/// 3. every night in `[check_in, check_out)` must be available
///
/// # Returns
///
/// The number of nights on success.
///
/// # Errors
///
/// - `DomainError::InvalidRange` if check-out is not after check-in
/// - `DomainError::StayPolicyViolation` naming the violated bound
/// - `DomainError::UnavailableDate` naming the first booked-out night
/// - `DomainError::AvailabilityUnknown` naming the first night without data
pub fn validate_range<A: AvailabilityLookup + ?Sized>(
    check_in: DateKey,
    check_out: DateKey,
    policy: &BookingPolicy,
    availability: &A,
) -> Result<i64, DomainError> {
    if check_out <= check_in {
        return Err(DomainError::InvalidRange {
            check_in,
            check_out,
        });
    }

    let nights: i64 = nights_between(check_in, check_out);
    validate_stay_length(nights, policy)?;

    for night in stay_nights(check_in, check_out) {
        match availability.availability_of(night) {
            DateAvailability::Available => {}
            DateAvailability::Unavailable => return Err(DomainError::UnavailableDate(night)),
            DateAvailability::Unknown => return Err(DomainError::AvailabilityUnknown(night)),
        }
    }

    Ok(nights)
}

/// Checks a night count against a stay policy.
///
/// # Errors
///
/// Returns `DomainError::StayPolicyViolation` naming the violated bound.
pub fn validate_stay_length(nights: i64, policy: &BookingPolicy) -> Result<(), DomainError> {
    if nights < i64::from(policy.min_stay_nights()) {
        return Err(DomainError::StayPolicyViolation {
            bound: StayBound::Minimum,
            nights,
            limit: policy.min_stay_nights(),
        });
    }
    if nights > i64::from(policy.max_stay_nights()) {
        return Err(DomainError::StayPolicyViolation {
            bound: StayBound::Maximum,
            nights,
            limit: policy.max_stay_nights(),
        });
    }
    Ok(())
}

/// Rejects dates before `today`.
///
/// # Errors
///
/// Returns `DomainError::PastDate` if `date` is before `today`.
pub fn validate_not_past(date: DateKey, today: DateKey) -> Result<(), DomainError> {
    if date < today {
        return Err(DomainError::PastDate { date, today });
    }
    Ok(())
}

/// Requires a stored price for every night of a stay.
///
/// # Errors
///
/// Returns `DomainError::UnpricedDate` naming the first night without a price.
pub fn validate_priced<P: PriceLookup + ?Sized>(
    check_in: DateKey,
    check_out: DateKey,
    prices: &P,
) -> Result<(), DomainError> {
    stay_nights(check_in, check_out)
        .find(|night| prices.price_of(*night).is_none())
        .map_or(Ok(()), |night| Err(DomainError::UnpricedDate(night)))
}
