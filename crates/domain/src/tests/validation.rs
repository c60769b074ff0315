// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AvailabilityEntry, AvailabilityLookup, AvailabilitySnapshot, BookingPolicy, DateAvailability,
    DateKey, DomainError, PriceTable, StayBound, nights_between, validate_not_past,
    validate_priced, validate_range, validate_stay_length,
};

fn date(value: &str) -> DateKey {
    DateKey::parse(value).unwrap()
}

/// Availability that knows nothing about one month.
struct PartiallyLoaded {
    loaded: AvailabilitySnapshot,
}

impl AvailabilityLookup for PartiallyLoaded {
    fn availability_of(&self, day: DateKey) -> DateAvailability {
        if day.year_month().month_number() == 10 {
            DateAvailability::Unknown
        } else {
            self.loaded.availability_of(day)
        }
    }
}

#[test]
fn test_nights_between_excludes_checkout() {
    assert_eq!(nights_between(date("2024-09-01"), date("2024-09-10")), 9);
    assert_eq!(nights_between(date("2024-09-01"), date("2024-09-01")), 0);
    assert_eq!(nights_between(date("2024-09-10"), date("2024-09-01")), -9);
}

#[test]
fn test_nights_between_across_year() {
    assert_eq!(nights_between(date("2024-12-30"), date("2025-01-02")), 3);
}

#[test]
fn test_valid_range_returns_nights() {
    let result: Result<i64, DomainError> = validate_range(
        date("2024-09-01"),
        date("2024-09-10"),
        &BookingPolicy::default(),
        &AvailabilitySnapshot::new(),
    );
    assert_eq!(result, Ok(9));
}

#[test]
fn test_checkout_equal_to_checkin_is_invalid_range() {
    let result: Result<i64, DomainError> = validate_range(
        date("2024-09-05"),
        date("2024-09-05"),
        &BookingPolicy::default(),
        &AvailabilitySnapshot::new(),
    );
    assert_eq!(
        result,
        Err(DomainError::InvalidRange {
            check_in: date("2024-09-05"),
            check_out: date("2024-09-05"),
        })
    );
}

#[test]
fn test_checkout_before_checkin_is_invalid_range() {
    let result: Result<i64, DomainError> = validate_range(
        date("2024-09-05"),
        date("2024-09-01"),
        &BookingPolicy::default(),
        &AvailabilitySnapshot::new(),
    );
    assert!(matches!(result, Err(DomainError::InvalidRange { .. })));
}

#[test]
fn test_minimum_stay_boundary() {
    let policy: BookingPolicy = BookingPolicy::new(30, 365).unwrap();
    let snapshot: AvailabilitySnapshot = AvailabilitySnapshot::new();

    let short: Result<i64, DomainError> =
        validate_range(date("2024-09-01"), date("2024-09-30"), &policy, &snapshot);
    assert_eq!(
        short,
        Err(DomainError::StayPolicyViolation {
            bound: StayBound::Minimum,
            nights: 29,
            limit: 30,
        })
    );

    let exact: Result<i64, DomainError> =
        validate_range(date("2024-09-01"), date("2024-10-01"), &policy, &snapshot);
    assert_eq!(exact, Ok(30));
}

#[test]
fn test_maximum_stay_boundary() {
    let policy: BookingPolicy = BookingPolicy::new(1, 7).unwrap();
    let snapshot: AvailabilitySnapshot = AvailabilitySnapshot::new();

    assert_eq!(
        validate_range(date("2024-09-01"), date("2024-09-08"), &policy, &snapshot),
        Ok(7)
    );
    assert_eq!(
        validate_range(date("2024-09-01"), date("2024-09-09"), &policy, &snapshot),
        Err(DomainError::StayPolicyViolation {
            bound: StayBound::Maximum,
            nights: 8,
            limit: 7,
        })
    );
}

#[test]
fn test_unavailable_night_is_named() {
    let mut snapshot: AvailabilitySnapshot = AvailabilitySnapshot::new();
    snapshot.insert(date("2024-09-07"), AvailabilityEntry::sold_out(15));

    let result: Result<i64, DomainError> = validate_range(
        date("2024-09-05"),
        date("2024-09-10"),
        &BookingPolicy::default(),
        &snapshot,
    );
    assert_eq!(result, Err(DomainError::UnavailableDate(date("2024-09-07"))));
}

#[test]
fn test_first_conflicting_night_is_named() {
    let snapshot: AvailabilitySnapshot = AvailabilitySnapshot::new()
        .with_booked_dates([date("2024-09-08"), date("2024-09-06")]);

    let result: Result<i64, DomainError> = validate_range(
        date("2024-09-05"),
        date("2024-09-10"),
        &BookingPolicy::default(),
        &snapshot,
    );
    assert_eq!(result, Err(DomainError::UnavailableDate(date("2024-09-06"))));
}

#[test]
fn test_unavailable_checkout_date_is_not_checked() {
    // The departure day is not a night of the stay.
    let snapshot: AvailabilitySnapshot =
        AvailabilitySnapshot::new().with_booked_dates([date("2024-09-10")]);

    let result: Result<i64, DomainError> = validate_range(
        date("2024-09-05"),
        date("2024-09-10"),
        &BookingPolicy::default(),
        &snapshot,
    );
    assert_eq!(result, Ok(5));
}

#[test]
fn test_policy_checked_before_availability() {
    let snapshot: AvailabilitySnapshot =
        AvailabilitySnapshot::new().with_booked_dates([date("2024-09-02")]);
    let policy: BookingPolicy = BookingPolicy::new(30, 365).unwrap();

    let result: Result<i64, DomainError> =
        validate_range(date("2024-09-01"), date("2024-09-05"), &policy, &snapshot);
    assert!(matches!(
        result,
        Err(DomainError::StayPolicyViolation {
            bound: StayBound::Minimum,
            ..
        })
    ));
}

#[test]
fn test_unknown_availability_is_not_permissive() {
    let lookup: PartiallyLoaded = PartiallyLoaded {
        loaded: AvailabilitySnapshot::new(),
    };

    let result: Result<i64, DomainError> = validate_range(
        date("2024-09-28"),
        date("2024-10-03"),
        &BookingPolicy::default(),
        &lookup,
    );
    assert_eq!(
        result,
        Err(DomainError::AvailabilityUnknown(date("2024-10-01")))
    );
}

#[test]
fn test_validate_stay_length_directly() {
    let policy: BookingPolicy = BookingPolicy::new(3, 5).unwrap();
    assert!(validate_stay_length(3, &policy).is_ok());
    assert!(validate_stay_length(5, &policy).is_ok());
    assert!(validate_stay_length(2, &policy).is_err());
    assert!(validate_stay_length(6, &policy).is_err());
}

#[test]
fn test_validate_not_past() {
    let today: DateKey = date("2024-09-05");
    assert!(validate_not_past(date("2024-09-05"), today).is_ok());
    assert!(validate_not_past(date("2024-09-06"), today).is_ok());
    assert_eq!(
        validate_not_past(date("2024-09-04"), today),
        Err(DomainError::PastDate {
            date: date("2024-09-04"),
            today,
        })
    );
}

#[test]
fn test_validate_priced() {
    let prices: PriceTable = PriceTable::load([
        (date("2024-09-01"), 850),
        (date("2024-09-02"), 850),
        (date("2024-09-04"), 900),
    ])
    .unwrap();

    assert!(validate_priced(date("2024-09-01"), date("2024-09-03"), &prices).is_ok());
    assert_eq!(
        validate_priced(date("2024-09-01"), date("2024-09-05"), &prices),
        Err(DomainError::UnpricedDate(date("2024-09-03")))
    );
}
