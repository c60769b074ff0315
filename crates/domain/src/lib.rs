// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod error;
mod navigation;
mod pricing;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use availability::{
    AvailabilityEntry, AvailabilityLookup, AvailabilitySnapshot, AvailabilityStatus,
    DateAvailability, StatusThresholds, is_available, status_for,
};
pub use navigation::{DAYS_PER_WEEK, days_in_month, go_to_month, month_grid};
pub use pricing::{
    DynamicPricing, PriceLookup, PriceTable, StayQuote, compute_total, price_for, stay_nights,
    term_rate_total,
};

// Re-export public types
pub use error::DomainError;
pub use types::{BookingPolicy, BookingType, DateKey, RoomType, StayBound, YearMonth};
pub use validation::{
    nights_between, validate_not_past, validate_priced, validate_range, validate_stay_length,
};
