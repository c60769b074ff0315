// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Nightly prices and stay totals.
//!
//! Prices are whole currency units. Negative prices are rejected once, when
//! a provider's price list is loaded into a `PriceTable`; lookups and totals
//! never see them.
//!
//! A stay is charged for every night in `[check_in, check_out)`. The
//! check-out date itself is not charged.

use crate::error::DomainError;
use crate::types::{BookingType, DateKey};
use crate::validation::nights_between;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Source of per-date prices.
pub trait PriceLookup {
    /// Returns the price stored for `date`, if any.
    fn price_of(&self, date: DateKey) -> Option<u64>;
}

/// Validated nightly prices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    prices: BTreeMap<DateKey, u64>,
}

impl PriceTable {
    /// Loads raw provider prices.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` for the first negative price.
    pub fn load<I>(raw: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (DateKey, i64)>,
    {
        let mut prices: BTreeMap<DateKey, u64> = BTreeMap::new();
        for (date, price) in raw {
            let price: u64 =
                u64::try_from(price).map_err(|_| DomainError::InvalidPrice { date, price })?;
            prices.insert(date, price);
        }
        Ok(Self { prices })
    }
}

impl PriceLookup for PriceTable {
    fn price_of(&self, date: DateKey) -> Option<u64> {
        self.prices.get(&date).copied()
    }
}

/// Returns the stored price for `date`, or `base_price` when none is stored.
#[must_use]
pub fn price_for<P: PriceLookup + ?Sized>(date: DateKey, prices: &P, base_price: u64) -> u64 {
    prices.price_of(date).unwrap_or(base_price)
}

/// Iterates over the nights of a stay, `[check_in, check_out)`.
///
/// Yields nothing for an empty or inverted range.
pub fn stay_nights(check_in: DateKey, check_out: DateKey) -> impl Iterator<Item = DateKey> {
    std::iter::successors(
        (check_in < check_out).then_some(check_in),
        move |current| current.next_day().ok().filter(|next| *next < check_out),
    )
}

/// Sums the nightly prices of a stay.
///
/// Returns 0 when either end is missing, the range is empty or inverted, or
/// there is no price table at all.
#[must_use]
pub fn compute_total<P: PriceLookup + ?Sized>(
    check_in: Option<DateKey>,
    check_out: Option<DateKey>,
    prices: Option<&P>,
    base_price: u64,
) -> u64 {
    let (Some(check_in), Some(check_out), Some(prices)) = (check_in, check_out, prices) else {
        return 0;
    };
    stay_nights(check_in, check_out)
        .map(|night| price_for(night, prices, base_price))
        .fold(0_u64, u64::saturating_add)
}

/// Weekend and demand multipliers applied to a base nightly price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DynamicPricing {
    /// Price before multipliers.
    pub base_price: u64,
    /// Multiplier for Saturday and Sunday nights.
    pub weekend_multiplier: f64,
    /// Multiplier when fewer than 3 units are left.
    pub scarce_multiplier: f64,
    /// Multiplier when fewer than 6 units are left.
    pub limited_multiplier: f64,
}

impl DynamicPricing {
    /// Creates pricing with the standard multipliers around `base_price`.
    #[must_use]
    pub const fn new(base_price: u64) -> Self {
        Self {
            base_price,
            weekend_multiplier: 1.2,
            scarce_multiplier: 1.3,
            limited_multiplier: 1.1,
        }
    }

    /// Prices one night given how many units are left.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn price_for_night(&self, date: DateKey, available_units: u32) -> u64 {
        let weekend: f64 = if date.is_weekend() {
            self.weekend_multiplier
        } else {
            1.0
        };
        let demand: f64 = if available_units < 3 {
            self.scarce_multiplier
        } else if available_units < 6 {
            self.limited_multiplier
        } else {
            1.0
        };
        (self.base_price as f64 * weekend * demand).round().max(0.0) as u64
    }
}

/// Prices a stay from a single per-term list price instead of nightly rates.
///
/// - Semester: the term price, whatever the length.
/// - Monthly: a quarter of the term price per started 30-night month.
/// - Short-term: 1/120 of the term price per night.
///
/// The result is rounded to whole units. Non-positive night counts cost nothing.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn term_rate_total(booking_type: BookingType, term_price: u64, nights: i64) -> u64 {
    if nights <= 0 {
        return 0;
    }
    let term: f64 = term_price as f64;
    let total: f64 = match booking_type {
        BookingType::Semester => term,
        BookingType::Monthly => {
            let months: i64 = (nights + 29) / 30;
            term / 4.0 * months as f64
        }
        BookingType::ShortTerm => term / 120.0 * nights as f64,
    };
    total.round() as u64
}

/// Total for a stay together with its length, as handed to the payment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayQuote {
    /// First night.
    pub check_in: DateKey,
    /// Departure date (not charged).
    pub check_out: DateKey,
    /// Number of nights charged.
    pub nights: i64,
    /// Sum of nightly prices.
    pub total_price: u64,
}

impl StayQuote {
    /// Builds a quote for a stay.
    #[must_use]
    pub fn new<P: PriceLookup + ?Sized>(
        check_in: DateKey,
        check_out: DateKey,
        prices: Option<&P>,
        base_price: u64,
    ) -> Self {
        Self {
            check_in,
            check_out,
            nights: nights_between(check_in, check_out).max(0),
            total_price: compute_total(Some(check_in), Some(check_out), prices, base_price),
        }
    }
}
