// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deterministic stand-in for a booking backend.
//!
//! Every day has between 1 and 10 of 15 units free, derived from the date so
//! that repeated runs agree. Prices follow `DynamicPricing`. Dates may be
//! marked booked, and months may be marked as failing to simulate outages.

use crate::error::ProviderError;
use crate::provider::AvailabilityProvider;
use std::collections::{BTreeMap, BTreeSet};
use stay_calendar_domain::{
    AvailabilityEntry, AvailabilitySnapshot, DateKey, DomainError, DynamicPricing, RoomType,
    StatusThresholds, YearMonth,
};

/// Room categories offered by the simulated backend.
#[must_use]
pub fn simulated_room_types() -> Vec<RoomType> {
    vec![
        RoomType::new("single", "Single Room", 850, 5),
        RoomType::new("shared", "Shared Room", 550, 8),
        RoomType::new("studio", "Studio", 1200, 2),
    ]
}

/// Simulated availability and pricing backend.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedProvider {
    total_units: u32,
    pricing: DynamicPricing,
    thresholds: StatusThresholds,
    booked: BTreeSet<DateKey>,
    failing_months: BTreeSet<YearMonth>,
}

impl SimulatedProvider {
    /// Units per day in the simulated property.
    pub const TOTAL_UNITS: u32 = 15;

    /// Creates a provider pricing around `base_price`.
    #[must_use]
    pub const fn new(base_price: u64) -> Self {
        Self {
            total_units: Self::TOTAL_UNITS,
            pricing: DynamicPricing::new(base_price),
            thresholds: StatusThresholds::STANDARD,
            booked: BTreeSet::new(),
            failing_months: BTreeSet::new(),
        }
    }

    /// Uses `thresholds` to band availability.
    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: StatusThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Marks dates as fully booked.
    #[must_use]
    pub fn with_booked<I>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = DateKey>,
    {
        self.booked.extend(dates);
        self
    }

    /// Makes every fetch for `month` fail.
    #[must_use]
    pub fn with_failing_month(mut self, month: YearMonth) -> Self {
        self.failing_months.insert(month);
        self
    }

    /// Free units on `date`, before bookings are applied.
    #[must_use]
    pub fn units_for(&self, date: DateKey) -> u32 {
        let spread: u32 = date
            .date()
            .to_julian_day()
            .wrapping_mul(7)
            .rem_euclid(10)
            .unsigned_abs();
        (spread + 1).min(self.total_units)
    }

    fn check_month(&self, month: YearMonth) -> Result<Vec<DateKey>, ProviderError> {
        if self.failing_months.contains(&month) {
            return Err(ProviderError::Unavailable {
                month,
                reason: String::from("simulated outage"),
            });
        }
        month.days().map_err(|err: DomainError| ProviderError::Malformed {
            month,
            reason: err.to_string(),
        })
    }
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new(850)
    }
}

impl AvailabilityProvider for SimulatedProvider {
    fn get_availability(&self, month: YearMonth) -> Result<AvailabilitySnapshot, ProviderError> {
        let mut snapshot: AvailabilitySnapshot = AvailabilitySnapshot::new();
        for date in self.check_month(month)? {
            let entry: AvailabilityEntry =
                AvailabilityEntry::new(self.units_for(date), self.total_units, &self.thresholds)
                    .map_err(|err| ProviderError::Malformed {
                        month,
                        reason: err.to_string(),
                    })?;
            snapshot.insert(date, entry);
        }
        Ok(snapshot.with_booked_dates(self.booked.iter().copied().filter(|d| month.contains(*d))))
    }

    fn get_prices(&self, month: YearMonth) -> Result<BTreeMap<DateKey, i64>, ProviderError> {
        let mut prices: BTreeMap<DateKey, i64> = BTreeMap::new();
        for date in self.check_month(month)? {
            let units: u32 = if self.booked.contains(&date) {
                0
            } else {
                self.units_for(date)
            };
            let price: u64 = self.pricing.price_for_night(date, units);
            prices.insert(date, i64::try_from(price).unwrap_or(i64::MAX));
        }
        Ok(prices)
    }
}
