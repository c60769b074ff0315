// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The availability and price source a calendar is built on.
//!
//! The calendar never reaches for data itself. A provider is handed in, and
//! each month fetch is described by a `MonthRequest` so that callers may
//! perform it however they like and report back through `receive_month`.

use crate::error::ProviderError;
use crate::state::{MonthData, PriceLoad, PricingMode};
use std::collections::BTreeMap;
use stay_calendar_domain::{AvailabilitySnapshot, DateKey, PriceTable, YearMonth};
use tracing::warn;

/// Supplies availability and nightly prices one month at a time.
pub trait AvailabilityProvider {
    /// Returns availability for every date of `month` the provider knows about.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` if the data cannot be produced.
    fn get_availability(&self, month: YearMonth) -> Result<AvailabilitySnapshot, ProviderError>;

    /// Returns raw nightly prices for `month`.
    ///
    /// Prices are not validated here; negative values are rejected on load.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` if the data cannot be produced.
    fn get_prices(&self, month: YearMonth) -> Result<BTreeMap<DateKey, i64>, ProviderError>;
}

impl<P: AvailabilityProvider + ?Sized> AvailabilityProvider for &P {
    fn get_availability(&self, month: YearMonth) -> Result<AvailabilitySnapshot, ProviderError> {
        (**self).get_availability(month)
    }

    fn get_prices(&self, month: YearMonth) -> Result<BTreeMap<DateKey, i64>, ProviderError> {
        (**self).get_prices(month)
    }
}

/// Fetches one month from `provider`.
///
/// Availability is required: if it fails the whole month fails. Prices are
/// not: a fetch failure or an invalid price leaves the month loaded without
/// prices.
///
/// # Errors
///
/// Returns the provider's error if availability cannot be fetched.
pub fn load_month<P: AvailabilityProvider + ?Sized>(
    provider: &P,
    month: YearMonth,
    pricing: PricingMode,
) -> Result<MonthData, ProviderError> {
    let availability: AvailabilitySnapshot = provider.get_availability(month)?;

    let prices: PriceLoad = if pricing.is_enabled() {
        match provider.get_prices(month) {
            Ok(raw) => match PriceTable::load(raw) {
                Ok(table) => PriceLoad::Loaded(table),
                Err(err) => {
                    warn!(%month, error = %err, "Rejected price data");
                    PriceLoad::Failed {
                        reason: err.to_string(),
                    }
                }
            },
            Err(err) => {
                warn!(%month, error = %err, "Price fetch failed");
                PriceLoad::Failed {
                    reason: err.to_string(),
                }
            }
        }
    } else {
        PriceLoad::NotRequested
    };

    Ok(MonthData {
        availability,
        prices,
    })
}
