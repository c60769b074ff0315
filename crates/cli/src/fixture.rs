// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability and prices read from a JSON file.
//!
//! ```json
//! {
//!   "availability": { "2024-09-01": { "available_units": 4, "total_units": 15 } },
//!   "prices": { "2024-09-01": 850 },
//!   "allowlist": [],
//!   "booked": ["2024-09-07"]
//! }
//! ```
//!
//! Every key is optional. Dates without an entry are open.

use color_eyre::{Result, eyre::Context};
use serde::Deserialize;
use stay_calendar::{AvailabilityProvider, ProviderError};
use std::collections::BTreeMap;
use std::path::Path;
use stay_calendar_domain::{
    AvailabilityEntry, AvailabilitySnapshot, DateKey, StatusThresholds, YearMonth,
};

/// Unit counts as written in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureEntry {
    pub available_units: u32,
    pub total_units: u32,
}

/// Parsed fixture file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    #[serde(default)]
    pub availability: BTreeMap<DateKey, FixtureEntry>,
    #[serde(default)]
    pub prices: BTreeMap<DateKey, i64>,
    #[serde(default)]
    pub allowlist: Vec<DateKey>,
    #[serde(default)]
    pub booked: Vec<DateKey>,
}

/// Serves a [`Fixture`] one month at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureProvider {
    fixture: Fixture,
    thresholds: StatusThresholds,
}

impl FixtureProvider {
    pub fn new(fixture: Fixture) -> Self {
        Self {
            fixture,
            thresholds: StatusThresholds::default(),
        }
    }

    /// Reads and parses the fixture at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw: String = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read fixture {}", path.display()))?;
        Self::from_json(&raw).wrap_err_with(|| format!("Invalid fixture {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let fixture: Fixture = serde_json::from_str(raw).wrap_err("Failed to parse fixture")?;
        Ok(Self::new(fixture))
    }
}

impl AvailabilityProvider for FixtureProvider {
    fn get_availability(&self, month: YearMonth) -> Result<AvailabilitySnapshot, ProviderError> {
        let mut snapshot: AvailabilitySnapshot = AvailabilitySnapshot::new();
        for (date, raw) in self
            .fixture
            .availability
            .iter()
            .filter(|(date, _)| month.contains(**date))
        {
            let entry: AvailabilityEntry =
                AvailabilityEntry::new(raw.available_units, raw.total_units, &self.thresholds)
                    .map_err(|err| ProviderError::Malformed {
                        month,
                        reason: format!("{date}: {err}"),
                    })?;
            snapshot.insert(*date, entry);
        }

        // The allowlist is global; narrowing it to the month would turn an
        // empty slice into "everything open".
        Ok(snapshot
            .with_allowlist(self.fixture.allowlist.iter().copied())
            .with_booked_dates(
                self.fixture
                    .booked
                    .iter()
                    .copied()
                    .filter(|date| month.contains(*date)),
            ))
    }

    fn get_prices(&self, month: YearMonth) -> Result<BTreeMap<DateKey, i64>, ProviderError> {
        Ok(self
            .fixture
            .prices
            .iter()
            .filter(|(date, _)| month.contains(**date))
            .map(|(date, price)| (*date, *price))
            .collect())
    }
}
