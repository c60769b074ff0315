// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-date availability.
//!
//! Availability is answered from two sources:
//! - An explicit allowlist of bookable dates. When present and non-empty it
//!   is closed: only listed dates are bookable.
//! - Otherwise a map of unit counts per date. A date with no entry is
//!   bookable; a date with an entry is bookable when it has units left.
//!
//! The open default for missing entries only applies to data that loaded.
//! A month whose load failed answers `DateAvailability::Unknown`.

use crate::error::DomainError;
use crate::types::DateKey;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Coarse remaining-capacity band for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    /// Plenty of units left.
    High,
    /// A handful of units left.
    Medium,
    /// Nearly sold out.
    Low,
    /// Sold out.
    None,
}

impl AvailabilityStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unit-count cut-offs between availability bands.
///
/// `0` is always `None`; `1..=low_max` is `Low`; `..=medium_max` is
/// `Medium`; anything above is `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusThresholds {
    /// Highest unit count still reported as `Low`.
    pub low_max: u32,
    /// Highest unit count still reported as `Medium`.
    pub medium_max: u32,
}

impl StatusThresholds {
    /// Bands used when a backend supplies no thresholds of its own.
    pub const STANDARD: Self = Self {
        low_max: 2,
        medium_max: 5,
    };

    /// Classifies a unit count.
    #[must_use]
    pub const fn status_for(&self, available_units: u32) -> AvailabilityStatus {
        if available_units == 0 {
            AvailabilityStatus::None
        } else if available_units <= self.low_max {
            AvailabilityStatus::Low
        } else if available_units <= self.medium_max {
            AvailabilityStatus::Medium
        } else {
            AvailabilityStatus::High
        }
    }
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Classifies a unit count with the default thresholds.
#[must_use]
pub fn status_for(available_units: u32) -> AvailabilityStatus {
    StatusThresholds::default().status_for(available_units)
}

/// Unit counts for a single date.
///
/// Entries are only built through `new`, so `available_units` never exceeds
/// `total_units` and the status agrees with the unit count. Deserialized
/// entries go through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAvailabilityEntry")]
pub struct AvailabilityEntry {
    available_units: u32,
    total_units: u32,
    status: AvailabilityStatus,
}

/// Wire form of an `AvailabilityEntry` before validation.
///
/// A missing status is derived with `StatusThresholds::STANDARD`. A supplied
/// status is kept so entries banded with other thresholds survive a round
/// trip, but it must still agree on sold out versus not.
#[derive(Debug, Deserialize)]
struct RawAvailabilityEntry {
    available_units: u32,
    total_units: u32,
    #[serde(default)]
    status: Option<AvailabilityStatus>,
}

impl TryFrom<RawAvailabilityEntry> for AvailabilityEntry {
    type Error = DomainError;

    fn try_from(raw: RawAvailabilityEntry) -> Result<Self, Self::Error> {
        let mut entry: Self =
            Self::new(raw.available_units, raw.total_units, &StatusThresholds::STANDARD)?;
        if let Some(status) = raw.status {
            let sold_out: bool = status == AvailabilityStatus::None;
            if sold_out == entry.has_units() {
                return Err(DomainError::InconsistentAvailabilityStatus {
                    available_units: raw.available_units,
                    status: status.as_str().to_string(),
                });
            }
            entry.status = status;
        }
        Ok(entry)
    }
}

impl AvailabilityEntry {
    /// Creates an entry, deriving its status from `thresholds`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAvailabilityEntry` if `available_units`
    /// exceeds `total_units`.
    pub const fn new(
        available_units: u32,
        total_units: u32,
        thresholds: &StatusThresholds,
    ) -> Result<Self, DomainError> {
        if available_units > total_units {
            return Err(DomainError::InvalidAvailabilityEntry {
                available_units,
                total_units,
            });
        }
        Ok(Self {
            available_units,
            total_units,
            status: thresholds.status_for(available_units),
        })
    }

    /// Units still free on this date.
    #[must_use]
    pub const fn available_units(&self) -> u32 {
        self.available_units
    }

    /// Units in existence on this date.
    #[must_use]
    pub const fn total_units(&self) -> u32 {
        self.total_units
    }

    /// Band derived from the free unit count.
    #[must_use]
    pub const fn status(&self) -> AvailabilityStatus {
        self.status
    }

    /// An entry with no units left.
    #[must_use]
    pub const fn sold_out(total_units: u32) -> Self {
        Self {
            available_units: 0,
            total_units,
            status: AvailabilityStatus::None,
        }
    }

    /// Returns whether any units are left.
    #[must_use]
    pub const fn has_units(&self) -> bool {
        self.available_units > 0
    }
}

/// Answer to "can this date be booked?" when data may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateAvailability {
    /// The date can be booked.
    Available,
    /// The date cannot be booked.
    Unavailable,
    /// No data could be loaded for the date.
    Unknown,
}

/// Source of availability answers for validation.
pub trait AvailabilityLookup {
    /// Returns the availability of `date`.
    fn availability_of(&self, date: DateKey) -> DateAvailability;
}

/// Checks a date against an entries map and an optional allowlist.
///
/// A non-empty allowlist decides on its own. Without one, a date with no
/// entry is available and a date with an entry needs at least one unit.
#[must_use]
pub fn is_available(
    date: DateKey,
    availability: &BTreeMap<DateKey, AvailabilityEntry>,
    allowlist: Option<&BTreeSet<DateKey>>,
) -> bool {
    if let Some(allowed) = allowlist.filter(|allowed| !allowed.is_empty()) {
        return allowed.contains(&date);
    }
    availability
        .get(&date)
        .is_none_or(AvailabilityEntry::has_units)
}

/// Availability data for one loaded month (or any set of dates).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySnapshot {
    entries: BTreeMap<DateKey, AvailabilityEntry>,
    allowlist: BTreeSet<DateKey>,
}

impl AvailabilitySnapshot {
    /// Creates an empty snapshot: every date is available.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            allowlist: BTreeSet::new(),
        }
    }

    /// Restricts bookable dates to `allowlist`.
    ///
    /// An empty allowlist leaves the open default in place.
    #[must_use]
    pub fn with_allowlist<I>(mut self, allowlist: I) -> Self
    where
        I: IntoIterator<Item = DateKey>,
    {
        self.allowlist = allowlist.into_iter().collect();
        self
    }

    /// Marks dates as fully booked, keeping any known total.
    #[must_use]
    pub fn with_booked_dates<I>(mut self, booked: I) -> Self
    where
        I: IntoIterator<Item = DateKey>,
    {
        for date in booked {
            let total_units: u32 = self.entries.get(&date).map_or(0, AvailabilityEntry::total_units);
            self.entries
                .insert(date, AvailabilityEntry::sold_out(total_units));
        }
        self
    }

    /// Inserts or replaces the entry for `date`.
    pub fn insert(&mut self, date: DateKey, entry: AvailabilityEntry) {
        self.entries.insert(date, entry);
    }

    /// Returns the entry for `date`, if one was supplied.
    #[must_use]
    pub fn entry(&self, date: DateKey) -> Option<&AvailabilityEntry> {
        self.entries.get(&date)
    }

    /// Returns all entries.
    #[must_use]
    pub const fn entries(&self) -> &BTreeMap<DateKey, AvailabilityEntry> {
        &self.entries
    }

    /// Returns the allowlist (empty when not in use).
    #[must_use]
    pub const fn allowlist(&self) -> &BTreeSet<DateKey> {
        &self.allowlist
    }

    /// Returns whether `date` can be booked.
    #[must_use]
    pub fn is_available(&self, date: DateKey) -> bool {
        is_available(date, &self.entries, Some(&self.allowlist))
    }
}

impl AvailabilityLookup for AvailabilitySnapshot {
    fn availability_of(&self, date: DateKey) -> DateAvailability {
        if self.is_available(date) {
            DateAvailability::Available
        } else {
            DateAvailability::Unavailable
        }
    }
}
