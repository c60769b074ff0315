// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::event::CalendarEvent;
use crate::selection::{ProvisionalRange, SelectionState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stay_calendar_domain::{
    AvailabilityLookup, AvailabilitySnapshot, BookingPolicy, BookingType, DateAvailability,
    DateKey, DomainError, PriceLookup, PriceTable, RoomType, StayQuote, YearMonth, compute_total,
    stay_nights, validate_not_past, validate_priced, validate_range,
};

/// How prices take part in a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PricingMode {
    /// No pricing: prices are not fetched and totals are 0.
    Disabled,
    /// Nights without a stored price cost `base_price`.
    Fallback {
        /// Price for nights without a stored price.
        base_price: u64,
    },
    /// Every night must have a stored price before a range completes.
    Mandatory,
}

impl PricingMode {
    /// Returns whether prices should be fetched at all.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl Default for PricingMode {
    fn default() -> Self {
        Self::Fallback { base_price: 0 }
    }
}

/// Settings fixed for the life of one calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Stay policy used instead of the booking type's own.
    pub policy_override: Option<BookingPolicy>,
    /// How prices take part in a booking.
    pub pricing: PricingMode,
    /// Reference date; earlier dates cannot be picked. `None` disables the check.
    pub today: Option<DateKey>,
}

/// Identifies one outstanding month fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthRequest {
    /// The month to fetch.
    pub month: YearMonth,
    /// Navigation generation at the time of the request.
    pub generation: u64,
}

/// Outcome of loading prices for a month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceLoad {
    /// Prices loaded and validated.
    Loaded(PriceTable),
    /// Pricing is disabled; nothing was fetched.
    NotRequested,
    /// Prices could not be fetched or were invalid.
    Failed {
        /// The failure description.
        reason: String,
    },
}

/// Everything the provider returned for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthData {
    /// Availability for the month.
    pub availability: AvailabilitySnapshot,
    /// Prices for the month.
    pub prices: PriceLoad,
}

impl MonthData {
    /// Returns the price table, if prices loaded.
    #[must_use]
    pub const fn price_table(&self) -> Option<&PriceTable> {
        match &self.prices {
            PriceLoad::Loaded(table) => Some(table),
            PriceLoad::NotRequested | PriceLoad::Failed { .. } => None,
        }
    }
}

/// Load status of one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthLoad {
    /// A fetch is in flight and nothing is known yet.
    Loading,
    /// Data is available.
    Loaded(MonthData),
    /// The fetch failed; availability is unknown.
    Failed {
        /// The failure description.
        reason: String,
    },
}

/// A completed range that failed validation, kept for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRange {
    /// Requested check-in.
    pub check_in: DateKey,
    /// Requested check-out.
    pub check_out: DateKey,
    /// Why it was rejected.
    pub error: DomainError,
}

impl RejectedRange {
    /// Returns whether `date` lies in the attempted range, both ends included.
    #[must_use]
    pub fn contains(&self, date: DateKey) -> bool {
        let first: DateKey = self.check_in.min(self.check_out);
        let last: DateKey = self.check_in.max(self.check_out);
        (first..=last).contains(&date)
    }
}

/// The complete state of one calendar instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    /// The month on screen.
    pub visible_month: YearMonth,
    /// Committed selection.
    pub selection: SelectionState,
    /// Hovered date, for preview only.
    pub hover: Option<DateKey>,
    /// Everything loaded so far, by month.
    pub months: BTreeMap<YearMonth, MonthLoad>,
    /// Bumped on every navigation.
    pub generation: u64,
    /// The fetch whose result will be accepted.
    pub pending: Option<MonthRequest>,
    /// Current booking type.
    pub booking_type: BookingType,
    /// Current room type, if one was picked.
    pub room_type: Option<RoomType>,
    /// Last rejected range, cleared on the next successful click.
    pub rejected: Option<RejectedRange>,
    /// Last validated range and its total.
    pub completed: Option<StayQuote>,
    /// Fixed settings.
    pub config: CalendarConfig,
}

impl CalendarState {
    /// Creates an empty calendar showing `visible_month`.
    ///
    /// Nothing is loaded until the first navigation.
    #[must_use]
    pub const fn new(
        visible_month: YearMonth,
        booking_type: BookingType,
        config: CalendarConfig,
    ) -> Self {
        Self {
            visible_month,
            selection: SelectionState::new(),
            hover: None,
            months: BTreeMap::new(),
            generation: 0,
            pending: None,
            booking_type,
            room_type: None,
            rejected: None,
            completed: None,
            config,
        }
    }

    /// The stay policy in force.
    #[must_use]
    pub fn policy(&self) -> BookingPolicy {
        self.config
            .policy_override
            .unwrap_or_else(|| self.booking_type.policy())
    }

    /// Price charged for nights without a stored price.
    #[must_use]
    pub fn base_price(&self) -> u64 {
        match (&self.room_type, self.config.pricing) {
            (_, PricingMode::Disabled | PricingMode::Mandatory) => 0,
            (Some(room_type), PricingMode::Fallback { .. }) => room_type.base_price,
            (None, PricingMode::Fallback { base_price }) => base_price,
        }
    }

    /// Returns the loaded data for the month containing `date`.
    #[must_use]
    pub fn month_data(&self, date: DateKey) -> Option<&MonthData> {
        match self.months.get(&date.year_month()) {
            Some(MonthLoad::Loaded(data)) => Some(data),
            _ => None,
        }
    }

    /// Returns whether `date` is before the configured "today".
    #[must_use]
    pub fn is_past(&self, date: DateKey) -> bool {
        self.config
            .today
            .is_some_and(|today| validate_not_past(date, today).is_err())
    }

    /// Returns whether a click on `date` has any effect.
    #[must_use]
    pub fn is_selectable(&self, date: DateKey) -> bool {
        !self.is_past(date) && self.availability_of(date) == DateAvailability::Available
    }

    /// Stored price for `date`, shown on the day cell.
    #[must_use]
    pub fn price_annotation(&self, date: DateKey) -> Option<u64> {
        if !self.config.pricing.is_enabled() {
            return None;
        }
        self.price_of(date)
    }

    /// Hover preview, if any.
    #[must_use]
    pub fn provisional_range(&self) -> Option<ProvisionalRange> {
        self.selection.provisional_range(self.hover)
    }

    /// Sums the stay according to the pricing mode.
    #[must_use]
    pub fn total_for(&self, check_in: DateKey, check_out: DateKey) -> u64 {
        if self.config.pricing.is_enabled() {
            compute_total(Some(check_in), Some(check_out), Some(self), self.base_price())
        } else {
            compute_total::<Self>(Some(check_in), Some(check_out), None, 0)
        }
    }

    /// Counts the nights of a stay charged at the base price because no
    /// price is stored for them. Always 0 outside fallback pricing.
    #[must_use]
    pub fn nights_at_base_price(&self, check_in: DateKey, check_out: DateKey) -> usize {
        if !matches!(self.config.pricing, PricingMode::Fallback { .. }) {
            return 0;
        }
        stay_nights(check_in, check_out)
            .filter(|night| self.price_of(*night).is_none())
            .count()
    }

    /// Validates a stay against everything known and prices it.
    ///
    /// # Errors
    ///
    /// Returns the first rule the stay breaks: a past check-in, an invalid
    /// range, the stay policy, availability, then missing mandatory prices.
    pub fn quote(&self, check_in: DateKey, check_out: DateKey) -> Result<StayQuote, DomainError> {
        if let Some(today) = self.config.today {
            validate_not_past(check_in, today)?;
        }
        let nights: i64 = validate_range(check_in, check_out, &self.policy(), self)?;
        if self.config.pricing == PricingMode::Mandatory {
            validate_priced(check_in, check_out, self)?;
        }
        Ok(StayQuote {
            check_in,
            check_out,
            nights,
            total_price: self.total_for(check_in, check_out),
        })
    }

    /// Clears the selection and everything derived from it.
    pub(crate) fn clear_selection(&mut self) {
        self.selection = SelectionState::new();
        self.hover = None;
        self.rejected = None;
        self.completed = None;
    }
}

impl AvailabilityLookup for CalendarState {
    fn availability_of(&self, date: DateKey) -> DateAvailability {
        self.month_data(date)
            .map_or(DateAvailability::Unknown, |data| {
                data.availability.availability_of(date)
            })
    }
}

impl PriceLookup for CalendarState {
    fn price_of(&self, date: DateKey) -> Option<u64> {
        self.month_data(date)
            .and_then(MonthData::price_table)
            .and_then(|table| table.price_of(date))
    }
}

/// The result of a successful state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: CalendarState,
    /// Events emitted by the transition, in order.
    pub events: Vec<CalendarEvent>,
    /// A month fetch the caller must perform and hand to `receive_month`.
    pub request: Option<MonthRequest>,
}

impl TransitionResult {
    /// A transition that changed nothing.
    #[must_use]
    pub fn unchanged(state: &CalendarState) -> Self {
        Self {
            new_state: state.clone(),
            events: Vec::new(),
            request: None,
        }
    }
}
