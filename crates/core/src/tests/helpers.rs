// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AvailabilityProvider, CalendarConfig, CalendarEvent, CalendarState, Command, PricingMode,
    ProviderError, TransitionResult, apply, load_month, receive_month,
};
use std::collections::{BTreeMap, BTreeSet};
use stay_calendar_domain::{
    AvailabilityEntry, AvailabilitySnapshot, BookingPolicy, BookingType, DateKey,
    StatusThresholds, YearMonth,
};

/// Provider answering from fixed tables. Months it knows nothing about are
/// open with no prices.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    pub availability: BTreeMap<YearMonth, AvailabilitySnapshot>,
    pub prices: BTreeMap<YearMonth, BTreeMap<DateKey, i64>>,
    pub failing_availability: BTreeSet<YearMonth>,
    pub failing_prices: BTreeSet<YearMonth>,
}

impl AvailabilityProvider for ScriptedProvider {
    fn get_availability(&self, month: YearMonth) -> Result<AvailabilitySnapshot, ProviderError> {
        if self.failing_availability.contains(&month) {
            return Err(ProviderError::Unavailable {
                month,
                reason: String::from("connection refused"),
            });
        }
        Ok(self.availability.get(&month).cloned().unwrap_or_default())
    }

    fn get_prices(&self, month: YearMonth) -> Result<BTreeMap<DateKey, i64>, ProviderError> {
        if self.failing_prices.contains(&month) {
            return Err(ProviderError::Unavailable {
                month,
                reason: String::from("price service down"),
            });
        }
        Ok(self.prices.get(&month).cloned().unwrap_or_default())
    }
}

pub fn date(value: &str) -> DateKey {
    DateKey::parse(value).unwrap()
}

pub fn month(year: i32, month: u8) -> YearMonth {
    YearMonth::from_numbers(year, month).unwrap()
}

pub fn september() -> YearMonth {
    month(2024, 9)
}

/// Every September 2024 day has 10 of 15 units, except `booked` days which have none.
pub fn september_snapshot(booked: &[&str]) -> AvailabilitySnapshot {
    let thresholds: StatusThresholds = StatusThresholds::default();
    let mut snapshot: AvailabilitySnapshot = AvailabilitySnapshot::new();
    for day in september().days().unwrap() {
        snapshot.insert(day, AvailabilityEntry::new(10, 15, &thresholds).unwrap());
    }
    snapshot.with_booked_dates(booked.iter().map(|value| date(value)))
}

/// Night of September `d` costs `100 + d`.
pub fn september_prices() -> BTreeMap<DateKey, i64> {
    september()
        .days()
        .unwrap()
        .into_iter()
        .map(|day| (day, 100 + i64::from(day.date().day())))
        .collect()
}

pub fn september_provider(booked: &[&str]) -> ScriptedProvider {
    let mut provider: ScriptedProvider = ScriptedProvider::default();
    provider
        .availability
        .insert(september(), september_snapshot(booked));
    provider.prices.insert(september(), september_prices());
    provider
}

pub fn config_with(policy: Option<(u32, u32)>, pricing: PricingMode) -> CalendarConfig {
    CalendarConfig {
        policy_override: policy.map(|(min, max)| BookingPolicy::new(min, max).unwrap()),
        pricing,
        today: None,
    }
}

/// One-night minimum, stored prices with no fallback.
pub fn open_config() -> CalendarConfig {
    config_with(Some((1, 365)), PricingMode::Fallback { base_price: 0 })
}

/// Applies `command` and fulfils any month request from `provider`.
pub fn step(
    state: &CalendarState,
    provider: &ScriptedProvider,
    command: Command,
) -> (CalendarState, Vec<CalendarEvent>) {
    let transition: TransitionResult = apply(state, command).unwrap();
    let mut events: Vec<CalendarEvent> = transition.events;
    let mut new_state: CalendarState = transition.new_state;
    if let Some(request) = transition.request {
        let loaded = load_month(provider, request.month, new_state.config.pricing);
        let received: TransitionResult = receive_month(&new_state, request, loaded);
        events.extend(received.events);
        new_state = received.new_state;
    }
    (new_state, events)
}

/// A short-term calendar showing September 2024 with its data loaded.
pub fn loaded_september(provider: &ScriptedProvider, config: CalendarConfig) -> CalendarState {
    let state: CalendarState = CalendarState::new(september(), BookingType::ShortTerm, config);
    step(&state, provider, Command::NavigateMonth { delta: 0 }).0
}

pub fn click(
    state: &CalendarState,
    provider: &ScriptedProvider,
    value: &str,
) -> (CalendarState, Vec<CalendarEvent>) {
    step(state, provider, Command::SelectDate { date: date(value) })
}
