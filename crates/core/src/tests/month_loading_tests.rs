// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    ScriptedProvider, click, config_with, date, loaded_september, month, open_config,
    september, september_provider, step,
};
use crate::{
    CalendarConfig, CalendarEvent, CalendarState, Command, MonthData, MonthLoad, MonthRequest,
    PriceLoad, PricingMode, ProviderError, TransitionResult, apply, load_month, receive_month,
};
use stay_calendar_domain::{AvailabilityLookup, DateAvailability, DomainError, YearMonth};

fn fetch(provider: &ScriptedProvider, request: MonthRequest) -> Result<MonthData, ProviderError> {
    load_month(provider, request.month, PricingMode::Fallback { base_price: 0 })
}

fn navigate(state: &CalendarState, delta: i32) -> (CalendarState, MonthRequest) {
    let transition: TransitionResult = apply(state, Command::NavigateMonth { delta }).unwrap();
    (transition.new_state, transition.request.unwrap())
}

#[test]
fn test_late_result_for_earlier_navigation_is_discarded() {
    let provider: ScriptedProvider = september_provider(&[]);
    let state: CalendarState = loaded_september(&provider, open_config());

    let (state, october) = navigate(&state, 1);
    let (state, november) = navigate(&state, 1);
    assert_eq!(october.generation, 2);
    assert_eq!(november.generation, 3);

    let stale: TransitionResult = receive_month(&state, october, fetch(&provider, october));
    assert_eq!(
        stale.events,
        vec![CalendarEvent::StaleMonthDiscarded {
            month: month(2024, 10),
            generation: 2,
        }]
    );
    assert_eq!(stale.new_state, state);
    assert_eq!(
        stale.new_state.months.get(&month(2024, 10)),
        Some(&MonthLoad::Loading)
    );

    let current: TransitionResult = receive_month(&state, november, fetch(&provider, november));
    assert_eq!(
        current.events,
        vec![CalendarEvent::MonthLoaded {
            month: month(2024, 11),
            priced: true,
        }]
    );
    assert_eq!(current.new_state.pending, None);
    assert!(matches!(
        current.new_state.months.get(&month(2024, 11)),
        Some(MonthLoad::Loaded(_))
    ));
}

#[test]
fn test_result_for_same_month_but_older_generation_is_discarded() {
    let provider: ScriptedProvider = september_provider(&[]);
    let state: CalendarState = loaded_september(&provider, open_config());

    let (state, first) = navigate(&state, 0);
    let (state, second) = navigate(&state, 0);
    assert_eq!(first.month, second.month);

    let stale: TransitionResult = receive_month(&state, first, fetch(&provider, first));
    assert!(matches!(
        stale.events.as_slice(),
        [CalendarEvent::StaleMonthDiscarded { generation: 2, .. }]
    ));

    let current: TransitionResult = receive_month(&state, second, fetch(&provider, second));
    assert!(matches!(
        current.events.as_slice(),
        [CalendarEvent::MonthLoaded { .. }]
    ));
}

#[test]
fn test_duplicate_delivery_is_discarded() {
    let provider: ScriptedProvider = september_provider(&[]);
    let state: CalendarState = loaded_september(&provider, open_config());
    let (state, october) = navigate(&state, 1);

    let first: TransitionResult = receive_month(&state, october, fetch(&provider, october));
    let second: TransitionResult =
        receive_month(&first.new_state, october, fetch(&provider, october));

    assert!(matches!(
        second.events.as_slice(),
        [CalendarEvent::StaleMonthDiscarded { .. }]
    ));
    assert_eq!(second.new_state, first.new_state);
}

#[test]
fn test_loaded_month_stays_visible_while_refreshing() {
    let provider: ScriptedProvider = september_provider(&[]);
    let state: CalendarState = loaded_september(&provider, open_config());

    let (state, _) = navigate(&state, 0);

    assert!(matches!(
        state.months.get(&september()),
        Some(MonthLoad::Loaded(_))
    ));
    assert!(state.is_selectable(date("2024-09-05")));
}

#[test]
fn test_failed_load_means_unknown_availability() {
    let mut provider: ScriptedProvider = september_provider(&[]);
    provider.failing_availability.insert(september());
    let start: CalendarState = CalendarState::new(
        september(),
        stay_calendar_domain::BookingType::ShortTerm,
        open_config(),
    );

    let (state, events) = step(&start, &provider, Command::NavigateMonth { delta: 0 });

    assert_eq!(
        events,
        vec![
            CalendarEvent::MonthRequested {
                month: september(),
                generation: 1,
            },
            CalendarEvent::MonthLoadFailed {
                month: september(),
                reason: String::from("Data for 2024-09 is unavailable: connection refused"),
            },
        ]
    );
    assert_eq!(
        state.availability_of(date("2024-09-05")),
        DateAvailability::Unknown
    );
    assert!(!state.is_selectable(date("2024-09-05")));

    let (after_click, events) = click(&state, &provider, "2024-09-05");
    assert!(events.is_empty());
    assert_eq!(after_click, state);
}

#[test]
fn test_refresh_recovers_failed_month() {
    let mut failing: ScriptedProvider = september_provider(&[]);
    failing.failing_availability.insert(september());
    let healthy: ScriptedProvider = september_provider(&[]);
    let state: CalendarState = loaded_september(&failing, open_config());
    assert!(matches!(
        state.months.get(&september()),
        Some(MonthLoad::Failed { .. })
    ));

    let (state, _) = step(&state, &healthy, Command::NavigateMonth { delta: 0 });

    assert!(matches!(
        state.months.get(&september()),
        Some(MonthLoad::Loaded(_))
    ));
    assert!(state.is_selectable(date("2024-09-05")));
}

#[test]
fn test_range_into_failed_month_is_rejected() {
    let mut provider: ScriptedProvider = september_provider(&[]);
    let october: YearMonth = month(2024, 10);
    provider.failing_availability.insert(october);
    let state: CalendarState = loaded_september(&provider, open_config());
    let (state, _) = step(&state, &provider, Command::NavigateMonth { delta: 1 });
    assert!(!state.is_selectable(date("2024-10-05")));

    let (state, events) = step(
        &state,
        &provider,
        Command::EnterRange {
            check_in: date("2024-09-20"),
            check_out: date("2024-10-05"),
        },
    );

    assert!(matches!(
        events.as_slice(),
        [CalendarEvent::SelectionRejected { cleared: true, .. }]
    ));
    assert_eq!(
        state.rejected.map(|rejected| rejected.error),
        Some(DomainError::AvailabilityUnknown(date("2024-10-01")))
    );
}

#[test]
fn test_price_failure_keeps_availability() {
    let mut provider: ScriptedProvider = september_provider(&[]);
    provider.failing_prices.insert(september());
    let start: CalendarState = CalendarState::new(
        september(),
        stay_calendar_domain::BookingType::ShortTerm,
        open_config(),
    );

    let (state, events) = step(&start, &provider, Command::NavigateMonth { delta: 0 });

    assert_eq!(
        events.last(),
        Some(&CalendarEvent::MonthLoaded {
            month: september(),
            priced: false,
        })
    );
    assert!(state.is_selectable(date("2024-09-05")));
    assert_eq!(state.price_annotation(date("2024-09-05")), None);

    let (state, _) = click(&state, &provider, "2024-09-01");
    let (_, events) = click(&state, &provider, "2024-09-03");
    assert!(matches!(
        events.as_slice(),
        [CalendarEvent::RangeSelected {
            total_price: 0,
            nights: 2,
            ..
        }]
    ));
}

#[test]
fn test_price_failure_blocks_mandatory_pricing() {
    let mut provider: ScriptedProvider = september_provider(&[]);
    provider.failing_prices.insert(september());
    let config: CalendarConfig = config_with(Some((1, 365)), PricingMode::Mandatory);
    let state: CalendarState = loaded_september(&provider, config);

    let (state, _) = click(&state, &provider, "2024-09-01");
    let (state, _) = click(&state, &provider, "2024-09-03");

    assert_eq!(
        state.rejected.map(|rejected| rejected.error),
        Some(DomainError::UnpricedDate(date("2024-09-01")))
    );
}

#[test]
fn test_negative_price_drops_price_table() {
    let mut provider: ScriptedProvider = september_provider(&[]);
    provider
        .prices
        .get_mut(&september())
        .unwrap()
        .insert(date("2024-09-03"), -5);

    let data: MonthData =
        load_month(&provider, september(), PricingMode::Fallback { base_price: 0 }).unwrap();

    assert_eq!(
        data.prices,
        PriceLoad::Failed {
            reason: String::from("Invalid price -5 for 2024-09-03: prices must not be negative"),
        }
    );
    assert_eq!(data.price_table(), None);
    assert!(data.availability.is_available(date("2024-09-03")));
}

#[test]
fn test_disabled_pricing_skips_price_fetch() {
    let mut provider: ScriptedProvider = september_provider(&[]);
    provider.failing_prices.insert(september());

    let data: MonthData = load_month(&provider, september(), PricingMode::Disabled).unwrap();

    assert_eq!(data.prices, PriceLoad::NotRequested);
}
