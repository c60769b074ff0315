// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::{CoreError, ProviderError};
use crate::event::{CalendarEvent, ResetReason};
use crate::selection::{ClickOutcome, SelectionState};
use crate::state::{
    CalendarState, MonthData, MonthLoad, MonthRequest, RejectedRange, TransitionResult,
};
use stay_calendar_domain::{DateKey, DomainError, StayQuote, YearMonth, go_to_month};
use tracing::{debug, info, warn};

/// Applies a command to the calendar, producing a new state and events.
///
/// This function is pure: it never fetches data. Navigation returns a
/// `MonthRequest` in the result which the caller fulfils and hands back
/// through [`receive_month`].
///
/// Rejected ranges are not errors. They are ordinary transitions carrying a
/// `SelectionRejected` event.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state, events and any request
/// * `Err(CoreError)` if the command cannot be applied at all
///
/// # Errors
///
/// Returns an error if:
/// - Navigation leaves the supported calendar range
pub fn apply(state: &CalendarState, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::SelectDate { date } => Ok(select_date(state, date)),
        Command::EnterRange {
            check_in,
            check_out,
        } => {
            debug!(%check_in, %check_out, "Range entered");
            Ok(complete_range(state, check_in, check_out))
        }
        Command::HoverDate { date } => {
            if state.hover == Some(date) {
                return Ok(TransitionResult::unchanged(state));
            }
            let mut new_state: CalendarState = state.clone();
            new_state.hover = Some(date);
            Ok(quiet(new_state))
        }
        Command::ClearHover => {
            if state.hover.is_none() {
                return Ok(TransitionResult::unchanged(state));
            }
            let mut new_state: CalendarState = state.clone();
            new_state.hover = None;
            Ok(quiet(new_state))
        }
        Command::NavigateMonth { delta } => {
            show_month(state, go_to_month(state.visible_month, delta))
        }
        Command::ShowMonth { month } => show_month(state, month),
        Command::ChangeBookingType { booking_type } => {
            let mut new_state: CalendarState = state.clone();
            new_state.booking_type = booking_type;
            Ok(reset(new_state, ResetReason::BookingTypeChanged))
        }
        Command::ChangeRoomType { room_type } => {
            let mut new_state: CalendarState = state.clone();
            new_state.room_type = Some(room_type);
            Ok(reset(new_state, ResetReason::RoomTypeChanged))
        }
        Command::Reset => Ok(reset(state.clone(), ResetReason::Cleared)),
    }
}

/// Installs the result of a month fetch.
///
/// Only the outstanding request for the visible month is accepted. Anything
/// else is discarded with a `StaleMonthDiscarded` event and the state is left
/// as it was.
#[must_use]
pub fn receive_month(
    state: &CalendarState,
    request: MonthRequest,
    result: Result<MonthData, ProviderError>,
) -> TransitionResult {
    if state.pending != Some(request) || request.month != state.visible_month {
        warn!(
            month = %request.month,
            generation = request.generation,
            current = state.generation,
            "Discarding stale month data"
        );
        return TransitionResult {
            new_state: state.clone(),
            events: vec![CalendarEvent::StaleMonthDiscarded {
                month: request.month,
                generation: request.generation,
            }],
            request: None,
        };
    }

    let mut new_state: CalendarState = state.clone();
    new_state.pending = None;

    let event: CalendarEvent = match result {
        Ok(data) => {
            let priced: bool = data.price_table().is_some();
            debug!(month = %request.month, priced, "Month loaded");
            new_state
                .months
                .insert(request.month, MonthLoad::Loaded(data));
            CalendarEvent::MonthLoaded {
                month: request.month,
                priced,
            }
        }
        Err(err) => {
            warn!(month = %request.month, error = %err, "Month failed to load");
            let reason: String = err.to_string();
            new_state.months.insert(
                request.month,
                MonthLoad::Failed {
                    reason: reason.clone(),
                },
            );
            CalendarEvent::MonthLoadFailed {
                month: request.month,
                reason,
            }
        }
    };

    TransitionResult {
        new_state,
        events: vec![event],
        request: None,
    }
}

fn quiet(new_state: CalendarState) -> TransitionResult {
    TransitionResult {
        new_state,
        events: Vec::new(),
        request: None,
    }
}

fn select_date(state: &CalendarState, date: DateKey) -> TransitionResult {
    if !state.is_selectable(date) {
        debug!(%date, "Ignoring click on a date that cannot be selected");
        return TransitionResult::unchanged(state);
    }

    let (selection, outcome): (SelectionState, ClickOutcome) = state.selection.click(date);
    match outcome {
        ClickOutcome::CheckInSet(check_in) | ClickOutcome::Restarted(check_in) => {
            let restarted: bool = matches!(outcome, ClickOutcome::Restarted(_));
            debug!(%check_in, restarted, "Check-in selected");
            let mut new_state: CalendarState = state.clone();
            new_state.selection = selection;
            new_state.rejected = None;
            new_state.completed = None;
            TransitionResult {
                new_state,
                events: vec![CalendarEvent::CheckInSelected { check_in }],
                request: None,
            }
        }
        ClickOutcome::Completed {
            check_in,
            check_out,
        } => complete_range(state, check_in, check_out),
    }
}

/// Validates a finished range and commits or rejects it.
///
/// A policy breach or a missing mandatory price keeps the check-in so that a
/// new check-out can be picked. Any other failure clears the selection.
fn complete_range(
    state: &CalendarState,
    check_in: DateKey,
    check_out: DateKey,
) -> TransitionResult {
    let mut new_state: CalendarState = state.clone();
    new_state.hover = None;

    match state.quote(check_in, check_out) {
        Ok(quote) => {
            let StayQuote {
                nights,
                total_price,
                ..
            } = quote;
            info!(%check_in, %check_out, nights, total_price, "Range selected");
            let unpriced: usize = state.nights_at_base_price(check_in, check_out);
            if unpriced > 0 {
                warn!(
                    %check_in,
                    %check_out,
                    unpriced,
                    base_price = state.base_price(),
                    "Nights without a stored price were charged the base price"
                );
            }
            new_state.selection = SelectionState::completed(check_in, check_out);
            new_state.rejected = None;
            new_state.completed = Some(quote);
            TransitionResult {
                new_state,
                events: vec![CalendarEvent::RangeSelected {
                    check_in,
                    check_out,
                    total_price,
                    nights,
                }],
                request: None,
            }
        }
        Err(error) => {
            let keep_check_in: bool = matches!(
                error,
                DomainError::StayPolicyViolation { .. } | DomainError::UnpricedDate(_)
            );
            debug!(%check_in, %check_out, %error, keep_check_in, "Range rejected");
            new_state.selection = if keep_check_in {
                SelectionState::awaiting_check_out(check_in)
            } else {
                SelectionState::new()
            };
            new_state.completed = None;
            let reason: String = error.to_string();
            new_state.rejected = Some(RejectedRange {
                check_in,
                check_out,
                error,
            });
            TransitionResult {
                new_state,
                events: vec![CalendarEvent::SelectionRejected {
                    check_in,
                    check_out,
                    reason,
                    cleared: !keep_check_in,
                }],
                request: None,
            }
        }
    }
}

fn show_month(state: &CalendarState, month: YearMonth) -> Result<TransitionResult, CoreError> {
    month.first_day()?;

    let generation: u64 = state.generation.saturating_add(1);
    let request: MonthRequest = MonthRequest { month, generation };
    debug!(from = %state.visible_month, to = %month, generation, "Navigating");

    let mut new_state: CalendarState = state.clone();
    new_state.visible_month = month;
    new_state.generation = generation;
    new_state.pending = Some(request);
    new_state.hover = None;
    if !matches!(new_state.months.get(&month), Some(MonthLoad::Loaded(_))) {
        new_state.months.insert(month, MonthLoad::Loading);
    }

    Ok(TransitionResult {
        new_state,
        events: vec![CalendarEvent::MonthRequested { month, generation }],
        request: Some(request),
    })
}

fn reset(mut new_state: CalendarState, reason: ResetReason) -> TransitionResult {
    debug!(?reason, "Selection reset");
    new_state.clear_selection();
    TransitionResult {
        new_state,
        events: vec![CalendarEvent::SelectionReset { reason }],
        request: None,
    }
}
