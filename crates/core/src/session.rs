// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A calendar bound to a provider.
//!
//! The session applies commands and fulfils month requests immediately, so
//! a request is always current when its answer arrives. Callers that fetch
//! asynchronously drive [`apply`] and [`receive_month`] themselves.

use crate::apply::{apply, receive_month};
use crate::command::Command;
use crate::error::{CoreError, ProviderError};
use crate::event::CalendarEvent;
use crate::provider::{AvailabilityProvider, load_month};
use crate::state::{CalendarConfig, CalendarState, MonthData, TransitionResult};
use stay_calendar_domain::{BookingType, StayQuote, YearMonth};

/// Owns the calendar state and the provider it loads from.
#[derive(Debug)]
pub struct CalendarSession<P> {
    provider: P,
    state: CalendarState,
}

impl<P: AvailabilityProvider> CalendarSession<P> {
    /// Opens a calendar on `month` and loads it.
    ///
    /// # Errors
    ///
    /// Returns an error if `month` is outside the supported calendar range.
    pub fn open(
        provider: P,
        month: YearMonth,
        booking_type: BookingType,
        config: CalendarConfig,
    ) -> Result<(Self, Vec<CalendarEvent>), CoreError> {
        let mut session: Self = Self {
            provider,
            state: CalendarState::new(month, booking_type, config),
        };
        let events: Vec<CalendarEvent> = session.dispatch(Command::NavigateMonth { delta: 0 })?;
        Ok((session, events))
    }

    /// Applies `command`, loading any month it asks for.
    ///
    /// Returns every event emitted, the load result included.
    ///
    /// # Errors
    ///
    /// Returns an error if the command itself is rejected by [`apply`].
    pub fn dispatch(&mut self, command: Command) -> Result<Vec<CalendarEvent>, CoreError> {
        let TransitionResult {
            new_state,
            mut events,
            request,
        } = apply(&self.state, command)?;
        self.state = new_state;

        if let Some(request) = request {
            let loaded: Result<MonthData, ProviderError> =
                load_month(&self.provider, request.month, self.state.config.pricing);
            let received: TransitionResult = receive_month(&self.state, request, loaded);
            events.extend(received.events);
            self.state = received.new_state;
        }

        Ok(events)
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &CalendarState {
        &self.state
    }

    /// The last validated range, ready for payment.
    #[must_use]
    pub const fn completed_range(&self) -> Option<&StayQuote> {
        self.state.completed.as_ref()
    }
}
