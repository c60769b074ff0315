// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod event;
mod provider;
mod selection;
mod session;
mod simulated;
mod state;
mod view;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply, receive_month};
pub use command::Command;
pub use error::{CoreError, ProviderError};
pub use event::{CalendarEvent, ResetReason};
pub use provider::{AvailabilityProvider, load_month};
pub use selection::{ClickOutcome, ProvisionalRange, SelectionMode, SelectionState};
pub use session::CalendarSession;
pub use simulated::{SimulatedProvider, simulated_room_types};
pub use state::{
    CalendarConfig, CalendarState, MonthData, MonthLoad, MonthRequest, PriceLoad, PricingMode,
    RejectedRange, TransitionResult,
};
pub use view::{CalendarCell, CellAvailability};
