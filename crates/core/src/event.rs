// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Events emitted by calendar transitions.
//!
//! `RangeSelected` is the only event the booking flow needs to act on; the
//! rest describe loading and selection progress for the view.

use serde::{Deserialize, Serialize};
use stay_calendar_domain::{DateKey, YearMonth};

/// Why a selection was cleared from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetReason {
    /// The booking type changed.
    BookingTypeChanged,
    /// The room type changed.
    RoomTypeChanged,
    /// The user cleared the selection.
    Cleared,
}

/// Calendar event types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalendarEvent {
    /// Data for a month was requested from the provider.
    MonthRequested {
        /// The requested month.
        month: YearMonth,
        /// Generation of the request.
        generation: u64,
    },
    /// Data for the visible month arrived.
    MonthLoaded {
        /// The loaded month.
        month: YearMonth,
        /// Whether prices loaded alongside availability.
        priced: bool,
    },
    /// Data for the visible month could not be loaded.
    MonthLoadFailed {
        /// The month.
        month: YearMonth,
        /// The failure.
        reason: String,
    },
    /// Data arrived for a request that is no longer current.
    StaleMonthDiscarded {
        /// The month of the outdated request.
        month: YearMonth,
        /// Generation of the outdated request.
        generation: u64,
    },
    /// A check-in was picked; a check-out is awaited.
    CheckInSelected {
        /// The check-in date.
        check_in: DateKey,
    },
    /// A complete, validated range.
    RangeSelected {
        /// First night.
        check_in: DateKey,
        /// Departure date.
        check_out: DateKey,
        /// Sum of nightly prices.
        total_price: u64,
        /// Number of nights.
        nights: i64,
    },
    /// A completed range failed validation.
    SelectionRejected {
        /// Requested check-in.
        check_in: DateKey,
        /// Requested check-out.
        check_out: DateKey,
        /// The validation failure.
        reason: String,
        /// Whether the check-in was dropped too.
        cleared: bool,
    },
    /// The selection was cleared.
    SelectionReset {
        /// Why the selection was cleared.
        reason: ResetReason,
    },
}
