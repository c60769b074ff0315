// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Check-in / check-out selection.
//!
//! ## States
//!
//! - `AwaitingCheckIn`: the next click picks a check-in date.
//! - `AwaitingCheckOut`: the next click picks a check-out date.
//!
//! ## Transitions on a click `d`
//!
//! - `AwaitingCheckIn`: check-in becomes `d`, check-out is cleared.
//! - `AwaitingCheckOut` and `d <= check-in`: the selection restarts at `d`.
//! - `AwaitingCheckOut` and `d > check-in`: check-out becomes `d` and the
//!   range is complete.
//!
//! Whether `d` may be clicked at all is decided by the caller.

use serde::{Deserialize, Serialize};
use stay_calendar_domain::DateKey;

/// Which end of the range the next click sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// The next click sets check-in.
    #[default]
    AwaitingCheckIn,
    /// The next click sets check-out.
    AwaitingCheckOut,
}

/// Committed selection.
///
/// `check_out`, when present, is strictly after `check_in`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SelectionState {
    check_in: Option<DateKey>,
    check_out: Option<DateKey>,
    mode: SelectionMode,
}

/// What a click did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A fresh check-in was picked.
    CheckInSet(DateKey),
    /// A click on or before the check-in restarted the selection there.
    Restarted(DateKey),
    /// A check-out after the check-in completed the range.
    Completed {
        /// First night.
        check_in: DateKey,
        /// Departure date.
        check_out: DateKey,
    },
}

/// Hover-only preview range. Inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProvisionalRange {
    /// Earlier end.
    pub start: DateKey,
    /// Later end.
    pub end: DateKey,
}

impl ProvisionalRange {
    /// Returns whether `date` lies inside the preview.
    #[must_use]
    pub fn contains(&self, date: DateKey) -> bool {
        self.start <= date && date <= self.end
    }
}

impl SelectionState {
    /// Creates an empty selection awaiting a check-in.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            check_in: None,
            check_out: None,
            mode: SelectionMode::AwaitingCheckIn,
        }
    }

    /// A selection holding only a check-in, awaiting its check-out.
    #[must_use]
    pub const fn awaiting_check_out(check_in: DateKey) -> Self {
        Self {
            check_in: Some(check_in),
            check_out: None,
            mode: SelectionMode::AwaitingCheckOut,
        }
    }

    /// A completed selection. The caller guarantees `check_out > check_in`.
    #[must_use]
    pub(crate) const fn completed(check_in: DateKey, check_out: DateKey) -> Self {
        Self {
            check_in: Some(check_in),
            check_out: Some(check_out),
            mode: SelectionMode::AwaitingCheckIn,
        }
    }

    /// Returns the check-in date, if picked.
    #[must_use]
    pub const fn check_in(&self) -> Option<DateKey> {
        self.check_in
    }

    /// Returns the check-out date, if picked.
    #[must_use]
    pub const fn check_out(&self) -> Option<DateKey> {
        self.check_out
    }

    /// Returns which end the next click sets.
    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Returns whether both ends are set.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }

    /// Applies a click on `date`, returning the next selection.
    #[must_use]
    pub fn click(&self, date: DateKey) -> (Self, ClickOutcome) {
        match (self.mode, self.check_in) {
            (SelectionMode::AwaitingCheckOut, Some(check_in)) if date > check_in => (
                Self::completed(check_in, date),
                ClickOutcome::Completed {
                    check_in,
                    check_out: date,
                },
            ),
            (SelectionMode::AwaitingCheckOut, Some(_)) => {
                (Self::awaiting_check_out(date), ClickOutcome::Restarted(date))
            }
            _ => (
                Self::awaiting_check_out(date),
                ClickOutcome::CheckInSet(date),
            ),
        }
    }

    /// Preview range for a hovered date.
    ///
    /// Only exists while a check-in is set and no check-out is.
    #[must_use]
    pub fn provisional_range(&self, hover: Option<DateKey>) -> Option<ProvisionalRange> {
        match (self.check_in, self.check_out, hover) {
            (Some(check_in), None, Some(hover)) => Some(ProvisionalRange {
                start: check_in.min(hover),
                end: check_in.max(hover),
            }),
            _ => None,
        }
    }

    /// Returns whether `date` is strictly between a committed check-in and check-out.
    #[must_use]
    pub fn is_between(&self, date: DateKey) -> bool {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => check_in < date && date < check_out,
            _ => false,
        }
    }
}
