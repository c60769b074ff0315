// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only projection of the visible month for rendering.

use crate::state::CalendarState;
use serde::{Deserialize, Serialize};
use stay_calendar_domain::{
    AvailabilityLookup, AvailabilityStatus, DateAvailability, DateKey, DomainError, month_grid,
};

/// What a day cell knows about availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellAvailability {
    /// Bookable with known unit counts.
    Available {
        /// Units left.
        available_units: u32,
        /// Units in total.
        total_units: u32,
        /// Band derived from `available_units`.
        status: AvailabilityStatus,
    },
    /// Bookable because no entry restricts it.
    Open,
    /// Not bookable.
    Unavailable,
    /// The month did not load (or is still loading).
    Unknown,
}

/// One day of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    /// The day.
    pub date: DateKey,
    /// Availability answer for the day.
    pub availability: CellAvailability,
    /// Stored price, when prices loaded.
    pub price: Option<u64>,
    /// Whether a click on this day does anything.
    pub selectable: bool,
    /// Committed check-in.
    pub is_check_in: bool,
    /// Committed check-out.
    pub is_check_out: bool,
    /// Strictly between committed check-in and check-out.
    pub in_range: bool,
    /// Inside the hover preview.
    pub in_provisional_range: bool,
    /// Inside the last rejected range, check-in and check-out included.
    pub in_rejected_range: bool,
    /// Before the reference "today".
    pub is_past: bool,
    /// The reference "today".
    pub is_today: bool,
}

impl CalendarState {
    /// Builds the 7-column grid for the visible month.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the visible month is
    /// outside the supported calendar range.
    pub fn month_view(&self) -> Result<Vec<Option<CalendarCell>>, DomainError> {
        Ok(month_grid(self.visible_month)?
            .into_iter()
            .map(|slot| slot.map(|date| self.cell(date)))
            .collect())
    }

    fn cell(&self, date: DateKey) -> CalendarCell {
        let availability: CellAvailability = match self.month_data(date) {
            None => CellAvailability::Unknown,
            Some(data) => match (data.availability.entry(date), self.availability_of(date)) {
                (_, DateAvailability::Unavailable) => CellAvailability::Unavailable,
                (_, DateAvailability::Unknown) => CellAvailability::Unknown,
                (Some(entry), DateAvailability::Available) => CellAvailability::Available {
                    available_units: entry.available_units(),
                    total_units: entry.total_units(),
                    status: entry.status(),
                },
                (None, DateAvailability::Available) => CellAvailability::Open,
            },
        };
        let provisional: bool = self
            .provisional_range()
            .is_some_and(|range| range.contains(date));

        CalendarCell {
            date,
            availability,
            price: self.price_annotation(date),
            selectable: self.is_selectable(date),
            is_check_in: self.selection.check_in() == Some(date),
            is_check_out: self.selection.check_out() == Some(date),
            in_range: self.selection.is_between(date),
            in_provisional_range: provisional,
            in_rejected_range: self
                .rejected
                .as_ref()
                .is_some_and(|rejected| rejected.contains(date)),
            is_past: self.is_past(date),
            is_today: self.config.today == Some(date),
        }
    }
}
