// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Text and JSON output.

use serde::Serialize;
use stay_calendar::{
    CalendarCell, CalendarEvent, CalendarState, CellAvailability, PricingMode, RejectedRange,
};
use stay_calendar_domain::{
    BookingType, DAYS_PER_WEEK, DateKey, DomainError, StayQuote, YearMonth, term_rate_total,
};

const CELL_WIDTH: usize = 7;
const WEEKDAYS: [&str; DAYS_PER_WEEK] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// A rejected range with its message, for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectionReport {
    pub check_in: DateKey,
    pub check_out: DateKey,
    pub reason: String,
}

impl From<&RejectedRange> for RejectionReport {
    fn from(rejected: &RejectedRange) -> Self {
        Self {
            check_in: rejected.check_in,
            check_out: rejected.check_out,
            reason: rejected.error.to_string(),
        }
    }
}

/// Everything printed by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub month: YearMonth,
    pub booking_type: BookingType,
    pub min_stay_nights: u32,
    pub max_stay_nights: u32,
    pub pricing: PricingMode,
    pub room_type: Option<String>,
    pub events: Vec<CalendarEvent>,
    pub cells: Vec<CalendarCell>,
    pub completed: Option<StayQuote>,
    /// Per-term price of the completed stay, when a room type was picked.
    pub term_total: Option<u64>,
    pub rejected: Option<RejectionReport>,
}

impl Report {
    pub fn new(state: &CalendarState, events: Vec<CalendarEvent>) -> Result<Self, DomainError> {
        Ok(Self {
            month: state.visible_month,
            booking_type: state.booking_type,
            min_stay_nights: state.policy().min_stay_nights(),
            max_stay_nights: state.policy().max_stay_nights(),
            pricing: state.config.pricing,
            room_type: state.room_type.as_ref().map(|room| room.id.clone()),
            events,
            cells: state.month_view()?.into_iter().flatten().collect(),
            completed: state.completed,
            term_total: term_total(state),
            rejected: state.rejected.as_ref().map(RejectionReport::from),
        })
    }
}

fn term_total(state: &CalendarState) -> Option<u64> {
    let room = state.room_type.as_ref()?;
    let quote: &StayQuote = state.completed.as_ref()?;
    Some(term_rate_total(
        state.booking_type,
        room.base_price,
        quote.nights,
    ))
}

fn marker(cell: &CalendarCell) -> char {
    if cell.is_check_in {
        '['
    } else if cell.is_check_out {
        ']'
    } else if cell.in_range {
        '='
    } else if cell.in_provisional_range {
        '~'
    } else if cell.is_past {
        '-'
    } else {
        match cell.availability {
            CellAvailability::Unavailable => 'x',
            CellAvailability::Unknown => '?',
            CellAvailability::Available { .. } | CellAvailability::Open
                if cell.in_rejected_range =>
            {
                '!'
            }
            CellAvailability::Available { .. } | CellAvailability::Open => ' ',
        }
    }
}

fn day_text(cell: Option<&CalendarCell>) -> String {
    cell.map_or_else(String::new, |cell| {
        let today: &str = if cell.is_today { "*" } else { "" };
        format!("{}{}{today}", cell.date.date().day(), marker(cell))
    })
}

fn price_text(cell: Option<&CalendarCell>) -> String {
    cell.and_then(|cell| cell.price)
        .map_or_else(String::new, |price| price.to_string())
}

/// Renders the visible month as a text grid with prices under each day.
///
/// Markers: `[` check-in, `]` check-out, `=` in range, `~` hover preview,
/// `!` rejected range, `x` unavailable, `?` unknown, `-` past, `*` today.
/// Unavailable days inside a rejected range keep `x` so the blocking date
/// stands out.
pub fn render_month(state: &CalendarState) -> Result<String, DomainError> {
    let cells: Vec<Option<CalendarCell>> = state.month_view()?;
    let policy = state.policy();
    let mut out: String = format!(
        "{} {} ({}, {}-{} nights)\n",
        state.visible_month.month(),
        state.visible_month.year(),
        state.booking_type,
        policy.min_stay_nights(),
        policy.max_stay_nights(),
    );

    for day in WEEKDAYS {
        out.push_str(&format!("{day:>CELL_WIDTH$}"));
    }
    out.push('\n');

    for week in cells.chunks(DAYS_PER_WEEK) {
        for slot in week {
            out.push_str(&format!("{:>CELL_WIDTH$}", day_text(slot.as_ref())));
        }
        out.push('\n');
        if state.config.pricing.is_enabled() {
            for slot in week {
                out.push_str(&format!("{:>CELL_WIDTH$}", price_text(slot.as_ref())));
            }
            out.push('\n');
        }
    }

    Ok(out)
}

/// One-paragraph outcome printed under the grid.
pub fn render_summary(report: &Report) -> String {
    let mut out: String = String::new();
    if let Some(quote) = &report.completed {
        out.push_str(&format!(
            "Selected {} to {}: {} nights, total {}\n",
            quote.check_in, quote.check_out, quote.nights, quote.total_price
        ));
        if let (Some(room), Some(term_total)) = (&report.room_type, report.term_total) {
            out.push_str(&format!(
                "Term rate for {room} ({}): {term_total}\n",
                report.booking_type
            ));
        }
    } else if let Some(rejected) = &report.rejected {
        out.push_str(&format!(
            "Rejected {} to {}: {}\n",
            rejected.check_in, rejected.check_out, rejected.reason
        ));
    }
    out
}
