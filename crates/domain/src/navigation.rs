// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Month navigation and the fixed 7-column month grid.
//!
//! Weeks start on Sunday. The grid for a month is:
//! - one leading `None` per weekday before the 1st
//! - one `Some(date)` per day of the month
//! - trailing `None` until the final week is complete

use crate::error::DomainError;
use crate::types::{DateKey, YearMonth};

/// Number of columns in a month grid.
pub const DAYS_PER_WEEK: usize = 7;

/// Moves `delta` months from `current`, wrapping across years.
///
/// Years saturate at the bounds of `i32`.
#[must_use]
pub fn go_to_month(current: YearMonth, delta: i32) -> YearMonth {
    let index: i64 = i64::from(current.year()) * 12 + i64::from(current.month_number()) - 1;
    let target: i64 = index + i64::from(delta);

    let year: i32 = i32::try_from(target.div_euclid(12)).unwrap_or(if target < 0 {
        i32::MIN
    } else {
        i32::MAX
    });
    // rem_euclid(12) is always in 0..12
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let month: u8 = target.rem_euclid(12) as u8 + 1;

    YearMonth::from_numbers(year, month).unwrap_or(current)
}

/// Returns how many days `year_month` has.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the year is outside the supported range.
pub fn days_in_month(year_month: YearMonth) -> Result<u8, DomainError> {
    Ok(year_month.last_day()?.date().day())
}

/// Lays out `year_month` as a Sunday-first grid of whole weeks.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the year is outside the supported range.
pub fn month_grid(year_month: YearMonth) -> Result<Vec<Option<DateKey>>, DomainError> {
    let days: Vec<DateKey> = year_month.days()?;
    let leading: usize = days
        .first()
        .map_or(0, |first| usize::from(first.weekday().number_days_from_sunday()));

    let mut grid: Vec<Option<DateKey>> = Vec::with_capacity(DAYS_PER_WEEK * 6);
    grid.extend(std::iter::repeat_n(None, leading));
    grid.extend(days.into_iter().map(Some));

    let trailing: usize = (DAYS_PER_WEEK - grid.len() % DAYS_PER_WEEK) % DAYS_PER_WEEK;
    grid.extend(std::iter::repeat_n(None, trailing));

    Ok(grid)
}
