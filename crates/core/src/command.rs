// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use stay_calendar_domain::{BookingType, DateKey, RoomType, YearMonth};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Click on a day cell.
    SelectDate {
        /// The clicked date.
        date: DateKey,
    },
    /// Both ends typed into date fields.
    EnterRange {
        /// The typed check-in.
        check_in: DateKey,
        /// The typed check-out.
        check_out: DateKey,
    },
    /// Pointer entered a day cell.
    HoverDate {
        /// The hovered date.
        date: DateKey,
    },
    /// Pointer left the grid.
    ClearHover,
    /// Move the visible month; `0` reloads the current month.
    NavigateMonth {
        /// Months to move by.
        delta: i32,
    },
    /// Jump straight to a month.
    ShowMonth {
        /// The month to show.
        month: YearMonth,
    },
    /// Switch booking type, which resets the selection.
    ChangeBookingType {
        /// The new booking type.
        booking_type: BookingType,
    },
    /// Switch room type, which resets the selection.
    ChangeRoomType {
        /// The new room type.
        room_type: RoomType,
    },
    /// Drop the current selection.
    Reset,
}
