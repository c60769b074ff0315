// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use stay_calendar_domain::{DomainError, YearMonth};
use thiserror::Error;

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
}

/// Errors reported by an availability provider.
///
/// The calendar never retries; a failed month shows unknown availability
/// until the caller reloads it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider could not be reached or refused the request.
    #[error("Data for {month} is unavailable: {reason}")]
    Unavailable {
        /// The requested month.
        month: YearMonth,
        /// The failure description.
        reason: String,
    },
    /// The provider answered with data that could not be used.
    #[error("Malformed data for {month}: {reason}")]
    Malformed {
        /// The requested month.
        month: YearMonth,
        /// The failure description.
        reason: String,
    },
}
