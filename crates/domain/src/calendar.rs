// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar arithmetic helpers.
//!
//! Every helper takes a date by value and returns a new value. Nothing here
//! mutates its input, so a cursor can be reused across loop iterations
//! without aliasing surprises.

use crate::error::DomainError;
use time::{Date, Duration, Weekday};

/// Returns the weekday index of a date, where 0 is Sunday and 6 is Saturday.
#[must_use]
pub const fn weekday_index(date: Date) -> u8 {
    date.weekday().number_days_from_sunday()
}

/// Converts a 0-based weekday index (0 = Sunday) into a `Weekday`.
///
/// Returns `None` for indices above 6.
#[must_use]
pub const fn weekday_from_index(index: u8) -> Option<Weekday> {
    if index > 6 {
        return None;
    }
    Some(Weekday::Sunday.nth_next(index))
}

/// Returns which 7-day bucket of its month a date falls in (1-based).
///
/// Days 1-7 are ordinal 1, days 8-14 ordinal 2, and so on up to 5.
#[must_use]
pub const fn ordinal_in_month(date: Date) -> u8 {
    (date.day() - 1) / 7 + 1
}

/// Adds a signed number of calendar days to a date.
///
/// # Errors
///
/// Returns an error if the result falls outside the representable range.
pub fn add_days(date: Date, days: i64) -> Result<Date, DomainError> {
    date.checked_add(Duration::days(days))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("adding {days} days to {date}"),
        })
}

/// Formats a date as an ISO 8601 calendar date (`YYYY-MM-DD`).
#[must_use]
pub fn iso_date_key(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
