// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Month grid construction.
//!
//! A month view always spans exactly six full weeks (42 days), starting on
//! the Sunday on or before the 1st of the month. Every day in the window is
//! represented, including leading and trailing days from adjacent months.

use crate::calendar::{add_days, weekday_index};
use crate::error::DomainError;
use crate::occurrence::rules_on_date;
use crate::rule::CollectionRule;
use time::{Date, Month};

/// Number of cells in a month grid (6 weeks of 7 days).
pub const GRID_CELL_COUNT: usize = 42;

/// Number of days in a grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// One day in a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// The calendar date of this cell.
    pub date: Date,
    /// Whether the date belongs to the grid's month.
    pub in_month: bool,
    /// Whether the date is today.
    pub is_today: bool,
    /// Rules firing on this date. May be empty.
    pub rules: Vec<CollectionRule>,
}

/// A 42-cell month view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// The displayed year.
    pub year: i32,
    /// The displayed month.
    pub month: Month,
    /// Exactly `GRID_CELL_COUNT` cells, one day apart, starting on a Sunday.
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Returns the grid as six rows of seven days.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }
}

/// Builds the month grid for `year`/`month`.
///
/// The set of dates depends only on `year` and `month`; `today` only
/// controls the `is_today` flag.
///
/// # Errors
///
/// Returns an error if the month or any of the 42 grid dates falls outside
/// the representable date range.
pub fn build_month_grid(
    rules: &[CollectionRule],
    year: i32,
    month: Month,
    today: Date,
) -> Result<MonthGrid, DomainError> {
    let first: Date = Date::from_calendar_date(year, month, 1)
        .map_err(|_| DomainError::InvalidCalendarMonth { year, month })?;

    // Back up to the Sunday on or before the 1st
    let grid_start: Date = add_days(first, -i64::from(weekday_index(first)))?;

    let mut cells: Vec<GridCell> = Vec::with_capacity(GRID_CELL_COUNT);
    for offset in 0..GRID_CELL_COUNT {
        // Offset is bounded by GRID_CELL_COUNT
        #[allow(clippy::cast_possible_wrap)]
        let date: Date = add_days(grid_start, offset as i64)?;

        cells.push(GridCell {
            date,
            in_month: date.month() == month && date.year() == year,
            is_today: date == today,
            rules: rules_on_date(rules, date),
        });
    }

    Ok(MonthGrid { year, month, cells })
}

/// A displayed year/month pair with wrap-around navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    /// The year.
    pub year: i32,
    /// The month.
    pub month: Month,
}

impl MonthCursor {
    /// Creates a cursor positioned on the month containing `date`.
    #[must_use]
    pub const fn containing(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the following month, rolling December into January.
    ///
    /// Returns `None` when the year would overflow.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self.month {
            Month::December => Some(Self {
                year: self.year.checked_add(1)?,
                month: Month::January,
            }),
            month => Some(Self {
                year: self.year,
                month: month.next(),
            }),
        }
    }

    /// Returns the preceding month, rolling January into December.
    ///
    /// Returns `None` when the year would underflow.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        match self.month {
            Month::January => Some(Self {
                year: self.year.checked_sub(1)?,
                month: Month::December,
            }),
            month => Some(Self {
                year: self.year,
                month: month.previous(),
            }),
        }
    }
}
