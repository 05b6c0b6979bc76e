// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use color_eyre::Result;
use time::{Date, Month, PrimitiveDateTime, Time};

/// Returns the local wall-clock time, truncated to whole seconds.
///
/// # Errors
///
/// Returns an error if the system clock is outside the supported range.
pub fn local_now() -> Result<PrimitiveDateTime> {
    to_primitive(Local::now().naive_local())
}

/// Converts a chrono local timestamp to a `time` one, dropping sub-seconds.
///
/// # Errors
///
/// Returns an error if any component is out of range for `time`.
pub fn to_primitive(naive: NaiveDateTime) -> Result<PrimitiveDateTime> {
    let month: Month = Month::try_from(u8::try_from(naive.month())?)?;
    let date: Date = Date::from_calendar_date(naive.year(), month, u8::try_from(naive.day())?)?;
    let time: Time = Time::from_hms(
        u8::try_from(naive.hour())?,
        u8::try_from(naive.minute())?,
        u8::try_from(naive.second())?,
    )?;
    Ok(PrimitiveDateTime::new(date, time))
}
