// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Alert time-of-day values.
//!
//! User-supplied alert times are never rejected. Anything that is not a
//! strict 24-hour `HH:MM` string is coerced to `DEFAULT_ALERT_TIME`, and
//! this module is the only place where that coercion happens.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::Time;
use time::format_description::BorrowedFormatItem;
use time::macros::{format_description, time};

/// Time of day used by the default reminder and as the fallback for
/// invalid custom alert times.
pub const DEFAULT_ALERT_TIME: AlertTime = AlertTime(time!(20:00));

const HH_MM: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// A wall-clock time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlertTime(Time);

impl AlertTime {
    /// Creates an alert time from an hour and minute.
    ///
    /// Returns `None` if either component is out of range.
    #[must_use]
    pub fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        Time::from_hms(hour, minute, 0).ok().map(Self)
    }

    /// Returns the time of day.
    #[must_use]
    pub const fn time(self) -> Time {
        self.0
    }
}

impl Default for AlertTime {
    fn default() -> Self {
        DEFAULT_ALERT_TIME
    }
}

impl std::fmt::Display for AlertTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

/// Coerces raw user input into an alert time.
///
/// Accepts only a strict `HH:MM` 24-hour string (`00:00` through `23:59`).
/// Missing, malformed or out-of-range input silently yields
/// `DEFAULT_ALERT_TIME`.
#[must_use]
pub fn sanitize_time(input: Option<&str>) -> AlertTime {
    input
        .map(str::trim)
        .filter(|raw| raw.len() == 5)
        .and_then(|raw| Time::parse(raw, HH_MM).ok())
        .map_or(DEFAULT_ALERT_TIME, AlertTime)
}

impl Serialize for AlertTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepts any JSON shape so a bad `time` value never poisons the document.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTime {
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl<'de> Deserialize<'de> for AlertTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawTime::deserialize(deserializer)? {
            RawTime::Text(raw) => sanitize_time(Some(&raw)),
            RawTime::Other(_) => DEFAULT_ALERT_TIME,
        })
    }
}
