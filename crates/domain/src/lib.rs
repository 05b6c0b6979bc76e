// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod alert_time;
mod calendar;
mod error;
mod month_grid;
mod occurrence;
mod preferences;
mod rule;
mod trigger;
mod upcoming;
mod validation;

#[cfg(test)]
mod tests;

pub use alert_time::{AlertTime, DEFAULT_ALERT_TIME, sanitize_time};
pub use calendar::{add_days, iso_date_key, ordinal_in_month, weekday_from_index, weekday_index};
pub use error::DomainError;
pub use month_grid::{
    DAYS_PER_WEEK, GRID_CELL_COUNT, GridCell, MonthCursor, MonthGrid, build_month_grid,
};
pub use occurrence::{Occurrence, occurs_on_date, project_occurrences, rules_on_date};
pub use preferences::{CustomAlert, NotificationPreferences, ReconcileReport, normalize_alert};
pub use rule::{CollectionRule, MAX_ORDINAL, Recurrence, RuleKind};
pub use trigger::{
    LOOKAHEAD_DAYS, MAX_TIMER_DELAY, ScheduledTrigger, TriggerSource, plan_triggers,
    trigger_delay, trigger_time,
};
pub use upcoming::{DEFAULT_MAX_DAYS_SCANNED, DEFAULT_UPCOMING_LIMIT, find_upcoming};
pub use validation::{rule_ids, validate_rule_set};
