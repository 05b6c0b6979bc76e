// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification trigger planning.
//!
//! This module derives every future reminder from the rule set, the user's
//! preferences and the current wall-clock time. It does not arm anything;
//! the scheduler turns the plan into timers.
//!
//! ## Invariants
//!
//! - Triggers are recomputed from scratch on every pass (no diffing)
//! - A trigger fires one calendar day before its collection date
//! - Only triggers with a strictly positive delay no larger than
//!   `MAX_TIMER_DELAY` are planned
//! - Tags are unique per (alert, collection date) pair
//!
//! ## Example
//!
//! ```text
//! collection date = 2024-03-15 (Friday)
//! alert time      = 20:00
//! fires at        = 2024-03-14T20:00 local
//! tag             = default-2024-03-15
//! ```

use crate::alert_time::{AlertTime, DEFAULT_ALERT_TIME};
use crate::calendar::iso_date_key;
use crate::occurrence::{Occurrence, project_occurrences};
use crate::preferences::NotificationPreferences;
use crate::rule::CollectionRule;
use std::time::Duration;
use time::{Date, PrimitiveDateTime};

/// Number of calendar days (starting today) scanned for reminders.
pub const LOOKAHEAD_DAYS: u32 = 21;

/// Longest delay a single one-shot timer may be armed with (2^31 - 1 ms).
pub const MAX_TIMER_DELAY: Duration = Duration::from_millis(2_147_483_647);

/// Which preference produced a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TriggerSource {
    /// The built-in day-before reminder.
    Default,
    /// A user-defined alert.
    Custom {
        /// The alert's identifier.
        alert_id: String,
    },
}

/// One planned reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTrigger {
    /// Local wall-clock time at which the reminder fires.
    pub fire_at: PrimitiveDateTime,
    /// The collection date the reminder is about.
    pub collection_date: Date,
    /// Notification title.
    pub title: String,
    /// Notification body naming the covered categories.
    pub body: String,
    /// De-duplication tag (`default-<date>` or `custom-<id>-<date>`).
    pub tag: String,
    /// The preference that produced this trigger.
    pub source: TriggerSource,
    /// Ids of the rules named in the body.
    pub rule_ids: Vec<String>,
}

/// Computes when a reminder for `collection_date` fires: the previous
/// calendar day at `at`.
///
/// Returns `None` only when `collection_date` is the first representable date.
#[must_use]
pub fn trigger_time(collection_date: Date, at: AlertTime) -> Option<PrimitiveDateTime> {
    collection_date
        .previous_day()
        .map(|day_before| day_before.with_time(at.time()))
}

/// Returns how long to wait from `now` until `fire_at`.
///
/// Returns `None` if the trigger is not strictly in the future or the delay
/// exceeds `MAX_TIMER_DELAY`.
#[must_use]
pub fn trigger_delay(now: PrimitiveDateTime, fire_at: PrimitiveDateTime) -> Option<Duration> {
    let delta: time::Duration = fire_at - now;
    if !delta.is_positive() {
        return None;
    }
    Duration::try_from(delta)
        .ok()
        .filter(|delay| *delay <= MAX_TIMER_DELAY)
}

/// Plans every reminder for the next `LOOKAHEAD_DAYS` days.
///
/// For each collection day in the window:
/// - the default reminder (when enabled) names every matching rule and
///   fires the day before at `DEFAULT_ALERT_TIME`
/// - each custom alert whose categories intersect the day's rules names
///   only those rules and fires the day before at the alert's time
///
/// Triggers that would not be armable at `now` are left out.
#[must_use]
pub fn plan_triggers(
    rules: &[CollectionRule],
    preferences: &NotificationPreferences,
    now: PrimitiveDateTime,
) -> Vec<ScheduledTrigger> {
    let mut triggers: Vec<ScheduledTrigger> = Vec::new();
    if !preferences.is_active() {
        return triggers;
    }

    for occurrence in project_occurrences(rules, now.date(), LOOKAHEAD_DAYS) {
        let date_key: String = iso_date_key(occurrence.date);

        if preferences.default_enabled {
            let matched: Vec<&CollectionRule> = occurrence.rules.iter().collect();
            triggers.extend(build_trigger(
                &occurrence,
                &matched,
                DEFAULT_ALERT_TIME,
                TriggerSource::Default,
                format!("default-{date_key}"),
                now,
            ));
        }

        for alert in &preferences.custom_alerts {
            let matched: Vec<&CollectionRule> = occurrence
                .rules
                .iter()
                .filter(|rule| alert.covers(rule.id()))
                .collect();
            if matched.is_empty() {
                continue;
            }

            triggers.extend(build_trigger(
                &occurrence,
                &matched,
                alert.time,
                TriggerSource::Custom {
                    alert_id: alert.id.clone(),
                },
                format!("custom-{}-{date_key}", alert.id),
                now,
            ));
        }
    }

    triggers
}

fn build_trigger(
    occurrence: &Occurrence,
    matched: &[&CollectionRule],
    at: AlertTime,
    source: TriggerSource,
    tag: String,
    now: PrimitiveDateTime,
) -> Option<ScheduledTrigger> {
    let fire_at: PrimitiveDateTime = trigger_time(occurrence.date, at)?;
    trigger_delay(now, fire_at)?;

    let names: Vec<&str> = matched.iter().map(|rule| rule.name()).collect();
    let title: String = match source {
        TriggerSource::Default => String::from("Collection tomorrow"),
        TriggerSource::Custom { .. } => String::from("Collection reminder"),
    };

    Some(ScheduledTrigger {
        fire_at,
        collection_date: occurrence.date,
        title,
        body: format!(
            "Tomorrow ({}): {}",
            iso_date_key(occurrence.date),
            names.join(", ")
        ),
        tag,
        source,
        rule_ids: matched.iter().map(|rule| rule.id().to_string()).collect(),
    })
}
