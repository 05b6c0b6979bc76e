// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Occurrence engine.
//!
//! `occurs_on_date` is the single recurrence predicate. Everything that
//! enumerates collection days (month grid, upcoming list, trigger planning)
//! is built on it.
//!
//! ## Invariants
//!
//! - The predicate is total: a rule of an unrecognized kind never matches
//! - The predicate is pure and deterministic in `(rule, date)`
//! - Projected occurrences are strictly increasing by date
//! - Projected occurrences never contain a date without a matching rule

use crate::calendar::ordinal_in_month;
use crate::rule::{CollectionRule, Recurrence};
use time::Date;

/// A calendar date paired with the rules that fire on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// The collection date.
    pub date: Date,
    /// The matching rules, in rule-set order. Never empty.
    pub rules: Vec<CollectionRule>,
}

impl Occurrence {
    /// Returns the ids of the matching rules.
    #[must_use]
    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.iter().map(CollectionRule::id).collect()
    }

    /// Returns the display names of the matching rules.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(CollectionRule::name).collect()
    }
}

/// Returns whether a rule fires on a calendar date.
///
/// - Weekly: true iff the date's weekday is one of the rule's weekdays.
/// - Monthly: true iff the weekday matches and the date's ordinal-in-month
///   (`(day - 1) / 7 + 1`) is one of the rule's ordinals.
/// - Unrecognized: always false.
#[must_use]
pub fn occurs_on_date(rule: &CollectionRule, date: Date) -> bool {
    match rule.recurrence() {
        Recurrence::Weekly { weekdays } => weekdays.contains(&date.weekday()),
        Recurrence::Monthly { weekday, ordinals } => {
            date.weekday() == *weekday && ordinals.contains(&ordinal_in_month(date))
        }
        Recurrence::Unrecognized { .. } => false,
    }
}

/// Returns every rule that fires on a date, in rule-set order.
#[must_use]
pub fn rules_on_date(rules: &[CollectionRule], date: Date) -> Vec<CollectionRule> {
    rules
        .iter()
        .filter(|rule| occurs_on_date(rule, date))
        .cloned()
        .collect()
}

/// Enumerates collection days over a bounded window.
///
/// Walks `day_count` consecutive days starting at `start` (inclusive) and
/// returns one `Occurrence` per day on which at least one rule fires. Days
/// without a match are omitted. The walk stops early if it reaches the end
/// of the representable date range.
#[must_use]
pub fn project_occurrences(
    rules: &[CollectionRule],
    start: Date,
    day_count: u32,
) -> Vec<Occurrence> {
    let mut occurrences: Vec<Occurrence> = Vec::new();
    let mut cursor: Option<Date> = Some(start);

    for _ in 0..day_count {
        let Some(date) = cursor else {
            break;
        };

        let matching: Vec<CollectionRule> = rules_on_date(rules, date);
        if !matching.is_empty() {
            occurrences.push(Occurrence {
                date,
                rules: matching,
            });
        }

        cursor = date.next_day();
    }

    occurrences
}
