// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification preferences.
//!
//! Preferences are the only persisted user state. They are defaulted when
//! absent or unreadable, and reconciled against the loaded rule set so that
//! custom alerts never reference a category that no longer exists.
//!
//! ## Invariants
//!
//! - Every custom alert has at least one category
//! - After reconciliation, every category names a loaded rule id
//! - Reconciliation against an empty rule set is deferred (no change)

use crate::alert_time::{AlertTime, sanitize_time};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A user-defined reminder restricted to a subset of categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAlert {
    /// Stable alert identifier.
    pub id: String,
    /// Time of day the reminder fires on the day before a collection.
    #[serde(default)]
    pub time: AlertTime,
    /// Rule ids this alert covers, in insertion order, without duplicates.
    #[serde(default)]
    pub categories: Vec<String>,
}

impl CustomAlert {
    /// Returns whether this alert covers the given rule id.
    #[must_use]
    pub fn covers(&self, rule_id: &str) -> bool {
        self.categories.iter().any(|category| category == rule_id)
    }
}

/// Persisted notification preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    /// Whether the built-in day-before reminder is armed.
    #[serde(default = "default_enabled")]
    pub default_enabled: bool,
    /// User-defined alerts, in creation order.
    #[serde(default)]
    pub custom_alerts: Vec<CustomAlert>,
}

const fn default_enabled() -> bool {
    true
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            default_enabled: true,
            custom_alerts: Vec::new(),
        }
    }
}

/// Outcome of reconciling preferences against a rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Number of dangling category references removed.
    pub pruned_categories: usize,
    /// Alerts removed because no category survived.
    pub removed_alerts: Vec<String>,
    /// Whether reconciliation was skipped because no rules are loaded.
    pub deferred: bool,
}

impl ReconcileReport {
    /// Returns whether reconciliation modified the preferences.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.pruned_categories > 0 || !self.removed_alerts.is_empty()
    }
}

impl NotificationPreferences {
    /// Returns whether at least one alert (default or custom) is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.default_enabled || !self.custom_alerts.is_empty()
    }

    /// Finds a custom alert by id.
    #[must_use]
    pub fn custom_alert(&self, id: &str) -> Option<&CustomAlert> {
        self.custom_alerts.iter().find(|alert| alert.id == id)
    }

    /// Drops category references that are not in `known_rule_ids`, then
    /// drops alerts left with no category.
    ///
    /// An empty `known_rule_ids` means the rule set is not available yet;
    /// nothing is changed and the report is marked as deferred.
    pub fn reconcile(&mut self, known_rule_ids: &HashSet<String>) -> ReconcileReport {
        if known_rule_ids.is_empty() {
            return ReconcileReport {
                deferred: true,
                ..ReconcileReport::default()
            };
        }

        let mut report: ReconcileReport = ReconcileReport::default();

        for alert in &mut self.custom_alerts {
            let before: usize = alert.categories.len();
            alert
                .categories
                .retain(|category| known_rule_ids.contains(category));
            report.pruned_categories += before - alert.categories.len();
        }

        self.custom_alerts.retain(|alert| {
            if alert.categories.is_empty() {
                report.removed_alerts.push(alert.id.clone());
                false
            } else {
                true
            }
        });

        report
    }
}

/// Normalizes raw custom-alert input.
///
/// - Category ids are trimmed, deduplicated (first occurrence wins) and
///   filtered against `known_rule_ids` when that set is non-empty
/// - The time is coerced with `sanitize_time`
///
/// # Returns
///
/// `None` if no category survives normalization.
#[must_use]
pub fn normalize_alert(
    id: &str,
    time: Option<&str>,
    categories: &[String],
    known_rule_ids: &HashSet<String>,
) -> Option<CustomAlert> {
    let mut kept: Vec<String> = Vec::with_capacity(categories.len());

    for raw in categories {
        let category: &str = raw.trim();
        if category.is_empty() || kept.iter().any(|existing| existing == category) {
            continue;
        }
        if !known_rule_ids.is_empty() && !known_rule_ids.contains(category) {
            continue;
        }
        kept.push(category.to_string());
    }

    if kept.is_empty() {
        return None;
    }

    Some(CustomAlert {
        id: id.trim().to_string(),
        time: sanitize_time(time),
        categories: kept,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::alert_time::DEFAULT_ALERT_TIME;

    fn ids(values: &[&str]) -> HashSet<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_default_preferences_enable_default_reminder() {
        let prefs: NotificationPreferences = NotificationPreferences::default();
        assert!(prefs.default_enabled);
        assert!(prefs.custom_alerts.is_empty());
        assert!(prefs.is_active());
    }

    #[test]
    fn test_serialized_shape_uses_camel_case() {
        let prefs: NotificationPreferences = NotificationPreferences {
            default_enabled: false,
            custom_alerts: vec![CustomAlert {
                id: String::from("a1"),
                time: AlertTime::from_hm(6, 30).unwrap(),
                categories: strings(&["paper"]),
            }],
        };

        let json: String = serde_json::to_string(&prefs).unwrap();
        assert_eq!(
            json,
            r#"{"defaultEnabled":false,"customAlerts":[{"id":"a1","time":"06:30","categories":["paper"]}]}"#
        );
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let prefs: NotificationPreferences =
            serde_json::from_str(r#"{"customAlerts":[{"id":"a1","categories":["paper"]}]}"#)
                .unwrap();

        assert!(prefs.default_enabled);
        assert_eq!(prefs.custom_alerts[0].time, DEFAULT_ALERT_TIME);
    }

    #[test]
    fn test_normalize_alert_dedups_and_filters() {
        let alert: CustomAlert = normalize_alert(
            "a1",
            Some("06:00"),
            &strings(&[" paper ", "paper", "ghost", "plastic"]),
            &ids(&["paper", "plastic"]),
        )
        .unwrap();

        assert_eq!(alert.categories, strings(&["paper", "plastic"]));
        assert_eq!(alert.time, AlertTime::from_hm(6, 0).unwrap());
    }

    #[test]
    fn test_normalize_alert_without_categories_is_rejected() {
        assert!(normalize_alert("a1", Some("06:00"), &[], &ids(&["paper"])).is_none());
        assert!(normalize_alert("a1", None, &strings(&["ghost"]), &ids(&["paper"])).is_none());
    }

    #[test]
    fn test_normalize_alert_coerces_bad_time() {
        let alert: CustomAlert =
            normalize_alert("a1", Some("25:99"), &strings(&["paper"]), &ids(&["paper"])).unwrap();
        assert_eq!(alert.time, DEFAULT_ALERT_TIME);
    }

    #[test]
    fn test_reconcile_prunes_and_removes() {
        let mut prefs: NotificationPreferences = NotificationPreferences {
            default_enabled: true,
            custom_alerts: vec![
                CustomAlert {
                    id: String::from("keep"),
                    time: DEFAULT_ALERT_TIME,
                    categories: strings(&["paper", "X"]),
                },
                CustomAlert {
                    id: String::from("drop"),
                    time: DEFAULT_ALERT_TIME,
                    categories: strings(&["X"]),
                },
            ],
        };

        let report: ReconcileReport = prefs.reconcile(&ids(&["paper", "plastic"]));

        assert!(report.changed());
        assert_eq!(report.pruned_categories, 2);
        assert_eq!(report.removed_alerts, strings(&["drop"]));
        assert_eq!(prefs.custom_alerts.len(), 1);
        assert_eq!(prefs.custom_alerts[0].categories, strings(&["paper"]));
    }

    #[test]
    fn test_reconcile_against_empty_rule_set_is_deferred() {
        let mut prefs: NotificationPreferences = NotificationPreferences {
            default_enabled: true,
            custom_alerts: vec![CustomAlert {
                id: String::from("a1"),
                time: DEFAULT_ALERT_TIME,
                categories: strings(&["X"]),
            }],
        };
        let before: NotificationPreferences = prefs.clone();

        let report: ReconcileReport = prefs.reconcile(&HashSet::new());

        assert!(report.deferred);
        assert!(!report.changed());
        assert_eq!(prefs, before);
    }
}
