// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Action, TransitionResult};
use bincal_domain::{
    CollectionRule, CustomAlert, DomainError, NotificationPreferences, ReconcileReport,
    normalize_alert, rule_ids,
};
use std::collections::HashSet;

/// Applies a command to the preferences, producing new preferences.
///
/// # Arguments
///
/// * `preferences` - The current preferences (immutable)
/// * `rules` - The loaded rule set (may be empty before loading completes)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new preferences
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A custom alert is added before any rule is loaded
/// - A custom alert has no known category after normalization
/// - A custom alert id is already in use
pub fn apply(
    preferences: &NotificationPreferences,
    rules: &[CollectionRule],
    command: Command,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::SetDefaultEnabled { enabled } => {
            let mut new_preferences: NotificationPreferences = preferences.clone();
            new_preferences.default_enabled = enabled;

            Ok(TransitionResult {
                changed: preferences.default_enabled != enabled,
                new_preferences,
                action: Action::new(
                    String::from("SetDefaultEnabled"),
                    Some(format!("Default reminder enabled={enabled}")),
                ),
            })
        }
        Command::AddCustomAlert {
            id,
            time,
            categories,
        } => {
            if rules.is_empty() {
                return Err(CoreError::RulesNotLoaded);
            }

            if preferences.custom_alert(id.trim()).is_some() {
                return Err(CoreError::DomainViolation(DomainError::DuplicateAlertId(
                    id,
                )));
            }

            let known: HashSet<String> = rule_ids(rules);
            let alert: CustomAlert = normalize_alert(&id, time.as_deref(), &categories, &known)
                .ok_or(DomainError::EmptyAlertCategories)?;

            let details: String = format!(
                "Added alert '{}' at {} for {}",
                alert.id,
                alert.time,
                alert.categories.join(", ")
            );

            let mut new_preferences: NotificationPreferences = preferences.clone();
            new_preferences.custom_alerts.push(alert);

            Ok(TransitionResult {
                new_preferences,
                changed: true,
                action: Action::new(String::from("AddCustomAlert"), Some(details)),
            })
        }
        Command::RemoveCustomAlert { id } => {
            let mut new_preferences: NotificationPreferences = preferences.clone();
            new_preferences.custom_alerts.retain(|alert| alert.id != id);
            let changed: bool =
                new_preferences.custom_alerts.len() != preferences.custom_alerts.len();

            Ok(TransitionResult {
                new_preferences,
                changed,
                action: Action::new(
                    String::from("RemoveCustomAlert"),
                    Some(format!("Removed alert '{id}'")),
                ),
            })
        }
        Command::ReconcileRules => {
            let mut new_preferences: NotificationPreferences = preferences.clone();
            let report: ReconcileReport = new_preferences.reconcile(&rule_ids(rules));

            let details: String = if report.deferred {
                String::from("Deferred: no rules loaded")
            } else {
                format!(
                    "Pruned {} category reference(s), removed {} alert(s)",
                    report.pruned_categories,
                    report.removed_alerts.len()
                )
            };

            Ok(TransitionResult {
                new_preferences,
                changed: report.changed(),
                action: Action::new(String::from("ReconcileRules"), Some(details)),
            })
        }
    }
}
