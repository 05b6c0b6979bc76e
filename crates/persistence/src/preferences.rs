// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification preference storage.
//!
//! Loading never fails: a missing, unreadable or malformed document yields
//! the default preferences. Saving reports errors to the caller.

use bincal_domain::NotificationPreferences;
use tracing::{debug, warn};

use crate::error::PersistenceError;
use crate::store::KeyValueStore;

/// Fixed key under which the preference document is stored.
pub const PREFERENCES_KEY: &str = "bincal.notification-preferences";

/// Loads notification preferences, falling back to defaults.
///
/// Alerts with an empty id or no categories are dropped on load.
pub fn load_preferences<S: KeyValueStore + ?Sized>(store: &mut S) -> NotificationPreferences {
    let raw: String = match store.read(PREFERENCES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No stored notification preferences, using defaults");
            return NotificationPreferences::default();
        }
        Err(e) => {
            warn!(error = %e, "Failed to read notification preferences, using defaults");
            return NotificationPreferences::default();
        }
    };

    match serde_json::from_str::<NotificationPreferences>(&raw) {
        Ok(mut preferences) => {
            preferences
                .custom_alerts
                .retain(|alert| !alert.id.trim().is_empty() && !alert.categories.is_empty());
            preferences
        }
        Err(e) => {
            warn!(error = %e, "Stored notification preferences are malformed, using defaults");
            NotificationPreferences::default()
        }
    }
}

/// Persists notification preferences.
///
/// # Errors
///
/// Returns an error if serialization or the store write fails.
pub fn save_preferences<S: KeyValueStore + ?Sized>(
    store: &mut S,
    preferences: &NotificationPreferences,
) -> Result<(), PersistenceError> {
    let raw: String = serde_json::to_string(preferences)?;
    store.write(PREFERENCES_KEY, &raw)?;
    debug!(
        default_enabled = preferences.default_enabled,
        custom_alerts = preferences.custom_alerts.len(),
        "Saved notification preferences"
    );
    Ok(())
}
