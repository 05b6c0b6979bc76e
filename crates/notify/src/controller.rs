// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The single owner of mutable reminder state.
//!
//! `ScheduleController` holds the loaded rules, the current preferences,
//! the preference store and the scheduler. Every user action goes through
//! one of its methods, which
//!
//! 1. applies a `Command` to the preferences,
//! 2. saves the result before anything else happens,
//! 3. re-runs `reschedule` against the new state.

use bincal::{Command, TransitionResult, apply};
use bincal_domain::{CollectionRule, NotificationPreferences};
use bincal_persistence::{KeyValueStore, PersistenceError, load_preferences, save_preferences};
use std::sync::Arc;
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing::{info, warn};

use crate::error::NotifyError;
use crate::host::{NotificationHost, Permission};
use crate::scheduler::NotificationScheduler;
use crate::status::SchedulerStatus;
use crate::timers::PendingTrigger;

/// Owns rules, preferences, storage and timers.
pub struct ScheduleController<S: KeyValueStore, H: NotificationHost> {
    store: S,
    scheduler: NotificationScheduler<H>,
    rules: Vec<CollectionRule>,
    preferences: NotificationPreferences,
}

impl<S: KeyValueStore, H: NotificationHost> ScheduleController<S, H> {
    /// Creates a controller, loading preferences from `store`.
    ///
    /// No rules are loaded and no timers are armed until
    /// `set_schedule_rules` is called.
    pub fn new(mut store: S, host: Arc<H>) -> Self {
        let preferences: NotificationPreferences = load_preferences(&mut store);
        Self {
            store,
            scheduler: NotificationScheduler::new(host),
            rules: Vec::new(),
            preferences,
        }
    }

    /// Replaces the scheduler, for example to change the reminder icon.
    #[must_use]
    pub fn with_scheduler(mut self, scheduler: NotificationScheduler<H>) -> Self {
        self.scheduler = scheduler;
        self
    }

    #[must_use]
    pub fn rules(&self) -> &[CollectionRule] {
        &self.rules
    }

    #[must_use]
    pub const fn preferences(&self) -> &NotificationPreferences {
        &self.preferences
    }

    /// Returns the status of the most recent scheduling pass.
    #[must_use]
    pub const fn status(&self) -> SchedulerStatus {
        self.scheduler.status()
    }

    #[must_use]
    pub fn pending_triggers(&self) -> Vec<PendingTrigger> {
        self.scheduler.pending_triggers()
    }

    /// Installs a new rule set, reconciles custom alerts against it and
    /// reschedules.
    ///
    /// The reconciled preferences and the new schedule take effect even when
    /// saving fails, so no reminder from the previous rule set stays armed.
    ///
    /// # Errors
    ///
    /// Returns an error if reconciled preferences cannot be saved.
    pub fn set_schedule_rules(
        &mut self,
        rules: Vec<CollectionRule>,
        now: PrimitiveDateTime,
    ) -> Result<SchedulerStatus, NotifyError> {
        info!(count = rules.len(), "Installing collection rules");
        self.rules = rules;

        let result: TransitionResult =
            apply(&self.preferences, &self.rules, Command::ReconcileRules)?;
        let saved: Result<(), PersistenceError> = if result.changed {
            save_preferences(&mut self.store, &result.new_preferences)
        } else {
            Ok(())
        };
        if let Err(e) = &saved {
            warn!(error = %e, "Could not save reconciled preferences, keeping them in memory");
        }

        log_action(&result);
        self.preferences = result.new_preferences;
        let status: SchedulerStatus = self.refresh(now);
        saved?;
        Ok(status)
    }

    /// Turns the default reminder on or off.
    ///
    /// Turning it on asks for permission when the user has not been asked
    /// yet. If permission ends up refused the toggle is reverted and nothing
    /// is saved, and `PermissionDenied` is returned whatever the state of
    /// any custom alerts.
    ///
    /// `clock` is read after the prompt resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the new preferences cannot be saved.
    pub async fn on_toggle_default<C>(
        &mut self,
        enabled: bool,
        clock: C,
    ) -> Result<SchedulerStatus, NotifyError>
    where
        C: Fn() -> PrimitiveDateTime,
    {
        if enabled && self.ensure_permission().await == Permission::Denied {
            warn!("Notification permission denied, default reminder left unchanged");
            self.refresh(clock());
            return Ok(SchedulerStatus::PermissionDenied);
        }

        self.execute(Command::SetDefaultEnabled { enabled })?;
        Ok(self.refresh(clock()))
    }

    /// Adds a custom alert and returns its generated id.
    ///
    /// Asks for permission when the user has not been asked yet; the alert
    /// is kept even if permission is refused. `clock` is read after the
    /// prompt resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No rules are loaded
    /// - No category survives normalization
    /// - The preferences cannot be saved
    pub async fn on_add_custom_alert<C>(
        &mut self,
        time: Option<&str>,
        categories: &[String],
        clock: C,
    ) -> Result<(String, SchedulerStatus), NotifyError>
    where
        C: Fn() -> PrimitiveDateTime,
    {
        let timestamp: i64 = OffsetDateTime::now_utc().unix_timestamp();
        let id: String = format!("alert_{timestamp}_{}", rand::random::<u64>());

        self.execute(Command::AddCustomAlert {
            id: id.clone(),
            time: time.map(str::to_string),
            categories: categories.to_vec(),
        })?;

        self.ensure_permission().await;
        Ok((id, self.refresh(clock())))
    }

    /// Removes a custom alert. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences cannot be saved.
    pub fn on_remove_custom_alert(
        &mut self,
        id: &str,
        now: PrimitiveDateTime,
    ) -> Result<SchedulerStatus, NotifyError> {
        self.execute(Command::RemoveCustomAlert {
            id: id.to_string(),
        })?;
        Ok(self.refresh(now))
    }

    /// Cancels all timers and hands back the preference store.
    pub fn into_store(mut self) -> S {
        self.scheduler.cancel_all();
        self.store
    }

    /// Re-derives and re-arms every reminder from the current state.
    pub fn refresh(&mut self, now: PrimitiveDateTime) -> SchedulerStatus {
        self.scheduler
            .reschedule(&self.rules, &self.preferences, now)
    }

    /// Prompts only when the user has not been asked yet. Unsupported
    /// hosts are never prompted.
    async fn ensure_permission(&self) -> Permission {
        let host: &Arc<H> = self.scheduler.host();
        if !host.is_supported() {
            return Permission::Default;
        }

        match host.permission() {
            Permission::Default => {
                let answer: Permission = host.request_permission().await;
                info!(permission = ?answer, "Notification permission requested");
                answer
            }
            current => current,
        }
    }

    /// Applies a command and saves the result when it changed anything.
    fn execute(&mut self, command: Command) -> Result<(), NotifyError> {
        let result: TransitionResult = apply(&self.preferences, &self.rules, command)?;

        if result.changed {
            save_preferences(&mut self.store, &result.new_preferences)?;
        }

        log_action(&result);
        self.preferences = result.new_preferences;
        Ok(())
    }
}

fn log_action(result: &TransitionResult) {
    info!(
        action = %result.action.name,
        details = result.action.details.as_deref().unwrap_or(""),
        changed = result.changed,
        "Applied preference command"
    );
}
