// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reminder scheduling.
//!
//! `reschedule` is the only way timers change. Every pass cancels all armed
//! timers, checks the gates and arms the full plan again from scratch, so
//! repeated passes with the same inputs leave the same timers behind and
//! the most recent pass always wins.
//!
//! ## Gates (checked in order)
//!
//! 1. The host supports notifications (`Unsupported`)
//! 2. Rules are loaded (`NotReady`)
//! 3. At least one alert is active (`Inactive`)
//! 4. Permission is granted (`PermissionRequired` / `PermissionDenied`)

use bincal_domain::{CollectionRule, NotificationPreferences, plan_triggers, trigger_delay};
use std::sync::Arc;
use std::time::Duration;
use time::PrimitiveDateTime;
use tracing::{debug, info, warn};

use crate::host::{DEFAULT_ICON, NotificationHost, Permission};
use crate::status::SchedulerStatus;
use crate::timers::{PendingTrigger, TimerSet};

/// Owns the armed timers and the host they deliver through.
pub struct NotificationScheduler<H: NotificationHost> {
    host: Arc<H>,
    timers: TimerSet,
    icon: Option<String>,
    status: SchedulerStatus,
}

impl<H: NotificationHost> NotificationScheduler<H> {
    /// Creates a scheduler with no armed timers.
    #[must_use]
    pub fn new(host: Arc<H>) -> Self {
        Self {
            host,
            timers: TimerSet::new(),
            icon: Some(String::from(DEFAULT_ICON)),
            status: SchedulerStatus::NotReady,
        }
    }

    /// Overrides the icon attached to reminders. `None` sends no icon.
    #[must_use]
    pub fn with_icon(mut self, icon: Option<&str>) -> Self {
        self.icon = icon.map(str::to_string);
        self
    }

    /// Returns the host.
    #[must_use]
    pub const fn host(&self) -> &Arc<H> {
        &self.host
    }

    /// Returns the status of the most recent pass.
    #[must_use]
    pub const fn status(&self) -> SchedulerStatus {
        self.status
    }

    /// Returns the timers left by the most recent pass.
    #[must_use]
    pub fn pending_triggers(&self) -> Vec<PendingTrigger> {
        self.timers.snapshot()
    }

    /// Cancels every armed timer without re-arming.
    pub fn cancel_all(&mut self) {
        let cancelled: usize = self.timers.cancel_all();
        debug!(cancelled, "Cancelled armed reminders");
    }

    /// Cancels everything and re-arms reminders for the next lookahead window.
    ///
    /// Must be called from within a tokio runtime for timers to be armed;
    /// outside one the plan is computed but nothing is armed.
    pub fn reschedule(
        &mut self,
        rules: &[CollectionRule],
        preferences: &NotificationPreferences,
        now: PrimitiveDateTime,
    ) -> SchedulerStatus {
        let cancelled: usize = self.timers.cancel_all();
        if cancelled > 0 {
            debug!(cancelled, "Cancelled armed reminders");
        }

        self.status = self.arm(rules, preferences, now);
        info!(status = ?self.status, "Rescheduled reminders");
        self.status
    }

    fn arm(
        &mut self,
        rules: &[CollectionRule],
        preferences: &NotificationPreferences,
        now: PrimitiveDateTime,
    ) -> SchedulerStatus {
        if !self.host.is_supported() {
            return SchedulerStatus::Unsupported;
        }
        if rules.is_empty() {
            return SchedulerStatus::NotReady;
        }
        if !preferences.is_active() {
            return SchedulerStatus::Inactive;
        }
        match self.host.permission() {
            Permission::Granted => {}
            Permission::Default => return SchedulerStatus::PermissionRequired,
            Permission::Denied => return SchedulerStatus::PermissionDenied,
        }

        let mut armed: usize = 0;
        for trigger in plan_triggers(rules, preferences, now) {
            let Some(delay): Option<Duration> = trigger_delay(now, trigger.fire_at) else {
                debug!(tag = %trigger.tag, "Skipping reminder outside the timer range");
                continue;
            };

            let tag: String = trigger.tag.clone();
            match self
                .timers
                .arm(&self.host, trigger, delay, self.icon.as_deref())
            {
                Ok(()) => armed += 1,
                Err(e) => warn!(tag = %tag, error = %e, "Could not arm reminder"),
            }
        }

        SchedulerStatus::Scheduled { armed }
    }
}
