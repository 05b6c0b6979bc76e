// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One-shot reminder timers.
//!
//! Each armed reminder is a tokio task that sleeps for its delay and then
//! hands the payload to the host. A timer slot moves from `Armed` to
//! `Fired` when its task completes. Cancelling aborts the task; an aborted
//! slot is dropped from the set and never delivers.

use bincal_domain::ScheduledTrigger;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::NotifyError;
use crate::host::{NotificationHost, NotificationPayload};

/// Lifecycle state of an armed timer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Waiting for its fire time.
    Armed,
    /// Delivered (or attempted delivery).
    Fired,
}

/// A trigger together with the state of its timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTrigger {
    pub trigger: ScheduledTrigger,
    pub state: TimerState,
}

struct ArmedTimer {
    trigger: ScheduledTrigger,
    handle: JoinHandle<()>,
}

/// The set of currently armed timers.
#[derive(Default)]
pub struct TimerSet {
    timers: Vec<ArmedTimer>,
}

impl TimerSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { timers: Vec::new() }
    }

    /// Arms a timer that delivers `trigger` through `host` after `delay`.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::NoRuntime` if called outside a tokio runtime.
    pub fn arm<H: NotificationHost>(
        &mut self,
        host: &Arc<H>,
        trigger: ScheduledTrigger,
        delay: Duration,
        icon: Option<&str>,
    ) -> Result<(), NotifyError> {
        let runtime: Handle = Handle::try_current().map_err(|_| NotifyError::NoRuntime)?;

        let payload: NotificationPayload = NotificationPayload {
            title: trigger.title.clone(),
            body: trigger.body.clone(),
            icon: icon.map(str::to_string),
            tag: trigger.tag.clone(),
        };
        let host: Arc<H> = Arc::clone(host);

        let handle: JoinHandle<()> = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            match host.deliver(&payload) {
                Ok(()) => info!(tag = %payload.tag, "Delivered reminder"),
                Err(e) => warn!(tag = %payload.tag, error = %e, "Reminder delivery failed"),
            }
        });

        debug!(tag = %trigger.tag, fire_at = %trigger.fire_at, "Armed reminder");
        self.timers.push(ArmedTimer { trigger, handle });
        Ok(())
    }

    /// Aborts every timer and empties the set.
    ///
    /// Returns the number of timers that had not fired yet.
    pub fn cancel_all(&mut self) -> usize {
        let mut cancelled: usize = 0;
        for timer in self.timers.drain(..) {
            if !timer.handle.is_finished() {
                cancelled += 1;
            }
            timer.handle.abort();
        }
        cancelled
    }

    /// Returns the number of timer slots (armed or fired).
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Returns every slot with its current state, in arming order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PendingTrigger> {
        self.timers
            .iter()
            .map(|timer| PendingTrigger {
                trigger: timer.trigger.clone(),
                state: if timer.handle.is_finished() {
                    TimerState::Fired
                } else {
                    TimerState::Armed
                },
            })
            .collect()
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
