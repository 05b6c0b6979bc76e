// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collection reminders for bincal.
//!
//! This crate turns the pure trigger plan from `bincal-domain` into armed
//! one-shot timers, and owns all mutable reminder state behind
//! `ScheduleController`.
//!
//! ## Lifecycle of a reminder slot
//!
//! ```text
//! Unarmed -> Armed -> Fired
//!            Armed -> Cancelled   (any reschedule or teardown)
//! ```
//!
//! A fired slot is never re-armed; only a fresh `reschedule` pass creates
//! new slots, and it only considers future fire times.
//!
//! ## Testing
//!
//! Tests run on tokio's paused clock, so a three-week schedule plays out
//! instantly and deterministically.

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
#![allow(clippy::multiple_crate_versions)]

mod controller;
mod error;
mod host;
mod scheduler;
mod status;
mod timers;

#[cfg(test)]
mod tests;

pub use controller::ScheduleController;
pub use error::NotifyError;
pub use host::{DEFAULT_ICON, NotificationHost, NotificationPayload, Permission};
pub use scheduler::NotificationScheduler;
pub use status::SchedulerStatus;
pub use timers::{PendingTrigger, TimerSet, TimerState};
