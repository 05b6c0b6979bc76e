// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bincal_domain::LOOKAHEAD_DAYS;

/// Outcome of the last scheduling pass, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerStatus {
    /// The host cannot deliver notifications.
    Unsupported,
    /// No rules are loaded yet.
    NotReady,
    /// Neither the default reminder nor any custom alert is enabled.
    Inactive,
    /// The user has not been asked for permission yet.
    PermissionRequired,
    /// The user refused permission.
    PermissionDenied,
    /// Timers are armed.
    Scheduled {
        /// Number of timers armed by the pass.
        armed: usize,
    },
}

impl SchedulerStatus {
    /// Returns a one-line message describing the status.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Unsupported => {
                String::from("Notifications are not supported in this environment")
            }
            Self::NotReady => String::from("The collection schedule has not been loaded yet"),
            Self::Inactive => String::from("Reminders are turned off"),
            Self::PermissionRequired => {
                String::from("Allow notifications to receive collection reminders")
            }
            Self::PermissionDenied => {
                String::from("Notifications are blocked, so no reminders will be shown")
            }
            Self::Scheduled { armed: 0 } => {
                format!("Reminders are on. Nothing is due in the next {LOOKAHEAD_DAYS} days")
            }
            Self::Scheduled { armed: 1 } => String::from("1 reminder scheduled"),
            Self::Scheduled { armed } => format!("{armed} reminders scheduled"),
        }
    }

    /// Returns whether timers were armed (possibly zero of them).
    #[must_use]
    pub const fn is_scheduled(&self) -> bool {
        matches!(self, Self::Scheduled { .. })
    }
}

impl std::fmt::Display for SchedulerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denied_and_required_are_distinct() {
        assert_ne!(
            SchedulerStatus::PermissionDenied.message(),
            SchedulerStatus::PermissionRequired.message()
        );
    }

    #[test]
    fn test_scheduled_messages() {
        assert_eq!(
            SchedulerStatus::Scheduled { armed: 3 }.to_string(),
            "3 reminders scheduled"
        );
        assert_eq!(
            SchedulerStatus::Scheduled { armed: 1 }.to_string(),
            "1 reminder scheduled"
        );
        assert!(SchedulerStatus::Scheduled { armed: 0 }.is_scheduled());
        assert!(!SchedulerStatus::Inactive.is_scheduled());
    }
}
