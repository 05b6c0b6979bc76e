// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The host notification facility.
//!
//! The scheduler never talks to an operating system or browser directly.
//! Everything it needs from the outside world goes through
//! `NotificationHost`: whether notifications can be shown at all, the
//! current permission, asking for permission, and showing one notification.

use std::future::Future;

use crate::error::NotifyError;

/// Icon attached to every reminder.
pub const DEFAULT_ICON: &str = "icons/icon-192.svg";

/// The user's answer to a notification permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Notifications may be shown.
    Granted,
    /// The user refused.
    Denied,
    /// The user has not been asked yet.
    Default,
}

/// What the host displays when a reminder fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPayload {
    pub title: String,
    pub body: String,
    pub icon: Option<String>,
    /// Replaces any displayed notification with the same tag.
    pub tag: String,
}

/// Host notification facility.
pub trait NotificationHost: Send + Sync + 'static {
    /// Returns whether the host can deliver notifications at all.
    fn is_supported(&self) -> bool;

    /// Returns the current permission without prompting.
    fn permission(&self) -> Permission;

    /// Prompts the user for permission and resolves with the answer.
    fn request_permission(&self) -> impl Future<Output = Permission> + Send;

    /// Displays a notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the host could not display it.
    fn deliver(&self, payload: &NotificationPayload) -> Result<(), NotifyError>;
}
