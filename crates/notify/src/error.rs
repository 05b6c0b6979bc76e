// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bincal::CoreError;
use bincal_persistence::PersistenceError;
use thiserror::Error;

/// Errors raised by the notification layer.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// A preference command was rejected.
    #[error(transparent)]
    Command(#[from] CoreError),

    /// Preferences could not be saved.
    #[error("Failed to persist notification preferences: {0}")]
    Persistence(#[from] PersistenceError),

    /// The host failed to display a notification.
    #[error("Failed to deliver notification '{tag}': {reason}")]
    DeliveryFailed { tag: String, reason: String },

    /// Timers were requested outside a tokio runtime.
    #[error("No async runtime is available to arm timers")]
    NoRuntime,
}
