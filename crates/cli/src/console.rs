// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bincal_notify::{NotificationHost, NotificationPayload, NotifyError, Permission};
use std::io::Write;
use tracing::info;

/// Delivers reminders by printing them to standard output.
///
/// A terminal needs no permission, so it is always granted.
#[derive(Debug, Default)]
pub struct ConsoleHost;

impl NotificationHost for ConsoleHost {
    fn is_supported(&self) -> bool {
        true
    }

    fn permission(&self) -> Permission {
        Permission::Granted
    }

    async fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    fn deliver(&self, payload: &NotificationPayload) -> Result<(), NotifyError> {
        info!(tag = %payload.tag, "Showing reminder");
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "[{}] {}: {}", payload.tag, payload.title, payload.body).map_err(|e| {
            NotifyError::DeliveryFailed {
                tag: payload.tag.clone(),
                reason: e.to_string(),
            }
        })
    }
}
