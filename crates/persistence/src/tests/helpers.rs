// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bincal_domain::{CustomAlert, DEFAULT_ALERT_TIME, NotificationPreferences};

pub fn create_test_preferences() -> NotificationPreferences {
    NotificationPreferences {
        default_enabled: false,
        custom_alerts: vec![CustomAlert {
            id: String::from("a1"),
            time: DEFAULT_ALERT_TIME,
            categories: vec![String::from("paper"), String::from("plastic")],
        }],
    }
}
