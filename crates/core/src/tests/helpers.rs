// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bincal_domain::{CollectionRule, CustomAlert, DEFAULT_ALERT_TIME, NotificationPreferences};

pub fn create_test_rules() -> Vec<CollectionRule> {
    vec![
        CollectionRule::weekly("burnable", "Burnable", &[2, 5]).unwrap(),
        CollectionRule::weekly("plastic", "Plastic packaging", &[3]).unwrap(),
        CollectionRule::monthly("paper", "Paper and cloth", 3, &[1, 3]).unwrap(),
    ]
}

pub fn create_test_preferences() -> NotificationPreferences {
    NotificationPreferences {
        default_enabled: true,
        custom_alerts: vec![CustomAlert {
            id: String::from("morning"),
            time: DEFAULT_ALERT_TIME,
            categories: vec![String::from("burnable"), String::from("X")],
        }],
    }
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}
