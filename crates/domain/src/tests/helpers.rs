// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CollectionRule, CustomAlert, DEFAULT_ALERT_TIME, NotificationPreferences};

/// A rule set shaped like a real municipal calendar: two weekly and four
/// monthly categories.
pub fn create_test_rules() -> Vec<CollectionRule> {
    vec![
        CollectionRule::weekly("burnable", "Burnable", &[2, 5])
            .unwrap()
            .with_color("#ff7043"),
        CollectionRule::weekly("plastic", "Plastic packaging", &[3])
            .unwrap()
            .with_color("#26a69a"),
        CollectionRule::monthly("recyclables", "Bottles and cans", 3, &[2, 4])
            .unwrap()
            .with_color("#42a5f5"),
        CollectionRule::monthly("paper", "Paper and cloth", 3, &[1, 3])
            .unwrap()
            .with_color("#ab47bc"),
        CollectionRule::monthly("nonburnable", "Non-burnable", 4, &[1]).unwrap(),
        CollectionRule::monthly("smallMetal", "Small metal", 4, &[3]).unwrap(),
    ]
}

pub fn create_test_alert(id: &str, categories: &[&str]) -> CustomAlert {
    CustomAlert {
        id: id.to_string(),
        time: DEFAULT_ALERT_TIME,
        categories: categories.iter().map(|c| (*c).to_string()).collect(),
    }
}

pub fn default_only() -> NotificationPreferences {
    NotificationPreferences::default()
}

pub fn custom_only(alerts: Vec<CustomAlert>) -> NotificationPreferences {
    NotificationPreferences {
        default_enabled: false,
        custom_alerts: alerts,
    }
}
