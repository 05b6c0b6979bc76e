// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_alert, create_test_rules, custom_only, default_only};
use crate::{
    AlertTime, CollectionRule, CustomAlert, LOOKAHEAD_DAYS, NotificationPreferences,
    ScheduledTrigger, TriggerSource, plan_triggers,
};
use std::collections::HashSet;
use time::PrimitiveDateTime;
use time::macros::{date, datetime};

fn burnable_only() -> Vec<CollectionRule> {
    vec![CollectionRule::weekly("burnable", "Burnable", &[2, 5]).unwrap()]
}

#[test]
fn test_default_reminder_fires_evening_before() {
    let now: PrimitiveDateTime = datetime!(2024 - 03 - 11 09:00);

    let triggers: Vec<ScheduledTrigger> = plan_triggers(&burnable_only(), &default_only(), now);

    let friday: &ScheduledTrigger = triggers
        .iter()
        .find(|t| t.collection_date == date!(2024 - 03 - 15))
        .unwrap();
    assert_eq!(friday.fire_at, datetime!(2024 - 03 - 14 20:00));
    assert_eq!(friday.tag, "default-2024-03-15");
    assert_eq!(friday.source, TriggerSource::Default);
    assert_eq!(friday.body, "Tomorrow (2024-03-15): Burnable");
}

#[test]
fn test_default_reminders_cover_lookahead_window() {
    let now: PrimitiveDateTime = datetime!(2024 - 03 - 11 09:00);

    let triggers: Vec<ScheduledTrigger> = plan_triggers(&burnable_only(), &default_only(), now);

    let dates: Vec<_> = triggers.iter().map(|t| t.collection_date).collect();
    assert_eq!(
        dates,
        vec![
            date!(2024 - 03 - 12),
            date!(2024 - 03 - 15),
            date!(2024 - 03 - 19),
            date!(2024 - 03 - 22),
            date!(2024 - 03 - 26),
            date!(2024 - 03 - 29),
        ]
    );
}

#[test]
fn test_past_trigger_times_are_skipped() {
    // The reminder for Tuesday the 12th fired at 20:00 on the 11th
    let now: PrimitiveDateTime = datetime!(2024 - 03 - 11 21:00);

    let triggers: Vec<ScheduledTrigger> = plan_triggers(&burnable_only(), &default_only(), now);

    assert_eq!(triggers.len(), 5);
    assert_eq!(triggers[0].collection_date, date!(2024 - 03 - 15));
    assert!(triggers.iter().all(|t| t.fire_at > now));
}

#[test]
fn test_lookahead_includes_today_and_stops_after_window() {
    let daily: Vec<CollectionRule> =
        vec![CollectionRule::weekly("daily", "Daily", &[0, 1, 2, 3, 4, 5, 6]).unwrap()];
    let now: PrimitiveDateTime = datetime!(2024 - 01 - 01 00:00);

    let triggers: Vec<ScheduledTrigger> = plan_triggers(&daily, &default_only(), now);

    // Today's reminder would have fired yesterday; the rest of the window remains
    assert_eq!(triggers.len(), usize::try_from(LOOKAHEAD_DAYS - 1).unwrap());
    assert_eq!(triggers[0].collection_date, date!(2024 - 01 - 02));
    assert_eq!(
        triggers.last().unwrap().collection_date,
        date!(2024 - 01 - 21)
    );
}

#[test]
fn test_custom_alert_names_only_intersecting_rules() {
    let mut alert: CustomAlert = create_test_alert("a1", &["paper"]);
    alert.time = AlertTime::from_hm(6, 30).unwrap();
    let prefs: NotificationPreferences = custom_only(vec![alert]);
    let now: PrimitiveDateTime = datetime!(2024 - 05 - 01 00:00);

    let triggers: Vec<ScheduledTrigger> = plan_triggers(&create_test_rules(), &prefs, now);

    // May 1 (1st Wednesday) fired on April 30; May 15 (3rd Wednesday) remains
    assert_eq!(triggers.len(), 1);
    let trigger: &ScheduledTrigger = &triggers[0];
    assert_eq!(trigger.fire_at, datetime!(2024 - 05 - 14 06:30));
    assert_eq!(trigger.tag, "custom-a1-2024-05-15");
    assert_eq!(trigger.rule_ids, vec![String::from("paper")]);
    assert_eq!(trigger.body, "Tomorrow (2024-05-15): Paper and cloth");
    assert_eq!(
        trigger.source,
        TriggerSource::Custom {
            alert_id: String::from("a1")
        }
    );
}

#[test]
fn test_default_reminder_names_every_rule_of_the_day() {
    let now: PrimitiveDateTime = datetime!(2024 - 05 - 01 00:00);

    let triggers: Vec<ScheduledTrigger> =
        plan_triggers(&create_test_rules(), &default_only(), now);

    let wednesday: &ScheduledTrigger = triggers
        .iter()
        .find(|t| t.tag == "default-2024-05-15")
        .unwrap();
    assert_eq!(
        wednesday.body,
        "Tomorrow (2024-05-15): Plastic packaging, Paper and cloth"
    );
}

#[test]
fn test_default_and_custom_alerts_produce_distinct_tags() {
    let prefs: NotificationPreferences = NotificationPreferences {
        default_enabled: true,
        custom_alerts: vec![
            create_test_alert("a1", &["burnable"]),
            create_test_alert("a2", &["burnable", "plastic"]),
        ],
    };
    let now: PrimitiveDateTime = datetime!(2024 - 03 - 11 09:00);

    let triggers: Vec<ScheduledTrigger> = plan_triggers(&create_test_rules(), &prefs, now);

    let tags: HashSet<&str> = triggers.iter().map(|t| t.tag.as_str()).collect();
    assert_eq!(tags.len(), triggers.len());
    assert!(tags.contains("default-2024-03-15"));
    assert!(tags.contains("custom-a1-2024-03-15"));
    assert!(tags.contains("custom-a2-2024-03-13"));
    assert!(!tags.contains("custom-a1-2024-03-13"));
}

#[test]
fn test_planning_is_deterministic() {
    let prefs: NotificationPreferences = NotificationPreferences {
        default_enabled: true,
        custom_alerts: vec![create_test_alert("a1", &["paper", "nonburnable"])],
    };
    let now: PrimitiveDateTime = datetime!(2024 - 06 - 03 12:34);

    let first: Vec<ScheduledTrigger> = plan_triggers(&create_test_rules(), &prefs, now);
    let second: Vec<ScheduledTrigger> = plan_triggers(&create_test_rules(), &prefs, now);

    assert_eq!(first, second);
}

#[test]
fn test_custom_alert_with_unmatched_categories_plans_nothing() {
    let prefs: NotificationPreferences = custom_only(vec![create_test_alert("a1", &["ghost"])]);
    let now: PrimitiveDateTime = datetime!(2024 - 03 - 11 09:00);

    assert!(plan_triggers(&create_test_rules(), &prefs, now).is_empty());
}
