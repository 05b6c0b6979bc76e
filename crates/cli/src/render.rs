// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of calendar views.
//!
//! Each rule gets a one-letter code (`A`, `B`, ...) in rule order. A month
//! cell shows the day number, `*` for today, and the codes of the rules
//! collected that day:
//!
//! ```text
//! March 2024
//! Sun   Mon   Tue   Wed   Thu   Fri   Sat
//!                                1 A   2
//!  3     4     5 A   6 BC  7     8 A   9
//! ```

use bincal_domain::{
    CollectionRule, DEFAULT_ALERT_TIME, GridCell, MonthGrid, NotificationPreferences, Occurrence,
    iso_date_key, weekday_index,
};
use std::collections::HashMap;
use time::Date;

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const CELL_WIDTH: usize = 6;

fn rule_codes(rules: &[CollectionRule]) -> HashMap<&str, char> {
    rules
        .iter()
        .zip('A'..='Z')
        .map(|(rule, code)| (rule.id(), code))
        .collect()
}

fn weekday_label(date: Date) -> &'static str {
    WEEKDAY_LABELS[usize::from(weekday_index(date))]
}

fn cell_text(cell: &GridCell, codes: &HashMap<&str, char>) -> String {
    if !cell.in_month {
        return " ".repeat(CELL_WIDTH);
    }

    let today: char = if cell.is_today { '*' } else { ' ' };
    let marks: String = cell
        .rules
        .iter()
        .filter_map(|rule| codes.get(rule.id()))
        .collect();

    format!("{:>2}{today}{marks:<3}", cell.date.day())
}

/// Renders a month grid followed by its legend.
pub fn render_month(grid: &MonthGrid, rules: &[CollectionRule]) -> String {
    let codes: HashMap<&str, char> = rule_codes(rules);
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("{} {}", grid.month, grid.year));
    lines.push(
        WEEKDAY_LABELS
            .iter()
            .map(|label| format!("{label:<CELL_WIDTH$}"))
            .collect::<String>()
            .trim_end()
            .to_string(),
    );

    for week in grid.weeks() {
        let row: String = week.iter().map(|cell| cell_text(cell, &codes)).collect();
        lines.push(row.trim_end().to_string());
    }

    lines.push(String::new());
    for (rule, code) in rules.iter().zip('A'..='Z') {
        lines.push(format!("  {code}  {}", rule.name()));
    }
    lines.push(String::from("  *  today"));

    lines.join("\n")
}

/// Renders upcoming collection days, one per line, each followed by the
/// descriptions of its rules indented below it.
pub fn render_upcoming(upcoming: &[Occurrence], today: Date, days_scanned: u32) -> String {
    if upcoming.is_empty() {
        return format!("No collections in the next {days_scanned} days");
    }

    let tomorrow: Option<Date> = today.next_day();
    let mut lines: Vec<String> = Vec::new();

    for occurrence in upcoming {
        let suffix: &str = if occurrence.date == today {
            " (today)"
        } else if Some(occurrence.date) == tomorrow {
            " (tomorrow)"
        } else {
            ""
        };
        lines.push(format!(
            "{} {}  {}{suffix}",
            iso_date_key(occurrence.date),
            weekday_label(occurrence.date),
            occurrence.rule_names().join(", ")
        ));

        for rule in &occurrence.rules {
            if !rule.description().is_empty() {
                lines.push(format!("    {}: {}", rule.name(), rule.description()));
            }
        }
    }

    lines.join("\n")
}

/// Renders the reminder settings, naming categories by rule name.
pub fn render_alerts(preferences: &NotificationPreferences, rules: &[CollectionRule]) -> String {
    let rule_name = |id: &str| -> String {
        rules
            .iter()
            .find(|rule| rule.id() == id)
            .map_or_else(|| id.to_string(), |rule| rule.name().to_string())
    };

    let mut lines: Vec<String> = vec![if preferences.default_enabled {
        format!("Default reminder: on ({DEFAULT_ALERT_TIME} the day before)")
    } else {
        String::from("Default reminder: off")
    }];

    if preferences.custom_alerts.is_empty() {
        lines.push(String::from("Custom alerts: none"));
    } else {
        lines.push(String::from("Custom alerts:"));
        for alert in &preferences.custom_alerts {
            let names: Vec<String> = alert
                .categories
                .iter()
                .map(|category| rule_name(category))
                .collect();
            lines.push(format!("  {}  {}  {}", alert.id, alert.time, names.join(", ")));
        }
    }

    lines.join("\n")
}
