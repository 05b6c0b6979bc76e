// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::occurrence::{Occurrence, rules_on_date};
use crate::rule::CollectionRule;
use time::Date;

/// Default number of collection days returned by `find_upcoming`.
pub const DEFAULT_UPCOMING_LIMIT: usize = 6;

/// Default scan horizon, in calendar days, for `find_upcoming`.
pub const DEFAULT_MAX_DAYS_SCANNED: u32 = 180;

/// Finds the next collection days starting at `from` (inclusive).
///
/// Scans one calendar day at a time and collects up to `limit` days with at
/// least one matching rule. The scan stops when `limit` days have been found
/// or after `max_days_scanned` days have been examined, whichever comes
/// first, so an empty or degenerate rule set still terminates.
///
/// # Arguments
///
/// * `rules` - The loaded rule set
/// * `from` - First day to examine
/// * `limit` - Maximum number of collection days to return
/// * `max_days_scanned` - Maximum number of calendar days to examine
///
/// # Returns
///
/// Occurrences in date order; fewer than `limit` if the horizon ran out.
#[must_use]
pub fn find_upcoming(
    rules: &[CollectionRule],
    from: Date,
    limit: usize,
    max_days_scanned: u32,
) -> Vec<Occurrence> {
    let mut results: Vec<Occurrence> = Vec::new();
    let mut cursor: Option<Date> = Some(from);
    let mut examined: u32 = 0;

    while results.len() < limit && examined < max_days_scanned {
        let Some(date) = cursor else {
            break;
        };

        let matching: Vec<CollectionRule> = rules_on_date(rules, date);
        if !matching.is_empty() {
            results.push(Occurrence {
                date,
                rules: matching,
            });
        }

        cursor = date.next_day();
        examined += 1;
    }

    results
}
