// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::rule::CollectionRule;
use std::collections::HashSet;

/// Validates that every rule in a set has a unique identifier.
///
/// Individual rule fields are validated at construction; this check needs
/// the whole set, so it lives here.
///
/// # Arguments
///
/// * `rules` - The rule set to validate
///
/// # Returns
///
/// * `Ok(())` if all ids are unique
/// * `Err(DomainError::DuplicateRuleId)` naming the first repeated id
///
/// # Errors
///
/// Returns an error if two rules share the same id.
pub fn validate_rule_set(rules: &[CollectionRule]) -> Result<(), DomainError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(rules.len());

    for rule in rules {
        // Rule: ids are foreign keys from stored alert preferences
        if !seen.insert(rule.id()) {
            return Err(DomainError::DuplicateRuleId(rule.id().to_string()));
        }
    }

    Ok(())
}

/// Collects the identifiers of a rule set.
#[must_use]
pub fn rule_ids(rules: &[CollectionRule]) -> HashSet<String> {
    rules.iter().map(|rule| rule.id().to_string()).collect()
}
