// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collection rule model.
//!
//! A rule describes one recurring collection category. Rules are validated
//! once at construction and are immutable afterwards; the occurrence engine
//! trusts them and never re-validates.

use crate::calendar::weekday_from_index;
use crate::error::DomainError;
use time::Weekday;

/// Highest meaningful ordinal-in-month (days 29-31 fall in bucket 5).
pub const MAX_ORDINAL: u8 = 5;

/// The recurrence kind of a rule, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Every week on a set of weekdays.
    Weekly,
    /// The Nth occurrence(s) of one weekday within each month.
    Monthly,
    /// A kind the loader did not understand. Never matches.
    Unrecognized,
}

/// Recurrence parameters of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recurrence {
    /// Occurs every week on each of these weekdays.
    Weekly {
        /// Sorted, deduplicated weekdays (Sunday first).
        weekdays: Vec<Weekday>,
    },
    /// Occurs on the given ordinal occurrences of `weekday` within a month.
    Monthly {
        /// The weekday the rule fires on.
        weekday: Weekday,
        /// Sorted, deduplicated 1-based ordinals.
        ordinals: Vec<u8>,
    },
    /// A rule whose kind could not be interpreted.
    Unrecognized {
        /// The raw kind label as received.
        kind: String,
    },
}

impl Recurrence {
    /// Returns the kind of this recurrence.
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::Weekly { .. } => RuleKind::Weekly,
            Self::Monthly { .. } => RuleKind::Monthly,
            Self::Unrecognized { .. } => RuleKind::Unrecognized,
        }
    }
}

/// One recurring collection category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRule {
    id: String,
    name: String,
    description: String,
    color: String,
    recurrence: Recurrence,
}

impl CollectionRule {
    /// Creates a weekly rule.
    ///
    /// # Arguments
    ///
    /// * `id` - Stable rule identifier
    /// * `name` - Display name
    /// * `weekdays` - Weekday indices, 0 = Sunday through 6 = Saturday
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id or name is empty
    /// - `weekdays` is empty
    /// - Any weekday index is above 6
    pub fn weekly(id: &str, name: &str, weekdays: &[u8]) -> Result<Self, DomainError> {
        let id: String = validate_identity(id, name)?;
        if weekdays.is_empty() {
            return Err(DomainError::EmptyWeekdays { rule_id: id });
        }

        let mut parsed: Vec<Weekday> = Vec::with_capacity(weekdays.len());
        for &value in weekdays {
            let weekday: Weekday =
                weekday_from_index(value).ok_or_else(|| DomainError::InvalidWeekday {
                    rule_id: id.clone(),
                    value,
                })?;
            parsed.push(weekday);
        }
        parsed.sort_by_key(|weekday| weekday.number_days_from_sunday());
        parsed.dedup();

        Ok(Self::assemble(
            id,
            name,
            Recurrence::Weekly { weekdays: parsed },
        ))
    }

    /// Creates a monthly-by-ordinal-weekday rule.
    ///
    /// # Arguments
    ///
    /// * `id` - Stable rule identifier
    /// * `name` - Display name
    /// * `weekday` - Weekday index, 0 = Sunday
    /// * `ordinals` - 1-based occurrence-of-weekday positions, e.g. `[2, 4]`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id or name is empty
    /// - The weekday index is above 6
    /// - `ordinals` is empty or contains a value outside 1-5
    pub fn monthly(
        id: &str,
        name: &str,
        weekday: u8,
        ordinals: &[u8],
    ) -> Result<Self, DomainError> {
        let id: String = validate_identity(id, name)?;
        let weekday_value: Weekday =
            weekday_from_index(weekday).ok_or_else(|| DomainError::InvalidWeekday {
                rule_id: id.clone(),
                value: weekday,
            })?;

        if ordinals.is_empty() {
            return Err(DomainError::EmptyOrdinals { rule_id: id });
        }
        if let Some(&value) = ordinals.iter().find(|&&o| o == 0 || o > MAX_ORDINAL) {
            return Err(DomainError::InvalidOrdinal { rule_id: id, value });
        }

        let mut sorted: Vec<u8> = ordinals.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        Ok(Self::assemble(
            id,
            name,
            Recurrence::Monthly {
                weekday: weekday_value,
                ordinals: sorted,
            },
        ))
    }

    /// Creates a rule whose kind was not understood by the loader.
    ///
    /// The rule keeps its identity and display metadata but never matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or name is empty.
    pub fn unrecognized(id: &str, name: &str, kind: &str) -> Result<Self, DomainError> {
        let id: String = validate_identity(id, name)?;
        Ok(Self::assemble(
            id,
            name,
            Recurrence::Unrecognized {
                kind: kind.to_string(),
            },
        ))
    }

    fn assemble(id: String, name: &str, recurrence: Recurrence) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            description: String::new(),
            color: String::new(),
            recurrence,
        }
    }

    /// Sets the display description.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.trim().to_string();
        self
    }

    /// Sets the display color (opaque to the engine, usually a CSS hex value).
    #[must_use]
    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.trim().to_string();
        self
    }

    /// Returns the stable rule identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the display color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the recurrence parameters.
    #[must_use]
    pub const fn recurrence(&self) -> &Recurrence {
        &self.recurrence
    }

    /// Returns the recurrence kind.
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        self.recurrence.kind()
    }
}

fn validate_identity(id: &str, name: &str) -> Result<String, DomainError> {
    let id: &str = id.trim();
    if id.is_empty() {
        return Err(DomainError::EmptyRuleId);
    }
    if name.trim().is_empty() {
        return Err(DomainError::InvalidRuleName {
            rule_id: id.to_string(),
        });
    }
    Ok(id.to_string())
}
