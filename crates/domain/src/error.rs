// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Rule identifier is empty.
    EmptyRuleId,
    /// Rule name is empty or invalid.
    InvalidRuleName {
        /// The rule whose name is invalid.
        rule_id: String,
    },
    /// A weekly rule was given no weekdays.
    EmptyWeekdays {
        /// The offending rule.
        rule_id: String,
    },
    /// A monthly rule was given no ordinals.
    EmptyOrdinals {
        /// The offending rule.
        rule_id: String,
    },
    /// Weekday index outside 0-6.
    InvalidWeekday {
        /// The offending rule.
        rule_id: String,
        /// The invalid index.
        value: u8,
    },
    /// Ordinal-in-month outside 1-5.
    InvalidOrdinal {
        /// The offending rule.
        rule_id: String,
        /// The invalid ordinal.
        value: u8,
    },
    /// Two rules share the same identifier.
    DuplicateRuleId(String),
    /// The year/month pair does not form a valid calendar date.
    InvalidCalendarMonth {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: time::Month,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A custom alert has no category left after normalization.
    EmptyAlertCategories,
    /// A custom alert with this identifier already exists.
    DuplicateAlertId(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRuleId => write!(f, "Rule id cannot be empty"),
            Self::InvalidRuleName { rule_id } => {
                write!(f, "Rule '{rule_id}' must have a non-empty name")
            }
            Self::EmptyWeekdays { rule_id } => {
                write!(f, "Weekly rule '{rule_id}' must name at least one weekday")
            }
            Self::EmptyOrdinals { rule_id } => {
                write!(f, "Monthly rule '{rule_id}' must name at least one ordinal")
            }
            Self::InvalidWeekday { rule_id, value } => {
                write!(
                    f,
                    "Invalid weekday {value} in rule '{rule_id}'. Must be between 0 and 6"
                )
            }
            Self::InvalidOrdinal { rule_id, value } => {
                write!(
                    f,
                    "Invalid ordinal {value} in rule '{rule_id}'. Must be between 1 and 5"
                )
            }
            Self::DuplicateRuleId(id) => write!(f, "Rule id '{id}' is defined more than once"),
            Self::InvalidCalendarMonth { year, month } => {
                write!(f, "{month} {year} is not a representable calendar month")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::EmptyAlertCategories => {
                write!(f, "A custom alert must select at least one known category")
            }
            Self::DuplicateAlertId(id) => write!(f, "Custom alert '{id}' already exists"),
        }
    }
}

impl std::error::Error for DomainError {}
