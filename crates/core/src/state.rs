// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bincal_domain::NotificationPreferences;

/// A description of what a transition did, for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The command name.
    pub name: String,
    /// Human-readable details.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new action description.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The preferences after the transition.
    pub new_preferences: NotificationPreferences,
    /// Whether the preferences differ from the input.
    pub changed: bool,
    /// What the transition did.
    pub action: Action,
}
