// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request preference changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Turn the built-in day-before reminder on or off.
    SetDefaultEnabled {
        /// The new state.
        enabled: bool,
    },
    /// Add a user-defined alert.
    AddCustomAlert {
        /// Identifier for the new alert.
        id: String,
        /// Raw `HH:MM` input; coerced to the default time when invalid.
        time: Option<String>,
        /// Rule ids the alert covers.
        categories: Vec<String>,
    },
    /// Remove a user-defined alert. Unknown ids are ignored.
    RemoveCustomAlert {
        /// The alert to remove.
        id: String,
    },
    /// Drop category references to rules that are no longer loaded.
    ReconcileRules,
}
