// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bincal_domain::CollectionRule;

use crate::error::CatalogError;
use crate::loader::parse_rules_csv;

/// Display name of the area the bundled table covers.
pub const BUILTIN_AREA_NAME: &str = "枚方市 養父西町";

/// The bundled rule table (Hirakata, Yabunishi-cho, 2024 calendar).
pub const BUILTIN_RULES_CSV: &str = include_str!("../data/schedule.csv");

/// Parses the bundled rule table.
///
/// # Errors
///
/// Only fails if the bundled table itself is broken.
pub fn builtin_rules() -> Result<Vec<CollectionRule>, CatalogError> {
    parse_rules_csv(BUILTIN_RULES_CSV)
}
