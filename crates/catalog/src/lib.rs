// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collection rule tables.
//!
//! Rules are loaded once at startup, either from a CSV file supplied by the
//! user or from the table bundled with the crate, and are read-only
//! afterwards.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod builtin;
mod error;
mod loader;

#[cfg(test)]
mod tests;

pub use builtin::{BUILTIN_AREA_NAME, BUILTIN_RULES_CSV, builtin_rules};
pub use error::{CatalogError, RowError};
pub use loader::{load_rules_from_path, parse_rules_csv};
