// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for bincal.
//!
//! The only persisted state is the notification preference document, kept
//! under a fixed key in a synchronous, device-local key-value store.
//!
//! ## Backends
//!
//! - **`SQLite`** (`SqliteStore`): Diesel with embedded migrations; file or
//!   shared in-memory database
//! - **Memory** (`MemoryStore`): `HashMap`, for tests and throwaway sessions
//!
//! ## Testing Philosophy
//!
//! - Every test gets its own in-memory database via an atomic counter
//! - No test touches the filesystem

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
#![allow(clippy::multiple_crate_versions)]

mod diesel_schema;
mod error;
mod preferences;
mod sqlite;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use preferences::{PREFERENCES_KEY, load_preferences, save_preferences};
pub use sqlite::SqliteStore;
pub use store::{KeyValueStore, MemoryStore};
