// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite-backed key-value store.
//!
//! This module contains SQLite-specific initialization, migration,
//! and configuration. The single `kv_entries` table is accessed through
//! Diesel DSL; PRAGMA statements are the only raw SQL.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

use crate::diesel_schema::kv_entries;
use crate::error::PersistenceError;
use crate::store::KeyValueStore;

/// SQLite migrations.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Run pending migrations on the provided connection.
///
/// # Errors
///
/// Returns an error if migration execution fails.
fn run_migrations(
    conn: &mut SqliteConnection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Running SQLite database migrations");
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// Initialize a `SQLite` database at the given URL and run migrations.
///
/// # Errors
///
/// Returns an error if connection or migration fails.
fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!("Initializing SQLite database at: {}", database_url);

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;

    run_migrations(&mut conn).map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    Ok(conn)
}

/// Enable WAL mode for file-based `SQLite` databases.
///
/// # Errors
///
/// Returns an error if the PRAGMA statement fails.
fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    // Diesel has no PRAGMA DSL
    diesel::sql_query("PRAGMA journal_mode = WAL")
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    Ok(())
}

/// Key-value store persisted in a `SQLite` database.
pub struct SqliteStore {
    conn: SqliteConnection,
}

impl SqliteStore {
    /// Creates a store backed by a fresh shared in-memory database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// so tests are isolated from each other.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:bincal_mem_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = initialize_database(&shared_memory_url)?;
        Ok(Self { conn })
    }

    /// Creates a store backed by a `SQLite` database file.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = initialize_database(path_str)?;
        enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn read(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        debug!(key, "Reading key-value entry");
        let value: Option<String> = kv_entries::table
            .filter(kv_entries::key.eq(key))
            .select(kv_entries::value)
            .first::<String>(&mut self.conn)
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        debug!(key, bytes = value.len(), "Writing key-value entry");
        diesel::replace_into(kv_entries::table)
            .values((kv_entries::key.eq(key), kv_entries::value.eq(value)))
            .execute(&mut self.conn)?;
        Ok(())
    }
}
