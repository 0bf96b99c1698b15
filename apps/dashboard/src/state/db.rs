//! # Database State
//!
//! Wraps the `Database` connection for use in commands.
//!
//! The `Database` from `gestor-db` holds a `SqlitePool`, which is already
//! thread-safe, so commands can run queries concurrently without locking.

use gestor_db::{CustomerRepository, Database};

/// Wrapper around `Database` for command state.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }

    /// Shortcut for `inner().customers()`.
    pub fn customers(&self) -> CustomerRepository {
        self.db.customers()
    }
}
