//! Storage layer for the expense tracker
//!
//! A single SQLite database holds the `expenses` table. `Storage` owns the
//! one long-lived connection; repositories borrow it.

pub mod expenses;
pub mod migrations;

pub use expenses::ExpenseRepository;
pub use migrations::{latest_version, run_migrations};

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};

/// Main storage coordinator
pub struct Storage {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Storage {
    /// Open (creating if needed) the database at `path` and bring its schema
    /// up to date
    pub fn open(path: impl AsRef<Path>) -> ExpenseResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ExpenseError::Io(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let mut conn = Connection::open(path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;
        run_migrations(&mut conn)?;

        log::info!("Opened expense database at {}", path.display());

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> ExpenseResult<Self> {
        let mut conn = Connection::open_in_memory()?;
        run_migrations(&mut conn)?;

        Ok(Self { conn, path: None })
    }

    /// Open the database at the location described by `paths`
    pub fn from_paths(paths: &ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_directories()?;
        Self::open(paths.database_file())
    }

    /// Access expense records
    pub fn expenses(&self) -> ExpenseRepository<'_> {
        ExpenseRepository::new(&self.conn)
    }

    /// Current schema version of the open database
    pub fn schema_version(&self) -> ExpenseResult<u32> {
        migrations::schema_version(&self.conn)
    }

    /// Database file path, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run raw SQL, for tests that need a damaged store
    #[cfg(test)]
    pub(crate) fn execute_raw(&self, sql: &str) -> ExpenseResult<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Close the connection, reporting any error SQLite raises while doing so
    pub fn close(self) -> ExpenseResult<()> {
        self.conn
            .close()
            .map_err(|(_, e)| ExpenseError::Storage(format!("Failed to close database: {}", e)))
    }
}
