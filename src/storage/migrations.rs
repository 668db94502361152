//! Versioned schema migrations
//!
//! The schema version lives in SQLite's `PRAGMA user_version`. Each migration
//! runs in its own transaction together with the version bump, so a failure
//! leaves the database at the previous version. A database created by a
//! newer release is refused rather than rewritten.

use rusqlite::Connection;

use crate::error::{ExpenseError, ExpenseResult};

/// A single forward-only schema step
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    /// Version the database is at after this migration
    pub version: u32,
    /// Short description for logs
    pub description: &'static str,
    /// SQL batch to execute
    pub sql: &'static str,
}

/// All migrations, ordered by version
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        description: "create expenses table",
        // IF NOT EXISTS adopts tables created before versioning was tracked
        sql: "CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL,
                category TEXT,
                description TEXT,
                date TEXT
            );",
    },
    Migration {
        version: 2,
        description: "index expenses by date",
        sql: "CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);",
    },
];

/// Newest schema version this build understands
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

/// Read the schema version recorded in the database
pub fn schema_version(conn: &Connection) -> ExpenseResult<u32> {
    let version: u32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(version)
}

/// Bring the database up to [`latest_version`]
///
/// Returns the number of migrations applied.
pub fn run_migrations(conn: &mut Connection) -> ExpenseResult<usize> {
    let current = schema_version(conn)?;
    let latest = latest_version();

    if current > latest {
        return Err(ExpenseError::Storage(format!(
            "Database schema version {} is newer than supported version {}",
            current, latest
        )));
    }

    let mut applied = 0;
    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        log::info!(
            "Applying migration v{}: {}",
            migration.version,
            migration.description
        );

        let tx = conn.transaction()?;
        tx.execute_batch(migration.sql).map_err(|e| {
            ExpenseError::Storage(format!(
                "Migration v{} ({}) failed: {}",
                migration.version, migration.description, e
            ))
        })?;
        tx.pragma_update(None, "user_version", migration.version)?;
        tx.commit()?;

        applied += 1;
    }

    if applied > 0 {
        log::debug!("Schema migrated from v{} to v{}", current, latest);
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versions_are_increasing() {
        let versions: Vec<u32> = MIGRATIONS.iter().map(|m| m.version).collect();
        let mut sorted = versions.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(versions, sorted);
        assert_eq!(versions.first(), Some(&1));
    }

    #[test]
    fn test_fresh_database_reaches_latest() {
        let mut conn = Connection::open_in_memory().unwrap();

        let applied = run_migrations(&mut conn).unwrap();

        assert_eq!(applied, MIGRATIONS.len());
        assert_eq!(schema_version(&conn).unwrap(), latest_version());
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_migrations(&mut conn).unwrap();

        let applied = run_migrations(&mut conn).unwrap();

        assert_eq!(applied, 0);
        assert_eq!(schema_version(&conn).unwrap(), latest_version());
    }

    #[test]
    fn test_unversioned_table_is_adopted() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL,
                category TEXT,
                description TEXT,
                date TEXT
            );
            INSERT INTO expenses (amount, category, description, date)
            VALUES (12.5, 'FOOD', 'Tea', '2024-03-01');",
        )
        .unwrap();

        run_migrations(&mut conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(schema_version(&conn).unwrap(), latest_version());
    }

    #[test]
    fn test_newer_schema_is_refused() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "user_version", latest_version() + 1)
            .unwrap();

        let err = run_migrations(&mut conn).unwrap_err();

        assert!(err.is_storage());
        assert!(err.to_string().contains("newer"));
    }
}
