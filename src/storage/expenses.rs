//! Expense repository
//!
//! Data access for the `expenses` table. Records are never updated in place:
//! the repository only inserts, reads and deletes.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseCategory, ExpenseId, Money, NewExpense};

const SELECT_COLUMNS: &str = "SELECT id, amount, category, description, date FROM expenses";

/// Repository for expense persistence, borrowing the store's connection
pub struct ExpenseRepository<'a> {
    conn: &'a Connection,
}

impl<'a> ExpenseRepository<'a> {
    /// Create a repository over an open connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a new expense and return the id the store assigned
    pub fn add(&self, expense: &NewExpense) -> ExpenseResult<ExpenseId> {
        self.conn.execute(
            "INSERT INTO expenses (amount, category, description, date)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                expense.amount.as_f64(),
                expense.category.as_str(),
                expense.description,
                expense.date_string(),
            ],
        )?;

        let id = ExpenseId::from_raw(self.conn.last_insert_rowid());
        log::debug!("Inserted expense {}", id);
        Ok(id)
    }

    /// Get all expenses, newest date first
    ///
    /// Dates are `YYYY-MM-DD` text, so lexicographic order is chronological.
    /// Rows sharing a date are ordered newest insert first.
    pub fn list_all(&self) -> ExpenseResult<Vec<Expense>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY date DESC, id DESC", SELECT_COLUMNS))?;

        let expenses = stmt
            .query_map([], map_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(expenses)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let expense = self
            .conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id.as_i64()],
                map_row,
            )
            .optional()?;

        Ok(expense)
    }

    /// Delete an expense by id
    ///
    /// Returns whether a row was removed. Deleting an id that does not exist
    /// is not an error.
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM expenses WHERE id = ?1", params![id.as_i64()])?;

        if removed == 0 {
            log::debug!("Delete of expense {} matched no rows", id);
        }

        Ok(removed > 0)
    }

    /// Number of stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count.max(0) as usize)
    }
}

/// Map a row to an Expense
///
/// The columns are nullable (the table predates any constraints), so missing
/// values fall back to empty/zero instead of failing the whole listing.
fn map_row(row: &Row<'_>) -> rusqlite::Result<Expense> {
    let id: i64 = row.get(0)?;
    let amount: Option<f64> = row.get(1)?;
    let category: Option<String> = row.get(2)?;
    let description: Option<String> = row.get(3)?;
    let date: Option<String> = row.get(4)?;

    let category = match category.as_deref().map(str::parse::<ExpenseCategory>) {
        Some(Ok(category)) => category,
        Some(Err(e)) => {
            log::warn!("Expense {}: {}; treating as Other", id, e);
            ExpenseCategory::Other
        }
        None => ExpenseCategory::Other,
    };

    let amount = match amount.map(|value| (value, Money::try_from_f64(value))) {
        Some((_, Some(amount))) => amount,
        Some((value, None)) => {
            log::warn!("Expense {}: amount {} is not a usable number; treating as 0", id, value);
            Money::zero()
        }
        None => Money::zero(),
    };

    Ok(Expense {
        id: ExpenseId::from_raw(id),
        amount,
        category,
        description: description.unwrap_or_default(),
        date: date.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::migrations::run_migrations;
    use chrono::NaiveDate;

    fn create_test_db() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        run_migrations(&mut conn).unwrap();
        conn
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_expense(cents: i64, description: &str, on: NaiveDate) -> NewExpense {
        NewExpense::new(Money::from_cents(cents), ExpenseCategory::Food, description, on)
    }

    #[test]
    fn test_add_then_list_contains_one_more() {
        let conn = create_test_db();
        let repo = ExpenseRepository::new(&conn);
        repo.add(&new_expense(500, "Coffee", date(2024, 6, 1))).unwrap();
        let before = repo.list_all().unwrap().len();

        let input = NewExpense::new(
            Money::from_cents(1999),
            ExpenseCategory::Shopping,
            "Socks",
            date(2024, 6, 2),
        );
        let id = repo.add(&input).unwrap();

        let after = repo.list_all().unwrap();
        assert_eq!(after.len(), before + 1);

        let stored = after.iter().find(|e| e.id == id).unwrap();
        assert_eq!(stored.amount, input.amount);
        assert_eq!(stored.category, input.category);
        assert_eq!(stored.description, input.description);
        assert_eq!(stored.date, "2024-06-02");
    }

    #[test]
    fn test_get_round_trip() {
        let conn = create_test_db();
        let repo = ExpenseRepository::new(&conn);
        let input = NewExpense::new(
            Money::from_cents(-250),
            ExpenseCategory::Bills,
            "Refund adjustment",
            date(2023, 12, 31),
        );

        let id = repo.add(&input).unwrap();
        let stored = repo.get(id).unwrap().unwrap();

        assert_eq!(stored.id, id);
        assert_eq!(stored.amount, input.amount);
        assert_eq!(stored.category, input.category);
        assert_eq!(stored.description, input.description);
        assert_eq!(stored.date, input.date_string());
    }

    #[test]
    fn test_get_missing_is_none() {
        let conn = create_test_db();
        let repo = ExpenseRepository::new(&conn);

        assert!(repo.get(ExpenseId::from_raw(999)).unwrap().is_none());
    }

    #[test]
    fn test_list_empty() {
        let conn = create_test_db();
        let repo = ExpenseRepository::new(&conn);

        assert!(repo.list_all().unwrap().is_empty());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_list_sorted_by_date_descending() {
        let conn = create_test_db();
        let repo = ExpenseRepository::new(&conn);
        repo.add(&new_expense(100, "b", date(2024, 2, 10))).unwrap();
        repo.add(&new_expense(100, "c", date(2024, 11, 1))).unwrap();
        repo.add(&new_expense(100, "a", date(2023, 12, 25))).unwrap();
        repo.add(&new_expense(100, "d", date(2024, 2, 10))).unwrap();

        let dates: Vec<String> = repo
            .list_all()
            .unwrap()
            .into_iter()
            .map(|e| e.date)
            .collect();

        assert_eq!(
            dates,
            vec!["2024-11-01", "2024-02-10", "2024-02-10", "2023-12-25"]
        );
    }

    #[test]
    fn test_delete_removes_and_is_idempotent() {
        let conn = create_test_db();
        let repo = ExpenseRepository::new(&conn);
        let keep = repo.add(&new_expense(100, "keep", date(2024, 1, 1))).unwrap();
        let gone = repo.add(&new_expense(200, "gone", date(2024, 1, 2))).unwrap();

        assert!(repo.delete(gone).unwrap());
        assert!(!repo.delete(gone).unwrap());

        let remaining = repo.list_all().unwrap();
        assert!(remaining.iter().all(|e| e.id != gone));
        assert!(remaining.iter().any(|e| e.id == keep));
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let conn = create_test_db();
        let repo = ExpenseRepository::new(&conn);
        repo.add(&new_expense(100, "x", date(2024, 1, 1))).unwrap();

        assert!(!repo.delete(ExpenseId::from_raw(12345)).unwrap());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let conn = create_test_db();
        let repo = ExpenseRepository::new(&conn);
        let first = repo.add(&new_expense(100, "x", date(2024, 1, 1))).unwrap();
        repo.delete(first).unwrap();

        let second = repo.add(&new_expense(100, "y", date(2024, 1, 1))).unwrap();

        assert!(second > first);
    }

    #[test]
    fn test_lenient_row_mapping() {
        let conn = create_test_db();
        conn.execute(
            "INSERT INTO expenses (amount, category, description, date)
             VALUES (NULL, 'GROCERIES', NULL, 'not a date')",
            [],
        )
        .unwrap();
        let repo = ExpenseRepository::new(&conn);

        let expenses = repo.list_all().unwrap();

        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].category, ExpenseCategory::Other);
        assert_eq!(expenses[0].amount, Money::zero());
        assert_eq!(expenses[0].description, "");
        assert_eq!(expenses[0].date, "not a date");
    }

    #[test]
    fn test_unusable_amounts_read_as_zero() {
        let conn = create_test_db();
        conn.execute_batch(
            "INSERT INTO expenses (amount, category, description, date)
                 VALUES (1e300, 'FOOD', 'huge', '2024-06-01');
             INSERT INTO expenses (amount, category, description, date)
                 VALUES (-9e999, 'FOOD', 'infinite', '2024-06-02');
             INSERT INTO expenses (amount, category, description, date)
                 VALUES (4.5, 'FOOD', 'fine', '2024-06-03');",
        )
        .unwrap();
        let repo = ExpenseRepository::new(&conn);

        let expenses = repo.list_all().unwrap();

        assert_eq!(expenses.len(), 3);
        assert_eq!(expenses[0].amount, Money::from_cents(450));
        assert_eq!(expenses[1].amount, Money::zero());
        assert_eq!(expenses[2].amount, Money::zero());
    }
}
