//! Expense service
//!
//! Validates user input, stamps new expenses with today's date and hands
//! back a freshly loaded list after every change.

use chrono::{Local, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, Money, NewExpense};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Options for filtering expense listings
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Only expenses in this category
    pub category: Option<ExpenseCategory>,
    /// Maximum number of expenses to return
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: ExpenseCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Raw user input for a new expense, as typed
#[derive(Debug, Clone, Default)]
pub struct CreateExpenseInput {
    pub amount: String,
    pub category: ExpenseCategory,
    pub description: String,
}

impl CreateExpenseInput {
    pub fn new(
        amount: impl Into<String>,
        category: ExpenseCategory,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            category,
            description: description.into(),
        }
    }

    /// Check the input and convert it into a record dated `date`
    ///
    /// The amount must parse as a number with at most two decimal places and
    /// a magnitude of at most [`Money::MAX_ABS_CENTS`] hundredths; the
    /// description must not be blank. Sign is not checked.
    pub fn validate(&self, date: NaiveDate) -> ExpenseResult<NewExpense> {
        let amount_text = self.amount.trim();
        if amount_text.is_empty() {
            return Err(ExpenseError::Validation("Amount is required".into()));
        }
        let amount = Money::parse(amount_text)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let description = self.description.trim();
        if description.is_empty() {
            return Err(ExpenseError::Validation("Description is required".into()));
        }

        Ok(NewExpense::new(amount, self.category, description, date))
    }
}

/// Outcome of a change together with the reloaded list
#[derive(Debug, Clone)]
pub struct Refreshed<T> {
    pub outcome: T,
    /// Every stored expense, newest first
    pub expenses: Vec<Expense>,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense dated today (local time)
    pub fn add(&self, input: &CreateExpenseInput) -> ExpenseResult<Refreshed<Expense>> {
        self.add_on(input, Local::now().date_naive())
    }

    /// Record a new expense with an explicit date
    pub fn add_on(
        &self,
        input: &CreateExpenseInput,
        date: NaiveDate,
    ) -> ExpenseResult<Refreshed<Expense>> {
        let expense = self.record_on(input, date)?;

        // The row is committed; a failed reload must not read as a failed save
        let expenses = self.list_all().map_err(|e| {
            ExpenseError::Storage(format!(
                "Expense #{} was saved but the list could not be reloaded: {}",
                expense.id, e
            ))
        })?;

        Ok(Refreshed {
            outcome: expense,
            expenses,
        })
    }

    /// Validate and insert a new expense dated today, without reloading
    pub fn record(&self, input: &CreateExpenseInput) -> ExpenseResult<Expense> {
        self.record_on(input, Local::now().date_naive())
    }

    /// Validate and insert a new expense dated `date`, without reloading
    pub fn record_on(&self, input: &CreateExpenseInput, date: NaiveDate) -> ExpenseResult<Expense> {
        let new_expense = input.validate(date)?;
        let id = self.storage.expenses().add(&new_expense)?;

        log::info!(
            "Added expense {} ({} {})",
            id,
            new_expense.amount,
            new_expense.category.as_str()
        );

        Ok(Expense {
            id,
            amount: new_expense.amount,
            category: new_expense.category,
            date: new_expense.date_string(),
            description: new_expense.description,
        })
    }

    /// Delete an expense. Missing ids are not an error; the outcome tells
    /// whether anything was removed.
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Refreshed<bool>> {
        let removed = self.storage.expenses().delete(id)?;
        if removed {
            log::info!("Deleted expense {}", id);
        }

        Ok(Refreshed {
            outcome: removed,
            expenses: self.list_all()?,
        })
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        self.storage.expenses().get(id)
    }

    /// Get an expense by id, failing if it does not exist
    pub fn find(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        self.get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))
    }

    /// All expenses, newest first
    pub fn list_all(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses().list_all()
    }

    /// Expenses matching a filter, newest first
    pub fn list(&self, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        let expenses = self.list_all()?.into_iter().filter(|e| {
            filter
                .category
                .map_or(true, |category| e.category == category)
        });

        Ok(match filter.limit {
            Some(limit) => expenses.take(limit).collect(),
            None => expenses.collect(),
        })
    }

    /// Number of stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        self.storage.expenses().count()
    }
}
