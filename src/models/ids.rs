//! Strongly-typed ID wrapper for expense records
//!
//! Expense ids are SQLite surrogate keys assigned on insert. Wrapping them
//! keeps a raw row count or list index from being passed where an id belongs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a persisted expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a row id returned by the database
    pub const fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying row id
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ExpenseId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept "#12" as printed in lists
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}
