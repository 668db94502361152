//! Expense categories
//!
//! Categories form a closed set. Each one carries the icon used when listing
//! expenses; colors are a presentation concern and live in the TUI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    Entertainment,
    Shopping,
    Food,
    Transport,
    Bills,
    #[default]
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 6] = [
        Self::Entertainment,
        Self::Shopping,
        Self::Food,
        Self::Transport,
        Self::Bills,
        Self::Other,
    ];

    /// Name as persisted in the `category` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entertainment => "ENTERTAINMENT",
            Self::Shopping => "SHOPPING",
            Self::Food => "FOOD",
            Self::Transport => "TRANSPORT",
            Self::Bills => "BILLS",
            Self::Other => "OTHER",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Bills => "Bills",
            Self::Other => "Other",
        }
    }

    /// Icon shown next to expenses of this category
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Entertainment => "🎬",
            Self::Shopping => "🛍",
            Self::Food => "🍽",
            Self::Transport => "🚗",
            Self::Bills => "📃",
            Self::Other => "📦",
        }
    }

    /// Next category in display order, wrapping around
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous category in display order, wrapping around
    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Position in [`ExpenseCategory::ALL`]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when a category name is not one of the known set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = ExpenseCategory::ALL.iter().map(|c| c.label()).collect();
        write!(
            f,
            "Unknown category '{}'. Expected one of: {}",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
