//! Colors used across the TUI

use ratatui::style::Color;

use crate::models::ExpenseCategory;

/// Accent color for a category
pub fn category_color(category: ExpenseCategory) -> Color {
    match category {
        ExpenseCategory::Entertainment => Color::Rgb(0x5B, 0x8F, 0xF9),
        ExpenseCategory::Shopping => Color::Rgb(0xF7, 0xA6, 0x00),
        ExpenseCategory::Food => Color::Rgb(0x5A, 0xD8, 0xA6),
        ExpenseCategory::Transport => Color::Rgb(0xFF, 0x6B, 0x3B),
        ExpenseCategory::Bills => Color::Rgb(0x94, 0x5F, 0xB9),
        ExpenseCategory::Other => Color::Rgb(0x5F, 0xB9, 0xB9),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_category_colors_are_distinct() {
        let colors: HashSet<_> = ExpenseCategory::ALL
            .iter()
            .map(|c| format!("{:?}", category_color(*c)))
            .collect();
        assert_eq!(colors.len(), ExpenseCategory::ALL.len());
    }
}
