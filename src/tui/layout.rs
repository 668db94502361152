//! Layout definitions for the TUI
//!
//! One screen, top to bottom: summary cards, monthly chart, expense list,
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Summary cards row
    pub summary: Rect,
    /// Monthly spending chart
    pub chart: Rect,
    /// Expense list
    pub list: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),      // Summary cards
                Constraint::Percentage(35), // Chart
                Constraint::Min(5),         // Expense list
                Constraint::Length(1),      // Status bar
            ])
            .split(area);

        Self {
            summary: vertical[0],
            chart: vertical[1],
            list: vertical[2],
            status_bar: vertical[3],
        }
    }
}

/// Split the summary row into equal-width cards
pub fn summary_cards(area: Rect, count: u16) -> Vec<Rect> {
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count as u32)).collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_fills_area() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = AppLayout::new(area);

        assert_eq!(layout.summary.height, 4);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 39);
        assert!(layout.list.height >= 5);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let r = centered_rect_fixed(60, 11, Rect::new(0, 0, 40, 8));
        assert_eq!(r, Rect::new(0, 0, 40, 8));

        let r = centered_rect_fixed(20, 10, Rect::new(0, 0, 100, 50));
        assert_eq!(r, Rect::new(40, 20, 20, 10));
    }

    #[test]
    fn test_summary_cards() {
        let cards = summary_cards(Rect::new(0, 0, 90, 4), 3);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].width, 30);
    }
}
