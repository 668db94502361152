//! Status bar view
//!
//! Record count, the latest status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, StatusKind};

const HINTS: &str = " a:Add  d:Delete  r:Reload  ?:Help  q:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} expenses", app.expenses.len()),
        Style::default().fg(Color::White),
    )];

    if let Some(ref status) = app.status {
        let color = match status.kind {
            StatusKind::Info => Color::Yellow,
            StatusKind::Error => Color::Red,
        };
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(status.text.clone(), Style::default().fg(color)));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(HINTS.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::storage::Storage;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_narrow_status_bar_does_not_panic() {
        let storage = Storage::open_in_memory().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.set_error("a fairly long storage error message for a narrow terminal");

        let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, &app, frame.area()))
            .unwrap();
    }
}
