//! Text input widget
//!
//! A single-line text field with a cursor. The cursor counts characters,
//! not bytes, so multi-byte input such as currency symbols is safe.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// A simple text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Placeholder text
    pub placeholder: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content and move the cursor to its end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_len();
        self
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.content.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Render as `label: value` with a block cursor when focused
    pub fn line(&self, label: &str, focused: bool) -> Line<'static> {
        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let mut spans = vec![Span::styled(format!("{:>12}: ", label), label_style)];

        if !focused {
            if self.content.is_empty() {
                spans.push(Span::styled(
                    self.placeholder.clone(),
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                spans.push(Span::styled(
                    self.content.clone(),
                    Style::default().fg(Color::Yellow),
                ));
            }
            return Line::from(spans);
        }

        let value_style = Style::default().fg(Color::White);
        let before: String = self.content.chars().take(self.cursor).collect();
        let mut rest = self.content.chars().skip(self.cursor);
        let cursor_char = rest.next().unwrap_or(' ');
        let after: String = rest.collect();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        if !after.is_empty() {
            spans.push(Span::styled(after, value_style));
        }

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "12.5".chars() {
            input.insert(c);
        }
        input.backspace();

        assert_eq!(input.value(), "12.");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().content("₹10");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "10");

        input.insert('€');
        input.move_end();
        input.insert('0');
        assert_eq!(input.value(), "€100");

        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "€00");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new().content("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.move_start();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.backspace();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_line_shows_placeholder_when_unfocused() {
        let input = TextInput::new().placeholder("e.g. 12.50");
        let line = input.line("Amount", false);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();

        assert!(text.contains("Amount: "));
        assert!(text.contains("e.g. 12.50"));
    }
}
