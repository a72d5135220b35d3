//! Text input widget
//!
//! A single-line text field with cursor support. Content is plain ASCII
//! (numbers and dates), entered one keystroke at a time.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text shown while empty
    pub placeholder: String,
    /// Label, already padded to the desired column width
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.content.remove(self.cursor);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to the start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end
    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let label_style = if self.focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        buf.set_stringn(
            area.x,
            area.y,
            &self.label,
            usize::from(area.width),
            label_style,
        );

        let label_width = (self.label.len() as u16).min(area.width);
        let input_start = area.x + label_width;
        let input_width = area.width - label_width;
        if input_width == 0 {
            return;
        }

        let showing_placeholder = self.content.is_empty() && !self.placeholder.is_empty();
        let (display_text, text_style) = if showing_placeholder {
            (self.placeholder.as_str(), Style::default().fg(Color::DarkGray))
        } else {
            (self.content.as_str(), Style::default().fg(Color::White))
        };
        buf.set_stringn(
            input_start,
            area.y,
            display_text,
            usize::from(input_width),
            text_style,
        );

        // Block cursor over the character at the cursor position
        if self.focused {
            let cursor_x = input_start + self.cursor as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self
                    .content
                    .chars()
                    .nth(self.cursor)
                    .unwrap_or(' ')
                    .to_string();
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char,
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}
