use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::Theme;
use crate::ui::{Component, Handled, Result};

pub enum TextInputEvent {
    Submitted(String),
}

/// Single-line inline text input with cursor editing.
///
/// Keys the input does not recognize are reported as `Ignored` so the
/// screen can use them for focus movement and global actions.
pub struct TextInput {
    label: String,
    value: String,
    cursor: usize,
    placeholder: Option<String>,
    focused: bool,
}

impl TextInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            cursor: 0,
            placeholder: None,
            focused: false,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn delete_char_before_cursor(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    fn delete_char_at_cursor(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }

    fn move_cursor_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    fn move_cursor_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn delete_word_before_cursor(&mut self) {
        let before = &self.value[..self.cursor];
        let trimmed = before.trim_end_matches(' ');
        let start = trimmed.rfind(' ').map_or(0, |i| i + 1);
        self.value.drain(start..self.cursor);
        self.cursor = start;
    }

    fn clear_line(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

impl Component for TextInput {
    type Output = TextInputEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        Ok(match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => TextInputEvent::Submitted(self.value.clone()).into(),

            (KeyCode::Backspace, KeyModifiers::ALT) => {
                self.delete_word_before_cursor();
                Handled::Consumed
            }
            (KeyCode::Backspace, _) => {
                self.delete_char_before_cursor();
                Handled::Consumed
            }
            (KeyCode::Delete, _) => {
                self.delete_char_at_cursor();
                Handled::Consumed
            }

            (KeyCode::Left, _) => {
                self.move_cursor_left();
                Handled::Consumed
            }
            (KeyCode::Right, _) => {
                self.move_cursor_right();
                Handled::Consumed
            }
            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.cursor = 0;
                Handled::Consumed
            }
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.cursor = self.value.len();
                Handled::Consumed
            }

            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.clear_line();
                Handled::Consumed
            }

            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.insert_char(c);
                Handled::Consumed
            }

            _ => Handled::Ignored,
        })
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let border_color = if self.focused {
            theme.lavender
        } else {
            theme.surface1
        };
        let block = Block::default()
            .title(format!(" {} ", self.label))
            .title_style(Style::default().fg(theme.subtext1))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let input_style = Style::default().fg(theme.text);
        let cursor_style = Style::default()
            .fg(theme.base)
            .bg(theme.text)
            .add_modifier(Modifier::BOLD);
        let placeholder_style = Style::default().fg(theme.overlay0);

        let line = if self.value.is_empty() {
            let placeholder = self.placeholder.clone().unwrap_or_default();
            if self.focused {
                Line::from(vec![
                    Span::styled(" ", cursor_style),
                    Span::styled(placeholder, placeholder_style),
                ])
            } else {
                Line::from(Span::styled(placeholder, placeholder_style))
            }
        } else if self.focused {
            let (before, after) = self.value.split_at(self.cursor.min(self.value.len()));
            let cursor_char = after.chars().next().unwrap_or(' ');
            let rest: String = after.chars().skip(1).collect();
            Line::from(vec![
                Span::styled(before.to_string(), input_style),
                Span::styled(cursor_char.to_string(), cursor_style),
                Span::styled(rest, input_style),
            ])
        } else {
            Line::from(Span::styled(self.value.clone(), input_style))
        };

        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut TextInput, code: KeyCode) -> Handled<TextInputEvent> {
        input
            .handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn typing_and_backspace() {
        let mut input = TextInput::new("Part Number");
        for c in "C123".chars() {
            press(&mut input, KeyCode::Char(c));
        }
        assert_eq!(input.value(), "C123");

        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value(), "C12");
    }

    #[test]
    fn cursor_editing_in_the_middle() {
        let mut input = TextInput::new("Part Number");
        input.set_value("C15");
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Char('2'));
        assert_eq!(input.value(), "C125");
    }

    #[test]
    fn enter_submits_current_value() {
        let mut input = TextInput::new("Part Number");
        input.set_value("C12345");
        match press(&mut input, KeyCode::Enter) {
            Handled::Event(TextInputEvent::Submitted(value)) => assert_eq!(value, "C12345"),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let mut input = TextInput::new("Part Number");
        assert_eq!(
            press(&mut input, KeyCode::Tab).is_consumed(),
            false,
            "Tab must pass through for focus movement"
        );
    }
}
