// Single-line text input with a character cursor

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
    max_chars: Option<usize>,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input that silently drops characters past `max_chars`
    pub fn with_limit(max_chars: usize) -> Self {
        Self {
            max_chars: Some(max_chars),
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn max_chars(&self) -> Option<usize> {
        self.max_chars
    }

    pub fn set(&mut self, value: &str) {
        self.value = match self.max_chars {
            Some(max) => value.chars().take(max).collect(),
            None => value.to_string(),
        };
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns true when the value changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => self.insert(c),
            KeyCode::Backspace if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.delete_word_before_cursor()
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                self.remove_at(self.cursor);
                true
            }
            KeyCode::Delete => {
                if self.cursor >= self.char_count() {
                    return false;
                }
                self.remove_at(self.cursor);
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                false
            }
            _ => false,
        }
    }

    fn insert(&mut self, c: char) -> bool {
        if self.max_chars.is_some_and(|max| self.char_count() >= max) {
            return false;
        }
        let chars: Vec<char> = self.value.chars().collect();
        let pos = self.cursor.min(chars.len());
        let mut new_value: String = chars.iter().take(pos).collect();
        new_value.push(c);
        new_value.extend(chars.iter().skip(pos));
        self.value = new_value;
        self.cursor = pos + 1;
        true
    }

    fn remove_at(&mut self, pos: usize) {
        self.value = self
            .value
            .chars()
            .enumerate()
            .filter(|(i, _)| *i != pos)
            .map(|(_, c)| c)
            .collect();
    }

    fn delete_word_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let chars: Vec<char> = self.value.chars().collect();
        let mut start = self.cursor.min(chars.len());
        while start > 0 && chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        let mut new_value: String = chars[..start].iter().collect();
        new_value.extend(chars[self.cursor.min(chars.len())..].iter());
        self.value = new_value;
        self.cursor = start;
        true
    }
}

/// Labelled rendering of a `TextInput`
pub struct TextField<'a> {
    input: &'a TextInput,
    label: &'a str,
    placeholder: &'a str,
    focused: bool,
    masked: bool,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, input: &'a TextInput) -> Self {
        Self {
            input,
            label,
            placeholder: "",
            focused: false,
            masked: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    fn value_spans(&self) -> Vec<Span<'static>> {
        let shown: Vec<char> = if self.masked {
            vec!['•'; self.input.char_count()]
        } else {
            self.input.value().chars().collect()
        };

        if shown.is_empty() && !self.focused {
            return vec![Span::styled(
                self.placeholder.to_string(),
                Style::default().fg(Color::DarkGray),
            )];
        }
        if !self.focused {
            return vec![Span::raw(shown.into_iter().collect::<String>())];
        }

        let pos = self.input.cursor().min(shown.len());
        let before: String = shown[..pos].iter().collect();
        let at: String = shown.get(pos).map(|c| c.to_string()).unwrap_or(" ".into());
        let after: String = shown.iter().skip(pos + 1).collect();
        vec![
            Span::raw(before),
            Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
            Span::raw(after),
        ]
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let label_style = if self.focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut spans = vec![
            Span::styled(self.label.to_string(), label_style),
            Span::raw(": "),
        ];
        spans.extend(self.value_spans());

        if let Some(max) = self.input.max_chars() {
            spans.push(Span::styled(
                format!("  {}/{} char", self.input.char_count(), max),
                Style::default().fg(Color::DarkGray),
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
