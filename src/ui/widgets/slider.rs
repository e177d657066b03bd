// Member count picker: one dot per person

use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Widget,
};

use crate::household::MemberCount;

pub struct MemberSlider {
    value: MemberCount,
    focused: bool,
}

impl MemberSlider {
    pub fn new(value: MemberCount) -> Self {
        Self {
            value,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Adjust a count for an arrow/Home/End key. Returns the new count when
    /// it changed.
    pub fn adjust(value: MemberCount, key: KeyCode) -> Option<MemberCount> {
        let current = i64::from(value.get());
        let next = match key {
            KeyCode::Left | KeyCode::Char('-') => MemberCount::clamped(current - 1),
            KeyCode::Right | KeyCode::Char('+') => MemberCount::clamped(current + 1),
            KeyCode::Home => MemberCount::clamped(i64::from(MemberCount::MIN)),
            KeyCode::End => MemberCount::clamped(i64::from(MemberCount::MAX)),
            _ => return None,
        };
        (next != value).then_some(next)
    }
}

impl Widget for MemberSlider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let label_style = if self.focused {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let filled = if self.focused { Color::Cyan } else { Color::Blue };

        let mut spans = vec![
            Span::styled("Members", label_style),
            Span::raw(": "),
            Span::styled(format!("{} persons  ", self.value), Style::default().bold()),
        ];
        for n in MemberCount::MIN..=MemberCount::MAX {
            let (symbol, color) = if n <= self.value.get() {
                ("● ", filled)
            } else {
                ("○ ", Color::DarkGray)
            };
            spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        spans.push(Span::styled(
            format!(" ({}-{})", MemberCount::MIN, MemberCount::MAX),
            Style::default().fg(Color::DarkGray),
        ));

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
