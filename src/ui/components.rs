// Reusable UI components

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::household::{DueLabel, User};

pub struct Footer {
    content: Line<'static>,
}

impl Footer {
    /// Hotkey hints, optionally preceded by a status message
    pub fn new(controls: &[(&'static str, &'static str)], status: Option<&str>) -> Self {
        let mut spans = Vec::new();

        if let Some(status) = status {
            spans.push(Span::styled(
                status.to_string(),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::raw("  |  "));
        }

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" "));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
        }
    }

    pub fn onboarding(last_page: bool) -> Self {
        if last_page {
            Self::new(&[("[←/→]", "Pages"), ("[Enter]", "Get Started"), ("[Q]", "Quit")], None)
        } else {
            Self::new(&[("[←/→]", "Pages"), ("[Enter]", "Next"), ("[Q]", "Quit")], None)
        }
    }

    pub fn dashboard(status: Option<&str>) -> Self {
        Self::new(
            &[
                ("[↑/↓]", "Select"),
                ("[Space]", "Done/Undo"),
                ("[Enter]", "Details"),
                ("[N]", "New Chore"),
                ("[L]", "Logout"),
                ("[Q]", "Quit"),
            ],
            status,
        )
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::default().fg(Color::Gray))
            .render(area, buf);
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Initials badge for a member
pub fn avatar(user: &User) -> Span<'static> {
    Span::styled(
        format!(" {} ", user.initials()),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn due_style(due: DueLabel) -> Style {
    match due {
        DueLabel::Overdue => Style::default().fg(Color::Red).bold(),
        DueLabel::Today => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::Blue),
    }
}

/// Button-like label, highlighted when active
pub fn button(label: &str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!("[ {label} ]"), style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 10, area);
        assert_eq!(rect, Rect::new(25, 15, 50, 10));

        let tiny = Rect::new(0, 0, 20, 6);
        let rect = centered_rect(50, 10, tiny);
        assert!(rect.width <= 16 && rect.height <= 4);
    }
}
