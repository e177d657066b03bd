use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::household::DEMO_INVITE_CODES;
use crate::ui::components::{Footer, button};
use crate::ui::state::UiState;
use crate::ui::widgets::TextField;

pub struct JoinHouseScreen;

impl JoinHouseScreen {
    pub fn render(frame: &mut Frame, state: &UiState) {
        let form = &state.join;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Code input
                Constraint::Length(2), // Error / status
                Constraint::Length(2), // Button
                Constraint::Length(3), // Demo codes
                Constraint::Min(0),
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                "Join a House",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Enter the invite code shared by your housemate",
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let block = Block::default().borders(Borders::ALL).title(" Invite Code ");
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);
        frame.render_widget(
            TextField::new("Code", &form.code)
                .placeholder("e.g. HOUSE123")
                .focused(!form.validating),
            inner,
        );

        let message = if form.validating {
            Line::from(Span::styled(
                "Validating…",
                Style::default().fg(Color::Cyan),
            ))
        } else if let Some(err) = &form.error {
            Line::from(Span::styled(err.as_str(), Style::default().fg(Color::Red)))
        } else {
            Line::from("")
        };
        frame.render_widget(
            Paragraph::new(message).alignment(Alignment::Center),
            chunks[2],
        );

        frame.render_widget(
            Paragraph::new(Line::from(button(
                "Join House",
                !form.code.is_empty() && !form.validating,
            )))
            .alignment(Alignment::Center),
            chunks[3],
        );

        let hint = Paragraph::new(vec![
            Line::from(Span::styled(
                "Demo Codes:",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                DEMO_INVITE_CODES.join(" • "),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[4]);

        frame.render_widget(
            Footer::new(
                &[
                    ("[Enter]", "Join"),
                    ("[Ctrl+D]", "Fill Demo Code"),
                    ("[Esc]", "Back"),
                ],
                state.status.as_deref(),
            ),
            chunks[6],
        );
    }
}
