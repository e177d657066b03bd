use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::household::HouseType;
use crate::ui::components::{Footer, button};
use crate::ui::focus::CreateFocus;
use crate::ui::popups;
use crate::ui::state::{CreatePopup, UiState};
use crate::ui::widgets::{MemberSlider, TextField};

pub struct CreateHouseScreen;

impl CreateHouseScreen {
    pub fn render(frame: &mut Frame, state: &UiState) {
        let form = &state.create;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(7), // Form
                Constraint::Length(2), // Error / button
                Constraint::Min(0),
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                "Create New House",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Start by entering your home details",
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let block = Block::default().borders(Borders::ALL).title(" House ");
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(
            TextField::new("House Name", &form.name)
                .placeholder("e.g. Maple Street Flat")
                .focused(form.focus == CreateFocus::Name),
            rows[0],
        );

        let type_focused = form.focus == CreateFocus::HouseType;
        let mut type_spans = vec![Span::styled(
            "House Type: ",
            if type_focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            },
        )];
        for kind in HouseType::ALL {
            let style = if kind == form.kind {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            type_spans.push(Span::styled(format!(" {} ", kind.label()), style));
            type_spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(type_spans)), rows[2]);

        frame.render_widget(
            MemberSlider::new(form.members).focused(form.focus == CreateFocus::Members),
            rows[4],
        );

        let action = match &form.error {
            Some(err) => Line::from(Span::styled(
                err.to_string(),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(button("Create Home", form.validated_name().is_ok())),
        };
        frame.render_widget(
            Paragraph::new(action).alignment(Alignment::Center),
            chunks[2],
        );

        frame.render_widget(
            Footer::new(
                &[
                    ("[Tab]", "Next Field"),
                    ("[←/→]", "Adjust"),
                    ("[Enter]", "Review"),
                    ("[Esc]", "Back"),
                ],
                state.status.as_deref(),
            ),
            chunks[4],
        );

        match &form.popup {
            Some(CreatePopup::Summary) => popups::render_summary(frame, form),
            Some(CreatePopup::InviteCode(code)) => popups::render_invite(frame, form, code),
            None => {}
        }
    }
}
