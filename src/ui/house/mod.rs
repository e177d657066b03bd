// House selection, creation and joining screens

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::components::Footer;
use crate::ui::state::{HouseOption, UiState};

mod create;
mod join;

pub use create::CreateHouseScreen;
pub use join::JoinHouseScreen;

pub struct HouseSelectionScreen;

impl HouseSelectionScreen {
    pub fn render(frame: &mut Frame, state: &UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title
                Constraint::Length(5), // Create card
                Constraint::Length(5), // Join card
                Constraint::Min(0),
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let greeting = state
            .app
            .current_user()
            .map(|u| format!("Hi {}, create a new house or join an existing one", u.name))
            .unwrap_or_else(|| "Create a new house or join an existing one".to_string());
        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                "Your House",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(greeting, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let cards = [
            (
                HouseOption::Create,
                " Create House ",
                "Set up a new house and invite your housemates",
            ),
            (
                HouseOption::Join,
                " Join House ",
                "Enter the invite code you received",
            ),
        ];
        for ((option, title, description), area) in cards.into_iter().zip([chunks[1], chunks[2]])
        {
            let selected = state.selection.selected == option;
            let border = if selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let card = Paragraph::new(vec![Line::from(""), Line::from(description)])
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border)
                        .title(title),
                );
            frame.render_widget(card, area);
        }

        frame.render_widget(
            Footer::new(
                &[
                    ("[↑/↓]", "Select"),
                    ("[Enter]", "Open"),
                    ("[C]", "reate"),
                    ("[J]", "oin"),
                    ("[L]", "ogout"),
                    ("[Q]", "uit"),
                ],
                state.status.as_deref(),
            ),
            chunks[4],
        );
    }
}
