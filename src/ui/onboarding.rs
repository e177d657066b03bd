// Onboarding pages

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::components::{Footer, button};
use crate::ui::constants::{APP_TAGLINE, ONBOARDING_PAGES};
use crate::ui::state::OnboardingState;

pub struct OnboardingScreen;

impl OnboardingScreen {
    pub fn render(frame: &mut Frame, state: &OnboardingState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(6),    // Page card
                Constraint::Length(2), // Page indicator
                Constraint::Length(2), // Get Started
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "HouseFlow",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(APP_TAGLINE, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let (title, subtitle) = ONBOARDING_PAGES
            .get(state.page)
            .copied()
            .unwrap_or(("", ""));
        let card = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(subtitle, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, chunks[1]);

        let dots: Vec<Span> = (0..ONBOARDING_PAGES.len())
            .map(|i| {
                if i == state.page {
                    Span::styled("━━━ ", Style::default().fg(Color::Blue))
                } else {
                    Span::styled("• ", Style::default().fg(Color::DarkGray))
                }
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
            chunks[2],
        );

        frame.render_widget(
            Paragraph::new(Line::from(button("Get Started", state.is_last_page())))
                .alignment(Alignment::Center),
            chunks[3],
        );

        frame.render_widget(Footer::onboarding(state.is_last_page()), chunks[4]);
    }
}
