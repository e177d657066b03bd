// Sign-in screen

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::components::{Footer, button};
use crate::ui::focus::AuthFocus;
use crate::ui::state::AuthForm;
use crate::ui::widgets::TextField;

pub struct AuthScreen;

impl AuthScreen {
    pub fn render(frame: &mut Frame, form: &AuthForm, status: Option<&str>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title
                Constraint::Length(5), // Fields
                Constraint::Length(2), // Buttons
                Constraint::Min(0),
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                "Welcome Back!",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Sign in to your HouseFlow account and manage your shared home effortlessly",
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let block = Block::default().borders(Borders::ALL).title(" Sign In ");
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1); 3])
            .split(inner);
        frame.render_widget(
            TextField::new("Name", &form.name)
                .placeholder("Your name")
                .focused(form.focus == AuthFocus::Name),
            rows[0],
        );
        frame.render_widget(
            TextField::new("Email", &form.email)
                .placeholder("you@example.com")
                .focused(form.focus == AuthFocus::Email),
            rows[1],
        );
        frame.render_widget(
            TextField::new("Password", &form.password)
                .masked(true)
                .focused(form.focus == AuthFocus::Password),
            rows[2],
        );

        let buttons = Line::from(vec![
            button("Sign In", form.validate().is_ok()),
            Span::raw("   "),
            button("Demo Mode", true),
        ]);
        frame.render_widget(
            Paragraph::new(buttons).alignment(Alignment::Center),
            chunks[2],
        );

        frame.render_widget(
            Footer::new(
                &[
                    ("[Tab]", "Next Field"),
                    ("[Enter]", "Sign In"),
                    ("[Ctrl+D]", "Demo Mode"),
                    ("[Esc]", "Back"),
                ],
                status,
            ),
            chunks[4],
        );
    }
}
