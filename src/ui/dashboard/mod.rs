// Dashboard screen implementation

use crate::household::{AppState, Chore};
use crate::ui::components::{Footer, avatar, button, due_style};
use crate::ui::constants::ANNOUNCEMENT;
use crate::ui::popups;
use crate::ui::state::{ActionButton, DashboardPopup, UiState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Widget, Wrap},
};

mod sections;

pub struct Dashboard;

impl Dashboard {
    pub fn render(frame: &mut Frame, state: &mut UiState) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Greeting and leader
                Constraint::Length(4), // Announcement
                Constraint::Length(3), // Members
                Constraint::Length(3), // Completion
                Constraint::Min(0),    // Chore list
                Constraint::Length(1), // Action button
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self::render_header(frame, chunks[0], &state.app);
        Self::render_announcement(frame, chunks[1]);
        Self::render_members(frame, chunks[2], &state.app);
        Self::render_completion(frame, chunks[3], &state.app);
        Self::render_chores(frame, chunks[4], state);
        Self::render_action_button(frame, chunks[5], state.dashboard.action_button);

        Footer::dashboard(state.status.as_deref()).render(chunks[6], frame.buffer_mut());

        match &state.dashboard.popup {
            Some(DashboardPopup::ChoreDetail(id)) => {
                popups::render_chore_detail(frame, &state.app, *id)
            }
            Some(DashboardPopup::NewChore(form)) => {
                popups::render_new_chore(frame, &state.app, form)
            }
            Some(DashboardPopup::LogoutConfirm) => popups::render_logout(frame, &state.app),
            None => {}
        }
    }
}
