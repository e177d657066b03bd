use super::*;

use crate::household::{DueLabel, Task, TaskKind};
use crate::ui::focus::NewChoreFocus;
use crate::ui::state::{ActionButton, NewChoreForm};

pub(super) fn handle_dashboard_key(key: KeyEvent, state: &mut UiState) {
    match state.dashboard.popup.take() {
        Some(DashboardPopup::LogoutConfirm) => handle_logout_key(key, state),
        Some(DashboardPopup::ChoreDetail(id)) => {
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    state.app.toggle_chore_completion(id);
                    state.dashboard.popup = Some(DashboardPopup::ChoreDetail(id));
                }
                KeyCode::Esc => {}
                _ => state.dashboard.popup = Some(DashboardPopup::ChoreDetail(id)),
            }
        }
        Some(DashboardPopup::NewChore(form)) => handle_new_chore_key(key, state, form),
        None => handle_main_key(key, state),
    }
}

fn handle_main_key(key: KeyEvent, state: &mut UiState) {
    let chore_count = state.app.chores().len();
    match key.code {
        KeyCode::Up => {
            if let Some(i) = state.dashboard.list_state.selected() {
                if i > 0 {
                    state.dashboard.list_state.select(Some(i - 1));
                }
            }
        }
        KeyCode::Down => match state.dashboard.list_state.selected() {
            Some(i) if chore_count > 0 && i < chore_count - 1 => {
                state.dashboard.list_state.select(Some(i + 1));
            }
            None if chore_count > 0 => state.dashboard.list_state.select(Some(0)),
            _ => {}
        },
        // Toggle completion of the selected chore
        KeyCode::Char(' ') => {
            if let Some(id) = selected_chore_id(state) {
                state.app.toggle_chore_completion(id);
            }
        }
        KeyCode::Enter => {
            if let Some(id) = selected_chore_id(state) {
                state.dashboard.popup = Some(DashboardPopup::ChoreDetail(id));
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') => press_action_button(state),
        KeyCode::Char('l') | KeyCode::Char('L') => {
            state.dashboard.popup = Some(DashboardPopup::LogoutConfirm);
        }
        _ => {}
    }
}

/// First press expands the button, a second press while expanded opens the
/// new-chore form. An expanded button collapses on its own after a delay.
fn press_action_button(state: &mut UiState) {
    match state.dashboard.action_button {
        ActionButton::Collapsed => {
            state.dashboard.action_button = ActionButton::Expanded;
            state.tasks.schedule(
                Task::CollapseActionButton,
                Instant::now(),
                state.timers.action_button_collapse(),
                state.app.epoch(),
            );
        }
        ActionButton::Expanded => {
            state.tasks.cancel(TaskKind::CollapseActionButton);
            state.dashboard.popup = Some(DashboardPopup::NewChore(NewChoreForm::default()));
        }
    }
}

fn handle_logout_key(key: KeyEvent, state: &mut UiState) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            state.app.logout();
            state.reset_forms();
            state.status = None;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {}
        _ => state.dashboard.popup = Some(DashboardPopup::LogoutConfirm),
    }
}

fn handle_new_chore_key(key: KeyEvent, state: &mut UiState, mut form: NewChoreForm) {
    match key.code {
        KeyCode::Esc => {
            close_new_chore(state);
            return;
        }
        KeyCode::Tab => form.focus = form.focus.next(),
        KeyCode::BackTab => form.focus = form.focus.prev(),
        KeyCode::Enter => {
            if submit_new_chore(state, &form) {
                return;
            }
        }
        _ => match form.focus {
            NewChoreFocus::Title => {
                form.title.handle_key(key);
            }
            NewChoreFocus::Description => {
                form.description.handle_key(key);
            }
            NewChoreFocus::Assignee => {
                let count = state.app.members().len().max(1);
                match key.code {
                    KeyCode::Left => form.assignee = (form.assignee + count - 1) % count,
                    KeyCode::Right | KeyCode::Char(' ') => {
                        form.assignee = (form.assignee + 1) % count
                    }
                    _ => {}
                }
            }
            NewChoreFocus::Due => {
                let count = DueLabel::SELECTABLE.len();
                match key.code {
                    KeyCode::Left => form.due = (form.due + count - 1) % count,
                    KeyCode::Right | KeyCode::Char(' ') => form.due = (form.due + 1) % count,
                    _ => {}
                }
            }
        },
    }
    state.dashboard.popup = Some(DashboardPopup::NewChore(form));
}

/// Returns true when the chore was added and the form closed
fn submit_new_chore(state: &mut UiState, form: &NewChoreForm) -> bool {
    if !form.can_submit() {
        state.status = Some("Task name is required".to_string());
        return false;
    }
    let Some(assignee) = state.app.members().get(form.assignee).map(|u| u.id) else {
        state.status = Some("Pick someone to assign this chore to".to_string());
        return false;
    };

    match state.app.add_chore(form.to_new_chore(assignee)) {
        Ok(id) => {
            if let Some(idx) = state.app.chores().iter().position(|c| c.id == id) {
                state.dashboard.list_state.select(Some(idx));
            }
            state.status = None;
            close_new_chore(state);
            true
        }
        Err(e) => {
            state.status = Some(e.to_string());
            false
        }
    }
}

fn close_new_chore(state: &mut UiState) {
    state.dashboard.popup = None;
    state.dashboard.action_button = ActionButton::Collapsed;
}

fn selected_chore_id(state: &UiState) -> Option<crate::household::ChoreId> {
    let idx = state.dashboard.list_state.selected()?;
    state.app.chores().get(idx).map(|c| c.id)
}

pub(super) fn select_first_chore(state: &mut UiState) {
    let first = if state.app.chores().is_empty() { None } else { Some(0) };
    state.dashboard.list_state.select(first);
}
