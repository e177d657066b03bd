// Integration tests for key-driven flows through the terminal UI
//
// Keys go through the same handler the event loop uses; deferred work is
// run by calling run_due_tasks with an instant past the configured delay.

use crossterm::event::KeyCode;
use houseflow::household::{JOINED_HOUSE_NAME, MemoryShare, Screen};
use houseflow::ui::state::{ActionButton, CreatePopup, DashboardPopup, UiState};
use houseflow::ui::{handle_key, render, run_due_tasks};
use ratatui::{Terminal, backend::TestBackend};
use std::time::Instant;

use crate::common::helpers::*;

fn draw(state: &mut UiState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|frame| render(frame, state)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

// ============================================================================
// Join flow
// ============================================================================

#[test]
fn test_join_with_demo_code() {
    let mut state = signed_in_ui();
    press(&mut state, KeyCode::Char('j'));
    assert_eq!(state.app.screen(), Screen::JoinHouse);

    type_text(&mut state, "house123");
    press(&mut state, KeyCode::Enter);
    assert!(state.join.validating);

    // Nothing happens before the delay
    run_due_tasks(&mut state, Instant::now());
    assert_eq!(state.app.screen(), Screen::JoinHouse);

    run_due_tasks(&mut state, later());
    assert_eq!(state.app.screen(), Screen::Dashboard);
    assert_eq!(state.app.house_name(), JOINED_HOUSE_NAME);
    assert_eq!(state.dashboard.list_state.selected(), Some(0));
}

#[test]
fn test_join_with_wrong_code_shows_error() {
    let mut state = signed_in_ui();
    press(&mut state, KeyCode::Char('j'));
    type_text(&mut state, "WRONG1");
    press(&mut state, KeyCode::Enter);
    run_due_tasks(&mut state, later());

    assert_eq!(state.app.screen(), Screen::JoinHouse);
    assert!(!state.join.validating);
    assert!(state.join.error.is_some());

    // Editing the code clears the error
    press(&mut state, KeyCode::Backspace);
    assert!(state.join.error.is_none());
}

#[test]
fn test_leaving_join_screen_drops_pending_validation() {
    let mut state = signed_in_ui();
    press(&mut state, KeyCode::Char('j'));
    type_text(&mut state, "HOUSE123");
    press(&mut state, KeyCode::Enter);

    press(&mut state, KeyCode::Esc);
    assert_eq!(state.app.screen(), Screen::HouseSelection);

    run_due_tasks(&mut state, later());
    assert_eq!(state.app.screen(), Screen::HouseSelection);
    assert!(!state.app.has_selected_house());
    assert!(state.tasks.is_empty());
}

#[test]
fn test_typing_q_in_join_field_does_not_quit() {
    let mut state = signed_in_ui();
    press(&mut state, KeyCode::Char('j'));
    press(&mut state, KeyCode::Char('q'));
    assert_eq!(state.join.code.value(), "q");
}

// ============================================================================
// Create flow
// ============================================================================

#[test]
fn test_create_house_flow() {
    let mut state = signed_in_ui().with_share(Box::new(MemoryShare::new()));
    press(&mut state, KeyCode::Char('c'));
    assert_eq!(state.app.screen(), Screen::CreateHouse);

    // Blank names are refused before the summary
    press(&mut state, KeyCode::Enter);
    assert!(state.create.error.is_some());
    assert!(state.create.popup.is_none());

    type_text(&mut state, "Maple Street");
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Right);
    assert_eq!(state.create.members.get(), 4);

    press(&mut state, KeyCode::Enter);
    assert_eq!(state.create.popup, Some(CreatePopup::Summary));

    press(&mut state, KeyCode::Char('y'));
    let Some(CreatePopup::InviteCode(code)) = state.create.popup.clone() else {
        panic!("expected invite code popup");
    };
    assert_eq!(code.as_str().chars().count(), 8);

    press(&mut state, KeyCode::Char('c'));
    assert!(state.create.copied);
    run_due_tasks(&mut state, later());
    assert!(!state.create.copied);

    press(&mut state, KeyCode::Enter);
    assert_eq!(state.app.screen(), Screen::Dashboard);
    let house = state.app.house().unwrap();
    assert_eq!(house.name, "Maple Street");
    assert_eq!(house.invite_code.as_ref(), Some(&code));
}

#[test]
fn test_share_invite_message() {
    let mut state = signed_in_ui();
    press(&mut state, KeyCode::Char('c'));
    type_text(&mut state, "Oak Flat");
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Char('s'));
    assert_eq!(state.status.as_deref(), Some("Invite message shared"));
}

// ============================================================================
// Dashboard
// ============================================================================

fn dashboard_ui() -> UiState {
    let mut state = signed_in_ui();
    press(&mut state, KeyCode::Char('j'));
    assert!(!handle_key(ctrl('d'), &mut state));
    press(&mut state, KeyCode::Enter);
    run_due_tasks(&mut state, later());
    assert_eq!(state.app.screen(), Screen::Dashboard);
    state
}

#[test]
fn test_toggle_selected_chore() {
    let mut state = dashboard_ui();
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Char(' '));
    assert!(state.app.chores()[1].is_done);

    press(&mut state, KeyCode::Enter);
    assert!(matches!(
        state.dashboard.popup,
        Some(DashboardPopup::ChoreDetail(_))
    ));
    press(&mut state, KeyCode::Char(' '));
    assert!(!state.app.chores()[1].is_done);
    press(&mut state, KeyCode::Esc);
    assert!(state.dashboard.popup.is_none());
}

#[test]
fn test_action_button_collapses_after_delay() {
    let mut state = dashboard_ui();
    press(&mut state, KeyCode::Char('n'));
    assert_eq!(state.dashboard.action_button, ActionButton::Expanded);

    run_due_tasks(&mut state, later());
    assert_eq!(state.dashboard.action_button, ActionButton::Collapsed);
}

#[test]
fn test_action_button_collapses_behind_popup() {
    let mut state = dashboard_ui();
    press(&mut state, KeyCode::Char('n'));
    press(&mut state, KeyCode::Enter);
    assert!(matches!(
        state.dashboard.popup,
        Some(DashboardPopup::ChoreDetail(_))
    ));

    run_due_tasks(&mut state, later());
    press(&mut state, KeyCode::Esc);
    assert!(state.dashboard.popup.is_none());
    assert_eq!(state.dashboard.action_button, ActionButton::Collapsed);

    // The next press only expands again
    press(&mut state, KeyCode::Char('n'));
    assert_eq!(state.dashboard.action_button, ActionButton::Expanded);
    assert!(state.dashboard.popup.is_none());
}

#[test]
fn test_new_chore_popup() {
    let mut state = dashboard_ui();
    press(&mut state, KeyCode::Char('n'));
    press(&mut state, KeyCode::Char('n'));
    assert!(matches!(
        state.dashboard.popup,
        Some(DashboardPopup::NewChore(_))
    ));

    // Expanding was cancelled, so the collapse task is gone
    run_due_tasks(&mut state, later());
    assert!(state.dashboard.popup.is_some());

    type_text(&mut state, "Water plants");
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Enter);

    assert!(state.dashboard.popup.is_none());
    assert_eq!(state.dashboard.action_button, ActionButton::Collapsed);
    let chore = state.app.chores().last().unwrap();
    assert_eq!(chore.title, "Water plants");
    assert_eq!(chore.assignee, state.app.members()[1].id);
    assert_eq!(state.dashboard.list_state.selected(), Some(5));
}

#[test]
fn test_logout_confirmation() {
    let mut state = dashboard_ui();
    press(&mut state, KeyCode::Char('l'));
    press(&mut state, KeyCode::Char('n'));
    assert_eq!(state.app.screen(), Screen::Dashboard);

    press(&mut state, KeyCode::Char('l'));
    press(&mut state, KeyCode::Char('y'));
    assert_eq!(state.app.screen(), Screen::Onboarding);
    assert!(state.app.chores().is_empty());
    assert_eq!(state.onboarding.page, 0);
}

#[test]
fn test_quit_keys() {
    let mut state = dashboard_ui();
    assert!(handle_key(key(KeyCode::Char('q')), &mut state));
    assert!(handle_key(ctrl('c'), &mut state));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_every_screen_renders() {
    let mut state = UiState::default();
    assert!(draw(&mut state).contains("HouseFlow"));

    let mut state = signed_in_ui();
    assert!(draw(&mut state).contains("Your House"));

    press(&mut state, KeyCode::Char('j'));
    assert!(draw(&mut state).contains("HOUSE123"));

    let mut state = dashboard_ui();
    let screen = draw(&mut state);
    assert!(screen.contains("Hi, Mahmut"));
    assert!(screen.contains("Take out the trash"));
    assert!(screen.contains("Weekly leader"));
}
