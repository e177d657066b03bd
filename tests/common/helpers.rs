#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use houseflow::household::{AppState, HouseDraft, HouseType, InviteCode, MemberCount, Screen};
use houseflow::ui::{UiState, handle_key};
use std::time::{Duration, Instant};

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Send a key and assert it did not ask the app to quit
pub fn press(state: &mut UiState, code: KeyCode) {
    assert!(!handle_key(key(code), state), "unexpected quit on {code:?}");
}

pub fn type_text(state: &mut UiState, text: &str) {
    for c in text.chars() {
        press(state, KeyCode::Char(c));
    }
}

/// An instant comfortably past any configured delay
pub fn later() -> Instant {
    Instant::now() + Duration::from_secs(10)
}

pub fn draft(name: &str) -> HouseDraft {
    HouseDraft {
        name: name.to_string(),
        kind: HouseType::StudentHouse,
        member_count: MemberCount::clamped(4),
        invite_code: InviteCode::generate(),
    }
}

/// Store signed in and waiting on the house selection screen
pub fn signed_in_app() -> AppState {
    let mut app = AppState::default();
    app.request_authentication().unwrap();
    app.authenticate().unwrap();
    assert_eq!(app.screen(), Screen::HouseSelection);
    app
}

/// Store signed in with a created house, on the dashboard
pub fn dashboard_app() -> AppState {
    let mut app = signed_in_app();
    app.request_create_house().unwrap();
    app.create_house(draft("Test House")).unwrap();
    assert_eq!(app.screen(), Screen::Dashboard);
    app
}

/// UI driven from onboarding to house selection by key presses
pub fn signed_in_ui() -> UiState {
    let mut state = UiState::default();
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.app.screen(), Screen::Auth);
    assert!(!handle_key(ctrl('d'), &mut state));
    assert_eq!(state.app.screen(), Screen::HouseSelection);
    state
}
