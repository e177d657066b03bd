use super::*;

pub(super) fn handle_onboarding_key(key: KeyEvent, state: &mut UiState) {
    match key.code {
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => state.onboarding.next(),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => state.onboarding.prev(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if state.onboarding.is_last_page() {
                let result = state.app.request_authentication();
                if report(state, result) {
                    state.status = None;
                }
            } else {
                state.onboarding.next();
            }
        }
        _ => {}
    }
}
