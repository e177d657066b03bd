use super::*;

pub(super) fn handle_auth_key(key: KeyEvent, state: &mut UiState) {
    // Ctrl+D skips the form
    if is_ctrl(&key, 'd') {
        sign_in(state);
        return;
    }

    match key.code {
        KeyCode::Esc => {
            state.app.logout();
            state.reset_forms();
            state.status = None;
        }
        KeyCode::Tab | KeyCode::Down => state.auth.focus = state.auth.focus.next(),
        KeyCode::BackTab | KeyCode::Up => state.auth.focus = state.auth.focus.prev(),
        KeyCode::Enter => match state.auth.validate() {
            Ok(()) => sign_in(state),
            Err(e) => state.status = Some(e.to_string()),
        },
        _ => {
            if state.auth.focused_input().handle_key(key) {
                state.status = None;
            }
        }
    }
}

fn sign_in(state: &mut UiState) {
    let result = state.app.authenticate();
    if report(state, result) {
        info!(
            user = state.app.current_user().map(|u| u.name.as_str()).unwrap_or(""),
            "signed in"
        );
        state.auth = Default::default();
        state.status = None;
    }
}
