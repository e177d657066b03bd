use super::*;

use crate::household::{HouseDraft, HouseType, InviteCode, Task, invite_message};
use crate::ui::constants::DEMO_FILL_CODE;
use crate::ui::focus::CreateFocus;
use crate::ui::state::{CreateHouseForm, CreatePopup, HouseOption, JoinForm};
use crate::ui::widgets::MemberSlider;

pub(super) fn handle_selection_key(key: KeyEvent, state: &mut UiState) {
    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
            state.selection.selected = state.selection.selected.toggle();
        }
        KeyCode::Char('c') | KeyCode::Char('C') => open_option(state, HouseOption::Create),
        KeyCode::Char('j') | KeyCode::Char('J') => open_option(state, HouseOption::Join),
        KeyCode::Enter => open_option(state, state.selection.selected),
        KeyCode::Char('l') | KeyCode::Char('L') => {
            state.app.logout();
            state.reset_forms();
        }
        _ => {}
    }
}

fn open_option(state: &mut UiState, option: HouseOption) {
    state.selection.selected = option;
    let result = match option {
        HouseOption::Create => state.app.request_create_house(),
        HouseOption::Join => state.app.request_join_house(),
    };
    if report(state, result) {
        state.status = None;
    }
}

fn back_to_selection(state: &mut UiState) {
    let result = state.app.cancel_to_house_selection();
    if report(state, result) {
        state.create = CreateHouseForm::new(state.default_member_count);
        state.join = JoinForm::default();
        state.status = None;
    }
}

// ----------------------------------------------------------------------------
// Create house
// ----------------------------------------------------------------------------

pub(super) fn handle_create_key(key: KeyEvent, state: &mut UiState) {
    match state.create.popup.clone() {
        Some(CreatePopup::Summary) => handle_summary_key(key, state),
        Some(CreatePopup::InviteCode(code)) => handle_invite_key(key, state, code),
        None => handle_create_form_key(key, state),
    }
}

fn handle_create_form_key(key: KeyEvent, state: &mut UiState) {
    match key.code {
        KeyCode::Esc => back_to_selection(state),
        KeyCode::Tab | KeyCode::Down => state.create.focus = state.create.focus.next(),
        KeyCode::BackTab | KeyCode::Up => state.create.focus = state.create.focus.prev(),
        KeyCode::Enter => match state.create.validated_name() {
            Ok(_) => {
                state.create.error = None;
                state.create.popup = Some(CreatePopup::Summary);
            }
            Err(e) => state.create.error = Some(e),
        },
        _ => match state.create.focus {
            CreateFocus::Name => {
                if state.create.name.handle_key(key) {
                    state.create.error = None;
                }
            }
            CreateFocus::HouseType => {
                let idx = state.create.kind.to_index();
                let count = HouseType::ALL.len();
                match key.code {
                    KeyCode::Left => {
                        state.create.kind = HouseType::from_index((idx + count - 1) % count)
                    }
                    KeyCode::Right | KeyCode::Char(' ') => {
                        state.create.kind = HouseType::from_index((idx + 1) % count)
                    }
                    _ => {}
                }
            }
            CreateFocus::Members => {
                if let Some(count) = MemberSlider::adjust(state.create.members, key.code) {
                    state.create.members = count;
                }
            }
        },
    }
}

fn handle_summary_key(key: KeyEvent, state: &mut UiState) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
            let code = InviteCode::generate();
            debug!(%code, "invite code generated");
            state.create.popup = Some(CreatePopup::InviteCode(code));
            state.create.copied = false;
        }
        KeyCode::Esc | KeyCode::Char('e') | KeyCode::Char('E') => {
            state.create.popup = None;
        }
        _ => {}
    }
}

fn handle_invite_key(key: KeyEvent, state: &mut UiState, code: InviteCode) {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => {
            if let Err(e) = state.share.copy_text(code.as_str()) {
                tracing::warn!(error = %e, "copy failed");
                return;
            }
            state.create.copied = true;
            state.status = Some(format!("Copied invite code {code}"));
            state.tasks.schedule(
                Task::ClearCopiedFeedback,
                Instant::now(),
                state.timers.copied_feedback(),
                state.app.epoch(),
            );
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            let name = state.create.validated_name().unwrap_or_default();
            match state.share.share_text(&invite_message(&name, &code)) {
                Ok(()) => state.status = Some("Invite message shared".to_string()),
                Err(e) => tracing::warn!(error = %e, "share failed"),
            }
        }
        KeyCode::Enter => finish_create(state, code),
        _ => {}
    }
}

fn finish_create(state: &mut UiState, invite_code: InviteCode) {
    let name = match state.create.validated_name() {
        Ok(name) => name,
        Err(e) => {
            state.create.popup = None;
            state.create.error = Some(e);
            return;
        }
    };

    let draft = HouseDraft {
        name,
        kind: state.create.kind,
        member_count: state.create.members,
        invite_code,
    };
    let result = state.app.create_house(draft);
    if report(state, result) {
        info!(house = state.app.house_name(), "house created");
        state.create = CreateHouseForm::new(state.default_member_count);
        state.status = None;
        super::dashboard::select_first_chore(state);
    }
}

// ----------------------------------------------------------------------------
// Join house
// ----------------------------------------------------------------------------

pub(super) fn handle_join_key(key: KeyEvent, state: &mut UiState) {
    if key.code == KeyCode::Esc {
        back_to_selection(state);
        return;
    }

    // Input is locked while a code is being checked
    if state.join.validating {
        return;
    }

    if is_ctrl(&key, 'd') {
        state.join.code.set(DEMO_FILL_CODE);
        state.join.error = None;
        return;
    }

    match key.code {
        KeyCode::Enter => submit_join(state),
        _ => {
            if state.join.code.handle_key(key) {
                state.join.error = None;
            }
        }
    }
}

fn submit_join(state: &mut UiState) {
    if state.join.code.is_empty() {
        return;
    }

    state.join.validating = true;
    state.join.error = None;
    state.tasks.schedule(
        Task::ValidateInvite {
            code: state.join.code.value().to_string(),
        },
        Instant::now(),
        state.timers.join_validation(),
        state.app.epoch(),
    );
}
