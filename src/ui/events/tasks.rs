use super::*;

use crate::household::Task;
use crate::ui::constants::INVALID_CODE_MESSAGE;
use crate::ui::state::{ActionButton, JoinForm};

/// Run deferred tasks that have come due. Tasks scheduled on a screen that
/// has since been left are discarded by the queue.
pub fn run_due_tasks(state: &mut UiState, now: Instant) {
    for task in state.tasks.take_due(now, state.app.epoch()) {
        match task {
            Task::ValidateInvite { code } => finish_join(state, &code),
            Task::CollapseActionButton => {
                state.dashboard.action_button = ActionButton::Collapsed;
            }
            Task::ClearCopiedFeedback => state.create.copied = false,
        }
    }
}

fn finish_join(state: &mut UiState, code: &str) {
    state.join.validating = false;
    match state.app.join_house(code) {
        Ok(()) => {
            info!(house = state.app.house_name(), "joined house");
            state.join = JoinForm::default();
            state.status = None;
            super::dashboard::select_first_chore(state);
        }
        Err(StoreError::InvalidInviteCode) => {
            state.join.error = Some(INVALID_CODE_MESSAGE.to_string());
        }
        Err(e) => {
            report(state, Err(e));
        }
    }
}
