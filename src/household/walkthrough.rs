// Scripted end-to-end session without a terminal

use serde::Serialize;
use tracing::info;

use super::error::StoreError;
use super::invite::InviteCode;
use super::machine::Screen;
use super::store::{AppState, StateSnapshot};
use super::types::{HouseDraft, HouseType, MemberCount};

/// Name used when the walkthrough creates a house
pub const DEMO_HOUSE_NAME: &str = "Demo House";

#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub action: String,
    pub screen: Screen,
}

#[derive(Debug, Clone, Serialize)]
pub struct Walkthrough {
    pub steps: Vec<Step>,
    pub snapshot: StateSnapshot,
}

impl Walkthrough {
    /// One line per step: the action and the screen it landed on
    pub fn transcript(&self) -> String {
        self.steps
            .iter()
            .map(|step| format!("{:<28} -> {}", step.action, step.screen))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Sign in, enter a house and complete the first chore.
///
/// With `join` the house is entered through that invite code. A rejected
/// code is recorded and the walkthrough falls back to creating a house.
pub fn run(join: Option<&str>) -> Result<Walkthrough, StoreError> {
    let mut state = AppState::default();
    let mut steps = Vec::new();
    let mut record = |action: String, state: &AppState| {
        steps.push(Step {
            action,
            screen: state.screen(),
        })
    };

    record("start".into(), &state);
    state.request_authentication()?;
    record("get started".into(), &state);
    state.authenticate()?;
    record("sign in (demo)".into(), &state);

    let mut joined = false;
    if let Some(code) = join {
        state.request_join_house()?;
        record("open join form".into(), &state);
        match state.join_house(code) {
            Ok(()) => {
                record(format!("join with {}", code.trim()), &state);
                joined = true;
            }
            Err(StoreError::InvalidInviteCode) => {
                record(format!("join with {} (rejected)", code.trim()), &state);
                state.cancel_to_house_selection()?;
                record("back".into(), &state);
            }
            Err(e) => return Err(e),
        }
    }

    if !joined {
        state.request_create_house()?;
        record("open create form".into(), &state);
        state.create_house(HouseDraft {
            name: DEMO_HOUSE_NAME.to_string(),
            kind: HouseType::SharedHouse,
            member_count: MemberCount::clamped(4),
            invite_code: InviteCode::generate(),
        })?;
        record(format!("create {DEMO_HOUSE_NAME}"), &state);
    }

    if let Some(chore) = state.chores().iter().find(|c| !c.is_done) {
        let (id, title) = (chore.id, chore.title.clone());
        state.toggle_chore_completion(id);
        record(format!("complete {title}"), &state);
    }

    info!(steps = steps.len(), "walkthrough finished");
    Ok(Walkthrough {
        steps,
        snapshot: state.snapshot(),
    })
}
