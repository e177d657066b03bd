use thiserror::Error;

use super::machine::Screen;

/// Errors returned by the household store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("'{event}' is not allowed on the {from} screen")]
    InvalidTransition { from: Screen, event: &'static str },

    #[error("Invalid invite code")]
    InvalidInviteCode,

    #[error("Chore title cannot be empty")]
    EmptyChoreTitle,

    #[error("Assignee is not a member of this house")]
    UnknownUser,
}
