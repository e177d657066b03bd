// Household domain: screens, session store, demo data, deferred tasks

pub mod error;
pub mod invite;
pub mod machine;
pub mod roster;
pub mod share;
pub mod store;
pub mod tasks;
pub mod types;
pub mod walkthrough;

pub use error::StoreError;
pub use invite::{DEMO_INVITE_CODES, InviteCode, invite_message, match_demo_code};
pub use machine::{Event, Screen, transition};
pub use roster::Roster;
pub use share::{MemoryShare, ShareSink, Shared};
pub use store::{AppState, JOINED_HOUSE_NAME, StateSnapshot};
pub use tasks::{Task, TaskKind, TaskQueue};
pub use types::{
    Chore, ChoreId, DueLabel, House, HouseDraft, HouseType, MAX_HOUSE_NAME_LEN, MemberCount,
    NavigationDirection, NewChore, User, UserId,
};
pub use walkthrough::{Step, Walkthrough};
