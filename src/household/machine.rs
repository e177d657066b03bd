// Screen state machine
//
// The active screen is stored explicitly. `transition` is the single place
// that decides which screen an event leads to.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::{HouseDraft, NavigationDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Onboarding,
    Auth,
    HouseSelection,
    CreateHouse,
    JoinHouse,
    Dashboard,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Self::Onboarding => "Onboarding",
            Self::Auth => "Sign In",
            Self::HouseSelection => "Your House",
            Self::CreateHouse => "Create House",
            Self::JoinHouse => "Join House",
            Self::Dashboard => "Dashboard",
        }
    }

    /// Screens only reachable after signing in
    pub fn requires_session(self) -> bool {
        !matches!(self, Self::Onboarding | Self::Auth)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    RequestAuthentication,
    Authenticate,
    SelectHouse(String),
    RequestCreateHouse,
    CancelToHouseSelection,
    RequestJoinHouse,
    JoinHouse(String),
    CreateHouse(HouseDraft),
    Logout,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RequestAuthentication => "request_authentication",
            Self::Authenticate => "authenticate",
            Self::SelectHouse(_) => "select_house",
            Self::RequestCreateHouse => "request_create_house",
            Self::CancelToHouseSelection => "cancel_to_house_selection",
            Self::RequestJoinHouse => "request_join_house",
            Self::JoinHouse(_) => "join_house",
            Self::CreateHouse(_) => "create_house",
            Self::Logout => "logout",
        }
    }

    pub fn direction(&self) -> NavigationDirection {
        match self {
            Self::CancelToHouseSelection | Self::Logout => NavigationDirection::Backward,
            _ => NavigationDirection::Forward,
        }
    }
}

/// Screen reached by applying `event` on `from`, or `None` when the event
/// is not accepted there. A join is assumed to carry a valid code; the store
/// rejects bad codes before committing.
pub fn transition(from: Screen, event: &Event, has_house: bool) -> Option<Screen> {
    use Screen::*;

    match (from, event) {
        (_, Event::Logout) => Some(Onboarding),

        (Onboarding, Event::RequestAuthentication) => Some(Auth),

        (Auth, Event::Authenticate) => Some(if has_house { Dashboard } else { HouseSelection }),
        (screen, Event::Authenticate) if screen.requires_session() => Some(screen),

        (HouseSelection, Event::RequestCreateHouse) => Some(CreateHouse),
        (HouseSelection, Event::RequestJoinHouse) => Some(JoinHouse),
        (HouseSelection | CreateHouse, Event::SelectHouse(_)) => Some(Dashboard),

        (CreateHouse | JoinHouse, Event::CancelToHouseSelection) => Some(HouseSelection),
        (CreateHouse, Event::CreateHouse(_)) => Some(Dashboard),
        (JoinHouse, Event::JoinHouse(_)) => Some(Dashboard),

        _ => None,
    }
}
