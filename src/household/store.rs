// Household session store

use serde::Serialize;
use tracing::{debug, info};

use super::error::StoreError;
use super::invite::match_demo_code;
use super::machine::{Event, Screen, transition};
use super::roster::Roster;
use super::types::{
    Chore, ChoreId, House, HouseDraft, NavigationDirection, NewChore, User, UserId,
};

/// Name given to a house entered through an invite code
pub const JOINED_HOUSE_NAME: &str = "Joined House";

/// Session and navigation state for one user of the app.
///
/// Each instance is independent; the UI owns one and passes it to whatever
/// needs it.
#[derive(Debug, Clone)]
pub struct AppState {
    screen: Screen,
    direction: NavigationDirection,
    current_user: Option<UserId>,
    house: Option<House>,
    chores: Vec<Chore>,
    roster: Roster,
    epoch: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Roster::demo())
    }
}

impl AppState {
    pub fn new(roster: Roster) -> Self {
        Self {
            screen: Screen::Onboarding,
            direction: NavigationDirection::Forward,
            current_user: None,
            house: None,
            chores: Vec::new(),
            roster,
            epoch: 0,
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn request_authentication(&mut self) -> Result<(), StoreError> {
        self.dispatch(Event::RequestAuthentication)
    }

    pub fn authenticate(&mut self) -> Result<(), StoreError> {
        self.dispatch(Event::Authenticate)
    }

    pub fn select_house(&mut self, name: impl Into<String>) -> Result<(), StoreError> {
        self.dispatch(Event::SelectHouse(name.into()))
    }

    pub fn request_create_house(&mut self) -> Result<(), StoreError> {
        self.dispatch(Event::RequestCreateHouse)
    }

    pub fn cancel_to_house_selection(&mut self) -> Result<(), StoreError> {
        self.dispatch(Event::CancelToHouseSelection)
    }

    pub fn request_join_house(&mut self) -> Result<(), StoreError> {
        self.dispatch(Event::RequestJoinHouse)
    }

    /// Join a house with an invite code. The code is compared
    /// case-insensitively against the demo allow-list; a miss changes nothing.
    pub fn join_house(&mut self, code: &str) -> Result<(), StoreError> {
        self.dispatch(Event::JoinHouse(code.to_string()))
    }

    pub fn create_house(&mut self, draft: HouseDraft) -> Result<(), StoreError> {
        self.dispatch(Event::CreateHouse(draft))
    }

    /// Back to a fresh onboarding session. Accepted from every screen.
    pub fn logout(&mut self) {
        // Logout has a transition from every screen
        let _ = self.dispatch(Event::Logout);
    }

    /// Apply a navigation event. Rejected events leave the state untouched.
    pub fn dispatch(&mut self, event: Event) -> Result<(), StoreError> {
        let from = self.screen;
        let Some(to) = transition(from, &event, self.house.is_some()) else {
            debug!(%from, event = event.name(), "transition rejected");
            return Err(StoreError::InvalidTransition {
                from,
                event: event.name(),
            });
        };

        let direction = event.direction();
        let event_name = event.name();

        match event {
            Event::RequestAuthentication
            | Event::RequestCreateHouse
            | Event::RequestJoinHouse
            | Event::CancelToHouseSelection => {}
            Event::Authenticate => {
                self.current_user = self.roster.first().map(|u| u.id);
                self.chores = self.roster.sample_chores();
            }
            Event::SelectHouse(name) => {
                self.house = Some(House::named(name));
            }
            Event::JoinHouse(code) => {
                let Some(code) = match_demo_code(&code) else {
                    info!(code = %code, "invite code rejected");
                    return Err(StoreError::InvalidInviteCode);
                };
                self.house = Some(House {
                    invite_code: Some(code),
                    ..House::named(JOINED_HOUSE_NAME)
                });
            }
            Event::CreateHouse(draft) => {
                self.house = Some(House::from(draft));
            }
            Event::Logout => {
                self.current_user = None;
                self.house = None;
                self.chores.clear();
            }
        }

        self.direction = direction;
        if to != from {
            self.screen = to;
            self.epoch += 1;
        }
        debug!(%from, %to, event = event_name, epoch = self.epoch, "transition");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Chores
    // ------------------------------------------------------------------

    /// Flip a chore's completion flag. Unknown ids are ignored.
    pub fn toggle_chore_completion(&mut self, id: ChoreId) -> Option<bool> {
        let chore = self.chores.iter_mut().find(|c| c.id == id)?;
        chore.is_done = !chore.is_done;
        debug!(chore = %chore.title, done = chore.is_done, "chore toggled");
        Some(chore.is_done)
    }

    pub fn add_chore(&mut self, new_chore: NewChore) -> Result<ChoreId, StoreError> {
        let title = new_chore.title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyChoreTitle);
        }
        if !self.roster.contains(new_chore.assignee) {
            return Err(StoreError::UnknownUser);
        }

        let chore = Chore::new(
            title,
            new_chore.description.trim(),
            new_chore.assignee,
            new_chore.due,
        );
        let id = chore.id;
        info!(chore = %chore.title, due = %chore.due, "chore added");
        self.chores.push(chore);
        Ok(id)
    }

    pub fn chore(&self, id: ChoreId) -> Option<&Chore> {
        self.chores.iter().find(|c| c.id == id)
    }

    pub fn chores(&self) -> &[Chore] {
        &self.chores
    }

    /// Chores due today or already overdue, in list order
    pub fn todays_chores(&self) -> impl Iterator<Item = &Chore> {
        self.chores.iter().filter(|c| c.due.is_due_today())
    }

    pub fn sample_chores(&self) -> Vec<Chore> {
        self.roster.sample_chores()
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn direction(&self) -> NavigationDirection {
        self.direction
    }

    /// Bumped on every screen change; deferred work compares against it
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn has_selected_house(&self) -> bool {
        self.house.is_some()
    }

    pub fn show_auth(&self) -> bool {
        self.screen == Screen::Auth
    }

    pub fn show_create_house(&self) -> bool {
        self.screen == Screen::CreateHouse
    }

    pub fn show_join_house(&self) -> bool {
        self.screen == Screen::JoinHouse
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.and_then(|id| self.roster.get(id))
    }

    pub fn house(&self) -> Option<&House> {
        self.house.as_ref()
    }

    pub fn house_name(&self) -> &str {
        self.house.as_ref().map(|h| h.name.as_str()).unwrap_or("")
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn members(&self) -> &[User] {
        self.roster.users()
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.roster.get(id)
    }

    pub fn weekly_leader(&self) -> Option<&User> {
        self.roster.weekly_leader()
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            screen: self.screen,
            direction: self.direction,
            is_authenticated: self.is_authenticated(),
            has_selected_house: self.has_selected_house(),
            current_user: self.current_user().map(|u| u.name.clone()),
            house: self.house.clone(),
            chores: self
                .chores
                .iter()
                .map(|c| ChoreSnapshot {
                    title: c.title.clone(),
                    assignee: self
                        .user(c.assignee)
                        .map(|u| u.name.clone())
                        .unwrap_or_default(),
                    due: c.due.label(),
                    is_done: c.is_done,
                })
                .collect(),
        }
    }
}

/// Serializable view of the store, used by the CLI `--json` output
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot {
    pub screen: Screen,
    pub direction: NavigationDirection,
    pub is_authenticated: bool,
    pub has_selected_house: bool,
    pub current_user: Option<String>,
    pub house: Option<House>,
    pub chores: Vec<ChoreSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoreSnapshot {
    pub title: String,
    pub assignee: String,
    pub due: &'static str,
    pub is_done: bool,
}
