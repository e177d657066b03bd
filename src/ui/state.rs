// UI state: the household store plus per-screen form state

use ratatui::widgets::ListState;
use thiserror::Error;

use crate::config::{Config, TimerConfig};
use crate::household::{
    AppState, ChoreId, DueLabel, HouseType, InviteCode, MAX_HOUSE_NAME_LEN, MemberCount,
    MemoryShare, NewChore, ShareSink, TaskQueue, UserId,
};
use crate::ui::constants::ONBOARDING_PAGES;
use crate::ui::focus::{AuthFocus, CreateFocus, NewChoreFocus};
use crate::ui::widgets::TextInput;

/// Input rejected by a form before it reaches the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    EmptyField(&'static str),

    #[error("House name cannot be empty")]
    EmptyHouseName,
}

pub struct UiState {
    pub app: AppState,
    pub tasks: TaskQueue,
    pub share: Box<dyn ShareSink>,
    pub timers: TimerConfig,
    pub onboarding: OnboardingState,
    pub auth: AuthForm,
    pub selection: SelectionState,
    pub create: CreateHouseForm,
    pub join: JoinForm,
    pub dashboard: DashboardState,
    pub status: Option<String>,
    pub default_member_count: MemberCount,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl UiState {
    pub fn new(config: &Config) -> Self {
        let default_member_count =
            MemberCount::clamped(i64::from(config.house.default_member_count));
        Self {
            app: AppState::default(),
            tasks: TaskQueue::new(),
            share: Box::new(MemoryShare::new()),
            timers: config.timers.clone(),
            onboarding: OnboardingState::default(),
            auth: AuthForm::default(),
            selection: SelectionState::default(),
            create: CreateHouseForm::new(default_member_count),
            join: JoinForm::default(),
            dashboard: DashboardState::default(),
            status: None,
            default_member_count,
        }
    }

    pub fn with_share(mut self, share: Box<dyn ShareSink>) -> Self {
        self.share = share;
        self
    }

    /// Clear form state belonging to screens that are no longer shown
    pub fn reset_forms(&mut self) {
        self.onboarding = OnboardingState::default();
        self.auth = AuthForm::default();
        self.selection = SelectionState::default();
        self.create = CreateHouseForm::new(self.default_member_count);
        self.join = JoinForm::default();
        self.dashboard = DashboardState::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct OnboardingState {
    pub page: usize,
}

impl OnboardingState {
    pub fn next(&mut self) {
        if self.page + 1 < ONBOARDING_PAGES.len() {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// "Get Started" only works from the last page
    pub fn is_last_page(&self) -> bool {
        self.page + 1 == ONBOARDING_PAGES.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub name: TextInput,
    pub email: TextInput,
    pub password: TextInput,
    pub focus: AuthFocus,
}

impl AuthForm {
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            AuthFocus::Name => &mut self.name,
            AuthFocus::Email => &mut self.email,
            AuthFocus::Password => &mut self.password,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_empty() {
            return Err(FormError::EmptyField("Name"));
        }
        if self.email.is_empty() {
            return Err(FormError::EmptyField("Email"));
        }
        if self.password.is_empty() {
            return Err(FormError::EmptyField("Password"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HouseOption {
    #[default]
    Create,
    Join,
}

impl HouseOption {
    pub fn toggle(self) -> Self {
        match self {
            Self::Create => Self::Join,
            Self::Join => Self::Create,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub selected: HouseOption,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatePopup {
    Summary,
    InviteCode(InviteCode),
}

#[derive(Debug, Clone)]
pub struct CreateHouseForm {
    pub name: TextInput,
    pub kind: HouseType,
    pub members: MemberCount,
    pub focus: CreateFocus,
    pub popup: Option<CreatePopup>,
    pub copied: bool,
    pub error: Option<FormError>,
}

impl CreateHouseForm {
    pub fn new(members: MemberCount) -> Self {
        Self {
            name: TextInput::with_limit(MAX_HOUSE_NAME_LEN),
            kind: HouseType::default(),
            members,
            focus: CreateFocus::default(),
            popup: None,
            copied: false,
            error: None,
        }
    }

    /// Trimmed house name, rejected when blank
    pub fn validated_name(&self) -> Result<String, FormError> {
        let name = self.name.value().trim();
        if name.is_empty() {
            Err(FormError::EmptyHouseName)
        } else {
            Ok(name.to_string())
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JoinForm {
    pub code: TextInput,
    pub error: Option<String>,
    pub validating: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionButton {
    #[default]
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone)]
pub enum DashboardPopup {
    ChoreDetail(ChoreId),
    NewChore(NewChoreForm),
    LogoutConfirm,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub list_state: ListState,
    pub action_button: ActionButton,
    pub popup: Option<DashboardPopup>,
}

#[derive(Debug, Clone)]
pub struct NewChoreForm {
    pub title: TextInput,
    pub description: TextInput,
    pub assignee: usize,
    pub due: usize,
    pub focus: NewChoreFocus,
}

impl Default for NewChoreForm {
    fn default() -> Self {
        Self {
            title: TextInput::new(),
            description: TextInput::new(),
            assignee: 0,
            due: 0,
            focus: NewChoreFocus::default(),
        }
    }
}

impl NewChoreForm {
    pub fn due_label(&self) -> DueLabel {
        DueLabel::SELECTABLE
            .get(self.due)
            .copied()
            .unwrap_or_default()
    }

    pub fn can_submit(&self) -> bool {
        !self.title.value().trim().is_empty()
    }

    pub fn to_new_chore(&self, assignee: UserId) -> NewChore {
        NewChore {
            title: self.title.value().to_string(),
            description: self.description.value().to_string(),
            assignee,
            due: self.due_label(),
        }
    }
}
