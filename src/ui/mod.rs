// Terminal UI using Ratatui

pub mod auth;
pub mod components;
pub mod constants;
pub mod dashboard;
pub mod events;
pub mod focus;
pub mod house;
pub mod onboarding;
pub mod popups;
pub mod state;
pub mod widgets;

pub use auth::AuthScreen;
pub use dashboard::Dashboard;
pub use events::{handle_key, render, run_due_tasks, run_ui};
pub use house::{CreateHouseScreen, HouseSelectionScreen, JoinHouseScreen};
pub use onboarding::OnboardingScreen;
pub use state::UiState;
