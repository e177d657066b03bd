// Event handling and main UI loop

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::Config;
use crate::household::{Screen, StoreError};
use crate::ui::{
    AuthScreen, CreateHouseScreen, Dashboard, HouseSelectionScreen, JoinHouseScreen,
    OnboardingScreen,
    state::{DashboardPopup, UiState},
};

mod auth;
mod dashboard;
mod house;
mod onboarding;
mod tasks;

pub use tasks::run_due_tasks;

// Event types sent from dedicated event thread to main loop
enum UiEvent {
    Input(Event), // Keyboard or other terminal events
    Tick,         // Periodic update for rendering and deferred tasks
}

/// Spawn a dedicated thread for event polling.
fn spawn_event_thread(tx: mpsc::Sender<UiEvent>) {
    let tick_rate = Duration::from_millis(16); // ~60 FPS

    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    if tx.send(UiEvent::Input(evt)).is_err() {
                        break; // Main thread dropped the receiver
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(UiEvent::Tick).is_err() {
                    break;
                }
                last_tick = Instant::now();
            }
        }
    });
}

pub fn run_ui(config: &Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = UiState::new(config);

    let (event_tx, event_rx) = mpsc::channel();
    spawn_event_thread(event_tx);
    info!("ui started");

    let result = run_app(&mut terminal, &mut state, event_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("ui stopped");

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut UiState,
    event_rx: Receiver<UiEvent>,
) -> io::Result<()> {
    loop {
        let mut pending_ticks: u64 = 0;
        let mut pending_inputs: Vec<Event> = Vec::new();

        // Block for one event, then drain the queue so tick bursts coalesce
        match event_rx.recv() {
            Ok(UiEvent::Tick) => pending_ticks += 1,
            Ok(UiEvent::Input(ev)) => pending_inputs.push(ev),
            Err(_) => return Ok(()),
        }
        while let Ok(evt) = event_rx.try_recv() {
            match evt {
                UiEvent::Tick => pending_ticks += 1,
                UiEvent::Input(ev) => pending_inputs.push(ev),
            }
        }

        for input in pending_inputs {
            if let Event::Key(key) = input {
                if key.kind == KeyEventKind::Press && handle_key(key, state) {
                    return Ok(());
                }
            }
        }

        if pending_ticks > 0 {
            run_due_tasks(state, Instant::now());
        }

        terminal.draw(|frame| render(frame, state))?;
    }
}

/// Draw the active screen and any popup on top of it
pub fn render(frame: &mut Frame, state: &mut UiState) {
    match state.app.screen() {
        Screen::Onboarding => OnboardingScreen::render(frame, &state.onboarding),
        Screen::Auth => AuthScreen::render(frame, &state.auth, state.status.as_deref()),
        Screen::HouseSelection => HouseSelectionScreen::render(frame, state),
        Screen::CreateHouse => CreateHouseScreen::render(frame, state),
        Screen::JoinHouse => JoinHouseScreen::render(frame, state),
        Screen::Dashboard => Dashboard::render(frame, state),
    }
}

fn should_quit(key: &KeyEvent, state: &UiState) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) && !is_editing(state)
}

/// True while keystrokes are going into a text field
fn is_editing(state: &UiState) -> bool {
    match state.app.screen() {
        Screen::Auth | Screen::JoinHouse => true,
        Screen::CreateHouse => state.create.popup.is_none() && state.create.focus.is_editing(),
        Screen::Dashboard => matches!(
            state.dashboard.popup,
            Some(DashboardPopup::NewChore(ref form)) if form.focus.is_editing()
        ),
        Screen::Onboarding | Screen::HouseSelection => false,
    }
}

/// Handle one key press. Returns true when the app should exit.
pub fn handle_key(key: KeyEvent, state: &mut UiState) -> bool {
    if should_quit(&key, state) {
        return true;
    }

    match state.app.screen() {
        Screen::Onboarding => onboarding::handle_onboarding_key(key, state),
        Screen::Auth => auth::handle_auth_key(key, state),
        Screen::HouseSelection => house::handle_selection_key(key, state),
        Screen::CreateHouse => house::handle_create_key(key, state),
        Screen::JoinHouse => house::handle_join_key(key, state),
        Screen::Dashboard => dashboard::handle_dashboard_key(key, state),
    }

    false
}

/// Report a store result in the status line. Returns true on success.
fn report(state: &mut UiState, result: Result<(), StoreError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            debug!(error = %e, "store rejected action");
            state.status = Some(e.to_string());
            false
        }
    }
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
}
