// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # SoundSphere TUI.
//!
//! A terminal-based music distribution dashboard for independent artists:
//! sign in, browse the release catalog, assemble and reorder release drafts,
//! and review analytics, royalties, and the artist profile.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Background Worker** handles session persistence, filesystem walks,
//!   and media probing via asynchronous task processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the background worker is handled via `std::sync::mpsc`
//! channels.

mod commander;
mod components;
mod config;
mod events;
mod model;
mod render;
mod session;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    commander::Commander,
    components::{AuthForm, ReleaseEditor, SourcePicker},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{
        UserAccount,
        analytics::{AnalyticsSnapshot, TimeRange},
        catalog::Catalog,
        finance::FinanceReport,
        profile::ArtistProfile,
    },
    tasks::AppTask,
    theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainView {
    Welcome,
    Login,
    Register,
    Dashboard,
    MyMusic,
    Releases,
    Analytics,
    Finance,
    Profile,
}

impl MainView {
    /// Views that show account data and so require a signed-in user.
    fn requires_auth(self) -> bool {
        !matches!(self, MainView::Welcome | MainView::Login | MainView::Register)
    }
}

/// What the source picker was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickerTarget {
    /// Add the picked file as a draft track in the release editor.
    AddTrack,
    /// Attach the picked image as the draft's cover art.
    CoverArt,
    /// Upload the picked file directly into the catalog.
    Upload,
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub user: Option<UserAccount>,
    pub catalog: Catalog,
    pub analytics: AnalyticsSnapshot,
    pub finance: FinanceReport,
    pub profile: ArtistProfile,

    pub login_form: AuthForm,
    pub register_form: AuthForm,
    pub editor: ReleaseEditor,
    pub picker: Option<SourcePicker>,
    pub picker_target: PickerTarget,

    pub commander: Commander,
    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            main_view: MainView::Welcome,
            event_tx,
            event_rx,
            task_tx,
            user: None,
            catalog: Catalog::default(),
            analytics: AnalyticsSnapshot::generate(TimeRange::SevenDays),
            finance: FinanceReport::sample(),
            profile: ArtistProfile::sample(),
            login_form: AuthForm::sign_in(),
            register_form: AuthForm::register(),
            editor: ReleaseEditor::new(),
            picker: None,
            picker_target: PickerTarget::AddTrack,
            commander: Commander::new(),
            status: None,
        }
    }

    /// The artist credit applied where a form leaves it blank: the signed-in
    /// user's name, falling back to the configured default.
    pub fn artist_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| self.config.artist_name.clone())
    }

    /// Whether keystrokes currently belong to a text input rather than to
    /// navigation shortcuts.
    pub fn is_typing(&self) -> bool {
        matches!(self.main_view, MainView::Login | MainView::Register)
            || self.editor.is_typing()
            || self.commander.active()
    }
}

/// The entry point of the application.
///
/// Sets up the communication channels, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&theme::Theme::to_hex(app.theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process asynchronous [`AppTask`]s.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    // Spawn a background worker to process application tasks asynchronously.
    let task_event_tx = app.event_tx.clone();
    tasks::spawn_task_worker(&app.config, task_rx, task_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                tx_keys.send(AppEvent::Key(key)).ok();
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Pick up where the last run left off: a stored session skips the
    // welcome flow entirely.
    app.task_tx.send(AppTask::RestoreSession)?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
