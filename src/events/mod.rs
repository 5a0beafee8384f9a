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

//! Application logic, event handling, and command dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. It organizes how various inputs are translated into internal
//! state changes.
//!
//! Keyboard input is routed by priority: the commander first, then a modal
//! source picker, then the view that has focus, and finally the global
//! navigation shortcuts. Results from the background worker arrive as
//! [`AppEvent`]s and are applied by the handlers in [`handlers`].

mod handlers;
use handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, MainView, PickerTarget,
    components::{AuthFormAction, EditorAction, PickerAction},
    model::{
        AudioSource, UserAccount,
        analytics::AnalyticsSnapshot,
        catalog::upload_kind_for,
    },
    render::draw,
    tasks::AppTask,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SessionRestored(Option<UserAccount>),
    SessionStarted(UserAccount),
    SessionEnded,

    SetMainView(MainView),

    SourcesListed(Vec<AudioSource>),
    TrackProbed {
        source: AudioSource,
        duration: Option<u64>,
    },

    AnalyticsReady(AnalyticsSnapshot),

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::SessionRestored(user) => handle_session_restored(app, user),
            AppEvent::SessionStarted(user) => handle_session_started(app, user),
            AppEvent::SessionEnded => handle_session_ended(app),
            AppEvent::SetMainView(view) => handle_set_main_view(app, view),
            AppEvent::SourcesListed(sources) => handle_sources_listed(app, sources),
            AppEvent::TrackProbed { source, duration } => {
                handle_track_probed(app, source, duration)
            }
            AppEvent::AnalyticsReady(snapshot) => handle_analytics_ready(app, snapshot),
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::Tick | _ => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

/// Maps keyboard input to application actions and worker tasks.
///
/// This function acts as the primary input router for the TUI, translating
/// low-level [`KeyEvent`]s into high-level domain logic. It handles:
///
/// * **Application Control**: Life-cycle events like exiting the program.
/// * **The Commander**: `:` command-line input, when no other input owns
///   the keyboard.
/// * **Modal Input**: The source picker swallows everything while open.
/// * **View Input**: Auth forms and the release editor, per focused view.
/// * **Navigation**: The global view shortcuts.
///
/// # Errors
///
/// Returns an error if a task fails to send to the background worker.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    if app.commander.active() || (!app.is_typing() && app.picker.is_none()) {
        let handled = app
            .commander
            .handle_event(event.clone(), &app.task_tx, &app.event_tx);
        if handled {
            return Ok(());
        }
    }

    if let Some(picker) = app.picker.as_mut() {
        match picker.process_event(&event) {
            Some(PickerAction::Pick(source)) => {
                app.picker = None;
                handle_source_picked(app, source)?;
            }
            Some(PickerAction::Close) => app.picker = None,
            None => {}
        }
        return Ok(());
    }

    match app.main_view {
        MainView::Welcome => process_welcome_key_event(app, key)?,

        MainView::Login => match app.login_form.process_event(&event) {
            Some(AuthFormAction::Submit(submit)) => {
                app.task_tx.send(AppTask::LogIn {
                    email: submit.email,
                    password: submit.password,
                })?;
            }
            Some(AuthFormAction::Cancel) => {
                app.login_form.clear();
                app.main_view = MainView::Welcome;
            }
            None => {}
        },

        MainView::Register => match app.register_form.process_event(&event) {
            Some(AuthFormAction::Submit(submit)) => {
                app.task_tx.send(AppTask::Register {
                    email: submit.email,
                    password: submit.password,
                    name: submit.name,
                })?;
            }
            Some(AuthFormAction::Cancel) => {
                app.register_form.clear();
                app.main_view = MainView::Welcome;
            }
            None => {}
        },

        MainView::Releases if app.editor.is_open() => {
            match app.editor.process_event(&event) {
                Some(EditorAction::OpenPicker) => {
                    app.picker_target = PickerTarget::AddTrack;
                    app.task_tx.send(AppTask::ListAudioSources)?;
                }
                Some(EditorAction::OpenCoverPicker) => {
                    app.picker_target = PickerTarget::CoverArt;
                    app.task_tx.send(AppTask::ListCoverSources)?;
                }
                Some(EditorAction::Submit) => {
                    if let Some(draft) = app.editor.close() {
                        let artist = app.artist_name();
                        app.catalog.submit_draft(draft, &artist);
                        app.status = Some("Release submitted for distribution".to_string());
                        app.main_view = MainView::MyMusic;
                    }
                }
                Some(EditorAction::Cancel) => {
                    app.editor.close();
                    app.status = Some("Draft discarded".to_string());
                }
                Some(EditorAction::Failed(e)) => {
                    app.event_tx.send(AppEvent::Error(e.to_string()))?;
                }
                None => {}
            }
        }

        _ => process_global_key_event(app, key)?,
    }

    Ok(())
}

fn process_welcome_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('l') | KeyCode::Enter => app.main_view = MainView::Login,
        KeyCode::Char('r') => app.main_view = MainView::Register,
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
        _ => {}
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        KeyCode::Char('1') => app.event_tx.send(AppEvent::SetMainView(MainView::Dashboard))?,
        KeyCode::Char('2') => app.event_tx.send(AppEvent::SetMainView(MainView::MyMusic))?,
        KeyCode::Char('3') => app.event_tx.send(AppEvent::SetMainView(MainView::Releases))?,
        KeyCode::Char('4') => app.event_tx.send(AppEvent::SetMainView(MainView::Analytics))?,
        KeyCode::Char('5') => app.event_tx.send(AppEvent::SetMainView(MainView::Finance))?,
        KeyCode::Char('6') => app.event_tx.send(AppEvent::SetMainView(MainView::Profile))?,

        // Regenerate the analytics for the next time range.
        KeyCode::Char('t') if app.main_view == MainView::Analytics => {
            app.task_tx
                .send(AppTask::GenerateAnalytics(app.analytics.range.next()))?;
        }

        // Direct upload into the catalog.
        KeyCode::Char('u') if app.main_view == MainView::MyMusic => {
            app.picker_target = PickerTarget::Upload;
            app.task_tx.send(AppTask::ListAudioSources)?;
        }

        // Start assembling a new release draft.
        KeyCode::Char('n') if app.main_view == MainView::Releases => {
            let artist = app.artist_name();
            app.editor.open_new(&artist);
        }

        _ => {}
    }

    Ok(())
}

/// Routes a picked source to whatever the picker was opened for.
fn handle_source_picked(app: &mut App, source: AudioSource) -> Result<()> {
    match app.picker_target {
        PickerTarget::AddTrack => {
            app.task_tx.send(AppTask::ProbeAudioSource(source))?;
        }
        PickerTarget::CoverArt => {
            if app.editor.set_cover_art(source.path) {
                app.status = Some(format!("Cover art set to \"{}\"", source.name));
            }
        }
        PickerTarget::Upload => {
            let kind = upload_kind_for(&source.path);
            let artist = app.artist_name();
            app.catalog.add_upload(source.name.clone(), artist, kind);
            app.status = Some(format!("Uploading \"{}\"", source.name));
        }
    }

    Ok(())
}
