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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload tasks such as
//! session-file access, filesystem walks, and media probing from the main UI
//! thread. It provides a dedicated worker loop that executes [`AppTask`]
//! requests and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are likely more
//! suited to by events.

mod handlers;
use handlers::*;

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{
    config::AppConfig,
    events::AppEvent,
    model::{AudioSource, analytics::TimeRange},
};

#[derive(Debug)]
pub(crate) enum AppTask {
    RestoreSession,
    LogIn { email: String, password: String },
    Register { email: String, password: String, name: String },
    LogOut,

    ListAudioSources,
    ListCoverSources,
    ProbeAudioSource(AudioSource),

    GenerateAnalytics(TimeRange),
}

/// Spawns a background thread to process application tasks.
///
/// The worker enters a blocking loop, listening for incoming [`AppTask`]s.
/// Handler failures are reported back as [`AppEvent::Error`] rather than
/// terminating the loop.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    command_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        while let Ok(task) = command_rx.recv() {
            let ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &ctx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    config: &'a AppConfig,
    event_tx: &'a Sender<AppEvent>,
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::RestoreSession => restore_session(ctx),
        AppTask::LogIn { email, password } => log_in(ctx, &email, &password),
        AppTask::Register { email, password, name } => register(ctx, &email, &password, &name),
        AppTask::LogOut => log_out(ctx),

        AppTask::ListAudioSources => list_audio_sources(ctx),
        AppTask::ListCoverSources => list_cover_sources(ctx),
        AppTask::ProbeAudioSource(source) => probe_audio_source(ctx, source),

        AppTask::GenerateAnalytics(range) => generate_analytics(ctx, range),
    }
}
