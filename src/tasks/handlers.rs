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

use anyhow::Result;
use lofty::prelude::*;
use lofty::probe::Probe;
use walkdir::WalkDir;

use crate::{
    events::AppEvent,
    model::{
        AudioSource,
        analytics::{AnalyticsSnapshot, TimeRange},
        draft::display_name_for,
    },
    session,
    tasks::TaskContext,
};

/// Extensions offered by the source picker. Audio becomes draft tracks,
/// video becomes direct video uploads.
const MEDIA_EXTENSIONS: [&str; 10] = [
    "mp3", "wav", "flac", "ogg", "m4a", "aac", "mp4", "mov", "mkv", "webm",
];

/// Extensions offered when picking cover art.
const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

pub(super) fn restore_session(ctx: &TaskContext) -> Result<()> {
    let user = session::restore();
    ctx.event_tx.send(AppEvent::SessionRestored(user))?;

    Ok(())
}

pub(super) fn log_in(ctx: &TaskContext, email: &str, password: &str) -> Result<()> {
    let user = session::log_in(email, password)?;
    ctx.event_tx.send(AppEvent::SessionStarted(user))?;

    Ok(())
}

pub(super) fn register(ctx: &TaskContext, email: &str, password: &str, name: &str) -> Result<()> {
    let user = session::register(email, password, name)?;
    ctx.event_tx.send(AppEvent::SessionStarted(user))?;

    Ok(())
}

pub(super) fn log_out(ctx: &TaskContext) -> Result<()> {
    session::log_out()?;
    ctx.event_tx.send(AppEvent::SessionEnded)?;

    Ok(())
}

/// Walks the configured media directories and reports every file with a
/// recognized media extension, sorted by display name.
pub(super) fn list_audio_sources(ctx: &TaskContext) -> Result<()> {
    let sources = walk_for_extensions(ctx, &MEDIA_EXTENSIONS);
    ctx.event_tx.send(AppEvent::SourcesListed(sources))?;

    Ok(())
}

pub(super) fn list_cover_sources(ctx: &TaskContext) -> Result<()> {
    let sources = walk_for_extensions(ctx, &IMAGE_EXTENSIONS);
    ctx.event_tx.send(AppEvent::SourcesListed(sources))?;

    Ok(())
}

fn walk_for_extensions(ctx: &TaskContext, extensions: &[&str]) -> Vec<AudioSource> {
    let mut sources: Vec<AudioSource> = ctx
        .config
        .media_dirs
        .iter()
        .flat_map(|dir| WalkDir::new(dir).into_iter().filter_map(|e| e.ok()))
        .filter(|e| {
            e.path().extension().is_some_and(|ext| {
                extensions.iter().any(|known| ext.eq_ignore_ascii_case(known))
            })
        })
        .map(|e| AudioSource {
            name: display_name_for(e.path()),
            path: e.path().to_path_buf(),
        })
        .collect();

    sources.sort_by(|a, b| a.name.cmp(&b.name));
    sources
}

/// Reads the duration of a picked file. An unreadable or tagless file is not
/// an error; the draft track simply carries no duration.
pub(super) fn probe_audio_source(ctx: &TaskContext, source: AudioSource) -> Result<()> {
    let duration = Probe::open(&source.path)
        .and_then(|p| p.read())
        .map(|file| file.properties().duration().as_secs())
        .ok();

    ctx.event_tx.send(AppEvent::TrackProbed { source, duration })?;

    Ok(())
}

pub(super) fn generate_analytics(ctx: &TaskContext, range: TimeRange) -> Result<()> {
    let snapshot = AnalyticsSnapshot::generate(range);
    ctx.event_tx.send(AppEvent::AnalyticsReady(snapshot))?;

    Ok(())
}
