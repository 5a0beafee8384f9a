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

//! Handlers that apply worker results and view changes to the application
//! state.

use crate::{
    App, MainView,
    components::SourcePicker,
    model::{AudioSource, UserAccount, analytics::AnalyticsSnapshot, catalog::Catalog},
};

pub(super) fn handle_session_restored(app: &mut App, user: Option<UserAccount>) {
    match user {
        Some(user) => start_session(app, user),
        None => app.main_view = MainView::Welcome,
    }
}

pub(super) fn handle_session_started(app: &mut App, user: UserAccount) {
    app.login_form.clear();
    app.register_form.clear();
    app.status = Some(format!("Welcome back, {}", user.name));
    start_session(app, user);
}

fn start_session(app: &mut App, user: UserAccount) {
    app.catalog = Catalog::seeded(&user.name);
    app.user = Some(user);
    app.main_view = MainView::Dashboard;
}

pub(super) fn handle_session_ended(app: &mut App) {
    app.user = None;
    app.catalog = Catalog::default();
    app.editor.close();
    app.picker = None;
    app.main_view = MainView::Welcome;
    app.status = Some("Signed out".to_string());
}

pub(super) fn handle_set_main_view(app: &mut App, view: MainView) {
    if view.requires_auth() && app.user.is_none() {
        app.status = Some("Sign in first".to_string());
        return;
    }

    app.main_view = view;
}

pub(super) fn handle_sources_listed(app: &mut App, sources: Vec<AudioSource>) {
    app.picker = Some(SourcePicker::new(sources));
}

/// A picked file has been probed; attach it to the open draft. If the editor
/// was closed in the meantime the track has nowhere to go and is dropped.
pub(super) fn handle_track_probed(app: &mut App, source: AudioSource, duration: Option<u64>) {
    let name = source.name.clone();

    if app.editor.append_track(source, duration) {
        app.status = Some(format!("Added \"{name}\" to the draft"));
    } else {
        app.status = Some(format!("No open draft for \"{name}\""));
    }
}

pub(super) fn handle_analytics_ready(app: &mut App, snapshot: AnalyticsSnapshot) {
    app.analytics = snapshot;
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.status = Some(message);
}
