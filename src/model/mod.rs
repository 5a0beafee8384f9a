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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the dashboard: user accounts,
//! delivery platforms, catalog releases, and the release draft state shared
//! by the views and the background worker.

pub(crate) mod analytics;
pub(crate) mod catalog;
pub(crate) mod draft;
pub(crate) mod finance;
pub(crate) mod profile;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The signed-in artist account.
///
/// Synthesized locally on login or registration; there is no backend account
/// behind it. The avatar seed is derived deterministically from the email so
/// the same address always yields the same generated avatar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct UserAccount {
    pub(crate) id: String,
    pub(crate) email: String,
    pub(crate) name: String,
    pub(crate) avatar_seed: u64,
}

/// Stores and social services a release can be delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Platform {
    Spotify,
    AppleMusic,
    YoutubeMusic,
    AmazonMusic,
    Deezer,
    TikTok,
    Instagram,
    SoundCloud,
}

impl Platform {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Platform::Spotify => "Spotify",
            Platform::AppleMusic => "Apple Music",
            Platform::YoutubeMusic => "YouTube Music",
            Platform::AmazonMusic => "Amazon Music",
            Platform::Deezer => "Deezer",
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::SoundCloud => "SoundCloud",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReleaseKind {
    Single,
    Ep,
    Album,
    Video,
}

impl ReleaseKind {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ReleaseKind::Single => "Single",
            ReleaseKind::Ep => "EP",
            ReleaseKind::Album => "Album",
            ReleaseKind::Video => "Video",
        }
    }

    /// The next draftable kind; the release editor cycles through these.
    /// Videos are not assembled in the editor, they only enter the catalog
    /// via direct upload.
    pub(crate) fn next_draftable(self) -> Self {
        match self {
            ReleaseKind::Single => ReleaseKind::Ep,
            ReleaseKind::Ep => ReleaseKind::Album,
            ReleaseKind::Album | ReleaseKind::Video => ReleaseKind::Single,
        }
    }
}

/// A media file discovered under the configured media directories, offered
/// by the source picker as upload material.
#[derive(Debug, Clone)]
pub(crate) struct AudioSource {
    pub(crate) path: PathBuf,
    pub(crate) name: String,
}
