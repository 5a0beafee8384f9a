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

//! The released-music catalog shown on the "My Music" view.
//!
//! Catalog entries are mock data: the list starts from a seeded set of
//! releases, direct uploads enter as "processing", and submitted drafts
//! enter as "pending". Nothing is persisted.

use std::path::Path;

use crate::model::{Platform, ReleaseKind, draft::ReleaseDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReleaseStatus {
    Active,
    Pending,
    Processing,
}

impl ReleaseStatus {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ReleaseStatus::Active => "Active",
            ReleaseStatus::Pending => "Pending",
            ReleaseStatus::Processing => "Processing",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CatalogRelease {
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) kind: ReleaseKind,
    pub(crate) platforms: Vec<Platform>,
    pub(crate) status: ReleaseStatus,
    pub(crate) track_count: u32,
}

#[derive(Debug, Default)]
pub(crate) struct Catalog {
    releases: Vec<CatalogRelease>,
    next_id: u64,
}

impl Catalog {
    /// A catalog pre-populated with illustrative releases, matching what a
    /// returning artist would see.
    pub(crate) fn seeded(artist: &str) -> Self {
        let mut catalog = Self::default();

        let seed: [(&str, ReleaseKind, Vec<Platform>, ReleaseStatus); 4] = [
            (
                "Aesthetic Night",
                ReleaseKind::Single,
                vec![
                    Platform::Spotify,
                    Platform::AppleMusic,
                    Platform::YoutubeMusic,
                    Platform::AmazonMusic,
                    Platform::TikTok,
                ],
                ReleaseStatus::Active,
            ),
            (
                "Midnight Dreams",
                ReleaseKind::Album,
                vec![
                    Platform::Spotify,
                    Platform::AppleMusic,
                    Platform::YoutubeMusic,
                    Platform::Deezer,
                ],
                ReleaseStatus::Active,
            ),
            (
                "Summer Vibes",
                ReleaseKind::Ep,
                vec![Platform::Spotify, Platform::SoundCloud, Platform::Instagram],
                ReleaseStatus::Pending,
            ),
            (
                "Urban Beats",
                ReleaseKind::Single,
                vec![Platform::YoutubeMusic, Platform::TikTok, Platform::Instagram],
                ReleaseStatus::Active,
            ),
        ];

        for (title, kind, platforms, status) in seed {
            let id = catalog.take_id();
            catalog.releases.push(CatalogRelease {
                id,
                title: title.to_string(),
                artist: artist.to_string(),
                kind,
                platforms,
                status,
                track_count: 1,
            });
        }

        catalog
    }

    pub(crate) fn releases(&self) -> &[CatalogRelease] {
        &self.releases
    }

    pub(crate) fn len(&self) -> usize {
        self.releases.len()
    }

    pub(crate) fn active_count(&self) -> usize {
        self.releases
            .iter()
            .filter(|r| r.status == ReleaseStatus::Active)
            .count()
    }

    /// Adds a direct upload at the top of the catalog, in processing state
    /// with no deliveries yet.
    pub(crate) fn add_upload(&mut self, title: String, artist: String, kind: ReleaseKind) {
        let id = self.take_id();
        self.releases.insert(
            0,
            CatalogRelease {
                id,
                title,
                artist,
                kind,
                platforms: vec![],
                status: ReleaseStatus::Processing,
                track_count: 1,
            },
        );
    }

    /// Converts a submitted draft into a pending catalog entry. The draft is
    /// consumed; its track list ends here.
    pub(crate) fn submit_draft(&mut self, draft: ReleaseDraft, fallback_artist: &str) {
        let title = if draft.title.is_empty() {
            "Untitled Release".to_string()
        } else {
            draft.title
        };
        let artist = if draft.artist.is_empty() {
            fallback_artist.to_string()
        } else {
            draft.artist
        };

        let id = self.take_id();
        self.releases.insert(
            0,
            CatalogRelease {
                id,
                title,
                artist,
                kind: draft.kind.unwrap_or(ReleaseKind::Single),
                platforms: vec![],
                status: ReleaseStatus::Pending,
                track_count: draft.tracks.len() as u32,
            },
        );
    }

    fn take_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Distinguishes video uploads from audio ones by file extension.
pub(crate) fn upload_kind_for(path: &Path) -> ReleaseKind {
    let is_video = path
        .extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            matches!(ext.as_str(), "mp4" | "mov" | "mkv" | "webm")
        })
        .unwrap_or(false);

    if is_video { ReleaseKind::Video } else { ReleaseKind::Single }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn seeded_catalog_counts_active_releases() {
        let catalog = Catalog::seeded("Tester");
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.active_count(), 3);
    }

    #[test]
    fn upload_enters_at_the_top_as_processing() {
        let mut catalog = Catalog::seeded("Tester");
        catalog.add_upload("New Cut".into(), "Tester".into(), ReleaseKind::Single);

        let first = &catalog.releases()[0];
        assert_eq!(first.title, "New Cut");
        assert_eq!(first.status, ReleaseStatus::Processing);
        assert!(first.platforms.is_empty());
    }

    #[test]
    fn submitted_draft_becomes_a_pending_entry() {
        let mut catalog = Catalog::default();

        let mut draft = ReleaseDraft::new();
        draft.title = "First EP".into();
        draft.kind = Some(ReleaseKind::Ep);
        draft.tracks.append(PathBuf::from("a.wav"), "a".into(), None);
        draft.tracks.append(PathBuf::from("b.wav"), "b".into(), None);

        catalog.submit_draft(draft, "Fallback Artist");

        let entry = &catalog.releases()[0];
        assert_eq!(entry.title, "First EP");
        assert_eq!(entry.artist, "Fallback Artist");
        assert_eq!(entry.kind, ReleaseKind::Ep);
        assert_eq!(entry.status, ReleaseStatus::Pending);
        assert_eq!(entry.track_count, 2);
    }

    #[test]
    fn untitled_drafts_get_a_placeholder_title() {
        let mut catalog = Catalog::default();
        catalog.submit_draft(ReleaseDraft::new(), "Tester");
        assert_eq!(catalog.releases()[0].title, "Untitled Release");
    }

    #[test]
    fn upload_kind_follows_the_extension() {
        assert_eq!(upload_kind_for(&PathBuf::from("clip.mp4")), ReleaseKind::Video);
        assert_eq!(upload_kind_for(&PathBuf::from("song.mp3")), ReleaseKind::Single);
        assert_eq!(upload_kind_for(&PathBuf::from("no-ext")), ReleaseKind::Single);
    }
}
