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

//! Release draft state and ordered track list management.
//!
//! This module provides the in-memory model for a release that is being
//! assembled but not yet submitted: the release metadata entered in the
//! editor form, and the ordered list of tracks attached to the draft.
//!
//! The track list maintains a dense, 1-based `position` on every track that
//! always matches the track's place in the list. Every mutation either
//! completes fully and restores that invariant, or fails without touching
//! the list at all.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::ReleaseKind;

/// Identifies a track within a draft for the lifetime of the draft.
///
/// Ids are handed out by [`TrackList::append`] and are never reused, even
/// after the track they identified has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TrackId(u64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "track-{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub(crate) enum DraftError {
    #[error("no track with id {0} in the draft")]
    NotFound(TrackId),

    #[error("track index {index} out of range (draft has {len} tracks)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A single track attached to a release draft.
#[derive(Debug, Clone)]
pub(crate) struct TrackDraft {
    pub(crate) id: TrackId,
    /// The audio file this track was added from. Not interpreted here, it is
    /// handed back verbatim when the draft is submitted.
    pub(crate) source: PathBuf,
    pub(crate) name: String,
    pub(crate) duration: Option<u64>,
    /// 1-based rank in the draft, always equal to list index + 1.
    pub(crate) position: u32,
}

/// The ordered collection of tracks in a release draft.
///
/// All operations are synchronous and run on the UI event loop, one user
/// action at a time, so the list carries no locking of its own.
#[derive(Debug, Default)]
pub(crate) struct TrackList {
    tracks: Vec<TrackDraft>,
    next_id: u64,
}

impl TrackList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.tracks.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// The tracks in position order. Read-only; repeated calls between
    /// mutations yield the same sequence.
    pub(crate) fn tracks(&self) -> &[TrackDraft] {
        &self.tracks
    }

    /// Appends a track to the end of the list.
    ///
    /// A fresh id is assigned and the new track takes position `len + 1`.
    /// Positions of existing tracks are untouched.
    pub(crate) fn append(
        &mut self,
        source: PathBuf,
        name: String,
        duration: Option<u64>,
    ) -> &TrackDraft {
        let id = TrackId(self.next_id);
        self.next_id += 1;

        let index = self.tracks.len();
        self.tracks.push(TrackDraft {
            id,
            source,
            name,
            duration,
            position: index as u32 + 1,
        });

        &self.tracks[index]
    }

    /// Removes the track with the given id and closes the gap in positions.
    pub(crate) fn remove(&mut self, id: TrackId) -> Result<(), DraftError> {
        let index = self.index_of(id)?;
        self.tracks.remove(index);
        self.reindex();
        Ok(())
    }

    /// Replaces the display name of the track with the given id. Order and
    /// positions are unaffected.
    pub(crate) fn rename(&mut self, id: TrackId, name: String) -> Result<(), DraftError> {
        let index = self.index_of(id)?;
        self.tracks[index].name = name;
        Ok(())
    }

    /// Relocates the track at `from` so that it ends up at `to`, shifting the
    /// tracks in between. Both are 0-based indices into the current list.
    ///
    /// `from == to` is an identity operation. On an out-of-range index the
    /// list is left unchanged.
    pub(crate) fn move_track(&mut self, from: usize, to: usize) -> Result<(), DraftError> {
        let len = self.tracks.len();
        for index in [from, to] {
            if index >= len {
                return Err(DraftError::IndexOutOfRange { index, len });
            }
        }

        if from == to {
            return Ok(());
        }

        let track = self.tracks.remove(from);
        self.tracks.insert(to, track);
        self.reindex();
        Ok(())
    }

    fn index_of(&self, id: TrackId) -> Result<usize, DraftError> {
        self.tracks
            .iter()
            .position(|t| t.id == id)
            .ok_or(DraftError::NotFound(id))
    }

    // Recompute every position from list order. Simpler to verify than
    // patching positions incrementally, and the lists are tiny.
    fn reindex(&mut self) {
        for (index, track) in self.tracks.iter_mut().enumerate() {
            track.position = index as u32 + 1;
        }
    }
}

/// An in-progress release: metadata plus the ordered track list.
///
/// Created empty when the editor opens a new release, discarded wholesale on
/// cancel or after submission. Nothing here is persisted.
#[derive(Debug, Default)]
pub(crate) struct ReleaseDraft {
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) release_date: String,
    pub(crate) genre: String,
    pub(crate) kind: Option<ReleaseKind>,
    pub(crate) cover_art: Option<PathBuf>,
    pub(crate) tracks: TrackList,
}

impl ReleaseDraft {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

/// Derives the default display name for a track from its source file:
/// the file name with the extension stripped.
pub(crate) fn display_name_for(source: &Path) -> String {
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(names: &[&str]) -> TrackList {
        let mut list = TrackList::new();
        for name in names {
            list.append(PathBuf::from(format!("{name}.wav")), name.to_string(), None);
        }
        list
    }

    fn names(list: &TrackList) -> Vec<String> {
        list.tracks().iter().map(|t| t.name.clone()).collect()
    }

    fn assert_positions_dense(list: &TrackList) {
        for (index, track) in list.tracks().iter().enumerate() {
            assert_eq!(track.position, index as u32 + 1);
        }
    }

    #[test]
    fn append_assigns_positions_in_order() {
        let mut list = TrackList::new();
        list.append(PathBuf::from("f1.wav"), "Track A".into(), None);
        list.append(PathBuf::from("f2.wav"), "Track B".into(), None);

        assert_eq!(names(&list), ["Track A", "Track B"]);
        assert_eq!(list.tracks()[0].position, 1);
        assert_eq!(list.tracks()[1].position, 2);
    }

    #[test]
    fn append_does_not_disturb_existing_tracks() {
        let mut list = list_with(&["a", "b"]);
        let before: Vec<_> = list.tracks().iter().map(|t| (t.id, t.position)).collect();

        let new_position = list.append(PathBuf::from("c.wav"), "c".into(), None).position;

        assert_eq!(new_position, 3);
        let after: Vec<_> = list.tracks().iter().map(|t| (t.id, t.position)).collect();
        assert_eq!(&after[..2], &before[..]);
    }

    #[test]
    fn ids_are_unique_and_never_reused() {
        let mut list = list_with(&["a", "b"]);
        let removed = list.tracks()[1].id;
        list.remove(removed).unwrap();

        let replacement = list.append(PathBuf::from("c.wav"), "c".into(), None).id;
        assert_ne!(replacement, removed);
        assert_ne!(replacement, list.tracks()[0].id);
    }

    #[test]
    fn remove_closes_the_position_gap() {
        let mut list = list_with(&["a", "b", "c"]);
        let middle = list.tracks()[1].id;

        list.remove(middle).unwrap();

        assert_eq!(names(&list), ["a", "c"]);
        assert_positions_dense(&list);
    }

    #[test]
    fn remove_unknown_id_fails_and_leaves_list_unchanged() {
        let mut list = list_with(&["a"]);
        let stale = list.tracks()[0].id;
        list.remove(stale).unwrap();

        assert_eq!(list.remove(stale), Err(DraftError::NotFound(stale)));
        assert!(list.is_empty());
    }

    #[test]
    fn rename_keeps_id_and_order() {
        let mut list = list_with(&["Track A"]);
        let id = list.tracks()[0].id;

        list.rename(id, "Renamed".into()).unwrap();

        assert_eq!(names(&list), ["Renamed"]);
        assert_eq!(list.tracks()[0].id, id);
        assert_eq!(list.tracks()[0].position, 1);
    }

    #[test]
    fn rename_unknown_id_fails() {
        let mut list = list_with(&["a"]);
        let stale = list.tracks()[0].id;
        list.remove(stale).unwrap();

        assert_eq!(
            list.rename(stale, "x".into()),
            Err(DraftError::NotFound(stale))
        );
    }

    #[test]
    fn move_track_relocates_a_single_track() {
        let mut list = list_with(&["Track A", "Track B"]);

        list.move_track(0, 1).unwrap();

        assert_eq!(names(&list), ["Track B", "Track A"]);
        assert_positions_dense(&list);
    }

    #[test]
    fn move_track_preserves_relative_order_of_others() {
        let mut list = list_with(&["a", "b", "c", "d"]);

        list.move_track(3, 1).unwrap();

        assert_eq!(names(&list), ["a", "d", "b", "c"]);
        assert_positions_dense(&list);
    }

    #[test]
    fn move_track_to_same_index_is_identity() {
        let mut list = list_with(&["a", "b", "c"]);
        let before: Vec<_> = list.tracks().iter().map(|t| t.id).collect();

        list.move_track(1, 1).unwrap();

        let after: Vec<_> = list.tracks().iter().map(|t| t.id).collect();
        assert_eq!(after, before);
        assert_positions_dense(&list);
    }

    #[test]
    fn move_track_round_trip_restores_order() {
        let mut list = list_with(&["a", "b", "c", "d"]);
        let before: Vec<_> = list.tracks().iter().map(|t| t.id).collect();

        list.move_track(0, 2).unwrap();
        list.move_track(2, 0).unwrap();

        let after: Vec<_> = list.tracks().iter().map(|t| t.id).collect();
        assert_eq!(after, before);
        assert_positions_dense(&list);
    }

    #[test]
    fn move_track_rejects_out_of_range_indices() {
        let mut list = list_with(&["a", "b"]);
        let before = names(&list);

        assert_eq!(
            list.move_track(5, 0),
            Err(DraftError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(
            list.move_track(0, 2),
            Err(DraftError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(names(&list), before);
        assert_positions_dense(&list);
    }

    #[test]
    fn positions_stay_dense_across_mixed_operations() {
        let mut list = list_with(&["a", "b", "c", "d", "e"]);

        list.move_track(4, 0).unwrap();
        let id = list.tracks()[2].id;
        list.remove(id).unwrap();
        list.append(PathBuf::from("f.wav"), "f".into(), None);
        list.move_track(1, 3).unwrap();

        assert_eq!(list.len(), 5);
        assert_positions_dense(&list);
    }

    #[test]
    fn tracks_view_is_stable_between_mutations() {
        let list = list_with(&["a", "b"]);
        let first: Vec<_> = list.tracks().iter().map(|t| (t.id, t.position)).collect();
        let second: Vec<_> = list.tracks().iter().map(|t| (t.id, t.position)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn display_name_strips_the_extension() {
        assert_eq!(display_name_for(Path::new("/music/f1.wav")), "f1");
        assert_eq!(display_name_for(Path::new("no-extension")), "no-extension");
    }
}
