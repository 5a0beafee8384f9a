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

//! Release editor state management.
//!
//! The editor owns the [`ReleaseDraft`] being assembled: the metadata form
//! and the ordered track list. Track rows are selected with a table cursor;
//! reordering, removal, and renaming all act on the current selection and go
//! through the draft's track-list operations so positions stay dense.
//!
//! The editor is either browsing (keys act on the track table) or typing
//! (a form field or a track rename has the input line). While typing, raw
//! characters go to the input and table keys are suspended.

mod event;
mod render;

use ratatui::widgets::TableState;
use tui_input::Input;

use crate::model::{
    AudioSource, ReleaseKind,
    draft::{DraftError, ReleaseDraft, TrackId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Title,
    Artist,
    ReleaseDate,
    Genre,
}

impl FormField {
    pub(crate) fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Artist => "Artist",
            FormField::ReleaseDate => "Release date",
            FormField::Genre => "Genre",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            FormField::Title => Some(FormField::Artist),
            FormField::Artist => Some(FormField::ReleaseDate),
            FormField::ReleaseDate => Some(FormField::Genre),
            FormField::Genre => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditorMode {
    Browse,
    EditField(FormField),
    RenameTrack(TrackId),
}

/// Outcomes the event loop must act on.
#[derive(Debug)]
pub(crate) enum EditorAction {
    /// Open the source picker to add a track.
    OpenPicker,
    /// Open the picker for a cover-art image.
    OpenCoverPicker,
    /// Hand the finished draft to the catalog.
    Submit,
    /// Discard the draft.
    Cancel,
    /// A track-list operation was refused.
    Failed(DraftError),
}

pub(crate) struct ReleaseEditor {
    draft: Option<ReleaseDraft>,
    pub(crate) table_state: TableState,
    pub(crate) input: Input,
    pub(crate) mode: EditorMode,
}

impl ReleaseEditor {
    pub(crate) fn new() -> Self {
        Self {
            draft: None,
            table_state: TableState::new(),
            input: Input::default(),
            mode: EditorMode::Browse,
        }
    }

    /// Starts a fresh draft credited to the given artist.
    pub(crate) fn open_new(&mut self, artist: &str) {
        let mut draft = ReleaseDraft::new();
        draft.artist = artist.to_string();
        draft.kind = Some(ReleaseKind::Single);

        self.draft = Some(draft);
        self.table_state = TableState::new();
        self.input.reset();
        self.mode = EditorMode::Browse;
    }

    /// Closes the editor and yields the draft, if one was open.
    pub(crate) fn close(&mut self) -> Option<ReleaseDraft> {
        self.mode = EditorMode::Browse;
        self.input.reset();
        self.draft.take()
    }

    pub(crate) fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub(crate) fn is_typing(&self) -> bool {
        !matches!(self.mode, EditorMode::Browse)
    }

    pub(crate) fn draft(&self) -> Option<&ReleaseDraft> {
        self.draft.as_ref()
    }

    /// Appends a probed source as the last track of the draft. Returns false
    /// when no draft is open to receive it.
    pub(crate) fn append_track(&mut self, source: AudioSource, duration: Option<u64>) -> bool {
        let Some(draft) = self.draft.as_mut() else {
            return false;
        };

        draft.tracks.append(source.path, source.name, duration);

        if self.table_state.selected().is_none() {
            self.table_state.select(Some(0));
        }
        true
    }

    /// Attaches a picked image as the draft's cover art. Returns false when
    /// no draft is open.
    pub(crate) fn set_cover_art(&mut self, path: std::path::PathBuf) -> bool {
        let Some(draft) = self.draft.as_mut() else {
            return false;
        };
        draft.cover_art = Some(path);
        true
    }

    fn track_count(&self) -> usize {
        self.draft.as_ref().map_or(0, |d| d.tracks.len())
    }

    fn selected_track_id(&self) -> Option<TrackId> {
        let draft = self.draft.as_ref()?;
        let index = self.table_state.selected()?;
        draft.tracks.tracks().get(index).map(|t| t.id)
    }

    fn goto_next(&mut self) {
        let len = self.track_count();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.track_count();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    /// Moves the selected track one slot toward the top. The cursor follows
    /// the track. At the top edge this is a no-op.
    fn move_selected_up(&mut self) -> Result<(), DraftError> {
        let Some(index) = self.table_state.selected() else {
            return Ok(());
        };
        if index == 0 || index >= self.track_count() {
            return Ok(());
        }

        let Some(draft) = self.draft.as_mut() else {
            return Ok(());
        };
        draft.tracks.move_track(index, index - 1)?;
        self.table_state.select(Some(index - 1));
        Ok(())
    }

    /// Moves the selected track one slot toward the bottom, cursor following.
    fn move_selected_down(&mut self) -> Result<(), DraftError> {
        let len = self.track_count();
        let Some(index) = self.table_state.selected() else {
            return Ok(());
        };
        if len == 0 || index + 1 >= len {
            return Ok(());
        }

        let Some(draft) = self.draft.as_mut() else {
            return Ok(());
        };
        draft.tracks.move_track(index, index + 1)?;
        self.table_state.select(Some(index + 1));
        Ok(())
    }

    /// Removes the selected track and keeps the cursor on a valid row.
    fn remove_selected(&mut self) -> Result<(), DraftError> {
        let Some(id) = self.selected_track_id() else {
            return Ok(());
        };

        let Some(draft) = self.draft.as_mut() else {
            return Ok(());
        };
        draft.tracks.remove(id)?;

        let len = draft.tracks.len();
        if len == 0 {
            self.table_state.select(None);
        } else if let Some(index) = self.table_state.selected() {
            self.table_state.select(Some(index.min(len - 1)));
        }
        Ok(())
    }

    /// Puts the input line into rename mode, preloaded with the current name.
    fn begin_rename(&mut self) {
        let Some(id) = self.selected_track_id() else {
            return;
        };
        let Some(draft) = self.draft.as_ref() else {
            return;
        };
        let Some(track) = draft.tracks.tracks().iter().find(|t| t.id == id) else {
            return;
        };

        self.input = Input::new(track.name.clone());
        self.mode = EditorMode::RenameTrack(id);
    }

    /// Puts the input line into form-edit mode on the given field, preloaded
    /// with the field's current value.
    fn begin_edit(&mut self, field: FormField) {
        let Some(draft) = self.draft.as_ref() else {
            return;
        };

        let value = match field {
            FormField::Title => &draft.title,
            FormField::Artist => &draft.artist,
            FormField::ReleaseDate => &draft.release_date,
            FormField::Genre => &draft.genre,
        };

        self.input = Input::new(value.clone());
        self.mode = EditorMode::EditField(field);
    }

    /// Commits the typed value to the field being edited and advances to the
    /// next field, returning to browse mode after the last one.
    fn commit_field(&mut self, field: FormField) {
        let value = self.input.value().to_string();

        if let Some(draft) = self.draft.as_mut() {
            match field {
                FormField::Title => draft.title = value,
                FormField::Artist => draft.artist = value,
                FormField::ReleaseDate => draft.release_date = value,
                FormField::Genre => draft.genre = value,
            }
        }

        match field.next() {
            Some(next) => self.begin_edit(next),
            None => self.end_typing(),
        }
    }

    fn commit_rename(&mut self, id: TrackId) -> Result<(), DraftError> {
        let name = self.input.value().to_string();
        self.end_typing();

        if name.is_empty() {
            return Ok(());
        }

        let draft = self.draft.as_mut().ok_or(DraftError::NotFound(id))?;
        draft.tracks.rename(id, name)
    }

    fn end_typing(&mut self) {
        self.input.reset();
        self.mode = EditorMode::Browse;
    }

    fn cycle_kind(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            draft.kind = Some(
                draft
                    .kind
                    .map_or(ReleaseKind::Single, ReleaseKind::next_draftable),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use std::path::PathBuf;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn shifted(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT))
    }

    fn source(name: &str) -> AudioSource {
        AudioSource {
            path: PathBuf::from(format!("/music/{name}.wav")),
            name: name.to_string(),
        }
    }

    fn editor_with(names: &[&str]) -> ReleaseEditor {
        let mut editor = ReleaseEditor::new();
        editor.open_new("KEMEUS");
        for name in names {
            editor.append_track(source(name), Some(180));
        }
        editor
    }

    fn track_names(editor: &ReleaseEditor) -> Vec<String> {
        editor
            .draft()
            .map(|d| d.tracks.tracks().iter().map(|t| t.name.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn append_track_ignored_when_no_draft_is_open() {
        let mut editor = ReleaseEditor::new();
        assert!(!editor.append_track(source("a"), None));
    }

    #[test]
    fn moving_a_track_keeps_the_cursor_on_it() {
        let mut editor = editor_with(&["a", "b", "c"]);
        editor.table_state.select(Some(2));

        editor.process_event(&shifted('K'));

        assert_eq!(track_names(&editor), ["a", "c", "b"]);
        assert_eq!(editor.table_state.selected(), Some(1));
    }

    #[test]
    fn moving_past_the_edges_is_a_no_op() {
        let mut editor = editor_with(&["a", "b"]);
        editor.table_state.select(Some(0));

        editor.process_event(&shifted('K'));
        assert_eq!(track_names(&editor), ["a", "b"]);

        editor.table_state.select(Some(1));
        editor.process_event(&shifted('J'));
        assert_eq!(track_names(&editor), ["a", "b"]);
        assert_eq!(editor.table_state.selected(), Some(1));
    }

    #[test]
    fn removing_the_last_row_clamps_the_cursor() {
        let mut editor = editor_with(&["a", "b", "c"]);
        editor.table_state.select(Some(2));

        editor.process_event(&key(KeyCode::Char('d')));

        assert_eq!(track_names(&editor), ["a", "b"]);
        assert_eq!(editor.table_state.selected(), Some(1));
    }

    #[test]
    fn rename_flow_commits_the_typed_name() {
        let mut editor = editor_with(&["a"]);
        editor.table_state.select(Some(0));

        editor.process_event(&key(KeyCode::Char('r')));
        assert!(editor.is_typing());
        for c in " side".chars() {
            editor.process_event(&key(KeyCode::Char(c)));
        }
        editor.process_event(&key(KeyCode::Enter));

        assert!(!editor.is_typing());
        assert_eq!(track_names(&editor), ["a side"]);
    }

    #[test]
    fn field_editing_walks_the_form_and_returns_to_browse() {
        let mut editor = editor_with(&[]);

        editor.process_event(&key(KeyCode::Char('e')));
        assert_eq!(editor.mode, EditorMode::EditField(FormField::Title));
        for c in "Neon".chars() {
            editor.process_event(&key(KeyCode::Char(c)));
        }
        editor.process_event(&key(KeyCode::Enter));
        assert_eq!(editor.mode, EditorMode::EditField(FormField::Artist));

        editor.process_event(&key(KeyCode::Enter));
        editor.process_event(&key(KeyCode::Enter));
        editor.process_event(&key(KeyCode::Enter));
        assert_eq!(editor.mode, EditorMode::Browse);

        let draft = editor.draft().unwrap();
        assert_eq!(draft.title, "Neon");
        assert_eq!(draft.artist, "KEMEUS");
    }

    #[test]
    fn escape_while_typing_discards_the_edit() {
        let mut editor = editor_with(&["a"]);
        editor.table_state.select(Some(0));

        editor.process_event(&key(KeyCode::Char('r')));
        for c in "zzz".chars() {
            editor.process_event(&key(KeyCode::Char(c)));
        }
        let action = editor.process_event(&key(KeyCode::Esc));

        assert!(action.is_none());
        assert_eq!(track_names(&editor), ["a"]);
        assert!(!editor.is_typing());
    }

    #[test]
    fn escape_while_browsing_cancels_the_draft() {
        let mut editor = editor_with(&["a"]);
        assert!(matches!(
            editor.process_event(&key(KeyCode::Esc)),
            Some(EditorAction::Cancel)
        ));
    }

    #[test]
    fn cover_art_attaches_only_to_an_open_draft() {
        let mut editor = ReleaseEditor::new();
        assert!(!editor.set_cover_art(PathBuf::from("art.png")));

        editor.open_new("KEMEUS");
        assert!(editor.set_cover_art(PathBuf::from("art.png")));
        assert_eq!(
            editor.draft().unwrap().cover_art,
            Some(PathBuf::from("art.png"))
        );
    }

    #[test]
    fn cycling_the_kind_walks_the_draftable_kinds() {
        let mut editor = editor_with(&[]);
        assert_eq!(editor.draft().unwrap().kind, Some(ReleaseKind::Single));

        editor.process_event(&key(KeyCode::Char('c')));
        assert_eq!(editor.draft().unwrap().kind, Some(ReleaseKind::Ep));
        editor.process_event(&key(KeyCode::Char('c')));
        assert_eq!(editor.draft().unwrap().kind, Some(ReleaseKind::Album));
        editor.process_event(&key(KeyCode::Char('c')));
        assert_eq!(editor.draft().unwrap().kind, Some(ReleaseKind::Single));
    }
}
