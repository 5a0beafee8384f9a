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

//! Popup list for choosing an upload source.
//!
//! The picker presents the media files the background worker discovered
//! under the configured media directories. It stands in for the web app's
//! file-input dialog: pick an entry to hand it to whichever view opened the
//! picker.

mod render;

use crossterm::event::{Event, KeyCode};
use ratatui::widgets::ListState;

use crate::model::AudioSource;

#[derive(Debug)]
pub(crate) enum PickerAction {
    Pick(AudioSource),
    Close,
}

pub(crate) struct SourcePicker {
    sources: Vec<AudioSource>,
    list_state: ListState,
}

impl SourcePicker {
    pub(crate) fn new(sources: Vec<AudioSource>) -> Self {
        let mut list_state = ListState::default();
        if !sources.is_empty() {
            list_state.select(Some(0));
        }
        Self { sources, list_state }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    fn goto_next(&mut self) {
        let len = self.sources.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.sources.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn selected(&self) -> Option<&AudioSource> {
        self.list_state.selected().and_then(|i| self.sources.get(i))
    }

    pub(crate) fn process_event(&mut self, event: &Event) -> Option<PickerAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') => self.list_state.select_first(),
            KeyCode::Char('G') => self.list_state.select(Some(self.sources.len().saturating_sub(1))),

            KeyCode::Enter => {
                return self.selected().cloned().map(PickerAction::Pick);
            }

            KeyCode::Esc | KeyCode::Char('q') => return Some(PickerAction::Close),

            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use std::path::PathBuf;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn picker_with(names: &[&str]) -> SourcePicker {
        SourcePicker::new(
            names
                .iter()
                .map(|n| AudioSource {
                    path: PathBuf::from(format!("{n}.wav")),
                    name: n.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn navigation_wraps_around_the_list() {
        let mut picker = picker_with(&["a", "b"]);

        picker.process_event(&key(KeyCode::Char('j')));
        picker.process_event(&key(KeyCode::Char('j')));
        match picker.process_event(&key(KeyCode::Enter)) {
            Some(PickerAction::Pick(source)) => assert_eq!(source.name, "a"),
            other => panic!("expected pick, got {other:?}"),
        }
    }

    #[test]
    fn enter_on_an_empty_picker_does_nothing() {
        let mut picker = SourcePicker::new(vec![]);
        assert!(picker.process_event(&key(KeyCode::Enter)).is_none());
    }

    #[test]
    fn escape_closes_the_picker() {
        let mut picker = picker_with(&["a"]);
        assert!(matches!(
            picker.process_event(&key(KeyCode::Esc)),
            Some(PickerAction::Close)
        ));
    }
}
