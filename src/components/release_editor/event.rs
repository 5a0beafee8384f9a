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

//! Input handling and event processing for the release editor.
//!
//! While the editor is typing (form field or rename), raw characters go to
//! the input line and only Enter/Esc have meaning. In browse mode keys map
//! to table navigation, track operations, and editor actions.

use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::components::release_editor::{EditorAction, EditorMode, FormField, ReleaseEditor};

impl ReleaseEditor {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<EditorAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match self.mode {
            EditorMode::EditField(field) => {
                match key_event.code {
                    KeyCode::Enter => self.commit_field(field),
                    KeyCode::Esc => self.end_typing(),
                    _ => {
                        self.input.handle_event(event);
                    }
                }
                return None;
            }

            EditorMode::RenameTrack(id) => {
                match key_event.code {
                    KeyCode::Enter => {
                        if let Err(e) = self.commit_rename(id) {
                            return Some(EditorAction::Failed(e));
                        }
                    }
                    KeyCode::Esc => self.end_typing(),
                    _ => {
                        self.input.handle_event(event);
                    }
                }
                return None;
            }

            EditorMode::Browse => {}
        }

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => self.goto_next(),
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => self.goto_previous(),

            (KeyCode::Char('J'), _) => {
                if let Err(e) = self.move_selected_down() {
                    return Some(EditorAction::Failed(e));
                }
            }
            (KeyCode::Char('K'), _) => {
                if let Err(e) = self.move_selected_up() {
                    return Some(EditorAction::Failed(e));
                }
            }

            (KeyCode::Char('d'), _) => {
                if let Err(e) = self.remove_selected() {
                    return Some(EditorAction::Failed(e));
                }
            }

            (KeyCode::Char('r'), _) => self.begin_rename(),
            (KeyCode::Char('e'), _) => self.begin_edit(FormField::Title),
            (KeyCode::Char('c'), _) => self.cycle_kind(),

            (KeyCode::Char('a'), _) => return Some(EditorAction::OpenPicker),
            (KeyCode::Char('i'), _) => return Some(EditorAction::OpenCoverPicker),
            (KeyCode::Char('S'), _) => return Some(EditorAction::Submit),
            (KeyCode::Esc, _) => return Some(EditorAction::Cancel),

            _ => {}
        }

        None
    }
}
