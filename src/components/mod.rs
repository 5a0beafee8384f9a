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

//! Reusable interactive view components.
//!
//! Each component owns its widget state, maps raw terminal events to state
//! changes, and reports outcomes the event loop must act on as component
//! action values.

mod auth_form;
mod release_editor;
mod source_picker;

pub(crate) use auth_form::{AuthForm, AuthFormAction};
pub(crate) use release_editor::{EditorAction, ReleaseEditor};
pub(crate) use source_picker::{PickerAction, SourcePicker};
