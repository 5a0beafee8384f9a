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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) commander_colour: Color,

    pub(crate) heading_fg: Color,
    pub(crate) muted_fg: Color,

    pub(crate) table_position_fg: Color,
    pub(crate) table_title_fg: Color,
    pub(crate) table_duration_fg: Color,
    pub(crate) table_source_fg: Color,

    pub(crate) status_active_fg: Color,
    pub(crate) status_pending_fg: Color,
    pub(crate) status_processing_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Indigo-to-pink palette after the web dashboard this replaces.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(26, 18, 52),
            accent_colour: Color::Rgb(236, 72, 153),
            border_colour: Color::Rgb(92, 80, 134),
            gauge_track_colour: Color::Rgb(42, 32, 74),
            commander_colour: Color::Rgb(226, 220, 255),

            heading_fg: Color::Rgb(255, 255, 255),
            muted_fg: Color::Rgb(158, 152, 182),

            table_position_fg: Color::Rgb(158, 152, 182),
            table_title_fg: Color::Rgb(255, 255, 255),
            table_duration_fg: Color::Rgb(158, 152, 182),
            table_source_fg: Color::Rgb(179, 157, 219),

            status_active_fg: Color::Rgb(74, 222, 128),
            status_pending_fg: Color::Rgb(251, 146, 60),
            status_processing_fg: Color::Rgb(250, 204, 21),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, used to set the terminal emulator's background color via
    /// escape sequences.
    ///
    /// # Panics
    ///
    /// Panics if the provided color is not a [`Color::Rgb`] variant.
    pub(crate) fn to_hex(colour: Color) -> String {
        match colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => panic!("Unexpected non-RGB colour"),
        }
    }

    pub(crate) fn status_colour(&self, status: crate::model::catalog::ReleaseStatus) -> Color {
        use crate::model::catalog::ReleaseStatus;
        match status {
            ReleaseStatus::Active => self.status_active_fg,
            ReleaseStatus::Pending => self.status_pending_fg,
            ReleaseStatus::Processing => self.status_processing_fg,
        }
    }
}
