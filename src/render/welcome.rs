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

//! The landing screen shown before signing in.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

use crate::{App, render::centered};

pub(super) fn draw_welcome(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let lines = vec![
        Line::styled(
            "SoundSphere",
            Style::default().fg(theme.accent_colour).bold(),
        ),
        Line::raw(""),
        Line::styled(
            "Distribute your music to every major platform",
            Style::default().fg(theme.heading_fg),
        ),
        Line::styled(
            "and watch it grow from one dashboard.",
            Style::default().fg(theme.heading_fg),
        ),
        Line::raw(""),
        Line::raw(""),
        Line::styled(
            "l Log in    r Create account    q Quit",
            Style::default().fg(theme.muted_fg),
        ),
    ];

    f.render_widget(
        Paragraph::new(lines).centered(),
        centered(area, 50, 7),
    );
}
