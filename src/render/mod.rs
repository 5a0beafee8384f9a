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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface. The
//! unauthenticated views (welcome, login, register) take the whole frame;
//! everything else renders under the navigation header with the commander
//! line at the bottom. The source picker, when open, overlays the lot.

mod analytics;
mod commander;
mod dashboard;
mod finance;
mod my_music;
mod profile;
mod welcome;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, MainView, theme::Theme};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// A rectangle of the given size centered within `area`, clamped to fit.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Renders the user interface to the terminal frame.
///
/// This function calculates the layout constraints and populates the frame
/// with widgets based on the current state of the [`App`].
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let theme = app.theme;

    match app.main_view {
        MainView::Welcome => welcome::draw_welcome(f, area, app),
        MainView::Login => app.login_form.draw(f, area, &theme),
        MainView::Register => app.register_form.draw(f, area, &theme),

        _ => {
            // Outer layout: header, content, commander
            let outer = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .split(area);

            draw_header(f, outer[0], app);

            match app.main_view {
                MainView::Dashboard => dashboard::draw_dashboard(f, outer[1], app),
                MainView::MyMusic => my_music::draw_my_music(f, outer[1], app),
                MainView::Releases => draw_releases(f, outer[1], app),
                MainView::Analytics => analytics::draw_analytics(f, outer[1], app),
                MainView::Finance => finance::draw_finance(f, outer[1], app),
                MainView::Profile => profile::draw_profile(f, outer[1], app),
                _ => {}
            }

            commander::draw_commander(f, outer[2], app);
        }
    }

    if let Some(picker) = app.picker.as_mut() {
        picker.draw(f, area, &theme);
    }
}

const NAV_TABS: [(MainView, &str); 6] = [
    (MainView::Dashboard, "1 Dashboard"),
    (MainView::MyMusic, "2 My Music"),
    (MainView::Releases, "3 Releases"),
    (MainView::Analytics, "4 Analytics"),
    (MainView::Finance, "5 Finance"),
    (MainView::Profile, "6 Profile"),
];

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .horizontal_margin(1)
        .split(area);

    let mut spans: Vec<Span> = vec![Span::styled(
        "SoundSphere  ",
        Style::default().fg(theme.accent_colour).bold(),
    )];
    for (view, label) in NAV_TABS {
        let style = if app.main_view == view {
            Style::default().fg(theme.heading_fg).bold()
        } else {
            Style::default().fg(theme.muted_fg)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("  "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), columns[0]);

    if let Some(user) = &app.user {
        let account = Line::from(vec![
            Span::styled(user.name.as_str(), Style::default().fg(theme.heading_fg)),
            Span::raw(" "),
            Span::styled(
                format!("<{}>", user.email),
                Style::default().fg(theme.muted_fg),
            ),
        ])
        .right_aligned();
        f.render_widget(Paragraph::new(account), columns[1]);
    }
}

fn draw_releases(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;

    if app.editor.is_open() {
        app.editor.draw(f, area, &theme);
        return;
    }

    let message = Paragraph::new(vec![
        Line::styled("No release in progress", Style::default().fg(theme.heading_fg).bold()),
        Line::raw(""),
        Line::styled(
            "Press n to start assembling a new release",
            Style::default().fg(theme.muted_fg),
        ),
    ])
    .centered();
    f.render_widget(message, centered(area, 44, 3));
}
