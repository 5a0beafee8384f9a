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

//! The artist profile view: identity on the left, stats, recent releases,
//! and top tracks on the right.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    App,
    util::format::{format_count, format_time},
};

pub(super) fn draw_profile(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .horizontal_margin(1)
        .split(area);

    draw_identity(f, columns[0], app);
    draw_activity(f, columns[1], app);
}

fn draw_identity(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let profile = &app.profile;

    let block = Block::default()
        .title(format!(" {} ", profile.stage_name))
        .title_style(Style::default().fg(theme.accent_colour).bold())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::styled(profile.name.clone(), Style::default().fg(theme.heading_fg).bold()),
        Line::styled(profile.location.clone(), Style::default().fg(theme.muted_fg)),
        Line::raw(""),
        Line::styled(profile.bio.clone(), Style::default().fg(theme.heading_fg)),
        Line::raw(""),
        Line::styled(
            profile.genres.join(" / "),
            Style::default().fg(theme.table_source_fg),
        ),
        Line::raw(""),
    ];

    for (network, url) in &profile.social_links {
        lines.push(Line::from(vec![
            Span::styled(format!("{network:<10}"), Style::default().fg(theme.muted_fg)),
            Span::styled(url.clone(), Style::default().fg(theme.heading_fg)),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_activity(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let profile = &app.profile;
    let stats = &profile.stats;

    let block = Block::default()
        .title(" Activity ")
        .title_style(Style::default().fg(theme.heading_fg).bold())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} plays   ", format_count(stats.total_plays)),
            Style::default().fg(theme.heading_fg).bold(),
        ),
        Span::styled(
            format!(
                "{} monthly   {} followers   {} tracks",
                format_count(stats.monthly_listeners),
                format_count(stats.followers),
                stats.tracks
            ),
            Style::default().fg(theme.muted_fg),
        ),
    ])];

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Recent Releases",
        Style::default().fg(theme.accent_colour).bold(),
    ));
    for release in &profile.recent_releases {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<24}", release.title),
                Style::default().fg(theme.table_title_fg),
            ),
            Span::styled(
                format!("{}   {} plays", release.release_date, format_count(release.plays)),
                Style::default().fg(theme.muted_fg),
            ),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Top Tracks",
        Style::default().fg(theme.accent_colour).bold(),
    ));
    for track in &profile.top_tracks {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<24}", track.title),
                Style::default().fg(theme.table_title_fg),
            ),
            Span::styled(
                format!(
                    "{}   {} plays",
                    format_time(track.duration_secs),
                    format_count(track.plays)
                ),
                Style::default().fg(theme.muted_fg),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
