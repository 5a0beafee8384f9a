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

//! The released-music catalog table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Cell, Padding, Paragraph, Row, Table},
};

use crate::App;

pub(super) fn draw_my_music(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let rows_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .horizontal_margin(1)
        .split(area);

    let rows: Vec<Row> = app
        .catalog
        .releases()
        .iter()
        .map(|release| {
            let platforms = if release.platforms.is_empty() {
                "-".to_string()
            } else {
                release
                    .platforms
                    .iter()
                    .map(|p| p.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            };

            Row::new(vec![
                Cell::from(
                    Line::from(release.title.clone())
                        .style(Style::default().fg(theme.table_title_fg)),
                ),
                Cell::from(
                    Line::from(release.artist.clone())
                        .style(Style::default().fg(theme.muted_fg)),
                ),
                Cell::from(
                    Line::from(release.kind.label())
                        .style(Style::default().fg(theme.table_source_fg)),
                ),
                Cell::from(
                    Line::from(release.track_count.to_string())
                        .style(Style::default().fg(theme.table_position_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(Line::from(Span::styled(
                    release.status.label(),
                    Style::default().fg(theme.status_colour(release.status)),
                ))),
                Cell::from(Line::from(platforms).style(Style::default().fg(theme.muted_fg))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(15),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Percentage(40),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from("Title"),
            Cell::from("Artist"),
            Cell::from("Kind"),
            Cell::from(Line::from("Tracks").alignment(Alignment::Right)),
            Cell::from("Status"),
            Cell::from("Platforms"),
        ])
        .style(Style::default().bold().fg(theme.accent_colour))
        .bottom_margin(1),
    )
    .block(Block::default().padding(Padding::vertical(1)));

    f.render_widget(table, rows_layout[0]);

    let hint = Paragraph::new("u upload a file | n new release (Releases view)")
        .style(Style::default().fg(theme.muted_fg));
    f.render_widget(hint, rows_layout[1]);
}
