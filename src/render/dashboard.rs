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

//! The overview shown after signing in: headline stats, the newest catalog
//! entries, and the shortcuts into the other views.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    App,
    theme::Theme,
    util::format::{format_count, format_money},
};

pub(super) fn draw_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .horizontal_margin(1)
        .split(area);

    draw_stat_cards(f, rows[0], app);

    let subscription = Paragraph::new(Line::from(vec![
        Span::styled("Plan  ", Style::default().fg(theme.muted_fg)),
        Span::styled("Premium", Style::default().fg(theme.status_active_fg).bold()),
        Span::styled("  unlimited releases", Style::default().fg(theme.muted_fg)),
    ]));
    f.render_widget(subscription, rows[1]);

    draw_recent_releases(f, rows[2], app);

    let hint = Paragraph::new("u upload (My Music) | n new release (Releases) | : commands")
        .style(Style::default().fg(theme.muted_fg));
    f.render_widget(hint, rows[3]);
}

fn draw_stat_cards(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let stats = &app.profile.stats;

    let cards: [(&str, String); 4] = [
        ("Releases", app.catalog.len().to_string()),
        ("Active", app.catalog.active_count().to_string()),
        ("Total Plays", format_count(stats.total_plays)),
        ("Total Earnings", format_money(app.finance.summary.total_earnings)),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (column, (label, value)) in cards.into_iter().enumerate() {
        draw_stat_card(f, columns[column], theme, label, &value);
    }
}

fn draw_stat_card(f: &mut Frame, area: Rect, theme: &Theme, label: &str, value: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::styled(value.to_string(), Style::default().fg(theme.heading_fg).bold()),
        Line::styled(label.to_string(), Style::default().fg(theme.muted_fg)),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_recent_releases(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let rows: Vec<Row> = app
        .catalog
        .releases()
        .iter()
        .take(5)
        .map(|release| {
            Row::new(vec![
                Cell::from(
                    Line::from(release.title.clone())
                        .style(Style::default().fg(theme.table_title_fg)),
                ),
                Cell::from(
                    Line::from(release.kind.label())
                        .style(Style::default().fg(theme.table_source_fg)),
                ),
                Cell::from(
                    Line::from(Span::styled(
                        release.status.label(),
                        Style::default().fg(theme.status_colour(release.status)),
                    )),
                ),
                Cell::from(
                    Line::from(format!("{} platforms", release.platforms.len()))
                        .style(Style::default().fg(theme.muted_fg))
                        .alignment(Alignment::Right),
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(45),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Min(14),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from("Latest Releases"),
            Cell::from("Kind"),
            Cell::from("Status"),
            Cell::from(Line::from("Delivery").alignment(Alignment::Right)),
        ])
        .style(Style::default().bold().fg(theme.accent_colour))
        .bottom_margin(1),
    )
    .block(Block::default().padding(Padding::vertical(1)));

    f.render_widget(table, area);
}
