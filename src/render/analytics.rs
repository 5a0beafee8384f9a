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

//! The performance analytics view: the stream trend for the selected time
//! range and the audience breakdowns.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Sparkline},
};

use crate::{
    App,
    model::analytics::{Share, TimeRange},
    theme::Theme,
    util::format::format_count,
};

pub(super) fn draw_analytics(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let analytics = &app.analytics;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(8),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .horizontal_margin(1)
        .split(area);

    // Range selector tabs, the active one highlighted.
    let mut spans: Vec<Span> = vec![Span::styled(
        "Streams  ",
        Style::default().fg(theme.heading_fg).bold(),
    )];
    for range in TimeRange::ALL {
        let style = if range == analytics.range {
            Style::default().fg(theme.accent_colour).bold()
        } else {
            Style::default().fg(theme.muted_fg)
        };
        spans.push(Span::styled(range.label(), style));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        format!("peak {}", format_count(analytics.peak_streams())),
        Style::default().fg(theme.muted_fg),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    let streams: Vec<u64> = analytics.stream_trend.iter().map(|p| p.streams).collect();
    let sparkline = Sparkline::default()
        .data(&streams)
        .style(Style::default().fg(theme.accent_colour))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_colour)),
        );
    f.render_widget(sparkline, rows[1]);

    // Bucket extents under the trend.
    if let (Some(first), Some(last)) = (
        analytics.stream_trend.first(),
        analytics.stream_trend.last(),
    ) {
        let extents = Line::from(vec![
            Span::styled(first.label.clone(), Style::default().fg(theme.muted_fg)),
            Span::styled(
                format!("  ..  {}", last.label),
                Style::default().fg(theme.muted_fg),
            ),
        ]);
        f.render_widget(Paragraph::new(extents), rows[2]);
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[3]);

    draw_breakdown(f, columns[0], theme, "Audience", &analytics.demographics);
    draw_breakdown(f, columns[1], theme, "Regions", &analytics.regions);
    draw_breakdown(f, columns[2], theme, "Devices", &analytics.devices);

    let hint =
        Paragraph::new("t next range | :range 7d|30d|90d|1y").style(Style::default().fg(theme.muted_fg));
    f.render_widget(hint, rows[4]);
}

fn draw_breakdown(f: &mut Frame, area: Rect, theme: &Theme, title: &str, shares: &[Share]) {
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(theme.heading_fg).bold())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1); shares.len()];
    constraints.push(Constraint::Min(0));
    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (row, share) in shares.iter().enumerate() {
        let gauge = Gauge::default()
            .ratio(f64::from(share.percent) / 100.0)
            .label(format!("{} {}%", share.label, share.percent))
            .gauge_style(
                Style::default()
                    .fg(theme.accent_colour)
                    .bg(theme.gauge_track_colour),
            );
        f.render_widget(gauge, lines[row]);
    }
}
