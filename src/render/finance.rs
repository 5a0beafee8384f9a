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

//! The royalty summary and transaction history.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    App,
    model::finance::PayoutStatus,
    theme::Theme,
    util::format::format_money,
};

pub(super) fn draw_finance(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let report = &app.finance;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .horizontal_margin(1)
        .split(area);

    let summary = &report.summary;
    let cards: [(&str, f64); 4] = [
        ("Total Earnings", summary.total_earnings),
        ("This Month", summary.monthly_earnings),
        ("Pending Payouts", summary.pending_payouts),
        ("Last Payout", summary.last_payout),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);

    for (column, (label, amount)) in cards.into_iter().enumerate() {
        draw_amount_card(f, columns[column], theme, label, amount);
    }

    draw_transactions(f, rows[1], app);
}

fn draw_amount_card(f: &mut Frame, area: Rect, theme: &Theme, label: &str, amount: f64) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::styled(
            format_money(amount),
            Style::default().fg(theme.heading_fg).bold(),
        ),
        Line::styled(label.to_string(), Style::default().fg(theme.muted_fg)),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_transactions(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let rows: Vec<Row> = app
        .finance
        .transactions
        .iter()
        .map(|tx| {
            let status_fg = match tx.status {
                PayoutStatus::Completed => theme.status_active_fg,
                PayoutStatus::Pending => theme.status_pending_fg,
            };

            Row::new(vec![
                Cell::from(
                    Line::from(tx.platform.clone())
                        .style(Style::default().fg(theme.table_title_fg)),
                ),
                Cell::from(
                    Line::from(tx.date.clone()).style(Style::default().fg(theme.muted_fg)),
                ),
                Cell::from(
                    Line::from(format_money(tx.amount))
                        .style(Style::default().fg(theme.heading_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(Line::from(Span::styled(
                    tx.status.label(),
                    Style::default().fg(status_fg),
                ))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from("Recent Transactions"),
            Cell::from("Date"),
            Cell::from(Line::from("Amount").alignment(Alignment::Right)),
            Cell::from("Status"),
        ])
        .style(Style::default().bold().fg(theme.accent_colour))
        .bottom_margin(1),
    )
    .block(Block::default().padding(Padding::vertical(1)));

    f.render_widget(table, area);
}
