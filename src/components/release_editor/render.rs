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

//! UI rendering logic for the release editor.
//!
//! The editor draws the metadata form above the ordered track table. The
//! field being typed into is rendered from the live input line, everything
//! else from the draft.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::release_editor::{EditorMode, FormField, ReleaseEditor},
    render::Render,
    theme::Theme,
    util::format::format_time,
};

const FORM_FIELDS: [FormField; 4] = [
    FormField::Title,
    FormField::Artist,
    FormField::ReleaseDate,
    FormField::Genre,
];

impl Render for ReleaseEditor {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(draft) = self.draft() else {
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.draw_form(f, rows[0], theme);

        let track_rows: Vec<Row> = draft
            .tracks
            .tracks()
            .iter()
            .map(|track| {
                let duration = track
                    .duration
                    .map(format_time)
                    .unwrap_or_else(|| "--:--".to_string());

                Row::new(vec![
                    Cell::from(
                        Line::from(track.position.to_string())
                            .style(Style::default().fg(theme.table_position_fg))
                            .alignment(Alignment::Right),
                    ),
                    Cell::from(
                        Line::from(track.name.clone())
                            .style(Style::default().fg(theme.table_title_fg)),
                    ),
                    Cell::from(
                        Line::from(duration)
                            .style(Style::default().fg(theme.table_duration_fg))
                            .alignment(Alignment::Right),
                    ),
                    Cell::from(
                        Line::from(track.source.to_string_lossy().into_owned())
                            .style(Style::default().fg(theme.table_source_fg)),
                    ),
                ])
            })
            .collect();

        let table = Table::new(
            track_rows,
            [
                Constraint::Length(3),
                Constraint::Percentage(40),
                Constraint::Length(6),
                Constraint::Percentage(50),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(Line::from("#").alignment(Alignment::Right)),
                Cell::from("Title"),
                Cell::from(Line::from("Time").alignment(Alignment::Right)),
                Cell::from("Source"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .block(Block::default().padding(Padding::horizontal(1)));

        f.render_stateful_widget(table, rows[1], &mut self.table_state);

        let hint = match self.mode {
            EditorMode::Browse => {
                "a add track | J/K reorder | d remove | r rename | e edit details | c kind | i cover | S submit | Esc discard"
            }
            EditorMode::EditField(_) | EditorMode::RenameTrack(_) => "Enter confirm | Esc discard",
        };
        f.render_widget(
            Paragraph::new(hint).style(Style::default().fg(theme.muted_fg)),
            rows[2],
        );
    }
}

impl ReleaseEditor {
    fn draw_form(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(draft) = self.draft() else {
            return;
        };

        let block = Block::default()
            .title(" New Release ")
            .title_style(Style::default().fg(theme.heading_fg).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1); 6])
            .split(inner);

        for (row, field) in FORM_FIELDS.into_iter().enumerate() {
            let editing = self.mode == EditorMode::EditField(field);
            let value = if editing {
                self.input.value()
            } else {
                match field {
                    FormField::Title => draft.title.as_str(),
                    FormField::Artist => draft.artist.as_str(),
                    FormField::ReleaseDate => draft.release_date.as_str(),
                    FormField::Genre => draft.genre.as_str(),
                }
            };

            let label_style = if editing {
                Style::default().fg(theme.accent_colour).bold()
            } else {
                Style::default().fg(theme.muted_fg)
            };

            let line = Line::from(vec![
                Span::styled(format!("{:<14}", field.label()), label_style),
                Span::styled(value.to_string(), Style::default().fg(theme.heading_fg)),
            ]);
            f.render_widget(Paragraph::new(line), lines[row]);

            if editing {
                let cursor_x = lines[row].x + 14 + self.input.cursor() as u16;
                f.set_cursor_position((
                    cursor_x.min(lines[row].right().saturating_sub(1)),
                    lines[row].y,
                ));
            }
        }

        let kind = draft.kind.map_or("-", |k| k.label());
        let kind_line = Line::from(vec![
            Span::styled(format!("{:<14}", "Kind"), Style::default().fg(theme.muted_fg)),
            Span::styled(kind, Style::default().fg(theme.accent_colour)),
        ]);
        f.render_widget(Paragraph::new(kind_line), lines[4]);

        let cover = draft
            .cover_art
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "-".to_string());
        let cover_line = Line::from(vec![
            Span::styled(format!("{:<14}", "Cover art"), Style::default().fg(theme.muted_fg)),
            Span::styled(cover, Style::default().fg(theme.table_source_fg)),
        ]);
        f.render_widget(Paragraph::new(cover_line), lines[5]);
    }
}
