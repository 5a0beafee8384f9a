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

//! UI rendering logic for the auth forms.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::auth_form::{AuthField, AuthForm},
    render::{Render, centered},
    theme::Theme,
};

const FORM_WIDTH: u16 = 52;

impl Render for AuthForm {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let form_height = 4 + self.fields().len() as u16 * 3;
        let form_area = centered(area, FORM_WIDTH, form_height);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(theme.heading_fg).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(2));
        let inner = block.inner(form_area);
        f.render_widget(block, form_area);

        let mut constraints: Vec<Constraint> = self.fields().iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Min(0));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (row, field) in self.fields().into_iter().enumerate() {
            self.draw_field(f, rows[row], theme, field);
        }

        let hint = Paragraph::new("Enter submit | Tab next field | Esc back")
            .style(Style::default().fg(theme.muted_fg));
        f.render_widget(hint, rows[self.fields().len()]);
    }
}

impl AuthForm {
    fn draw_field(&self, f: &mut Frame, area: Rect, theme: &Theme, field: AuthField) {
        let (label, input) = match field {
            AuthField::Name => ("Artist name", &self.name),
            AuthField::Email => ("Email", &self.email),
            AuthField::Password => ("Password", &self.password),
        };

        let focused = self.focus == field;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let label_style = if focused {
            Style::default().fg(theme.accent_colour).bold()
        } else {
            Style::default().fg(theme.muted_fg)
        };
        f.render_widget(Paragraph::new(label).style(label_style), rows[0]);

        // Never echo the password itself.
        let text = if field == AuthField::Password {
            "*".repeat(input.value().chars().count())
        } else {
            input.value().to_string()
        };

        f.render_widget(
            Paragraph::new(text).style(
                Style::default()
                    .fg(theme.heading_fg)
                    .bg(theme.gauge_track_colour),
            ),
            rows[1],
        );

        if focused {
            let cursor_x = rows[1].x + input.cursor() as u16;
            f.set_cursor_position((cursor_x.min(rows[1].right().saturating_sub(1)), rows[1].y));
        }
    }
}
