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

//! UI rendering logic for the source picker popup.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::SourcePicker,
    render::{Render, centered},
    theme::Theme,
};

impl Render for SourcePicker {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered(area, 60, 16);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Choose a file ")
            .title_style(Style::default().fg(theme.heading_fg).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .style(Style::default().bg(theme.background_colour))
            .padding(Padding::horizontal(1));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        if self.is_empty() {
            let empty = Paragraph::new("No media files found under the configured media directories")
                .style(Style::default().fg(theme.muted_fg));
            f.render_widget(empty, inner);
            return;
        }

        let items: Vec<ListItem> = self
            .sources
            .iter()
            .map(|source| ListItem::new(source.name.clone()))
            .collect();

        let list = List::new(items)
            .style(Style::default().fg(theme.heading_fg))
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));

        f.render_stateful_widget(list, inner, &mut self.list_state);
    }
}
