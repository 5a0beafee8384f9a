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

//! Command-line input logic and state management.
//!
//! This module implements the logic for the command-line processing
//! component, handling a text input component, and dispatching a
//! corresponding application event or worker task when typing is finished
//! and a command is submitted.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{MainView, events::AppEvent, model::analytics::TimeRange, tasks::AppTask};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn handle_event(
        &mut self,
        event: Event,
        task_tx: &Sender<AppTask>,
        event_tx: &Sender<AppEvent>,
    ) -> bool {
        if self.active {
            match event {
                Event::Key(key_event) => match key_event.code {
                    KeyCode::Esc => {
                        self.active = false;
                        self.input.reset();
                        true
                    }

                    KeyCode::Enter => {
                        let buffer = self.input.value().trim().to_string();
                        if !buffer.is_empty() {
                            let _ = self.run_command(&buffer, task_tx, event_tx);
                            self.input.reset();
                        }
                        self.active = false;

                        true
                    }

                    _ => {
                        // Delegate all key events to the managed input component.
                        self.input.handle_event(&event);

                        true
                    }
                },

                _ => false,
            }
        } else {
            match event {
                Event::Key(key_event) => match key_event.code {
                    KeyCode::Char(':') => {
                        self.active = true;
                        true
                    }

                    _ => false,
                },

                _ => false,
            }
        }
    }

    fn run_command(
        &self,
        buffer: &str,
        task_tx: &Sender<AppTask>,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        let parts: Vec<&str> = buffer.split_whitespace().collect();

        match parts.as_slice() {
            ["q"] | ["quit"] => event_tx.send(AppEvent::ExitApplication)?,

            ["logout"] => task_tx.send(AppTask::LogOut)?,

            ["range", range] => match *range {
                "7d" => task_tx.send(AppTask::GenerateAnalytics(TimeRange::SevenDays))?,
                "30d" => task_tx.send(AppTask::GenerateAnalytics(TimeRange::ThirtyDays))?,
                "90d" => task_tx.send(AppTask::GenerateAnalytics(TimeRange::NinetyDays))?,
                "1y" => task_tx.send(AppTask::GenerateAnalytics(TimeRange::OneYear))?,
                other => {
                    event_tx.send(AppEvent::Error(format!("Unknown range: {other}")))?;
                }
            },

            ["1"] | ["dash"] => event_tx.send(AppEvent::SetMainView(MainView::Dashboard))?,
            ["2"] | ["music"] => event_tx.send(AppEvent::SetMainView(MainView::MyMusic))?,
            ["3"] | ["releases"] => event_tx.send(AppEvent::SetMainView(MainView::Releases))?,
            ["4"] | ["analytics"] => event_tx.send(AppEvent::SetMainView(MainView::Analytics))?,
            ["5"] | ["finance"] => event_tx.send(AppEvent::SetMainView(MainView::Finance))?,
            ["6"] | ["profile"] => event_tx.send(AppEvent::SetMainView(MainView::Profile))?,

            [] => {}

            [cmd, ..] => {
                event_tx.send(AppEvent::Error(format!("Unknown command: {cmd}")))?;
            }
        }

        Ok(())
    }
}
