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

//! Sign-in and registration form state.
//!
//! One component serves both forms: registration adds a name field on top
//! of email and password. Field focus cycles with Tab/arrows, Enter on the
//! last field (or with everything filled in) submits.

mod render;

use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::{Input, backend::crossterm::EventHandler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthField {
    Name,
    Email,
    Password,
}

/// The submitted credentials, handed to the session worker.
#[derive(Debug)]
pub(crate) struct AuthSubmit {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Debug)]
pub(crate) enum AuthFormAction {
    Submit(AuthSubmit),
    Cancel,
}

pub(crate) struct AuthForm {
    pub(crate) title: &'static str,
    with_name: bool,
    pub(crate) name: Input,
    pub(crate) email: Input,
    pub(crate) password: Input,
    pub(crate) focus: AuthField,
}

impl AuthForm {
    pub(crate) fn sign_in() -> Self {
        Self {
            title: "Log in to SoundSphere",
            with_name: false,
            name: Input::default(),
            email: Input::default(),
            password: Input::default(),
            focus: AuthField::Email,
        }
    }

    pub(crate) fn register() -> Self {
        Self {
            title: "Create your SoundSphere account",
            with_name: true,
            name: Input::default(),
            email: Input::default(),
            password: Input::default(),
            focus: AuthField::Name,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.name.reset();
        self.email.reset();
        self.password.reset();
        self.focus = if self.with_name {
            AuthField::Name
        } else {
            AuthField::Email
        };
    }

    pub(crate) fn fields(&self) -> Vec<AuthField> {
        if self.with_name {
            vec![AuthField::Name, AuthField::Email, AuthField::Password]
        } else {
            vec![AuthField::Email, AuthField::Password]
        }
    }

    fn focus_next(&mut self) {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(current + 1) % fields.len()];
    }

    fn focus_previous(&mut self) {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(current + fields.len() - 1) % fields.len()];
    }

    fn focused_input(&mut self) -> &mut Input {
        match self.focus {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    fn complete(&self) -> bool {
        !self.email.value().is_empty() && !self.password.value().is_empty()
    }

    fn submit(&self) -> AuthSubmit {
        AuthSubmit {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
        }
    }

    pub(crate) fn process_event(&mut self, event: &Event) -> Option<AuthFormAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Esc, _) => return Some(AuthFormAction::Cancel),

            (KeyCode::Tab, _) | (KeyCode::Down, _) => self.focus_next(),
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => self.focus_previous(),

            (KeyCode::Enter, _) => {
                let last = self.fields().last() == Some(&self.focus);
                if self.complete() && last {
                    return Some(AuthFormAction::Submit(self.submit()));
                }
                self.focus_next();
            }

            (_, modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.focused_input().handle_event(event);
            }

            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(form: &mut AuthForm, text: &str) {
        for c in text.chars() {
            form.process_event(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn focus_cycles_through_the_form_fields() {
        let mut form = AuthForm::register();
        assert_eq!(form.focus, AuthField::Name);

        form.process_event(&key(KeyCode::Tab));
        assert_eq!(form.focus, AuthField::Email);
        form.process_event(&key(KeyCode::Tab));
        assert_eq!(form.focus, AuthField::Password);
        form.process_event(&key(KeyCode::Tab));
        assert_eq!(form.focus, AuthField::Name);

        form.process_event(&key(KeyCode::BackTab));
        assert_eq!(form.focus, AuthField::Password);
    }

    #[test]
    fn enter_on_the_last_field_submits_filled_forms() {
        let mut form = AuthForm::sign_in();
        type_text(&mut form, "nova@example.com");
        form.process_event(&key(KeyCode::Tab));
        type_text(&mut form, "secret");

        match form.process_event(&key(KeyCode::Enter)) {
            Some(AuthFormAction::Submit(submit)) => {
                assert_eq!(submit.email, "nova@example.com");
                assert_eq!(submit.password, "secret");
            }
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn enter_on_an_incomplete_form_advances_instead() {
        let mut form = AuthForm::sign_in();
        type_text(&mut form, "nova@example.com");

        assert!(form.process_event(&key(KeyCode::Enter)).is_none());
        assert_eq!(form.focus, AuthField::Password);
    }

    #[test]
    fn escape_cancels() {
        let mut form = AuthForm::sign_in();
        assert!(matches!(
            form.process_event(&key(KeyCode::Esc)),
            Some(AuthFormAction::Cancel)
        ));
    }
}
