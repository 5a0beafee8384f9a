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

//! Mock authentication and session persistence.
//!
//! Signing in does not talk to a backend. A [`UserAccount`] is synthesized
//! from the submitted form (the display name defaults to the local part of
//! the email, and the avatar seed is an xxh3 hash of the address) and the
//! record is kept in a `confy`-managed session file so the user stays signed
//! in between runs. Logging out clears the stored record.
//!
//! The password is checked only for presence. Nothing here is security.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::model::UserAccount;

const SESSION_NAME: &str = "soundsphere-session";

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionStore {
    version: u32,
    user: Option<UserAccount>,
}

/// Loads the persisted account, if a previous run left one signed in.
pub(crate) fn restore() -> Option<UserAccount> {
    confy::load::<SessionStore>(SESSION_NAME, None)
        .ok()
        .and_then(|store| store.user)
}

pub(crate) fn log_in(email: &str, password: &str) -> Result<UserAccount> {
    if email.is_empty() || password.is_empty() {
        bail!("email and password are required");
    }

    let user = synthesize(email, None);
    persist(Some(user.clone()))?;
    Ok(user)
}

pub(crate) fn register(email: &str, password: &str, name: &str) -> Result<UserAccount> {
    if email.is_empty() || password.is_empty() {
        bail!("email and password are required");
    }

    let name = (!name.is_empty()).then_some(name);
    let user = synthesize(email, name);
    persist(Some(user.clone()))?;
    Ok(user)
}

pub(crate) fn log_out() -> Result<()> {
    persist(None)
}

fn persist(user: Option<UserAccount>) -> Result<()> {
    confy::store(SESSION_NAME, None, SessionStore { version: 1, user })?;
    Ok(())
}

fn synthesize(email: &str, name: Option<&str>) -> UserAccount {
    let name = name
        .map(str::to_string)
        .unwrap_or_else(|| email.split('@').next().unwrap_or(email).to_string());

    let seed = xxh3_64(email.as_bytes());

    UserAccount {
        id: format!("user-{seed:016x}"),
        email: email.to_string(),
        name,
        avatar_seed: seed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_defaults_to_the_email_local_part() {
        let user = synthesize("nova@example.com", None);
        assert_eq!(user.name, "nova");
    }

    #[test]
    fn explicit_name_wins_over_the_email() {
        let user = synthesize("nova@example.com", Some("Nova Artist"));
        assert_eq!(user.name, "Nova Artist");
    }

    #[test]
    fn avatar_seed_is_deterministic_per_email() {
        let first = synthesize("nova@example.com", None);
        let again = synthesize("nova@example.com", Some("Other Name"));
        let other = synthesize("someone@example.com", None);

        assert_eq!(first.avatar_seed, again.avatar_seed);
        assert_eq!(first.id, again.id);
        assert_ne!(first.avatar_seed, other.avatar_seed);
    }
}
