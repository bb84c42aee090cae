//! Player URL to national team name associations.
//!
//! Roster pages are the only place a player's national team is named, so the
//! team parsed from a roster is carried over to the profile pages it links to.
//! The registry is owned by the caller and threaded through every parse call:
//! all roster pages referencing a player must be parsed before that player's
//! profile, and each registration is consumed exactly once.

use std::collections::HashMap;

use tracing::instrument;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TeamRegistry {
    teams: HashMap<String, String>,
}
impl TeamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates a player URL with a team, replacing any earlier association.
    #[instrument(level = "trace", skip_all)]
    pub fn register(&mut self, player_url: impl Into<String>, team: impl Into<String>) {
        self.teams.insert(player_url.into(), team.into());
    }

    /// Removes and returns the team registered for a player URL.
    #[instrument(level = "trace", skip(self))]
    pub fn take(&mut self, player_url: &str) -> Option<String> {
        self.teams.remove(player_url)
    }

    /// Returns the team registered for a player URL without consuming it.
    pub fn get(&self, player_url: &str) -> Option<&str> {
        self.teams.get(player_url).map(String::as_str)
    }

    pub fn contains(&self, player_url: &str) -> bool {
        self.teams.contains_key(player_url)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
