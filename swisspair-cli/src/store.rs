/// JSON-file tournament store: registered players and reported matches.
///
/// The whole tournament is loaded, changed, and written back on every
/// command. IDs are assigned by the store as a serial starting at 1 and are
/// never reused, even after players are deleted.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use swisspair_core::{
    compute_standings, InMemoryHistory, MatchRecord, Player, PlayerRecord, StandingsError,
};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("state file {path} is corrupt: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no registered player with id {0}")]
    UnknownPlayer(i64),

    #[error("a player cannot be reported as both winner and loser (id {0})")]
    SelfMatch(i64),

    #[error(transparent)]
    Standings(#[from] StandingsError),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TournamentStore {
    next_id: i64,
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
}

impl Default for TournamentStore {
    fn default() -> Self {
        TournamentStore {
            next_id: 1,
            players: Vec::new(),
            matches: Vec::new(),
        }
    }
}

impl TournamentStore {
    /// Load the store at `path`. A missing file is an empty tournament.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No state file yet, starting empty");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let store: Self = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            players = store.players.len(),
            matches = store.matches.len(),
            "Loaded tournament state"
        );
        Ok(store)
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let write_err = |source: std::io::Error| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let json = serde_json::to_string_pretty(self).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(write_err)?;
        debug!(path = %path.display(), "Saved tournament state");
        Ok(())
    }

    /// Register a player and return the assigned ID. Names need not be unique.
    pub fn register_player(&mut self, name: &str) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.players.push(Player::new(id, name));
        info!(id, name, "Registered player");
        id
    }

    /// Record the outcome of a single match between two registered players.
    pub fn report_match(&mut self, winner: i64, loser: i64) -> Result<(), StoreError> {
        if winner == loser {
            return Err(StoreError::SelfMatch(winner));
        }
        for id in [winner, loser] {
            if !self.players.iter().any(|p| p.id == id) {
                return Err(StoreError::UnknownPlayer(id));
            }
        }
        self.matches.push(MatchRecord::new(winner, loser));
        info!(winner, loser, "Reported match");
        Ok(())
    }

    pub fn delete_matches(&mut self) -> usize {
        let removed = self.matches.len();
        self.matches.clear();
        removed
    }

    /// Remove every player. Matches go too, since they would reference
    /// players that no longer exist.
    pub fn delete_players(&mut self) -> usize {
        let removed = self.players.len();
        self.players.clear();
        self.matches.clear();
        removed
    }

    pub fn count_players(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn standings(&self) -> Result<Vec<PlayerRecord>, StoreError> {
        Ok(compute_standings(&self.players, &self.matches)?)
    }

    pub fn history(&self) -> InMemoryHistory {
        InMemoryHistory::from_matches(&self.matches)
    }
}
