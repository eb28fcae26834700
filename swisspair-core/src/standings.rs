/// In-memory ranking provider.
///
/// Turns registered players and reported matches into ranked standings:
/// wins descending, then opponent strength descending, then id ascending.
/// The pairing engine consumes the resulting order without rechecking it.
use std::collections::HashMap;

use crate::error::StandingsError;
use crate::types::{MatchRecord, Player};

/// A player's row in the standings table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerRecord {
    pub player: Player,
    pub wins: u32,
    /// Matches played in either role.
    pub matches: u32,
    /// Sum of current wins of every opponent faced, once per match played.
    pub opponent_strength: u32,
}

/// Compute ranked standings for `players` from `matches`.
///
/// Players with no matches appear with zero wins and are ordered by id.
pub fn compute_standings(
    players: &[Player],
    matches: &[MatchRecord],
) -> Result<Vec<PlayerRecord>, StandingsError> {
    let mut index: HashMap<i64, usize> = HashMap::with_capacity(players.len());
    for (idx, p) in players.iter().enumerate() {
        if index.insert(p.id, idx).is_some() {
            return Err(StandingsError::DuplicatePlayer(p.id));
        }
    }

    let mut wins = vec![0u32; players.len()];
    let mut played = vec![0u32; players.len()];
    // Opponent indices per player, one entry per match.
    let mut opponents: Vec<Vec<usize>> = vec![Vec::new(); players.len()];

    for m in matches {
        if m.winner == m.loser {
            return Err(StandingsError::SelfMatch(m.winner));
        }
        let w = *index.get(&m.winner).ok_or(StandingsError::UnknownPlayer(m.winner))?;
        let l = *index.get(&m.loser).ok_or(StandingsError::UnknownPlayer(m.loser))?;

        wins[w] += 1;
        played[w] += 1;
        played[l] += 1;
        opponents[w].push(l);
        opponents[l].push(w);
    }

    let mut records: Vec<PlayerRecord> = players
        .iter()
        .enumerate()
        .map(|(idx, p)| PlayerRecord {
            player: p.clone(),
            wins: wins[idx],
            matches: played[idx],
            opponent_strength: opponents[idx].iter().map(|&o| wins[o]).sum(),
        })
        .collect();

    records.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then(b.opponent_strength.cmp(&a.opponent_strength))
            .then(a.player.id.cmp(&b.player.id))
    });

    Ok(records)
}

/// Project standings rows down to the ordered player list the engine takes.
pub fn ranked_players(records: &[PlayerRecord]) -> Vec<Player> {
    records.iter().map(|r| r.player.clone()).collect()
}
