/// Pairing engine orchestrator.
///
/// Takes ranked standings and a match history, forms adjacent pairs, and
/// repairs rematches with local swaps until the pairing is clean or the
/// attempt budget runs out. Pure computation over an owned working copy;
/// the caller's standings are never mutated.
use tracing::{debug, warn};

use crate::constants::{MAX_REPAIR_ATTEMPTS, MIN_PLAYERS};
use crate::error::PairingError;
use crate::history::MatchHistory;
use crate::pairing::{assemble_pairs, repair_partner};
use crate::rematch::find_conflict;
use crate::types::{Pair, PairingReport, Player, Swap};

/// Configuration for the pairing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Repair swaps allowed before giving up. Going past this fails the run.
    pub max_attempts: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_attempts: MAX_REPAIR_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PairingEngine {
    config: EngineConfig,
}

impl PairingEngine {
    pub fn new(config: EngineConfig) -> Self {
        PairingEngine { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generate next-round pairs from `standings`.
    pub fn generate_pairings<H: MatchHistory>(
        &self,
        standings: &[Player],
        history: &H,
    ) -> Result<Vec<Pair>, PairingError<H::Error>> {
        self.generate_pairings_with_report(standings, history)
            .map(|report| report.pairs)
    }

    /// Like `generate_pairings`, but also returns every swap made on the way.
    pub fn generate_pairings_with_report<H: MatchHistory>(
        &self,
        standings: &[Player],
        history: &H,
    ) -> Result<PairingReport, PairingError<H::Error>> {
        let len = standings.len();
        if len < MIN_PLAYERS || len % 2 != 0 {
            return Err(PairingError::InvalidInput { players: len });
        }

        let mut working = standings.to_vec();
        let mut swaps = Vec::new();
        let mut attempts = 0;

        while let Some(conflict) = find_conflict(&working, history).map_err(PairingError::History)? {
            let partner = repair_partner(conflict, len);
            let slot = conflict.second;
            attempts += 1;

            let rematch = (working[conflict.first].id, working[slot].id);
            debug!(
                attempt = attempts,
                rematch = ?rematch,
                slot,
                partner,
                "Repairing rematch by swap"
            );

            swaps.push(Swap {
                attempt: attempts,
                positions: (slot, partner),
                exchanged: (working[slot].id, working[partner].id),
            });
            working.swap(slot, partner);

            if attempts > self.config.max_attempts {
                warn!(
                    attempts,
                    players = len,
                    "Giving up on rematch-free pairing"
                );
                return Err(PairingError::RetryExhausted { attempts });
            }
        }

        Ok(PairingReport {
            pairs: assemble_pairs(&working),
            attempts,
            swaps,
        })
    }
}

/// Generate next-round pairs with the default repair budget.
///
/// `standings` must already be in rank order (wins desc, opponent strength
/// desc, id asc). Returns all pairs or an error; never a partial pairing.
pub fn generate_pairings<H: MatchHistory>(
    standings: &[Player],
    history: &H,
) -> Result<Vec<Pair>, PairingError<H::Error>> {
    PairingEngine::default().generate_pairings(standings, history)
}
