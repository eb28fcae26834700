/// Error types for pairing and standings computation.
use thiserror::Error;

/// Errors returned by the pairing engine.
///
/// `E` is the error type of the `MatchHistory` lookup. Lookup failures are
/// not handled here, they come back to the caller unchanged as `History`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairingError<E> {
    /// Standings length is odd, or there are fewer than two players.
    #[error("cannot pair {players} players: need an even number, at least 2")]
    InvalidInput { players: usize },

    /// Repair budget spent without reaching a rematch-free arrangement.
    #[error("no rematch-free pairing found after {attempts} repair attempts")]
    RetryExhausted { attempts: usize },

    /// The match-history lookup itself failed.
    #[error("match history lookup failed: {0}")]
    History(#[source] E),
}

/// Errors from computing standings out of raw player and match records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StandingsError {
    #[error("duplicate player id: {0}")]
    DuplicatePlayer(i64),

    #[error("match references unknown player id: {0}")]
    UnknownPlayer(i64),

    #[error("player {0} cannot play against themselves")]
    SelfMatch(i64),
}
