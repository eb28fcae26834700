/// Players are identified by caller-provided `i64` IDs (assigned by whatever
/// store registered them). The core treats a `Player` as an opaque value and
/// never looks at the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: i64,
    pub name: String,
}

impl Player {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Player { id, name: name.into() }
    }
}

/// Outcome of a single played match.
///
/// The pairing engine only cares that the two players met; which one won
/// matters to standings computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRecord {
    pub winner: i64,
    pub loser: i64,
}

impl MatchRecord {
    pub fn new(winner: i64, loser: i64) -> Self {
        MatchRecord { winner, loser }
    }

    /// Whether this match was between `a` and `b`, in either role.
    pub fn involves(&self, a: i64, b: i64) -> bool {
        (self.winner == a && self.loser == b) || (self.winner == b && self.loser == a)
    }
}

/// One pairing for the next round.
///
/// `player1` is the entry that sat at the lower index of the working
/// standings when pairs were assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair {
    pub player1: Player,
    pub player2: Player,
}

impl Pair {
    /// Render as `(id1, name1, id2, name2)`.
    pub fn as_tuple(&self) -> (i64, &str, i64, &str) {
        (
            self.player1.id,
            self.player1.name.as_str(),
            self.player2.id,
            self.player2.name.as_str(),
        )
    }

    pub fn ids(&self) -> (i64, i64) {
        (self.player1.id, self.player2.id)
    }
}

/// Adjacent standings indices `(first, first + 1)` holding a rematch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictIndex {
    pub first: usize,
    pub second: usize,
}

/// A single repair swap applied by the engine, by working-list index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swap {
    /// Attempt number this swap was made on, starting at 1.
    pub attempt: usize,
    /// The two working-list indices whose entries were exchanged.
    pub positions: (usize, usize),
    /// IDs that sat at `positions` before the exchange.
    pub exchanged: (i64, i64),
}

/// Full outcome of a successful pairing run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairingReport {
    pub pairs: Vec<Pair>,
    /// Number of repair swaps performed.
    pub attempts: usize,
    pub swaps: Vec<Swap>,
}
