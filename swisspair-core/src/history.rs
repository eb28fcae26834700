/// Match-history lookup consumed by the pairing engine.
///
/// The engine never stores results itself; it asks a `MatchHistory` whether
/// two players have met. Implementations backed by a database or a remote
/// service report failures through `Error`, which the engine hands back to
/// its caller untouched.
use std::collections::HashSet;
use std::convert::Infallible;

use crate::types::MatchRecord;

pub trait MatchHistory {
    type Error;

    /// Whether `a` and `b` have already played, regardless of who won.
    ///
    /// Must be symmetric: `has_played(a, b) == has_played(b, a)`.
    fn has_played(&self, a: i64, b: i64) -> Result<bool, Self::Error>;
}

impl<H: MatchHistory + ?Sized> MatchHistory for &H {
    type Error = H::Error;

    fn has_played(&self, a: i64, b: i64) -> Result<bool, Self::Error> {
        (**self).has_played(a, b)
    }
}

/// History held in memory as a set of unordered ID pairs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    played: HashSet<(i64, i64)>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_matches(matches: &[MatchRecord]) -> Self {
        let mut history = Self::new();
        for m in matches {
            history.record(m.winner, m.loser);
        }
        history
    }

    /// Record that `a` and `b` met. Order does not matter.
    pub fn record(&mut self, a: i64, b: i64) {
        self.played.insert(key(a, b));
    }

    /// Number of distinct pairings recorded (repeat meetings count once).
    pub fn len(&self) -> usize {
        self.played.len()
    }

    pub fn is_empty(&self) -> bool {
        self.played.is_empty()
    }
}

impl MatchHistory for InMemoryHistory {
    type Error = Infallible;

    fn has_played(&self, a: i64, b: i64) -> Result<bool, Infallible> {
        Ok(self.played.contains(&key(a, b)))
    }
}

impl FromIterator<MatchRecord> for InMemoryHistory {
    fn from_iter<I: IntoIterator<Item = MatchRecord>>(iter: I) -> Self {
        let mut history = Self::new();
        for m in iter {
            history.record(m.winner, m.loser);
        }
        history
    }
}

fn key(a: i64, b: i64) -> (i64, i64) {
    if a <= b { (a, b) } else { (b, a) }
}
