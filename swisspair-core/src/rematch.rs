/// Rematch detection over a candidate standings order.
///
/// Pairs are read off the standings two at a time: `(0, 1), (2, 3), ...`.
/// This module only finds conflicts; repairing them is the engine's job.
use crate::history::MatchHistory;
use crate::types::{ConflictIndex, Player};

/// Find the first adjacent pair in `standings` whose players have already met.
///
/// Scanning stops at the first hit, so each call surfaces at most one
/// conflict. `Ok(None)` means every adjacent pair is a fresh matchup.
/// A trailing player without a partner (odd-length slice) is ignored.
pub fn find_conflict<H: MatchHistory>(
    standings: &[Player],
    history: &H,
) -> Result<Option<ConflictIndex>, H::Error> {
    for (pair_idx, pair) in standings.chunks_exact(2).enumerate() {
        if history.has_played(pair[0].id, pair[1].id)? {
            let first = pair_idx * 2;
            return Ok(Some(ConflictIndex { first, second: first + 1 }));
        }
    }
    Ok(None)
}

/// Count every adjacent rematch in `standings`.
///
/// Unlike `find_conflict` this keeps scanning past the first hit. Useful for
/// reporting how far a naive pairing is from being valid.
pub fn count_conflicts<H: MatchHistory>(standings: &[Player], history: &H) -> Result<usize, H::Error> {
    let mut count = 0;
    for pair in standings.chunks_exact(2) {
        if history.has_played(pair[0].id, pair[1].id)? {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::InMemoryHistory;
    use crate::types::MatchRecord;
    use std::cell::Cell;

    fn players(n: i64) -> Vec<Player> {
        (1..=n).map(|i| Player::new(i, format!("P{i}"))).collect()
    }

    #[test]
    fn test_no_history_no_conflict() {
        let history = InMemoryHistory::new();
        assert_eq!(find_conflict(&players(6), &history), Ok(None));
    }

    #[test]
    fn test_reports_first_conflict_only() {
        let history = InMemoryHistory::from_matches(&[
            MatchRecord::new(6, 5),
            MatchRecord::new(3, 4),
        ]);
        let conflict = find_conflict(&players(6), &history).unwrap();
        assert_eq!(conflict, Some(ConflictIndex { first: 2, second: 3 }));
        assert_eq!(count_conflicts(&players(6), &history), Ok(2));
    }

    #[test]
    fn test_ignores_non_adjacent_meetings() {
        // 2 and 3 met, but they sit in different pairs.
        let history = InMemoryHistory::from_matches(&[MatchRecord::new(2, 3)]);
        assert_eq!(find_conflict(&players(4), &history), Ok(None));
    }

    #[test]
    fn test_trailing_player_ignored() {
        let history = InMemoryHistory::from_matches(&[MatchRecord::new(4, 5)]);
        assert_eq!(find_conflict(&players(5), &history), Ok(None));
    }

    struct CountingHistory {
        calls: Cell<usize>,
        inner: InMemoryHistory,
    }

    impl MatchHistory for CountingHistory {
        type Error = std::convert::Infallible;

        fn has_played(&self, a: i64, b: i64) -> Result<bool, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            self.inner.has_played(a, b)
        }
    }

    #[test]
    fn test_stops_scanning_at_first_conflict() {
        let history = CountingHistory {
            calls: Cell::new(0),
            inner: InMemoryHistory::from_matches(&[MatchRecord::new(1, 2)]),
        };
        let conflict = find_conflict(&players(8), &history).unwrap();
        assert_eq!(conflict, Some(ConflictIndex { first: 0, second: 1 }));
        assert_eq!(history.calls.get(), 1);
    }

    #[test]
    fn test_lookup_error_propagates() {
        struct Broken;
        impl MatchHistory for Broken {
            type Error = String;
            fn has_played(&self, _a: i64, _b: i64) -> Result<bool, String> {
                Err("connection refused".to_string())
            }
        }
        assert_eq!(
            find_conflict(&players(2), &Broken),
            Err("connection refused".to_string())
        );
    }
}
