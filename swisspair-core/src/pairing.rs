/// Building blocks for the adjacent-pairing repair loop.
///
/// The engine works on one owned copy of the standings. These helpers pick
/// which two entries a repair exchanges and cut the final list into pairs.
use crate::types::{ConflictIndex, Pair, Player};

/// Choose the index whose entry moves into the conflicting slot.
///
/// Normally the next-ranked player (`second + 1`) moves up into the pair.
/// When the conflict is the last pair there is no next player, so the
/// previous pair's second slot (`second - 2`) is used instead. That exchange
/// is not checked here; a rematch it creates shows up on the next scan.
///
/// With only one pair in the list there is nothing to exchange with, and the
/// two members of the pair trade places (the rematch persists).
pub(crate) fn repair_partner(conflict: ConflictIndex, len: usize) -> usize {
    let last = len - 1;
    if conflict.second == last {
        conflict.second.checked_sub(2).unwrap_or(conflict.first)
    } else {
        conflict.second + 1
    }
}

/// Cut `standings` into consecutive pairs, in index order.
///
/// The lower index of each pair becomes `player1`. Callers validate that the
/// length is even; a trailing player would be dropped.
pub fn assemble_pairs(standings: &[Player]) -> Vec<Pair> {
    standings
        .chunks_exact(2)
        .map(|pair| Pair {
            player1: pair[0].clone(),
            player2: pair[1].clone(),
        })
        .collect()
}
