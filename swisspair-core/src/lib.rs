/// swisspair-core: Swiss-system round pairing.
///
/// Ranked standings + match history → next-round pairs with no rematches,
/// found by local swaps under a fixed attempt budget. No IO, no database.
/// Bring your own history lookup.
///
/// Players are identified by caller-provided `i64` IDs. The standings slice
/// must already be ranked (wins desc, opponent strength desc, id asc);
/// `compute_standings` does that for in-memory records.
///
/// # Quick start
///
/// ```rust
/// use swisspair_core::{generate_pairings, InMemoryHistory, MatchRecord, Player};
///
/// let standings = vec![
///     Player::new(1, "Ada"),
///     Player::new(2, "Bo"),
///     Player::new(3, "Cy"),
///     Player::new(4, "Di"),
/// ];
/// let history = InMemoryHistory::from_matches(&[MatchRecord::new(1, 2)]);
///
/// let pairs = generate_pairings(&standings, &history).unwrap();
///
/// for p in &pairs {
///     let (id1, name1, id2, name2) = p.as_tuple();
///     println!("{id1} {name1} vs {id2} {name2}");
/// }
/// assert_eq!(pairs[0].ids(), (1, 3));
/// ```

pub mod constants;
pub mod engine;
pub mod error;
pub mod history;
pub mod pairing;
pub mod rematch;
pub mod standings;
pub mod types;

// Re-export primary public API at crate root.
pub use constants::MAX_REPAIR_ATTEMPTS;
pub use engine::{generate_pairings, EngineConfig, PairingEngine};
pub use error::{PairingError, StandingsError};
pub use history::{InMemoryHistory, MatchHistory};
pub use pairing::assemble_pairs;
pub use rematch::{count_conflicts, find_conflict};
pub use standings::{compute_standings, ranked_players, PlayerRecord};
pub use types::{ConflictIndex, MatchRecord, Pair, PairingReport, Player, Swap};
