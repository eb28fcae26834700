/// Maximum number of local repair swaps before pairing gives up.
///
/// Each swap fixes at most one rematch, and a swap can itself create a new
/// rematch further up the list, so some histories never settle. Once the
/// attempt counter goes past this value the engine reports
/// `PairingError::RetryExhausted` instead of looping forever.
///
/// This is a policy constant, not a proven bound: dense histories (late
/// rounds of a small field) can need more swaps than this, or have no
/// adjacent-repair solution at all.
pub const MAX_REPAIR_ATTEMPTS: usize = 100;

/// Minimum number of players needed to form a round.
pub const MIN_PLAYERS: usize = 2;
