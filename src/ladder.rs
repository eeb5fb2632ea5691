//! The money ladder
//!
//! Fifteen fixed levels. Levels 5, 10 and 15 are safe havens: once a safe
//! level has been cleared its prize is guaranteed even after a later miss.

use serde::Serialize;

/// One rung of the ladder
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PrizeLadderEntry {
    pub level: usize,
    pub prize: u64,
    pub safe: bool,
}

const fn rung(level: usize, prize: u64, safe: bool) -> PrizeLadderEntry {
    PrizeLadderEntry { level, prize, safe }
}

pub const PRIZE_LADDER: [PrizeLadderEntry; 15] = [
    rung(1, 500, false),
    rung(2, 1_000, false),
    rung(3, 2_000, false),
    rung(4, 3_000, false),
    rung(5, 5_000, true),
    rung(6, 10_000, false),
    rung(7, 15_000, false),
    rung(8, 25_000, false),
    rung(9, 50_000, false),
    rung(10, 100_000, true),
    rung(11, 200_000, false),
    rung(12, 400_000, false),
    rung(13, 800_000, false),
    rung(14, 1_500_000, false),
    rung(15, 3_000_000, true),
];

/// Number of levels a player has to clear to win
pub const LADDER_LEN: usize = PRIZE_LADDER.len();

/// Look up a ladder entry by its 1-based level
pub fn entry(level: usize) -> Option<&'static PrizeLadderEntry> {
    level.checked_sub(1).and_then(|i| PRIZE_LADDER.get(i))
}

/// Payout for a full clear
pub fn top_prize() -> u64 {
    PRIZE_LADDER[LADDER_LEN - 1].prize
}

/// Guaranteed payout after failing `level`.
///
/// Only safe levels strictly below `level` count: missing the safe question
/// itself does not lock in its prize.
pub fn find_safe_prize(level: usize) -> u64 {
    PRIZE_LADDER
        .iter()
        .filter(|e| e.safe && e.level < level)
        .map(|e| e.prize)
        .max()
        .unwrap_or(0)
}
