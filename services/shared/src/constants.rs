/// Shared constants for the lottery bets service
///
/// Centralizes the draw format and identifier limits so the backend and
/// any future consumers agree on the same shapes.

/// Number of distinct two-digit pairs ("00".."99")
pub const PAIR_COUNT: usize = 100;

/// Width of the sliding window used to read pairs out of a draw
pub const PAIR_WIDTH: usize = 2;

/// Shortest draw that still yields one positional pair
pub const MIN_DRAW_LENGTH: usize = PAIR_WIDTH;

/// Maximum bet ID length
///
/// Hyphenated UUIDs are 36 chars; the limit leaves room for other opaque
/// identifier schemes without letting unbounded keys into storage.
pub const MAX_BET_ID_LENGTH: usize = 64;
