//! Redis key generation functions
//!
//! Centralizes all Redis key patterns used for bet storage and indexing.

use shared::BetId;

/// Redis key prefix for bets
const BET_KEY_PREFIX: &str = "bet:";

/// Redis key for the creation-ordered bet index (sorted set)
const BETS_INDEX: &str = "bets:index";

/// Generate Redis key for a bet
pub fn bet_key(bet_id: &BetId) -> String {
    format!("{}{}", BET_KEY_PREFIX, bet_id)
}

/// Get Redis key for the bet index
pub fn bets_index_key() -> &'static str {
    BETS_INDEX
}
