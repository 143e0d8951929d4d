//! Encoding of bets as Redis string values
//!
//! A bet is stored as its JSON primitives document; reading it back runs
//! the same validation as any other `Bet` deserialization.

use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use shared::BetId;

use super::keys::bet_key;
use crate::domain::Bet;
use crate::errors::{AppError, Result};

pub fn encode_bet(bet: &Bet) -> Result<String> {
    serde_json::to_string(bet)
        .map_err(|e| AppError::Serialization(format!("bet {}: {}", bet.bet_id(), e)))
}

pub fn decode_bet(bet_id: &BetId, raw: &str) -> Result<Bet> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::Deserialization(format!("bet {}: {}", bet_id, e)))
}

/// Load a bet from Redis
///
/// # Returns
/// * `Ok(Some(bet))` - Bet found and parsed successfully
/// * `Ok(None)` - Bet not found
/// * `Err(...)` - Redis error or parsing error
pub async fn load_bet(redis: &mut ConnectionManager, bet_id: &BetId) -> Result<Option<Bet>> {
    let raw: Option<String> = redis.get(bet_key(bet_id)).await?;
    raw.map(|raw| decode_bet(bet_id, &raw)).transpose()
}
