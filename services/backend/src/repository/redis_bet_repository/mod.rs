//! Redis-based BetRepository implementation
//!
//! Each bet is stored as a JSON document under its own key, with a sorted
//! set indexing bet ids by creation time.

mod deserialization;
mod keys;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use shared::BetId;

use crate::domain::Bet;
use crate::errors::Result;

pub use deserialization::*;
pub use keys::*;

/// Redis-based implementation of BetRepository
#[derive(Clone)]
pub struct RedisBetRepository {
    redis: ConnectionManager,
}

impl RedisBetRepository {
    /// Create a new RedisBetRepository
    pub fn new(redis: ConnectionManager) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl super::BetRepository for RedisBetRepository {
    async fn save(&self, bet: &Bet) -> Result<()> {
        let document = encode_bet(bet)?;
        let score = bet.creation_date().timestamp_millis();

        let mut redis_conn = self.redis.clone();
        let mut pipe = redis::pipe();
        pipe.atomic();

        let _: () = pipe
            .set(bet_key(bet.bet_id()), document)
            .ignore()
            .zadd(bets_index_key(), bet.bet_id().as_str(), score)
            .ignore()
            .query_async(&mut redis_conn)
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, bet_id: &BetId) -> Result<Option<Bet>> {
        let mut redis_conn = self.redis.clone();
        load_bet(&mut redis_conn, bet_id).await
    }

    async fn list(&self) -> Result<Vec<Bet>> {
        let mut redis_conn = self.redis.clone();
        let ids: Vec<String> = redis_conn.zrevrange(bets_index_key(), 0, -1).await?;

        let mut bets = Vec::with_capacity(ids.len());
        for id_str in ids {
            let id = match BetId::try_from(id_str.as_str()) {
                Ok(id) => id,
                Err(e) => {
                    tracing::warn!(index_entry = %id_str, error = %e, "Skipping invalid bet id in index");
                    continue;
                }
            };
            if let Some(bet) = load_bet(&mut redis_conn, &id).await? {
                bets.push(bet);
            }
        }

        Ok(bets)
    }

    async fn delete(&self, bet_id: &BetId) -> Result<bool> {
        let mut redis_conn = self.redis.clone();
        let mut pipe = redis::pipe();
        pipe.atomic();

        let (removed, _): (i64, i64) = pipe
            .del(bet_key(bet_id))
            .zrem(bets_index_key(), bet_id.as_str())
            .query_async(&mut redis_conn)
            .await?;

        Ok(removed > 0)
    }

    async fn ping(&self) -> Result<()> {
        let mut redis_conn = self.redis.clone();
        let _: String = redis::cmd("PING").query_async(&mut redis_conn).await?;
        Ok(())
    }
}
