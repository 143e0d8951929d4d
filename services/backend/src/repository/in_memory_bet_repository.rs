use async_trait::async_trait;
use shared::BetId;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::Bet;
use crate::errors::Result;

use super::BetRepository;

/// Process-local bet storage
///
/// Used for `STORAGE_BACKEND=memory` and by tests. Contents are lost on
/// restart.
#[derive(Debug, Default)]
pub struct InMemoryBetRepository {
    bets: RwLock<HashMap<BetId, Bet>>,
}

impl InMemoryBetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_empty(&self) -> bool {
        self.bets.read().await.is_empty()
    }
}

#[async_trait]
impl BetRepository for InMemoryBetRepository {
    async fn save(&self, bet: &Bet) -> Result<()> {
        self.bets
            .write()
            .await
            .insert(bet.bet_id().clone(), bet.clone());
        Ok(())
    }

    async fn find_by_id(&self, bet_id: &BetId) -> Result<Option<Bet>> {
        Ok(self.bets.read().await.get(bet_id).cloned())
    }

    async fn list(&self) -> Result<Vec<Bet>> {
        let mut bets: Vec<Bet> = self.bets.read().await.values().cloned().collect();
        bets.sort_by(|a, b| {
            b.creation_date()
                .instant()
                .cmp(&a.creation_date().instant())
                .then_with(|| b.bet_id().cmp(a.bet_id()))
        });
        Ok(bets)
    }

    async fn delete(&self, bet_id: &BetId) -> Result<bool> {
        Ok(self.bets.write().await.remove(bet_id).is_some())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
