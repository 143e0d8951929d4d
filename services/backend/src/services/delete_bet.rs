use std::sync::Arc;

use shared::BetId;

use crate::errors::{AppError, Result};
use crate::repository::BetRepository;

pub struct DeleteBetService {
    repository: Arc<dyn BetRepository>,
}

impl DeleteBetService {
    pub fn new(repository: Arc<dyn BetRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, bet_id: &BetId) -> Result<()> {
        if !self.repository.delete(bet_id).await? {
            return Err(AppError::not_found(bet_id.to_string()));
        }
        metrics::counter!("bets_deleted_total").increment(1);
        Ok(())
    }
}
