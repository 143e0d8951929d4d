use std::sync::Arc;

use shared::BetId;

use crate::domain::Bet;
use crate::errors::{AppError, Result};
use crate::repository::BetRepository;

pub struct GetBetService {
    repository: Arc<dyn BetRepository>,
}

impl GetBetService {
    pub fn new(repository: Arc<dyn BetRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, bet_id: &BetId) -> Result<Bet> {
        self.repository
            .find_by_id(bet_id)
            .await?
            .ok_or_else(|| AppError::not_found(bet_id.to_string()))
    }
}
