use std::sync::Arc;

use crate::domain::BetSummary;
use crate::errors::Result;
use crate::repository::BetRepository;

/// Lists stored bets without their derived payloads
pub struct GetAllBetsInfoService {
    repository: Arc<dyn BetRepository>,
}

impl GetAllBetsInfoService {
    pub fn new(repository: Arc<dyn BetRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<BetSummary>> {
        let bets = self.repository.list().await?;
        Ok(bets.iter().map(BetSummary::from).collect())
    }
}
