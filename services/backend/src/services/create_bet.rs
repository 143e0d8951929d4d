//! Bet creation workflow
//!
//! Id, timestamp, optional pair derivation, then exactly one save. Any
//! failure aborts before storage is touched and is returned as-is.

use std::sync::Arc;

use crate::domain::{Bet, CreateBetRequest, CreateBetResponse};
use crate::errors::Result;
use crate::generators::{Clock, IdGenerator};
use crate::repository::BetRepository;

pub struct CreateBetService {
    repository: Arc<dyn BetRepository>,
    id_generator: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl CreateBetService {
    pub fn new(
        repository: Arc<dyn BetRepository>,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            id_generator,
            clock,
        }
    }

    pub async fn execute(&self, request: CreateBetRequest) -> Result<CreateBetResponse> {
        let bet_id = self.id_generator.new_id()?;
        let creation_date = self.clock.now()?;

        let mut bet = Bet::new(bet_id, creation_date, request.previous_results)?;
        if request.generate_bet {
            bet.generate_bet_numbers()?;
        }

        tracing::debug!(
            bet_id = %bet.bet_id(),
            positions = bet.bet_numbers().len(),
            "Saving bet"
        );
        self.repository.save(&bet).await?;
        metrics::counter!("bets_created_total").increment(1);
        if bet.is_generated() {
            metrics::counter!("bets_generated_total").increment(1);
        }

        Ok(CreateBetResponse {
            bet_id: bet.bet_id().clone(),
        })
    }
}
