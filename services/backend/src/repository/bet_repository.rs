use async_trait::async_trait;
use shared::BetId;

use crate::domain::Bet;
use crate::errors::Result;

/// Persistence collaborator for bets
///
/// Implementations store the bet verbatim, keyed by its id.
#[async_trait]
pub trait BetRepository: Send + Sync {
    async fn save(&self, bet: &Bet) -> Result<()>;
    async fn find_by_id(&self, bet_id: &BetId) -> Result<Option<Bet>>;
    /// All stored bets, newest first
    async fn list(&self) -> Result<Vec<Bet>>;
    /// Returns whether a bet was removed
    async fn delete(&self, bet_id: &BetId) -> Result<bool>;
    async fn ping(&self) -> Result<()>;
}
