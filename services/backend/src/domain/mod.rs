pub mod bet;
pub mod bet_numbers;
pub mod draws;
pub mod pair_exclusion;
pub mod stats;

use serde::{Deserialize, Serialize};
use shared::{BetId, CreationDate};

pub use bet::{Bet, BetError, BetPrimitives};
pub use bet_numbers::{BetNumbers, PairPool};
pub use draws::{validate_draws, DrawError};
pub use stats::{PairCount, PositionFrequency, Stats};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBetRequest {
    pub previous_results: Vec<String>,
    pub generate_bet: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBetResponse {
    pub bet_id: BetId,
}

/// Listing entry for a stored bet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetSummary {
    pub bet_id: BetId,
    pub creation_date: CreationDate,
    pub draw_count: usize,
    pub generated: bool,
}

impl From<&Bet> for BetSummary {
    fn from(bet: &Bet) -> Self {
        Self {
            bet_id: bet.bet_id().clone(),
            creation_date: bet.creation_date().clone(),
            draw_count: bet.previous_results().len(),
            generated: bet.is_generated(),
        }
    }
}
