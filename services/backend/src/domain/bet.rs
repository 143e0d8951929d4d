use serde::{Deserialize, Serialize};
use shared::{BetId, CreationDate, ValidationError};
use thiserror::Error;

use super::bet_numbers::BetNumbers;
use super::draws::{validate_draws, DrawError};
use super::pair_exclusion;
use super::stats::Stats;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BetError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid draw length: {0}")]
    Draws(#[from] DrawError),

    #[error("bet numbers and stats do not match the previous results")]
    DerivedMismatch,
}

/// Bet aggregate
///
/// Owns the historical draws it was created from plus the pools and
/// statistics derived from them. `bet_numbers` and `stats` are either both
/// empty (not generated) or both hold one entry per draw position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BetPrimitives", into = "BetPrimitives")]
pub struct Bet {
    bet_id: BetId,
    creation_date: CreationDate,
    previous_results: Vec<String>,
    bet_numbers: BetNumbers,
    stats: Stats,
}

/// Stored and wire representation of a `Bet`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetPrimitives {
    pub bet_id: String,
    pub creation_date: String,
    pub previous_results: Vec<String>,
    pub bet_numbers: BetNumbers,
    pub stats: Stats,
}

impl Bet {
    /// New bet with nothing generated yet
    pub fn new(
        bet_id: BetId,
        creation_date: CreationDate,
        previous_results: Vec<String>,
    ) -> Result<Self, DrawError> {
        validate_draws(&previous_results)?;

        Ok(Self {
            bet_id,
            creation_date,
            previous_results,
            bet_numbers: BetNumbers::empty(),
            stats: Stats::empty(),
        })
    }

    /// Derive pools and statistics from the stored draws, replacing any
    /// earlier result. Running it again yields the same values.
    pub fn generate_bet_numbers(&mut self) -> Result<(), DrawError> {
        let (bet_numbers, stats) = pair_exclusion::derive(&self.previous_results)?;
        self.bet_numbers = bet_numbers;
        self.stats = stats;
        Ok(())
    }

    pub fn bet_id(&self) -> &BetId {
        &self.bet_id
    }

    pub fn creation_date(&self) -> &CreationDate {
        &self.creation_date
    }

    pub fn previous_results(&self) -> &[String] {
        &self.previous_results
    }

    pub fn bet_numbers(&self) -> &BetNumbers {
        &self.bet_numbers
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn is_generated(&self) -> bool {
        !self.bet_numbers.is_empty()
    }

    pub fn to_primitives(&self) -> BetPrimitives {
        self.clone().into()
    }

    pub fn from_primitives(primitives: BetPrimitives) -> Result<Self, BetError> {
        let bet_id = BetId::try_from(primitives.bet_id)?;
        let creation_date = CreationDate::try_from(primitives.creation_date)?;
        let mut bet = Bet::new(bet_id, creation_date, primitives.previous_results)?;

        if !primitives.bet_numbers.is_empty() || !primitives.stats.is_empty() {
            bet.generate_bet_numbers()?;
            if bet.bet_numbers != primitives.bet_numbers || bet.stats != primitives.stats {
                return Err(BetError::DerivedMismatch);
            }
        }

        Ok(bet)
    }
}

impl From<Bet> for BetPrimitives {
    fn from(bet: Bet) -> Self {
        Self {
            bet_id: bet.bet_id.into_string(),
            creation_date: bet.creation_date.into(),
            previous_results: bet.previous_results,
            bet_numbers: bet.bet_numbers,
            stats: bet.stats,
        }
    }
}

impl TryFrom<BetPrimitives> for Bet {
    type Error = BetError;

    fn try_from(primitives: BetPrimitives) -> Result<Self, Self::Error> {
        Bet::from_primitives(primitives)
    }
}
