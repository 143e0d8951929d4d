use serde::{Deserialize, Serialize};
use shared::Pair;

/// How many draws showed `pair` at a given position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCount {
    #[serde(rename = "numberPair")]
    pub pair: Pair,
    pub count: u32,
}

/// Tally of the pairs observed at one draw position, ascending by pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionFrequency {
    #[serde(rename = "numberCounts")]
    counts: Vec<PairCount>,
}

impl PositionFrequency {
    pub fn new(mut counts: Vec<PairCount>) -> Self {
        counts.sort_unstable_by_key(|c| c.pair);
        Self { counts }
    }

    pub fn counts(&self) -> &[PairCount] {
        &self.counts
    }

    /// Sum of all counts; equals the number of draws for a derived tally
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|c| c.count).sum()
    }

    pub fn pairs(&self) -> impl Iterator<Item = Pair> + '_ {
        self.counts.iter().map(|c| c.pair)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Per-position frequency statistics, mirroring `BetNumbers`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(rename = "statsCollection")]
    positions: Vec<PositionFrequency>,
}

impl Stats {
    /// Not yet generated
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_positions(positions: Vec<PositionFrequency>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[PositionFrequency] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
