use serde::{Deserialize, Serialize};
use shared::Pair;

/// Pairs not observed at one draw position, ascending
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairPool {
    #[serde(rename = "pairList")]
    pairs: Vec<Pair>,
}

impl PairPool {
    pub fn new(mut pairs: Vec<Pair>) -> Self {
        pairs.sort_unstable();
        pairs.dedup();
        Self { pairs }
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains(&self, pair: Pair) -> bool {
        self.pairs.binary_search(&pair).is_ok()
    }
}

/// Recommended pair pools, one per draw position
///
/// An empty list means the numbers have not been generated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetNumbers {
    #[serde(rename = "betNumberPairs")]
    pools: Vec<PairPool>,
}

impl BetNumbers {
    /// Not yet generated
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_pools(pools: Vec<PairPool>) -> Self {
        Self { pools }
    }

    pub fn pools(&self) -> &[PairPool] {
        &self.pools
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pair(s: &str) -> Pair {
        s.parse().unwrap()
    }

    #[test]
    fn test_pool_is_sorted_and_deduplicated() {
        let pool = PairPool::new(vec![pair("42"), pair("07"), pair("42"), pair("00")]);
        let rendered: Vec<String> = pool.pairs().iter().map(|p| p.to_string()).collect();
        assert_eq!(rendered, vec!["00", "07", "42"]);
        assert!(pool.contains(pair("07")));
        assert!(!pool.contains(pair("08")));
    }

    #[test]
    fn test_empty_bet_numbers_shape() {
        let value = serde_json::to_value(BetNumbers::empty()).unwrap();
        assert_eq!(value, json!({ "betNumberPairs": [] }));
    }

    #[test]
    fn test_populated_bet_numbers_shape() {
        let numbers = BetNumbers::from_pools(vec![PairPool::new(vec![pair("01"), pair("99")])]);
        let value = serde_json::to_value(&numbers).unwrap();
        assert_eq!(
            value,
            json!({ "betNumberPairs": [ { "pairList": ["01", "99"] } ] })
        );
    }
}
