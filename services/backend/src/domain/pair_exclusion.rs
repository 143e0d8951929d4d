//! Pair exclusion engine
//!
//! Reads every draw through a two-digit sliding window. For each window
//! position it tallies the observed pairs and collects the complement of
//! those pairs against "00".."99". Pure and deterministic: the same draws
//! always produce the same pools and statistics.

use std::collections::BTreeMap;

use shared::Pair;

use super::bet_numbers::{BetNumbers, PairPool};
use super::draws::{pair_at, validate_draws, DrawError};
use super::stats::{PairCount, PositionFrequency, Stats};

/// Derive the recommended pools and frequency statistics from `draws`
pub fn derive(draws: &[String]) -> Result<(BetNumbers, Stats), DrawError> {
    let length = validate_draws(draws)?;
    let positions = length - 1;

    let mut pools = Vec::with_capacity(positions);
    let mut frequencies = Vec::with_capacity(positions);

    for position in 0..positions {
        let tally = tally_position(draws, position);
        pools.push(excluded_pool(&tally));
        frequencies.push(PositionFrequency::new(
            tally
                .into_iter()
                .map(|(pair, count)| PairCount { pair, count })
                .collect(),
        ));
    }

    Ok((
        BetNumbers::from_pools(pools),
        Stats::from_positions(frequencies),
    ))
}

fn tally_position(draws: &[String], position: usize) -> BTreeMap<Pair, u32> {
    let mut tally = BTreeMap::new();
    for pair in draws.iter().filter_map(|draw| pair_at(draw, position)) {
        *tally.entry(pair).or_insert(0) += 1;
    }
    tally
}

fn excluded_pool(observed: &BTreeMap<Pair, u32>) -> PairPool {
    PairPool::new(Pair::all().filter(|p| !observed.contains_key(p)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::PAIR_COUNT;
    use std::collections::BTreeSet;

    fn draws(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn rendered_counts(freq: &PositionFrequency) -> Vec<(String, u32)> {
        freq.counts()
            .iter()
            .map(|c| (c.pair.to_string(), c.count))
            .collect()
    }

    fn expected_pool(excluded: &[&str]) -> Vec<String> {
        (0..100)
            .map(|n| format!("{:02}", n))
            .filter(|p| !excluded.contains(&p.as_str()))
            .collect()
    }

    fn rendered_pool(pool: &PairPool) -> Vec<String> {
        pool.pairs().iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_leading_and_second_position_counts() {
        let input = draws(&["12345", "62384", "79236", "79532", "22984"]);
        let (numbers, stats) = derive(&input).unwrap();

        assert_eq!(numbers.len(), 4);
        assert_eq!(stats.len(), 4);

        assert_eq!(
            rendered_counts(&stats.positions()[0]),
            vec![
                ("12".to_string(), 1),
                ("22".to_string(), 1),
                ("62".to_string(), 1),
                ("79".to_string(), 2),
            ]
        );
        assert_eq!(numbers.pools()[0].len(), 96);
        assert_eq!(
            rendered_pool(&numbers.pools()[0]),
            expected_pool(&["12", "22", "62", "79"])
        );

        assert_eq!(
            rendered_counts(&stats.positions()[1]),
            vec![
                ("23".to_string(), 2),
                ("29".to_string(), 1),
                ("92".to_string(), 1),
                ("95".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_complement_and_conservation_hold_at_every_position() {
        let input = draws(&["12345", "64727", "79176", "94532", "22984", "12399"]);
        let (numbers, stats) = derive(&input).unwrap();

        for (pool, freq) in numbers.pools().iter().zip(stats.positions()) {
            let pooled: BTreeSet<Pair> = pool.pairs().iter().copied().collect();
            let observed: BTreeSet<Pair> = freq.pairs().collect();

            assert!(pooled.is_disjoint(&observed));
            assert_eq!(pooled.len() + observed.len(), PAIR_COUNT);
            assert_eq!(freq.total() as usize, input.len());
            assert!(freq.counts().iter().all(|c| c.count >= 1));
        }
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let input = draws(&["90817", "90817", "00000", "55555"]);
        assert_eq!(derive(&input).unwrap(), derive(&input).unwrap());
    }

    #[test]
    fn test_position_count_follows_draw_length() {
        let (numbers, stats) = derive(&draws(&["07", "70"])).unwrap();
        assert_eq!(numbers.len(), 1);
        assert_eq!(stats.len(), 1);
        assert_eq!(numbers.pools()[0].len(), 98);

        let (numbers, stats) = derive(&draws(&["123456", "654321"])).unwrap();
        assert_eq!(numbers.len(), 5);
        assert_eq!(stats.len(), 5);
    }

    #[test]
    fn test_repeated_pair_within_one_draw_counts_per_position() {
        let (numbers, stats) = derive(&draws(&["1111"])).unwrap();
        for (pool, freq) in numbers.pools().iter().zip(stats.positions()) {
            assert_eq!(rendered_counts(freq), vec![("11".to_string(), 1)]);
            assert_eq!(pool.len(), 99);
            assert!(!pool.contains("11".parse().unwrap()));
        }
    }

    #[test]
    fn test_invalid_draws_propagate() {
        assert_eq!(derive(&[]), Err(DrawError::Empty));
        assert!(matches!(
            derive(&draws(&["12345", "123"])),
            Err(DrawError::LengthMismatch { index: 1, .. })
        ));
        assert!(matches!(
            derive(&draws(&["12-45"])),
            Err(DrawError::NonDigit { index: 0, .. })
        ));
    }

    #[test]
    fn test_unobserved_position_yields_full_pool() {
        let pool = excluded_pool(&BTreeMap::new());
        assert_eq!(pool.len(), PAIR_COUNT);
        assert_eq!(rendered_pool(&pool), expected_pool(&[]));
    }
}
