//! Uniform random phrase selection.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Picks one phrase uniformly at random from a candidate slice.
#[derive(Debug)]
pub struct PhrasePicker {
    rng: StdRng,
}

impl PhrasePicker {
    /// Picker seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic picker for reproducible sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose one candidate.  `None` when `candidates` is empty, in which case
    /// the caller skips the dispatch.
    pub fn pick<'a>(&mut self, candidates: &'a [String]) -> Option<&'a str> {
        candidates.choose(&mut self.rng).map(String::as_str)
    }
}

impl Default for PhrasePicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("phrase {i}")).collect()
    }

    #[test]
    fn empty_pool_yields_none() {
        let mut picker = PhrasePicker::seeded(7);
        assert_eq!(picker.pick(&[]), None);
    }

    #[test]
    fn single_entry_is_always_chosen() {
        let mut picker = PhrasePicker::seeded(7);
        let candidates = pool(1);
        for _ in 0..50 {
            assert_eq!(picker.pick(&candidates), Some("phrase 0"));
        }
    }

    #[test]
    fn every_entry_is_reachable() {
        for n in 1..=5 {
            let candidates = pool(n);
            let mut picker = PhrasePicker::seeded(42);
            let mut hits = vec![0usize; n];
            for _ in 0..1000 {
                let chosen = picker.pick(&candidates).unwrap();
                let idx = candidates.iter().position(|c| c == chosen).unwrap();
                hits[idx] += 1;
            }
            assert!(hits.iter().all(|&h| h > 0), "unreachable entry for n={n}: {hits:?}");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let candidates = pool(4);
        let mut a = PhrasePicker::seeded(3);
        let mut b = PhrasePicker::seeded(3);
        for _ in 0..20 {
            assert_eq!(a.pick(&candidates), b.pick(&candidates));
        }
    }
}
