//! Seed drawing
//!
//! Seeds are drawn without replacement from a ChaCha8 generator created
//! fresh for every run, so the draw only depends on the seed value and the
//! candidate order.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::CandidateSet;

pub const DEFAULT_RANDOM_SEED: u64 = 42;

/// Draws up to N distinct candidate ids
pub struct SeedSampler {
    rng: ChaCha8Rng,
}

impl SeedSampler {
    pub fn new(random_seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(random_seed),
        }
    }

    /// Draw `min(budget, candidates.len())` ids in draw order.
    pub fn draw<'i>(&mut self, candidates: &CandidateSet<'i>, budget: usize) -> Vec<&'i str> {
        let amount = budget.min(candidates.len());
        let seeds: Vec<&'i str> =
            rand::seq::index::sample(&mut self.rng, candidates.len(), amount)
                .into_iter()
                .filter_map(|position| candidates.id_at(position))
                .collect();
        debug!(
            "Drew {} seeds from {} candidates (budget {})",
            seeds.len(),
            candidates.len(),
            budget
        );
        seeds
    }
}

impl Default for SeedSampler {
    fn default() -> Self {
        Self::new(DEFAULT_RANDOM_SEED)
    }
}
