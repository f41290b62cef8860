//! Utilities related to random numbers.

use crate::num::BFloat;
use rand::{
    distributions::uniform::SampleUniform,
    rngs::StdRng,
    Rng, SeedableRng,
};

/// Creates a new random number generator, seeded with the given value
/// or from operating system entropy if no value is given.
pub fn new_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Derives a reproducible per-member seed from an optional base seed,
/// for use when independent generators are needed across an ensemble.
pub fn derived_seed(base_seed: Option<u64>, member_idx: usize) -> Option<u64> {
    base_seed.map(|seed| seed.wrapping_add(member_idx as u64))
}

/// Samples a single index from the given probability distribution.
///
/// The distribution does not have to be normalized.
pub fn draw_index_from_distribution<F>(pdf: &[F], rng: &mut StdRng) -> usize
where
    F: BFloat + SampleUniform,
{
    let cdf: Vec<F> = pdf
        .iter()
        .scan(F::zero(), |state, &value| {
            *state = *state + value;
            Some(*state)
        })
        .collect();

    let total = cdf[cdf.len() - 1];
    assert!(
        total > F::zero(),
        "Probability distribution must have a positive total weight."
    );

    let sampled_cdf_value = rng.gen_range(F::zero()..total);
    // The drawn entry is the first one whose partial sum exceeds the sampled
    // value, so entries with zero weight can never be selected.
    cdf.partition_point(|&cdf_value| cdf_value <= sampled_cdf_value)
        .min(pdf.len() - 1)
}

/// Samples a given number of indices from the given probability distribution.
///
/// The distribution does not have to be normalized.
pub fn draw_from_distribution<F>(pdf: &[F], n_samples: usize, rng: &mut StdRng) -> Vec<usize>
where
    F: BFloat + SampleUniform,
{
    (0..n_samples)
        .map(|_| draw_index_from_distribution(pdf, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generators_are_reproducible() {
        let mut rng_1 = new_rng(Some(42));
        let mut rng_2 = new_rng(Some(42));
        assert_eq!(rng_1.gen::<u64>(), rng_2.gen::<u64>());
    }

    #[test]
    fn zero_weight_entries_are_never_drawn() {
        let mut rng = new_rng(Some(7));
        let pdf = [0.0, 1.0, 0.0, 2.0];
        for idx in draw_from_distribution(&pdf, 1000, &mut rng) {
            assert!(idx == 1 || idx == 3);
        }
    }

    #[test]
    fn drawn_indices_follow_weights() {
        let mut rng = new_rng(Some(13));
        let pdf = [1.0, 3.0];
        let indices = draw_from_distribution(&pdf, 100_000, &mut rng);
        let n_first = indices.iter().filter(|&&idx| idx == 0).count();
        let fraction = n_first as f64 / indices.len() as f64;
        assert!((fraction - 0.25).abs() < 0.01);
    }
}
