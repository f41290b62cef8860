//! Distribution over a discrete set of values.

use super::{fdi, UnivariateDistribution};
use crate::random;
use rand::rngs::StdRng;

/// Probability distribution over a fixed set of values with associated
/// probabilities.
#[derive(Clone, Debug)]
pub struct Discrete {
    values: Vec<fdi>,
    probabilities: Vec<fdi>,
}

impl Discrete {
    /// Creates a new discrete distribution from the given values and
    /// probabilities.
    ///
    /// The probabilities do not have to be normalized.
    pub fn new(values: Vec<fdi>, probabilities: Vec<fdi>) -> Self {
        assert!(
            !values.is_empty(),
            "Discrete distribution must have at least one value."
        );
        assert_eq!(
            values.len(),
            probabilities.len(),
            "Number of probabilities must match number of values."
        );
        assert!(
            probabilities.iter().all(|&p| p.is_finite() && p >= 0.0),
            "Probabilities must be finite and non-negative."
        );
        let total: fdi = probabilities.iter().sum();
        assert!(total > 0.0, "Probabilities must not all be zero.");

        let probabilities = probabilities.into_iter().map(|p| p / total).collect();
        Self {
            values,
            probabilities,
        }
    }

    /// Creates a distribution assigning probability one to a single value.
    pub fn single(value: fdi) -> Self {
        Self::new(vec![value], vec![1.0])
    }

    /// Returns the values the distribution can produce.
    pub fn values(&self) -> &[fdi] {
        &self.values
    }

    /// Returns the normalized probability of each value.
    pub fn probabilities(&self) -> &[fdi] {
        &self.probabilities
    }
}

impl UnivariateDistribution for Discrete {
    fn sample(&self, rng: &mut StdRng) -> fdi {
        self.values[random::draw_index_from_distribution(&self.probabilities, rng)]
    }
}
