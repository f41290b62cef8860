//! Uniform distribution over an interval.

use super::{fdi, UnivariateDistribution};
use rand::{rngs::StdRng, Rng};

/// Uniform probability distribution over the half-open interval
/// `[lower, upper)`.
#[derive(Clone, Copy, Debug)]
pub struct Uniform {
    lower: fdi,
    upper: fdi,
}

impl Uniform {
    /// Creates a new uniform distribution over the given interval.
    pub fn new(lower: fdi, upper: fdi) -> Self {
        assert!(
            lower.is_finite() && upper.is_finite(),
            "Interval bounds must be finite."
        );
        assert!(
            upper >= lower,
            "Upper bound must not be smaller than lower bound."
        );
        Self { lower, upper }
    }

    /// Lower bound of the interval.
    pub fn lower(&self) -> fdi {
        self.lower
    }

    /// Upper bound of the interval.
    pub fn upper(&self) -> fdi {
        self.upper
    }
}

impl UnivariateDistribution for Uniform {
    fn sample(&self, rng: &mut StdRng) -> fdi {
        if self.upper == self.lower {
            self.lower
        } else {
            rng.gen_range(self.lower..self.upper)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::new_rng;

    #[test]
    fn samples_stay_within_interval() {
        let distribution = Uniform::new(-1.5, 2.5);
        let mut rng = new_rng(Some(3));
        for value in distribution.sample_n(10_000, &mut rng) {
            assert!(value >= -1.5 && value < 2.5);
        }
    }

    #[test]
    fn degenerate_interval_collapses_to_bound() {
        let distribution = Uniform::new(4.0, 4.0);
        let mut rng = new_rng(Some(4));
        assert_eq!(distribution.sample(&mut rng), 4.0);
    }

    #[test]
    #[should_panic]
    fn inverted_interval_is_rejected() {
        let _ = Uniform::new(1.0, 0.0);
    }
}
