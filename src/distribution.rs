//! Univariate probability distributions for particle source configuration.

pub mod discrete;
pub mod muir;
pub mod uniform;
pub mod watt;

use rand::rngs::StdRng;
use std::fmt;

/// Floating-point precision to use for distribution sampling.
#[allow(non_camel_case_types)]
pub type fdi = f64;

/// Defines the properties of a univariate probability distribution.
pub trait UnivariateDistribution: Sync + Send + fmt::Debug {
    /// Draws a single value from the distribution.
    fn sample(&self, rng: &mut StdRng) -> fdi;

    /// Draws the given number of values from the distribution.
    fn sample_n(&self, n_samples: usize, rng: &mut StdRng) -> Vec<fdi> {
        (0..n_samples).map(|_| self.sample(rng)).collect()
    }
}
