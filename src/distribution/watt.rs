//! Watt fission energy spectrum.

use super::{fdi, UnivariateDistribution};
use crate::constants::{PI, WATT_U235_A, WATT_U235_B};
use rand::{rngs::StdRng, Rng};

/// Watt fission spectrum with probability density
/// `p(E) ∝ exp(-E/a) sinh(sqrt(b E))`.
///
/// Energies are sampled with the Everett-Cashwell method: a sub-sample is
/// drawn from a Maxwellian spectrum with temperature `a` and shifted by
/// `a^2 b / 4` plus a symmetric square-root term.
#[derive(Clone, Copy, Debug)]
pub struct Watt {
    a: fdi,
    b: fdi,
}

impl Watt {
    /// Creates a new Watt spectrum with the given coefficients,
    /// `a` in [eV] and `b` in [1/eV].
    pub fn new(a: fdi, b: fdi) -> Self {
        assert!(a > 0.0, "Watt coefficient a must be positive.");
        assert!(b > 0.0, "Watt coefficient b must be positive.");
        Self { a, b }
    }

    /// Creates the Watt spectrum for thermal fission of U-235.
    pub fn thermal_u235() -> Self {
        Self::new(WATT_U235_A, WATT_U235_B)
    }

    /// Mean energy of the spectrum [eV].
    pub fn mean_energy(&self) -> fdi {
        1.5 * self.a + 0.25 * self.a * self.a * self.b
    }
}

impl UnivariateDistribution for Watt {
    fn sample(&self, rng: &mut StdRng) -> fdi {
        let shift = 0.25 * self.a * self.a * self.b;
        let maxwellian_energy = sample_maxwellian(self.a, rng);
        let offset_sign = rng.gen_range(-1.0..1.0);
        maxwellian_energy + shift + offset_sign * (4.0 * shift * maxwellian_energy).sqrt()
    }
}

/// Draws an energy from a Maxwellian spectrum `p(E) ∝ sqrt(E) exp(-E/t)`
/// with the given temperature parameter `t`.
pub(super) fn sample_maxwellian(t: fdi, rng: &mut StdRng) -> fdi {
    // Random numbers are drawn from (0, 1] so the logarithms stay finite.
    let r1 = 1.0 - rng.gen::<fdi>();
    let r2 = 1.0 - rng.gen::<fdi>();
    let r3 = rng.gen::<fdi>();
    let cos_factor = (0.5 * PI * r3).cos();
    -t * (r1.ln() + r2.ln() * cos_factor * cos_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::new_rng;

    #[test]
    fn samples_are_non_negative() {
        let spectrum = Watt::thermal_u235();
        let mut rng = new_rng(Some(5));
        for energy in spectrum.sample_n(10_000, &mut rng) {
            assert!(energy >= 0.0);
        }
    }

    #[test]
    fn sample_mean_matches_analytic_mean() {
        let spectrum = Watt::thermal_u235();
        let mut rng = new_rng(Some(6));
        let samples = spectrum.sample_n(200_000, &mut rng);
        let mean = samples.iter().sum::<fdi>() / samples.len() as fdi;
        let relative_deviation = (mean - spectrum.mean_energy()).abs() / spectrum.mean_energy();
        assert!(relative_deviation < 0.02);
    }

    #[test]
    fn maxwellian_sample_mean_is_three_halves_temperature() {
        let mut rng = new_rng(Some(7));
        let t = 2e6;
        let mean = (0..200_000)
            .map(|_| sample_maxwellian(t, &mut rng))
            .sum::<fdi>()
            / 200_000.0;
        assert!((mean - 1.5 * t).abs() / (1.5 * t) < 0.02);
    }
}
