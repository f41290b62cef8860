//! Muir fusion energy spectrum.

use super::{fdi, UnivariateDistribution};
use crate::constants::{DT_NEUTRON_MASS_RATIO, E_DT_NEUTRON};
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// Gaussian approximation to the energy spectrum of neutrons born in a
/// thermonuclear fusion reaction.
///
/// The spectrum is centred on the mean emission energy `e0` with standard
/// deviation `sqrt(2 e0 kT / m_rat)`, where `kT` is the ion temperature and
/// `m_rat` the ratio of the summed reactant masses to the neutron mass.
#[derive(Clone, Copy, Debug)]
pub struct Muir {
    mean_energy: fdi,
    mass_ratio: fdi,
    ion_temperature: fdi,
    spectrum: Normal<fdi>,
}

impl Muir {
    /// Creates a new Muir spectrum with mean emission energy `mean_energy`
    /// [eV], reactant-to-neutron mass ratio `mass_ratio` and ion temperature
    /// `ion_temperature` [eV].
    pub fn new(mean_energy: fdi, mass_ratio: fdi, ion_temperature: fdi) -> Self {
        assert!(mean_energy > 0.0, "Mean energy must be positive.");
        assert!(mass_ratio > 0.0, "Mass ratio must be positive.");
        assert!(ion_temperature > 0.0, "Ion temperature must be positive.");

        let std_dev = (2.0 * mean_energy * ion_temperature / mass_ratio).sqrt();
        let spectrum =
            Normal::new(mean_energy, std_dev).expect("Invalid parameters for normal distribution");
        Self {
            mean_energy,
            mass_ratio,
            ion_temperature,
            spectrum,
        }
    }

    /// Creates the Muir spectrum for D-T fusion at the given ion
    /// temperature [eV].
    pub fn dt(ion_temperature: fdi) -> Self {
        Self::new(E_DT_NEUTRON, DT_NEUTRON_MASS_RATIO, ion_temperature)
    }

    /// Mean emission energy [eV].
    pub fn mean_energy(&self) -> fdi {
        self.mean_energy
    }

    /// Reactant-to-neutron mass ratio.
    pub fn mass_ratio(&self) -> fdi {
        self.mass_ratio
    }

    /// Ion temperature [eV].
    pub fn ion_temperature(&self) -> fdi {
        self.ion_temperature
    }

    /// Standard deviation of the emission energy [eV].
    pub fn energy_spread(&self) -> fdi {
        (2.0 * self.mean_energy * self.ion_temperature / self.mass_ratio).sqrt()
    }
}

impl UnivariateDistribution for Muir {
    fn sample(&self, rng: &mut StdRng) -> fdi {
        self.spectrum.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::new_rng;

    #[test]
    fn dt_spectrum_is_centred_on_dt_neutron_energy() {
        let spectrum = Muir::dt(2e4);
        let mut rng = new_rng(Some(8));
        let samples = spectrum.sample_n(100_000, &mut rng);
        let mean = samples.iter().sum::<fdi>() / samples.len() as fdi;
        assert!((mean - E_DT_NEUTRON).abs() < 1e4);
    }

    #[test]
    fn energy_spread_grows_with_ion_temperature() {
        let cold = Muir::dt(1e3);
        let hot = Muir::dt(4e4);
        assert!(hot.energy_spread() > cold.energy_spread());
    }

    #[test]
    fn energy_spread_matches_parametrization() {
        let spectrum = Muir::new(14.08e6, 5.0, 2e4);
        let expected = (2.0 * 14.08e6 * 2e4 / 5.0_f64).sqrt();
        approx::assert_relative_eq!(spectrum.energy_spread(), expected);
    }
}
