//! Tokamak equilibrium plasma source.
//!
//! A toroidal plasma volume is approximated by a discrete set of point-like
//! emitters. Emitter positions are drawn from a shifted D-shaped
//! flux-surface parametrization of the equilibrium cross-section, and each
//! emitter carries a Muir energy spectrum evaluated at the local ion
//! temperature and a strength proportional to the local D-T neutron
//! emissivity.

use super::fpl;
use crate::{
    constants::KEV_TO_EV,
    distribution::muir::Muir,
    geometry::Point3,
    random,
    source::{angular::Isotropic, spatial::FixedPoint, IndependentSource},
};
use rand::Rng;

/// Operating mode of the plasma, determining the shape of the ion density
/// and temperature profiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlasmaMode {
    /// High-confinement mode, with a pedestal near the plasma edge.
    H,
    /// Low-confinement mode, with profiles decaying smoothly to the edge.
    L,
    /// Advanced mode, treated with the same pedestal profiles as H-mode.
    A,
}

impl PlasmaMode {
    fn has_pedestal(&self) -> bool {
        !matches!(self, PlasmaMode::L)
    }
}

impl std::str::FromStr for PlasmaMode {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "H" | "h" => Ok(PlasmaMode::H),
            "L" | "l" => Ok(PlasmaMode::L),
            "A" | "a" => Ok(PlasmaMode::A),
            invalid => Err(format!("Invalid plasma mode {}", invalid)),
        }
    }
}

/// Configuration parameters for a tokamak plasma source.
#[derive(Clone, Debug)]
pub struct TokamakSourceConfig {
    /// Major radius of the plasma torus [cm].
    pub major_radius: fpl,
    /// Minor radius of the plasma cross-section [cm].
    pub minor_radius: fpl,
    /// Vertical elongation of the cross-section.
    pub elongation: fpl,
    /// Triangularity of the cross-section.
    pub triangularity: fpl,
    /// Minor radius where the pedestal region begins [cm].
    pub pedestal_radius: fpl,
    /// Shafranov shift of the innermost flux surfaces [cm].
    pub shafranov_factor: fpl,
    /// Ion density on the magnetic axis [1/m^3].
    pub ion_density_centre: fpl,
    /// Peaking factor of the core ion density profile.
    pub ion_density_peaking_factor: fpl,
    /// Ion density at the pedestal [1/m^3].
    pub ion_density_pedestal: fpl,
    /// Ion density at the separatrix [1/m^3].
    pub ion_density_separatrix: fpl,
    /// Ion temperature on the magnetic axis [keV].
    pub ion_temperature_centre: fpl,
    /// Peaking factor of the core ion temperature profile.
    pub ion_temperature_peaking_factor: fpl,
    /// Exponent shaping the core ion temperature profile.
    pub ion_temperature_beta: fpl,
    /// Ion temperature at the pedestal [keV].
    pub ion_temperature_pedestal: fpl,
    /// Ion temperature at the separatrix [keV].
    pub ion_temperature_separatrix: fpl,
    /// Operating mode of the plasma.
    pub mode: PlasmaMode,
    /// Number of point-like emitters to approximate the plasma with.
    pub sample_size: usize,
    /// Range of toroidal angles to place emitters in [rad].
    pub angles: (fpl, fpl),
}

impl Default for TokamakSourceConfig {
    /// ITER-like reference configuration.
    fn default() -> Self {
        Self {
            major_radius: 906.0,
            minor_radius: 292.0,
            elongation: 1.557,
            triangularity: 0.270,
            pedestal_radius: 0.8 * 292.0,
            shafranov_factor: 44.789,
            ion_density_centre: 1.09e20,
            ion_density_peaking_factor: 1.0,
            ion_density_pedestal: 1.09e20,
            ion_density_separatrix: 3.0e19,
            ion_temperature_centre: 45.9,
            ion_temperature_peaking_factor: 8.06,
            ion_temperature_beta: 6.0,
            ion_temperature_pedestal: 6.09,
            ion_temperature_separatrix: 0.1,
            mode: PlasmaMode::H,
            sample_size: 50,
            angles: (0.0, 2.0 * crate::constants::PI),
        }
    }
}

impl TokamakSourceConfig {
    /// Panics if any parameter combination is inconsistent.
    pub fn validate(&self) {
        assert!(
            self.minor_radius > 0.0 && self.major_radius > self.minor_radius,
            "Major radius must exceed the minor radius and both must be positive."
        );
        assert!(
            self.pedestal_radius > 0.0 && self.pedestal_radius < self.minor_radius,
            "Pedestal radius must lie strictly inside the minor radius."
        );
        assert!(
            self.shafranov_factor.abs() < 0.5 * self.minor_radius,
            "Shafranov factor must be smaller than half the minor radius."
        );
        assert!(self.elongation > 0.0, "Elongation must be positive.");
        assert!(
            self.triangularity.abs() <= 1.0,
            "Triangularity must lie in [-1, 1]."
        );
        assert!(
            self.ion_density_centre > 0.0
                && self.ion_density_pedestal > 0.0
                && self.ion_density_separatrix > 0.0,
            "Ion densities must be positive."
        );
        assert!(
            self.ion_temperature_centre > 0.0
                && self.ion_temperature_pedestal > 0.0
                && self.ion_temperature_separatrix > 0.0,
            "Ion temperatures must be positive."
        );
        assert_ne!(self.sample_size, 0, "Sample size must be larger than zero.");
        assert!(
            self.angles.1 >= self.angles.0,
            "Upper toroidal angle must not be smaller than lower toroidal angle."
        );
    }

    /// Ion density [1/m^3] at the given distance from the magnetic
    /// axis [cm].
    pub fn ion_density(&self, radius: fpl) -> fpl {
        if self.mode.has_pedestal() {
            if radius < self.pedestal_radius {
                let shape = 1.0 - (radius / self.pedestal_radius).powi(2);
                (self.ion_density_centre - self.ion_density_pedestal)
                    * shape.powf(self.ion_density_peaking_factor)
                    + self.ion_density_pedestal
            } else {
                let edge_fraction =
                    (self.minor_radius - radius) / (self.minor_radius - self.pedestal_radius);
                (self.ion_density_pedestal - self.ion_density_separatrix) * edge_fraction
                    + self.ion_density_separatrix
            }
        } else {
            let shape = 1.0 - (radius / self.minor_radius).powi(2);
            self.ion_density_centre * shape.max(0.0).powf(self.ion_density_peaking_factor)
        }
    }

    /// Ion temperature [keV] at the given distance from the magnetic
    /// axis [cm].
    pub fn ion_temperature(&self, radius: fpl) -> fpl {
        if self.mode.has_pedestal() {
            if radius < self.pedestal_radius {
                let shape = 1.0 - (radius / self.pedestal_radius).powf(self.ion_temperature_beta);
                (self.ion_temperature_centre - self.ion_temperature_pedestal)
                    * shape.powf(self.ion_temperature_peaking_factor)
                    + self.ion_temperature_pedestal
            } else {
                let edge_fraction =
                    (self.minor_radius - radius) / (self.minor_radius - self.pedestal_radius);
                (self.ion_temperature_pedestal - self.ion_temperature_separatrix) * edge_fraction
                    + self.ion_temperature_separatrix
            }
        } else {
            let shape = 1.0 - (radius / self.minor_radius).powi(2);
            self.ion_temperature_centre
                * shape.max(0.0).powf(self.ion_temperature_peaking_factor)
        }
    }

    /// Converts a flux-surface coordinate (minor radius [cm], poloidal
    /// angle [rad]) into a (major radius, height) position [cm] using the
    /// shifted D-shape parametrization of the equilibrium.
    pub fn flux_surface_position(&self, radius: fpl, poloidal_angle: fpl) -> (fpl, fpl) {
        let normalized = radius / self.minor_radius;
        let shafranov_shift = self.shafranov_factor * (1.0 - normalized * normalized);
        let major = self.major_radius
            + radius * (poloidal_angle + self.triangularity * poloidal_angle.sin()).cos()
            + shafranov_shift;
        let height = self.elongation * radius * poloidal_angle.sin();
        (major, height)
    }

    /// Local D-T neutron emissivity [arbitrary units] for the given ion
    /// density [1/m^3] and temperature [keV].
    pub fn neutron_source_density(&self, ion_density: fpl, ion_temperature: fpl) -> fpl {
        ion_density * ion_density * dt_reactivity(ion_temperature)
    }

    /// Generates the ensemble of point-like sources approximating the
    /// plasma volume.
    ///
    /// The returned list contains exactly `sample_size` sources whose
    /// strengths are normalized to sum to one.
    pub fn make_sources(&self, seed: Option<u64>) -> Vec<IndependentSource> {
        self.validate();

        let mut rng = random::new_rng(seed);

        let minor_radii: Vec<fpl> = (0..self.sample_size)
            .map(|_| rng.gen_range(0.0..self.minor_radius))
            .collect();
        let poloidal_angles: Vec<fpl> = (0..self.sample_size)
            .map(|_| rng.gen_range(0.0..2.0 * crate::constants::PI))
            .collect();
        let toroidal_angles: Vec<fpl> = (0..self.sample_size)
            .map(|_| {
                if self.angles.1 == self.angles.0 {
                    self.angles.0
                } else {
                    rng.gen_range(self.angles.0..self.angles.1)
                }
            })
            .collect();

        let emissivities: Vec<fpl> = minor_radii
            .iter()
            .map(|&radius| {
                self.neutron_source_density(self.ion_density(radius), self.ion_temperature(radius))
            })
            .collect();
        let total_emissivity: fpl = emissivities.iter().sum();
        assert!(
            total_emissivity > 0.0,
            "Plasma configuration produces no neutron emission."
        );

        minor_radii
            .iter()
            .zip(poloidal_angles.iter())
            .zip(toroidal_angles.iter())
            .zip(emissivities.iter())
            .map(|(((&radius, &poloidal), &toroidal), &emissivity)| {
                let (major, height) = self.flux_surface_position(radius, poloidal);
                let position =
                    Point3::new(major * toroidal.cos(), major * toroidal.sin(), height);
                let ion_temperature_ev = self.ion_temperature(radius) * KEV_TO_EV;

                IndependentSource::new(
                    Box::new(FixedPoint::new(position)),
                    Box::new(Isotropic),
                    Box::new(Muir::dt(ion_temperature_ev)),
                )
                .with_strength(emissivity / total_emissivity)
            })
            .collect()
    }
}

/// D-T fusion reactivity `<sigma v>` [m^3/s] at the given ion
/// temperature [keV], using the NRL Plasma Formulary approximation
/// valid below 100 keV.
pub fn dt_reactivity(ion_temperature: fpl) -> fpl {
    // Below this temperature the reactivity is treated as negligible.
    const MIN_TEMPERATURE: fpl = 0.1;
    let temperature = ion_temperature.max(MIN_TEMPERATURE);
    3.68e-18 / temperature.powf(2.0 / 3.0) * (-19.94 / temperature.powf(1.0 / 3.0)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ensemble_size_matches_configured_sample_size() {
        let config = TokamakSourceConfig::default();
        let sources = config.make_sources(Some(18));
        assert_eq!(sources.len(), config.sample_size);
    }

    #[test]
    fn source_strengths_are_normalized() {
        let config = TokamakSourceConfig::default();
        let sources = config.make_sources(Some(19));
        let total: fpl = sources.iter().map(|source| source.strength()).sum();
        assert_relative_eq!(total, 1.0, max_relative = 1e-12);
        assert!(sources.iter().all(|source| source.strength() >= 0.0));
    }

    #[test]
    fn profiles_interpolate_between_centre_and_separatrix() {
        let config = TokamakSourceConfig::default();
        assert_relative_eq!(config.ion_density(0.0), config.ion_density_centre);
        assert_relative_eq!(
            config.ion_density(config.minor_radius),
            config.ion_density_separatrix
        );
        assert_relative_eq!(
            config.ion_temperature(0.0),
            config.ion_temperature_centre,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            config.ion_temperature(config.minor_radius),
            config.ion_temperature_separatrix
        );
    }

    #[test]
    fn l_mode_profiles_decay_monotonically() {
        let config = TokamakSourceConfig {
            mode: PlasmaMode::L,
            ..TokamakSourceConfig::default()
        };
        let mut previous = config.ion_temperature(0.0);
        for step in 1..=10 {
            let radius = config.minor_radius * step as fpl / 10.0;
            let temperature = config.ion_temperature(radius);
            assert!(temperature <= previous);
            previous = temperature;
        }
    }

    #[test]
    fn emitters_stay_within_the_plasma_envelope() {
        let config = TokamakSourceConfig::default();
        let max_offset = config.minor_radius + config.shafranov_factor.abs();
        for source in config.make_sources(Some(20)) {
            let mut rng = crate::random::new_rng(Some(21));
            let particle = source.sample_particle(&mut rng);
            let major = particle.position().cylindrical_radius();
            assert!(major > config.major_radius - max_offset);
            assert!(major < config.major_radius + max_offset);
            assert!(
                particle.position()[crate::geometry::Dim3::Z].abs()
                    < config.elongation * config.minor_radius
            );
        }
    }

    #[test]
    fn reactivity_increases_with_temperature_below_formulary_limit() {
        assert!(dt_reactivity(20.0) > dt_reactivity(5.0));
        assert!(dt_reactivity(5.0) > dt_reactivity(1.0));
        assert!(dt_reactivity(1.0) > 0.0);
    }

    #[test]
    #[should_panic]
    fn pedestal_outside_minor_radius_is_rejected() {
        let config = TokamakSourceConfig {
            pedestal_radius: 300.0,
            ..TokamakSourceConfig::default()
        };
        config.validate();
    }
}
