//! Angular distributions of particle emission directions.

use super::{fsr, AngularDistribution};
use crate::{constants::PI, geometry::Vec3};
use rand::{rngs::StdRng, Rng};

/// Uniform distribution over all directions on the unit sphere.
#[derive(Clone, Copy, Debug)]
pub struct Isotropic;

impl AngularDistribution for Isotropic {
    fn sample(&self, rng: &mut StdRng) -> Vec3<fsr> {
        let cos_polar: fsr = rng.gen_range(-1.0..=1.0);
        let azimuth: fsr = rng.gen_range(0.0..2.0 * PI);
        let sin_polar = (1.0 - cos_polar * cos_polar).sqrt();
        Vec3::new(
            sin_polar * azimuth.cos(),
            sin_polar * azimuth.sin(),
            cos_polar,
        )
    }
}

/// Distribution emitting every particle in the same fixed direction.
#[derive(Clone, Debug)]
pub struct Monodirectional {
    direction: Vec3<fsr>,
}

impl Monodirectional {
    /// Creates a new distribution emitting along the given direction,
    /// which does not have to be normalized.
    pub fn new(direction: Vec3<fsr>) -> Self {
        assert!(
            !direction.is_zero(),
            "Emission direction must have non-zero length."
        );
        Self {
            direction: direction.normalized(),
        }
    }

    /// Unit vector all particles are emitted along.
    pub fn direction(&self) -> &Vec3<fsr> {
        &self.direction
    }
}

impl AngularDistribution for Monodirectional {
    fn sample(&self, _rng: &mut StdRng) -> Vec3<fsr> {
        self.direction.clone()
    }
}
