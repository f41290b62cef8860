//! Spatial distributions of particle emission positions.

use super::{fsr, SpatialDistribution};
use crate::{
    distribution::UnivariateDistribution,
    geometry::{Point3, Vec3},
};
use rand::rngs::StdRng;

/// Spatial distribution collapsing to a single fixed coordinate.
#[derive(Clone, Debug)]
pub struct FixedPoint {
    position: Point3<fsr>,
}

impl FixedPoint {
    /// Creates a new distribution emitting every particle at the given
    /// position.
    pub fn new(position: Point3<fsr>) -> Self {
        Self { position }
    }

    /// Creates a new distribution emitting every particle at the origin.
    pub fn origin() -> Self {
        Self::new(Point3::origin())
    }

    /// Position all particles are emitted at.
    pub fn position(&self) -> &Point3<fsr> {
        &self.position
    }
}

impl SpatialDistribution for FixedPoint {
    fn sample(&self, _rng: &mut StdRng) -> Point3<fsr> {
        self.position.clone()
    }
}

/// Spatial distribution over a cylindrical volume, with mutually
/// independent distributions for radius, azimuthal angle and height.
///
/// An origin offset translates the sampled positions in 3-space, so a ring
/// of emission points can be placed anywhere along the z-axis.
#[derive(Debug)]
pub struct CylindricalIndependent {
    radius: Box<dyn UnivariateDistribution>,
    azimuth: Box<dyn UnivariateDistribution>,
    height: Box<dyn UnivariateDistribution>,
    origin: Vec3<fsr>,
}

impl CylindricalIndependent {
    /// Creates a new cylindrical distribution from independent radius [cm],
    /// azimuthal angle [rad] and height [cm] distributions.
    pub fn new(
        radius: Box<dyn UnivariateDistribution>,
        azimuth: Box<dyn UnivariateDistribution>,
        height: Box<dyn UnivariateDistribution>,
    ) -> Self {
        Self {
            radius,
            azimuth,
            height,
            origin: Vec3::zero(),
        }
    }

    /// Translates all sampled positions by the given origin offset.
    pub fn with_origin(mut self, origin: Vec3<fsr>) -> Self {
        self.origin = origin;
        self
    }

    /// Origin offset applied to all sampled positions.
    pub fn origin(&self) -> &Vec3<fsr> {
        &self.origin
    }
}

impl SpatialDistribution for CylindricalIndependent {
    fn sample(&self, rng: &mut StdRng) -> Point3<fsr> {
        let radius = self.radius.sample(rng);
        let azimuth = self.azimuth.sample(rng);
        let height = self.height.sample(rng);
        Point3::new(radius * azimuth.cos(), radius * azimuth.sin(), height)
            .translated(&self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PI;
    use crate::distribution::{discrete::Discrete, uniform::Uniform};
    use crate::random::new_rng;
    use approx::assert_relative_eq;

    #[test]
    fn fixed_point_collapses_to_configured_coordinate() {
        let distribution = FixedPoint::new(Point3::new(1.0, -2.0, 3.0));
        let mut rng = new_rng(Some(12));
        for _ in 0..100 {
            assert_eq!(distribution.sample(&mut rng), Point3::new(1.0, -2.0, 3.0));
        }
    }

    #[test]
    fn ring_samples_lie_on_the_configured_ring() {
        let distribution = CylindricalIndependent::new(
            Box::new(Discrete::single(10.0)),
            Box::new(Uniform::new(0.0, 2.0 * PI)),
            Box::new(Discrete::single(0.0)),
        );
        let mut rng = new_rng(Some(13));
        for _ in 0..1000 {
            let position = distribution.sample(&mut rng);
            assert_relative_eq!(position.cylindrical_radius(), 10.0, max_relative = 1e-12);
            assert_eq!(position[crate::geometry::Dim3::Z], 0.0);
        }
    }

    #[test]
    fn origin_offset_translates_samples() {
        let distribution = CylindricalIndependent::new(
            Box::new(Discrete::single(0.0)),
            Box::new(Uniform::new(0.0, 2.0 * PI)),
            Box::new(Discrete::single(0.0)),
        )
        .with_origin(Vec3::new(100.0, 0.0, -50.0));
        let mut rng = new_rng(Some(14));
        let position = distribution.sample(&mut rng);
        assert_relative_eq!(position, Point3::new(100.0, 0.0, -50.0));
    }
}
