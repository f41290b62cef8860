//! Geometric utility objects.

use crate::num::BFloat;
use std::{
    fmt,
    ops::{Index, IndexMut},
};

#[cfg(feature = "serialization")]
use serde::Serialize;

/// Denotes the x-, y- or z-dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dim3 {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Dim3 {
    /// Creates an array for iterating over the x-, y- and z-dimensions.
    pub fn slice() -> [Self; 3] {
        [Self::X, Self::Y, Self::Z]
    }

    /// Returns the number of the dimension.
    pub fn num(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Dim3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::X => "x",
                Self::Y => "y",
                Self::Z => "z",
            }
        )
    }
}

use Dim3::{X, Y, Z};

/// A 3D spatial coordinate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct Point3<F>([F; 3]);

impl<F: BFloat> Point3<F> {
    /// Creates a new 3D point given the three coordinates.
    pub fn new(x: F, y: F, z: F) -> Self {
        Self([x, y, z])
    }

    /// Creates a new 3D point with all coordinates set to zero.
    pub fn origin() -> Self {
        Self::new(F::zero(), F::zero(), F::zero())
    }

    /// Creates a new point translated by the given vector.
    pub fn translated(&self, displacement: &Vec3<F>) -> Self {
        Self::new(
            self[X] + displacement[X],
            self[Y] + displacement[Y],
            self[Z] + displacement[Z],
        )
    }

    /// Creates the vector pointing from the given origin point to this point.
    pub fn to_vec3_from(&self, origin: &Self) -> Vec3<F> {
        Vec3::new(
            self[X] - origin[X],
            self[Y] - origin[Y],
            self[Z] - origin[Z],
        )
    }

    /// Distance of the point from the z-axis.
    pub fn cylindrical_radius(&self) -> F {
        (self[X] * self[X] + self[Y] * self[Y]).sqrt()
    }
}

impl<F: BFloat> Index<Dim3> for Point3<F> {
    type Output = F;
    fn index(&self, dim: Dim3) -> &Self::Output {
        &self.0[dim.num()]
    }
}

impl<F: BFloat> IndexMut<Dim3> for Point3<F> {
    fn index_mut(&mut self, dim: Dim3) -> &mut Self::Output {
        &mut self.0[dim.num()]
    }
}

impl<F: fmt::Display> fmt::Display for Point3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

/// A 3D vector.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct Vec3<F>([F; 3]);

impl<F: BFloat> Vec3<F> {
    /// Creates a new 3D vector given the three components.
    pub fn new(x: F, y: F, z: F) -> Self {
        Self([x, y, z])
    }

    /// Creates a new zero vector.
    pub fn zero() -> Self {
        Self::new(F::zero(), F::zero(), F::zero())
    }

    /// Computes the squared length of the vector.
    pub fn squared_length(&self) -> F {
        self[X] * self[X] + self[Y] * self[Y] + self[Z] * self[Z]
    }

    /// Computes the length of the vector.
    pub fn length(&self) -> F {
        self.squared_length().sqrt()
    }

    /// Whether the vector has exactly zero length.
    pub fn is_zero(&self) -> bool {
        self.squared_length() == F::zero()
    }

    /// Creates a new vector with the same direction but unit length.
    ///
    /// Panics if the vector has zero length.
    pub fn normalized(&self) -> Self {
        let length = self.length();
        assert!(
            length > F::zero(),
            "Cannot normalize a vector with zero length."
        );
        self.scaled(F::one() / length)
    }

    /// Creates a new vector with all components scaled by the given factor.
    pub fn scaled(&self, factor: F) -> Self {
        Self::new(self[X] * factor, self[Y] * factor, self[Z] * factor)
    }

    /// Computes the dot product with the given vector.
    pub fn dot(&self, other: &Self) -> F {
        self[X] * other[X] + self[Y] * other[Y] + self[Z] * other[Z]
    }
}

impl<F: BFloat> Index<Dim3> for Vec3<F> {
    type Output = F;
    fn index(&self, dim: Dim3) -> &Self::Output {
        &self.0[dim.num()]
    }
}

impl<F: BFloat> IndexMut<Dim3> for Vec3<F> {
    fn index_mut(&mut self, dim: Dim3) -> &mut Self::Output {
        &mut self.0[dim.num()]
    }
}

impl<F: fmt::Display> fmt::Display for Vec3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(any(feature = "for-testing", test))]
mod comparison {
    use super::{Point3, Vec3};
    use crate::num::BFloat;
    use approx::{AbsDiffEq, RelativeEq};

    impl<F> AbsDiffEq for Point3<F>
    where
        F: BFloat + AbsDiffEq,
        F::Epsilon: Copy,
    {
        type Epsilon = F::Epsilon;

        fn default_epsilon() -> Self::Epsilon {
            F::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
            self.0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| F::abs_diff_eq(a, b, epsilon))
        }
    }

    impl<F> RelativeEq for Point3<F>
    where
        F: BFloat + RelativeEq,
        F::Epsilon: Copy,
    {
        fn default_max_relative() -> Self::Epsilon {
            F::default_max_relative()
        }

        fn relative_eq(
            &self,
            other: &Self,
            epsilon: Self::Epsilon,
            max_relative: Self::Epsilon,
        ) -> bool {
            self.0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| F::relative_eq(a, b, epsilon, max_relative))
        }
    }

    impl<F> AbsDiffEq for Vec3<F>
    where
        F: BFloat + AbsDiffEq,
        F::Epsilon: Copy,
    {
        type Epsilon = F::Epsilon;

        fn default_epsilon() -> Self::Epsilon {
            F::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
            self.0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| F::abs_diff_eq(a, b, epsilon))
        }
    }

    impl<F> RelativeEq for Vec3<F>
    where
        F: BFloat + RelativeEq,
        F::Epsilon: Copy,
    {
        fn default_max_relative() -> Self::Epsilon {
            F::default_max_relative()
        }

        fn relative_eq(
            &self,
            other: &Self,
            epsilon: Self::Epsilon,
            max_relative: Self::Epsilon,
        ) -> bool {
            self.0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| F::relative_eq(a, b, epsilon, max_relative))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn translation_moves_point_by_displacement() {
        let point = Point3::new(1.0, -2.0, 3.0);
        let translated = point.translated(&Vec3::new(0.5, 2.0, -3.0));
        assert_relative_eq!(translated, Point3::new(1.5, 0.0, 0.0));
    }

    #[test]
    fn normalization_yields_unit_length() {
        let vector = Vec3::new(1.0, 2.0, -2.0);
        assert_relative_eq!(vector.normalized().length(), 1.0);
    }

    #[test]
    #[should_panic]
    fn normalizing_zero_vector_panics() {
        let _: Vec3<f64> = Vec3::zero().normalized();
    }

    #[test]
    fn cylindrical_radius_ignores_height() {
        let point = Point3::new(3.0, 4.0, -17.0);
        assert_relative_eq!(point.cylindrical_radius(), 5.0);
    }
}
