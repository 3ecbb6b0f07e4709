//! Approximate equality via the [`approx`] crate.
//!
//! Compound types are considered approximately equal if all of their components are. The
//! tolerances are those of the element type.

use ::approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{shape::Shape, Angle, Quaternion, Tensor};

impl<T, S: Shape> AbsDiffEq for Tensor<T, S>
where
    T: AbsDiffEq + Copy,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, S: Shape> RelativeEq for Tensor<T, S>
where
    T: RelativeEq + Copy,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, S: Shape> UlpsEq for Tensor<T, S>
where
    T: UlpsEq + Copy,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

impl<T> AbsDiffEq for Quaternion<T>
where
    T: AbsDiffEq + Copy,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.imag.abs_diff_eq(&other.imag, epsilon) && self.real.abs_diff_eq(&other.real, epsilon)
    }
}

impl<T> RelativeEq for Quaternion<T>
where
    T: RelativeEq + Copy,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.imag.relative_eq(&other.imag, epsilon, max_relative)
            && self.real.relative_eq(&other.real, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Quaternion<T>
where
    T: UlpsEq + Copy,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.imag.ulps_eq(&other.imag, epsilon, max_ulps)
            && self.real.ulps_eq(&other.real, epsilon, max_ulps)
    }
}

/// Compares the radian values.
impl AbsDiffEq for Angle {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.radians().abs_diff_eq(&other.radians(), epsilon)
    }
}

impl RelativeEq for Angle {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.radians()
            .relative_eq(&other.radians(), epsilon, max_relative)
    }
}

impl UlpsEq for Angle {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.radians().ulps_eq(&other.radians(), epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use ::approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_ulps_eq};

    use crate::{angle_from_degrees, angle_from_radians, vec3, Matrix2, Quaternion};

    #[test]
    fn tensors() {
        let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
        assert_ne!(vec3(one, 0.0, 0.0), vec3(1.0, 0.0, 0.0));
        assert_relative_eq!(vec3(one, 0.0, 0.0), vec3(1.0, 0.0, 0.0));
        assert_ulps_eq!(vec3(one, 0.0, 0.0), vec3(1.0, 0.0, 0.0));

        assert_abs_diff_eq!(
            Matrix2::from([[1.0, 2.0], [3.0, 4.0]]),
            Matrix2::from([[1.05, 2.0], [3.0, 3.95]]),
            epsilon = 0.1
        );
        assert_abs_diff_ne!(
            Matrix2::from([[1.0, 2.0], [3.0, 4.0]]),
            Matrix2::from([[1.0, 2.0], [3.0, 4.5]]),
            epsilon = 0.1
        );
    }

    #[test]
    fn quaternions() {
        assert_abs_diff_eq!(
            Quaternion::new(1.0, 2.0, 3.0, 4.0),
            Quaternion::new(1.0, 2.0, 3.0, 4.001),
            epsilon = 0.01
        );
        assert_abs_diff_ne!(
            Quaternion::new(1.0, 2.0, 3.0, 4.0),
            Quaternion::new(1.0, 2.0, 3.0, 4.1),
            epsilon = 0.01
        );
        assert_relative_eq!(
            Quaternion::new(1.0f32, 0.0, 0.0, 1.0),
            Quaternion::new(1.0, 0.0, 0.0, 1.0 + f32::EPSILON)
        );
    }

    #[test]
    fn angles() {
        assert_relative_eq!(angle_from_degrees(180.0), angle_from_radians(std::f64::consts::PI));
        assert_abs_diff_ne!(angle_from_degrees(1.0), angle_from_degrees(2.0));
    }
}
