use std::fmt;

use crate::{cross, Angle, Error, Float, Numeric, Real, Result, Vector3};

mod ops;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
///
/// The imaginary part is stored as a [`Vector3`] whose `x`, `y` and `z` components correspond to
/// `i`, `j` and `k`. Componentwise, the quaternion is written `(x, y, z, w)`, with `w` being the
/// real part.
///
/// Quaternions created from an axis and an [`Angle`] store the angle *in degrees* in their real
/// part until [`Quaternion::to_unit_norm`] turns them into a rotation versor:
///
/// ```
/// # use dk_math::*;
/// let q = Quaternion::from_vector_angle(vec3(0.0f32, 0.0, 1.0), angle_from_degrees(90.0));
/// assert_eq!(q.real, 90.0);
///
/// let v = q.unit_norm()?.apply(vec3(1.0, 0.0, 0.0));
/// assert!((v - vec3(0.0, 1.0, 0.0)).magnitude() < 1e-6);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Quaternion<T: Copy> {
    /// The imaginary part.
    pub imag: Vector3<T>,
    /// The real part.
    pub real: T,
}

/// A [`Quaternion`] with [`Real`] components.
pub type Quat = Quaternion<Real>;

unsafe impl<T: bytemuck::Zeroable + Copy> bytemuck::Zeroable for Quaternion<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quaternion<T> {}

impl<T: Copy> Quaternion<T> {
    /// Creates a quaternion from its imaginary components `x`, `y`, `z` and its real part `w`.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            imag: Vector3::new(x, y, z),
            real: w,
        }
    }

    #[inline]
    pub const fn from_parts(imag: Vector3<T>, real: T) -> Self {
        Self { imag, real }
    }

    /// Returns the imaginary part of this quaternion.
    #[inline]
    pub fn vector_part(&self) -> Vector3<T> {
        self.imag
    }
}

impl<T: Numeric> Quaternion<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is applied to.
    pub const IDENTITY: Self = Self {
        imag: Vector3::ZERO,
        real: T::ONE,
    };

    /// Creates a *pure* quaternion, whose real part is zero.
    #[inline]
    pub fn new_pure(x: T, y: T, z: T) -> Self {
        Self::new(x, y, z, T::ZERO)
    }

    /// Creates a quaternion with imaginary part `(x, y, z)` whose real part is `angle` in degrees.
    pub fn with_angle(x: T, y: T, z: T, angle: Angle) -> Self {
        Self::from_vector_angle(Vector3::new(x, y, z), angle)
    }

    /// Creates a quaternion with imaginary part `imag` whose real part is `angle` in degrees.
    pub fn from_vector_angle(imag: Vector3<T>, angle: Angle) -> Self {
        Self {
            imag,
            real: T::from_f64(angle.degrees()),
        }
    }

    /// Returns the squared norm of this quaternion.
    ///
    /// The sum of squares is accumulated in [`f64`], like [`Vector::dot`][crate::Vector::dot].
    pub fn norm_squared(&self) -> T {
        T::from_f64(self.norm_squared_f64())
    }

    fn norm_squared_f64(&self) -> f64 {
        let real = self.real.to_f64();
        self.imag.dot(self.imag) + real * real
    }

    /// Returns `true` if the real part of this quaternion is zero.
    #[inline]
    pub fn is_pure(&self) -> bool {
        self.real.is_zero()
    }

    /// Returns a copy of this quaternion with its real part set to zero.
    pub fn pure(self) -> Self {
        Self::from_parts(self.imag, T::ZERO)
    }

    /// Sets the real part of this quaternion to zero.
    pub fn to_pure(&mut self) -> &mut Self {
        self.real = T::ZERO;
        self
    }
}

impl<T: Float> Quaternion<T> {
    #[doc(alias = "length", alias = "magnitude")]
    pub fn norm(&self) -> T {
        T::from_f64(self.norm_squared_f64().sqrt())
    }

    /// Scales this quaternion to have a norm of one.
    ///
    /// If the norm is zero, [`Error::DivisionByZero`] is returned and `self` is left unmodified.
    pub fn normalize(&mut self) -> Result<&mut Self> {
        let norm = self.norm_squared_f64().sqrt();
        if norm == 0.0 {
            log::debug!("cannot normalize zero quaternion {self}");
            return Err(Error::DivisionByZero);
        }
        let scale = |value: T| T::from_f64(value.to_f64() / norm);
        self.imag = self.imag.map(scale);
        self.real = scale(self.real);
        Ok(self)
    }

    /// Returns a copy of this quaternion scaled to have a norm of one.
    ///
    /// Returns [`Error::DivisionByZero`] if the norm of `self` is zero.
    pub fn normalized(mut self) -> Result<Self> {
        self.normalize()?;
        Ok(self)
    }

    /// Returns `true` if normalizing this quaternion does not change it.
    ///
    /// The comparison is exact, so quaternions whose norm is off by a rounding error may not be
    /// considered unit quaternions. The zero quaternion is never a unit quaternion.
    ///
    /// ```
    /// # use dk_math::*;
    /// assert!(Quat::IDENTITY.is_unit());
    /// assert!(Quat::new(0.5, 0.5, 0.5, 0.5).is_unit());
    /// assert!(!Quat::new(1.0, 1.0, 1.0, 1.0).is_unit());
    /// assert!(!Quat::default().is_unit());
    /// ```
    pub fn is_unit(&self) -> bool {
        self.normalized().map_or(false, |unit| unit == *self)
    }

    /// Returns the conjugate of this quaternion, which has its imaginary part negated.
    pub fn conjugate(&self) -> Self {
        Self::from_parts(-self.imag, self.real)
    }

    /// Returns the inverse of this quaternion, computed as `conj * (self * conj)`.
    ///
    /// For unit quaternions, this is the same as the [conjugate][Quaternion::conjugate], and the
    /// Hamilton product of the quaternion and its inverse is [`Quaternion::IDENTITY`].
    pub fn inverse(&self) -> Self {
        let conj = self.conjugate();
        conj * (*self * conj)
    }

    /// Turns an axis-angle quaternion into the unit quaternion describing that rotation.
    ///
    /// The real part is read as an angle in degrees (as stored by
    /// [`Quaternion::from_vector_angle`]), the imaginary part as the rotation axis. Afterwards,
    /// the real part is `cos(angle / 2)` and the imaginary part is the normalized axis scaled by
    /// `sin(angle / 2)`.
    ///
    /// If the imaginary part is zero, no axis can be derived from it, [`Error::DivisionByZero`] is
    /// returned and `self` is left unmodified.
    pub fn to_unit_norm(&mut self) -> Result<&mut Self> {
        let half = Angle::from_degrees(self.real.to_f64()) / 2.0;
        self.imag.normalize()?;
        self.real = T::from_f64(half.radians().cos());
        self.imag *= T::from_f64(half.radians().sin());
        Ok(self)
    }

    /// Returns the unit quaternion describing the rotation encoded by this axis-angle quaternion.
    ///
    /// See [`Quaternion::to_unit_norm`].
    pub fn unit_norm(mut self) -> Result<Self> {
        self.to_unit_norm()?;
        Ok(self)
    }

    /// Creates the unit quaternion that rotates by `angle` around `axis`.
    ///
    /// `axis` does not need to be normalized, but must not be zero.
    pub fn from_axis_angle(axis: Vector3<T>, angle: Angle) -> Result<Self> {
        let axis = axis.normalized()?;
        Self::from_vector_angle(axis, angle).unit_norm()
    }

    /// Applies the rotation described by this quaternion to `vector`.
    ///
    /// The vector is turned into a pure quaternion `p`, and the imaginary part of
    /// `self * p * self.inverse()` is returned. `self` should be a unit quaternion.
    pub fn apply(&self, vector: Vector3<T>) -> Vector3<T> {
        let pure = Self::from_parts(vector, T::ZERO);
        (*self * pure * self.inverse()).imag
    }

    /// Rotates `vector` by `angle` around `axis`.
    ///
    /// Positive angles rotate counterclockwise when looking down `axis` towards the origin. `axis`
    /// does not need to be normalized. [`Error::DivisionByZero`] is returned if it is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let v = Quaternion::rotate(
    ///     vec3(0.0, 1.0, 0.0),
    ///     angle_from_degrees(90.0),
    ///     vec3(1.0, 0.0, 0.0),
    /// )?;
    /// assert!((v - vec3(0.0, 0.0, 1.0)).magnitude() < 1e-6);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn rotate(vector: Vector3<T>, angle: Angle, axis: Vector3<T>) -> Result<Vector3<T>> {
        let rotation = Self::from_axis_angle(axis, angle)?;
        let rotated = rotation.apply(vector);
        log::trace!("rotating {vector} by {angle} rad around {axis} via {rotation}: {rotated}");
        Ok(rotated)
    }
}

/// Hamilton product of `(a, b)` and `(c, d)`, with `a`, `c` imaginary and `b`, `d` real.
fn hamilton<T: Float>(lhs: Quaternion<T>, rhs: Quaternion<T>) -> Quaternion<T> {
    let Quaternion { imag: a, real: b } = lhs;
    let Quaternion { imag: c, real: d } = rhs;
    Quaternion {
        imag: a * d + c * b + cross(a, c),
        real: b * d - T::from_f64(a.dot(c)),
    }
}

impl<T: Copy + fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for elem in self.imag.iter() {
            fmt::Display::fmt(elem, f)?;
            f.write_str(", ")?;
        }
        fmt::Display::fmt(&self.real, f)?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::{angle_from_degrees, angle_from_radians, vec3};

    use super::*;

    #[test]
    fn construction() {
        let q = Quaternion::new(1, 2, 3, 4);
        assert_eq!(q.imag, vec3(1, 2, 3));
        assert_eq!(q.real, 4);
        assert_eq!(q.vector_part(), vec3(1, 2, 3));
        assert_eq!(Quaternion::from_parts(vec3(1, 2, 3), 4), q);
        assert_eq!(Quaternion::new_pure(1, 2, 3), Quaternion::new(1, 2, 3, 0));
        assert_eq!(Quaternion::<i32>::IDENTITY, Quaternion::new(0, 0, 0, 1));

        let half_turn = angle_from_radians(std::f64::consts::PI);
        let q = Quaternion::<f64>::with_angle(1.0, 0.0, 0.0, half_turn);
        assert_relative_eq!(q.real, 180.0, epsilon = 1e-9);
        let q = Quaternion::from_vector_angle(vec3(0.0f32, 1.0, 0.0), angle_from_degrees(45.0));
        assert_eq!(q.real, 45.0);
    }

    #[test]
    fn norm() {
        let q = Quaternion::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(q.norm_squared(), 25.0);
        assert_eq!(q.norm(), 5.0);
        assert_eq!(Quaternion::new(3, 0, 0, 4).norm_squared(), 25);
    }

    #[test]
    fn normalize() {
        let mut q = Quaternion::new(1.0, 1.0, 1.0, 1.0);
        q.normalize().unwrap();
        assert_eq!(q, Quaternion::new(0.5, 0.5, 0.5, 0.5));
        assert!(q.is_unit());

        assert!(Quaternion::new(0.0, 0.0, 0.0, 1.0).is_unit());
        assert!(!Quaternion::new(0.0, 0.0, 0.0, 2.0).is_unit());

        let mut zero = Quat::default();
        assert_eq!(zero.normalize().err(), Some(Error::DivisionByZero));
        assert_eq!(zero, Quat::default());
        assert_eq!(zero.normalized(), Err(Error::DivisionByZero));
        assert!(!zero.is_unit());
    }

    #[test]
    fn normalize_extreme_magnitudes() {
        // The norm is subnormal in `f32`, so its reciprocal is not representable.
        let q = Quaternion::new(1.0e-45f32, 0.0, 0.0, 0.0).normalized().unwrap();
        assert_eq!(q, Quaternion::new(1.0, 0.0, 0.0, 0.0));
        assert!(q.is_unit());

        let q = Quaternion::new(0.0, 3.0e38f32, 0.0, 3.0e38).normalized().unwrap();
        assert_abs_diff_eq!(q.norm(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn pure() {
        let q = Quaternion::new(1, 2, 3, 4);
        assert!(!q.is_pure());
        assert_eq!(q.pure(), Quaternion::new(1, 2, 3, 0));
        assert!(q.pure().is_pure());

        let mut q = q;
        q.to_pure();
        assert_eq!(q, Quaternion::new_pure(1, 2, 3));
    }

    #[test]
    fn conjugate() {
        let q = Quaternion::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(q.conjugate(), Quaternion::new(-1.0, -1.0, -1.0, 1.0));
        assert_eq!(q.conjugate().conjugate(), q);
    }

    #[test]
    fn inverse() {
        let q = Quaternion::from_axis_angle(vec3(1.0, 2.0, 3.0), angle_from_degrees(60.0)).unwrap();
        assert_abs_diff_eq!(q.inverse(), q.conjugate(), epsilon = 1e-12);
        assert_abs_diff_eq!(q * q.inverse(), Quaternion::IDENTITY, epsilon = 1e-12);
        assert_abs_diff_eq!(q.inverse() * q, Quaternion::IDENTITY, epsilon = 1e-12);
    }

    #[test]
    fn unit_norm() {
        let q = Quaternion::from_vector_angle(vec3(0.0, 0.0, 2.0), angle_from_degrees(180.0));
        let unit = q.unit_norm().unwrap();
        assert_abs_diff_eq!(unit, Quaternion::new(0.0, 0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(unit.norm(), 1.0, epsilon = 1e-12);

        let mut q = Quaternion::new(0.0, 0.0, 0.0, 90.0);
        assert_eq!(q.to_unit_norm().err(), Some(Error::DivisionByZero));
        assert_eq!(q, Quaternion::new(0.0, 0.0, 0.0, 90.0));
    }

    #[test]
    fn rotate() {
        let v = Quaternion::rotate(
            vec3(0.0, 1.0, 0.0),
            angle_from_degrees(90.0),
            vec3(1.0, 0.0, 0.0),
        )
        .unwrap();
        assert_abs_diff_eq!(v, vec3(0.0, 0.0, 1.0), epsilon = 1e-6);

        let v = Quat::rotate(
            Vector3::new(0.0, 1.0, 0.0),
            angle_from_degrees(90.0),
            Vector3::new(1.0, 0.0, 0.0),
        )
        .unwrap();
        assert_abs_diff_eq!(v, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-6);

        // The axis is normalized before use.
        let v = Quaternion::rotate(
            vec3(1.0, 0.0, 0.0),
            angle_from_degrees(-90.0),
            vec3(0.0, 0.0, 10.0),
        )
        .unwrap();
        assert_abs_diff_eq!(v, vec3(0.0, -1.0, 0.0), epsilon = 1e-12);

        let v = Quaternion::rotate(vec3(1.0, 2.0, 3.0), Angle::ZERO, vec3(0.0, 1.0, 0.0)).unwrap();
        assert_abs_diff_eq!(v, vec3(1.0, 2.0, 3.0), epsilon = 1e-12);

        assert_eq!(
            Quaternion::rotate(vec3(1.0, 0.0, 0.0), angle_from_degrees(90.0), vec3(0.0, 0.0, 0.0)),
            Err(Error::DivisionByZero),
        );
    }

    #[test]
    fn fmt() {
        assert_eq!(Quaternion::new(1.5, 2.0, -3.0, 4.0).to_string(), "(1.5, 2, -3, 4)");
        assert_eq!(format!("{:.1}", Quaternion::new(1.0, 0.0, 0.0, 0.3)), "(1.0, 0.0, 0.0, 0.3)");
    }

    #[test]
    fn pod_cast() {
        let q = Quaternion::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(bytemuck::cast::<_, [f32; 4]>(q), [1.0, 2.0, 3.0, 4.0]);
    }
}
