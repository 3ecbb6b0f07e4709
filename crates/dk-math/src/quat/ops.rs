use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::{Float, Numeric, Quaternion, Vector3};

use super::hamilton;

/// The Hamilton product. Not commutative.
impl<T: Float> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        hamilton(self, rhs)
    }
}

impl<T: Float> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = hamilton(*self, rhs);
    }
}

/// Rotates a vector, see [`Quaternion::apply`].
impl<T: Float> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        self.apply(rhs)
    }
}

impl<T: Numeric> Add for Quaternion<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_parts(self.imag + rhs.imag, self.real + rhs.real)
    }
}

impl<T: Numeric> AddAssign for Quaternion<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.imag += rhs.imag;
        self.real += rhs.real;
    }
}

impl<T: Numeric> Sub for Quaternion<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_parts(self.imag - rhs.imag, self.real - rhs.real)
    }
}

impl<T: Numeric> SubAssign for Quaternion<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.imag -= rhs.imag;
        self.real -= rhs.real;
    }
}
