//! Angles and angle units.
//!
//! An [`Angle`] always stores radians. Other units are conversion rules implementing
//! [`AngleUnit`], and are used to create angles or read them back:
//!
//! ```
//! # use dk_math::*;
//! let right = Angle::from_unit::<Degrees>(90.0);
//! assert_eq!(right.as_unit::<Radians>(), std::f64::consts::FRAC_PI_2);
//! assert_eq!(Angle::from(Degrees(180.0)), angle_from_radians(std::f64::consts::PI));
//! ```

use std::{
    cmp::Ordering,
    f64::consts::PI,
    fmt,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// A unit angles can be measured in.
pub trait AngleUnit {
    /// Converts `value`, measured in this unit, to radians.
    fn to_radians(value: f64) -> f64;

    /// Converts `radians` to this unit.
    fn from_radians(radians: f64) -> f64;
}

/// An angle measured in degrees. A full turn is 360 degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Degrees(pub f64);

/// An angle measured in radians. A full turn is 2π radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Radians(pub f64);

const RADIANS_PER_DEGREE: f64 = PI / 180.0;

impl AngleUnit for Degrees {
    #[inline]
    fn to_radians(value: f64) -> f64 {
        value * RADIANS_PER_DEGREE
    }

    #[inline]
    fn from_radians(radians: f64) -> f64 {
        radians / RADIANS_PER_DEGREE
    }
}

impl AngleUnit for Radians {
    #[inline]
    fn to_radians(value: f64) -> f64 {
        value
    }

    #[inline]
    fn from_radians(radians: f64) -> f64 {
        radians
    }
}

/// A rotation amount, stored in radians.
///
/// Angles compare and sort by their radian value. No normalization into a full turn is done, so
/// 360° and 0° are different angles.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const ZERO: Self = Self { radians: 0.0 };

    /// Creates an angle of `value` measured in unit `U`.
    #[inline]
    pub fn from_unit<U: AngleUnit>(value: f64) -> Self {
        Self {
            radians: U::to_radians(value),
        }
    }

    /// Returns this angle measured in unit `U`.
    #[inline]
    pub fn as_unit<U: AngleUnit>(self) -> f64 {
        U::from_radians(self.radians)
    }

    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_unit::<Degrees>(degrees)
    }

    #[inline]
    pub const fn radians(self) -> f64 {
        self.radians
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.as_unit::<Degrees>()
    }

    /// Returns the ordering between `self` and `other`, as defined by [`f64::total_cmp`].
    #[inline]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.radians.total_cmp(&other.radians)
    }
}

/// Creates an [`Angle`] from a value in degrees.
#[inline]
pub fn angle_from_degrees(degrees: f64) -> Angle {
    Angle::from_degrees(degrees)
}

/// Creates an [`Angle`] from a value in radians.
#[inline]
pub fn angle_from_radians(radians: f64) -> Angle {
    Angle::from_radians(radians)
}

impl From<Degrees> for Angle {
    #[inline]
    fn from(Degrees(value): Degrees) -> Self {
        Self::from_unit::<Degrees>(value)
    }
}

impl From<Radians> for Angle {
    #[inline]
    fn from(Radians(value): Radians) -> Self {
        Self::from_unit::<Radians>(value)
    }
}

impl From<Angle> for Degrees {
    #[inline]
    fn from(angle: Angle) -> Self {
        Self(angle.as_unit::<Degrees>())
    }
}

impl From<Angle> for Radians {
    #[inline]
    fn from(angle: Angle) -> Self {
        Self(angle.radians)
    }
}

impl From<Angle> for f64 {
    /// Returns the angle in radians.
    #[inline]
    fn from(angle: Angle) -> Self {
        angle.radians
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.radians + rhs.radians)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.radians += rhs.radians;
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.radians - rhs.radians)
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        self.radians -= rhs.radians;
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_radians(self.radians * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_radians(self.radians / rhs)
    }
}

/// Displays the angle in radians.
impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.radians, f)
    }
}
