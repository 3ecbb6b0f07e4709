use std::{fmt, ops};

/// The crate-wide default floating-point type.
///
/// This is [`f32`] unless the `double-precision` Cargo feature is enabled, in which case it is
/// [`f64`]. All `*D` type aliases ([`Vector3D`][crate::Vector3D], [`Matrix4D`][crate::Matrix4D],
/// [`Quat`][crate::Quat], ...) use it as their element type.
#[cfg(not(feature = "double-precision"))]
pub type Real = f32;

/// The crate-wide default floating-point type.
///
/// This is [`f64`] because the `double-precision` Cargo feature is enabled.
#[cfg(feature = "double-precision")]
pub type Real = f64;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Element types usable in a [`Tensor`][crate::Tensor].
///
/// Implemented for all built-in integer and floating-point types. Geometric quantities (lengths,
/// dot products, determinants) are computed in [`f64`] regardless of the element type, which is
/// what [`Numeric::to_f64`] and [`Numeric::from_f64`] are for.
pub trait Numeric:
    Zero
    + One
    + Copy
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
    + ops::DivAssign
    + 'static
{
    /// Converts `self` to an [`f64`], rounding if necessary.
    fn to_f64(self) -> f64;

    /// Converts an [`f64`] to `Self`.
    ///
    /// Integer types truncate towards zero and saturate at their bounds.
    fn from_f64(value: f64) -> Self;

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

/// [`Numeric`] types that can be negated.
pub trait Signed: Numeric + ops::Neg<Output = Self> {}

/// Floating-point element types.
///
/// Operations that only make sense for real numbers (normalization, rotations, projections) are
/// restricted to these. Roots and trigonometry are evaluated in [`f64`] and converted back with
/// [`Numeric::from_f64`], so no math functions are needed here.
///
/// ```compile_fail
/// # use dk_math::*;
/// let v = vec3(3, 0, 4).normalized();
/// ```
pub trait Float: Signed {}

macro_rules! numeric {
    ($zero:literal, $one:literal; $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }

            impl Numeric for $types {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as Self
                }
            }
        )+
    };
}

numeric!(0, 1; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
numeric!(0.0, 1.0; f32, f64);

macro_rules! signed {
    ($($types:ty),+) => {
        $(
            impl Signed for $types {}
        )+
    };
}

signed!(i8, i16, i32, i64, i128, isize, f32, f64);

macro_rules! float {
    ($($types:ty),+) => {
        $(
            impl Float for $types {}
        )+
    };
}

float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(3u8.to_f64(), 3.0);
        assert_eq!(i32::from_f64(-2.9), -2);
        assert_eq!(u8::from_f64(300.0), 255);
        assert_eq!(f32::from_f64(0.5), 0.5);
        assert!(0.0f64.is_zero());
        assert!(!(-1i64).is_zero());
    }

    #[test]
    fn float_types() {
        fn half<T: Float>(value: T) -> T {
            value / (T::ONE + T::ONE)
        }

        assert_eq!(half(3.0f32), 1.5);
        assert_eq!(half(-1.0f64), -0.5);
    }
}
