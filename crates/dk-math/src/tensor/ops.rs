//! Implementations of `std::ops`.
//!
//! Element-wise arithmetic is available for tensors of every shape. The exceptions are `*` and
//! `*=` between two tensors: those are element-wise for rank 1 and rank 3 only, since rank 2
//! tensors (matrices) use them for the matrix product instead (see `matrix/ops.rs`).

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{
    shape::{Rank1, Rank3, Shape, TensorIndex},
    Numeric, Signed,
};

use super::Tensor;

impl<T: Copy, S: Shape, I: TensorIndex<S>> Index<I> for Tensor<T, S> {
    type Output = T;

    #[inline]
    fn index(&self, index: I) -> &T {
        &self.as_slice()[index.offset()]
    }
}

impl<T: Copy, S: Shape, I: TensorIndex<S>> IndexMut<I> for Tensor<T, S> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut T {
        &mut self.as_mut_slice()[index.offset()]
    }
}

/// Element-wise negation.
///
/// Returns a new tensor and leaves the operand untouched.
impl<T: Signed, S: Shape> Neg for Tensor<T, S> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T: Numeric, S: Shape> Add for Tensor<T, S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a + b)
    }
}

/// Element-wise addition.
impl<T: Numeric, S: Shape> AddAssign for Tensor<T, S> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Element-wise subtraction.
impl<T: Numeric, S: Shape> Sub for Tensor<T, S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a - b)
    }
}

/// Element-wise subtraction.
impl<T: Numeric, S: Shape> SubAssign for Tensor<T, S> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Tensor * Scalar.
impl<T: Numeric, S: Shape> Mul<T> for Tensor<T, S> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|elem| elem * rhs)
    }
}

/// Tensor * Scalar.
impl<T: Numeric, S: Shape> MulAssign<T> for Tensor<T, S> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Tensor / Scalar.
///
/// # Panics
///
/// Panics if `rhs` is zero. Use [`Tensor::try_div_scalar`] to handle that case.
impl<T: Numeric, S: Shape> Div<T> for Tensor<T, S> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.try_div_scalar(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// Tensor / Scalar.
///
/// # Panics
///
/// Panics if `rhs` is zero. Use [`Tensor::try_div_assign_scalar`] to handle that case.
impl<T: Numeric, S: Shape> DivAssign<T> for Tensor<T, S> {
    fn div_assign(&mut self, rhs: T) {
        if let Err(e) = self.try_div_assign_scalar(rhs) {
            panic!("{e}");
        }
    }
}

/// Element-wise division.
///
/// # Panics
///
/// Panics if any element of `rhs` is zero. Use [`Tensor::try_div`] to handle that case.
impl<T: Numeric, S: Shape> Div for Tensor<T, S> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.try_div(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// Element-wise division.
///
/// # Panics
///
/// Panics if any element of `rhs` is zero. Use [`Tensor::try_div_assign`] to handle that case.
impl<T: Numeric, S: Shape> DivAssign for Tensor<T, S> {
    fn div_assign(&mut self, rhs: Self) {
        if let Err(e) = self.try_div_assign(rhs) {
            panic!("{e}");
        }
    }
}

/// Element-wise multiplication.
impl<T: Numeric, const N: usize> Mul for Tensor<T, Rank1<N>> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.mul_elementwise(rhs)
    }
}

/// Element-wise multiplication.
impl<T: Numeric, const N: usize> MulAssign for Tensor<T, Rank1<N>> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_elementwise(rhs);
    }
}

/// Element-wise multiplication.
impl<T: Numeric, const A: usize, const B: usize, const C: usize> Mul
    for Tensor<T, Rank3<A, B, C>>
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.mul_elementwise(rhs)
    }
}

/// Element-wise multiplication.
impl<T: Numeric, const A: usize, const B: usize, const C: usize> MulAssign
    for Tensor<T, Rank3<A, B, C>>
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_elementwise(rhs);
    }
}

// NB: scalars on the left-hand side can't be covered by a blanket impl, so every primitive gets
// its own.
macro_rules! scalar_lhs {
    ($($types:ty),+) => {
        $(
            /// Scalar * Tensor.
            impl<S: Shape> Mul<Tensor<$types, S>> for $types {
                type Output = Tensor<$types, S>;

                fn mul(self, rhs: Tensor<$types, S>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

scalar_lhs!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
