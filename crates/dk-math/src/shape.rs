//! Compile-time tensor shapes.
//!
//! A [`Shape`] is a zero-sized marker type that fixes the number of dimensions of a
//! [`Tensor`][crate::Tensor], the extent of each dimension, and the nested array type the elements
//! are stored in. Storage is always row-major: the last dimension varies fastest.

use std::{array, fmt::Debug, hash::Hash};

/// A fixed tensor shape.
///
/// Every dimension must be positive. This is checked when [`Shape::SIZE`] is evaluated, which
/// happens whenever a tensor of that shape is created, so a zero-sized dimension is a compile-time
/// error rather than a runtime one.
///
/// ```compile_fail
/// # use dk_math::*;
/// let v = Vector::<f32, 0>::from_fn(|_| 1.0);
/// ```
///
/// This trait is sealed. [`Tensor`][crate::Tensor] implements [`bytemuck::Pod`], which relies on
/// [`Shape::Array`] being an unpadded nested array of exactly [`Shape::SIZE`] elements, so only the
/// shapes in this module can implement it:
///
/// ```compile_fail
/// use dk_math::shape::Shape;
///
/// #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
/// struct Padded;
///
/// impl Shape for Padded {
///     const RANK: usize = 1;
///     const SIZE: usize = 2;
///     const DIMS: &'static [usize] = &[2];
///     type Array<T: Copy> = (T, bool);
///
///     fn flatten<T: Copy>(array: &(T, bool)) -> &[T] {
///         std::slice::from_ref(&array.0)
///     }
///
///     fn flatten_mut<T: Copy>(array: &mut (T, bool)) -> &mut [T] {
///         std::slice::from_mut(&mut array.0)
///     }
///
///     fn array_from_fn<T: Copy, F: FnMut(usize) -> T>(mut f: F) -> (T, bool) {
///         (f(0), false)
///     }
/// }
/// ```
pub trait Shape: sealed::Sealed + Copy + Default + Debug + Eq + Hash + Send + Sync + 'static {
    /// Number of dimensions.
    const RANK: usize;

    /// Total number of elements (the product of all dimensions).
    const SIZE: usize;

    /// The extent of each dimension, outermost first.
    const DIMS: &'static [usize];

    /// The nested array type storing `SIZE` elements of type `T`.
    type Array<T: Copy>: Copy;

    /// Views the nested array as a flat, row-major slice.
    fn flatten<T: Copy>(array: &Self::Array<T>) -> &[T];

    /// Views the nested array as a flat, row-major mutable slice.
    fn flatten_mut<T: Copy>(array: &mut Self::Array<T>) -> &mut [T];

    /// Creates the nested array by invoking `f` with the flat index of every element, in order.
    fn array_from_fn<T: Copy, F: FnMut(usize) -> T>(f: F) -> Self::Array<T>;
}

mod sealed {
    pub trait Sealed {}

    impl<const N: usize> Sealed for super::Rank1<N> {}
    impl<const R: usize, const C: usize> Sealed for super::Rank2<R, C> {}
    impl<const A: usize, const B: usize, const C: usize> Sealed for super::Rank3<A, B, C> {}
}

/// Shape of a 1-dimensional tensor with `N` elements (a vector).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rank1<const N: usize>;

/// Shape of a 2-dimensional tensor with `R` rows and `C` columns (a matrix).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rank2<const R: usize, const C: usize>;

/// Shape of a 3-dimensional tensor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rank3<const A: usize, const B: usize, const C: usize>;

impl<const N: usize> Shape for Rank1<N> {
    const RANK: usize = 1;
    const SIZE: usize = {
        assert!(N > 0, "tensor dimensions must be positive");
        N
    };
    const DIMS: &'static [usize] = &[N];

    type Array<T: Copy> = [T; N];

    #[inline]
    fn flatten<T: Copy>(array: &[T; N]) -> &[T] {
        array
    }

    #[inline]
    fn flatten_mut<T: Copy>(array: &mut [T; N]) -> &mut [T] {
        array
    }

    #[inline]
    fn array_from_fn<T: Copy, F: FnMut(usize) -> T>(f: F) -> [T; N] {
        array::from_fn(f)
    }
}

impl<const R: usize, const C: usize> Shape for Rank2<R, C> {
    const RANK: usize = 2;
    const SIZE: usize = {
        assert!(R > 0 && C > 0, "tensor dimensions must be positive");
        R * C
    };
    const DIMS: &'static [usize] = &[R, C];

    type Array<T: Copy> = [[T; C]; R];

    #[inline]
    fn flatten<T: Copy>(array: &[[T; C]; R]) -> &[T] {
        array.as_flattened()
    }

    #[inline]
    fn flatten_mut<T: Copy>(array: &mut [[T; C]; R]) -> &mut [T] {
        array.as_flattened_mut()
    }

    fn array_from_fn<T: Copy, F: FnMut(usize) -> T>(mut f: F) -> [[T; C]; R] {
        array::from_fn(|row| array::from_fn(|col| f(row * C + col)))
    }
}

impl<const A: usize, const B: usize, const C: usize> Shape for Rank3<A, B, C> {
    const RANK: usize = 3;
    const SIZE: usize = {
        assert!(A > 0 && B > 0 && C > 0, "tensor dimensions must be positive");
        A * B * C
    };
    const DIMS: &'static [usize] = &[A, B, C];

    type Array<T: Copy> = [[[T; C]; B]; A];

    #[inline]
    fn flatten<T: Copy>(array: &[[[T; C]; B]; A]) -> &[T] {
        array.as_flattened().as_flattened()
    }

    #[inline]
    fn flatten_mut<T: Copy>(array: &mut [[[T; C]; B]; A]) -> &mut [T] {
        array.as_flattened_mut().as_flattened_mut()
    }

    fn array_from_fn<T: Copy, F: FnMut(usize) -> T>(mut f: F) -> [[[T; C]; B]; A] {
        array::from_fn(|i| array::from_fn(|j| array::from_fn(|k| f((i * B + j) * C + k))))
    }
}

/// Index types accepted by tensors of shape `S`.
///
/// Every index resolves to a flat, row-major offset into the tensor's storage. A plain [`usize`]
/// is used as the flat offset directly and works for every shape; rank 2 and rank 3 tensors also
/// accept `(row, col)` and `(i, j, k)` tuples.
///
/// Only the resulting offset is bounds-checked. A tuple index whose components individually exceed
/// their dimension, but whose offset is still below the element count, addresses the element at
/// that offset.
pub trait TensorIndex<S: Shape>: Copy + Debug {
    /// Returns the flat offset this index refers to.
    ///
    /// Overflow saturates to [`usize::MAX`] so that it is reported as out of bounds.
    fn offset(self) -> usize;
}

impl<S: Shape> TensorIndex<S> for usize {
    #[inline]
    fn offset(self) -> usize {
        self
    }
}

impl<const R: usize, const C: usize> TensorIndex<Rank2<R, C>> for (usize, usize) {
    #[inline]
    fn offset(self) -> usize {
        let (row, col) = self;
        row.saturating_mul(C).saturating_add(col)
    }
}

impl<const A: usize, const B: usize, const C: usize> TensorIndex<Rank3<A, B, C>>
    for (usize, usize, usize)
{
    #[inline]
    fn offset(self) -> usize {
        let (i, j, k) = self;
        i.saturating_mul(B)
            .saturating_add(j)
            .saturating_mul(C)
            .saturating_add(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Rank1::<4>::RANK, 1);
        assert_eq!(Rank1::<4>::SIZE, 4);
        assert_eq!(Rank2::<2, 3>::SIZE, 6);
        assert_eq!(Rank2::<2, 3>::DIMS, &[2, 3]);
        assert_eq!(Rank3::<1, 2, 3>::RANK, 3);
        assert_eq!(Rank3::<1, 2, 3>::SIZE, 6);
        assert_eq!(Rank3::<1, 2, 3>::DIMS, &[1, 2, 3]);
    }

    #[test]
    fn row_major_storage() {
        let array = Rank2::<2, 3>::array_from_fn(|i| i);
        assert_eq!(array, [[0, 1, 2], [3, 4, 5]]);
        assert_eq!(Rank2::<2, 3>::flatten(&array), &[0, 1, 2, 3, 4, 5]);

        let array = Rank3::<2, 2, 2>::array_from_fn(|i| i);
        assert_eq!(array, [[[0, 1], [2, 3]], [[4, 5], [6, 7]]]);
        assert_eq!(Rank3::<2, 2, 2>::flatten(&array), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn offsets() {
        assert_eq!(<usize as TensorIndex<Rank1<3>>>::offset(2), 2);
        assert_eq!(<(usize, usize) as TensorIndex<Rank2<2, 3>>>::offset((1, 2)), 5);
        assert_eq!(<(usize, usize) as TensorIndex<Rank2<2, 3>>>::offset((0, 4)), 4);
        assert_eq!(
            <(usize, usize, usize) as TensorIndex<Rank3<2, 3, 4>>>::offset((1, 2, 3)),
            23
        );
        assert_eq!(
            <(usize, usize) as TensorIndex<Rank2<2, 3>>>::offset((usize::MAX, 0)),
            usize::MAX
        );
    }
}
