use std::{
    fmt,
    hash::{Hash, Hasher},
    slice,
};

use crate::{
    shape::{Rank1, Rank2, Rank3, Shape, TensorIndex},
    Error, Numeric, Result,
};

mod ops;

/// A fixed-shape, stack-allocated collection of numeric elements.
///
/// The shape `S` is a marker type from the [`shape`][crate::shape] module and is part of the type,
/// so the number of dimensions and the extent of each dimension are fixed at compile time.
/// [`Vector`][crate::Vector] and [`Matrix`][crate::Matrix] are aliases of [`Tensor`] with a
/// [`Rank1`] and [`Rank2`] shape respectively, and get their additional functionality from impl
/// blocks specific to those shapes.
///
/// # Construction
///
/// - [`Tensor::from_fn`] creates each element by invoking a closure with its flat index.
/// - [`Tensor::from_flat`] fills the tensor from a flat array, which must have exactly as many
///   elements as the tensor.
/// - [`Tensor::splat`], [`Tensor::zero`] and [`Tensor::unit`] fill every element with the same
///   value.
/// - Tensors can be created from (nested) arrays using their [`From`] implementations.
/// - The [`Default`] implementation initializes each element with its default value.
///
/// # Element Access
///
/// Tensors can be indexed with a flat `usize` offset, which works for every shape, or with a
/// `(row, col)` / `(i, j, k)` tuple for rank 2 and rank 3 tensors. Storage is row-major.
///
/// ```
/// # use dk_math::*;
/// let mut t = Matrix2x3::from([[1, 2, 3], [4, 5, 6]]);
/// assert_eq!(t[(1, 0)], 4);
/// assert_eq!(t[3], 4);
/// t[(0, 2)] = 9;
/// assert_eq!(t.as_slice(), &[1, 2, 9, 4, 5, 6]);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Tensor::at`]
/// returns an [`Error`] instead, and [`Tensor::get`] returns an [`Option`].
///
/// ```
/// # use dk_math::*;
/// let t = Matrix2x3::from([[1, 2, 3], [4, 5, 6]]);
/// assert_eq!(t.at((1, 2)), Ok(6));
/// assert_eq!(t.at(6), Err(Error::OutOfRange { index: 6, size: 6 }));
/// assert_eq!(t.get(7), None);
/// ```
///
/// [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
/// the element type `T` also allows this.
#[repr(transparent)]
pub struct Tensor<T: Copy, S: Shape>(pub(crate) S::Array<T>);

// SAFETY: `Shape` is sealed, and every shape stores an unpadded nested array of `T`.
unsafe impl<T: bytemuck::Zeroable + Copy, S: Shape> bytemuck::Zeroable for Tensor<T, S> {}
unsafe impl<T: bytemuck::Pod, S: Shape> bytemuck::Pod for Tensor<T, S> {}

impl<T: Copy, S: Shape> Tensor<T, S> {
    /// Creates a tensor where each element is initialized by invoking a closure with its flat,
    /// row-major index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let m = Matrix2x3::from_fn(|i| i * 10);
    /// assert_eq!(m, Matrix::from_rows([[0, 10, 20], [30, 40, 50]]));
    /// ```
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        let _ = const { S::SIZE };
        Self(S::array_from_fn(f))
    }

    /// Creates a tensor from its nested storage array.
    #[inline]
    pub fn from_array(array: S::Array<T>) -> Self {
        let _ = const { S::SIZE };
        Self(array)
    }

    /// Creates a tensor from a flat, row-major list of elements.
    ///
    /// `M` must be equal to the number of elements of the tensor, otherwise this fails to compile.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let t = Tensor::<i32, Rank3<1, 2, 3>>::from_flat([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(t[(0, 1, 0)], 4);
    /// ```
    ///
    /// ```compile_fail
    /// # use dk_math::*;
    /// let m = Matrix2::<i32>::from_flat([1, 2, 3]);
    /// ```
    pub fn from_flat<const M: usize>(elements: [T; M]) -> Self {
        const { assert!(M == S::SIZE, "element count does not match the tensor's size") };
        Self::from_fn(|i| elements[i])
    }

    /// Creates a tensor with each element initialized to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_fn(|_| value)
    }

    /// Returns the number of elements in this tensor.
    #[inline]
    pub fn size(&self) -> usize {
        S::SIZE
    }

    /// Returns the number of dimensions of this tensor.
    #[inline]
    pub fn rank(&self) -> usize {
        S::RANK
    }

    /// Returns the extent of each dimension, outermost first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let t = Tensor::<i32, Rank3<1, 2, 3>>::default();
    /// assert_eq!(t.shape(), &[1, 2, 3]);
    /// assert_eq!(t.size(), 6);
    /// assert_eq!(t.rank(), 3);
    /// ```
    #[inline]
    pub fn shape(&self) -> &'static [usize] {
        S::DIMS
    }

    /// Returns a copy of the element at `index`, or an [`Error::OutOfRange`] if the index is out
    /// of bounds.
    pub fn at<I: TensorIndex<S>>(&self, index: I) -> Result<T> {
        self.get(index).copied().ok_or_else(|| out_of_range::<S>(index.offset()))
    }

    /// Returns a mutable reference to the element at `index`, or an [`Error::OutOfRange`] if the
    /// index is out of bounds.
    pub fn at_mut<I: TensorIndex<S>>(&mut self, index: I) -> Result<&mut T> {
        let offset = index.offset();
        self.as_mut_slice()
            .get_mut(offset)
            .ok_or_else(|| out_of_range::<S>(offset))
    }

    /// Returns a reference to the element at `index`, or [`None`] if the index is out of bounds.
    #[inline]
    pub fn get<I: TensorIndex<S>>(&self, index: I) -> Option<&T> {
        self.as_slice().get(index.offset())
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if the index is out of
    /// bounds.
    #[inline]
    pub fn get_mut<I: TensorIndex<S>>(&mut self, index: I) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index.offset())
    }

    /// Returns a reference to the element at `index` without performing bounds checks.
    ///
    /// # Safety
    ///
    /// The flat offset of `index` must be less than [`Tensor::size`].
    #[inline]
    pub unsafe fn get_unchecked<I: TensorIndex<S>>(&self, index: I) -> &T {
        self.as_slice().get_unchecked(index.offset())
    }

    /// Returns a mutable reference to the element at `index` without performing bounds checks.
    ///
    /// # Safety
    ///
    /// The flat offset of `index` must be less than [`Tensor::size`].
    #[inline]
    pub unsafe fn get_unchecked_mut<I: TensorIndex<S>>(&mut self, index: I) -> &mut T {
        self.as_mut_slice().get_unchecked_mut(index.offset())
    }

    /// Returns a reference to the underlying nested array.
    #[inline]
    pub fn as_array(&self) -> &S::Array<T> {
        &self.0
    }

    /// Returns the elements as a flat, row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        S::flatten(&self.0)
    }

    /// Returns the elements as a flat, row-major mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        S::flatten_mut(&mut self.0)
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.as_mut_slice().as_mut_ptr()
    }

    /// Returns an iterator over the elements in row-major order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references to the elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Applies a closure to each element, returning a new tensor of the same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<U, F>(self, mut f: F) -> Tensor<U, S>
    where
        U: Copy,
        F: FnMut(T) -> U,
    {
        let elems = self.as_slice();
        Tensor::from_fn(|i| f(elems[i]))
    }

    /// Combines the elements of `self` and `other` pairwise.
    pub(crate) fn zip_map<U, F>(self, other: Tensor<U, S>, mut f: F) -> Self
    where
        U: Copy,
        F: FnMut(T, U) -> T,
    {
        let (a, b) = (self.as_slice(), other.as_slice());
        Self::from_fn(|i| f(a[i], b[i]))
    }

    /// Reinterprets the elements, in row-major order, as a tensor of a different shape.
    ///
    /// Both shapes must have the same number of elements, otherwise this fails to compile.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let v = vec4(1, 2, 3, 4);
    /// let m: Matrix2<i32> = v.reshape();
    /// assert_eq!(m, Matrix::from_rows([[1, 2], [3, 4]]));
    /// ```
    pub fn reshape<S2: Shape>(self) -> Tensor<T, S2> {
        const { assert!(S::SIZE == S2::SIZE, "reshape must preserve the number of elements") };
        let elems = self.as_slice();
        Tensor::from_fn(|i| elems[i])
    }
}

impl<T: Numeric, S: Shape> Tensor<T, S> {
    /// Returns a tensor with every element set to zero.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// Returns a tensor with every element set to one.
    #[inline]
    pub fn unit() -> Self {
        Self::splat(T::ONE)
    }

    /// Converts each element to another numeric type.
    ///
    /// The conversion goes through [`f64`], so integers wider than 53 bits may lose precision, and
    /// conversions to integer types truncate and saturate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// assert_eq!(vec3(1.5f32, -2.5, 3.0).cast::<i32>(), vec3(1, -2, 3));
    /// ```
    pub fn cast<U: Numeric>(self) -> Tensor<U, S> {
        self.map(|elem| U::from_f64(elem.to_f64()))
    }

    /// Multiplies `self` and `other` element by element.
    ///
    /// For vectors this is the same as the `*` operator. For matrices, `*` is the matrix product,
    /// so this method is the only way to get the element-wise product.
    pub fn mul_elementwise(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a * b)
    }

    /// Divides `self` by `other` element by element.
    ///
    /// Returns [`Error::DivisionByZero`] if any element of `other` is zero.
    pub fn try_div(mut self, other: Self) -> Result<Self> {
        self.try_div_assign(other)?;
        Ok(self)
    }

    /// Divides `self` by `other` element by element, in place.
    ///
    /// If any element of `other` is zero, [`Error::DivisionByZero`] is returned and `self` is left
    /// unmodified.
    pub fn try_div_assign(&mut self, other: Self) -> Result<()> {
        if other.iter().any(|&elem| elem.is_zero()) {
            log::debug!("refusing to divide {self:?} by {other:?}");
            return Err(Error::DivisionByZero);
        }
        for (a, &b) in self.iter_mut().zip(other.iter()) {
            *a /= b;
        }
        Ok(())
    }

    /// Divides every element of `self` by `value`.
    ///
    /// Returns [`Error::DivisionByZero`] if `value` is zero.
    pub fn try_div_scalar(mut self, value: T) -> Result<Self> {
        self.try_div_assign_scalar(value)?;
        Ok(self)
    }

    /// Divides every element of `self` by `value`, in place.
    ///
    /// If `value` is zero, [`Error::DivisionByZero`] is returned and `self` is left unmodified.
    pub fn try_div_assign_scalar(&mut self, value: T) -> Result<()> {
        if value.is_zero() {
            log::debug!("refusing to divide {self:?} by zero");
            return Err(Error::DivisionByZero);
        }
        for elem in self.iter_mut() {
            *elem /= value;
        }
        Ok(())
    }
}

fn out_of_range<S: Shape>(index: usize) -> Error {
    log::debug!("index {index} is out of range for shape {:?}", S::DIMS);
    Error::OutOfRange {
        index,
        size: S::SIZE,
    }
}

impl<T: Copy, S: Shape> Clone for Tensor<T, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, S: Shape> Copy for Tensor<T, S> {}

impl<T: Copy + Default, S: Shape> Default for Tensor<T, S> {
    #[inline]
    fn default() -> Self {
        Self::splat(T::default())
    }
}

impl<T: Copy + PartialEq, S: Shape> PartialEq for Tensor<T, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Eq, S: Shape> Eq for Tensor<T, S> {}

impl<T: Copy + Hash, S: Shape> Hash for Tensor<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Copy, const N: usize> From<[T; N]> for Tensor<T, Rank1<N>> {
    #[inline]
    fn from(array: [T; N]) -> Self {
        Self::from_array(array)
    }
}

impl<T: Copy, const R: usize, const C: usize> From<[[T; C]; R]> for Tensor<T, Rank2<R, C>> {
    #[inline]
    fn from(array: [[T; C]; R]) -> Self {
        Self::from_array(array)
    }
}

impl<T: Copy, const A: usize, const B: usize, const C: usize> From<[[[T; C]; B]; A]>
    for Tensor<T, Rank3<A, B, C>>
{
    #[inline]
    fn from(array: [[[T; C]; B]; A]) -> Self {
        Self::from_array(array)
    }
}

impl<T: Copy, S: Shape> AsRef<[T]> for Tensor<T, S> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Copy, S: Shape> AsMut<[T]> for Tensor<T, S> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T: Copy, S: Shape> IntoIterator for &'a Tensor<T, S> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Copy, S: Shape> IntoIterator for &'a mut Tensor<T, S> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

type FmtElem<T> = fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result;

/// Writes `elems` as parenthesized, comma-separated lists, one level of nesting per dimension.
fn fmt_nested<T>(
    f: &mut fmt::Formatter<'_>,
    elems: &[T],
    dims: &[usize],
    fmt_elem: FmtElem<T>,
) -> fmt::Result {
    let Some((&len, inner)) = dims.split_first() else {
        return fmt_elem(&elems[0], f);
    };

    f.write_str("(")?;
    for (i, chunk) in elems.chunks(elems.len() / len).enumerate() {
        if i != 0 {
            f.write_str(", ")?;
        }
        fmt_nested(f, chunk, inner, fmt_elem)?;
    }
    f.write_str(")")
}

impl<T: Copy + fmt::Debug, S: Shape> fmt::Debug for Tensor<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_nested(f, self.as_slice(), S::DIMS, <T as fmt::Debug>::fmt)
    }
}

impl<T: Copy + fmt::Display, S: Shape> fmt::Display for Tensor<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_nested(f, self.as_slice(), S::DIMS, <T as fmt::Display>::fmt)
    }
}
