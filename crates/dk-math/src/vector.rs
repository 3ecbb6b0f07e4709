use crate::{shape::Rank1, Error, Float, Numeric, Real, Result, Signed, Tensor};

mod ops;
mod view;

pub use view::{XY, XYZ, XYZW};

/// An `N`-element vector storing elements of type `T`.
///
/// [`Vector`] is a [`Tensor`] of rank 1, so everything documented there (construction, indexing,
/// element-wise arithmetic, formatting) applies to vectors as well. On top of that, vectors
/// provide the Euclidean inner product and the norm induced by it.
///
/// # Element Access
///
/// For vectors with 2 to 4 dimensions, elements can be accessed as fields `x`, `y`, `z`, or `w`,
/// in addition to indexing:
///
/// ```
/// # use dk_math::*;
/// let mut v = vec3(1, 2, 3);
/// v.y = 20;
/// assert_eq!(v[1], 20);
/// assert_eq!(v.z, v[2]);
/// ```
///
/// # Ordering
///
/// Vectors are ordered by their length. Since ordering has to be consistent with equality,
/// distinct vectors of the same length are incomparable, and `<=`/`>=` between them return
/// `false`. Use [`Vector::cmp_magnitude`] to compare lengths only.
///
/// ```
/// # use dk_math::*;
/// assert!(vec2(1, 1) < vec2(0, 2));
/// assert!(!(vec2(1, 0) <= vec2(0, 1)));
/// assert_eq!(vec2(1, 0).cmp_magnitude(&vec2(0, 1)), Some(std::cmp::Ordering::Equal));
/// ```
pub type Vector<T, const N: usize> = Tensor<T, Rank1<N>>;

/// A 2-dimensional vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vector3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vector4<T> = Vector<T, 4>;

/// A 2-dimensional vector with [`Real`] elements.
pub type Vector2D = Vector2<Real>;
/// A 3-dimensional vector with [`Real`] elements.
pub type Vector3D = Vector3<Real>;
/// A 4-dimensional vector with [`Real`] elements.
pub type Vector4D = Vector4<Real>;

/// Tolerance used by [`Vector::is_parallel`] and [`Vector::is_perpendicular`].
pub const EPSILON: f64 = 1e-6;

/// Names one of the first four coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    W,
}

impl Axis {
    /// Returns the index of the vector element belonging to this axis.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl<T: Numeric, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Tensor([T::ZERO; N]);

    /// Returns a vector that points along `axis`, with length 1.
    ///
    /// Returns an [`Error::OutOfRange`] if the vector has no such axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// assert_eq!(Vector3::axis(Axis::Y), Ok(vec3(0, 1, 0)));
    /// assert!(Vector2::<i32>::axis(Axis::Z).is_err());
    /// ```
    pub fn axis(axis: Axis) -> Result<Self> {
        Self::axis_of(axis, Self::unit())
    }

    /// Returns a copy of `source` with every element except the one belonging to `axis` set to 0.
    ///
    /// Returns an [`Error::OutOfRange`] if the vector has no such axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// assert_eq!(Vector3::axis_of(Axis::Z, vec3(4, 5, 6)), Ok(vec3(0, 0, 6)));
    /// ```
    pub fn axis_of(axis: Axis, source: Self) -> Result<Self> {
        let index = axis.index();
        if index >= N {
            log::debug!("{axis:?} axis requested from a {N}-dimensional vector");
            return Err(Error::OutOfRange { index, size: N });
        }
        Ok(Self::project_axis(index, source))
    }

    fn project_axis(index: usize, source: Self) -> Self {
        Self::from_fn(|i| if i == index { source[i] } else { T::ZERO })
    }

    /// Returns the unit vector along the X axis.
    pub fn x_axis() -> Self {
        Self::x_axis_of(Self::unit())
    }

    /// Returns the unit vector along the Y axis.
    ///
    /// Fails to compile for vectors with less than 2 elements.
    pub fn y_axis() -> Self {
        Self::y_axis_of(Self::unit())
    }

    /// Returns the unit vector along the Z axis.
    ///
    /// Fails to compile for vectors with less than 3 elements.
    ///
    /// ```compile_fail
    /// # use dk_math::*;
    /// let z = Vector2::<f32>::z_axis();
    /// ```
    pub fn z_axis() -> Self {
        Self::z_axis_of(Self::unit())
    }

    /// Returns the unit vector along the W axis.
    ///
    /// Fails to compile for vectors with less than 4 elements.
    pub fn w_axis() -> Self {
        Self::w_axis_of(Self::unit())
    }

    /// Returns the component of `source` along the X axis.
    pub fn x_axis_of(source: Self) -> Self {
        Self::project_axis(0, source)
    }

    /// Returns the component of `source` along the Y axis.
    pub fn y_axis_of(source: Self) -> Self {
        const { assert!(N > 1, "vector has no Y axis") };
        Self::project_axis(1, source)
    }

    /// Returns the component of `source` along the Z axis.
    pub fn z_axis_of(source: Self) -> Self {
        const { assert!(N > 2, "vector has no Z axis") };
        Self::project_axis(2, source)
    }

    /// Returns the component of `source` along the W axis.
    pub fn w_axis_of(source: Self) -> Self {
        const { assert!(N > 3, "vector has no W axis") };
        Self::project_axis(3, source)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// The products are accumulated in [`f64`] for every element type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3.0);
    /// ```
    #[doc(alias = "inner_product")]
    pub fn dot(self, other: Self) -> f64 {
        self.iter()
            .zip(other.iter())
            .map(|(&a, &b)| a.to_f64() * b.to_f64())
            .sum()
    }

    /// Returns the squared length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// assert_eq!(vec2(4, 0).magnitude_squared(), 16.0);
    /// ```
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Returns the length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// assert_eq!(vec2(3.0, 4.0).magnitude(), 5.0);
    /// ```
    #[doc(alias = "length")]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns the Euclidean norm of this vector, which is the same as its
    /// [magnitude][Vector::magnitude].
    #[inline]
    pub fn norm(&self) -> f64 {
        self.magnitude()
    }

    /// Returns whether `self` and `other` are perpendicular, within [`EPSILON`].
    pub fn is_perpendicular(self, other: Self) -> bool {
        self.dot(other).abs() < EPSILON
    }

    /// Returns whether `self` and `other` point along the same line, within [`EPSILON`].
    ///
    /// Vectors pointing in opposite directions are parallel, and the zero vector is parallel to
    /// every vector.
    pub fn is_parallel(self, other: Self) -> bool {
        (self.dot(other).abs() - self.magnitude() * other.magnitude()).abs() < EPSILON
    }

    /// Compares the lengths of `self` and `other`.
    ///
    /// Unlike the [`PartialOrd`] impl, vectors of equal length compare as
    /// [`Equal`][std::cmp::Ordering::Equal] here, regardless of their direction. The
    /// [`PartialOrd`] impl reports such vectors as unordered, since they are of equal length but
    /// not equal.
    ///
    /// ```
    /// # use dk_math::*;
    /// use std::cmp::Ordering;
    ///
    /// let (x, y) = (vec2(1, 0), vec2(0, 1));
    /// assert_eq!(x.cmp_magnitude(&y), Some(Ordering::Equal));
    /// assert_eq!(x.partial_cmp(&y), None);
    /// assert_eq!(x.cmp_magnitude(&vec2(2, 0)), Some(Ordering::Less));
    /// ```
    pub fn cmp_magnitude(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.magnitude_squared().partial_cmp(&other.magnitude_squared())
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Divides this vector by its length in place, turning it into a unit vector.
    ///
    /// Returns [`Error::DivisionByZero`] and leaves the vector unmodified if its length is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let mut v = vec3(0.0, 0.0, 4.0);
    /// v.normalize()?;
    /// assert_eq!(v, vec3(0.0, 0.0, 1.0));
    ///
    /// assert_eq!(Vector3D::zero().normalize(), Err(Error::DivisionByZero));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn normalize(&mut self) -> Result<&mut Self> {
        // The norm of a finite `f32` vector may not fit in an `f32`.
        let norm = self.norm();
        if norm == 0.0 {
            log::debug!("cannot normalize zero-length vector {self}");
            return Err(Error::DivisionByZero);
        }
        for elem in self.iter_mut() {
            *elem = T::from_f64(elem.to_f64() / norm);
        }
        Ok(self)
    }

    /// Returns a unit vector pointing in the same direction as `self`.
    ///
    /// Returns [`Error::DivisionByZero`] if the length of `self` is zero.
    pub fn normalized(mut self) -> Result<Self> {
        self.normalize()?;
        Ok(self)
    }
}

impl<T: Copy> Vector2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Tensor([x, y])
    }

    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    pub fn extend(self, z: T) -> Vector3<T> {
        let [x, y] = self.0;
        Vector3::new(x, y, z)
    }
}

impl<T: Copy> Vector3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Tensor([x, y, z])
    }

    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector2<T> {
        let [x, y, _] = self.0;
        Vector2::new(x, y)
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, w: T) -> Vector4<T> {
        let [x, y, z] = self.0;
        Vector4::new(x, y, z, w)
    }
}

impl<T: Signed> Vector3<T> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both `self` and `other`, and its direction depends on the
    /// order of the arguments: swapping them inverts it. Negative zeroes in the result are turned
    /// into positive ones.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let x = Vector3::<f32>::x_axis();
    /// let y = Vector3::<f32>::y_axis();
    /// let z = Vector3::<f32>::z_axis();
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = Vector3::new(
            a2 * b3 - a3 * b2 + T::ZERO,
            a3 * b1 - a1 * b3 + T::ZERO,
            a1 * b2 - a2 * b1 + T::ZERO,
        );
        cross
    }
}

impl<T: Copy> Vector4<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Tensor([x, y, z, w])
    }

    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector3<T> {
        let [x, y, z, _] = self.0;
        Vector3::new(x, y, z)
    }
}

/// Constructs a [`Vector2`] from its two elements.
#[inline]
pub const fn vec2<T: Copy>(x: T, y: T) -> Vector2<T> {
    Vector2::new(x, y)
}

/// Constructs a [`Vector3`] from its three elements.
#[inline]
pub const fn vec3<T: Copy>(x: T, y: T, z: T) -> Vector3<T> {
    Vector3::new(x, y, z)
}

/// Constructs a [`Vector4`] from its four elements.
#[inline]
pub const fn vec4<T: Copy>(x: T, y: T, z: T, w: T) -> Vector4<T> {
    Vector4::new(x, y, z, w)
}

/// Computes the dot product of `a` and `b`. See [`Vector::dot`].
#[inline]
pub fn dot<T: Numeric, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> f64 {
    a.dot(b)
}

/// Returns the length of `v`. See [`Vector::magnitude`].
#[inline]
pub fn magnitude<T: Numeric, const N: usize>(v: Vector<T, N>) -> f64 {
    v.magnitude()
}

/// Returns the squared length of `v`. See [`Vector::magnitude_squared`].
#[inline]
pub fn magnitude_squared<T: Numeric, const N: usize>(v: Vector<T, N>) -> f64 {
    v.magnitude_squared()
}

/// Returns the Euclidean norm of `v`. See [`Vector::norm`].
#[inline]
pub fn norm<T: Numeric, const N: usize>(v: Vector<T, N>) -> f64 {
    v.norm()
}

/// Computes the cross product of `a` and `b`. See [`Vector3::cross`].
#[inline]
pub fn cross<T: Signed>(a: Vector3<T>, b: Vector3<T>) -> Vector3<T> {
    a.cross(b)
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn access() {
        let mut v = vec4(1, 2, 3, 4);
        assert_eq!(v.x, 1);
        assert_eq!(v.y, 2);
        assert_eq!(v.z, 3);
        assert_eq!(v.w, 4);

        v.z = 30;
        assert_eq!(v[2], 30);
        v[0] = 10;
        assert_eq!(v.x, 10);

        let mut v = vec2(0.0, 1.0);
        v.x += 0.5;
        assert_eq!(v, vec2(0.5, 1.0));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vector4D::w_axis()), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vector4::<f32>::w_axis()), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(vec3(1, 2, 3).to_string(), "(1, 2, 3)");
    }

    #[test]
    fn factories() {
        assert_eq!(Vector3::<i32>::ZERO, vec3(0, 0, 0));
        assert_eq!(Vector3::<i32>::zero(), vec3(0, 0, 0));
        assert_eq!(Vector3::<i32>::unit(), vec3(1, 1, 1));
        assert_eq!(Vector4::<i32>::x_axis(), vec4(1, 0, 0, 0));
        assert_eq!(Vector4::<i32>::w_axis(), vec4(0, 0, 0, 1));
        assert_eq!(Vector::<i64, 5>::z_axis()[2], 1);
        assert_eq!(Vector2::y_axis_of(vec2(5, 6)), vec2(0, 6));
        assert_eq!(
            Vector2::<i32>::axis(Axis::W),
            Err(Error::OutOfRange { index: 3, size: 2 })
        );
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3.0);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35.0);
        assert_eq!(super::dot(vec2(1u8, 2), vec2(3, 4)), 11.0);

        let v = vec4(1.5, -2.0, 0.25, 8.0);
        assert_eq!(v.dot(v), v.magnitude_squared());
    }

    #[test]
    fn dot_does_not_overflow() {
        let v = vec2(200u8, 200);
        assert_eq!(v.magnitude_squared(), 80_000.0);
    }

    #[test]
    fn magnitude() {
        assert_eq!(vec2(3, 4).magnitude(), 5.0);
        assert_eq!(norm(vec2(-3.0, -4.0)), 5.0);
        assert_eq!(magnitude_squared(vec3(1, 2, 2)), 9.0);
        assert_eq!(super::magnitude(Vector3::<f32>::ZERO), 0.0);
    }

    #[test]
    fn normalize() {
        let v = vec3(3.0f64, 0.0, 4.0).normalized().unwrap();
        assert_abs_diff_eq!(v, vec3(0.6, 0.0, 0.8), epsilon = 1e-12);
        assert_abs_diff_eq!(v.norm(), 1.0, epsilon = 1e-12);

        let mut zero = Vector2::<f32>::ZERO;
        assert_eq!(zero.normalize(), Err(Error::DivisionByZero));
        assert_eq!(zero, Vector2::ZERO);
    }

    #[test]
    fn normalize_extreme_magnitudes() {
        // The length of this vector does not fit in an `f32`.
        let v = vec3(3.0e38f32, 3.0e38, 0.0).normalized().unwrap();
        assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v, vec3(0.70710677, 0.70710677, 0.0), epsilon = 1e-6);

        let v = vec2(1.0e-45f32, 0.0).normalized().unwrap();
        assert_eq!(v, vec2(1.0, 0.0));
    }

    #[test]
    fn cross() {
        let x = Vector3::<f32>::x_axis();
        let y = Vector3::<f32>::y_axis();
        let z = Vector3::<f32>::z_axis();
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
        assert_eq!(super::cross(y, x), -z);
        assert_eq!(vec3(1, 2, 3).cross(vec3(4, 5, 6)), vec3(-3, 6, -3));

        // `0 * -1 - 0 * 0` is `-0.0`.
        let c = vec3(1.0f32, 0.0, 0.0).cross(vec3(0.0, 0.0, -1.0));
        assert_eq!(c, vec3(0.0, 1.0, 0.0));
        assert!(c.iter().all(|e| e.is_sign_positive()));
    }

    #[test]
    fn perpendicular_parallel() {
        let x = Vector3::<f64>::x_axis();
        let y = Vector3::<f64>::y_axis();
        assert!(x.is_perpendicular(y));
        assert!(!x.is_parallel(y));
        assert!(x.is_parallel(x * 3.0));
        assert!(x.is_parallel(-x));
        assert!(!x.is_perpendicular(x));
        assert!(vec2(1, 1).is_perpendicular(vec2(1, -1)));
    }

    #[test]
    fn ordering() {
        assert!(vec3(1, 0, 0) < vec3(2, 0, 0));
        assert!(vec3(0, 0, 5) > vec3(1, 1, 1));
        assert!(vec3(1, 2, 3) <= vec3(1, 2, 3));
        assert_eq!(vec2(1, 0).partial_cmp(&vec2(0, 1)), None);
        assert_eq!(vec2(1, 0).cmp_magnitude(&vec2(0, 1)), Some(Ordering::Equal));
        assert_eq!(vec2(f32::NAN, 0.0).cmp_magnitude(&vec2(0.0, 1.0)), None);
    }

    #[test]
    fn resize() {
        assert_eq!(vec2(1, 2).extend(3), vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3).extend(4).truncate(), vec3(1, 2, 3));
        assert_eq!(vec4(1, 2, 3, 4).truncate().truncate(), vec2(1, 2));
    }
}
