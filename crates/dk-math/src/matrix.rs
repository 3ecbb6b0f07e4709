use std::array;

use crate::{
    shape::Rank2, Angle, Float, Numeric, Real, Result, Signed, Tensor, Vector, Vector2, Vector3,
};

mod ops;

/// A 2x2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// A 3x3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// A 4x4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;

/// A 2x2 matrix with [`Real`] elements.
pub type Matrix2D = Matrix2<Real>;
/// A 3x3 matrix with [`Real`] elements.
pub type Matrix3D = Matrix3<Real>;
/// A 4x4 matrix with [`Real`] elements.
pub type Matrix4D = Matrix4<Real>;

/// A matrix with 2 rows and 3 columns.
pub type Matrix2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Matrix2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Matrix3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Matrix3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Matrix4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Matrix4x3<T> = Matrix<T, 4, 3>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// [`Matrix`] is a [`Tensor`] of rank 2. The `*` operator between two matrices computes the matrix
/// product (the shapes of the operands have to line up), and a matrix multiplied with a
/// [`Vector`] treats the vector as a column vector.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] create a matrix from an array of row or
///   column vectors (or arrays).
/// - [`Matrix::generate`] creates each element by invoking a closure with its row and column.
/// - Square matrices have [`Matrix::identity`], [`Matrix::diagonal`] and
///   [`Matrix::anti_diagonal`].
/// - [`Matrix2`], [`Matrix3`] and [`Matrix4`] have factories for geometric transforms, such as
///   [`Matrix3::rotation`] and [`Matrix4::translate`]. All of them are meant to be applied to
///   column vectors (`matrix * vector`) in a right-handed coordinate system.
///
/// # Element Access
///
/// Matrices are indexed with `(row, col)` tuples, matching common mathematical notation. Indices
/// are 0-based. Only the resulting row-major offset `row * C + col` is checked against the number
/// of elements:
///
/// ```
/// # use dk_math::*;
/// let m = Matrix::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
/// ]);
/// assert_eq!(m[(1, 0)], 4);
/// assert_eq!(m.at((0, 3)), Ok(4));
/// assert!(m.at((2, 0)).is_err());
/// ```
pub type Matrix<T, const R: usize, const C: usize> = Tensor<T, Rank2<R, C>>;

/// Square matrices that have a determinant.
///
/// Implemented for all square matrices up to 4x4. The matrices also have an inherent
/// `determinant` method, so this trait is only needed for code that is generic over the matrix
/// size.
pub trait Determinant {
    /// Returns the [determinant] of the matrix, computed in [`f64`].
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    fn determinant(&self) -> f64;
}

/// Returns the determinant of `matrix`.
///
/// # Examples
///
/// ```
/// # use dk_math::*;
/// assert_eq!(determinant(&Matrix3::<i32>::identity()), 1.0);
/// ```
#[inline]
pub fn determinant<M: Determinant>(matrix: &M) -> f64 {
    matrix.determinant()
}

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        let rows: [Vector<T, C>; R] = rows.map(Into::into);
        Self::generate(|row, col| rows[row][col])
    }

    /// Creates a [`Matrix`] from an array of columns.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        let columns: [Vector<T, R>; C] = columns.map(Into::into);
        Self::generate(|row, col| columns[col][row])
    }

    /// Creates a [`Matrix`] by invoking a closure with the row and column of every element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let m = Matrix2x3::generate(|row, col| row * 10 + col);
    /// assert_eq!(m, Matrix::from_rows([[0, 1, 2], [10, 11, 12]]));
    /// ```
    pub fn generate<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::from_fn(|i| f(i / C, i % C))
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        R
    }

    /// Returns the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        C
    }

    /// Returns a copy of row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `R`.
    pub fn row(&self, index: usize) -> Vector<T, C> {
        self.0[index].into()
    }

    /// Returns a copy of column `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `C`.
    pub fn column(&self, index: usize) -> Vector<T, R> {
        Vector::from_fn(|row| self.0[row][index])
    }

    /// Returns the transpose of this matrix, flipping it along its diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let m = Matrix::from_rows([
    ///     [1, 2, 3],
    /// ]);
    /// assert_eq!(m.transpose(), Matrix::from_rows([
    ///     [1],
    ///     [2],
    ///     [3],
    /// ]));
    /// ```
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix::generate(|row, col| self.0[col][row])
    }
}

impl<T: Numeric, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Tensor([[T::ZERO; C]; R]);
}

impl<T: Copy, const N: usize> Matrix<T, N, N> {
    /// Transposes this square matrix in place.
    pub fn transpose_in_place(&mut self) {
        *self = self.transpose();
    }
}

impl<T: Numeric, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix, with 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any matrix or vector with the identity matrix leaves it unchanged.
    pub fn identity() -> Self {
        Self::diagonal_splat(T::ONE)
    }

    /// Creates a matrix with the given values on its diagonal, and 0 everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let m = Matrix::diagonal([1, 2]);
    /// assert_eq!(m, Matrix::from_rows([
    ///     [1, 0],
    ///     [0, 2],
    /// ]));
    /// ```
    pub fn diagonal(values: impl Into<Vector<T, N>>) -> Self {
        let values = values.into();
        Self::generate(|row, col| if row == col { values[row] } else { T::ZERO })
    }

    /// Creates a matrix with `value` in every element of its diagonal, and 0 everywhere else.
    pub fn diagonal_splat(value: T) -> Self {
        Self::diagonal(Vector::splat(value))
    }

    /// Creates a matrix with the given values on its anti-diagonal (running from the top right
    /// to the bottom left), and 0 everywhere else.
    ///
    /// The first value ends up in the first row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let m = Matrix::anti_diagonal([1, 2, 3]);
    /// assert_eq!(m, Matrix::from_rows([
    ///     [0, 0, 1],
    ///     [0, 2, 0],
    ///     [3, 0, 0],
    /// ]));
    /// ```
    pub fn anti_diagonal(values: impl Into<Vector<T, N>>) -> Self {
        let values = values.into();
        Self::generate(|row, col| {
            if row + col == N - 1 {
                values[row]
            } else {
                T::ZERO
            }
        })
    }

    /// Creates a matrix with `value` in every element of its anti-diagonal, and 0 everywhere else.
    pub fn anti_diagonal_splat(value: T) -> Self {
        Self::anti_diagonal(Vector::splat(value))
    }

    /// Returns the sum of the elements on the diagonal.
    pub fn trace(&self) -> T {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }
}

fn det1([[a]]: [[f64; 1]; 1]) -> f64 {
    a
}

fn det2([[a, b], [c, d]]: [[f64; 2]; 2]) -> f64 {
    a * d - b * c
}

fn det3([[a, b, c], [d, e, f], [g, h, i]]: [[f64; 3]; 3]) -> f64 {
    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

/// Cofactor expansion along the first row.
fn det4(m: [[f64; 4]; 4]) -> f64 {
    (0..4)
        .map(|col| {
            let minor = array::from_fn(|r| {
                array::from_fn(|c| m[r + 1][if c < col { c } else { c + 1 }])
            });
            let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
            sign * m[0][col] * det3(minor)
        })
        .sum()
}

macro_rules! determinant {
    ($($n:literal => $det:ident),+) => {
        $(
            impl<T: Numeric> Matrix<T, $n, $n> {
                /// Returns the [determinant] of the matrix, computed in [`f64`].
                ///
                /// [determinant]: https://en.wikipedia.org/wiki/Determinant
                pub fn determinant(&self) -> f64 {
                    $det(self.cast::<f64>().0)
                }
            }

            impl<T: Numeric> Determinant for Matrix<T, $n, $n> {
                #[inline]
                fn determinant(&self) -> f64 {
                    Matrix::<T, $n, $n>::determinant(self)
                }
            }
        )+
    };
}

determinant!(1 => det1, 2 => det2, 3 => det3, 4 => det4);

fn trig<T: Float>(angle: Angle) -> (T, T) {
    let (sin, cos) = angle.radians().sin_cos();
    (T::from_f64(sin), T::from_f64(cos))
}

impl<T: Float> Matrix2<T> {
    /// Creates a matrix that rotates column vectors counterclockwise by `angle`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let m = Matrix2::<f64>::rotation(angle_from_degrees(90.0));
    /// assert_abs_diff_eq!(m * vec2(1.0, 0.0), vec2(0.0, 1.0), epsilon = 1e-12);
    /// ```
    pub fn rotation(angle: Angle) -> Self {
        let (sin, cos) = trig::<T>(angle);
        Self::from_rows([[cos, -sin], [sin, cos]])
    }

    /// Creates a matrix that scales each coordinate by the corresponding element of `factors`.
    pub fn scale(factors: Vector2<T>) -> Self {
        Self::diagonal(factors)
    }
}

impl<T: Float> Matrix3<T> {
    /// Creates a 2D homogeneous transform that translates points by `offset`.
    pub fn translate(offset: Vector2<T>) -> Self {
        let mut m = Self::identity();
        m[(0, 2)] = offset.x;
        m[(1, 2)] = offset.y;
        m
    }

    /// Creates a matrix that rotates column vectors by `angle` around `axis`.
    ///
    /// Positive angles rotate counterclockwise when looking along `axis` towards the origin.
    /// `axis` does not have to be normalized, but it must not be zero, otherwise
    /// [`Error::DivisionByZero`][crate::Error::DivisionByZero] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let m = Matrix3::rotation(angle_from_degrees(90.0), vec3(0.0, 0.0, 2.0))?;
    /// assert_abs_diff_eq!(m * vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0), epsilon = 1e-6);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn rotation(angle: Angle, axis: Vector3<T>) -> Result<Self> {
        let n = axis.normalized()?;
        let (sin, cos) = trig::<T>(angle);
        let m = Self::identity() * cos + Self::skew(n) * sin + outer(n) * (T::ONE - cos);
        log::trace!("rotation by {angle} around {axis}: {m}");
        Ok(m)
    }

    /// Creates a matrix that scales each coordinate by the corresponding element of `factors`.
    pub fn scale(factors: Vector3<T>) -> Self {
        Self::diagonal(factors)
    }

    /// Creates a matrix that projects points onto the line through the origin along `direction`.
    ///
    /// Returns [`Error::DivisionByZero`][crate::Error::DivisionByZero] if `direction` is zero.
    pub fn projection(direction: Vector3<T>) -> Result<Self> {
        Ok(outer(direction.normalized()?))
    }

    /// Creates a matrix that mirrors points across the plane through the origin with the given
    /// `normal`.
    ///
    /// Returns [`Error::DivisionByZero`][crate::Error::DivisionByZero] if `normal` is zero.
    pub fn reflect(normal: Vector3<T>) -> Result<Self> {
        let n = normal.normalized()?;
        Ok(Self::identity() - outer(n) * (T::ONE + T::ONE))
    }

    /// Creates a matrix that projects points onto the plane through the origin with the given
    /// `normal`, removing their component along `normal`.
    ///
    /// Returns [`Error::DivisionByZero`][crate::Error::DivisionByZero] if `normal` is zero.
    pub fn retract(normal: Vector3<T>) -> Result<Self> {
        let n = normal.normalized()?;
        Ok(Self::identity() - outer(n))
    }
}

impl<T: Signed> Matrix3<T> {
    /// Creates the skew-symmetric matrix of `v`, which computes the cross product with `v`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let a = vec3(1, 2, 3);
    /// let b = vec3(-4, 0, 5);
    /// assert_eq!(Matrix3::skew(a) * b, a.cross(b));
    /// ```
    pub fn skew(v: Vector3<T>) -> Self {
        let zero = T::ZERO;
        #[rustfmt::skip]
        let skew = Self::from_rows([
            [zero, -v.z,  v.y],
            [ v.z, zero, -v.x],
            [-v.y,  v.x, zero],
        ]);
        skew
    }

    /// Embeds this linear 3D transform in the upper left corner of a 4x4 homogeneous transform.
    pub fn to_homogeneous(&self) -> Matrix4<T> {
        Matrix4::generate(|row, col| match (row, col) {
            (3, 3) => T::ONE,
            (3, _) | (_, 3) => T::ZERO,
            _ => self.0[row][col],
        })
    }
}

/// The outer product `n nᵀ`.
fn outer<T: Float>(n: Vector3<T>) -> Matrix3<T> {
    Matrix3::generate(|row, col| n[row] * n[col])
}

impl<T: Float> Matrix4<T> {
    /// Creates a homogeneous transform that translates points by `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dk_math::*;
    /// let m = Matrix4::translate(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 4.0, 1.0));
    /// ```
    pub fn translate(offset: Vector3<T>) -> Self {
        let mut m = Self::identity();
        for row in 0..3 {
            m[(row, 3)] = offset[row];
        }
        m
    }

    /// Homogeneous version of [`Matrix3::rotation`].
    pub fn rotation(angle: Angle, axis: Vector3<T>) -> Result<Self> {
        Ok(Matrix3::rotation(angle, axis)?.to_homogeneous())
    }

    /// Homogeneous version of [`Matrix3::scale`].
    pub fn scale(factors: Vector3<T>) -> Self {
        Matrix3::scale(factors).to_homogeneous()
    }

    /// Homogeneous version of [`Matrix3::skew`].
    pub fn skew(v: Vector3<T>) -> Self {
        Matrix3::skew(v).to_homogeneous()
    }

    /// Homogeneous version of [`Matrix3::projection`].
    pub fn projection(direction: Vector3<T>) -> Result<Self> {
        Ok(Matrix3::projection(direction)?.to_homogeneous())
    }

    /// Homogeneous version of [`Matrix3::reflect`].
    pub fn reflect(normal: Vector3<T>) -> Result<Self> {
        Ok(Matrix3::reflect(normal)?.to_homogeneous())
    }

    /// Homogeneous version of [`Matrix3::retract`].
    pub fn retract(normal: Vector3<T>) -> Result<Self> {
        Ok(Matrix3::retract(normal)?.to_homogeneous())
    }
}
