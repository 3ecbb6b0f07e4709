use std::ops::{Mul, MulAssign};

use crate::{Matrix, Numeric, Vector};

/// Matrix * Column Vector.
impl<T: Numeric, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| (0..C).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Matrix * Matrix.
impl<T: Numeric, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Self::Output {
        Matrix::generate(|i, j| (0..K).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Matrix, for square matrices.
impl<T: Numeric, const N: usize> MulAssign for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Numeric, const R: usize, const C: usize> PartialEq<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn eq(&self, other: &[[T; C]; R]) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, Matrix2, Matrix3};

    use super::*;

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = mat * vec;
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c.shape(), &[4, 3]);
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
        assert_eq!(c, [[33, 36, 39], [75, 82, 89], [117, 128, 139], [159, 174, 189]]);
    }

    #[test]
    fn identity() {
        let m = Matrix::from_rows([[1.5, -2.0, 0.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.25]]);
        assert_eq!(m * Matrix3::identity(), m);
        assert_eq!(Matrix3::identity() * m, m);

        let mut n = m;
        n *= Matrix3::identity();
        assert_eq!(n, m);
    }

    #[test]
    fn mul_assign() {
        let mut m = Matrix::from_rows([[1, 1], [0, 1]]);
        m *= Matrix2::from_rows([[1, 1], [0, 1]]);
        assert_eq!(m, [[1, 2], [0, 1]]);
    }
}
