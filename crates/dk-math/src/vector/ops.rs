use std::cmp::Ordering;

use crate::{Numeric, Vector};

/// Length-wise ordering.
///
/// Distinct vectors of equal length are incomparable, so that `a <= b && a >= b` implies `a == b`.
impl<T: Numeric, const N: usize> PartialOrd for Vector<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.cmp_magnitude(other)? {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl<T: Numeric, const N: usize> PartialEq<[T; N]> for Vector<T, N> {
    #[inline]
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}
