/// Errors reported by the fallible operations of this crate.
///
/// Shape mismatches are rejected at compile time, so the only failures left to report at runtime
/// are out-of-range element accesses and divisions by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A checked element access used an index beyond the element count.
    #[error("index {index} out of bounds for tensor of size {size}")]
    OutOfRange { index: usize, size: usize },
    /// A division by a zero scalar or zero component, or a normalization of a zero-length value.
    #[error("division by zero")]
    DivisionByZero,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::OutOfRange { index: 7, size: 6 }.to_string(),
            "index 7 out of bounds for tensor of size 6"
        );
        assert_eq!(Error::DivisionByZero.to_string(), "division by zero");
    }
}
