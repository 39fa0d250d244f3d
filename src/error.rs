use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed layer-size sequence or layer shapes.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// A vector length does not match the width expected at this stage.
    #[error("dimension mismatch: {what} has len {actual}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Bad learning rate or initialization range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A thread panicked while holding the shared network lock.
    #[error("shared network lock poisoned")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fails with `DimensionMismatch` unless `actual == expected`.
#[inline]
pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::DimensionMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}
