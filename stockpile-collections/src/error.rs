//! Error types for sequence operations.

use core::fmt;

/// Index argument fell outside the valid bounds for the requested operation.
///
/// Read and removal operations accept indices in `[0, len)`; insertion also
/// accepts the one-past-end position, `[0, len]`. Every bounds violation on
/// the public API is reported through this type rather than a panic or a
/// silent clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The rejected index.
    pub index: usize,
    /// Element count at the time of the call.
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfRange {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = OutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "index 5 out of range for length 3");
    }
}
