//! Error type shared by the fallible toolkit operations.
//!
//! Reading an unset key or cell is not an error; those reads return `None`.

use thiserror::Error;

/// Result type alias using the toolkit's `Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by geometry and container operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument has a shape the operation cannot work with
    /// (zero polygon sides, a negative table key, ...).
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A geometric operation has no defined result for this input,
    /// e.g. normalizing a zero-length vector.
    #[error("degenerate geometry: {reason}")]
    DegenerateGeometry { reason: String },
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_reason() {
        let e = Error::invalid("sides must be positive");
        assert_eq!(e.to_string(), "invalid argument: sides must be positive");
        let d = Error::degenerate("zero-length vector");
        assert_eq!(d.to_string(), "degenerate geometry: zero-length vector");
        assert_ne!(e, d);
    }
}
