//! Error taxonomy for curve construction and lookups.
//!
//! Every check runs before any output is produced, so a failed call never
//! leaves a partially written coordinate or table behind.

use thiserror::Error;

/// Errors produced by curve construction, transforms and enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested dimension/order pair cannot be represented.
    #[error("invalid curve spec (dimension {dimension}, order {order}): {reason}")]
    InvalidSpec {
        /// Requested number of axes.
        dimension: u32,
        /// Requested number of subdivision levels.
        order: u32,
        /// Human readable explanation.
        reason: String,
    },

    /// A path index at or beyond the curve length.
    #[error("index {index} out of range for curve of length {length}")]
    IndexOutOfRange {
        /// Offending index.
        index: u128,
        /// Number of cells on the curve.
        length: u128,
    },

    /// A coordinate component outside `[0, side)`.
    #[error("coordinate component {axis} is {value}, must be below {side}")]
    CoordinateOutOfRange {
        /// Axis of the offending component.
        axis: usize,
        /// Offending value.
        value: u32,
        /// Grid side length (`2^order`).
        side: u64,
    },

    /// A coordinate with the wrong number of components.
    #[error("coordinate has {actual} components, curve has {expected} dimensions")]
    DimensionMismatch {
        /// Curve dimension.
        expected: u32,
        /// Number of components supplied.
        actual: usize,
    },

    /// An enumeration range whose start lies after its end.
    #[error("invalid range {start}..{end}")]
    InvalidRange {
        /// Range start.
        start: u128,
        /// Range end.
        end: u128,
    },

    /// A materialized table that cannot be addressed on this platform.
    #[error("path of {cells} cells is too large to materialize")]
    PathTooLarge {
        /// Number of cells on the curve.
        cells: u128,
    },
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = Error::IndexOutOfRange {
            index: 16,
            length: 16,
        };
        assert_eq!(e.to_string(), "index 16 out of range for curve of length 16");

        let e = Error::CoordinateOutOfRange {
            axis: 1,
            value: 4,
            side: 4,
        };
        assert_eq!(
            e.to_string(),
            "coordinate component 1 is 4, must be below 4"
        );

        let e = Error::DimensionMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            e.to_string(),
            "coordinate has 2 components, curve has 3 dimensions"
        );
    }
}
