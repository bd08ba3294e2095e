//! Validated curve parameters.

use std::marker::PhantomData;

use tracing::debug;

use crate::{
    error::{Error, Result},
    ops,
    path::{HilbertTable, Path},
    point::Point,
    transform,
    word::Word,
};

/// Largest supported order: coordinate components are `u32`.
pub const MAX_ORDER: u32 = u32::BITS;

/// An immutable `(dimension, order)` pair describing a Hilbert curve over the
/// grid `[0, 2^order)^dimension`, with path indices held in `I`.
///
/// Construction guarantees `dimension >= 1`, `order <= 32` and
/// `order * dimension <= I::BITS`, so every index in `[0, len)` fits in `I`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurveSpec<I: Word = u64> {
    /// The number of axes.
    dimension: u32,
    /// The number of subdivision levels; the grid side is `2^order`.
    order: u32,
    /// Index word marker.
    word: PhantomData<I>,
}

impl<I: Word> CurveSpec<I> {
    /// Describe a curve with `dimension` axes and `order` subdivision levels.
    pub fn new(dimension: u32, order: u32) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidSpec {
            dimension,
            order,
            reason,
        };

        if dimension == 0 {
            return Err(invalid("dimension must be at least 1".into()));
        }
        if order > MAX_ORDER {
            return Err(invalid(format!(
                "order must be at most {MAX_ORDER} for u32 coordinates"
            )));
        }
        match order.checked_mul(dimension) {
            Some(bits) if bits <= I::BITS => {}
            _ => {
                return Err(invalid(format!(
                    "order * dimension must be at most {} bits for a {}-bit index",
                    I::BITS,
                    I::BITS
                )));
            }
        }

        debug!(dimension, order, index_bits = I::BITS, "configured hilbert curve");
        Ok(Self {
            dimension,
            order,
            word: PhantomData,
        })
    }

    /// Describe a curve that precisely fits a hypercube with `side` cells per
    /// axis. The side must be a power of two (`side == 2^order`).
    pub fn from_side(dimension: u32, side: u64) -> Result<Self> {
        if !side.is_power_of_two() {
            return Err(Error::InvalidSpec {
                dimension,
                order: 0,
                reason: format!("side {side} is not a power of two"),
            });
        }
        Self::new(dimension, side.trailing_zeros())
    }

    /// The number of axes.
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    /// The number of subdivision levels.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Grid side length, `2^order`.
    pub fn side(&self) -> u64 {
        1u64 << self.order
    }

    /// Number of significant bits in a path index, `order * dimension`.
    pub fn index_bits(&self) -> u32 {
        self.order * self.dimension
    }

    /// Number of cells on the curve, `2^(order * dimension)`.
    pub fn len(&self) -> u128 {
        1u128 << self.index_bits()
    }

    /// A curve always visits at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The last valid path index.
    pub fn max_index(&self) -> I {
        ops::bitmask(self.index_bits())
    }

    /// Does `index` lie on the curve?
    pub fn contains_index(&self, index: I) -> bool {
        index <= self.max_index()
    }

    /// Does `coordinate` name a cell of the grid?
    pub fn contains_point(&self, coordinate: &[u32]) -> bool {
        self.check_point(coordinate).is_ok()
    }

    /// Fail with [`Error::IndexOutOfRange`] unless `index` lies on the curve.
    pub(crate) fn check_index(&self, index: I) -> Result<()> {
        if self.contains_index(index) {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: index.widen(),
                length: self.len(),
            })
        }
    }

    /// Fail unless `coordinate` has `dimension` components, each below the
    /// grid side.
    pub(crate) fn check_point(&self, coordinate: &[u32]) -> Result<()> {
        if coordinate.len() != self.dimension as usize {
            return Err(Error::DimensionMismatch {
                expected: self.dimension,
                actual: coordinate.len(),
            });
        }
        let side = self.side();
        match coordinate
            .iter()
            .enumerate()
            .find(|&(_, &c)| u64::from(c) >= side)
        {
            Some((axis, &value)) => Err(Error::CoordinateOutOfRange { axis, value, side }),
            None => Ok(()),
        }
    }

    /// Compute the grid cell at `index`. See [`transform::encode`].
    pub fn encode(&self, index: I) -> Result<Point> {
        transform::encode(self, index)
    }

    /// Compute the path index of `coordinate`. See [`transform::decode`].
    pub fn decode(&self, coordinate: &[u32]) -> Result<I> {
        transform::decode(self, coordinate)
    }

    /// Lazily enumerate every cell in curve order.
    pub fn enumerate(&self) -> Path<I> {
        Path::new(*self)
    }

    /// Materialize the whole curve into an indexable table.
    pub fn materialize(&self) -> Result<HilbertTable<I>> {
        HilbertTable::materialize(*self)
    }
}
