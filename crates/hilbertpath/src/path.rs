//! Enumeration of a whole curve.
//!
//! [`Path`] walks the curve lazily and never holds more than one cell, so it
//! works for domains far too large to store. [`HilbertTable`] materializes the
//! curve for O(1) lookups; it is a cache over the transforms and nothing else
//! depends on it.

use std::{
    iter::FusedIterator,
    ops::{Range, RangeInclusive},
    slice::ChunksExact,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::{
    error::{Error, Result},
    point::{Coords, Point},
    spec::CurveSpec,
    transform,
    word::Word,
};

/// Lazy, restartable iterator over the cells of a curve in path order.
///
/// Positions are tracked as `u128` so that a full-width curve (`2^64` cells
/// for a `u64` index) can be walked end to end.
#[derive(Debug, Clone)]
pub struct Path<I: Word> {
    /// The curve being walked.
    spec: CurveSpec<I>,
    /// Next position yielded from the front.
    front: u128,
    /// One past the next position yielded from the back.
    back: u128,
}

impl<I: Word> Path<I> {
    /// Walk every cell of `spec`.
    pub fn new(spec: CurveSpec<I>) -> Self {
        Self::span(spec, 0, spec.len())
    }

    /// Walk the cells at positions `range.start..range.end`.
    ///
    /// Disjoint ranges can be handed to independent workers; concatenating
    /// their output in range order reproduces the full path.
    pub fn range(spec: CurveSpec<I>, range: Range<I>) -> Result<Self> {
        Self::bounded(spec, range.start.widen(), range.end.widen())
    }

    /// Walk the cells at positions `start..=end`.
    ///
    /// Unlike [`Self::range`] this can reach the last cell of a curve whose
    /// length does not fit in `I`. `end + 1 == start` is an empty walk.
    pub fn range_inclusive(spec: CurveSpec<I>, range: RangeInclusive<I>) -> Result<Self> {
        let (start, end) = range.into_inner();
        Self::bounded(spec, start.widen(), end.widen() + 1)
    }

    /// Validate `front..back` against the curve.
    fn bounded(spec: CurveSpec<I>, front: u128, back: u128) -> Result<Self> {
        if front > back {
            return Err(Error::InvalidRange {
                start: front,
                end: back,
            });
        }
        if back > spec.len() {
            return Err(Error::IndexOutOfRange {
                index: back,
                length: spec.len(),
            });
        }
        Ok(Self::span(spec, front, back))
    }

    /// Internal constructor over already validated positions.
    fn span(spec: CurveSpec<I>, front: u128, back: u128) -> Self {
        Self { spec, front, back }
    }

    /// The curve being walked.
    pub fn spec(&self) -> &CurveSpec<I> {
        &self.spec
    }

    /// Number of cells not yet yielded.
    pub fn remaining(&self) -> u128 {
        self.back - self.front
    }

    /// Encode position `pos`, which lies inside the validated span.
    fn point_at(&self, pos: u128) -> Option<Point> {
        let index = I::narrow(pos)?;
        let mut coords: Coords = smallvec::smallvec![0; self.spec.dimension() as usize];
        transform::fill_point(&self.spec, index, &mut coords);
        Some(Point::new(coords))
    }
}

impl<I: Word> Iterator for Path<I> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.front >= self.back {
            return None;
        }
        let pos = self.front;
        self.front += 1;
        self.point_at(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn count(self) -> usize {
        usize::try_from(self.remaining()).unwrap_or(usize::MAX)
    }

    fn nth(&mut self, n: usize) -> Option<Point> {
        self.front = self.front.saturating_add(n as u128).min(self.back);
        self.next()
    }

    fn last(mut self) -> Option<Point> {
        self.next_back()
    }
}

impl<I: Word> DoubleEndedIterator for Path<I> {
    fn next_back(&mut self) -> Option<Point> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.point_at(self.back)
    }
}

impl<I: Word> FusedIterator for Path<I> {}

/// Cells handed to one rayon task during parallel materialization.
#[cfg(feature = "parallel")]
const PAR_BLOCK: usize = 4096;

/// A fully materialized curve: cell coordinates stored flat, in path order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HilbertTable<I: Word> {
    /// The curve this table caches.
    spec: CurveSpec<I>,
    /// `len * dimension` coordinate components.
    cells: Vec<u32>,
}

impl<I: Word> HilbertTable<I> {
    /// Compute every cell of `spec` in order.
    ///
    /// Fails with [`Error::PathTooLarge`] if the table cannot be addressed on
    /// this platform.
    pub fn materialize(spec: CurveSpec<I>) -> Result<Self> {
        let mut cells = allocate(&spec)?;
        debug!(
            dimension = spec.dimension(),
            order = spec.order(),
            cells = cells.len(),
            "materializing hilbert table"
        );
        let dimension = spec.dimension() as usize;
        for (slot, point) in cells.chunks_exact_mut(dimension).zip(Path::new(spec)) {
            slot.copy_from_slice(&point);
        }
        Ok(Self { spec, cells })
    }

    /// Like [`Self::materialize`], filling disjoint blocks of the table on the
    /// rayon thread pool. The result is identical.
    #[cfg(feature = "parallel")]
    pub fn par_materialize(spec: CurveSpec<I>) -> Result<Self> {
        let mut cells = allocate(&spec)?;
        debug!(
            dimension = spec.dimension(),
            order = spec.order(),
            cells = cells.len(),
            threads = rayon::current_num_threads(),
            "materializing hilbert table in parallel"
        );
        let dimension = spec.dimension() as usize;
        cells
            .par_chunks_mut(dimension.saturating_mul(PAR_BLOCK))
            .enumerate()
            .for_each(|(block, chunk)| {
                let front = (block * PAR_BLOCK) as u128;
                let back = front + (chunk.len() / dimension) as u128;
                for (slot, point) in chunk
                    .chunks_exact_mut(dimension)
                    .zip(Path::span(spec, front, back))
                {
                    slot.copy_from_slice(&point);
                }
            });
        Ok(Self { spec, cells })
    }

    /// The curve this table caches.
    pub fn spec(&self) -> &CurveSpec<I> {
        &self.spec
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len() / self.spec.dimension() as usize
    }

    /// A curve always has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Coordinates of the cell at `index`, or `None` past the end.
    pub fn get(&self, index: I) -> Option<&[u32]> {
        let dimension = self.spec.dimension() as usize;
        let start = usize::try_from(index.widen())
            .ok()?
            .checked_mul(dimension)?;
        self.cells.get(start..start.checked_add(dimension)?)
    }

    /// Path index of `coordinate`; computed directly, not searched.
    pub fn index_of(&self, coordinate: &[u32]) -> Result<I> {
        transform::decode(&self.spec, coordinate)
    }

    /// Iterate over cells in path order.
    pub fn iter(&self) -> ChunksExact<'_, u32> {
        self.cells.chunks_exact(self.spec.dimension() as usize)
    }

    /// All coordinate components, `dimension` per cell, in path order.
    pub fn as_flat(&self) -> &[u32] {
        &self.cells
    }
}

impl<'a, I: Word> IntoIterator for &'a HilbertTable<I> {
    type Item = &'a [u32];
    type IntoIter = ChunksExact<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Allocate a zeroed table for `spec`, or fail if it cannot be addressed.
fn allocate<I: Word>(spec: &CurveSpec<I>) -> Result<Vec<u32>> {
    let too_large = || Error::PathTooLarge { cells: spec.len() };
    let total = spec
        .len()
        .checked_mul(u128::from(spec.dimension()))
        .ok_or_else(too_large)?;
    let total = usize::try_from(total).map_err(|_| too_large())?;
    Ok(vec![0; total])
}
