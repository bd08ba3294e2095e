//! Compact Hilbert index transforms.
//!
//! Both directions walk the `order` levels from the most significant end,
//! consuming (or producing) one `dimension`-bit word of the index per level
//! and one bit of every coordinate component. Axis `j` of the grid always
//! corresponds to bit `j` of the per-level label, in both directions.

use crate::{
    error::{Error, Result},
    ops,
    point::{Coords, Point},
    spec::CurveSpec,
    state::RecurrenceState,
    word::Word,
};

/// Compute the grid cell visited at path position `index`.
///
/// Fails with [`Error::IndexOutOfRange`] if `index >= spec.len()`.
pub fn encode<I: Word>(spec: &CurveSpec<I>, index: I) -> Result<Point> {
    spec.check_index(index)?;
    let mut coords: Coords = smallvec::smallvec![0; spec.dimension() as usize];
    fill_point(spec, index, &mut coords);
    Ok(Point::new(coords))
}

/// Like [`encode`], writing the coordinate into `out` instead of allocating.
///
/// Fails with [`Error::DimensionMismatch`] if `out` does not have exactly
/// `spec.dimension()` slots. `out` is left untouched on error.
pub fn encode_into<I: Word>(spec: &CurveSpec<I>, index: I, out: &mut [u32]) -> Result<()> {
    spec.check_index(index)?;
    if out.len() != spec.dimension() as usize {
        return Err(Error::DimensionMismatch {
            expected: spec.dimension(),
            actual: out.len(),
        });
    }
    out.fill(0);
    fill_point(spec, index, out);
    Ok(())
}

/// Compute the path position of the grid cell `coordinate`.
///
/// Fails with [`Error::DimensionMismatch`] if the coordinate does not have
/// `spec.dimension()` components, or [`Error::CoordinateOutOfRange`] if any
/// component is `>= spec.side()`.
pub fn decode<I: Word>(spec: &CurveSpec<I>, coordinate: &[u32]) -> Result<I> {
    spec.check_point(coordinate)?;
    let dimension = spec.dimension();
    let order = spec.order();

    let mut index_acc = I::zero();
    let mut state = RecurrenceState::default();
    for order_idx in 0..order {
        let bit_offset = order - order_idx - 1;
        let mut label = I::zero();
        for (axis, &component) in coordinate.iter().enumerate() {
            if (component >> bit_offset) & 1 == 1 {
                label = label | (I::one() << axis);
            }
        }
        let word = ops::gray_decode(state.transform(label, dimension));
        state = state.step(word, dimension);
        // A single level may fill the whole word, so the shift can be a no-op
        // on a zero accumulator rather than an overflow.
        index_acc = index_acc.checked_shl(dimension).unwrap_or_else(I::zero) | word;
    }
    Ok(index_acc)
}

/// Write the cell at `index` into `out`, which must be zeroed, hold
/// `dimension` slots, and `index` must already be validated.
pub(crate) fn fill_point<I: Word>(spec: &CurveSpec<I>, index: I, out: &mut [u32]) {
    let dimension = spec.dimension();
    let order = spec.order();
    let hwidth = spec.index_bits();

    let mut state = RecurrenceState::default();
    for order_idx in 0..order {
        let word = ops::bit_range(
            index,
            hwidth,
            order_idx * dimension,
            order_idx * dimension + dimension,
        );
        let label = state.inverse_transform(ops::gray_encode(word), dimension);
        let bit_mask = 1u32 << (order - order_idx - 1);
        for (axis, component) in (0..dimension).zip(out.iter_mut()) {
            if label.bit(axis) {
                *component |= bit_mask;
            }
        }
        state = state.step(word, dimension);
    }
}
