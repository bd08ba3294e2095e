//! Entry/direction recurrence from Hamilton's "Compact Hilbert Indices"
//! (Dalhousie CS-2006-07).
//!
//! Each level of a transform looks at one `dimension`-bit word `w`. The word
//! selects a sub-hypercube, and the pair `(entry, direction)` records how the
//! curve is oriented inside it. The state is a plain value: every transform
//! starts from [`RecurrenceState::default`] and threads it through
//! [`RecurrenceState::step`].

use crate::{ops, word::Word};

/// Intra-sub-hypercube direction for word `w` in `dimension` dimensions.
pub fn direction<I: Word>(w: I, dimension: u32) -> u32 {
    let masked = w & ops::bitmask(dimension);
    if masked.is_zero() {
        0
    } else if (masked & I::one()).is_zero() {
        ops::trailing_set_bits(masked - I::one(), dimension) % dimension
    } else {
        ops::trailing_set_bits(masked, dimension) % dimension
    }
}

/// Entry point of the sub-hypercube selected by word `w`.
pub fn entry<I: Word>(w: I) -> I {
    if w.is_zero() {
        I::zero()
    } else {
        let two = I::one() + I::one();
        ops::gray_encode(two * ((w - I::one()) / two))
    }
}

/// Orientation carried from one level of a transform to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecurrenceState<I: Word> {
    /// Entry point `e`, a `dimension`-bit word.
    entry: I,
    /// Intra-sub-hypercube direction `d`, in `[0, dimension)`.
    direction: u32,
}

impl<I: Word> Default for RecurrenceState<I> {
    fn default() -> Self {
        Self {
            entry: I::zero(),
            direction: 0,
        }
    }
}

impl<I: Word> RecurrenceState<I> {
    /// Current entry point.
    pub fn entry(&self) -> I {
        self.entry
    }

    /// Current direction.
    pub fn direction(&self) -> u32 {
        self.direction
    }

    /// Advance past a level whose word was `w`.
    #[must_use]
    pub fn step(self, w: I, dimension: u32) -> Self {
        Self {
            entry: self.entry
                ^ ops::rotate_left(entry(w), self.direction + 1, dimension),
            direction: (self.direction + direction(w, dimension) + 1) % dimension,
        }
    }

    /// Hamilton's `T`: map a label in grid orientation to the standard
    /// orientation (xor with the entry point, then rotate right).
    pub fn transform(&self, label: I, dimension: u32) -> I {
        let mask = ops::bitmask(dimension);
        ops::rotate_right((label ^ self.entry) & mask, self.direction + 1, dimension)
    }

    /// Inverse of [`Self::transform`] (rotate left, then xor with the entry
    /// point).
    pub fn inverse_transform(&self, label: I, dimension: u32) -> I {
        let mask = ops::bitmask(dimension);
        ops::rotate_left(label & mask, self.direction + 1, dimension) ^ self.entry
    }
}
