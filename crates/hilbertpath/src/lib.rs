//! Compact N‑dimensional Hilbert curve.
//!
//! Maps a linear path index to a cell of a `D`‑dimensional grid with side
//! `2^order` and back, using Hamilton's compact Hilbert index recurrence.
//! Consecutive indices always land on neighbouring cells.
//!
//! ```
//! # fn main() -> hilbertpath::error::Result<()> {
//! let spec = hilbertpath::configure(2, 1)?;
//! let cells: Vec<Vec<u32>> = spec.enumerate().map(Vec::from).collect();
//! assert_eq!(cells, [[0, 0], [0, 1], [1, 1], [1, 0]]);
//! assert_eq!(spec.decode(&[1, 1])?, 2);
//! # Ok(())
//! # }
//! ```

/// Error types used across the crate.
pub mod error;
/// Bit field primitives shared by the transform.
#[doc(hidden)]
pub mod ops;
/// Lazy and materialized enumeration of the full curve.
pub mod path;
/// N‑dimensional points and helpers.
pub mod point;
/// Validated curve dimension/order pairs.
pub mod spec;
/// Per-level entry/direction recurrence.
pub mod state;
/// Index <-> coordinate transforms.
pub mod transform;
/// Fixed-width unsigned index words.
pub mod word;

pub use crate::{
    path::{HilbertTable, Path},
    point::Point,
    spec::CurveSpec,
    transform::{decode, encode},
    word::Word,
};

/// Construct a curve spec with a `u64` index word.
///
/// Returns an error if `dimension` is zero or `order * dimension` exceeds 64
/// bits. Use [`CurveSpec::new`] to pick a different index width.
pub fn configure(dimension: u32, order: u32) -> error::Result<CurveSpec<u64>> {
    CurveSpec::new(dimension, order)
}

/// Lazily enumerate every cell of `spec` in curve order.
pub fn enumerate<I: Word>(spec: &CurveSpec<I>) -> Path<I> {
    Path::new(*spec)
}
