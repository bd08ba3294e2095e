//! Lightweight N‑dimensional point type returned by the transforms.

use std::{
    fmt::{self, Display},
    ops::Deref,
    vec::Vec,
};

use smallvec::SmallVec;

/// Inline storage for point coordinates; spills to the heap past 8 axes.
pub(crate) type Coords = SmallVec<[u32; 8]>;

/// A grid cell: one `u32` component per axis.
///
/// The number of components is fixed at construction; a point only ever
/// exposes its coordinates as a read-only slice.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point(Coords);

impl Point {
    /// Create a new `Point` from a backing vector.
    pub fn new(vec: impl Into<Coords>) -> Self {
        Self(vec.into())
    }

    /// The origin of a `dimension`-dimensional grid.
    pub fn origin(dimension: u32) -> Self {
        Self(smallvec::smallvec![0; dimension as usize])
    }

    /// Calculate the Euclidean distance between two points.
    ///
    /// Preconditions: both points must have the same dimensionality. In debug
    /// builds a mismatch triggers a `debug_assert!`; in release builds the
    /// distance is computed over the shared prefix of dimensions.
    pub fn distance(&self, p2: &Self) -> f64 {
        debug_assert!(
            self.len() == p2.len(),
            "Point::distance called with differing dimensions: {} vs {}",
            self.len(),
            p2.len()
        );

        let mut tot: u128 = 0;
        for (a, b) in self.0.iter().zip(p2.0.iter()) {
            let d = u128::from(a.abs_diff(*b));
            tot += d * d;
        }
        (tot as f64).sqrt()
    }

    /// Chebyshev (L∞) distance: the largest per-axis difference.
    ///
    /// Same preconditions as [`Self::distance`].
    pub fn chebyshev_distance(&self, p2: &Self) -> u32 {
        debug_assert!(
            self.len() == p2.len(),
            "Point::chebyshev_distance called with differing dimensions: {} vs {}",
            self.len(),
            p2.len()
        );
        self.0
            .iter()
            .zip(p2.0.iter())
            .map(|(a, b)| a.abs_diff(*b))
            .max()
            .unwrap_or(0)
    }

    /// Return the point's coordinates as a slice.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Dimensionality of the point.
    pub fn dimension(&self) -> u32 {
        self.0.len() as u32
    }
}

impl From<&[u32]> for Point {
    fn from(val: &[u32]) -> Self {
        Self(Coords::from_slice(val))
    }
}

impl<const N: usize> From<[u32; N]> for Point {
    fn from(val: [u32; N]) -> Self {
        Self(Coords::from_slice(&val))
    }
}

impl From<Point> for Vec<u32> {
    fn from(val: Point) -> Self {
        val.0.to_vec()
    }
}

impl From<&Point> for Vec<u32> {
    fn from(val: &Point) -> Self {
        val.0.to_vec()
    }
}

impl Deref for Point {
    type Target = [u32];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u32]> for Point {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}
