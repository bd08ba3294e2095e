//! Command handlers for the `hpath` CLI.
//!
//! These functions implement the subcommands against the `hilbertpath`
//! library and write their results to the supplied writer.

use std::{io::Write, ops::RangeInclusive};

use anyhow::{Context, Result, anyhow, ensure};
use hilbertpath::{CurveSpec, Path, Point};
use tracing::{debug, info};

/// Largest curve `check` will walk; the coverage bitmap holds one byte per cell.
pub const MAX_CHECK_CELLS: u64 = 1 << 26;

/// Build the curve for a dimension/order pair.
pub fn curve(dimension: u32, order: u32) -> Result<CurveSpec<u64>> {
    hilbertpath::configure(dimension, order)
        .with_context(|| format!("cannot build a {dimension}D curve of order {order}"))
}

/// Coordinate at path position `index`.
pub fn point(spec: &CurveSpec<u64>, index: u64) -> Result<Point> {
    spec.encode(index)
        .with_context(|| format!("cannot encode index {index}"))
}

/// Path position of `coords`.
pub fn index(spec: &CurveSpec<u64>, coords: &[u32]) -> Result<u64> {
    spec.decode(coords)
        .with_context(|| format!("cannot decode coordinate {}", Point::from(coords)))
}

/// Write `index: (coords)` lines for the requested part of the path.
pub fn path(
    out: &mut impl Write,
    spec: &CurveSpec<u64>,
    chunk: Option<RangeInclusive<u64>>,
) -> Result<()> {
    let (start, walk) = match chunk {
        Some(range) => (
            *range.start(),
            Path::range_inclusive(*spec, range).context("invalid chunk")?,
        ),
        None => (0, spec.enumerate()),
    };
    debug!(cells = walk.remaining(), "writing path");
    // Offsets are widened: a chunk may end on `u64::MAX`.
    for (offset, p) in (u128::from(start)..).zip(walk) {
        writeln!(out, "{offset}: {p}")?;
    }
    Ok(())
}

/// Summary of a successful `check` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    /// Number of cells walked.
    pub cells: u64,
}

/// Walk the whole curve, verifying round trip, coverage and adjacency.
pub fn check(spec: &CurveSpec<u64>) -> Result<CheckReport> {
    let cells = u64::try_from(spec.len())
        .ok()
        .filter(|&cells| cells <= MAX_CHECK_CELLS)
        .ok_or_else(|| {
            anyhow!(
                "curve has {} cells; check walks at most {MAX_CHECK_CELLS}",
                spec.len()
            )
        })?;

    let side = spec.side();
    let mut seen = vec![false; cells as usize];
    let mut prev: Option<Point> = None;
    for (index, point) in (0..cells).zip(spec.enumerate()) {
        let back = spec.decode(&point)?;
        ensure!(
            back == index,
            "incorrect match-up for path index {index} and coordinate {point}: decodes to {back}"
        );

        let slot = point
            .iter()
            .fold(0u64, |acc, &c| acc * side + u64::from(c)) as usize;
        ensure!(!seen[slot], "coordinate {point} visited twice (index {index})");
        seen[slot] = true;

        if let Some(p) = &prev {
            ensure!(
                p.chebyshev_distance(&point) == 1,
                "discontinuity at index {index}: {p} -> {point}"
            );
        }
        prev = Some(point);
    }

    info!(
        dimension = spec.dimension(),
        order = spec.order(),
        cells,
        "curve verified"
    );
    Ok(CheckReport { cells })
}
