//! Property-based tests verifying the bijection property of the curve.
//!
//! For any valid spec: decode(encode(i)) == i and encode(decode(c)) == c.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use hilbertpath::{CurveSpec, Word, configure, error::Error};
use proptest::prelude::*;

/// Test configurations: (dimension, order) pairs small enough to walk fully.
fn curve_configs() -> Vec<(u32, u32)> {
    let mut configs = Vec::new();
    for dimension in 2..=4 {
        for order in 0..=4 {
            configs.push((dimension, order));
        }
    }
    configs.extend([(1, 6), (5, 2), (6, 2), (9, 1)]);
    configs
}

/// Assert the full round trip for every index of `spec`.
fn assert_round_trip<I: Word>(spec: &CurveSpec<I>) {
    let mut index = I::zero();
    loop {
        let point = spec.encode(index).expect("index in range");
        let recovered = spec.decode(&point).expect("point in range");
        assert_eq!(
            recovered,
            index,
            "dim={} order={} failed at index {}",
            spec.dimension(),
            spec.order(),
            index
        );
        if index == spec.max_index() {
            break;
        }
        index = index + I::one();
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// 2D order 16 fills a u32 index completely.
    #[test]
    fn bijection_2d_full_u32(index in any::<u32>()) {
        let spec = CurveSpec::<u32>::new(2, 16).expect("2d order 16");
        let point = spec.encode(index).expect("encode");
        prop_assert_eq!(spec.decode(&point).expect("decode"), index);
    }

    /// 3D order 21 in a u64 index.
    #[test]
    fn bijection_3d(index in 0u64..(1 << 63)) {
        let spec = configure(3, 21).expect("3d order 21");
        let point = spec.encode(index).expect("encode");
        prop_assert_eq!(spec.decode(&point).expect("decode"), index);
    }

    /// Full-width u64 curves, including the last cell.
    #[test]
    fn bijection_4d_full_u64(index in any::<u64>()) {
        let spec = configure(4, 16).expect("4d order 16");
        let point = spec.encode(index).expect("encode");
        prop_assert_eq!(spec.decode(&point).expect("decode"), index);
    }

    /// Coordinates come back unchanged through decode then encode.
    #[test]
    fn inverse_bijection_3d(x in 0u32..1024, y in 0u32..1024, z in 0u32..1024) {
        let spec = configure(3, 10).expect("3d order 10");
        let index = spec.decode(&[x, y, z]).expect("decode");
        let point = spec.encode(index).expect("encode");
        prop_assert_eq!(point.as_slice(), &[x, y, z]);
    }

    /// Neighbouring indices are neighbouring cells.
    #[test]
    fn adjacency_random_5d(index in 0u64..((1 << 60) - 1)) {
        let spec = configure(5, 12).expect("5d order 12");
        let a = spec.encode(index).expect("encode");
        let b = spec.encode(index + 1).expect("encode");
        prop_assert_eq!(a.chebyshev_distance(&b), 1);
    }

    /// Anything past the end of the curve is rejected, never wrapped.
    #[test]
    fn out_of_range_index(index in 4096u64..) {
        let spec = configure(3, 4).expect("3d order 4");
        prop_assert_eq!(
            spec.encode(index),
            Err(Error::IndexOutOfRange { index: u128::from(index), length: 4096 })
        );
    }

    /// Any component at or past the side length is rejected.
    #[test]
    fn out_of_range_coordinate(axis in 0usize..3, value in 16u32..) {
        let spec = configure(3, 4).expect("3d order 4");
        let mut coordinate = [0u32; 3];
        coordinate[axis] = value;
        prop_assert_eq!(
            spec.decode(&coordinate),
            Err(Error::CoordinateOutOfRange { axis, value, side: 16 })
        );
    }
}

/// Exhaustive round trip over the small configurations.
#[test]
fn exhaustive_bijection_small_curves() {
    for (dimension, order) in curve_configs() {
        assert_round_trip(&CurveSpec::<u32>::new(dimension, order).expect("spec"));
    }
}

/// The round trip holds for every supported word width.
#[test]
fn bijection_all_word_widths() {
    assert_round_trip(&CurveSpec::<u8>::new(2, 4).expect("u8"));
    assert_round_trip(&CurveSpec::<u8>::new(4, 2).expect("u8"));
    assert_round_trip(&CurveSpec::<u8>::new(8, 1).expect("u8"));
    assert_round_trip(&CurveSpec::<u16>::new(4, 4).expect("u16"));
    assert_round_trip(&CurveSpec::<u16>::new(16, 1).expect("u16"));
    assert_round_trip(&CurveSpec::<u64>::new(3, 4).expect("u64"));
}

/// Every grid cell is visited exactly once.
#[test]
fn coverage() {
    for (dimension, order) in curve_configs() {
        let spec = CurveSpec::<u32>::new(dimension, order).expect("spec");
        let side = spec.side() as u32;
        let mut seen = vec![false; spec.len() as usize];
        for point in spec.enumerate() {
            assert!(point.iter().all(|&c| c < side));
            // Row-major slot of the cell.
            let slot = point
                .iter()
                .fold(0usize, |acc, &c| acc * side as usize + c as usize);
            assert!(!seen[slot], "cell {point} visited twice");
            seen[slot] = true;
        }
        assert!(seen.iter().all(|&s| s), "dim={dimension} order={order}");
    }
}

/// Degenerate curves have exactly one cell, at the origin.
#[test]
fn degenerate_order() {
    for dimension in 1..=6 {
        let spec = configure(dimension, 0).expect("order 0");
        assert_eq!(spec.len(), 1);
        let origin = spec.encode(0).expect("encode");
        assert_eq!(origin.dimension(), dimension);
        assert!(origin.iter().all(|&c| c == 0));
        assert_eq!(spec.decode(&origin), Ok(0));
        assert!(spec.encode(1).is_err());
        assert_eq!(spec.enumerate().count(), 1);
    }
}

/// First and last cells of the full-width curves.
#[test]
fn bijection_at_extremes() {
    for (dimension, order) in [(2, 32), (4, 16), (8, 8), (16, 4), (32, 2), (64, 1)] {
        let spec = configure(dimension, order).expect("full width");
        assert_eq!(spec.max_index(), u64::MAX);
        for index in [0, 1, u64::MAX / 2, u64::MAX - 1, u64::MAX] {
            let point = spec.encode(index).expect("encode");
            assert_eq!(spec.decode(&point), Ok(index));
        }
    }
}
