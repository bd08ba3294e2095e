//! Support operations for curve calculation.
//!
//! All helpers are total: out-of-contract widths are masked or clamped rather
//! than panicking, with `debug_assert!` guarding the documented preconditions.

use crate::word::Word;

/// Bitmask with `width` least‑significant bits set. Saturates to all ones when
/// `width` reaches the word size.
#[inline]
pub fn bitmask<I: Word>(width: u32) -> I {
    match width {
        0 => I::zero(),
        w if w >= I::BITS => I::max_value(),
        w => (I::one() << w as usize) - I::one(),
    }
}

/// Extract bits `[start, end)` from `word`, read as a `width`‑bit value with
/// the most significant bit first.
///
/// Callers must ensure `start <= end <= width`.
#[inline]
pub fn bit_range<I: Word>(word: I, width: u32, start: u32, end: u32) -> I {
    debug_assert!(
        start <= end && end <= width,
        "bit range {start}..{end} outside width {width}"
    );
    let clamped_end = end.min(width);
    let clamped_start = start.min(clamped_end);
    let len = clamped_end - clamped_start;
    if len == 0 {
        return I::zero();
    }
    let shift = width - clamped_end;
    word.checked_shr(shift).unwrap_or_else(I::zero) & bitmask(len)
}

/// Left rotation of the low `width` bits of `word` by `shift % width`.
#[inline]
pub fn rotate_left<I: Word>(word: I, shift: u32, width: u32) -> I {
    if width == 0 {
        return I::zero();
    }
    let mask = bitmask::<I>(width);
    let w = word & mask;
    let shift = shift % width;
    if shift == 0 {
        return w;
    }
    ((w << shift as usize) | (w >> (width - shift) as usize)) & mask
}

/// Right rotation of the low `width` bits of `word` by `shift % width`.
#[inline]
pub fn rotate_right<I: Word>(word: I, shift: u32, width: u32) -> I {
    if width == 0 {
        return I::zero();
    }
    let mask = bitmask::<I>(width);
    let w = word & mask;
    let shift = shift % width;
    if shift == 0 {
        return w;
    }
    ((w >> shift as usize) | (w << (width - shift) as usize)) & mask
}

/// Convert a binary value to its Binary Reflected Gray Code (BRGC) form.
#[inline]
pub fn gray_encode<I: Word>(x: I) -> I {
    x ^ (x >> 1usize)
}

/// Inverse Gray code: recover binary from a BRGC value `x`.
///
/// Folds in successively shifted copies until nothing is left to fold, which
/// takes `ceil(log2(x)) + 1` rounds.
#[inline]
pub fn gray_decode<I: Word>(x: I) -> I {
    let mut shifted = x;
    let mut acc = x;
    loop {
        if shifted.is_zero() {
            return acc;
        }
        shifted = shifted >> 1usize;
        acc = acc ^ shifted;
    }
}

/// Count trailing set bits of `word` within `width` bits.
///
/// An all-ones `width`-bit value reports exactly `width`.
#[inline]
pub fn trailing_set_bits<I: Word>(word: I, width: u32) -> u32 {
    (!(word & bitmask(width))).trailing_zeros().min(width)
}
