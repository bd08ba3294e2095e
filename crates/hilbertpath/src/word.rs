//! Fixed-width unsigned words used to hold path indices.

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{CheckedShl, CheckedShr, PrimInt, Unsigned};

/// An unsigned integer wide enough to hold a whole path index.
///
/// The per-level labels, entry points and words of the recurrence are all
/// `dimension` bits wide and share the index type, so a spec is valid for `I`
/// only when `order * dimension <= I::BITS`.
pub trait Word:
    PrimInt + Unsigned + CheckedShl + CheckedShr + Debug + Display + Hash + Send + Sync + 'static
{
    /// Width of the type in bits.
    const BITS: u32;

    /// Widen to `u128` for lengths and error reporting.
    fn widen(self) -> u128;

    /// Narrow a `u128`, returning `None` if it does not fit.
    fn narrow(value: u128) -> Option<Self>;

    /// Test bit `pos`, counted from the least significant bit.
    #[inline]
    fn bit(self, pos: u32) -> bool {
        self.checked_shr(pos)
            .is_some_and(|v| v & Self::one() == Self::one())
    }
}

/// Implement [`Word`] for primitive unsigned integers.
macro_rules! impl_word {
    ($($t:ty),*) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn widen(self) -> u128 {
                    u128::from(self)
                }

                #[inline]
                fn narrow(value: u128) -> Option<Self> {
                    Self::try_from(value).ok()
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64);
