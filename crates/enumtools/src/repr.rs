use std::fmt::{Debug, Display, LowerHex};
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Not};

mod private {
    pub trait Sealed {}
}

/// The underlying integer of an enumerated type.
///
/// Implemented for every primitive integer, which covers every `#[repr(..)]` an
/// enum can declare.
pub trait Repr:
    private::Sealed
    + Copy
    + Eq
    + Hash
    + Debug
    + Display
    + LowerHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// The all-clear value, matching a `None`-style sentinel member.
    const ZERO: Self;

    /// Widens to `i128`, or `None` for `u128` values above `i128::MAX`.
    fn to_i128(self) -> Option<i128>;

    /// The raw bit pattern, sign-extended to 128 bits.
    fn to_bits(self) -> u128;
}

macro_rules! impl_repr {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl Repr for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn to_i128(self) -> Option<i128> {
                    i128::try_from(self).ok()
                }

                #[inline]
                #[allow(clippy::cast_sign_loss, clippy::cast_lossless)]
                fn to_bits(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

impl_repr!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// `candidate` is non-zero and every one of its bits is present in `flags`.
#[inline]
pub(crate) fn bits_set<R: Repr>(flags: R, candidate: R) -> bool {
    candidate != R::ZERO && (flags & candidate) == candidate
}

/// Every bit of `value` is present in `variable`; zero is trivially contained.
#[inline]
pub(crate) fn bits_contain<R: Repr>(variable: R, value: R) -> bool {
    (variable & value) == value
}
