//! The limb capability contract and its native leaf implementations.
//!
//! Every type that participates in a composite word — whether a native
//! machine integer or another composite — implements [`WordOps`]. The two
//! leaf limbs are `u32` and `u64`; everything wider is built out of them.

use num_bigint::BigUint;

/// Capability contract for word-like types.
///
/// Implemented trivially by the native leaf limbs (`u32`, `u64`) and
/// recursively by [`Composite`](crate::word::Composite), so a composite word
/// can itself serve as a limb of a still wider composite.
///
/// Every operation is total: out-of-range inputs are reduced modulo
/// `2^BITS`, arithmetic wraps, and nothing here panics.
pub trait WordOps: Copy + Eq + Ord + std::fmt::Debug {
    /// Width of the type in bits. Constant per type; for a composite it is
    /// the sum of the two limb widths.
    const BITS: u32;

    /// The exact value as an arbitrary-precision integer. Lossless.
    fn to_big(&self) -> BigUint;

    /// Reduce `v` modulo `2^BITS` and take the result.
    ///
    /// For leaf limbs this is native truncation; composites split `v` at the
    /// low limb's width boundary and recurse.
    fn from_big(v: &BigUint) -> Self;

    /// Addition wrapping at `2^BITS`.
    ///
    /// Carry detection in composite words compares the wrapped sum against
    /// an addend, which is only sound if every implementation wraps exactly.
    /// Implementations must never saturate or fail on overflow.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Bitwise AND.
    fn and(self, rhs: Self) -> Self;

    /// Bitwise OR.
    fn or(self, rhs: Self) -> Self;

    /// Bitwise XOR.
    fn xor(self, rhs: Self) -> Self;

    /// Logical shift.
    ///
    /// A positive `amount` shifts toward the high end, a negative `amount`
    /// shifts toward the low end by the absolute amount. Vacated positions
    /// fill with zero and bits pushed past either end are lost. Shifting by
    /// zero is the identity, and any `|amount| >= BITS` yields zero.
    fn shift(self, amount: i32) -> Self;

    /// The all-zero value.
    fn zero() -> Self;

    /// The value one.
    fn one() -> Self;

    /// The all-ones value, `2^BITS - 1`.
    fn max_value() -> Self;

    /// Width in bits of this value's type.
    #[inline]
    fn bit_width(&self) -> u32 {
        Self::BITS
    }

    /// Whether this is the all-zero value.
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

// Leaf limbs delegate straight to native truncating arithmetic. `from_big`
// keeps the lowest 64 bits of the value and lets the `as` cast truncate the
// rest for the narrower widths.
macro_rules! impl_leaf_word {
    ($ty:ty) => {
        impl WordOps for $ty {
            const BITS: u32 = <$ty>::BITS;

            #[inline]
            fn to_big(&self) -> BigUint {
                BigUint::from(*self)
            }

            #[inline]
            fn from_big(v: &BigUint) -> Self {
                v.iter_u64_digits().next().unwrap_or(0) as $ty
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            #[inline]
            fn and(self, rhs: Self) -> Self {
                self & rhs
            }

            #[inline]
            fn or(self, rhs: Self) -> Self {
                self | rhs
            }

            #[inline]
            fn xor(self, rhs: Self) -> Self {
                self ^ rhs
            }

            #[inline]
            fn shift(self, amount: i32) -> Self {
                if amount >= Self::BITS as i32 || amount <= -(Self::BITS as i32) {
                    0
                } else if amount >= 0 {
                    self << amount
                } else {
                    self >> -amount
                }
            }

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn one() -> Self {
                1
            }

            #[inline]
            fn max_value() -> Self {
                <$ty>::MAX
            }
        }
    };
}

impl_leaf_word!(u32);
impl_leaf_word!(u64);
