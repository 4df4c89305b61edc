//! The two-limb composite word.
//!
//! [`Composite<Lo, Hi>`] glues two limbs into one logical unsigned integer
//! with value `lo + hi * 2^Lo::BITS`. Because it implements [`WordOps`]
//! itself, a composite can be the limb of a larger composite; the named
//! widths in [`alias`](crate::word) nest up to three levels deep.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Shl, Shr};

use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};

use crate::word::WordOps;

/// A wide unsigned integer made of a low and a high limb.
///
/// The stored limbs are never normalized after the fact: every operation
/// produces limbs that are already in range, which is what makes the
/// high-major ordering below agree with numeric ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Composite<Lo, Hi> {
    pub(crate) lo: Lo,
    pub(crate) hi: Hi,
}

impl<Lo, Hi> Composite<Lo, Hi> {
    /// Assemble a word from its two limbs.
    #[inline]
    pub const fn from_limbs(lo: Lo, hi: Hi) -> Self {
        Self { lo, hi }
    }

    /// Split the word back into its limbs.
    #[inline]
    pub fn into_limbs(self) -> (Lo, Hi) {
        (self.lo, self.hi)
    }
}

impl<Lo: Copy, Hi: Copy> Composite<Lo, Hi> {
    /// The low limb.
    #[inline]
    pub fn low(&self) -> Lo {
        self.lo
    }

    /// The high limb.
    #[inline]
    pub fn high(&self) -> Hi {
        self.hi
    }
}

impl<Lo: WordOps, Hi: WordOps> Composite<Lo, Hi> {
    /// Left shift by `x` bits, moving low-limb bits across the boundary
    /// into the high limb. Caller guarantees `0 < x < Self::BITS`.
    fn shift_up(self, x: i32) -> Self {
        let lo = self.lo.shift(x);
        // The low bits that cross the boundary have to be re-expressed in
        // the high limb's type. Order matters: reinterpreting first would
        // truncate a low limb wider than the high limb, and shifting first
        // would overflow a low limb narrower than the high limb.
        let crossing = if Lo::BITS < Hi::BITS {
            Hi::from_big(&self.lo.to_big()).shift(x - Lo::BITS as i32)
        } else {
            Hi::from_big(&self.lo.shift(x - Lo::BITS as i32).to_big())
        };
        let hi = self.hi.shift(x).or(crossing);
        Self { lo, hi }
    }

    /// Right shift by `n`, moving high-limb bits across the boundary into
    /// the low limb. Caller guarantees `0 < n < Self::BITS`.
    fn shift_down(self, n: i32) -> Self {
        let hi = self.hi.shift(-n);
        // Mirror of `shift_up`: the high bits that cross land at position
        // `Lo::BITS - n` of the low limb.
        let crossing = if Hi::BITS < Lo::BITS {
            Lo::from_big(&self.hi.to_big()).shift(Lo::BITS as i32 - n)
        } else {
            Lo::from_big(&self.hi.shift(Lo::BITS as i32 - n).to_big())
        };
        let lo = self.lo.shift(-n).or(crossing);
        Self { lo, hi }
    }
}

impl<Lo: WordOps, Hi: WordOps> WordOps for Composite<Lo, Hi> {
    const BITS: u32 = Lo::BITS + Hi::BITS;

    fn to_big(&self) -> BigUint {
        self.lo.to_big() + (self.hi.to_big() << Lo::BITS as usize)
    }

    fn from_big(v: &BigUint) -> Self {
        // Split at the low limb's width boundary and recurse; the recursion
        // bottoms out in native truncation at the leaf limbs.
        let mask = (BigUint::one() << Lo::BITS as usize) - 1u32;
        Self {
            lo: Lo::from_big(&(v & &mask)),
            hi: Hi::from_big(&(v >> Lo::BITS as usize)),
        }
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        // Ripple carry. The low limb wraps at its own width, so a wrapped
        // sum smaller than an addend means exactly one carry unit crossed
        // the boundary.
        let lo = self.lo.wrapping_add(rhs.lo);
        let mut hi = self.hi.wrapping_add(rhs.hi);
        if lo < self.lo {
            hi = hi.wrapping_add(Hi::one());
        }
        Self { lo, hi }
    }

    #[inline]
    fn and(self, rhs: Self) -> Self {
        Self {
            lo: self.lo.and(rhs.lo),
            hi: self.hi.and(rhs.hi),
        }
    }

    #[inline]
    fn or(self, rhs: Self) -> Self {
        Self {
            lo: self.lo.or(rhs.lo),
            hi: self.hi.or(rhs.hi),
        }
    }

    #[inline]
    fn xor(self, rhs: Self) -> Self {
        Self {
            lo: self.lo.xor(rhs.lo),
            hi: self.hi.xor(rhs.hi),
        }
    }

    fn shift(self, amount: i32) -> Self {
        if amount == 0 {
            return self;
        }
        if amount >= Self::BITS as i32 || amount <= -(Self::BITS as i32) {
            return Self::zero();
        }
        if amount > 0 {
            self.shift_up(amount)
        } else {
            self.shift_down(-amount)
        }
    }

    #[inline]
    fn zero() -> Self {
        Self {
            lo: Lo::zero(),
            hi: Hi::zero(),
        }
    }

    #[inline]
    fn one() -> Self {
        Self {
            lo: Lo::one(),
            hi: Hi::zero(),
        }
    }

    #[inline]
    fn max_value() -> Self {
        Self {
            lo: Lo::max_value(),
            hi: Hi::max_value(),
        }
    }
}

// High-major, low-minor comparison. Equivalent to comparing the numeric
// values because the low limb always stays inside [0, 2^Lo::BITS).
impl<Lo: WordOps, Hi: WordOps> Ord for Composite<Lo, Hi> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hi
            .cmp(&other.hi)
            .then_with(|| self.lo.cmp(&other.lo))
    }
}

impl<Lo: WordOps, Hi: WordOps> PartialOrd for Composite<Lo, Hi> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Lo: WordOps, Hi: WordOps> fmt::Debug for Composite<Lo, Hi> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Composite(hi: {:?}, lo: {:?} = {})",
            self.hi,
            self.lo,
            self.to_big()
        )
    }
}

impl<Lo: WordOps, Hi: WordOps> fmt::Display for Composite<Lo, Hi> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_big(), f)
    }
}

impl<Lo: WordOps, Hi: WordOps> From<u32> for Composite<Lo, Hi> {
    fn from(v: u32) -> Self {
        Self::from_big(&BigUint::from(v))
    }
}

impl<Lo: WordOps, Hi: WordOps> From<u64> for Composite<Lo, Hi> {
    fn from(v: u64) -> Self {
        Self::from_big(&BigUint::from(v))
    }
}

impl<Lo: WordOps, Hi: WordOps> From<u128> for Composite<Lo, Hi> {
    fn from(v: u128) -> Self {
        Self::from_big(&BigUint::from(v))
    }
}

/// Wrapping addition at the composite's full width.
impl<Lo: WordOps, Hi: WordOps> Add for Composite<Lo, Hi> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl<Lo: WordOps, Hi: WordOps> BitAnd for Composite<Lo, Hi> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl<Lo: WordOps, Hi: WordOps> BitOr for Composite<Lo, Hi> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl<Lo: WordOps, Hi: WordOps> BitXor for Composite<Lo, Hi> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.xor(rhs)
    }
}

impl<Lo: WordOps, Hi: WordOps> Shl<u32> for Composite<Lo, Hi> {
    type Output = Self;

    fn shl(self, rhs: u32) -> Self {
        if rhs >= Self::BITS {
            Self::zero()
        } else {
            self.shift(rhs as i32)
        }
    }
}

impl<Lo: WordOps, Hi: WordOps> Shr<u32> for Composite<Lo, Hi> {
    type Output = Self;

    fn shr(self, rhs: u32) -> Self {
        if rhs >= Self::BITS {
            Self::zero()
        } else {
            self.shift(-(rhs as i32))
        }
    }
}

impl<Lo: WordOps, Hi: WordOps> num_traits::Zero for Composite<Lo, Hi> {
    fn zero() -> Self {
        <Self as WordOps>::zero()
    }

    fn is_zero(&self) -> bool {
        <Self as WordOps>::is_zero(self)
    }
}

impl<Lo: WordOps, Hi: WordOps> num_traits::Bounded for Composite<Lo, Hi> {
    fn min_value() -> Self {
        <Self as WordOps>::zero()
    }

    fn max_value() -> Self {
        <Self as WordOps>::max_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::{Word128, Word96};

    #[test]
    fn test_carry_crosses_boundary() {
        // low = all ones, high = 0; adding 1 must carry exactly one unit.
        let a = Word128::from(u64::MAX);
        let b = Word128::from(1u64);
        let sum = a.wrapping_add(b);
        assert_eq!(sum.low(), 0);
        assert_eq!(sum.high(), 1);
        assert_eq!(sum.to_big(), BigUint::one() << 64u32);
    }

    #[test]
    fn test_add_wraps_at_full_width() {
        let max = Word128::max_value();
        let sum = max.wrapping_add(Word128::one());
        assert!(WordOps::is_zero(&sum));
    }

    #[test]
    fn test_shift_straddles_boundary() {
        // Word96 has a 32-bit low limb; bit 40 lives in the high limb.
        let w = Word96::one().shift(40);
        assert_eq!(w.to_big(), BigUint::one() << 40u32);
        assert_eq!(w.low(), 0);
        assert_eq!(w.high(), 1u64 << 8);
    }

    #[test]
    fn test_shift_zero_is_identity() {
        let w = Word96::from(0xdead_beef_cafeu64);
        assert_eq!(w.shift(0), w);
    }

    #[test]
    fn test_shift_round_trip_across_boundary() {
        let w = Word96::from(0xabcd_1234u64);
        let up = w.shift(50);
        assert_eq!(up.shift(-50), w);
    }

    #[test]
    fn test_shift_full_width_is_zero() {
        let w = Word128::max_value();
        assert!(WordOps::is_zero(&w.shift(128)));
        assert!(WordOps::is_zero(&w.shift(-128)));
    }

    #[test]
    fn test_shift_left_exhaustive_word96() {
        // Every shift amount, against the flat bit-vector model.
        let value = BigUint::from(0x0123_4567_89ab_cdefu64);
        let modulus = BigUint::one() << 96u32;
        let w = Word96::from_big(&value);
        for x in 0..96 {
            let expect = (&value << x as usize) % &modulus;
            assert_eq!(w.shift(x).to_big(), expect, "left shift by {}", x);
        }
    }

    #[test]
    fn test_shift_right_exhaustive_word96() {
        let value = (BigUint::one() << 96u32) - 1u32;
        let w = Word96::from_big(&value);
        for x in 0..96 {
            let expect = &value >> x as usize;
            assert_eq!(w.shift(-x).to_big(), expect, "right shift by {}", x);
        }
    }

    #[test]
    fn test_bitwise_is_limbwise() {
        let a = Word128::from(0xf0f0_f0f0_f0f0_f0f0u64);
        let b = Word128::from(0xffff_0000_ffff_0000u64);
        assert_eq!(
            (a & b).to_big(),
            BigUint::from(0xf0f0_f0f0_f0f0_f0f0u64 & 0xffff_0000_ffff_0000u64)
        );
        assert_eq!(
            (a | b).to_big(),
            BigUint::from(0xf0f0_f0f0_f0f0_f0f0u64 | 0xffff_0000_ffff_0000u64)
        );
        assert_eq!(
            (a ^ b).to_big(),
            BigUint::from(0xf0f0_f0f0_f0f0_f0f0u64 ^ 0xffff_0000_ffff_0000u64)
        );
    }

    #[test]
    fn test_from_big_reduces_modulo_width() {
        let v = (BigUint::one() << 200u32) + 7u32;
        assert_eq!(Word128::from_big(&v).to_big(), BigUint::from(7u32));
    }

    #[test]
    fn test_ordering_is_high_major() {
        let small_hi = Word128::from_limbs(u64::MAX, 0);
        let big_hi = Word128::from_limbs(0, 1);
        assert!(small_hi < big_hi);
        assert!(small_hi.to_big() < big_hi.to_big());
    }

    #[test]
    fn test_bounds() {
        assert!(WordOps::is_zero(&<Word96 as num_traits::Bounded>::min_value()));
        assert!(num_traits::Zero::is_zero(&<Word96 as num_traits::Zero>::zero()));
        let max = Word96::max_value();
        assert_eq!(max.to_big(), (BigUint::one() << 96u32) - 1u32);
        assert_eq!(max.low(), u32::MAX);
        assert_eq!(max.high(), u64::MAX);
    }

    #[test]
    fn test_display_is_decimal() {
        let w = Word128::from(1_000_000_000_000u64);
        assert_eq!(w.to_string(), "1000000000000");
        assert_eq!(<Word128 as WordOps>::zero().to_string(), "0");
    }

    #[test]
    fn test_literal_construction() {
        assert_eq!(Word96::from(42u32).to_big(), BigUint::from(42u32));
        assert_eq!(
            Word128::from(u128::MAX).to_big(),
            (BigUint::one() << 128u32) - 1u32
        );
    }

    #[test]
    fn test_into_limbs_round_trip() {
        let w = Word128::from(0x1234_5678u64);
        let (lo, hi) = w.into_limbs();
        assert_eq!(Word128::from_limbs(lo, hi), w);
    }

    #[test]
    fn test_serde_round_trip() {
        let w = Word96::from(0xfeed_face_beefu64);
        let json = serde_json::to_string(&w).unwrap();
        let back: Word96 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }
}
