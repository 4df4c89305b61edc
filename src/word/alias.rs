//! Named wide-word widths.
//!
//! Each alias is one concrete instantiation of [`Composite`]; the width is
//! part of the type, so there is nothing to configure at runtime. The
//! 224- and 256-bit words nest three levels deep.

use crate::word::Composite;

/// 96-bit word: 32-bit low limb, 64-bit high limb.
pub type Word96 = Composite<u32, u64>;

/// 128-bit word: two 64-bit limbs.
pub type Word128 = Composite<u64, u64>;

/// 160-bit word: 32-bit low limb, 128-bit high limb.
pub type Word160 = Composite<u32, Word128>;

/// 192-bit word: 64-bit low limb, 128-bit high limb.
pub type Word192 = Composite<u64, Word128>;

/// 224-bit word: 32-bit low limb, 192-bit high limb.
pub type Word224 = Composite<u32, Word192>;

/// 256-bit word: 64-bit low limb, 192-bit high limb.
pub type Word256 = Composite<u64, Word192>;
