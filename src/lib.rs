//! # Wideword
//!
//! Fixed-width unsigned integers wider than a machine word, built by
//! composing two narrower limbs into a single logical value.
//!
//! The composition is recursive: a [`Composite`] word implements the same
//! [`WordOps`] contract as the native `u32`/`u64` leaf limbs it is built
//! from, so it can in turn be the limb of a still wider word. The named
//! widths go up to 256 bits:
//!
//! ```
//! use wideword::{Word128, WordOps};
//!
//! let a = Word128::from(u64::MAX);
//! let sum = a.wrapping_add(Word128::from(1u64));
//! assert_eq!(sum.to_big(), num_bigint::BigUint::from(1u8) << 64u32);
//! ```
//!
//! All values are immutable, all operations are total, and arithmetic wraps
//! at the composite's full width.

pub mod word;

// Re-export commonly used types
pub use word::{Composite, Wire, WireError, WordOps};
pub use word::{Word128, Word160, Word192, Word224, Word256, Word96};
