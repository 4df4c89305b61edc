//! Fixed-size byte framing for word types.
//!
//! A composite frames as its low limb's bytes followed by its high limb's
//! bytes, and its size is the sum of the limb sizes, so any type that can
//! frame the leaf limbs gets every composite width for free. Leaf limbs use
//! little-endian byte order; the composite rule itself imposes none.

use thiserror::Error;

use crate::word::Composite;

/// Errors produced when reading a word back from bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// The input buffer was shorter than the type's fixed size.
    #[error("expected {expected} bytes, got {got}")]
    Truncated { expected: usize, got: usize },
}

/// Byte-level framing for types with a value-independent serialized size.
pub trait Wire: Sized {
    /// Serialized size in bytes. Constant per type.
    const SIZE: usize;

    /// Append the serialized bytes to `out`. Always writes exactly
    /// [`SIZE`](Wire::SIZE) bytes.
    fn put(&self, out: &mut Vec<u8>);

    /// Read a value back from the front of `bytes`.
    fn take(bytes: &[u8]) -> Result<Self, WireError>;

    /// Serialize into a fresh buffer.
    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::SIZE);
        self.put(&mut out);
        out
    }
}

macro_rules! impl_leaf_wire {
    ($ty:ty, $size:expr) => {
        impl Wire for $ty {
            const SIZE: usize = $size;

            #[inline]
            fn put(&self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }

            fn take(bytes: &[u8]) -> Result<Self, WireError> {
                if bytes.len() < Self::SIZE {
                    return Err(WireError::Truncated {
                        expected: Self::SIZE,
                        got: bytes.len(),
                    });
                }
                let mut buf = [0u8; $size];
                buf.copy_from_slice(&bytes[..Self::SIZE]);
                Ok(<$ty>::from_le_bytes(buf))
            }
        }
    };
}

impl_leaf_wire!(u32, 4);
impl_leaf_wire!(u64, 8);

impl<Lo: Wire, Hi: Wire> Wire for Composite<Lo, Hi> {
    const SIZE: usize = Lo::SIZE + Hi::SIZE;

    fn put(&self, out: &mut Vec<u8>) {
        self.lo.put(out);
        self.hi.put(out);
    }

    fn take(bytes: &[u8]) -> Result<Self, WireError> {
        if bytes.len() < Self::SIZE {
            return Err(WireError::Truncated {
                expected: Self::SIZE,
                got: bytes.len(),
            });
        }
        let lo = Lo::take(&bytes[..Lo::SIZE])?;
        let hi = Hi::take(&bytes[Lo::SIZE..Self::SIZE])?;
        Ok(Composite::from_limbs(lo, hi))
    }
}
