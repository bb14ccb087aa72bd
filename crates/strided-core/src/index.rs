//! The [`RecordIndex`] trait for generic index lists.

use std::fmt;

/// An unsigned integer that names a record position in a buffer.
///
/// Index lists are generic over the integer width so callers can keep
/// compact `u32` (or narrower) index arrays without converting them
/// before every gather.
pub trait RecordIndex: Copy + Eq + fmt::Debug {
    /// The index as a record position.
    ///
    /// Returns `None` if the value cannot address memory on this platform
    /// (e.g. a `u64` above `usize::MAX` on a 32-bit target). Such an index
    /// is always out of range.
    fn to_position(self) -> Option<usize>;

    /// The raw index value, widened for error reporting.
    fn to_u64(self) -> u64;
}

macro_rules! impl_record_index {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RecordIndex for $ty {
                #[inline]
                fn to_position(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_record_index!(u8, u16, u32, u64, usize);
