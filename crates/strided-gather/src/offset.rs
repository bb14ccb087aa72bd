//! Re-basing index arrays.
//!
//! Index lists computed against a sub-range (e.g. a batch starting at
//! record `k`) are shifted into the absolute index space by adding `k`.
//! Overflow follows ordinary integer arithmetic and is the caller's
//! responsibility.

use std::ops::{Add, AddAssign};

/// A new array holding `values[k] + offset` for every `k`.
pub fn with_offset<I>(values: &[I], offset: I) -> Vec<I>
where
    I: Copy + Add<Output = I>,
{
    values.iter().map(|&v| v + offset).collect()
}

/// Add `offset` to every element of `values`.
pub fn offset_in_place<I>(values: &mut [I], offset: I)
where
    I: Copy + AddAssign,
{
    for v in values {
        *v += offset;
    }
}
