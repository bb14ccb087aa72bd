//! Owned-buffer helpers: duplication and constant fill.

/// Copy the first `n` elements of `source` into a new owned buffer.
///
/// Used whenever a caller needs an independent, mutable copy of data it
/// does not own. For record-shaped copies see
/// [`RecordBuf::duplicate`](strided_core::RecordBuf::duplicate).
///
/// # Panics
///
/// Panics if `n > source.len()`.
pub fn duplicate<T: Copy>(n: usize, source: &[T]) -> Vec<T> {
    source[..n].to_vec()
}

/// Allocate `n` elements, every one set to `value`.
///
/// Typically used to initialise accumulators and marker arrays before an
/// algorithm runs over them.
pub fn filled<T: Clone>(n: usize, value: T) -> Vec<T> {
    vec![value; n]
}
