//! Logical shape of a flat record-major buffer.

use std::ops::Range;

use crate::error::LayoutError;

/// Shape of a flat buffer holding `count` records of `dimension` elements.
///
/// Records are stored contiguously and record-major: record `i` occupies
/// the element range `i * dimension .. (i + 1) * dimension`. A layout is
/// only constructible when `count * dimension` fits in `usize`, so every
/// record range computed from it is overflow-free.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecordLayout {
    count: usize,
    dimension: usize,
    len: usize,
}

impl RecordLayout {
    /// Create a layout for `count` records of `dimension` elements each.
    pub fn new(count: usize, dimension: usize) -> Result<Self, LayoutError> {
        let len = count
            .checked_mul(dimension)
            .ok_or(LayoutError::Overflow { count, dimension })?;
        Ok(Self {
            count,
            dimension,
            len,
        })
    }

    /// Number of records.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Elements per record.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of elements (`count * dimension`).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the layout holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Element range of record `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    #[inline]
    pub fn record_range(&self, index: usize) -> Range<usize> {
        assert!(
            index < self.count,
            "record {index} out of range for layout of {} records",
            self.count
        );
        let start = index * self.dimension;
        start..start + self.dimension
    }

    /// The first `count` records of this layout.
    ///
    /// # Panics
    ///
    /// Panics if `count > self.count()`.
    pub fn prefix(&self, count: usize) -> Self {
        assert!(
            count <= self.count,
            "prefix of {count} records exceeds layout of {}",
            self.count
        );
        Self {
            count,
            dimension: self.dimension,
            len: count * self.dimension,
        }
    }

    /// The same dimension with a different record count.
    pub fn with_count(&self, count: usize) -> Result<Self, LayoutError> {
        Self::new(count, self.dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_is_count_times_dimension() {
        let layout = RecordLayout::new(5, 3).unwrap();
        assert_eq!(layout.len(), 15);
        assert!(!layout.is_empty());
    }

    #[test]
    fn overflow_is_rejected() {
        let err = RecordLayout::new(usize::MAX, 2).unwrap_err();
        assert_eq!(
            err,
            LayoutError::Overflow {
                count: usize::MAX,
                dimension: 2
            }
        );
    }

    #[test]
    fn record_range_is_contiguous() {
        let layout = RecordLayout::new(4, 2).unwrap();
        assert_eq!(layout.record_range(0), 0..2);
        assert_eq!(layout.record_range(3), 6..8);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn record_range_panics_past_count() {
        let layout = RecordLayout::new(4, 2).unwrap();
        let _ = layout.record_range(4);
    }

    #[test]
    fn zero_dimension_is_empty() {
        let layout = RecordLayout::new(10, 0).unwrap();
        assert!(layout.is_empty());
        assert_eq!(layout.record_range(9), 0..0);
    }

    #[test]
    fn prefix_shrinks_len() {
        let layout = RecordLayout::new(10, 3).unwrap().prefix(4);
        assert_eq!(layout.count(), 4);
        assert_eq!(layout.len(), 12);
    }

    #[test]
    fn with_count_keeps_dimension() {
        let layout = RecordLayout::new(10, 3).unwrap().with_count(2).unwrap();
        assert_eq!(layout.count(), 2);
        assert_eq!(layout.dimension(), 3);
    }
}
