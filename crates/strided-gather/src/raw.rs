//! Unchecked gather for call sites that validated their indices already.
//!
//! No index pass, no allocation: one bulk `copy_from_slice` per record.
//! Indices are not validated, but the copy stays memory-safe; a bad index
//! or an undersized destination panics on the slice bounds check.

use std::ops::Range;

use strided_core::{RecordIndex, Records, RecordsMut};

/// Copy source record `indices[i]` into destination record `i` for every
/// `i` in `0..indices.len()`.
///
/// Destination records at or beyond `indices.len()` are left untouched;
/// the source is never modified.
///
/// # Panics
///
/// Panics if an index is not below `source.count()`, if the destination
/// holds fewer than `indices.len()` records, or if the two views have
/// different dimensions.
pub fn gather_unchecked<T: Copy, I: RecordIndex>(
    source: Records<'_, T>,
    dest: &mut RecordsMut<'_, T>,
    indices: &[I],
) {
    debug_assert_eq!(
        source.dimension(),
        dest.dimension(),
        "source and destination dimensions differ"
    );
    for (slot, &index) in indices.iter().enumerate() {
        let from = index.to_position().unwrap_or(usize::MAX);
        dest.record_mut(slot).copy_from_slice(source.record(from));
    }
}

/// Append source record `indices[i]` to `out` for every `i`, in order.
///
/// Reserves room for all records up front, so `out` grows at most once.
///
/// # Panics
///
/// Panics if an index is not below `source.count()`.
pub fn gather_extend_unchecked<T: Copy, I: RecordIndex>(
    source: Records<'_, T>,
    indices: &[I],
    out: &mut Vec<T>,
) {
    out.reserve(indices.len().saturating_mul(source.dimension()));
    for &index in indices {
        let from = index.to_position().unwrap_or(usize::MAX);
        out.extend_from_slice(source.record(from));
    }
}

/// Slice-level form of [`gather_unchecked`] for call sites without views.
///
/// `source` holds `source.len() / dimension` records; `dest` must hold at
/// least `indices.len()` records of the same `dimension`.
///
/// # Panics
///
/// Panics on an index past the end of `source` or a destination too
/// short for `indices.len()` records.
pub fn gather_records_unchecked<T: Copy, I: RecordIndex>(
    dimension: usize,
    source: &[T],
    dest: &mut [T],
    indices: &[I],
) {
    for (slot, &index) in indices.iter().enumerate() {
        let from = index.to_position().unwrap_or(usize::MAX);
        dest[record_span(slot, dimension)].copy_from_slice(&source[record_span(from, dimension)]);
    }
}

#[inline]
fn record_span(record: usize, dimension: usize) -> Range<usize> {
    let start = record.checked_mul(dimension).unwrap_or(usize::MAX);
    start..start.saturating_add(dimension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_selected_records() {
        let source = [10, 20, 30];
        let mut dest = [0; 2];
        let src = Records::new(&source, 3, 1).unwrap();
        let mut dst = RecordsMut::new(&mut dest, 2, 1).unwrap();
        gather_unchecked(src, &mut dst, &[2u32, 0]);
        assert_eq!(dest, [30, 10]);
    }

    #[test]
    fn leaves_trailing_destination_records() {
        let source = [1.0f32, 2.0, 3.0, 4.0];
        let mut dest = [-1.0f32; 6];
        let src = Records::new(&source, 2, 2).unwrap();
        let mut dst = RecordsMut::new(&mut dest, 3, 2).unwrap();
        gather_unchecked(src, &mut dst, &[1usize]);
        assert_eq!(dest, [3.0, 4.0, -1.0, -1.0, -1.0, -1.0]);
    }

    #[test]
    fn repeats_are_copied_verbatim() {
        let source = [5u8, 6];
        let mut dest = [0u8; 3];
        let src = Records::new(&source, 2, 1).unwrap();
        let mut dst = RecordsMut::new(&mut dest, 3, 1).unwrap();
        gather_unchecked(src, &mut dst, &[1u8, 1, 0]);
        assert_eq!(dest, [6, 6, 5]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_panics() {
        let source = [1, 2, 3];
        let mut dest = [0; 1];
        let src = Records::new(&source, 3, 1).unwrap();
        let mut dst = RecordsMut::new(&mut dest, 1, 1).unwrap();
        gather_unchecked(src, &mut dst, &[3u32]);
    }

    #[test]
    fn slice_form_matches_view_form() {
        let source: Vec<i64> = (0..12).collect();
        let indices = [3u16, 1, 2];
        let mut via_slices = vec![0i64; 9];
        gather_records_unchecked(3, &source, &mut via_slices, &indices);

        let mut via_views = vec![0i64; 9];
        let src = Records::new(&source, 4, 3).unwrap();
        let mut dst = RecordsMut::new(&mut via_views, 3, 3).unwrap();
        gather_unchecked(src, &mut dst, &indices);

        assert_eq!(via_slices, via_views);
        assert_eq!(via_slices, vec![9, 10, 11, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn extend_appends_after_existing_elements() {
        let source = [1, 2, 3, 4, 5, 6];
        let src = Records::new(&source, 3, 2).unwrap();
        let mut out = vec![0, 0];
        gather_extend_unchecked(src, &[2u32, 0], &mut out);
        assert_eq!(out, vec![0, 0, 5, 6, 1, 2]);
    }

    #[test]
    fn zero_dimension_copies_nothing() {
        let source: [u32; 0] = [];
        let mut dest: [u32; 0] = [];
        let src = Records::new(&source, 4, 0).unwrap();
        let mut dst = RecordsMut::new(&mut dest, 2, 0).unwrap();
        gather_unchecked(src, &mut dst, &[3u32, 0]);
    }
}
