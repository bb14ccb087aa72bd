//! Index list validation.
//!
//! Validation is a single forward pass over the index list. Each entry is
//! checked against the source bound first and, under
//! [`IndexPolicy::Unique`], against a per-call [`SeenMarkers`] table.
//! The first failing entry in list order is the one reported.

use fixedbitset::FixedBitSet;
use strided_core::{GatherError, RecordIndex};

use crate::config::IndexPolicy;

/// One "already gathered" bit per source record.
///
/// Scoped to a single validation call.
#[derive(Debug)]
pub struct SeenMarkers {
    seen: FixedBitSet,
}

impl SeenMarkers {
    /// Markers for `count` source records, all unseen.
    pub fn new(count: usize) -> Self {
        Self {
            seen: FixedBitSet::with_capacity(count),
        }
    }

    /// Mark `position` as seen. Returns `false` if it already was.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not below the marker count.
    #[inline]
    pub fn mark(&mut self, position: usize) -> bool {
        !self.seen.put(position)
    }
}

#[inline]
fn checked_position<I: RecordIndex>(
    index: I,
    bound: usize,
    position: usize,
) -> Result<usize, GatherError> {
    match index.to_position() {
        Some(p) if p < bound => Ok(p),
        _ => Err(GatherError::IndexOutOfRange {
            index: index.to_u64(),
            bound,
            position,
        }),
    }
}

/// Check that every index is below `from_count`.
pub fn validate_bounds<I: RecordIndex>(from_count: usize, indices: &[I]) -> Result<(), GatherError> {
    for (position, &index) in indices.iter().enumerate() {
        checked_position(index, from_count, position)?;
    }
    Ok(())
}

/// Check that every index is below `from_count` and that no source
/// record is named twice.
///
/// Marks the source record each entry consumes, so a repeat is caught
/// wherever it appears in the list.
pub fn validate_unique<I: RecordIndex>(from_count: usize, indices: &[I]) -> Result<(), GatherError> {
    let mut seen = SeenMarkers::new(from_count);
    for (position, &index) in indices.iter().enumerate() {
        let source = checked_position(index, from_count, position)?;
        if !seen.mark(source) {
            return Err(GatherError::DuplicateIndex {
                index: source,
                position,
            });
        }
    }
    Ok(())
}

/// Validate `indices` against a source of `from_count` records under `policy`.
pub fn validate_indices<I: RecordIndex>(
    from_count: usize,
    indices: &[I],
    policy: IndexPolicy,
) -> Result<(), GatherError> {
    let result = if policy.checks_uniqueness() {
        validate_unique(from_count, indices)
    } else if policy.checks_bounds() {
        validate_bounds(from_count, indices)
    } else {
        Ok(())
    };
    result.inspect_err(|err| {
        tracing::debug!(
            from_count,
            to_count = indices.len(),
            ?policy,
            error = %err,
            "index list rejected"
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_reports_first_visit_only() {
        let mut markers = SeenMarkers::new(3);
        assert!(markers.mark(1));
        assert!(!markers.mark(1));
        assert!(markers.mark(0));
        assert!(markers.mark(2));
    }

    #[test]
    fn markers_cover_large_sources() {
        let mut markers = SeenMarkers::new(100_000);
        assert!(markers.mark(99_999));
        assert!(!markers.mark(99_999));
        assert!(markers.mark(64));
    }

    #[test]
    #[should_panic]
    fn mark_past_count_panics() {
        let mut markers = SeenMarkers::new(3);
        markers.mark(3);
    }

    #[test]
    fn unique_accepts_permutation() {
        assert_eq!(validate_unique(4, &[3u32, 1, 0, 2]), Ok(()));
    }

    #[test]
    fn unique_reports_duplicate_value() {
        let err = validate_unique(5, &[3usize, 0, 3]).unwrap_err();
        assert_eq!(
            err,
            GatherError::DuplicateIndex {
                index: 3,
                position: 2
            }
        );
    }

    #[test]
    fn duplicate_source_index_detected_at_any_list_position() {
        // Source index 2 is consumed at list position 0 and repeated at 3;
        // the positions it shares with list slots must not matter.
        let err = validate_unique(4, &[2u32, 0, 1, 2]).unwrap_err();
        assert_eq!(
            err,
            GatherError::DuplicateIndex {
                index: 2,
                position: 3
            }
        );
    }

    #[test]
    fn earliest_repeat_wins() {
        let err = validate_unique(10, &[1u8, 2, 2, 1]).unwrap_err();
        assert_eq!(
            err,
            GatherError::DuplicateIndex {
                index: 2,
                position: 2
            }
        );
    }

    #[test]
    fn out_of_range_reports_value_and_bound() {
        let err = validate_unique(3, &[0u64, 3]).unwrap_err();
        assert_eq!(
            err,
            GatherError::IndexOutOfRange {
                index: 3,
                bound: 3,
                position: 1
            }
        );
    }

    #[test]
    fn failures_reported_in_list_order() {
        // The repeat at position 2 precedes the out-of-range entry at 3.
        let err = validate_unique(5, &[3u32, 0, 3, 9]).unwrap_err();
        assert!(matches!(err, GatherError::DuplicateIndex { position: 2, .. }));

        let err = validate_unique(5, &[3u32, 9, 3]).unwrap_err();
        assert!(matches!(err, GatherError::IndexOutOfRange { position: 1, .. }));
    }

    #[test]
    fn bounded_allows_repeats() {
        assert_eq!(validate_bounds(3, &[2u32, 2, 0]), Ok(()));
        assert!(validate_bounds(3, &[2u32, 3]).is_err());
    }

    #[test]
    fn empty_source_rejects_any_index() {
        let err = validate_unique(0, &[0u32]).unwrap_err();
        assert!(matches!(err, GatherError::IndexOutOfRange { bound: 0, .. }));
        assert_eq!(validate_unique::<u32>(0, &[]), Ok(()));
    }

    #[test]
    fn policy_dispatch() {
        let repeated = [1u32, 1];
        assert_eq!(validate_indices(2, &repeated, IndexPolicy::Unchecked), Ok(()));
        assert_eq!(validate_indices(2, &repeated, IndexPolicy::Bounded), Ok(()));
        assert!(validate_indices(2, &repeated, IndexPolicy::Unique).is_err());

        let wild = [5u32];
        assert_eq!(validate_indices(2, &wild, IndexPolicy::Unchecked), Ok(()));
        assert!(validate_indices(2, &wild, IndexPolicy::Bounded).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unique_rejects_exactly_lists_with_repeats(
                from_count in 1usize..64,
                raw in prop::collection::vec(0usize..64, 0..64),
            ) {
                let indices: Vec<usize> = raw.into_iter().map(|i| i % from_count).collect();
                let mut sorted = indices.clone();
                sorted.sort_unstable();
                sorted.dedup();
                let has_repeat = sorted.len() != indices.len();
                prop_assert_eq!(validate_unique(from_count, &indices).is_err(), has_repeat);
            }

            #[test]
            fn successful_unique_validation_implies_to_count_le_from_count(
                from_count in 0usize..32,
                indices in prop::collection::vec(0u32..40, 0..48),
            ) {
                if validate_unique(from_count, &indices).is_ok() {
                    prop_assert!(indices.len() <= from_count);
                }
            }
        }
    }
}
