//! Validated and allocating gathers.
//!
//! Every check runs before the first element is copied: a gather that
//! returns an error leaves the destination exactly as it found it, and
//! an allocating gather that fails has allocated nothing.

use strided_core::{GatherError, RecordBuf, RecordIndex, Records, RecordsMut};

use crate::config::GatherConfig;
use crate::raw::{gather_extend_unchecked, gather_unchecked};
use crate::validate::validate_indices;

fn check_shapes<T>(
    source: &Records<'_, T>,
    dest: &RecordsMut<'_, T>,
    to_count: usize,
) -> Result<(), GatherError> {
    if source.dimension() != dest.dimension() {
        return Err(GatherError::DimensionMismatch {
            source: source.dimension(),
            destination: dest.dimension(),
        });
    }
    if dest.count() < to_count {
        return Err(GatherError::DestinationTooSmall {
            required: to_count,
            available: dest.count(),
        });
    }
    Ok(())
}

/// Gather the records named by `indices` into `dest` after checking that
/// every index is in range and no index repeats.
///
/// On success destination record `i` equals source record `indices[i]`
/// for every `i` in `0..indices.len()`. On failure `dest` is untouched.
///
/// # Errors
///
/// - [`GatherError::DimensionMismatch`] / [`GatherError::DestinationTooSmall`]
///   if `dest` cannot receive `indices.len()` source records.
/// - [`GatherError::IndexOutOfRange`] for the first index not below
///   `source.count()`.
/// - [`GatherError::DuplicateIndex`] for the first index that repeats an
///   earlier one.
pub fn gather_unique<T: Copy, I: RecordIndex>(
    source: Records<'_, T>,
    dest: &mut RecordsMut<'_, T>,
    indices: &[I],
) -> Result<(), GatherError> {
    gather_with(GatherConfig::default(), source, dest, indices)
}

/// Allocate a new buffer holding the records named by `indices`, after
/// checking that every index is in range and no index repeats.
///
/// The returned buffer has exactly `indices.len()` records of
/// `source.dimension()` elements and is owned by the caller.
///
/// # Errors
///
/// Same index errors as [`gather_unique`]. Nothing is allocated on failure.
pub fn gather_unique_alloc<T: Copy, I: RecordIndex>(
    source: Records<'_, T>,
    indices: &[I],
) -> Result<RecordBuf<T>, GatherError> {
    gather_alloc_with(GatherConfig::default(), source, indices)
}

/// Gather into `dest` with the checks selected by `config.policy`.
///
/// Shape checks apply to every policy except
/// [`IndexPolicy::Unchecked`](crate::IndexPolicy::Unchecked), which
/// behaves exactly like [`gather_unchecked`] and never returns an error.
pub fn gather_with<T: Copy, I: RecordIndex>(
    config: GatherConfig,
    source: Records<'_, T>,
    dest: &mut RecordsMut<'_, T>,
    indices: &[I],
) -> Result<(), GatherError> {
    if config.policy.checks_bounds() {
        check_shapes(&source, dest, indices.len()).inspect_err(|err| {
            tracing::debug!(
                source_dimension = source.dimension(),
                dest_count = dest.count(),
                to_count = indices.len(),
                error = %err,
                "gather destination rejected"
            );
        })?;
        validate_indices(source.count(), indices, config.policy)?;
    }
    gather_unchecked(source, dest, indices);
    Ok(())
}

/// Allocate and gather with the checks selected by `config.policy`.
///
/// # Errors
///
/// Index errors per the policy, or [`GatherError::Layout`] if
/// `indices.len() * source.dimension()` overflows (possible only when
/// repeats are allowed).
///
/// # Panics
///
/// Under [`IndexPolicy::Unchecked`](crate::IndexPolicy::Unchecked), panics
/// on an index not below `source.count()`.
pub fn gather_alloc_with<T: Copy, I: RecordIndex>(
    config: GatherConfig,
    source: Records<'_, T>,
    indices: &[I],
) -> Result<RecordBuf<T>, GatherError> {
    validate_indices(source.count(), indices, config.policy)?;
    let layout = source.layout().with_count(indices.len())?;

    let mut data = Vec::with_capacity(layout.len());
    gather_extend_unchecked(source, indices, &mut data);
    tracing::trace!(
        from_count = source.count(),
        to_count = layout.count(),
        dimension = layout.dimension(),
        "allocated gather destination"
    );
    Ok(RecordBuf::from_vec(data, layout.count(), layout.dimension())?)
}
