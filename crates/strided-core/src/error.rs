//! Error types for record layouts and gather validation.

use std::error::Error;
use std::fmt;

/// Errors describing a flat buffer that does not fit its declared layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// `count * dimension` does not fit in `usize`.
    Overflow {
        /// Number of records in the layout.
        count: usize,
        /// Elements per record.
        dimension: usize,
    },
    /// A borrowed slice is shorter than the layout requires.
    TooShort {
        /// Elements required by the layout.
        required: usize,
        /// Elements available in the slice.
        available: usize,
    },
    /// An owned buffer's length differs from the layout's element count.
    LengthMismatch {
        /// Elements required by the layout.
        expected: usize,
        /// Elements actually supplied.
        actual: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { count, dimension } => {
                write!(f, "layout overflow: {count} records of dimension {dimension}")
            }
            Self::TooShort {
                required,
                available,
            } => {
                write!(
                    f,
                    "buffer too short: layout requires {required} elements, slice has {available}"
                )
            }
            Self::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer length mismatch: expected {expected} elements, got {actual}"
                )
            }
        }
    }
}

impl Error for LayoutError {}

/// Errors from validated gather operations.
///
/// Every variant is detected before any element is copied, so a failed
/// gather never leaves a partially written destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GatherError {
    /// An index refers to a record at or beyond the end of the source.
    IndexOutOfRange {
        /// The offending index value.
        index: u64,
        /// Number of records in the source (exclusive upper bound).
        bound: usize,
        /// Position of the offending entry within the index list.
        position: usize,
    },
    /// An index refers to a source record already taken by an earlier
    /// entry of the same index list.
    DuplicateIndex {
        /// The repeated index value.
        index: usize,
        /// Position of the repeat within the index list.
        position: usize,
    },
    /// Source and destination records have different dimensions.
    DimensionMismatch {
        /// Elements per source record.
        source: usize,
        /// Elements per destination record.
        destination: usize,
    },
    /// The destination cannot hold one record per index.
    DestinationTooSmall {
        /// Records required (the index list length).
        required: usize,
        /// Records the destination holds.
        available: usize,
    },
    /// A buffer does not fit its declared layout.
    Layout(LayoutError),
}

impl fmt::Display for GatherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange {
                index,
                bound,
                position,
            } => {
                write!(
                    f,
                    "index {index} at position {position} is out of range for {bound} source records"
                )
            }
            Self::DuplicateIndex { index, position } => {
                write!(
                    f,
                    "index {index} at position {position} was already gathered; indices must be unique"
                )
            }
            Self::DimensionMismatch {
                source,
                destination,
            } => {
                write!(
                    f,
                    "dimension mismatch: source records have {source} elements, destination records have {destination}"
                )
            }
            Self::DestinationTooSmall {
                required,
                available,
            } => {
                write!(
                    f,
                    "destination too small: {required} records required, {available} available"
                )
            }
            Self::Layout(err) => write!(f, "invalid layout: {err}"),
        }
    }
}

impl Error for GatherError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LayoutError> for GatherError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}
