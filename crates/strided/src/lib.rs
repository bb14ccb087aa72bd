//! Strided: indexed gather primitives for flat, fixed-stride numeric buffers.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the strided sub-crates. For most users, adding `strided` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strided::prelude::*;
//!
//! // Five 2-D points, stored record-major.
//! let points = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.5, 0.5];
//! let source = Records::new(&points, 5, 2).unwrap();
//!
//! // Pull a candidate subset into a new buffer.
//! let subset = gather_unique_alloc(source, &[4u32, 1]).unwrap();
//! assert_eq!(subset.record(0), &[0.5, 0.5]);
//! assert_eq!(subset.record(1), &[1.0, 0.0]);
//!
//! // Repeated indices are rejected before anything is copied.
//! let err = gather_unique_alloc(source, &[3u32, 0, 3]).unwrap_err();
//! assert_eq!(err, GatherError::DuplicateIndex { index: 3, position: 2 });
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strided-core` | Layouts, record views, owned buffers, errors |
//! | [`gather`] | `strided-gather` | Gathers, validation, config, leaf helpers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Layouts, record views, owned buffers, and errors (`strided-core`).
///
/// Most users only need [`types::Records`], [`types::RecordsMut`] and
/// [`types::RecordBuf`], which are also in the [`prelude`].
pub use strided_core as types;

/// Raw, validated, and allocating gathers (`strided-gather`).
///
/// Also holds index validation, [`gather::GatherConfig`], and the
/// duplication, fill, and offset helpers.
pub use strided_gather as gather;

/// Common imports for typical strided usage.
///
/// ```rust
/// use strided::prelude::*;
/// ```
pub mod prelude {
    // Buffers
    pub use strided_core::{RecordBuf, RecordIndex, RecordLayout, Records, RecordsMut};

    // Errors
    pub use strided_core::{GatherError, LayoutError};

    // Gathers
    pub use strided_gather::{
        gather_alloc_with, gather_unchecked, gather_unique, gather_unique_alloc, gather_with,
        GatherConfig, IndexPolicy,
    };

    // Helpers
    pub use strided_gather::{duplicate, filled, with_offset};
}
