//! Indexed buffer transfer over strided record buffers.
//!
//! Gathers copy the records named by an index list out of a flat,
//! record-major source into a destination. Three tiers trade checking
//! for speed:
//!
//! ```text
//! gather_unique_alloc   validate → allocate → copy   (owns the destination)
//! gather_unique         validate → copy              (caller's destination)
//! gather_unchecked      copy                         (caller validated already)
//! ```
//!
//! Validation is fail-fast: every index is checked before any element
//! moves, so an error never leaves a half-written destination.
//! [`gather_with`] and [`gather_alloc_with`] select the checks through a
//! [`GatherConfig`].
//!
//! The leaf helpers in [`owned`] and [`offset`] (duplication, constant
//! fill, index re-basing) have no dependency on the gathers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod gather;
pub mod offset;
pub mod owned;
pub mod raw;
pub mod validate;

pub use config::{GatherConfig, IndexPolicy};
pub use gather::{gather_alloc_with, gather_unique, gather_unique_alloc, gather_with};
pub use offset::{offset_in_place, with_offset};
pub use owned::{duplicate, filled};
pub use raw::{gather_extend_unchecked, gather_records_unchecked, gather_unchecked};
pub use validate::{validate_bounds, validate_indices, validate_unique, SeenMarkers};
