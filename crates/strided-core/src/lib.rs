//! Core types for the strided gather primitives.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the shape and ownership vocabulary shared by the rest of the
//! workspace: record layouts, borrowed and owned record buffers, the
//! [`RecordIndex`] trait for generic index lists, and error types.
//!
//! A record buffer is a flat, record-major slice: `count` records of
//! `dimension` elements each, with record `i` occupying elements
//! `i * dimension .. (i + 1) * dimension`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;
pub mod index;
pub mod layout;

pub use buffer::{RecordBuf, Records, RecordsMut};
pub use error::{GatherError, LayoutError};
pub use index::RecordIndex;
pub use layout::RecordLayout;
