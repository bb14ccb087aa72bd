//! Test fixtures for strided gather development.
//!
//! Deterministic source buffers and index lists, plus assertions that
//! compare a gathered destination against its source record by record.
//! Nothing here uses an RNG: every fixture is a pure function of its
//! arguments so failures reproduce exactly.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    assert_gathered, assert_gathered_buf, scrambled_indices, sequential_source, sequential_value,
    SourceFixture,
};
