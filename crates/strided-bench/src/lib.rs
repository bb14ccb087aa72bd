//! Benchmark profiles for the strided gather primitives.
//!
//! Provides pre-built [`GatherProfile`]s for benchmarks and examples:
//!
//! - [`reference_profile`]: 10K records of dimension 16, 1K gathered
//! - [`stress_profile`]: 100K records of dimension 64, 25K gathered
//! - [`narrow_profile`]: 100K scalar records, 50K gathered (validation-bound)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strided_core::Records;
use strided_test_utils::{scrambled_indices, sequential_source};

/// A source buffer plus a unique index list to gather from it.
pub struct GatherProfile {
    /// Records in the source.
    pub from_count: usize,
    /// Elements per record.
    pub dimension: usize,
    /// Record-major source data.
    pub source: Vec<f64>,
    /// Unique indices into the source.
    pub indices: Vec<u32>,
}

impl GatherProfile {
    /// Build a profile gathering `to_count` of `from_count` records.
    pub fn new(from_count: usize, to_count: usize, dimension: usize, seed: u64) -> Self {
        Self {
            from_count,
            dimension,
            source: sequential_source(from_count, dimension),
            indices: scrambled_indices(from_count, to_count, seed),
        }
    }

    /// Number of records gathered per run.
    pub fn to_count(&self) -> usize {
        self.indices.len()
    }

    /// The source as a record view.
    pub fn records(&self) -> Records<'_, f64> {
        Records::new(&self.source, self.from_count, self.dimension)
            .expect("profile source always matches its layout")
    }

    /// A zeroed destination sized for one gather.
    pub fn dest(&self) -> Vec<f64> {
        vec![0.0; self.to_count() * self.dimension]
    }
}

/// 10K records of dimension 16, 1K gathered.
pub fn reference_profile(seed: u64) -> GatherProfile {
    GatherProfile::new(10_000, 1_000, 16, seed)
}

/// 100K records of dimension 64, 25K gathered.
pub fn stress_profile(seed: u64) -> GatherProfile {
    GatherProfile::new(100_000, 25_000, 64, seed)
}

/// 100K scalar records, 50K gathered.
///
/// With one element per record the seen-marker pass dominates the copy.
pub fn narrow_profile(seed: u64) -> GatherProfile {
    GatherProfile::new(100_000, 50_000, 1, seed)
}
