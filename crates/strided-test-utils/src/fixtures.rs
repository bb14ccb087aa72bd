//! Reusable source buffers and index lists.
//!
//! - [`SourceFixture`]: an owned `f64` source where element `(r, c)` is
//!   `r * 1000 + c`, so every element names its own position.
//! - [`scrambled_indices`]: a seeded permutation prefix (unique indices).
//! - [`assert_gathered`]: record-by-record check of a gather result.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strided_core::{RecordBuf, Records};

/// Element value for record `record`, column `column` of a sequential source.
///
/// Exact (and therefore unique per position) while `record * 1000 + column`
/// stays below 2^53, i.e. for any buffer that fits in memory with fewer
/// than 1000 columns.
pub fn sequential_value(record: usize, column: usize) -> f64 {
    (record * 1000 + column) as f64
}

/// `count` records of `dimension` elements where each element encodes
/// its own position (see [`sequential_value`]).
pub fn sequential_source(count: usize, dimension: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(count * dimension);
    for r in 0..count {
        for c in 0..dimension {
            data.push(sequential_value(r, c));
        }
    }
    data
}

/// An owned sequential source plus its shape.
pub struct SourceFixture {
    pub count: usize,
    pub dimension: usize,
    pub data: Vec<f64>,
}

impl SourceFixture {
    pub fn new(count: usize, dimension: usize) -> Self {
        Self {
            count,
            dimension,
            data: sequential_source(count, dimension),
        }
    }

    /// Borrow the fixture as a record view.
    pub fn records(&self) -> Records<'_, f64> {
        Records::new(&self.data, self.count, self.dimension)
            .expect("fixture data always matches its layout")
    }

    /// A destination of `count` records pre-filled with a sentinel that
    /// never appears in a sequential source.
    pub fn sentinel_dest(&self, count: usize) -> Vec<f64> {
        vec![-1.0; count * self.dimension]
    }
}

/// The first `take` entries of a deterministic permutation of `0..count`.
///
/// Shuffled with a ChaCha8 RNG seeded from `seed`; identical arguments
/// always produce identical lists.
///
/// # Panics
///
/// Panics if `take > count`.
pub fn scrambled_indices(count: usize, take: usize, seed: u64) -> Vec<u32> {
    assert!(take <= count, "cannot take {take} unique indices from {count}");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut all: Vec<u32> = (0..count as u32).collect();
    all.shuffle(&mut rng);
    all.truncate(take);
    all
}

/// Assert `dest[i] == source[indices[i]]` for every record `i` and
/// every element within it.
pub fn assert_gathered<T, I>(source: Records<'_, T>, dest: &[T], indices: &[I])
where
    T: Copy + PartialEq + std::fmt::Debug,
    I: Copy + TryInto<usize> + std::fmt::Debug,
{
    let dimension = source.dimension();
    assert!(
        dest.len() >= indices.len() * dimension,
        "destination holds {} elements, expected at least {}",
        dest.len(),
        indices.len() * dimension
    );
    for (slot, &index) in indices.iter().enumerate() {
        let from: usize = index
            .try_into()
            .unwrap_or_else(|_| panic!("index {index:?} does not fit usize"));
        let got = &dest[slot * dimension..(slot + 1) * dimension];
        assert_eq!(
            got,
            source.record(from),
            "record {slot} should be source record {from}"
        );
    }
}

/// Convenience: assert an owned gather result against its source.
pub fn assert_gathered_buf<T, I>(source: Records<'_, T>, dest: &RecordBuf<T>, indices: &[I])
where
    T: Copy + PartialEq + std::fmt::Debug,
    I: Copy + TryInto<usize> + std::fmt::Debug,
{
    assert_eq!(dest.count(), indices.len());
    assert_eq!(dest.dimension(), source.dimension());
    assert_gathered(source, dest.as_slice(), indices);
}
