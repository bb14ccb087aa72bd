//! Candidate-subset extraction example.
//!
//! Demonstrates: build a dataset → pick batch-relative candidates →
//! re-base them into absolute indices → gather the candidates into an
//! owned buffer → score them into a filled accumulator.

use strided_core::{GatherError, RecordBuf, Records};
use strided_gather::{duplicate, filled, gather_unique_alloc, with_offset};

fn main() -> Result<(), GatherError> {
    println!("=== Strided Candidate Subset Example ===\n");

    // 12 points in 3-D, one record per point.
    let dimension = 3;
    let dataset: Vec<f64> = (0..12)
        .flat_map(|i| {
            let t = i as f64;
            [t, t * 0.5, 12.0 - t]
        })
        .collect();
    let records = Records::new(&dataset, 12, dimension)?;

    // Candidates were chosen inside the batch [4, 8), relative to its start.
    let batch_start = 4u32;
    let relative = [3u32, 0, 2];
    let absolute = with_offset(&relative, batch_start);
    println!("Relative candidates {relative:?} → absolute {absolute:?}");

    let candidates: RecordBuf<f64> = gather_unique_alloc(records, &absolute)?;
    for (slot, point) in candidates.view().iter().enumerate() {
        println!("  candidate {slot}: {point:?}");
    }

    // Sum of squared coordinates per candidate.
    let mut energy = filled(candidates.count(), 0.0f64);
    for (slot, point) in candidates.view().iter().enumerate() {
        energy[slot] = point.iter().map(|v| v * v).sum();
    }
    println!("Energies: {energy:?}");

    // Keep an untouched copy before normalising in place.
    let raw = duplicate(candidates.as_slice().len(), candidates.as_slice());
    let mut normalised = candidates;
    for slot in 0..normalised.count() {
        let norm = energy[slot].sqrt();
        if norm > 0.0 {
            normalised.record_mut(slot).iter_mut().for_each(|v| *v /= norm);
        }
    }
    println!("First raw candidate:        {:?}", &raw[..dimension]);
    println!("First normalised candidate: {:?}", normalised.record(0));

    // A repeated candidate is rejected up front.
    match gather_unique_alloc(records, &[5u32, 7, 5]) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("\nRejected as expected: {err}"),
    }

    Ok(())
}
