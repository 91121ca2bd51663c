//! Per-pixel table application.
//!
//! Each output pixel depends only on its own intensity, so the map is split
//! across rayon workers that share the frozen [`ColorTable`] read-only.

use rayon::prelude::*;

use crate::api::ToneError;
use crate::table::ColorTable;

/// Below this many pixels the sequential loop beats rayon's dispatch cost.
const PARALLEL_THRESHOLD: usize = 16 * 1024;

/// Map every intensity in `luma` through `table`.
///
/// Returns a row-major `[R, G, B, R, G, B, ...]` buffer three times the
/// length of `luma`.
///
/// # Errors
///
/// Returns [`ToneError::MissingTableEntry`] for the first intensity found
/// without a table entry. With the parallel path "first" is whichever worker
/// hits one first.
pub fn apply_table(table: &ColorTable, luma: &[u8]) -> Result<Vec<u8>, ToneError> {
    let mut rgb = vec![0u8; luma.len() * 3];

    let paint = |(pixel, &intensity): (&mut [u8], &u8)| -> Result<(), ToneError> {
        pixel.copy_from_slice(&table.lookup(intensity)?.to_bytes());
        Ok(())
    };

    if luma.len() >= PARALLEL_THRESHOLD {
        rgb.par_chunks_exact_mut(3)
            .zip(luma.par_iter())
            .try_for_each(paint)?;
    } else {
        rgb.chunks_exact_mut(3).zip(luma.iter()).try_for_each(paint)?;
    }

    Ok(rgb)
}
