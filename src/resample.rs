//! Applying a [`KernelMap`] to sample data along its axis.

use rayon::prelude::*;

use crate::{
    foundation::error::{ResizeError, ResizeResult},
    map::table::KernelMap,
};

/// Resample one line: `dst[i] = kernel_at(i) · src`.
pub fn resample_line(map: &KernelMap, src: &[f32], dst: &mut [f32]) -> ResizeResult<()> {
    check_line_lengths(map, src.len(), dst.len())?;
    for (out, kernel) in dst.iter_mut().zip(map.iter()) {
        *out = kernel.convolve(src);
    }
    Ok(())
}

/// Resample `rows` consecutive lines packed in `src` into `dst`, rows in parallel.
///
/// All workers read the same table concurrently.
#[tracing::instrument(skip(map, src, dst), fields(kernels = map.len()))]
pub fn resample_rows(
    map: &KernelMap,
    src: &[f32],
    rows: usize,
    dst: &mut [f32],
) -> ResizeResult<()> {
    let g = map.geometry();
    let src_expected = g
        .source_size
        .checked_mul(rows)
        .ok_or_else(|| ResizeError::validation("row buffer size overflow"))?;
    let dst_expected = g
        .destination_size
        .checked_mul(rows)
        .ok_or_else(|| ResizeError::validation("row buffer size overflow"))?;
    if src.len() != src_expected || dst.len() != dst_expected {
        return Err(ResizeError::validation(format!(
            "resample_rows expects src of {src_expected} and dst of {dst_expected} samples, got {} and {}",
            src.len(),
            dst.len()
        )));
    }
    if rows == 0 {
        return Ok(());
    }

    dst.par_chunks_exact_mut(g.destination_size)
        .zip(src.par_chunks_exact(g.source_size))
        .for_each(|(dst_row, src_row)| {
            for (out, kernel) in dst_row.iter_mut().zip(map.iter()) {
                *out = kernel.convolve(src_row);
            }
        });
    Ok(())
}

fn check_line_lengths(map: &KernelMap, src_len: usize, dst_len: usize) -> ResizeResult<()> {
    let g = map.geometry();
    if src_len != g.source_size {
        return Err(ResizeError::validation(format!(
            "source line has {src_len} samples, table expects {}",
            g.source_size
        )));
    }
    if dst_len != g.destination_size {
        return Err(ResizeError::validation(format!(
            "destination line has {dst_len} samples, table expects {}",
            g.destination_size
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/resample.rs"]
mod tests;
