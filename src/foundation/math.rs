//! Sampling-geometry arithmetic shared by the kernel builders.
//!
//! All functions are pure. The table builders compose them; tests check them in
//! isolation against hand-computed values.

/// Sampling phases are snapped to multiples of `1 / PHASE_STEPS` source samples.
/// A power of two keeps the snapped value and `phase + tap` exact in `f64`.
pub(crate) const PHASE_STEPS: f64 = (1u64 << 30) as f64;

/// Window edges closer than this to an integer are snapped to it before rounding,
/// so accumulated error in `center` cannot move a start by one whole sample.
pub(crate) const SNAP_EPSILON: f64 = 1e-8;

/// Source-space center of destination sample `dest_index`.
#[inline]
pub(crate) fn sample_center(dest_index: usize, ratio: f64) -> f64 {
    ((dest_index as f64 + 0.5) * ratio) - 0.5
}

/// First source index of a `radius` window around `center`, before clamping.
///
/// This is a snapped ceiling of `center - radius` (see [`tolerant_ceil`]), not a
/// plain `ceil`: an edge within [`SNAP_EPSILON`] of an integer starts at that
/// integer.
#[inline]
pub(crate) fn window_start(center: f64, radius: usize) -> i64 {
    tolerant_ceil(center - radius as f64) as i64
}

/// `x.ceil()`, except values within [`SNAP_EPSILON`] of an integer round to it.
#[inline]
pub(crate) fn tolerant_ceil(x: f64) -> f64 {
    let nearest = x.round();
    if (x - nearest).abs() < SNAP_EPSILON {
        nearest
    } else {
        x.ceil()
    }
}

/// Number of taps per kernel: the full `2 * radius + 1` window, capped by the source axis.
#[inline]
pub(crate) fn window_len(radius: usize, source_size: usize) -> usize {
    radius
        .saturating_mul(2)
        .saturating_add(1)
        .min(source_size)
}

/// Highest start that keeps a `window_len` window inside the source axis.
#[inline]
pub(crate) fn max_start(window_len: usize, source_size: usize) -> usize {
    source_size.saturating_sub(window_len)
}

/// Pull `start` into `[0, source_size - window_len]`.
#[inline]
pub(crate) fn clamp_start(start: i64, window_len: usize, source_size: usize) -> usize {
    let hi = max_start(window_len, source_size) as i64;
    start.clamp(0, hi) as usize
}

/// `start` as an index when the window needs no clamping.
#[inline]
pub(crate) fn unclamped_start(start: i64, window_len: usize, source_size: usize) -> Option<usize> {
    let hi = max_start(window_len, source_size) as i64;
    (0..=hi).contains(&start).then_some(start as usize)
}

/// Offset of the first tap relative to the center, snapped to the
/// `1 / PHASE_STEPS` grid.
///
/// Weights are sampled from this value only, so two kernels with bit-equal
/// phases get bit-equal weights even when the filter is discontinuous.
#[inline]
pub(crate) fn sampling_phase(start: i64, center: f64) -> f64 {
    ((start as f64 - center) * PHASE_STEPS).round() / PHASE_STEPS
}

/// Filter-space offset of tap `tap` in a window whose first tap sits at `phase`.
#[inline]
pub(crate) fn tap_offset(phase: f64, tap: usize, scale: f64) -> f64 {
    (phase + tap as f64) / scale
}

/// Write `values / sum(values)` into `out`. Returns `None` when the sum cannot
/// be divided by (zero, negative or non-finite).
pub(crate) fn normalize_into(values: &[f64], out: &mut [f32]) -> Option<()> {
    debug_assert_eq!(values.len(), out.len());
    let sum: f64 = values.iter().sum();
    if !sum.is_finite() || sum <= f64::EPSILON {
        return None;
    }
    for (dst, &v) in out.iter_mut().zip(values) {
        *dst = (v / sum) as f32;
    }
    Some(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
