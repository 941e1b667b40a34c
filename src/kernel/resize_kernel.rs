use crate::{
    foundation::error::{ResizeError, ResizeResult},
    foundation::math::{
        clamp_start, normalize_into, sampling_phase, tap_offset, window_len, window_start,
    },
    kernel::filter::ResampleFilter,
};

/// One destination sample's convolution window: the first source index it reads
/// and the normalized weights applied from there on.
///
/// This is a view; the weights live in the [`crate::KernelMap`] (or
/// [`OwnedKernel`]) it was obtained from. Equality compares `start` and weight
/// values, never storage identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeKernel<'a> {
    start: usize,
    weights: &'a [f32],
}

impl<'a> ResizeKernel<'a> {
    pub(crate) fn new(start: usize, weights: &'a [f32]) -> Self {
        Self { start, weights }
    }

    /// First source index covered by the window.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last source index covered by the window.
    pub fn end(&self) -> usize {
        self.start + self.weights.len()
    }

    /// Normalized weights, one per tap.
    pub fn weights(&self) -> &'a [f32] {
        self.weights
    }

    /// Number of taps.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the kernel has no taps (never true for a built table).
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Same weights, reported at `start`. Nothing is copied.
    ///
    /// Only meaningful when the sampling geometry at `start` is an exact repeat of
    /// this kernel's; the mosaic builder verifies that before sharing.
    pub fn with_start(&self, start: usize) -> ResizeKernel<'a> {
        ResizeKernel {
            start,
            weights: self.weights,
        }
    }

    /// Weighted sum of `src[start..end]`.
    ///
    /// Panics if `src` is shorter than [`ResizeKernel::end`].
    #[inline]
    pub fn convolve(&self, src: &[f32]) -> f32 {
        self.weights
            .iter()
            .zip(&src[self.start..self.end()])
            .map(|(w, s)| w * s)
            .sum()
    }
}

/// A kernel that owns its weights. Built one at a time, outside any table.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedKernel {
    start: usize,
    weights: Vec<f32>,
}

impl OwnedKernel {
    /// Build the kernel for a window centered at `center` (source coordinates).
    ///
    /// The window spans `2 * radius + 1` taps (capped by `source_size`) and is
    /// shifted inward when it would leave the source axis. Taps sample
    /// `filter((start + j - center) / scale)` and are normalized to sum to 1.
    pub fn build<F: ResampleFilter + ?Sized>(
        center: f64,
        radius: usize,
        scale: f64,
        source_size: usize,
        filter: &F,
    ) -> ResizeResult<Self> {
        if source_size == 0 || radius == 0 {
            return Err(ResizeError::validation(
                "kernel source_size and radius must be > 0",
            ));
        }
        if !center.is_finite() || !scale.is_finite() || scale <= 0.0 {
            return Err(ResizeError::validation(
                "kernel center must be finite and scale must be > 0",
            ));
        }
        let mut weights = vec![0.0f32; window_len(radius, source_size)];
        let mut scratch = Vec::new();
        let start = fill_weights(
            center,
            radius,
            scale,
            source_size,
            filter,
            &mut scratch,
            &mut weights,
        )?;
        Ok(Self { start, weights })
    }

    /// Borrowed view of this kernel.
    pub fn as_kernel(&self) -> ResizeKernel<'_> {
        ResizeKernel::new(self.start, &self.weights)
    }

    /// First source index covered by the window.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Normalized weights, one per tap.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
}

/// Compute the clamped start and normalized weights of one kernel into `out`.
///
/// `out.len()` must equal `window_len(radius, source_size)`; `scratch` is reused
/// across calls to avoid a per-kernel allocation.
pub(crate) fn fill_weights<F: ResampleFilter + ?Sized>(
    center: f64,
    radius: usize,
    scale: f64,
    source_size: usize,
    filter: &F,
    scratch: &mut Vec<f64>,
    out: &mut [f32],
) -> ResizeResult<usize> {
    let len = out.len();
    debug_assert_eq!(len, window_len(radius, source_size));

    let start = clamp_start(window_start(center, radius), len, source_size);
    let phase = sampling_phase(start as i64, center);

    scratch.clear();
    scratch.extend((0..len).map(|j| filter.weight(tap_offset(phase, j, scale))));

    normalize_into(scratch, out).ok_or_else(|| {
        ResizeError::filter(format!(
            "weights around center {center} (start {start}, {len} taps) do not sum to a positive value"
        ))
    })?;
    Ok(start)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/resize_kernel.rs"]
mod tests;
