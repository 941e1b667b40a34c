use crate::{
    foundation::error::{ResizeError, ResizeResult},
    foundation::math::{sample_center, sampling_phase, unclamped_start, window_start},
    kernel::{filter::ResampleFilter, resize_kernel::fill_weights},
    map::{
        arena::{BufferId, WeightArena},
        geometry::KernelGeometry,
    },
};

/// How a [`crate::KernelMap`] is populated.
///
/// Both strategies yield the same `index -> (start, weights)` mapping; they differ
/// only in how many weight buffers they allocate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildStrategy {
    /// Every destination index gets its own independently computed buffer.
    Reference,
    /// Kernels repeat every `period` indices outside two `corner_interval`-wide
    /// edge bands; the repeating interior shares buffers.
    Mosaic {
        /// Destination indices after which the kernel shape repeats.
        period: usize,
        /// Destination indices at each edge that need their own kernels.
        corner_interval: usize,
    },
}

impl BuildStrategy {
    /// Short name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Mosaic { .. } => "mosaic",
        }
    }

    /// Weight buffers a table of `destination_size` kernels allocates.
    pub fn owned_buffer_count(&self, destination_size: usize) -> usize {
        match *self {
            Self::Reference => destination_size,
            Self::Mosaic {
                period,
                corner_interval,
            } => corner_interval * 2 + period,
        }
    }

    /// Check the band layout fits `geometry`. Periodicity itself is verified
    /// while building.
    pub fn validate(&self, geometry: &KernelGeometry) -> ResizeResult<()> {
        let Self::Mosaic {
            period,
            corner_interval,
        } = *self
        else {
            return Ok(());
        };
        if period == 0 {
            return Err(ResizeError::geometry("mosaic period must be > 0"));
        }
        let destination_size = geometry.destination_size;
        let repeat_begin = corner_interval.checked_add(period);
        let repeat_end = destination_size.checked_sub(corner_interval);
        match (repeat_begin, repeat_end) {
            (Some(begin), Some(end)) if begin < end => Ok(()),
            _ => Err(ResizeError::geometry(format!(
                "mosaic bands do not fit: corner_interval {corner_interval} * 2 + period {period} \
                 leaves no repeating interior in destination_size {destination_size}"
            ))),
        }
    }
}

/// One slot of the table. `Owned` entries allocated their buffer; `Shared`
/// entries point at a buffer some earlier `Owned` entry allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KernelEntry {
    Owned { buffer: BufferId, start: usize },
    Shared { buffer: BufferId, start: usize },
}

impl KernelEntry {
    pub(crate) fn buffer(self) -> BufferId {
        match self {
            Self::Owned { buffer, .. } | Self::Shared { buffer, .. } => buffer,
        }
    }

    pub(crate) fn start(self) -> usize {
        match self {
            Self::Owned { start, .. } | Self::Shared { start, .. } => start,
        }
    }

    pub(crate) fn is_shared(self) -> bool {
        matches!(self, Self::Shared { .. })
    }

    /// Reuse this entry's weights at another start.
    pub(crate) fn with_start(self, start: usize) -> Self {
        Self::Shared {
            buffer: self.buffer(),
            start,
        }
    }
}

/// Run `strategy` over `geometry`, returning the weight storage and the
/// per-index entries (`entries[i]` is destination index `i`).
pub(crate) fn populate<F: ResampleFilter + ?Sized>(
    geometry: &KernelGeometry,
    strategy: BuildStrategy,
    filter: &F,
) -> ResizeResult<(WeightArena, Vec<KernelEntry>)> {
    geometry.validate()?;
    strategy.validate(geometry)?;

    let d = geometry.destination_size;
    let mut b = TableBuilder::new(geometry, filter, strategy.owned_buffer_count(d));

    match strategy {
        BuildStrategy::Reference => {
            for i in 0..d {
                b.push_independent(i)?;
            }
        }
        BuildStrategy::Mosaic {
            period,
            corner_interval,
        } => {
            let repeat_begin = corner_interval + period;
            let trailing_begin = d - corner_interval;

            tracing::trace!(end = repeat_begin, "building leading corner and first period");
            for i in 0..repeat_begin {
                b.push_independent(i)?;
            }

            tracing::trace!(
                begin = repeat_begin,
                end = trailing_begin,
                "sharing repeated interior"
            );
            for i in repeat_begin..trailing_begin {
                b.push_shared(i, period)?;
            }

            tracing::trace!(begin = trailing_begin, "building trailing corner");
            for i in trailing_begin..d {
                b.push_independent(i)?;
            }
        }
    }

    Ok(b.finish())
}

struct TableBuilder<'a, F: ?Sized> {
    geometry: &'a KernelGeometry,
    filter: &'a F,
    window_len: usize,
    arena: WeightArena,
    entries: Vec<KernelEntry>,
    scratch: Vec<f64>,
}

impl<'a, F: ResampleFilter + ?Sized> TableBuilder<'a, F> {
    fn new(geometry: &'a KernelGeometry, filter: &'a F, buffers: usize) -> Self {
        let window_len = geometry.window_len();
        Self {
            geometry,
            filter,
            window_len,
            arena: WeightArena::with_capacity(window_len, buffers),
            entries: Vec::with_capacity(geometry.destination_size),
            scratch: Vec::with_capacity(window_len),
        }
    }

    fn push_independent(&mut self, dest_index: usize) -> ResizeResult<()> {
        let g = self.geometry;
        let center = sample_center(dest_index, g.ratio);
        let (buffer, out) = self.arena.allocate();
        let start = fill_weights(
            center,
            g.radius,
            g.scale,
            g.source_size,
            self.filter,
            &mut self.scratch,
            out,
        )?;
        self.entries.push(KernelEntry::Owned { buffer, start });
        Ok(())
    }

    /// Share the weights of `dest_index - period` after checking both kernels sit
    /// at the same sampling phase with no edge clamping.
    ///
    /// Phases are compared exactly: `fill_weights` samples the filter from the
    /// snapped phase alone, so equal phases mean identical weights.
    fn push_shared(&mut self, dest_index: usize, period: usize) -> ResizeResult<()> {
        let g = self.geometry;

        let center = sample_center(dest_index, g.ratio);
        let raw_start = window_start(center, g.radius);
        let start = unclamped_start(raw_start, self.window_len, g.source_size).ok_or_else(|| {
            ResizeError::geometry(format!(
                "destination index {dest_index} needs edge clamping (start {raw_start}); \
                 corner_interval is too small for this geometry"
            ))
        })?;

        let source_index = dest_index - period;
        let source = self.entries[source_index];
        let source_center = sample_center(source_index, g.ratio);
        let source_raw_start = window_start(source_center, g.radius);
        if source_raw_start != source.start() as i64 {
            return Err(ResizeError::geometry(format!(
                "kernel {source_index} is edge clamped and cannot seed index {dest_index}; \
                 corner_interval is too small for this geometry"
            )));
        }

        let phase = sampling_phase(raw_start, center);
        let source_phase = sampling_phase(source_raw_start, source_center);
        if phase != source_phase {
            return Err(ResizeError::geometry(format!(
                "kernel shape does not repeat with period {period}: \
                 index {dest_index} has phase {phase}, index {source_index} has {source_phase}"
            )));
        }

        self.entries.push(source.with_start(start));
        Ok(())
    }

    fn finish(self) -> (WeightArena, Vec<KernelEntry>) {
        (self.arena, self.entries)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/map/builder.rs"]
mod tests;
