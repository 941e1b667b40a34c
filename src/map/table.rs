use crate::{
    foundation::error::{ResizeError, ResizeResult},
    kernel::{filter::ResampleFilter, resize_kernel::ResizeKernel},
    map::{
        arena::{ArenaStats, WeightArena},
        builder::{BuildStrategy, KernelEntry, populate},
        geometry::KernelGeometry,
    },
};

/// Immutable table of one kernel per destination index along one axis.
///
/// Built once; afterwards it is only read, so it can be shared across resampling
/// workers without synchronization.
#[derive(Debug)]
pub struct KernelMap {
    geometry: KernelGeometry,
    strategy: BuildStrategy,
    arena: WeightArena,
    entries: Vec<KernelEntry>,
}

impl KernelMap {
    /// Build a table for `geometry` using `strategy`.
    #[tracing::instrument(skip(filter))]
    pub fn build<F: ResampleFilter + ?Sized>(
        geometry: KernelGeometry,
        strategy: BuildStrategy,
        filter: &F,
    ) -> ResizeResult<Self> {
        let (arena, entries) = populate(&geometry, strategy, filter)?;
        let map = Self {
            geometry,
            strategy,
            arena,
            entries,
        };
        tracing::debug!(
            kernels = map.entries.len(),
            buffers = map.arena.buffer_count(),
            window_len = map.window_len(),
            "built kernel map"
        );
        Ok(map)
    }

    /// Table where every destination index owns its weights.
    pub fn reference<F: ResampleFilter + ?Sized>(
        geometry: KernelGeometry,
        filter: &F,
    ) -> ResizeResult<Self> {
        Self::build(geometry, BuildStrategy::Reference, filter)
    }

    /// Table that stores only `2 * corner_interval + period` weight buffers.
    ///
    /// `period` and `corner_interval` must describe `geometry` exactly; a wrong
    /// value fails construction instead of producing a mis-tiled table.
    pub fn mosaic<F: ResampleFilter + ?Sized>(
        geometry: KernelGeometry,
        period: usize,
        corner_interval: usize,
        filter: &F,
    ) -> ResizeResult<Self> {
        Self::build(
            geometry,
            BuildStrategy::Mosaic {
                period,
                corner_interval,
            },
            filter,
        )
    }

    /// Geometry the table was built for.
    pub fn geometry(&self) -> &KernelGeometry {
        &self.geometry
    }

    /// Strategy the table was built with.
    pub fn strategy(&self) -> BuildStrategy {
        self.strategy
    }

    /// Number of kernels (the destination size).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no kernels (never true for a built table).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Taps per kernel.
    pub fn window_len(&self) -> usize {
        self.geometry.window_len()
    }

    /// Kernel for destination index `index`.
    pub fn kernel_at(&self, index: usize) -> ResizeResult<ResizeKernel<'_>> {
        let entry = self.entry(index)?;
        Ok(self.view(entry))
    }

    /// Whether `index` reuses weights allocated for an earlier index.
    pub fn shares_weights(&self, index: usize) -> ResizeResult<bool> {
        Ok(self.entry(index)?.is_shared())
    }

    /// All kernels in destination order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = ResizeKernel<'_>> + '_ {
        self.entries.iter().map(|&e| self.view(e))
    }

    /// Weight storage counters.
    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }

    /// Diagnostic summary of the builder kind and its parameters. Not a stable format.
    pub fn describe(&self) -> String {
        let g = &self.geometry;
        let mut s = format!(
            "{}|radius:{}|sourceSize:{}|destinationSize:{}|ratio:{}|scale:{}",
            self.strategy.name(),
            g.radius,
            g.source_size,
            g.destination_size,
            g.ratio,
            g.scale
        );
        if let BuildStrategy::Mosaic {
            period,
            corner_interval,
        } = self.strategy
        {
            s.push_str(&format!("|period:{period}|cornerInterval:{corner_interval}"));
        }
        s
    }

    /// Serializable snapshot of the whole table.
    pub fn dump(&self) -> KernelMapDump {
        KernelMapDump {
            description: self.describe(),
            geometry: self.geometry,
            strategy: self.strategy,
            arena: self.arena_stats(),
            kernels: self
                .entries
                .iter()
                .enumerate()
                .map(|(index, &e)| KernelDump {
                    index,
                    start: e.start(),
                    shared: e.is_shared(),
                    weights: self.arena.get(e.buffer()).to_vec(),
                })
                .collect(),
        }
    }

    fn entry(&self, index: usize) -> ResizeResult<KernelEntry> {
        self.entries.get(index).copied().ok_or_else(|| {
            ResizeError::validation(format!(
                "kernel index {index} is out of range for destination_size {}",
                self.entries.len()
            ))
        })
    }

    fn view(&self, entry: KernelEntry) -> ResizeKernel<'_> {
        ResizeKernel::new(entry.start(), self.arena.get(entry.buffer()))
    }
}

/// Snapshot of a [`KernelMap`] for logging and tooling.
#[derive(Clone, Debug, serde::Serialize)]
pub struct KernelMapDump {
    /// Output of [`KernelMap::describe`].
    pub description: String,
    /// Table geometry.
    pub geometry: KernelGeometry,
    /// Build strategy.
    pub strategy: BuildStrategy,
    /// Weight storage counters.
    pub arena: ArenaStats,
    /// Kernels in destination order.
    pub kernels: Vec<KernelDump>,
}

/// One kernel of a [`KernelMapDump`].
#[derive(Clone, Debug, serde::Serialize)]
pub struct KernelDump {
    /// Destination index.
    pub index: usize,
    /// First source index.
    pub start: usize,
    /// Whether the weights are shared with an earlier index.
    pub shared: bool,
    /// Normalized weights.
    pub weights: Vec<f32>,
}

#[cfg(test)]
#[path = "../../tests/unit/map/table.rs"]
mod tests;
