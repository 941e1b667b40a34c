use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{ResizeError, ResizeResult},
    kernel::filter::{FilterKind, ResampleFilter},
    map::{builder::BuildStrategy, geometry::KernelGeometry, table::KernelMap},
};

/// Serializable description of one resize axis.
///
/// ```json
/// { "source_size": 10, "destination_size": 20, "filter": "triangle",
///   "mosaic": { "period": 2, "corner_interval": 5 } }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisConfig {
    /// Samples on the source axis.
    pub source_size: usize,
    /// Samples on the destination axis.
    pub destination_size: usize,
    /// Reconstruction filter.
    #[serde(default)]
    pub filter: FilterKind,
    /// Precomputed repeat parameters; absent means the reference strategy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mosaic: Option<MosaicParams>,
}

/// Repeat parameters for the mosaic strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MosaicParams {
    /// Destination indices after which the kernel shape repeats.
    pub period: usize,
    /// Destination indices at each edge that need their own kernels.
    pub corner_interval: usize,
}

impl AxisConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> ResizeResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ResizeError::config(format!("invalid axis config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    ///
    /// IO failures are reported as [`ResizeError::Other`] carrying the path;
    /// malformed or invalid documents are [`ResizeError::Config`].
    pub fn from_path(path: impl AsRef<Path>) -> ResizeResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read axis config {}", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Render as pretty JSON.
    pub fn to_json_string(&self) -> ResizeResult<String> {
        Ok(serde_json::to_string_pretty(self).context("serialize axis config")?)
    }

    /// Check sizes and band layout without building weights.
    pub fn validate(&self) -> ResizeResult<()> {
        if self.source_size == 0 || self.destination_size == 0 {
            return Err(ResizeError::config(
                "source_size and destination_size must be > 0",
            ));
        }
        let geometry = self.geometry()?;
        self.strategy()
            .validate(&geometry)
            .map_err(|e| ResizeError::config(e.to_string()))
    }

    /// Geometry derived from the sizes and the filter's support.
    pub fn geometry(&self) -> ResizeResult<KernelGeometry> {
        KernelGeometry::for_resize(
            self.source_size,
            self.destination_size,
            self.filter.support(),
        )
    }

    /// Strategy selected by the presence of [`AxisConfig::mosaic`].
    pub fn strategy(&self) -> BuildStrategy {
        match self.mosaic {
            None => BuildStrategy::Reference,
            Some(MosaicParams {
                period,
                corner_interval,
            }) => BuildStrategy::Mosaic {
                period,
                corner_interval,
            },
        }
    }

    /// Build the kernel table this config describes.
    pub fn build(&self) -> ResizeResult<KernelMap> {
        KernelMap::build(self.geometry()?, self.strategy(), &self.filter)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
