use crate::foundation::{
    error::{ResizeError, ResizeResult},
    math::window_len,
};

/// Sampling geometry of one resize axis.
///
/// `ratio` maps destination sample `i` to the source-space center
/// `(i + 0.5) * ratio - 0.5`. `scale` stretches the filter for minification and
/// `radius` is the window half-width in source samples.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KernelGeometry {
    /// Samples on the source axis.
    pub source_size: usize,
    /// Samples on the destination axis (one kernel each).
    pub destination_size: usize,
    /// Source-to-destination coordinate factor.
    pub ratio: f64,
    /// Filter support stretch (1 when magnifying).
    pub scale: f64,
    /// Window half-width in source samples.
    pub radius: usize,
}

impl KernelGeometry {
    /// Validated geometry from explicit parameters.
    pub fn new(
        source_size: usize,
        destination_size: usize,
        ratio: f64,
        scale: f64,
        radius: usize,
    ) -> ResizeResult<Self> {
        let g = Self {
            source_size,
            destination_size,
            ratio,
            scale,
            radius,
        };
        g.validate()?;
        Ok(g)
    }

    /// Geometry for resizing `source_size` samples to `destination_size` with a
    /// filter of the given `support`.
    ///
    /// When shrinking, the filter is stretched by the ratio so every source sample
    /// contributes; the window radius grows accordingly.
    pub fn for_resize(
        source_size: usize,
        destination_size: usize,
        support: f64,
    ) -> ResizeResult<Self> {
        if source_size == 0 || destination_size == 0 {
            return Err(ResizeError::validation(
                "source_size and destination_size must be > 0",
            ));
        }
        if !support.is_finite() || support <= 0.0 {
            return Err(ResizeError::validation("filter support must be > 0"));
        }
        let ratio = source_size as f64 / destination_size as f64;
        let scale = ratio.max(1.0);
        let radius = (scale * support).ceil() as usize;
        Self::new(source_size, destination_size, ratio, scale, radius)
    }

    /// Check every parameter is usable.
    pub fn validate(&self) -> ResizeResult<()> {
        if self.source_size == 0 {
            return Err(ResizeError::validation("source_size must be > 0"));
        }
        if self.destination_size == 0 {
            return Err(ResizeError::validation("destination_size must be > 0"));
        }
        if !self.ratio.is_finite() || self.ratio <= 0.0 {
            return Err(ResizeError::validation("ratio must be finite and > 0"));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ResizeError::validation("scale must be finite and > 0"));
        }
        if self.radius == 0 {
            return Err(ResizeError::validation("radius must be > 0"));
        }
        Ok(())
    }

    /// Taps per kernel in tables built from this geometry.
    pub fn window_len(&self) -> usize {
        window_len(self.radius, self.source_size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/map/geometry.rs"]
mod tests;
