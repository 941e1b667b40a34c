use std::f64::consts::PI;

use crate::foundation::error::{ResizeError, ResizeResult};

/// Continuous reconstruction filter sampled by the kernel builders.
///
/// `weight` receives offsets already divided by the support scale, so it is always
/// evaluated in the filter's own units. Implementations must be pure: the mosaic
/// builder relies on equal offsets producing equal weights.
pub trait ResampleFilter {
    /// Half-width of the non-zero region, in filter units.
    fn support(&self) -> f64;

    /// Filter value at `x`.
    fn weight(&self, x: f64) -> f64;
}

impl<F: ResampleFilter + ?Sized> ResampleFilter for &F {
    fn support(&self) -> f64 {
        (**self).support()
    }

    fn weight(&self, x: f64) -> f64 {
        (**self).weight(x)
    }
}

/// Adapter turning a closure into a [`ResampleFilter`].
#[derive(Clone, Copy, Debug)]
pub struct FnFilter<F> {
    support: f64,
    f: F,
}

impl<F: Fn(f64) -> f64> FnFilter<F> {
    /// Wrap `f`, declaring it non-zero only within `[-support, support]`.
    pub fn new(support: f64, f: F) -> Self {
        Self { support, f }
    }
}

impl<F: Fn(f64) -> f64> ResampleFilter for FnFilter<F> {
    fn support(&self) -> f64 {
        self.support
    }

    fn weight(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

/// Built-in filters.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// Nearest-neighbour box, support 0.5.
    Box,
    /// Linear tent, support 1.
    Triangle,
    /// Catmull-Rom cubic (B = 0, C = 0.5), support 2.
    #[default]
    CatmullRom,
    /// Mitchell-Netravali cubic (B = C = 1/3), support 2.
    Mitchell,
    /// Lanczos windowed sinc with two lobes.
    Lanczos2,
    /// Lanczos windowed sinc with three lobes.
    Lanczos3,
}

impl FilterKind {
    /// Every built-in filter, in declaration order.
    pub const ALL: [FilterKind; 6] = [
        FilterKind::Box,
        FilterKind::Triangle,
        FilterKind::CatmullRom,
        FilterKind::Mitchell,
        FilterKind::Lanczos2,
        FilterKind::Lanczos3,
    ];

    /// Parse a filter name (case-insensitive, `-`/`_` tolerant).
    pub fn parse(name: &str) -> ResizeResult<Self> {
        let name = name.trim().to_ascii_lowercase().replace('-', "_");
        if name.is_empty() {
            return Err(ResizeError::validation("filter name must be non-empty"));
        }
        match name.as_str() {
            "box" | "nearest" => Ok(Self::Box),
            "triangle" | "linear" | "bilinear" => Ok(Self::Triangle),
            "catmull_rom" | "catmullrom" | "bicubic" => Ok(Self::CatmullRom),
            "mitchell" => Ok(Self::Mitchell),
            "lanczos2" => Ok(Self::Lanczos2),
            "lanczos3" | "lanczos" => Ok(Self::Lanczos3),
            other => Err(ResizeError::validation(format!(
                "unknown filter '{other}'"
            ))),
        }
    }

    /// Stable snake_case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Triangle => "triangle",
            Self::CatmullRom => "catmull_rom",
            Self::Mitchell => "mitchell",
            Self::Lanczos2 => "lanczos2",
            Self::Lanczos3 => "lanczos3",
        }
    }
}

impl std::str::FromStr for FilterKind {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl ResampleFilter for FilterKind {
    fn support(&self) -> f64 {
        match self {
            Self::Box => 0.5,
            Self::Triangle => 1.0,
            Self::CatmullRom | Self::Mitchell | Self::Lanczos2 => 2.0,
            Self::Lanczos3 => 3.0,
        }
    }

    fn weight(&self, x: f64) -> f64 {
        match self {
            Self::Box => box_kernel(x),
            Self::Triangle => triangle_kernel(x),
            Self::CatmullRom => cubic_bc(0.0, 0.5, x),
            Self::Mitchell => cubic_bc(1.0 / 3.0, 1.0 / 3.0, x),
            Self::Lanczos2 => lanczos(2.0, x),
            Self::Lanczos3 => lanczos(3.0, x),
        }
    }
}

#[inline]
fn box_kernel(x: f64) -> f64 {
    // Half-open so adjacent boxes never both claim a tap.
    if (-0.5..0.5).contains(&x) { 1.0 } else { 0.0 }
}

#[inline]
fn triangle_kernel(x: f64) -> f64 {
    f64::max(1.0 - x.abs(), 0.0)
}

/// Mitchell-Netravali family of cubics parameterized by `b` and `c`.
#[inline]
fn cubic_bc(b: f64, c: f64, x: f64) -> f64 {
    let a = x.abs();
    let k = if a < 1.0 {
        ((12.0 - 9.0 * b - 6.0 * c) * a.powi(3))
            + ((-18.0 + 12.0 * b + 6.0 * c) * a.powi(2))
            + (6.0 - 2.0 * b)
    } else if a < 2.0 {
        ((-b - 6.0 * c) * a.powi(3))
            + ((6.0 * b + 30.0 * c) * a.powi(2))
            + ((-12.0 * b - 48.0 * c) * a)
            + (8.0 * b + 24.0 * c)
    } else {
        0.0
    };
    k / 6.0
}

#[inline]
fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let a = x * PI;
        a.sin() / a
    }
}

#[inline]
fn lanczos(taps: f64, x: f64) -> f64 {
    if x.abs() < taps {
        sinc(x) * sinc(x / taps)
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/filter.rs"]
mod tests;
