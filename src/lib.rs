//! Per-axis resampling kernel tables.
//!
//! A resize along one axis maps every destination sample `i` to a source-space
//! center `(i + 0.5) * ratio - 0.5` and convolves a short window of source samples
//! around it. This crate builds the table of those windows (a [`KernelMap`]): one
//! [`ResizeKernel`] per destination index, each a start offset plus normalized
//! weights.
//!
//! # Build strategies
//!
//! - [`BuildStrategy::Reference`] computes every kernel independently.
//! - [`BuildStrategy::Mosaic`] exploits rational scale ratios: away from the two
//!   clamped edge bands the kernel shape repeats every `period` destination
//!   indices, so only `2 * corner_interval + period` weight buffers are stored and
//!   the rest of the table shares them. The result is value-identical to the
//!   reference table; parameters that would break that are rejected at build time.
//!
//! Detecting `period` and `corner_interval` for a given ratio is left to the
//! caller.
//!
//! # Example
//!
//! ```
//! use resize_kernels::{FilterKind, KernelGeometry, KernelMap, ResampleFilter};
//!
//! let geometry = KernelGeometry::for_resize(10, 20, FilterKind::Triangle.support())?;
//! let map = KernelMap::mosaic(geometry, 2, 5, &FilterKind::Triangle)?;
//! assert_eq!(map.len(), 20);
//! assert_eq!(map.arena_stats().buffers, 12);
//!
//! let k = map.kernel_at(8)?;
//! let sum: f32 = k.weights().iter().sum();
//! assert!((sum - 1.0).abs() < 1e-5);
//! # Ok::<(), resize_kernels::ResizeError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod kernel;
mod map;
mod resample;

pub use config::{AxisConfig, MosaicParams};
pub use foundation::error::{ResizeError, ResizeResult};
pub use kernel::filter::{FilterKind, FnFilter, ResampleFilter};
pub use kernel::resize_kernel::{OwnedKernel, ResizeKernel};
pub use map::arena::ArenaStats;
pub use map::builder::BuildStrategy;
pub use map::geometry::KernelGeometry;
pub use map::table::{KernelDump, KernelMap, KernelMapDump};
pub use resample::{resample_line, resample_rows};
