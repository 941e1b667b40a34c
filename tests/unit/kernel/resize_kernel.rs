use super::*;
use crate::kernel::filter::{FilterKind, FnFilter};

#[test]
fn interior_kernel_samples_filter_at_tap_offsets() {
    let k = OwnedKernel::build(1.25, 2, 1.0, 10, &FilterKind::Triangle).unwrap();
    assert_eq!(k.start(), 0);
    assert_eq!(k.weights(), &[0.0, 0.75, 0.25, 0.0, 0.0]);
}

#[test]
fn leading_edge_is_clamped_and_renormalized() {
    let k = OwnedKernel::build(-0.25, 2, 1.0, 10, &FilterKind::Triangle).unwrap();
    assert_eq!(k.start(), 0);
    assert_eq!(k.weights(), &[1.0, 0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn trailing_edge_is_clamped_inside_axis() {
    let k = OwnedKernel::build(9.25, 2, 1.0, 10, &FilterKind::Triangle).unwrap();
    assert_eq!(k.start(), 5);
    assert_eq!(k.as_kernel().end(), 10);
    assert_eq!(k.weights(), &[0.0, 0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn scale_widens_the_sampled_filter() {
    let k = OwnedKernel::build(4.5, 2, 2.0, 10, &FilterKind::Triangle).unwrap();
    assert_eq!(k.start(), 3);
    let sum: f32 = k.weights().iter().sum();
    assert!((sum - 1.0).abs() < 1e-6);
    // Offsets -0.75, -0.25, 0.25, 0.75 (and 1.25) in filter units.
    assert_eq!(k.weights()[0], k.weights()[3]);
    assert_eq!(k.weights()[1], k.weights()[2]);
    assert_eq!(k.weights()[4], 0.0);
}

#[test]
fn window_is_capped_by_short_source() {
    let k = OwnedKernel::build(0.5, 3, 1.0, 2, &FilterKind::Lanczos3).unwrap();
    assert_eq!(k.start(), 0);
    assert_eq!(k.weights().len(), 2);
}

#[test]
fn degenerate_filter_is_an_error() {
    let zero = FnFilter::new(1.0, |_x: f64| 0.0);
    let err = OwnedKernel::build(2.0, 1, 1.0, 10, &zero).unwrap_err();
    assert!(err.to_string().contains("filter error:"));
}

#[test]
fn invalid_parameters_are_rejected() {
    assert!(OwnedKernel::build(1.0, 0, 1.0, 10, &FilterKind::Triangle).is_err());
    assert!(OwnedKernel::build(1.0, 1, 1.0, 0, &FilterKind::Triangle).is_err());
    assert!(OwnedKernel::build(1.0, 1, 0.0, 10, &FilterKind::Triangle).is_err());
    assert!(OwnedKernel::build(f64::NAN, 1, 1.0, 10, &FilterKind::Triangle).is_err());
}

#[test]
fn with_start_shares_weights_without_copying() {
    let owned = OwnedKernel::build(1.25, 2, 1.0, 10, &FilterKind::Triangle).unwrap();
    let k = owned.as_kernel();
    let moved = k.with_start(3);
    assert_eq!(moved.start(), 3);
    assert!(std::ptr::eq(k.weights(), moved.weights()));
    assert_ne!(k, moved);
    assert_eq!(moved.with_start(0), k);
}

#[test]
fn convolve_applies_weights_from_start() {
    let owned = OwnedKernel::build(1.25, 2, 1.0, 10, &FilterKind::Triangle).unwrap();
    let src: Vec<f32> = (0..10).map(|i| (i * 4) as f32).collect();
    assert_eq!(owned.as_kernel().convolve(&src), 5.0);
}
