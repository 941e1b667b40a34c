use super::*;
use crate::kernel::filter::FilterKind;

fn upscale_10_to_20() -> KernelGeometry {
    KernelGeometry::new(10, 20, 0.5, 1.0, 2).unwrap()
}

fn mosaic(period: usize, corner_interval: usize) -> BuildStrategy {
    BuildStrategy::Mosaic {
        period,
        corner_interval,
    }
}

#[test]
fn owned_buffer_count_per_strategy() {
    assert_eq!(BuildStrategy::Reference.owned_buffer_count(20), 20);
    assert_eq!(mosaic(2, 5).owned_buffer_count(20), 12);
    assert_eq!(mosaic(2, 5).owned_buffer_count(2000), 12);
}

#[test]
fn validate_rejects_bands_that_overlap_or_invert() {
    let g = upscale_10_to_20();
    assert!(mosaic(2, 5).validate(&g).is_ok());
    assert!(mosaic(0, 5).validate(&g).is_err());
    // 2 * 9 + 2 == 20 leaves no interior.
    assert!(mosaic(2, 9).validate(&g).is_err());
    assert!(mosaic(4, 9).validate(&g).is_err());
    assert!(mosaic(2, 30).validate(&g).is_err());
    assert!(BuildStrategy::Reference.validate(&g).is_ok());
}

#[test]
fn oversized_corner_interval_is_a_geometry_error() {
    let err = populate(&upscale_10_to_20(), mosaic(4, 9), &FilterKind::Triangle).unwrap_err();
    assert!(matches!(err, ResizeError::Geometry(_)));
}

#[test]
fn reference_owns_every_entry() {
    let (arena, entries) =
        populate(&upscale_10_to_20(), BuildStrategy::Reference, &FilterKind::Triangle).unwrap();
    assert_eq!(entries.len(), 20);
    assert_eq!(arena.buffer_count(), 20);
    assert!(entries.iter().all(|e| !e.is_shared()));
}

#[test]
fn mosaic_shares_interior_entries_only() {
    let (arena, entries) =
        populate(&upscale_10_to_20(), mosaic(2, 5), &FilterKind::Triangle).unwrap();
    assert_eq!(entries.len(), 20);
    assert_eq!(arena.buffer_count(), 12);
    for (i, e) in entries.iter().enumerate() {
        assert_eq!(e.is_shared(), (7..15).contains(&i), "index {i}");
    }
    // Every shared entry points at the buffer two rows up.
    for i in 7..15 {
        assert_eq!(entries[i].buffer(), entries[i - 2].buffer());
    }
}

#[test]
fn corner_too_small_for_leading_clamp_is_rejected() {
    // Index 2 is clamped at the leading edge, so it cannot seed index 4.
    let err = populate(&upscale_10_to_20(), mosaic(2, 2), &FilterKind::Triangle).unwrap_err();
    assert!(matches!(err, ResizeError::Geometry(_)));
    assert!(err.to_string().contains("kernel 2"));
}

#[test]
fn corner_too_small_for_trailing_clamp_is_rejected() {
    // Index 15 would need its window pulled back from the trailing edge.
    let err = populate(&upscale_10_to_20(), mosaic(2, 4), &FilterKind::Triangle).unwrap_err();
    assert!(err.to_string().contains("destination index 15"));
}

#[test]
fn wrong_period_is_rejected() {
    let g = KernelGeometry::for_resize(30, 20, FilterKind::Lanczos3.support()).unwrap();
    assert!(populate(&g, mosaic(2, 4), &FilterKind::Lanczos3).is_ok());
    let err = populate(&g, mosaic(1, 4), &FilterKind::Lanczos3).unwrap_err();
    assert!(err.to_string().contains("does not repeat"));
}

#[test]
fn entry_with_start_keeps_buffer() {
    let (_, entries) =
        populate(&upscale_10_to_20(), BuildStrategy::Reference, &FilterKind::Triangle).unwrap();
    let e = entries[3];
    let shared = e.with_start(9);
    assert!(shared.is_shared());
    assert_eq!(shared.buffer(), e.buffer());
    assert_eq!(shared.start(), 9);
}

#[test]
fn shared_weights_match_independent_build_for_step_filter() {
    use crate::kernel::filter::FnFilter;

    // Taps of ratio 6/17 land exactly on the step at x = 0 every 17 indices.
    let step = FnFilter::new(1.0, |x: f64| {
        if !(-1.0..1.0).contains(&x) {
            0.0
        } else if x < 0.0 {
            1.0
        } else {
            3.0
        }
    });
    let g = KernelGeometry::for_resize(18, 51, 1.0).unwrap();
    let (ref_arena, reference) = populate(&g, BuildStrategy::Reference, &step).unwrap();
    let (arena, entries) = populate(&g, mosaic(17, 4), &step).unwrap();
    assert_eq!(arena.buffer_count(), 25);

    for (i, (m, r)) in entries.iter().zip(&reference).enumerate() {
        assert_eq!(m.start(), r.start(), "index {i}");
        assert_eq!(arena.get(m.buffer()), ref_arena.get(r.buffer()), "index {i}");
    }
}
