use super::*;

#[test]
fn parses_minimal_config_with_defaults() {
    let cfg = AxisConfig::from_json_str(r#"{"source_size": 10, "destination_size": 20}"#).unwrap();
    assert_eq!(cfg.filter, FilterKind::CatmullRom);
    assert_eq!(cfg.mosaic, None);
    assert_eq!(cfg.strategy(), BuildStrategy::Reference);
}

#[test]
fn parses_mosaic_config_and_builds() {
    let cfg = AxisConfig::from_json_str(
        r#"{
            "source_size": 10,
            "destination_size": 20,
            "filter": "triangle",
            "mosaic": { "period": 2, "corner_interval": 5 }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.strategy(), BuildStrategy::Mosaic {
        period: 2,
        corner_interval: 5,
    });

    let map = cfg.build().unwrap();
    assert_eq!(map.len(), 20);
    assert_eq!(map.arena_stats().buffers, 12);
}

#[test]
fn unknown_fields_and_filters_are_config_errors() {
    let err =
        AxisConfig::from_json_str(r#"{"source_size": 1, "destination_size": 2, "extra": 1}"#)
            .unwrap_err();
    assert!(matches!(err, ResizeError::Config(_)));

    let err = AxisConfig::from_json_str(
        r#"{"source_size": 1, "destination_size": 2, "filter": "gaussian"}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ResizeError::Config(_)));
}

#[test]
fn invalid_sizes_and_bands_fail_validation() {
    let err = AxisConfig::from_json_str(r#"{"source_size": 0, "destination_size": 2}"#)
        .unwrap_err();
    assert!(matches!(err, ResizeError::Config(_)));

    let err = AxisConfig::from_json_str(
        r#"{"source_size": 10, "destination_size": 20,
            "mosaic": {"period": 4, "corner_interval": 9}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ResizeError::Config(_)));
}

#[test]
fn json_round_trip_preserves_config() {
    let cfg = AxisConfig {
        source_size: 30,
        destination_size: 20,
        filter: FilterKind::Lanczos3,
        mosaic: Some(MosaicParams {
            period: 2,
            corner_interval: 4,
        }),
    };
    let s = cfg.to_json_string().unwrap();
    assert_eq!(AxisConfig::from_json_str(&s).unwrap(), cfg);
}

#[test]
fn from_path_reads_config_file() {
    let dir = std::path::PathBuf::from("target").join("unit_config");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("axis.json");
    std::fs::write(
        &path,
        r#"{"source_size": 40, "destination_size": 20, "filter": "box"}"#,
    )
    .unwrap();

    let cfg = AxisConfig::from_path(&path).unwrap();
    assert_eq!(cfg.filter, FilterKind::Box);
    assert_eq!(cfg.build().unwrap().len(), 20);
}

#[test]
fn missing_config_file_keeps_io_source() {
    let path = std::path::Path::new("target/unit_config/does-not-exist.json");
    let err = AxisConfig::from_path(path).unwrap_err();
    let ResizeError::Other(inner) = &err else {
        panic!("expected Other, got {err:?}");
    };
    assert!(err.to_string().contains("does-not-exist.json"));
    assert!(inner.downcast_ref::<std::io::Error>().is_some());
}
