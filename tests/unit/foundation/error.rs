use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ResizeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ResizeError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(ResizeError::filter("x").to_string().contains("filter error:"));
    assert!(ResizeError::config("x").to_string().contains("config error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ResizeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
