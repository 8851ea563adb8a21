use sgw_core::errors::{ErrorInfo, SgwError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("expected", "4")
        .with_context("actual", "3")
}

#[test]
fn series_error_surface() {
    let err = SgwError::Series(sample_info("value-length-mismatch", "arrays disagree"));
    assert_eq!(err.info().code, "value-length-mismatch");
    assert!(err.info().context.contains_key("expected"));
}

#[test]
fn grid_error_surface() {
    let err = SgwError::Grid(sample_info("invalid-delta-f", "delta_f must be positive"));
    assert_eq!(err.info().code, "invalid-delta-f");
    assert!(err.info().context.contains_key("actual"));
}

#[test]
fn serde_error_surface() {
    let err = SgwError::Serde(sample_info("series-deserialize", "unexpected token"));
    assert_eq!(err.info().code, "series-deserialize");
}

#[test]
fn display_includes_code_context_and_hint() {
    let info = ErrorInfo::new("empty-series", "no samples").with_hint("supply at least one sample");
    let rendered = format!("{}", SgwError::Series(info));
    assert!(rendered.contains("empty-series"));
    assert!(rendered.contains("supply at least one sample"));
}
