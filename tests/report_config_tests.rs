use erlang_charts::ChartError;
use erlang_charts::api::{DEFAULT_BASE, MAX_BASE, ReportConfig, build_report, parse_base};
use erlang_charts::core::Viewport;
use std::path::Path;

#[test]
fn missing_base_falls_back_to_default() {
    assert_eq!(parse_base(None), DEFAULT_BASE);
    assert_eq!(DEFAULT_BASE, 5);
}

#[test]
fn valid_base_is_parsed() {
    assert_eq!(parse_base(Some("12")), 12);
    assert_eq!(parse_base(Some(" 7 ")), 7);
}

#[test]
fn unusable_base_falls_back_to_default() {
    for raw in ["", "abc", "-3", "2.5", "0"] {
        assert_eq!(parse_base(Some(raw)), DEFAULT_BASE, "raw = {raw:?}");
    }
}

#[test]
fn zero_base_config_is_rejected() {
    let err = ReportConfig::new(0).expect_err("zero base");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn base_above_ceiling_is_rejected() {
    ReportConfig::new(MAX_BASE).expect("ceiling is accepted");
    for base in [MAX_BASE + 1, u32::MAX] {
        let err = ReportConfig::new(base).expect_err("base above ceiling");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}

#[test]
fn deserialized_oversized_base_fails_before_sweeping() {
    let config: ReportConfig =
        serde_json::from_str(r#"{ "base": 4294967295 }"#).expect("json");
    assert!(matches!(
        config.validate(),
        Err(ChartError::InvalidData(_))
    ));
    assert!(build_report(&config).is_err());
}

#[test]
fn default_viewport_is_ten_by_five_at_one_hundred_dpi() {
    let config = ReportConfig::new(5).expect("config");
    assert_eq!(config.viewport, Viewport::new(1000, 500));
}

#[test]
fn builder_setters_apply() {
    let config = ReportConfig::new(3)
        .expect("config")
        .with_viewport(Viewport::new(640, 320))
        .with_output_dir("out/charts");
    assert_eq!(config.base, 3);
    assert_eq!(config.viewport, Viewport::new(640, 320));
    assert_eq!(config.output_dir(), Path::new("out/charts"));
    config.validate().expect("valid config");
}

#[test]
fn invalid_viewport_fails_validation() {
    let config = ReportConfig::new(3)
        .expect("config")
        .with_viewport(Viewport::new(0, 320));
    assert!(matches!(
        config.validate(),
        Err(ChartError::InvalidViewport { width: 0, height: 320 })
    ));
}

#[test]
fn config_json_round_trip_fills_defaults() {
    let config: ReportConfig = serde_json::from_str(r#"{ "base": 9 }"#).expect("json");
    assert_eq!(config, ReportConfig::new(9).expect("config"));

    let json = serde_json::to_string(&config).expect("serialize");
    let back: ReportConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, config);
}
