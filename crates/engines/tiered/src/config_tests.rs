use super::*;

#[test]
fn test_defaults_are_valid() {
    let config = EngineConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.search_threshold, 13);
    assert_eq!(config.search.exact_max_remaining, 4);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = EngineConfig::from_toml(
        r#"
        seed = 42
        move_time_ms = 500

        [search]
        late_depth = 4
        "#,
    )
    .unwrap();

    assert_eq!(config.seed, Some(42));
    assert_eq!(config.move_time_ms, Some(500));
    assert_eq!(config.search.late_depth, 4);
    assert_eq!(config.search.mid_depth, 2);
    assert_eq!(config.search_threshold, 13);
    assert_eq!(config.heuristic.pressure_overlap, 2);
}

#[test]
fn test_rejects_bad_values() {
    let err = EngineConfig::from_toml("search_threshold = 17").unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));

    let err = EngineConfig::from_toml("max_nodes = 0").unwrap_err();
    assert_eq!(err.to_string(), "config validation error: max_nodes must be > 0");

    let err = EngineConfig::from_toml("[search]\nexact_max_remaining = 6").unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn test_heuristic_weights_are_bounded() {
    let config = EngineConfig::from_toml("[heuristic]\nthreat_weight = 100\nextension_penalty = 0");
    assert!(config.is_ok());

    let err = EngineConfig::from_toml("[heuristic]\nthreat_weight = 600").unwrap_err();
    assert_eq!(
        err.to_string(),
        "config validation error: heuristic.threat_weight must be in [0, 100]"
    );

    let err = EngineConfig::from_toml("[heuristic]\nextension_penalty = -1").unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn test_rejects_malformed_toml() {
    let err = EngineConfig::from_toml("search_threshold = \"many\"").unwrap_err();
    assert!(matches!(err, ConfigError::TomlParse(_)));
}

#[test]
fn test_missing_file() {
    let path = Path::new("definitely/not/here.toml");
    assert!(matches!(
        EngineConfig::load(path),
        Err(ConfigError::FileRead { .. })
    ));
    let config = EngineConfig::load_or_default(path).unwrap();
    assert_eq!(config.search_threshold, 13);
}

#[test]
fn test_search_limits_follow_budgets() {
    let config = EngineConfig {
        move_time_ms: Some(250),
        max_nodes: Some(10_000),
        ..EngineConfig::default()
    };
    let limits = config.search_limits();
    assert_eq!(limits.move_time, Some(Duration::from_millis(250)));
    assert_eq!(limits.max_nodes, Some(10_000));
    assert_eq!(limits.depth, u8::MAX);
}
