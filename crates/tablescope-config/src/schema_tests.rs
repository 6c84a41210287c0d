use super::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.extract.max_depth, 1);
    assert_eq!(config.extract.truncation, TruncationMode::Omit);
    assert_eq!(config.extract.ancestor_limit, 1024);
    assert_eq!(config.output.format, OutputFormat::Text);
    assert!(config.output.pretty);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file_dir.is_none());
}

#[test]
fn test_partial_sections_keep_defaults() {
    let config: Config = toml::from_str(
        r#"
        [extract]
        max_depth = 3
        "#,
    )
    .unwrap();
    assert_eq!(config.extract.max_depth, 3);
    assert_eq!(config.extract.ancestor_limit, 1024);
    assert!(config.output.pretty);
}

#[test]
fn test_enum_values_are_snake_case() {
    let config: Config = toml::from_str(
        r#"
        [extract]
        truncation = "empty_table"

        [output]
        format = "json"
        pretty = false
        "#,
    )
    .unwrap();
    assert_eq!(config.extract.truncation, TruncationMode::EmptyTable);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(!config.output.pretty);
}

#[test]
fn test_unknown_truncation_is_rejected() {
    let result: Result<Config, _> = toml::from_str(
        r#"
        [extract]
        truncation = "flatten"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_serialize_skips_unset_file_dir() {
    let toml = toml::to_string(&Config::default()).unwrap();
    assert!(toml.contains("[extract]"));
    assert!(!toml.contains("file_dir"));
}
