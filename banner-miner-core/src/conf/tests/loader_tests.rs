use crate::conf::{LogLayout, MinerConfig, load_config};
use crate::error::MinerError;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_path_yields_defaults() {
    // Act
    let config = load_config(None).unwrap();

    // Assert
    assert_eq!(config, MinerConfig::default());
    assert_eq!(config.layout, LogLayout::default());
    assert_eq!(config.input.delimiter_byte().unwrap(), b' ');
    assert_eq!(config.store.database_url, None);
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("miner.toml");
    fs::write(
        &path,
        r#"
[layout]
landing_url = 5

[store]
database_url = "postgres://localhost/tracking"
"#,
    )
    .unwrap();

    // Act
    let config = load_config(Some(path.as_path())).unwrap();

    // Assert
    assert_eq!(
        config.layout,
        LogLayout {
            timestamp: 2,
            landing_url: 5,
            referrer_url: 11,
        }
    );
    assert_eq!(
        config.store.database_url.as_deref(),
        Some("postgres://localhost/tracking")
    );
}

#[test]
fn tab_delimiter_is_accepted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("miner.toml");
    fs::write(&path, "[input]\ndelimiter = \"\\t\"\n").unwrap();

    let config = load_config(Some(path.as_path())).unwrap();

    assert_eq!(config.input.delimiter_byte().unwrap(), b'\t');
}

#[test]
fn multi_character_delimiter_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("miner.toml");
    fs::write(&path, "[input]\ndelimiter = \"::\"\n").unwrap();

    let err = load_config(Some(path.as_path())).unwrap_err();

    assert!(matches!(err, MinerError::InvalidDelimiter { value } if value == "::"));
}

#[test]
fn unknown_key_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("miner.toml");
    fs::write(&path, "[layout]\nreferer = 3\n").unwrap();

    let err = load_config(Some(path.as_path())).unwrap_err();

    assert!(matches!(err, MinerError::ParseConfig { .. }));
}

#[test]
fn unreadable_file_is_a_read_error() {
    let dir = tempdir().unwrap();

    let err = load_config(Some(dir.path().join("absent.toml").as_path())).unwrap_err();

    assert!(matches!(err, MinerError::ReadConfig { .. }));
}
