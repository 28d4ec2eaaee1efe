use statline::cli::build_cli;
use statline::commands::load_config;
use statline::core::{Config, SourceKind};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.display_command, vec!["xsetroot", "-name"]);
    assert_eq!(config.interfaces.len(), 4);
}

#[test]
fn test_load_config_from_flag() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("statline.json");
    fs::write(
        &path,
        r#"{"sources": ["hostname", "network", "cpu", "memory"], "fifo_dir": "/srv/fifos"}"#,
    )
    .unwrap();

    let matches = build_cli()
        .try_get_matches_from(["statline", "--config", path.to_str().unwrap(), "-d"])
        .unwrap();
    let config = load_config(&matches).unwrap();

    assert_eq!(config.sources[0], SourceKind::Hostname);
    assert_eq!(config.fifo_dir, PathBuf::from("/srv/fifos"));
}

#[test]
fn test_flags_override_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("statline.json");
    fs::write(&path, r#"{"socket_path": "/from/file.sock", "fifo_dir": "/from/file"}"#).unwrap();

    let matches = build_cli()
        .try_get_matches_from([
            "statline",
            "--config",
            path.to_str().unwrap(),
            "--socket",
            "/from/flag.sock",
            "-d",
        ])
        .unwrap();
    let config = load_config(&matches).unwrap();

    assert_eq!(config.socket_path, PathBuf::from("/from/flag.sock"));
    assert_eq!(config.fifo_dir, PathBuf::from("/from/file"));
}

#[test]
fn test_bad_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("statline.json");
    fs::write(&path, r#"{"sources": ["gpu"]}"#).unwrap();

    let matches = build_cli()
        .try_get_matches_from(["statline", "--config", path.to_str().unwrap()])
        .unwrap();
    assert!(load_config(&matches).is_err());
}
