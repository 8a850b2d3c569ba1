//! Verifies JSON config loading. Installs the process-wide config, so
//! it runs in its own binary.

use regbook_core::{config, init_config_from_file};
use std::fs;

#[test]
fn config_loads_from_json_file_and_reinit_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "dsn": ":memory:", "log_level": "info" }"#,
    )
    .unwrap();

    init_config_from_file(&path).unwrap();
    let active = config::app().expect("config should be installed");
    assert_eq!(active.dsn, ":memory:");
    assert_eq!(active.log_level.as_deref(), Some("info"));
    assert_eq!(active.log_dir, None);

    init_config_from_file(&path).expect("same file should be idempotent");

    let bad_path = dir.path().join("broken.json");
    fs::write(&bad_path, "{ not json").unwrap();
    let err = init_config_from_file(&bad_path).unwrap_err();
    assert!(err.contains("failed to parse"));
}
