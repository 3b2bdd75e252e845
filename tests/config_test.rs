//! Integration tests for configuration loading.

use clipstitch::config::{load_config, load_config_or_default};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn load_full_config() {
    let file = write_config(
        r#"
[api]
base_url = "https://clips.example.com/"
timeout_secs = 10

[session]
max_extra = 2
neighbor_range = 4
transcript_window_secs = 120
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.api.base_url, "https://clips.example.com/");
    assert_eq!(config.api.timeout_secs, 10);
    assert_eq!(config.session.max_extra, 2);
    assert_eq!(config.session.neighbor_range, 4);
    assert_eq!(config.session.transcript_window_secs, 120);
}

#[test]
fn empty_file_uses_defaults() {
    let file = write_config("");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.api.base_url, "http://127.0.0.1:8001");
    assert_eq!(config.session.max_extra, 3);
}

#[test]
fn explicit_path_wins_over_defaults() {
    let file = write_config("[session]\nmax_extra = 1\n");
    let config = load_config_or_default(Some(file.path())).unwrap();
    assert_eq!(config.session.max_extra, 1);
}

#[test]
fn invalid_values_are_rejected() {
    for contents in [
        "[session]\nmax_extra = 11\n",
        "[session]\nneighbor_range = 0\n",
        "[session]\ntranscript_window_secs = 0\n",
        "[api]\ntimeout_secs = 0\n",
        "[api]\nbase_url = \"\"\n",
    ] {
        let file = write_config(contents);
        assert!(load_config(file.path()).is_err(), "accepted: {contents}");
    }
}

#[test]
fn malformed_toml_reports_path() {
    let file = write_config("[session\nmax_extra = 3");
    let err = load_config(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config file"));
}

#[test]
fn missing_file_is_an_error() {
    let err = load_config(std::path::Path::new("/nonexistent/clipstitch.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
