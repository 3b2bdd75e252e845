mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Accepted range for `session.max_extra` and `session.neighbor_range`.
const SESSION_RANGE: std::ops::RangeInclusive<usize> = 1..=10;

/// Accepted range for `session.transcript_window_secs`.
const TRANSCRIPT_WINDOW_RANGE: std::ops::RangeInclusive<u32> = 1..=300;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./config.toml",
        "./clipstitch.toml",
        "~/.config/clipstitch/config.toml",
        "/etc/clipstitch/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Loading config from {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let base_url = config.api.base_url.trim();
    if base_url.is_empty() {
        anyhow::bail!("api.base_url cannot be empty");
    }
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        anyhow::bail!("api.base_url must start with http:// or https://: {}", base_url);
    }
    if config.api.timeout_secs == 0 {
        anyhow::bail!("api.timeout_secs cannot be 0");
    }

    let session = &config.session;
    if !SESSION_RANGE.contains(&session.max_extra) {
        anyhow::bail!(
            "session.max_extra must be between 1 and 10, got {}",
            session.max_extra
        );
    }
    if !SESSION_RANGE.contains(&usize::from(session.neighbor_range)) {
        anyhow::bail!(
            "session.neighbor_range must be between 1 and 10, got {}",
            session.neighbor_range
        );
    }
    if !TRANSCRIPT_WINDOW_RANGE.contains(&session.transcript_window_secs) {
        anyhow::bail!(
            "session.transcript_window_secs must be between 1 and 300, got {}",
            session.transcript_window_secs
        );
    }

    // The catalog never returns more than neighbor_range siblings per side.
    if session.max_extra > usize::from(session.neighbor_range) {
        tracing::warn!(
            "session.max_extra ({}) exceeds session.neighbor_range ({}); expansion will stop early",
            session.max_extra,
            session.neighbor_range
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.api.base_url, "http://127.0.0.1:8001");
        assert_eq!(config.session.max_extra, 3);
        assert_eq!(config.session.transcript_window_secs, 90);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[session]\nmax_extra = 5\n").unwrap();
        assert_eq!(config.session.max_extra, 5);
        assert_eq!(config.session.neighbor_range, 3);
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let mut config = Config::default();
        config.session.max_extra = 0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.session.transcript_window_secs = 301;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.api.base_url = "ftp://example".into();
        assert!(validate_config(&config).is_err());
    }
}
