use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::client::DEFAULT_API_URL;

/// Settings for running the extension outside a host (the `comick` CLI).
///
/// Read from `<config dir>/comick/config.toml` or an explicit path; every key
/// is optional. `COMICK_API_URL` and `COMICK_TIMEOUT_MS` override the file.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ComickConfig {
    pub api_url: String,
    pub user_agent: String,
    pub timeout_ms: u64,
}

impl Default for ComickConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: concat!("comick-extension/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_ms: 15_000,
        }
    }
}

impl ComickConfig {
    /// Load from `path` when given (it must exist), otherwise from the default
    /// location if present, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => Self::from_file(p)?,
            None => match default_config_path() {
                Some(p) if p.exists() => Self::from_file(&p)?,
                _ => Self::default(),
            },
        };
        cfg.apply_overrides(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("COMICK_API_URL").filter(|s| !s.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        if let Some(ms) = lookup("COMICK_TIMEOUT_MS").and_then(|s| s.trim().parse().ok()) {
            self.timeout_ms = ms;
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "comick").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "timeout_ms = 2500\n").unwrap();
        let cfg = ComickConfig::from_file(&path).unwrap();
        assert_eq!(cfg.timeout_ms, 2500);
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(ComickConfig::load(Some(&tmp.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "timeout_ms = \"soon\"").unwrap();
        assert!(ComickConfig::from_file(&path).is_err());
    }

    #[test]
    fn environment_overrides_file_values() {
        let mut cfg = ComickConfig::default();
        cfg.apply_overrides(|key| match key {
            "COMICK_API_URL" => Some(" http://localhost:9000 ".into()),
            "COMICK_TIMEOUT_MS" => Some("not-a-number".into()),
            _ => None,
        });
        assert_eq!(cfg.api_url, "http://localhost:9000");
        assert_eq!(cfg.timeout_ms, 15_000);
    }
}
