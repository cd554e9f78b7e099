use std::path::{Path, PathBuf};

use crate::error::HovertipError;

use super::types::Config;

const CONFIG_DIR: &str = "hovertip";
const CONFIG_FILE: &str = "config.toml";

/// Default config file path: `~/.config/hovertip/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from the given path, or the default location.
///
/// A missing file at the default location yields the default config. An
/// explicitly given path must exist, and a malformed file is always an
/// error.
pub fn load_config(path: Option<&Path>) -> Result<Config, HovertipError> {
    match path {
        Some(path) => read_config(path),
        None => match config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<Config, HovertipError> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| HovertipError::InvalidConfig(path.display().to_string(), e.to_string()))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
