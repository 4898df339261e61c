use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fintrack_core::{CURRENCY_SUFFIX, DEFAULT_DATA_DIR};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StorageSection {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_file: Option<String>,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_file: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

fn default_data_dir() -> String {
    DEFAULT_DATA_DIR.to_string()
}

fn default_currency() -> String {
    CURRENCY_SUFFIX.to_string()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<TrackerConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config at `path`, falling back to defaults when the file does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<TrackerConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(TrackerConfig::default());
    }
    read_config(path)
}

pub fn render_config(config: &TrackerConfig) -> anyhow::Result<String> {
    toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("fintrack"));
        }
    }
    Ok(home_dir()?.join(".config").join("fintrack"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
