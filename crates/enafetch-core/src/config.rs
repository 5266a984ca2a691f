use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::{FetchOptions, DEFAULT_CHUNK_SIZE};
use crate::location::DEFAULT_SCHEME;
use crate::table::{ColumnSelector, DEFAULT_LOCATION_COLUMN};

/// Global configuration loaded from `~/.config/enafetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnafetchConfig {
    /// 0-based column holding the locations.
    pub location_column: usize,
    /// Header name to look the location column up by; takes precedence over
    /// `location_column` when set.
    pub location_header: Option<String>,
    /// Scheme prepended to every location.
    pub scheme: String,
    /// Receive buffer size in bytes.
    pub chunk_size: usize,
    /// Download directory (None = current working directory).
    pub output_dir: Option<PathBuf>,
    /// Connect timeout in seconds (None = no timeout).
    pub connect_timeout_secs: Option<u64>,
}

impl Default for EnafetchConfig {
    fn default() -> Self {
        Self {
            location_column: DEFAULT_LOCATION_COLUMN,
            location_header: None,
            scheme: DEFAULT_SCHEME.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            output_dir: None,
            connect_timeout_secs: None,
        }
    }
}

impl EnafetchConfig {
    pub fn column_selector(&self) -> ColumnSelector {
        match &self.location_header {
            Some(name) => ColumnSelector::Header(name.clone()),
            None => ColumnSelector::Index(self.location_column),
        }
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            scheme: self.scheme.clone(),
            chunk_size: self.chunk_size,
            output_dir: self
                .output_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(".")),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("enafetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<EnafetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = EnafetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: EnafetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
