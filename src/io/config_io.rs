use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::config::BoardConfig;

/// File name looked up when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "aac.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load a config file. A missing file yields the default config.
pub fn read_config(path: &Path) -> Result<BoardConfig, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(BoardConfig::default());
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolve the board path named by a config, relative to the config file's
/// directory.
pub fn configured_board_path(config_path: &Path, config: &BoardConfig) -> Option<PathBuf> {
    let file = config.board.file.as_ref()?;
    let base = config_path.parent().unwrap_or(Path::new(""));
    Some(base.join(file))
}
