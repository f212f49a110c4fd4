//! Loads the bridge configuration from the user's XDG data directory.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::BridgeError;

/// Config file location, relative to the XDG data directory.
pub const CONFIG_FILE_LOCATION: &str = "dualview/bridge.json";

/// Bridge configuration, loaded once per run and immutable afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory the detached child switches to before exec.
    #[serde(rename = "workDir")]
    pub work_dir: PathBuf,

    /// Absolute path of the DualView executable to launch.
    #[serde(rename = "dualviewExecutable")]
    pub dualview_executable: PathBuf,

    /// Enables the diagnostic file log. Off unless the config says otherwise.
    #[serde(default)]
    pub logging: bool,
}

/// Resolve the config file path: `$XDG_DATA_HOME/dualview/bridge.json`,
/// falling back to `$HOME/.local/share/dualview/bridge.json`.
pub fn config_path() -> Result<PathBuf, BridgeError> {
    if let Some(xdg) = env::var_os("XDG_DATA_HOME") {
        return Ok(PathBuf::from(xdg).join(CONFIG_FILE_LOCATION));
    }
    if let Some(home) = env::var_os("HOME") {
        return Ok(PathBuf::from(home)
            .join(".local/share")
            .join(CONFIG_FILE_LOCATION));
    }
    Err(BridgeError::DataDirUnset)
}

impl Config {
    /// Load from the env-resolved location (see [`config_path`]).
    pub fn load() -> Result<Self, BridgeError> {
        Self::load_from(&config_path()?)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, BridgeError> {
        let text = fs::read_to_string(path).map_err(|source| BridgeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}
