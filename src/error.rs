use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the bridge before the fork point.
///
/// Anything that goes wrong after the fork, inside the detached child, is
/// invisible to the host by construction and never reaches this type.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The host closed our stdin. Normal shutdown, not a failure.
    #[error("host closed the channel")]
    Disconnected,

    /// The length prefix claims a payload larger than we accept.
    #[error("incoming message of {size} bytes exceeds the {max} byte limit")]
    Oversized { size: usize, max: usize },

    /// Neither `XDG_DATA_HOME` nor `HOME` is set, so the config file cannot
    /// be located.
    #[error("neither XDG_DATA_HOME nor HOME environment variables are set")]
    DataDirUnset,

    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not the JSON shape we expect.
    #[error("invalid config JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
