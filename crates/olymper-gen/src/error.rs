use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("cannot write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write to stdout: {0}")]
    Stdout(#[source] io::Error),

    #[error("invalid config '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigSource,
    },

    #[error("unknown output mode {0}: expected 0 (files), 1 (framed stdout) or 2 (single)")]
    InvalidMode(u8),
}

/// Why a config file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigSource {
    #[error(transparent)]
    Read(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
