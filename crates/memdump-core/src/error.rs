use std::path::PathBuf;

use thiserror::Error;

use crate::backup::OpenMode;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to open {path:?} for {mode}: {source}")]
    OpenFailed {
        path: PathBuf,
        mode: OpenMode,
        #[source]
        source: std::io::Error,
    },

    #[error("Region length {len} exceeds backing storage of {available} bytes")]
    RegionOutOfBounds { len: usize, available: usize },

    #[error("Failed to read memory at address {address:#x}: {message}")]
    MemoryReadFailed { address: u64, message: String },

    #[error("String {value:?} does not fit an inline buffer of {max} bytes")]
    StringTooLong { value: String, max: usize },

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.message().to_string())
    }
}
