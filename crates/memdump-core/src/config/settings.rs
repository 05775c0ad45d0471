use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::layout::POINTER_WIDTH;
use crate::dump::{DumpOptions, TailPolicy};
use crate::error::Result;

/// Settings for dumping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpConfig {
    pub tail: TailPolicy,
    pub address_width: usize,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            tail: TailPolicy::default(),
            address_width: POINTER_WIDTH,
        }
    }
}

/// Settings for the line copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub progress: bool,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("readme.txt"),
            output: PathBuf::from("backup.txt"),
            progress: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dump: DumpConfig,
    pub backup: BackupConfig,
}

impl Config {
    /// Load config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load config, falling back to defaults when the file is missing or invalid
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Failed to load config {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    pub fn dump_options(&self) -> DumpOptions {
        DumpOptions {
            tail: self.dump.tail,
            address_width: self.dump.address_width,
        }
    }
}
