//! Common CLI utility functions shared across commands.

use std::path::Path;

use memdump_core::Config;

/// Load the config file if one was given, otherwise use defaults.
pub fn load_config(path: Option<&Path>) -> Config {
    match path {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    }
}
