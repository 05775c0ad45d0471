//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod backup;
pub mod dump;
pub mod hex_utils;
pub mod records;
