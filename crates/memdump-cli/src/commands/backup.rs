//! Backup command implementation.

use std::path::Path;

use anyhow::Result;
use memdump_core::{backup, DotProgress, NoProgress};
use tracing::debug;

/// Run the backup command
pub fn run(input: &Path, output: &Path, progress: bool) -> Result<()> {
    let stats = if progress {
        backup(input, output, &mut DotProgress::stdout())?
    } else {
        backup(input, output, &mut NoProgress)?
    };
    debug!("Backup finished: {} lines, {} bytes", stats.lines, stats.bytes);
    Ok(())
}
