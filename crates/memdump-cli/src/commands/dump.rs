//! Dump command implementation.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use memdump_core::config::layout::{PLACEHOLDER, PRINTABLE};
use memdump_core::{dump, lines, DumpLine, DumpOptions, MemoryDump, MemoryImage, ReadMemory};
use owo_colors::OwoColorize;
use tracing::info;

/// Run the dump command
pub fn run(
    file: &Path,
    offset: usize,
    size: Option<usize>,
    base: u64,
    options: &DumpOptions,
    json: bool,
    color: bool,
) -> Result<()> {
    let data = fs::read(file).with_context(|| format!("Failed to read {:?}", file))?;
    let (start, size) = window(base, offset, size, data.len())
        .with_context(|| format!("Invalid range for {:?}", file))?;

    info!("Dumping {} bytes of {:?} from offset {}", size, file, offset);

    // Bytes of the file after the window are the slack for padded tails
    let memory = MemoryImage::new(base, data);
    let snapshot = memory.snapshot(start, size, options.slack_for(size))?;
    let region = snapshot.region();

    if json {
        let dump = MemoryDump::from_region(&region, options);
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else if color {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in lines(&region, options.tail) {
            writeln!(out, "{}", render_colored(&line, options.address_width))?;
        }
    } else {
        let stdout = io::stdout();
        dump(&region, &mut stdout.lock(), options)?;
    }

    Ok(())
}

/// Address of the first dumped byte and the number of bytes to dump.
///
/// `size` defaults to the rest of the file.
fn window(base: u64, offset: usize, size: Option<usize>, file_len: usize) -> Result<(u64, usize)> {
    if offset > file_len {
        bail!("Offset {} is past the end of the file ({} bytes)", offset, file_len);
    }
    let size = size.unwrap_or(file_len - offset);
    match offset.checked_add(size) {
        Some(end) if end <= file_len => {}
        _ => bail!(
            "{} bytes from offset {} run past the end of the file ({} bytes)",
            size,
            offset,
            file_len
        ),
    }
    let Some(start) = base.checked_add(offset as u64) else {
        bail!("Offset {} from base {:#x} overflows the address space", offset, base);
    };
    Ok((start, size))
}

/// Render a line with the address dimmed and printable bytes highlighted.
fn render_colored(line: &DumpLine, address_width: usize) -> String {
    let address = format!("{:0width$x}", line.address, width = address_width);
    let ascii: String = line
        .bytes
        .iter()
        .map(|b| match b {
            Some(byte) if PRINTABLE.contains(byte) => (*byte as char).green().to_string(),
            _ => PLACEHOLDER.dimmed().to_string(),
        })
        .collect();
    format!("{}  {}  {}", address.dimmed(), line.hex(), ascii)
}
