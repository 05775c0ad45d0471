use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::config::layout::{BYTES_PER_LINE, POINTER_WIDTH};
use crate::dump::line::{DumpLine, TailPolicy};
use crate::error::Result;
use crate::memory::ReadMemory;
use crate::region::Region;

/// Rendering options for a dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpOptions {
    pub tail: TailPolicy,
    /// Hex digits in the address column
    pub address_width: usize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            tail: TailPolicy::default(),
            address_width: POINTER_WIDTH,
        }
    }
}

impl DumpOptions {
    pub fn with_tail(mut self, tail: TailPolicy) -> Self {
        self.tail = tail;
        self
    }

    pub fn with_address_width(mut self, address_width: usize) -> Self {
        self.address_width = address_width;
        self
    }

    /// Bytes to read past a `len`-byte range so the last line can be filled.
    pub fn slack_for(&self, len: usize) -> usize {
        match self.tail {
            TailPolicy::Clamp => 0,
            TailPolicy::Padded => padded_len(len) - len,
        }
    }
}

/// `len` rounded up to a whole number of lines.
pub fn padded_len(len: usize) -> usize {
    len.div_ceil(BYTES_PER_LINE) * BYTES_PER_LINE
}

/// Number of lines a region of `len` bytes renders as.
pub fn line_count(len: usize) -> usize {
    len.div_ceil(BYTES_PER_LINE)
}

/// Iterator over the lines of a region, in address order
#[derive(Debug, Clone)]
pub struct DumpLines<'a> {
    region: Region<'a>,
    tail: TailPolicy,
    offset: usize,
    end: usize,
}

/// Iterate over the lines of `region`.
pub fn lines<'a>(region: &Region<'a>, tail: TailPolicy) -> DumpLines<'a> {
    DumpLines {
        region: *region,
        tail,
        offset: 0,
        end: padded_len(region.len()),
    }
}

impl Iterator for DumpLines<'_> {
    type Item = DumpLine;

    fn next(&mut self) -> Option<DumpLine> {
        if self.offset >= self.end {
            return None;
        }

        let mut bytes = [None; BYTES_PER_LINE];
        for (i, slot) in bytes.iter_mut().enumerate() {
            let pos = self.offset + i;
            *slot = match self.tail {
                TailPolicy::Clamp => self.region.byte(pos),
                TailPolicy::Padded => self.region.byte_with_slack(pos),
            };
        }

        let line = DumpLine {
            address: self.region.base().wrapping_add(self.offset as u64),
            bytes,
            meaningful: (self.region.len() - self.offset).min(BYTES_PER_LINE),
        };
        self.offset += BYTES_PER_LINE;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.offset) / BYTES_PER_LINE;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DumpLines<'_> {}

/// Write the dump of `region` to `sink`, one line per 16 bytes.
///
/// # Errors
///
/// Only the sink's own write errors are returned.
pub fn dump<W: Write>(region: &Region<'_>, sink: &mut W, options: &DumpOptions) -> Result<()> {
    debug!(
        "Dumping {} bytes at {:#x} ({} lines, tail={})",
        region.len(),
        region.base(),
        line_count(region.len()),
        options.tail
    );
    for line in lines(region, options.tail) {
        writeln!(sink, "{}", line.render(options.address_width))?;
    }
    Ok(())
}

/// Render the dump of `region` as a list of lines without terminators.
pub fn format_lines(region: &Region<'_>, options: &DumpOptions) -> Vec<String> {
    lines(region, options.tail)
        .map(|line| line.render(options.address_width))
        .collect()
}

/// Rendered dump of a memory range
#[derive(Debug, Clone, Serialize)]
pub struct MemoryDump {
    pub address: u64,
    pub size: usize,
    pub tail: TailPolicy,
    pub hex_dump: Vec<String>,
}

impl MemoryDump {
    pub fn from_region(region: &Region<'_>, options: &DumpOptions) -> Self {
        Self {
            address: region.base(),
            size: region.len(),
            tail: options.tail,
            hex_dump: format_lines(region, options),
        }
    }
}

/// Read `size` bytes at `address` and render them.
///
/// Under [`TailPolicy::Padded`] the bytes completing the last line are read
/// too, when the source has them.
pub fn dump_memory<R: ReadMemory>(
    reader: &R,
    address: u64,
    size: usize,
    options: &DumpOptions,
) -> Result<MemoryDump> {
    let snapshot = reader.snapshot(address, size, options.slack_for(size))?;
    Ok(MemoryDump::from_region(&snapshot.region(), options))
}
