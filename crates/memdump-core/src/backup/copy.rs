use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::backup::file::TracedFile;
use crate::backup::progress::CopyProgress;
use crate::error::Result;

/// Totals for a finished copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CopyStats {
    pub lines: u64,
    /// Bytes written, line terminators included
    pub bytes: u64,
}

/// Copy `reader` to `writer` line by line until end of input.
///
/// Every line is written with a `\n` terminator; a trailing `\r` before it
/// is dropped. `progress` sees one `line()` per line and a final `done()`.
/// On success `writer` is dropped before `reader`.
pub fn copy_lines<R, W, P>(mut reader: R, mut writer: W, progress: &mut P) -> Result<CopyStats>
where
    R: BufRead,
    W: Write,
    P: CopyProgress + ?Sized,
{
    let mut stats = CopyStats::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }

        writer.write_all(&line)?;
        writer.write_all(b"\n")?;
        stats.lines += 1;
        stats.bytes += line.len() as u64 + 1;
        progress.line();
    }

    writer.flush()?;
    // Release the output before the input
    drop(writer);
    drop(reader);
    progress.done();
    Ok(stats)
}

/// Copy the text file at `input` to `output`, replacing `output`.
///
/// # Errors
///
/// [`Error::OpenFailed`](crate::Error::OpenFailed) when either file cannot be
/// opened; I/O errors during the copy are propagated.
pub fn backup<P>(input: &Path, output: &Path, progress: &mut P) -> Result<CopyStats>
where
    P: CopyProgress + ?Sized,
{
    let source = TracedFile::open(input)?;
    let target = TracedFile::create(output)?;
    debug!("Copying {:?} -> {:?}", source.path(), target.path());

    let stats = copy_lines(BufReader::new(source), BufWriter::new(target), progress)?;
    info!(
        "Copied {} lines ({} bytes) from {:?} to {:?}",
        stats.lines, stats.bytes, input, output
    );
    Ok(stats)
}
