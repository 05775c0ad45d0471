//! Hex dump rendering
//!
//! Every line covers 16 bytes and reads
//! `<address>  <b0> <b1> ... <b15>  <ascii>`, with `.` standing in for bytes
//! outside the printable ASCII range. A region of `n` bytes always renders
//! as `ceil(n / 16)` lines; how the positions past the end of the last
//! partial line are shown is chosen by [`TailPolicy`].

mod format;
mod line;

pub use format::{
    dump, dump_memory, format_lines, line_count, lines, padded_len, DumpLines, DumpOptions,
    MemoryDump,
};
pub use line::{to_ascii, DumpLine, TailPolicy};
