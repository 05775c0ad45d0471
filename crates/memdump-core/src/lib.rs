pub mod backup;
pub mod config;
pub mod dump;
pub mod error;
pub mod memory;
pub mod record;
pub mod region;

pub use backup::{
    backup, copy_lines, CopyProgress, CopyStats, DotProgress, NoProgress, OpenMode, TracedFile,
};
pub use config::Config;
pub use dump::{
    dump, dump_memory, format_lines, line_count, lines, padded_len, to_ascii, DumpLine, DumpLines,
    DumpOptions, MemoryDump, TailPolicy,
};
pub use error::{Error, Result};
pub use memory::{ImageBuilder, MemoryImage, ReadMemory, Snapshot};
pub use record::{Person, RecordLayout};
pub use region::Region;
