//! Line-by-line file copy
//!
//! Both files are held by scoped guards: the input is opened first, the
//! output second, and they are released in reverse order on every path out
//! of [`backup`], including a failed open of the output.

mod copy;
mod file;
mod progress;

pub use copy::{backup, copy_lines, CopyStats};
pub use file::{OpenMode, TracedFile};
pub use progress::{CopyProgress, DotProgress, NoProgress};
