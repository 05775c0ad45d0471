use std::io::{self, Write};

/// Receives progress notifications from a line copy
pub trait CopyProgress {
    /// Called after each copied line
    fn line(&mut self);

    /// Called once after the last line
    fn done(&mut self);
}

/// Prints a dot per line and `done!` at the end
#[derive(Debug)]
pub struct DotProgress<W: Write> {
    out: W,
}

impl<W: Write> DotProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl DotProgress<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

// Write errors on the progress stream are ignored.
impl<W: Write> CopyProgress for DotProgress<W> {
    fn line(&mut self) {
        let _ = self.out.write_all(b".");
        let _ = self.out.flush();
    }

    fn done(&mut self) {
        let _ = self.out.write_all(b"done!\n");
        let _ = self.out.flush();
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl CopyProgress for NoProgress {
    fn line(&mut self) {}

    fn done(&mut self) {}
}
