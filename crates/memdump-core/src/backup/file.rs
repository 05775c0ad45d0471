use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use strum::{Display, IntoStaticStr};
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum OpenMode {
    #[strum(serialize = "reading")]
    Read,
    #[strum(serialize = "writing")]
    Write,
}

/// An open file that logs when it is acquired and released
#[derive(Debug)]
pub struct TracedFile {
    file: File,
    path: PathBuf,
    mode: OpenMode,
}

impl TracedFile {
    /// Open an existing file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        Self::acquire(path, OpenMode::Read, File::open(path))
    }

    /// Create or truncate a file for writing.
    pub fn create(path: &Path) -> Result<Self> {
        Self::acquire(path, OpenMode::Write, File::create(path))
    }

    fn acquire(path: &Path, mode: OpenMode, opened: io::Result<File>) -> Result<Self> {
        let file = opened.map_err(|source| Error::OpenFailed {
            path: path.to_path_buf(),
            mode,
            source,
        })?;
        debug!("Opened {:?} for {}", path, mode);
        Ok(Self {
            file,
            path: path.to_path_buf(),
            mode,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> OpenMode {
        self.mode
    }
}

impl Drop for TracedFile {
    fn drop(&mut self) {
        debug!("Closed {:?}", self.path);
    }
}

impl Read for TracedFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for TracedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        match TracedFile::open(&path) {
            Err(Error::OpenFailed { path: p, mode, .. }) => {
                assert_eq!(p, path);
                assert_eq!(mode, OpenMode::Read);
            }
            other => panic!("Expected OpenFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_create_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("file.txt");

        {
            let mut out = TracedFile::create(&path).unwrap();
            assert_eq!(out.mode(), OpenMode::Write);
            out.write_all(b"abc").unwrap();
        }

        let mut input = TracedFile::open(&path).unwrap();
        let mut content = String::new();
        input.read_to_string(&mut content).unwrap();
        assert_eq!(content, "abc");
        assert_eq!(input.path(), path.as_path());
        assert_eq!(fs::read_to_string(&path).unwrap(), "abc");
    }

    #[test]
    fn test_open_failed_message() {
        let temp_dir = TempDir::new().unwrap();
        let err = TracedFile::create(&temp_dir.path().join("no/such/dir.txt")).unwrap_err();
        assert!(err.to_string().contains("for writing"));
    }
}
