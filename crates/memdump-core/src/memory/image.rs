//! Memory images
//!
//! A `MemoryImage` is a byte buffer mapped at a base address and read the
//! way a process address space would be. `ImageBuilder` assembles one from
//! the fields a record is made of: pointers, words and inline text.

use std::ops::Range;

use crate::error::{Error, Result};
use crate::memory::ReadMemory;
use crate::region::Region;

/// Bytes mapped at `base`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryImage {
    base: u64,
    bytes: Vec<u8>,
}

impl MemoryImage {
    pub fn new(base: u64, bytes: Vec<u8>) -> Self {
        Self { base, bytes }
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The whole image as a region without slack.
    pub fn region(&self) -> Region<'_> {
        Region::new(self.base, &self.bytes)
    }

    /// Buffer range holding `size` bytes at `address`, if all are mapped.
    fn locate(&self, address: u64, size: usize) -> Option<Range<usize>> {
        let start = usize::try_from(address.checked_sub(self.base)?).ok()?;
        let end = start.checked_add(size)?;
        (end <= self.bytes.len()).then_some(start..end)
    }
}

impl ReadMemory for MemoryImage {
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        let range = self
            .locate(address, size)
            .ok_or_else(|| Error::MemoryReadFailed {
                address,
                message: format!(
                    "{} bytes not mapped by the {}-byte image at {:#x}",
                    size,
                    self.bytes.len(),
                    self.base
                ),
            })?;
        Ok(self.bytes[range].to_vec())
    }
}

/// Assembles a [`MemoryImage`] field by field.
///
/// Offsets are relative to the base; the image grows with zeros when a field
/// is written past its end.
#[derive(Debug, Clone, Default)]
pub struct ImageBuilder {
    base: u64,
    bytes: Vec<u8>,
}

impl ImageBuilder {
    /// Start a zero-filled image of `size` bytes mapped at `base`.
    pub fn new(base: u64, size: usize) -> Self {
        Self {
            base,
            bytes: vec![0; size],
        }
    }

    /// Absolute address of `offset`, wrapping like region addresses do.
    pub fn address_of(&self, offset: usize) -> u64 {
        self.base.wrapping_add(offset as u64)
    }

    /// Store a little-endian 64-bit word.
    pub fn word(mut self, offset: usize, value: u64) -> Self {
        self.fill(offset, &value.to_le_bytes());
        self
    }

    /// Store the absolute address of `target` as a word at `offset`.
    pub fn pointer(self, offset: usize, target: usize) -> Self {
        let address = self.address_of(target);
        self.word(offset, address)
    }

    /// Store raw bytes.
    pub fn bytes(mut self, offset: usize, data: &[u8]) -> Self {
        self.fill(offset, data);
        self
    }

    /// Store `text` NUL-terminated in an inline buffer of `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StringTooLong`] when `text` and its terminator do not
    /// fit.
    pub fn inline_str(mut self, offset: usize, text: &str, capacity: usize) -> Result<Self> {
        if text.len() >= capacity {
            return Err(Error::StringTooLong {
                value: text.to_string(),
                max: capacity.saturating_sub(1),
            });
        }
        self.fill(offset, text.as_bytes());
        self.fill(offset + text.len(), &[0]);
        Ok(self)
    }

    pub fn build(self) -> MemoryImage {
        MemoryImage {
            base: self.base,
            bytes: self.bytes,
        }
    }

    fn fill(&mut self, offset: usize, data: &[u8]) {
        let end = offset + data.len();
        if self.bytes.len() < end {
            self.bytes.resize(end, 0);
        }
        self.bytes[offset..end].copy_from_slice(data);
    }
}
