//! Read-only views over caller-owned bytes.
//!
//! A [`Region`] is what the dumper renders: a base address used for display
//! and a byte slice. The logical length may be shorter than the slice; the
//! remainder is slack the caller vouches for, which the `padded` tail policy
//! is allowed to show.

use crate::error::{Error, Result};

/// An immutable view of `len` bytes starting at `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region<'a> {
    base: u64,
    backing: &'a [u8],
    len: usize,
}

impl<'a> Region<'a> {
    /// Create a region covering exactly `bytes`, displayed from `base`.
    pub fn new(base: u64, bytes: &'a [u8]) -> Self {
        Self {
            base,
            backing: bytes,
            len: bytes.len(),
        }
    }

    /// Create a region whose logical length is `len`, backed by `backing`.
    ///
    /// Bytes in `backing[len..]` are slack: readable, but outside the region.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if `len` exceeds the backing slice.
    pub fn with_slack(base: u64, backing: &'a [u8], len: usize) -> Result<Self> {
        if len > backing.len() {
            return Err(Error::RegionOutOfBounds {
                len,
                available: backing.len(),
            });
        }
        Ok(Self { base, backing, len })
    }

    /// Create a region displayed at the slice's own address in this process.
    pub fn of_slice(bytes: &'a [u8]) -> Self {
        Self::new(bytes.as_ptr() as usize as u64, bytes)
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    /// Logical length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bytes inside the logical length.
    pub fn bytes(&self) -> &'a [u8] {
        &self.backing[..self.len]
    }

    /// Number of readable bytes past the logical end.
    pub fn slack(&self) -> usize {
        self.backing.len() - self.len
    }

    /// Byte at `offset` from the base, including slack.
    pub(crate) fn byte_with_slack(&self, offset: usize) -> Option<u8> {
        self.backing.get(offset).copied()
    }

    /// Byte at `offset` from the base, inside the logical length only.
    pub(crate) fn byte(&self, offset: usize) -> Option<u8> {
        if offset < self.len {
            Some(self.backing[offset])
        } else {
            None
        }
    }
}
