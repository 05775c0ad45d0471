use tracing::debug;

use crate::error::Result;
use crate::region::Region;

/// Trait for reading bytes from an addressable memory source
///
/// The dumper and the record layouts read through this trait, so they work
/// the same against any source that can hand out bytes by address.
pub trait ReadMemory {
    /// Read raw bytes from memory at the given address
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>>;

    /// Read an unsigned 64-bit little-endian word
    fn read_u64(&self, address: u64) -> Result<u64> {
        let bytes = self.read_bytes(address, 8)?;
        Ok(u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    /// Copy `len` bytes at `address`, plus up to `slack` trailing bytes.
    ///
    /// The slack is all-or-nothing: if the source cannot supply all of it,
    /// or it would lie past the end of the address space, the snapshot
    /// carries none.
    fn snapshot(&self, address: u64, len: usize, slack: usize) -> Result<Snapshot> {
        let mut data = self.read_bytes(address, len)?;
        if slack > 0 {
            match address.checked_add(len as u64) {
                Some(tail) => match self.read_bytes(tail, slack) {
                    Ok(bytes) => data.extend_from_slice(&bytes),
                    Err(e) => debug!("Slack read at {:#x} failed: {}", tail, e),
                },
                None => debug!("No slack past {:#x}: end of address space", address),
            }
        }
        Ok(Snapshot {
            address,
            data,
            len,
        })
    }
}

/// Owned copy of a memory range, borrowed as a [`Region`] for dumping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    address: u64,
    data: Vec<u8>,
    len: usize,
}

impl Snapshot {
    pub fn address(&self) -> u64 {
        self.address
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn region(&self) -> Region<'_> {
        // data.len() >= len by construction
        Region::with_slack(self.address, &self.data, self.len)
            .unwrap_or_else(|_| Region::new(self.address, &self.data))
    }
}
