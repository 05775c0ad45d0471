use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::config::layout::{BYTES_PER_LINE, PLACEHOLDER, POINTER_WIDTH, PRINTABLE};

/// How the final line treats positions past the region's logical end.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TailPolicy {
    /// Never look past the end; missing positions render as placeholders.
    #[default]
    Clamp,
    /// Fill the line from the region's slack where the caller provided it.
    Padded,
}

/// Render a byte in the ASCII column.
pub fn to_ascii(byte: u8) -> char {
    if PRINTABLE.contains(&byte) {
        byte as char
    } else {
        PLACEHOLDER
    }
}

/// One 16-byte line of a dump.
///
/// `None` marks a position that was not read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpLine {
    pub address: u64,
    pub bytes: [Option<u8>; BYTES_PER_LINE],
    /// Positions inside the region's logical length.
    pub meaningful: usize,
}

impl DumpLine {
    /// Hex column: 16 groups separated by single spaces.
    pub fn hex(&self) -> String {
        self.bytes
            .iter()
            .map(|b| match b {
                Some(b) => format!("{:02x}", b),
                None => PLACEHOLDER.to_string().repeat(2),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// ASCII column: 16 characters.
    pub fn ascii(&self) -> String {
        self.bytes
            .iter()
            .map(|b| b.map_or(PLACEHOLDER, to_ascii))
            .collect()
    }

    /// Bytes that were read, in order, stopping at the first gap.
    pub fn read_bytes(&self) -> Vec<u8> {
        self.bytes.iter().map_while(|b| *b).collect()
    }

    /// Full line with the address zero-padded to `address_width` hex digits.
    pub fn render(&self, address_width: usize) -> String {
        format!(
            "{:0width$x}  {}  {}",
            self.address,
            self.hex(),
            self.ascii(),
            width = address_width
        )
    }
}

impl fmt::Display for DumpLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(POINTER_WIDTH))
    }
}
