//! Configuration and layout constants.
//!
//! - `Config` - user settings loaded from a TOML file
//! - `layout` - fixed properties of the dump format

mod settings;

pub use settings::*;

/// Fixed properties of the dump format.
pub mod layout {
    use std::ops::RangeInclusive;

    /// Bytes rendered per line.
    pub const BYTES_PER_LINE: usize = 16;

    /// Stand-in for bytes outside the printable range, and for unread bytes.
    pub const PLACEHOLDER: char = '.';

    /// Byte values shown as themselves in the ASCII column.
    pub const PRINTABLE: RangeInclusive<u8> = 0x20..=0x7E;

    /// Hex digits of a native pointer.
    pub const POINTER_WIDTH: usize = 2 * std::mem::size_of::<usize>();
}

/// Short-string record layout used by the person records.
///
/// Each string is a data pointer, a length and an inline buffer.
pub mod record {
    /// Size of one string field.
    pub const STRING_SIZE: usize = 32;

    /// Offset of the length word within a string field.
    pub const LENGTH_OFFSET: usize = 8;

    /// Offset of the inline buffer within a string field.
    pub const BUFFER_OFFSET: usize = 16;

    /// Inline buffer size, including the NUL terminator.
    pub const BUFFER_SIZE: usize = 16;

    /// Size of one person (two string fields).
    pub const PERSON_SIZE: usize = 2 * STRING_SIZE;
}
