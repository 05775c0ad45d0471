//! Byte sources addressed by absolute address.

mod image;
mod reader;

pub use image::{ImageBuilder, MemoryImage};
pub use reader::{ReadMemory, Snapshot};
