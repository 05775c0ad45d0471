//! Person records laid out as short-string structures.
//!
//! A string field is 32 bytes: a data pointer, a length and a 16-byte inline
//! buffer. For inline strings the pointer refers to the field's own buffer,
//! so dumping an array of persons shows pointers, lengths and the text side
//! by side.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::record::{BUFFER_OFFSET, BUFFER_SIZE, LENGTH_OFFSET, PERSON_SIZE, STRING_SIZE};
use crate::error::{Error, Result};
use crate::memory::{ImageBuilder, MemoryImage, ReadMemory};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// The two persons of the classic layout demonstration
    pub fn pioneers() -> Vec<Person> {
        vec![
            Person::new("Bjarne", "Stroustrup"),
            Person::new("James", "Gosling"),
        ]
    }
}

/// Lays out and reads back arrays of [`Person`] at a base address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    base: u64,
}

impl RecordLayout {
    pub fn new(base: u64) -> Self {
        Self { base }
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    /// Size in bytes of an array of `count` persons
    pub fn array_size(count: usize) -> usize {
        count * PERSON_SIZE
    }

    /// Build the memory image of `people`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StringTooLong`] for a name that does not fit the
    /// inline buffer.
    pub fn build(&self, people: &[Person]) -> Result<MemoryImage> {
        let mut builder = ImageBuilder::new(self.base, Self::array_size(people.len()));

        for (i, person) in people.iter().enumerate() {
            let offset = i * PERSON_SIZE;
            builder = write_string(builder, offset, &person.first_name)?;
            builder = write_string(builder, offset + STRING_SIZE, &person.last_name)?;
        }

        debug!(
            "Laid out {} persons at {:#x} ({} bytes)",
            people.len(),
            self.base,
            Self::array_size(people.len())
        );
        Ok(builder.build())
    }

    /// Read `count` persons back from `reader`.
    pub fn read<R: ReadMemory>(&self, reader: &R, count: usize) -> Result<Vec<Person>> {
        (0..count)
            .map(|i| -> Result<Person> {
                let address = self.base + (i * PERSON_SIZE) as u64;
                Ok(Person {
                    first_name: read_string(reader, address)?,
                    last_name: read_string(reader, address + STRING_SIZE as u64)?,
                })
            })
            .collect()
    }
}

fn write_string(builder: ImageBuilder, offset: usize, value: &str) -> Result<ImageBuilder> {
    builder
        .pointer(offset, offset + BUFFER_OFFSET)
        .word(offset + LENGTH_OFFSET, value.len() as u64)
        .inline_str(offset + BUFFER_OFFSET, value, BUFFER_SIZE)
}

fn read_string<R: ReadMemory>(reader: &R, address: u64) -> Result<String> {
    let data = reader.read_u64(address)?;
    let len = reader.read_u64(address + LENGTH_OFFSET as u64)? as usize;
    if len >= BUFFER_SIZE {
        return Err(Error::MemoryReadFailed {
            address,
            message: format!("String length {} exceeds inline buffer", len),
        });
    }
    let bytes = reader.read_bytes(data, len)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
