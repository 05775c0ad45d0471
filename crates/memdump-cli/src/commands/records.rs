//! Records command implementation.

use std::io;

use anyhow::Result;
use memdump_core::{dump, DumpOptions, MemoryDump, Person, RecordLayout, Region};
use serde_json::json;

/// Run the records command
///
/// Prints the size of the record array, a blank line, then its dump.
pub fn run(base: u64, options: &DumpOptions, json: bool) -> Result<()> {
    let people = Person::pioneers();
    let layout = RecordLayout::new(base);
    let memory = layout.build(&people)?;
    let region = Region::new(layout.base(), memory.as_bytes());

    if json {
        let output = json!({
            "size": region.len(),
            "people": people,
            "dump": MemoryDump::from_region(&region, options),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}\n", region.len());
    let stdout = io::stdout();
    dump(&region, &mut stdout.lock(), options)?;
    Ok(())
}
