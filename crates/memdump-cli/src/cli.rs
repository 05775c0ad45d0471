//! CLI argument definitions for memdump.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use memdump_core::TailPolicy;

#[derive(Parser)]
#[command(name = "memdump")]
#[command(about = "Memory layout hex dumper", version)]
pub struct Args {
    /// Load settings from a TOML file
    #[arg(short, long, value_name = "FILE", env = "MEMDUMP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Dump the bytes of a file (hexdump)
    Dump {
        /// File to dump
        file: PathBuf,
        /// First byte of the file to dump
        #[arg(long, default_value = "0")]
        offset: usize,
        /// Number of bytes to dump (default: to end of file)
        #[arg(long)]
        size: Option<usize>,
        /// Address shown for the first byte of the file (hex, e.g., 0x7ff600000000)
        #[arg(long)]
        base: Option<String>,
        /// How to render the last partial line: clamp or padded
        #[arg(long)]
        tail: Option<TailPolicy>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Highlight printable bytes
        #[arg(long)]
        color: bool,
    },
    /// Lay out two person records and dump their memory
    Records {
        /// Base address of the record array (hex)
        #[arg(long, default_value = "0xc9f41ff5b0")]
        base: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Copy a text file line by line
    Backup {
        /// File to read (default: readme.txt)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// File to write (default: backup.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Suppress progress dots
        #[arg(short, long)]
        quiet: bool,
    },
}
