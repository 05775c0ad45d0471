mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("memdump_cli=warn,memdump_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::load_config(args.config.as_deref());

    match args.command {
        Command::Dump {
            file,
            offset,
            size,
            base,
            tail,
            json,
            color,
        } => {
            let base = base
                .as_deref()
                .map(commands::hex_utils::parse_hex_address)
                .transpose()?
                .unwrap_or(0);
            let mut options = config.dump_options();
            if let Some(tail) = tail {
                options.tail = tail;
            }
            commands::dump::run(&file, offset, size, base, &options, json, color)
        }
        Command::Records { base, json } => {
            let base = commands::hex_utils::parse_hex_address(&base)?;
            commands::records::run(base, &config.dump_options(), json)
        }
        Command::Backup {
            input,
            output,
            quiet,
        } => {
            let input = input.unwrap_or(config.backup.input);
            let output = output.unwrap_or(config.backup.output);
            commands::backup::run(&input, &output, !quiet && config.backup.progress)
        }
    }
}
