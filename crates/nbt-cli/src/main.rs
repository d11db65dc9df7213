//! `nbt` CLI: dump, encode, and inspect uncompressed NBT files from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Decode NBT to pretty-printed JSON (stdin → stdout)
//! nbt dump < level.dat.raw
//!
//! # Decode from file to file, compact JSON
//! nbt dump -i level.dat.raw -o level.json --compact
//!
//! # Encode the JSON form back to NBT
//! nbt encode -i level.json -o level.dat.raw
//!
//! # Show tag counts and nesting depth
//! nbt stats -i level.dat.raw
//!
//! # Debug logging
//! RUST_LOG=nbt_core=debug nbt dump -i level.dat.raw
//! ```
//!
//! Compressed (gzip/zlib) files must be decompressed first.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nbt_core::{DecodeOptions, Document, TreeStats};
use std::io::{self, Read, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nbt", version, about = "NBT (Named Binary Tag) CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode NBT to JSON
    Dump {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
        /// Maximum list/compound nesting depth accepted while decoding
        #[arg(long, default_value_t = nbt_core::options::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Encode the JSON form of a document to NBT
    Encode {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show document statistics (tag counts, nesting depth, size)
    Stats {
        /// Input NBT file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Maximum list/compound nesting depth accepted while decoding
        #[arg(long, default_value_t = nbt_core::options::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Dump {
            input,
            output,
            compact,
            max_depth,
        } => {
            let bytes = read_input(input.as_deref())?;
            let doc = decode_document(&bytes, max_depth)?;
            let mut json = if compact {
                serde_json::to_string(&doc)?
            } else {
                serde_json::to_string_pretty(&doc)?
            };
            json.push('\n');
            write_output(output.as_deref(), json.as_bytes())?;
        }
        Commands::Encode { input, output } => {
            let json = read_input(input.as_deref())?;
            let doc: Document =
                serde_json::from_slice(&json).context("Failed to parse JSON document")?;
            let bytes = nbt_core::encode(&doc).context("Failed to encode document to NBT")?;
            info!(bytes = bytes.len(), "encoded document");
            write_output(output.as_deref(), &bytes)?;
        }
        Commands::Stats { input, max_depth } => {
            let bytes = read_input(input.as_deref())?;
            let doc = decode_document(&bytes, max_depth)?;
            let stats = TreeStats::of_document(&doc);
            match doc.data() {
                Some(data) => {
                    println!("Name:       {:?}", data.name.to_string_lossy());
                    println!("Root:       {}", data.root.tag_type());
                }
                None => println!("Root:       (empty document)"),
            }
            println!("Size:       {} bytes", bytes.len());
            println!("Tags:       {}", stats.total());
            println!("Max depth:  {}", stats.max_depth());
            for (ty, count) in stats.by_type() {
                println!("  {:<10} {}", ty.name(), count);
            }
        }
    }

    Ok(())
}

/// Install a stderr `tracing` subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn decode_document(bytes: &[u8], max_depth: usize) -> Result<Document> {
    let options = DecodeOptions::default().with_max_depth(max_depth);
    debug!(bytes = bytes.len(), max_depth, "decoding document");
    nbt_core::read_document_with(bytes, options).context("Failed to decode NBT")
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path).with_context(|| format!("Failed to read file: {}", path)),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content)
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
