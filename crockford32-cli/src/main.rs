mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "crockford32")]
#[command(version)]
#[command(about = "Crockford base32 encode or decode FILE, or standard input, to standard output", long_about = None)]
struct Args {
    /// Decode data
    #[arg(short, long)]
    decode: bool,

    /// When decoding, ignore bytes outside the alphabet
    #[arg(short, long)]
    ignore_garbage: bool,

    /// Wrap encoded lines after COLS characters (0 disables wrapping)
    #[arg(short, long, value_name = "COLS", env = "CROCKFORD32_WRAP", default_value_t = cli::DEFAULT_WRAP)]
    wrap: usize,

    /// Emit lowercase symbols when encoding
    #[arg(long)]
    lowercase: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Input file; standard input when absent or "-"
    file: Option<PathBuf>,
}

fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("failed to read standard input")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let input = read_input(args.file.as_ref())?;
    debug!(bytes = input.len(), decode = args.decode, "read input");

    let output = if args.decode {
        cli::decode_filtered(&input, args.ignore_garbage).context("failed to decode input")?
    } else {
        cli::encode_wrapped(&input, args.wrap, args.lowercase)
    };
    debug!(bytes = output.len(), "writing output");

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output).context("failed to write standard output")?;
    stdout.flush().context("failed to write standard output")?;

    Ok(())
}
