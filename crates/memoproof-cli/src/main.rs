//! Memoproof CLI - local commitment and reveal operations.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod output;

use commands::{canonicalize, commit, parse_memo, reveal};

#[derive(Parser)]
#[command(name = "memoproof")]
#[command(about = "Commit to events and verify reveals")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show canonical bytes for input JSON
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Commit to input JSON with a fresh salt
    Commit {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Memo prefix placed before the digest
        #[arg(long, default_value = memoproof_canonical::DEFAULT_MEMO_PREFIX)]
        prefix: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that a digest and salt were produced from input JSON
    Reveal {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Published digest (64 hex characters)
        #[arg(long)]
        digest: String,
        /// Salt kept from the commit (32 hex characters)
        #[arg(long)]
        salt: String,
    },
    /// Split memo text into prefix and digest
    ParseMemo {
        /// Memo text, e.g. `POC_HASH:<digest>`
        text: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Canonicalize { input } => canonicalize::run(input),
        Commands::Commit {
            input,
            prefix,
            json,
        } => commit::run(input, prefix, json),
        Commands::Reveal {
            input,
            digest,
            salt,
        } => reveal::run(input, digest, salt),
        Commands::ParseMemo { text } => parse_memo::run(text),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
