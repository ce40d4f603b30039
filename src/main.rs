// SPDX-License-Identifier: MIT
//
// chromacode: find, classify and convert the colors in stylesheet text.
//
// This binary wires the workspace crates together:
//
//   chroma-color   → color model, CSS color grammar, named colors
//   chroma-scan    → recognizers, line extractor, document scanner
//   chroma-palette → format conversion, shades, harmonies, export templates
//
// Every subcommand follows the same flow:
//
//   FILE / stdin → scan → (filter | details | render) → stdout / --output
//
// Logging goes to stderr and is off below `warn` unless RUST_LOG says
// otherwise, so stdout stays clean for piping.

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Commands;

#[derive(Parser)]
#[command(name = "chromacode", version)]
#[command(about = "Extract, classify and convert the colors in stylesheet text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.command.execute()
}
