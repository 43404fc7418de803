// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Z85 (ZeroMQ RFC 32) encoder and decoder",
    long_about = "Encodes binary data to Z85 text and decodes it back. \
                  Reads from INPUT or standard input, writes to OUTPUT or standard output."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode bytes as Z85 text
    Encode(EncodeArgs),
    /// Decode Z85 text back into bytes
    Decode(DecodeArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct EncodeArgs {
    /// Input file; standard input when omitted or "-"
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file; standard output when omitted or "-"
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Wrap encoded lines after COLS characters (0 disables wrapping)
    #[arg(short, long, value_name = "COLS", default_value_t = 0, env = "Z85_WRAP")]
    pub wrap: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct DecodeArgs {
    /// Input file; standard input when omitted or "-"
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file; standard output when omitted or "-"
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Parses the process arguments, exiting with usage on error.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
