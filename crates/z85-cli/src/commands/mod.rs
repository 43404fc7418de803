// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Subcommand dispatch.

pub mod decode;
pub mod encode;

use anyhow::Context;

use crate::cli::{Cli, Commands};

/// Runs the parsed subcommand.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Encode(args) => encode::run_encode(&args).context("encode failed"),
        Commands::Decode(args) => decode::run_decode(&args).context("decode failed"),
    }
}
