// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Library half of the `z85` command-line tool.
//!
//! The binary in `main.rs` only parses arguments, sets up logging and calls
//! [`run`]; everything else lives here so integration tests can drive it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod io;
pub mod logging;

pub use cli::{Cli, Commands, DecodeArgs, EncodeArgs, parse_cli};
pub use commands::{decode::run_decode, encode::run_encode, run};
pub use error::{CliError, CliResult};
