// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Logging setup.
//!
//! Logs go to stderr through `env_logger` so stdout carries only codec output.
//! `RUST_LOG` takes precedence over the `--verbose` default.

use log::LevelFilter;

/// Installs the stderr logger at info level, or debug when `verbose`.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // A logger may already be installed when running under tests.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
