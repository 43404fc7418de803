// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for the command-line tool.

use thiserror::Error;

use z85::DecodeError;

/// Failures of a `z85` subcommand.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input text is not valid Z85. Offsets count from the start of the input
    /// with line breaks removed.
    #[error("invalid Z85 input: {0}")]
    Decode(#[from] DecodeError),

    /// Reading or writing the named file or standard stream failed.
    #[error("I/O error on {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for subcommand operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn io(target: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            target: target.into(),
            source,
        }
    }
}
