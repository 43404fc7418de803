// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::{Read, Write};

use crate::cli::DecodeArgs;
use crate::error::{CliError, CliResult};
use crate::io::{describe, open_input, open_output};

/// Removes surrounding whitespace and every `\n` / `\r`, so wrapped output of
/// `z85 encode` decodes as-is. Any other whitespace is left for the decoder to
/// reject.
pub fn strip_line_breaks(raw: &[u8]) -> Vec<u8> {
    raw.trim_ascii()
        .iter()
        .copied()
        .filter(|b| !matches!(b, b'\n' | b'\r'))
        .collect()
}

/// Decodes the input endpoint of `args` into its output endpoint.
pub fn run_decode(args: &DecodeArgs) -> CliResult<()> {
    let source = describe(args.input.as_deref(), "<stdin>");
    let sink = describe(args.output.as_deref(), "<stdout>");

    let mut raw = Vec::new();
    open_input(args.input.as_deref())
        .and_then(|mut input| input.read_to_end(&mut raw))
        .map_err(|e| CliError::io(&source, e))?;

    let text = strip_line_breaks(&raw);
    log::debug!(
        "Read {} bytes from {source} ({} Z85 characters)",
        raw.len(),
        text.len()
    );

    let data = z85::decode(&text)?;

    open_output(args.output.as_deref())
        .and_then(|mut output| {
            output.write_all(&data)?;
            output.flush()
        })
        .map_err(|e| CliError::io(&sink, e))?;
    log::debug!("Wrote {} bytes to {sink}", data.len());

    Ok(())
}
