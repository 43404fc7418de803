// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::{self, Read, Write};

use crate::cli::EncodeArgs;
use crate::error::{CliError, CliResult};
use crate::io::{describe, open_input, open_output};

/// Writes `text` split into lines of `wrap` characters, each ending in `\n`.
///
/// `wrap == 0` writes a single line. Empty text writes a lone `\n`.
pub fn write_wrapped<W: Write + ?Sized>(output: &mut W, text: &[u8], wrap: usize) -> io::Result<()> {
    if text.is_empty() {
        return output.write_all(b"\n");
    }

    let width = if wrap == 0 { text.len() } else { wrap };

    for line in text.chunks(width) {
        output.write_all(line)?;
        output.write_all(b"\n")?;
    }

    Ok(())
}

/// Encodes the input endpoint of `args` into its output endpoint.
pub fn run_encode(args: &EncodeArgs) -> CliResult<()> {
    let source = describe(args.input.as_deref(), "<stdin>");
    let sink = describe(args.output.as_deref(), "<stdout>");

    let mut data = Vec::new();
    open_input(args.input.as_deref())
        .and_then(|mut input| input.read_to_end(&mut data))
        .map_err(|e| CliError::io(&source, e))?;
    log::debug!("Read {} bytes from {source}", data.len());

    let text = z85::encode(&data);

    open_output(args.output.as_deref())
        .and_then(|mut output| {
            write_wrapped(&mut output, text.as_bytes(), args.wrap)?;
            output.flush()
        })
        .map_err(|e| CliError::io(&sink, e))?;
    log::debug!("Wrote {} Z85 characters to {sink}", text.len());

    Ok(())
}
