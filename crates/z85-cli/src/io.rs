// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Input and output endpoints: a file path or the standard streams.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Treats `None` and `-` as the standard stream.
fn is_stdio(path: Option<&Path>) -> bool {
    path.is_none_or(|p| p.as_os_str() == "-")
}

/// Human-readable name of an endpoint, used in logs and errors.
pub fn describe(path: Option<&Path>, stdio_name: &str) -> String {
    match path {
        Some(p) if !is_stdio(Some(p)) => p.display().to_string(),
        _ => stdio_name.to_string(),
    }
}

/// Opens a file for buffered reading, or locks stdin.
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn Read>> {
    match path {
        Some(p) if !is_stdio(Some(p)) => Ok(Box::new(BufReader::new(File::open(p)?))),
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

/// Creates a file for buffered writing, or locks stdout.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(p) if !is_stdio(Some(p)) => Ok(Box::new(BufWriter::new(File::create(p)?))),
        _ => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
