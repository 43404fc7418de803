// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Length arithmetic shared by the encoder and decoder.

use crate::error::DecodeError;

/// Characters produced by encoding `len` bytes.
///
/// Equal to `(len + pad) * 5 / 4 - pad` with `pad = (4 - len % 4) % 4`: each
/// full group yields 5 characters and a tail of `r` bytes yields `r + 1`.
#[inline]
pub const fn encoded_len(len: usize) -> usize {
    let tail = len % 4;
    let tail_chars = if tail == 0 { 0 } else { tail + 1 };

    len / 4 * 5 + tail_chars
}

/// Bytes produced by decoding `len` characters.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedLength`] when `len % 5 == 1`. A single
/// trailing character carries less than one byte and no encoding produces it.
#[inline]
pub const fn decoded_len(len: usize) -> Result<usize, DecodeError> {
    let tail = len % 5;

    match tail {
        0 => Ok(len / 5 * 4),
        1 => Err(DecodeError::MalformedLength { len }),
        _ => Ok(len / 5 * 4 + tail - 1),
    }
}
