// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bytes to Z85 text.
use alloc::string::String;
use alloc::vec;

use crate::alphabet::ALPHABET;
use crate::error::EncodeError;
use crate::len::encoded_len;

/// Place values of the five base-85 digits, most significant first.
const PLACE_VALUES: [u32; 5] = [85 * 85 * 85 * 85, 85 * 85 * 85, 85 * 85, 85, 1];

/// Writes the leading `out.len()` (at most 5) symbols of `word`.
#[inline(always)]
fn encode_word(word: u32, out: &mut [u8]) {
    for (dst, place) in out.iter_mut().zip(PLACE_VALUES) {
        *dst = ALPHABET[(word / place % 85) as usize];
    }
}

/// `out` must be exactly `encoded_len(data.len())` long.
fn encode_exact(data: &[u8], out: &mut [u8]) {
    debug_assert_eq!(out.len(), encoded_len(data.len()));

    let mut groups = data.chunks_exact(4);
    let mut quintets = out.chunks_mut(5);

    for (group, dst) in (&mut groups).zip(&mut quintets) {
        let word = u32::from_be_bytes([group[0], group[1], group[2], group[3]]);
        encode_word(word, dst);
    }

    // Zero-pad the tail; only its first `tail.len() + 1` symbols are kept.
    let tail = groups.remainder();
    if let Some(dst) = quintets.next() {
        let mut padded = [0u8; 4];
        padded[..tail.len()].copy_from_slice(tail);
        encode_word(u32::from_be_bytes(padded), dst);
    }
}

/// Encodes `data` as Z85 text.
///
/// Total over all inputs: the empty slice encodes to the empty string and any
/// other length is handled with implicit padding.
///
/// # Example
///
/// ```rust
/// assert_eq!(z85_core::encode(b"Hello"), "nm=QNzV");
/// assert_eq!(z85_core::encode(b"Hell"), "nm=QN");
/// ```
pub fn encode(data: &[u8]) -> String {
    let mut out = vec![0u8; encoded_len(data.len())];
    encode_exact(data, &mut out);

    // SAFETY: every byte written comes from ALPHABET, which is ASCII.
    unsafe { String::from_utf8_unchecked(out) }
}

/// Encodes `data` into `out`, returning the number of bytes written.
///
/// Exactly [`encoded_len(data.len())`](crate::encoded_len) bytes are written;
/// anything past them in `out` is left untouched.
///
/// # Errors
///
/// Returns [`EncodeError::BufferTooSmall`] if `out` cannot hold the encoded
/// text. Nothing is written in that case.
pub fn encode_into(data: &[u8], out: &mut [u8]) -> Result<usize, EncodeError> {
    let required = encoded_len(data.len());

    if out.len() < required {
        return Err(EncodeError::BufferTooSmall {
            required,
            available: out.len(),
        });
    }

    encode_exact(data, &mut out[..required]);

    Ok(required)
}
