// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Z85 text to bytes.
use alloc::vec;
use alloc::vec::Vec;

use crate::alphabet::digit_of;
use crate::error::DecodeError;
use crate::len::decoded_len;

/// Digit used to fill the missing positions of a trailing partial group.
///
/// Filling with the highest digit adds less than `256^pad` to the word the
/// encoder saw, so the kept leading bytes are unchanged. Filling with 0 would
/// borrow from them.
const PAD_DIGIT: u8 = 84;

/// Decodes one group of 2 to 5 symbols starting at `offset` in the input.
#[inline(always)]
fn decode_group(group: &[u8], offset: usize) -> Result<u32, DecodeError> {
    let mut value = 0u64;

    for position in 0..5 {
        let digit = match group.get(position) {
            Some(&byte) => digit_of(byte).ok_or(DecodeError::InvalidCharacter {
                offset: offset + position,
                byte,
            })?,
            None => PAD_DIGIT,
        };

        value = value * 85 + u64::from(digit);
    }

    u32::try_from(value).map_err(|_| DecodeError::GroupOverflow { offset })
}

/// `out` must be exactly `decoded_len(text.len())` long.
fn decode_exact(text: &[u8], out: &mut [u8]) -> Result<(), DecodeError> {
    for (index, (group, dst)) in text.chunks(5).zip(out.chunks_mut(4)).enumerate() {
        let word = decode_group(group, index * 5)?;
        dst.copy_from_slice(&word.to_be_bytes()[..dst.len()]);
    }

    Ok(())
}

/// Decodes Z85 `text` back into bytes.
///
/// Accepts anything that views as bytes (`&str`, `String`, `&[u8]`).
///
/// # Errors
///
/// - [`DecodeError::MalformedLength`] if `text.len() % 5 == 1`.
/// - [`DecodeError::InvalidCharacter`] for the first byte outside the alphabet
///   (whitespace, control characters and non-ASCII included).
/// - [`DecodeError::GroupOverflow`] if a group encodes a value above `u32::MAX`.
///
/// # Example
///
/// ```rust
/// assert_eq!(z85_core::decode("nm=QNzV").unwrap(), b"Hello");
/// assert!(z85_core::decode("nm QNzV").is_err());
/// ```
pub fn decode(text: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    let text = text.as_ref();
    let mut out = vec![0u8; decoded_len(text.len())?];

    decode_exact(text, &mut out)?;

    Ok(out)
}

/// Decodes `text` into `out`, returning the number of bytes written.
///
/// On error, the region of `out` that would have held the result is zeroed so
/// no partially decoded bytes survive.
///
/// # Errors
///
/// Same as [`decode`], plus [`DecodeError::BufferTooSmall`] if `out` is
/// shorter than [`decoded_len(text.len())`](crate::decoded_len).
pub fn decode_into(text: impl AsRef<[u8]>, out: &mut [u8]) -> Result<usize, DecodeError> {
    let text = text.as_ref();
    let required = decoded_len(text.len())?;

    if out.len() < required {
        return Err(DecodeError::BufferTooSmall {
            required,
            available: out.len(),
        });
    }

    let out = &mut out[..required];

    if let Err(err) = decode_exact(text, out) {
        out.fill(0);
        return Err(err);
    }

    Ok(required)
}
