// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for encoding and decoding operations.

use thiserror::Error;

/// Errors returned by the decoder.
///
/// Decoding is all-or-nothing: when an error is returned no partial output is
/// exposed to the caller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte in the input is not a member of the Z85 alphabet.
    #[error("invalid Z85 character 0x{byte:02x} at offset {offset}")]
    InvalidCharacter {
        /// Byte offset of the offending character.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },

    /// The input length cannot correspond to a whole number of bytes.
    #[error("malformed Z85 length {len} (length % 5 == 1)")]
    MalformedLength {
        /// Length of the rejected input.
        len: usize,
    },

    /// A 5-character group encodes a value larger than `u32::MAX`.
    #[error("Z85 group at offset {offset} overflows 32 bits")]
    GroupOverflow {
        /// Byte offset of the first character of the group.
        offset: usize,
    },

    /// The output buffer passed to [`decode_into`](crate::decode_into) is too short.
    #[error("output buffer too small: required {required}, available {available}")]
    BufferTooSmall {
        /// Bytes the decoded output needs.
        required: usize,
        /// Bytes the buffer provides.
        available: usize,
    },
}

/// Errors returned by [`encode_into`](crate::encode_into).
///
/// [`encode`](crate::encode) itself is total and never fails.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The output buffer is too short for the encoded text.
    #[error("output buffer too small: required {required}, available {available}")]
    BufferTooSmall {
        /// Characters the encoded output needs.
        required: usize,
        /// Bytes the buffer provides.
        available: usize,
    },
}
