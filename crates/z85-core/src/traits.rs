// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::DecodeError;

/// A binary-to-text encoder.
pub trait TextEncoder {
    /// Encodes `data` as text. Must be total.
    fn encode(&self, data: &[u8]) -> String;
}

/// A text-to-binary decoder.
pub trait TextDecoder {
    /// Error returned on malformed input.
    type Error;

    /// Decodes `text` back into the bytes it was produced from.
    ///
    /// # Errors
    ///
    /// Implementation-defined; see [`Self::Error`].
    fn decode(&self, text: &[u8]) -> Result<Vec<u8>, Self::Error>;
}

/// Zero-sized handle implementing [`TextEncoder`] and [`TextDecoder`] with Z85.
///
/// Useful where code is generic over the text codec:
///
/// ```rust
/// use z85_core::{TextDecoder, TextEncoder, Z85};
///
/// fn roundtrip<C: TextEncoder + TextDecoder>(codec: &C, data: &[u8]) -> bool {
///     let text = codec.encode(data);
///     codec.decode(text.as_bytes()).is_ok_and(|bytes| bytes == data)
/// }
///
/// assert!(roundtrip(&Z85, b"Hello, World!"));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Z85;

impl TextEncoder for Z85 {
    #[inline]
    fn encode(&self, data: &[u8]) -> String {
        crate::encode::encode(data)
    }
}

impl TextDecoder for Z85 {
    type Error = DecodeError;

    #[inline]
    fn decode(&self, text: &[u8]) -> Result<Vec<u8>, Self::Error> {
        crate::decode::decode(text)
    }
}
