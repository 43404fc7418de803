// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core implementation of the Z85 codec (ZeroMQ RFC 32).
//!
//! Z85 maps every 4 bytes to 5 printable ASCII characters drawn from an
//! 85-symbol alphabet. Inputs whose length is not a multiple of 4 are handled
//! with implicit padding that never appears in the output.
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod alphabet;
mod decode;
mod encode;
mod error;
mod len;
mod traits;

pub use alphabet::{ALPHABET, digit_of, is_z85};
pub use decode::{decode, decode_into};
pub use encode::{encode, encode_into};
pub use error::{DecodeError, EncodeError};
pub use len::{decoded_len, encoded_len};
pub use traits::{TextDecoder, TextEncoder, Z85};
