// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # z85
//!
//! Z85 binary-to-text codec as specified by ZeroMQ RFC 32.
//!
//! Every 4 input bytes become 5 printable characters from an 85-symbol
//! alphabet that is safe to embed in JSON, URLs, source code and logs.
//! Inputs of any length are accepted; a trailing partial group of `r` bytes
//! becomes `r + 1` characters.
//!
//! ## Example
//!
//! ```rust
//! use z85::{DecodeError, decode, encode};
//!
//! let text = encode(b"Hello, World!");
//! assert_eq!(text, "nm=QNz.92jz/PV8aP");
//!
//! let bytes = decode(&text).expect("Failed to decode");
//! assert_eq!(bytes, b"Hello, World!");
//!
//! assert_eq!(
//!     decode("nm=QN z"),
//!     Err(DecodeError::InvalidCharacter { offset: 5, byte: b' ' })
//! );
//! ```
//!
//! ## Buffers
//!
//! [`encode_into`] and [`decode_into`] write into caller-owned slices sized
//! with [`encoded_len`] and [`decoded_len`].
//!
//! ## Errors
//!
//! Encoding never fails. Decoding fails with [`DecodeError`] when the input
//! has a character outside the alphabet, a length of the form `5k + 1`, or a
//! group whose value does not fit in 32 bits.
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub use z85_core::*;
