// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for z85 crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod payloads;
mod vectors;

pub use payloads::patterned_bytes;
pub use vectors::{KNOWN_VECTORS, RFC32_BYTES, RFC32_TEXT};
