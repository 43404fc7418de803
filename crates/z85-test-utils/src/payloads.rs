// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Deterministic pseudo-random payload of `len` bytes (32-bit xorshift).
pub fn patterned_bytes(len: usize) -> Vec<u8> {
    let mut state = 0x9E37_79B9u32;

    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}
