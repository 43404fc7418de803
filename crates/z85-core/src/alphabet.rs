// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Forward and reverse Z85 alphabets.

/// Digit value to symbol. Index `i` is the character for base-85 digit `i`.
pub const ALPHABET: [u8; 85] =
    *b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

/// Lowest code point covered by [`DECODE_TABLE`].
pub(crate) const TABLE_OFFSET: u8 = 0x20;

/// Marks code points that are not part of the alphabet.
pub(crate) const INVALID: u8 = 0xFF;

/// Symbol to digit value, indexed by `byte - TABLE_OFFSET` over 0x20..=0x7F.
pub(crate) const DECODE_TABLE: [u8; 96] = build_decode_table();

const fn build_decode_table() -> [u8; 96] {
    let mut table = [INVALID; 96];
    let mut i = 0;

    while i < ALPHABET.len() {
        table[(ALPHABET[i] - TABLE_OFFSET) as usize] = i as u8;
        i += 1;
    }

    table
}

/// Returns the digit value of `byte`, or `None` if it is not a Z85 symbol.
#[inline(always)]
pub fn digit_of(byte: u8) -> Option<u8> {
    let index = byte.checked_sub(TABLE_OFFSET)? as usize;

    match DECODE_TABLE.get(index) {
        Some(&digit) if digit != INVALID => Some(digit),
        _ => None,
    }
}

/// Returns `true` if `byte` belongs to the Z85 alphabet.
#[inline(always)]
pub fn is_z85(byte: u8) -> bool {
    digit_of(byte).is_some()
}
