// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use z85_test_utils::{KNOWN_VECTORS, RFC32_BYTES, RFC32_TEXT};

use crate::decode::{decode, decode_into};
use crate::error::DecodeError;

#[test]
fn test_decode_known_vectors() {
    for &(bytes, text) in KNOWN_VECTORS {
        let decoded = decode(text).expect("Failed to decode(..)");
        assert_eq!(decoded, bytes, "decoding {text:?}");
    }
}

#[test]
fn test_decode_empty() {
    assert_eq!(decode(""), Ok(Vec::new()));
}

#[test]
fn test_decode_accepts_str_string_and_bytes() {
    let expected = b"Hello".to_vec();

    assert_eq!(decode("nm=QNzV"), Ok(expected.clone()));
    assert_eq!(decode(String::from("nm=QNzV")), Ok(expected.clone()));
    assert_eq!(decode(b"nm=QNzV"), Ok(expected));
}

#[test]
fn test_decode_rfc32_frame() {
    assert_eq!(decode(RFC32_TEXT), Ok(RFC32_BYTES.to_vec()));
}

#[test]
fn test_decode_partial_groups_use_high_digit_padding() {
    // Zero padding would decode "nb" to 0x47.
    assert_eq!(decode("nb"), Ok(b"H".to_vec()));
    assert_eq!(decode("@@"), Ok(vec![0xFF]));
    assert_eq!(decode("00"), Ok(vec![0x00]));
}

#[test]
fn test_decode_rejects_whitespace() {
    assert_eq!(
        decode("nm QNzV"),
        Err(DecodeError::InvalidCharacter {
            offset: 2,
            byte: b' '
        })
    );
    assert_eq!(
        decode("nm=QNzV\n"),
        Err(DecodeError::InvalidCharacter {
            offset: 7,
            byte: b'\n'
        })
    );
}

#[test]
fn test_decode_rejects_non_ascii() {
    // 'é' is 0xC3 0xA9 in UTF-8.
    assert_eq!(
        decode("nm=é"),
        Err(DecodeError::InvalidCharacter {
            offset: 3,
            byte: 0xC3
        })
    );
}

#[test]
fn test_decode_reports_first_invalid_character() {
    assert_eq!(
        decode("nm=QN~~"),
        Err(DecodeError::InvalidCharacter {
            offset: 5,
            byte: b'~'
        })
    );
}

#[test]
fn test_decode_rejects_malformed_length() {
    assert_eq!(decode("n"), Err(DecodeError::MalformedLength { len: 1 }));
    assert_eq!(decode("nm=QNz"), Err(DecodeError::MalformedLength { len: 6 }));
}

#[test]
fn test_decode_checks_length_before_characters() {
    assert_eq!(decode(" "), Err(DecodeError::MalformedLength { len: 1 }));
}

#[test]
fn test_decode_rejects_group_overflow() {
    // "%nSc0" is u32::MAX, one more overflows.
    assert_eq!(decode("%nSc0"), Ok(vec![0xFF; 4]));
    assert_eq!(decode("%nSc1"), Err(DecodeError::GroupOverflow { offset: 0 }));
    assert_eq!(decode("#####"), Err(DecodeError::GroupOverflow { offset: 0 }));
    assert_eq!(
        decode("nm=QN%nSc1"),
        Err(DecodeError::GroupOverflow { offset: 5 })
    );
}

#[test]
fn test_decode_rejects_overflowing_padded_tail() {
    assert_eq!(decode("##"), Err(DecodeError::GroupOverflow { offset: 0 }));
    assert_eq!(
        decode("nm=QN##"),
        Err(DecodeError::GroupOverflow { offset: 5 })
    );
}

#[test]
fn test_decode_into_exact_buffer() {
    let mut out = [0u8; 5];
    let written = decode_into("nm=QNzV", &mut out).expect("Failed to decode_into(..)");

    assert_eq!(written, 5);
    assert_eq!(&out, b"Hello");
}

#[test]
fn test_decode_into_reports_buffer_too_small() {
    let mut out = [0u8; 4];

    assert_eq!(
        decode_into("nm=QNzV", &mut out),
        Err(DecodeError::BufferTooSmall {
            required: 5,
            available: 4
        })
    );
}

#[test]
fn test_decode_into_checks_length_before_buffer() {
    let mut out: [u8; 0] = [];
    assert_eq!(
        decode_into("n", &mut out),
        Err(DecodeError::MalformedLength { len: 1 })
    );
}

#[test]
fn test_decode_into_zeroes_output_on_error() {
    let mut out = [0xAAu8; 16];
    let result = decode_into("nm=QN%nSc1", &mut out);

    assert_eq!(result, Err(DecodeError::GroupOverflow { offset: 5 }));
    // First group was decoded before the failure, then wiped.
    assert!(out[..8].iter().all(|&b| b == 0));
    assert!(out[8..].iter().all(|&b| b == 0xAA));
}
