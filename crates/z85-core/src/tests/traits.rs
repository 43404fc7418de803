// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use z85_test_utils::KNOWN_VECTORS;

use crate::error::DecodeError;
use crate::traits::{TextDecoder, TextEncoder, Z85};

fn encode_with<E: TextEncoder>(encoder: &E, data: &[u8]) -> String {
    encoder.encode(data)
}

fn decode_with<D: TextDecoder>(decoder: &D, text: &str) -> Result<Vec<u8>, D::Error> {
    decoder.decode(text.as_bytes())
}

#[test]
fn test_z85_codec_matches_free_functions() {
    for &(bytes, text) in KNOWN_VECTORS {
        assert_eq!(encode_with(&Z85, bytes), crate::encode(bytes));
        assert_eq!(decode_with(&Z85, text), crate::decode(text));
    }
}

#[test]
fn test_z85_codec_propagates_decode_error() {
    assert_eq!(
        decode_with(&Z85, "nm=QNz"),
        Err(DecodeError::MalformedLength { len: 6 })
    );
}

#[test]
fn test_z85_codec_as_dyn_encoder() {
    let codecs: [&dyn TextEncoder; 2] = [&Z85, &Z85::default()];

    for codec in codecs {
        assert_eq!(codec.encode(b"Hello"), "nm=QNzV");
    }
}
