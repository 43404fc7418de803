// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Raw bytes of the ZeroMQ RFC 32 test frame.
pub const RFC32_BYTES: [u8; 8] = [0x86, 0x4F, 0xD2, 0x6F, 0xB5, 0x59, 0xF7, 0x5B];

/// Z85 text of [`RFC32_BYTES`].
pub const RFC32_TEXT: &str = "HelloWorld";

/// Known-answer pairs `(bytes, text)`, covering every tail length.
pub const KNOWN_VECTORS: &[(&[u8], &str)] = &[
    (b"", ""),
    (b"H", "nb"),
    (b"He", "nm."),
    (b"Hel", "nm=P"),
    (b"Hell", "nm=QN"),
    (b"Hello", "nm=QNzV"),
    (b"Hello, World!", "nm=QNz.92jz/PV8aP"),
    (
        "The quick brown 🦊 jumps over 13 lazy 🐶.".as_bytes(),
        "ra]?=ADL#9yAN8bz*c7w[sMOnazM4oAc0duC4CXpf/6}*vs0hw[sL/Je=",
    ),
    (&RFC32_BYTES, RFC32_TEXT),
    (&[0x00, 0x00, 0x00, 0x00], "00000"),
    (&[0xFF, 0xFF, 0xFF, 0xFF], "%nSc0"),
    (&[0x00], "00"),
    (&[0xFF], "@@"),
];
