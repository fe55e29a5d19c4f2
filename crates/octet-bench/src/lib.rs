//! Benchmark inputs for the octet buffer crates.
//!
//! - [`mixed_text`]: deterministic text mixing 1- to 4-byte UTF-8 characters
//! - [`haystack`]: a seeded random buffer with a known needle planted near the end

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use octet_buffer::Buffer;
use octet_test_utils::random_bytes;

/// Needle planted by [`haystack`].
pub const NEEDLE: &[u8] = b"\x00octet\xff";

/// Build a string of roughly `len` bytes cycling through ASCII, Latin-1,
/// BMP, and astral characters.
pub fn mixed_text(len: usize) -> String {
    let pieces = ["hello ", "café ", "€ ", "😀 "];
    let mut out = String::with_capacity(len + 8);
    let mut i = 0;
    while out.len() < len {
        out.push_str(pieces[i % pieces.len()]);
        i += 1;
    }
    out
}

/// A `len`-byte random buffer whose only occurrence of [`NEEDLE`] starts at
/// `len - 2 * NEEDLE.len()`.
///
/// # Panics
///
/// Panics if `len < 2 * NEEDLE.len()`.
pub fn haystack(seed: u64, len: usize) -> Buffer {
    assert!(len >= 2 * NEEDLE.len(), "haystack too short for the needle");
    // The needle starts with the only zero byte in the result.
    let mut bytes: Vec<u8> = random_bytes(seed, len)
        .into_iter()
        .map(|b| if b == 0 { 1 } else { b })
        .collect();
    let at = len - 2 * NEEDLE.len();
    bytes[at..at + NEEDLE.len()].copy_from_slice(NEEDLE);
    Buffer::from_bytes(&bytes)
}
