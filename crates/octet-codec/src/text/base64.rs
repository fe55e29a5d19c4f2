//! Standard and URL-safe Base64.
//!
//! Rendering uses the standard alphabet with padding, or the URL-safe
//! alphabet without. Parsing accepts either alphabet in the same input,
//! skips characters outside both, stops at the first `=`, and drops a
//! dangling single sextet.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Predicted byte count from the text length, ignoring up to two `=`.
pub(crate) fn byte_length(text: &str) -> usize {
    let mut n = text.encode_utf16().count();
    let bytes = text.as_bytes();
    for i in 1..=2 {
        if bytes.len() >= i && bytes[bytes.len() - i] == b'=' {
            n -= 1;
        } else {
            break;
        }
    }
    (n * 3) >> 2
}

/// Normalise to the standard alphabet, unpadded, whole sextet groups.
fn canonical(text: &str) -> String {
    let mut clean = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '+' | '/' => clean.push(c),
            '-' => clean.push('+'),
            '_' => clean.push('/'),
            '=' => break,
            _ => {}
        }
    }
    if clean.len() % 4 == 1 {
        clean.pop();
    }
    clean
}

pub(crate) fn encode(text: &str) -> Vec<u8> {
    LENIENT.decode(canonical(text)).unwrap_or_default()
}

pub(crate) fn encode_into(text: &str, dst: &mut [u8]) -> usize {
    let bytes = encode(text);
    let n = bytes.len().min(dst.len());
    dst[..n].copy_from_slice(&bytes[..n]);
    n
}

pub(crate) fn decode(bytes: &[u8], url_safe: bool) -> String {
    if url_safe {
        URL_SAFE_NO_PAD.encode(bytes)
    } else {
        STANDARD.encode(bytes)
    }
}
