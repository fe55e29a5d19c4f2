//! Hexadecimal, two characters per byte.
//!
//! Decoding text into bytes is lenient: it stops at the first pair that is
//! not two hex digits and drops a trailing unpaired nibble.

/// Predicted byte count: half the UTF-16 length, rounded down.
pub(crate) fn byte_length(text: &str) -> usize {
    text.encode_utf16().count() >> 1
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn pairs(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.as_bytes()
        .chunks_exact(2)
        .map_while(|pair| Some(nibble(pair[0])? << 4 | nibble(pair[1])?))
}

pub(crate) fn encode(text: &str) -> Vec<u8> {
    pairs(text).collect()
}

pub(crate) fn encode_into(text: &str, dst: &mut [u8]) -> usize {
    let mut written = 0;
    for (slot, byte) in dst.iter_mut().zip(pairs(text)) {
        *slot = byte;
        written += 1;
    }
    written
}

pub(crate) fn decode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
