//! UTF-16 little-endian.

use std::char::REPLACEMENT_CHARACTER;

pub(crate) fn byte_length(text: &str) -> usize {
    text.encode_utf16().count() * 2
}

pub(crate) fn encode(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

pub(crate) fn encode_units(units: &[u16]) -> Vec<u8> {
    units.iter().flat_map(|u| u.to_le_bytes()).collect()
}

/// Write whole characters only; a surrogate pair is never split.
pub(crate) fn encode_into(text: &str, dst: &mut [u8]) -> usize {
    let mut written = 0;
    let mut units = [0u16; 2];
    for c in text.chars() {
        let encoded = c.encode_utf16(&mut units);
        let need = encoded.len() * 2;
        if written + need > dst.len() {
            break;
        }
        for unit in encoded.iter() {
            dst[written..written + 2].copy_from_slice(&unit.to_le_bytes());
            written += 2;
        }
    }
    written
}

/// Decode code units, replacing unpaired surrogates with U+FFFD.
/// A trailing odd byte is ignored.
pub(crate) fn decode(bytes: &[u8]) -> String {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|r| r.unwrap_or(REPLACEMENT_CHARACTER))
        .collect()
}
