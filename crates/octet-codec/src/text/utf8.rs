//! UTF-8.

pub(crate) fn byte_length(text: &str) -> usize {
    text.len()
}

pub(crate) fn encode(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Copy the longest prefix of whole characters that fits in `dst`.
pub(crate) fn encode_into(text: &str, dst: &mut [u8]) -> usize {
    let mut end = dst.len().min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    dst[..end].copy_from_slice(&text.as_bytes()[..end]);
    end
}

/// Decode, replacing each maximal ill-formed subsequence with U+FFFD.
pub(crate) fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
