//! Text to bytes and back.
//!
//! "Encode" always means text to bytes and "decode" bytes to text,
//! whatever the encoding. For hex and Base64 that is the reverse of the
//! usual reading: `encode("68", Hex)` yields the byte `0x68`, and
//! `decode(b"h", Hex)` yields `"68"`.
//!
//! No function here fails. Malformed text input for hex and Base64 is
//! consumed up to the point it stops making sense; malformed byte input
//! for the Unicode encodings decodes to U+FFFD.

mod base64;
mod hex;
mod latin1;
mod utf16;
mod utf8;

use octet_core::Encoding;

/// Number of bytes `text` occupies under `encoding`, without encoding it.
///
/// Exact for every encoding except hex and Base64, where it is the
/// length-based upper estimate used to pre-size a buffer.
pub fn byte_length(text: &str, encoding: Encoding) -> usize {
    match encoding {
        Encoding::Utf8 => utf8::byte_length(text),
        Encoding::Utf16Le => utf16::byte_length(text),
        Encoding::Latin1 | Encoding::Ascii => latin1::byte_length(text),
        Encoding::Hex => hex::byte_length(text),
        Encoding::Base64 | Encoding::Base64Url => base64::byte_length(text),
    }
}

/// Encode `text` into a fresh byte vector.
pub fn encode(text: &str, encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Utf8 => utf8::encode(text),
        Encoding::Utf16Le => utf16::encode(text),
        Encoding::Latin1 | Encoding::Ascii => latin1::encode(text),
        Encoding::Hex => hex::encode(text),
        Encoding::Base64 | Encoding::Base64Url => base64::encode(text),
    }
}

/// Encode as much of `text` as fits into `dst`.
///
/// Only complete units are written: a UTF-8 character or UTF-16 surrogate
/// pair that does not fit contributes nothing. Returns the number of
/// bytes written; bytes of `dst` past that count are left untouched.
pub fn encode_into(text: &str, dst: &mut [u8], encoding: Encoding) -> usize {
    match encoding {
        Encoding::Utf8 => utf8::encode_into(text, dst),
        Encoding::Utf16Le => utf16::encode_into(text, dst),
        Encoding::Latin1 | Encoding::Ascii => latin1::encode_into(text, dst),
        Encoding::Hex => hex::encode_into(text, dst),
        Encoding::Base64 | Encoding::Base64Url => base64::encode_into(text, dst),
    }
}

/// Decode `bytes` into text.
pub fn decode(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Utf8 => utf8::decode(bytes),
        Encoding::Utf16Le => utf16::decode(bytes),
        Encoding::Latin1 => latin1::decode_latin1(bytes),
        Encoding::Ascii => latin1::decode_ascii(bytes),
        Encoding::Hex => hex::decode(bytes),
        Encoding::Base64 => base64::decode(bytes, false),
        Encoding::Base64Url => base64::decode(bytes, true),
    }
}

/// Re-encode `bytes` from one encoding to another via text.
pub fn transcode(bytes: &[u8], from: Encoding, to: Encoding) -> Vec<u8> {
    if from == to {
        return bytes.to_vec();
    }
    encode(&decode(bytes, from), to)
}

/// Encode raw UTF-16 code units, which may hold unpaired surrogates.
///
/// UTF-16LE keeps the units as-is and the single-byte encodings keep
/// their low byte. Everything else sees lone surrogates as U+FFFD
/// (`EF BF BD` in UTF-8).
pub fn encode_wide(units: &[u16], encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Utf16Le => utf16::encode_units(units),
        Encoding::Latin1 | Encoding::Ascii => latin1::encode_units(units),
        _ => encode(&String::from_utf16_lossy(units), encoding),
    }
}

/// Base64-encode a string of Latin-1 characters.
///
/// Returns `None` if any character is above U+00FF.
pub fn btoa(text: &str) -> Option<String> {
    if text.chars().any(|c| u32::from(c) > 0xFF) {
        return None;
    }
    Some(base64::decode(&latin1::encode(text), false))
}

/// Decode lenient Base64 into a string of Latin-1 characters.
pub fn atob(text: &str) -> String {
    latin1::decode_latin1(&base64::encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &["", "hello", "héllo wörld", "€uro", "日本語", "emoji 😀🎉"];

    #[test]
    fn unicode_encodings_round_trip() {
        for enc in [Encoding::Utf8, Encoding::Utf16Le] {
            for s in SAMPLES {
                assert_eq!(decode(&encode(s, enc), enc), *s, "{enc}: {s}");
                assert_eq!(byte_length(s, enc), encode(s, enc).len(), "{enc}: {s}");
            }
        }
    }

    #[test]
    fn byte_encodings_round_trip_through_text() {
        let bytes: Vec<u8> = (0..=255).collect();
        for enc in [Encoding::Latin1, Encoding::Hex, Encoding::Base64, Encoding::Base64Url] {
            let text = decode(&bytes, enc);
            assert_eq!(encode(&text, enc), bytes, "{enc}");
            assert_eq!(byte_length(&text, enc), bytes.len(), "{enc}");
        }
    }

    #[test]
    fn hello_in_every_encoding() {
        assert_eq!(encode("hello", Encoding::Utf8), b"hello");
        assert_eq!(encode("68656c6c6f", Encoding::Hex), b"hello");
        assert_eq!(encode("aGVsbG8=", Encoding::Base64), b"hello");
        assert_eq!(encode("aGVsbG8", Encoding::Base64Url), b"hello");
        assert_eq!(decode(b"hello", Encoding::Base64Url), "aGVsbG8");
        assert_eq!(encode("hello", Encoding::Utf16Le).len(), 10);
    }

    #[test]
    fn transcode_between_encodings() {
        assert_eq!(transcode(b"hi", Encoding::Utf8, Encoding::Hex), b"");
        assert_eq!(transcode("é".as_bytes(), Encoding::Utf8, Encoding::Latin1), vec![0xE9]);
        assert_eq!(transcode(&[0xE9], Encoding::Latin1, Encoding::Utf8), "é".as_bytes());
        assert_eq!(
            transcode(&[0x68, 0x00, 0x69, 0x00], Encoding::Utf16Le, Encoding::Utf8),
            b"hi"
        );
    }

    #[test]
    fn wide_units_with_lone_surrogates() {
        let units = [0x0061, 0xD800, 0x0062];
        assert_eq!(encode_wide(&units, Encoding::Utf8), b"a\xEF\xBF\xBDb");
        assert_eq!(
            encode_wide(&units, Encoding::Utf16Le),
            vec![0x61, 0x00, 0x00, 0xD8, 0x62, 0x00]
        );
        assert_eq!(encode_wide(&units, Encoding::Latin1), vec![0x61, 0x00, 0x62]);
    }

    #[test]
    fn btoa_and_atob() {
        assert_eq!(btoa("hello").as_deref(), Some("aGVsbG8="));
        assert_eq!(btoa("\u{FF}").as_deref(), Some("/w=="));
        assert_eq!(btoa("€"), None);
        assert_eq!(atob("aGVsbG8="), "hello");
        assert_eq!(atob("/w"), "\u{FF}");
    }

    #[test]
    fn encode_into_leaves_tail_untouched() {
        let mut dst = [0xAA; 4];
        assert_eq!(encode_into("ab", &mut dst, Encoding::Utf8), 2);
        assert_eq!(dst, [b'a', b'b', 0xAA, 0xAA]);
    }
}
