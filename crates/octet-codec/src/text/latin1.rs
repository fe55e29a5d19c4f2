//! Single-byte encodings: Latin-1 and ASCII.
//!
//! Both encode one byte per UTF-16 code unit, keeping the low eight
//! bits. Latin-1 decodes every byte to the code point of the same value;
//! ASCII masks each byte to seven bits first.

pub(crate) fn byte_length(text: &str) -> usize {
    text.encode_utf16().count()
}

pub(crate) fn encode(text: &str) -> Vec<u8> {
    text.encode_utf16().map(|u| u as u8).collect()
}

pub(crate) fn encode_units(units: &[u16]) -> Vec<u8> {
    units.iter().map(|&u| u as u8).collect()
}

pub(crate) fn encode_into(text: &str, dst: &mut [u8]) -> usize {
    let mut written = 0;
    for (slot, unit) in dst.iter_mut().zip(text.encode_utf16()) {
        *slot = unit as u8;
        written += 1;
    }
    written
}

pub(crate) fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

pub(crate) fn decode_ascii(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b & 0x7F)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_round_trips_every_byte() {
        let all: Vec<u8> = (0..=255).collect();
        assert_eq!(encode(&decode_latin1(&all)), all);
    }

    #[test]
    fn ascii_masks_high_bit() {
        assert_eq!(decode_ascii(&[0xE9, 0x41]), "iA");
    }

    #[test]
    fn wide_characters_keep_low_byte() {
        // U+20AC EURO SIGN -> 0xAC
        assert_eq!(encode("€"), vec![0xAC]);
        // Astral characters are two code units, hence two bytes.
        assert_eq!(byte_length("😀"), 2);
    }

    #[test]
    fn encode_into_stops_at_capacity() {
        let mut dst = [0u8; 2];
        assert_eq!(encode_into("abc", &mut dst), 2);
        assert_eq!(&dst, b"ab");
    }
}
