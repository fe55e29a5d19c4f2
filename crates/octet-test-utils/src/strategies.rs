//! Proptest strategies.

use octet_core::Encoding;
use proptest::prelude::*;

/// Any string of printable (non-control) code points.
pub fn printable_text() -> impl Strategy<Value = String> {
    "\\PC{0,64}"
}

/// Printable text restricted to code points below U+0100.
pub fn latin1_text() -> impl Strategy<Value = String> {
    prop::collection::vec(0x20u8..=0xFF, 0..64)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
}

/// Printable ASCII text.
pub fn ascii_text() -> impl Strategy<Value = String> {
    "[ -~]{0,64}"
}

/// Byte vectors up to `max` long.
pub fn bytes(max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max)
}

/// Any supported encoding.
pub fn encoding() -> impl Strategy<Value = Encoding> {
    prop::sample::select(Encoding::ALL.to_vec())
}
