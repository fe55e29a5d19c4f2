//! Byte patterns for search and fill.

use octet_core::Encoding;
use smallvec::SmallVec;

use crate::buffer::Buffer;

/// Bytes materialised from a [`Pattern`]. Short patterns stay inline.
pub(crate) type PatternBytes = SmallVec<[u8; 16]>;

/// A needle for [`Buffer::search`] or a fill pattern for [`Buffer::fill`].
#[derive(Clone, Copy, Debug)]
pub enum Pattern<'a> {
    /// A single byte value.
    Byte(u8),
    /// Text, encoded under the given encoding.
    Text(&'a str, Encoding),
    /// Raw bytes.
    Bytes(&'a [u8]),
    /// The current contents of another buffer.
    Buffer(&'a Buffer),
}

impl Pattern<'_> {
    /// Encode the pattern into owned bytes.
    ///
    /// Taken before any mutable borrow of the target, so a pattern that
    /// aliases the target's arena reads its pre-mutation contents.
    pub(crate) fn to_bytes(self) -> PatternBytes {
        match self {
            Self::Byte(b) => smallvec::smallvec![b],
            Self::Text(text, encoding) => PatternBytes::from_vec(octet_codec::text::encode(text, encoding)),
            Self::Bytes(bytes) => PatternBytes::from_slice(bytes),
            Self::Buffer(buf) => buf.view().with_bytes(PatternBytes::from_slice),
        }
    }
}

impl From<u8> for Pattern<'_> {
    fn from(b: u8) -> Self {
        Self::Byte(b)
    }
}

impl<'a> From<&'a str> for Pattern<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text, Encoding::Utf8)
    }
}

impl<'a> From<&'a [u8]> for Pattern<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Pattern<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Buffer> for Pattern<'a> {
    fn from(buf: &'a Buffer) -> Self {
        Self::Buffer(buf)
    }
}
