//! Text, JSON, and inspection rendering.

use std::fmt;

use octet_arena::view::normalize_range;
use octet_core::{Arg, BufferError, Encoding, INSPECT_MAX_BYTES};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::buffer::Buffer;

/// The tag carried by [`BinaryJson::kind`].
pub const BINARY_KIND: &str = "binary";

/// Structured form of a buffer: `{"kind": "binary", "data": [..]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryJson {
    /// Always [`BINARY_KIND`] for values produced by [`Buffer::to_json`].
    pub kind: String,
    /// Byte values in order.
    pub data: Vec<u8>,
}

impl Buffer {
    /// Decode `[start, end)` as text.
    ///
    /// The range is normalised like [`Buffer::slice`], so out-of-range
    /// indices clamp instead of failing.
    pub fn to_text(
        &self,
        encoding: Encoding,
        start: impl Into<Arg>,
        end: impl Into<Arg>,
    ) -> Result<String, BufferError> {
        let (start, end) = normalize_range(self.len(), &start.into(), &end.into())?;
        Ok(self
            .view()
            .with_bytes(|bytes| octet_codec::text::decode(&bytes[start..end], encoding)))
    }

    /// Decode the whole buffer as text.
    pub fn decode(&self, encoding: Encoding) -> String {
        self.view()
            .with_bytes(|bytes| octet_codec::text::decode(bytes, encoding))
    }

    /// Encode `text` into the buffer at `offset`, writing at most `length`
    /// bytes.
    ///
    /// `offset` defaults to `0` and must not exceed the length. `length`
    /// defaults to, and is clamped to, the room left after `offset`. Only
    /// whole characters are written. Returns the number of bytes written.
    pub fn write_text(
        &self,
        text: &str,
        offset: impl Into<Arg>,
        length: impl Into<Arg>,
        encoding: Encoding,
    ) -> Result<usize, BufferError> {
        let len = self.len();
        let offset = offset.into().to_index("offset", 0)?;
        if offset > len {
            return Err(BufferError::out_of_bounds("offset", offset, len));
        }
        let room = len - offset;
        let length = length.into().to_index("length", room)?.min(room);
        Ok(self.view().with_bytes_mut(|bytes| {
            octet_codec::text::encode_into(text, &mut bytes[offset..offset + length], encoding)
        }))
    }

    /// The structured form. Each call returns an independent value.
    pub fn to_json(&self) -> BinaryJson {
        BinaryJson {
            kind: BINARY_KIND.to_string(),
            data: self.to_vec(),
        }
    }

    /// Rebuild a buffer from its structured form.
    ///
    /// Fails with [`BufferError::InvalidJsonShape`] unless `kind` is
    /// `"binary"`.
    pub fn from_json(json: &BinaryJson) -> Result<Self, BufferError> {
        if json.kind != BINARY_KIND {
            return Err(BufferError::InvalidJsonShape {
                reason: format!("expected kind \"{BINARY_KIND}\", found \"{}\"", json.kind),
            });
        }
        Ok(Self::from_bytes(&json.data))
    }
}

impl Serialize for Buffer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Buffer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = BinaryJson::deserialize(deserializer)?;
        Buffer::from_json(&json).map_err(serde::de::Error::custom)
    }
}

/// `<Buffer 68 65 6c 6c 6f>`, eliding bytes past [`INSPECT_MAX_BYTES`].
impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.view().with_bytes(|bytes| {
            f.write_str("<Buffer")?;
            for b in bytes.iter().take(INSPECT_MAX_BYTES) {
                write!(f, " {b:02x}")?;
            }
            if bytes.len() > INSPECT_MAX_BYTES {
                write!(f, " ... {} more bytes", bytes.len() - INSPECT_MAX_BYTES)?;
            }
            f.write_str(">")
        })
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
