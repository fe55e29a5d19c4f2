//! Text encodings and the alias table used to resolve them by name.

use std::fmt;
use std::str::FromStr;

use crate::error::BufferError;

/// A text encoding understood by the codec subsystem.
///
/// Names are resolved case-insensitively through a fixed alias table
/// (see [`Encoding::from_name`]). UTF-8 is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// UTF-8. Malformed input decodes to U+FFFD.
    #[default]
    Utf8,
    /// UTF-16 little-endian (alias `ucs2`).
    Utf16Le,
    /// ISO-8859-1: one byte per UTF-16 code unit (alias `binary`).
    Latin1,
    /// 7-bit ASCII. Decoding masks the high bit; encoding keeps the low 8 bits.
    Ascii,
    /// Lower-case hexadecimal, two characters per byte.
    Hex,
    /// Standard Base64 with `=` padding.
    Base64,
    /// URL-safe Base64 without padding.
    Base64Url,
}

/// Alias table: every accepted (lower-case) name and the encoding it selects.
const ALIASES: &[(&str, Encoding)] = &[
    ("utf8", Encoding::Utf8),
    ("utf-8", Encoding::Utf8),
    ("ucs2", Encoding::Utf16Le),
    ("ucs-2", Encoding::Utf16Le),
    ("utf16le", Encoding::Utf16Le),
    ("utf-16le", Encoding::Utf16Le),
    ("latin1", Encoding::Latin1),
    ("binary", Encoding::Latin1),
    ("ascii", Encoding::Ascii),
    ("hex", Encoding::Hex),
    ("base64", Encoding::Base64),
    ("base64url", Encoding::Base64Url),
];

impl Encoding {
    /// Every supported encoding, in canonical-name order.
    pub const ALL: [Encoding; 7] = [
        Encoding::Utf8,
        Encoding::Utf16Le,
        Encoding::Latin1,
        Encoding::Ascii,
        Encoding::Hex,
        Encoding::Base64,
        Encoding::Base64Url,
    ];

    /// Resolve an encoding by name, ignoring ASCII case.
    ///
    /// Returns [`BufferError::UnknownEncoding`] for names outside the
    /// alias table.
    pub fn from_name(name: &str) -> Result<Self, BufferError> {
        ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|&(_, enc)| enc)
            .ok_or_else(|| BufferError::UnknownEncoding {
                name: name.to_string(),
            })
    }

    /// Resolve an optional name, falling back to UTF-8 when absent.
    pub fn resolve(name: Option<&str>) -> Result<Self, BufferError> {
        name.map_or(Ok(Self::default()), Self::from_name)
    }

    /// Whether `name` is a recognised encoding name or alias.
    pub fn is_supported(name: &str) -> bool {
        Self::from_name(name).is_ok()
    }

    /// Canonical name of this encoding.
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Utf16Le => "utf16le",
            Self::Latin1 => "latin1",
            Self::Ascii => "ascii",
            Self::Hex => "hex",
            Self::Base64 => "base64",
            Self::Base64Url => "base64url",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
