//! Error types for octet buffers.
//!
//! Every failure maps onto one of four stable kinds (see [`ErrorKind`]).
//! Callers that implement retry or validation logic should match on
//! [`BufferError::kind`] rather than on individual variants, which may
//! grow over time.

use std::error::Error;
use std::fmt;

/// Stable discriminant for the four classes of caller misuse.
///
/// Legitimate negative results (pattern not found, clamped range,
/// unknown registry reference) are never errors; they are reported
/// through sentinel return values instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument had the wrong kind (e.g. text where a number was required).
    TypeMismatch,
    /// A size, offset, or range was negative, fractional, or beyond capacity.
    Bounds,
    /// A value of the right kind is not representable at the requested width.
    ValueRange,
    /// An encoding name or opaque reference could not be recognised.
    Format,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::TypeMismatch => "type mismatch",
            Self::Bounds => "out of bounds",
            Self::ValueRange => "value out of range",
            Self::Format => "format",
        };
        f.write_str(s)
    }
}

/// Errors raised by buffer construction, codecs, and byte algorithms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// An argument was not of the expected kind.
    InvalidArgType {
        /// Name of the offending argument.
        name: &'static str,
        /// What the argument should have been.
        expected: &'static str,
        /// Description of what was actually supplied.
        received: String,
    },
    /// An allocation size was negative, fractional, non-finite, or too large.
    InvalidSize {
        /// Description of the rejected size.
        size: String,
    },
    /// An offset or index fell outside the permitted range.
    OutOfBounds {
        /// Name of the offending argument.
        name: &'static str,
        /// Description of the rejected value.
        value: String,
        /// Largest permitted value.
        limit: usize,
    },
    /// A byte-swap was requested on a view whose length is not a
    /// multiple of the group width.
    InvalidBufferSize {
        /// Required group width in bytes.
        width: usize,
        /// Actual view length in bytes.
        len: usize,
    },
    /// A value cannot be represented at the requested width.
    ValueOutOfRange {
        /// Name of the offending argument.
        name: &'static str,
        /// Description of the rejected value.
        value: String,
        /// Human-readable description of the accepted range.
        range: String,
    },
    /// The encoding name is not in the alias table.
    UnknownEncoding {
        /// The unrecognised name, as supplied.
        name: String,
    },
    /// A structured (JSON-shaped) value did not describe a binary buffer.
    InvalidJsonShape {
        /// Description of the shape mismatch.
        reason: String,
    },
}

impl BufferError {
    /// The stable error class for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgType { .. } => ErrorKind::TypeMismatch,
            Self::InvalidSize { .. } | Self::OutOfBounds { .. } | Self::InvalidBufferSize { .. } => {
                ErrorKind::Bounds
            }
            Self::ValueOutOfRange { .. } => ErrorKind::ValueRange,
            Self::UnknownEncoding { .. } | Self::InvalidJsonShape { .. } => ErrorKind::Format,
        }
    }

    /// Shorthand for [`BufferError::OutOfBounds`].
    pub fn out_of_bounds(name: &'static str, value: impl fmt::Display, limit: usize) -> Self {
        Self::OutOfBounds {
            name,
            value: value.to_string(),
            limit,
        }
    }
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgType {
                name,
                expected,
                received,
            } => write!(f, "argument '{name}' must be {expected}, received {received}"),
            Self::InvalidSize { size } => {
                write!(f, "invalid buffer size {size}: must be a non-negative integer")
            }
            Self::OutOfBounds { name, value, limit } => {
                write!(f, "'{name}' out of bounds: received {value}, must be within 0..={limit}")
            }
            Self::InvalidBufferSize { width, len } => {
                write!(f, "buffer size {len} must be a multiple of {width} bytes")
            }
            Self::ValueOutOfRange { name, value, range } => {
                write!(f, "'{name}' out of range: received {value}, accepted {range}")
            }
            Self::UnknownEncoding { name } => write!(f, "unknown encoding: {name}"),
            Self::InvalidJsonShape { reason } => write!(f, "invalid binary JSON shape: {reason}"),
        }
    }
}

impl Error for BufferError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_to_a_kind() {
        let cases = [
            (
                BufferError::InvalidArgType {
                    name: "size",
                    expected: "a number",
                    received: "text".into(),
                },
                ErrorKind::TypeMismatch,
            ),
            (
                BufferError::InvalidSize { size: "-1".into() },
                ErrorKind::Bounds,
            ),
            (BufferError::out_of_bounds("offset", 9, 4), ErrorKind::Bounds),
            (
                BufferError::InvalidBufferSize { width: 4, len: 3 },
                ErrorKind::Bounds,
            ),
            (
                BufferError::ValueOutOfRange {
                    name: "value",
                    value: "256".into(),
                    range: "0..=255".into(),
                },
                ErrorKind::ValueRange,
            ),
            (
                BufferError::UnknownEncoding {
                    name: "utf-9".into(),
                },
                ErrorKind::Format,
            ),
            (
                BufferError::InvalidJsonShape {
                    reason: "missing data".into(),
                },
                ErrorKind::Format,
            ),
        ];
        for (err, kind) in cases {
            assert_eq!(err.kind(), kind, "{err}");
        }
    }

    #[test]
    fn display_names_the_argument() {
        let err = BufferError::out_of_bounds("offset", 9, 4);
        let msg = err.to_string();
        assert!(msg.contains("offset"));
        assert!(msg.contains('9'));
    }
}
