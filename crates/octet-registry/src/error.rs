//! Registry error types.

use std::error::Error;
use std::fmt;

use octet_core::ErrorKind;

/// Errors raised when parsing registry references.
///
/// Lookups themselves never fail; they return `None`. This error only
/// surfaces through [`BlobRef::parse`](crate::BlobRef::parse) for callers
/// that want to tell a malformed reference from an unknown one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// The string does not have the `blob:octet:<uuid>` shape.
    MalformedReference {
        /// The rejected input.
        reference: String,
    },
}

impl RegistryError {
    /// The stable error class for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedReference { .. } => ErrorKind::Format,
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedReference { reference } => {
                write!(f, "malformed blob reference: {reference:?}")
            }
        }
    }
}

impl Error for RegistryError {}
