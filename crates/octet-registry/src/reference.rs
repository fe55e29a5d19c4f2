//! Opaque reference strings.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::RegistryError;

/// Prefix shared by every reference string.
pub const PREFIX: &str = "blob:octet:";

/// Length of a hyphenated UUID.
const UUID_LEN: usize = 36;

/// A parsed `blob:octet:<uuid>` reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlobRef {
    id: Uuid,
}

impl BlobRef {
    /// A fresh random reference.
    pub(crate) fn generate() -> Self {
        Self { id: Uuid::new_v4() }
    }

    /// Parse a reference string.
    ///
    /// The prefix and length are checked before the UUID is parsed, so
    /// arbitrary strings are rejected without touching any table.
    pub fn parse(s: &str) -> Result<Self, RegistryError> {
        let malformed = || RegistryError::MalformedReference {
            reference: s.to_string(),
        };
        let rest = s.strip_prefix(PREFIX).ok_or_else(malformed)?;
        if rest.len() != UUID_LEN {
            return Err(malformed());
        }
        let id = Uuid::try_parse(rest).map_err(|_| malformed())?;
        Ok(Self { id })
    }

    /// The identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl fmt::Display for BlobRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{}", self.id.hyphenated())
    }
}

impl FromStr for BlobRef {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
