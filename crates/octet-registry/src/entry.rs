//! Registry entries.

use std::sync::Arc;
use std::time::SystemTime;

/// A registered object: a byte snapshot plus its metadata.
#[derive(Clone, Debug)]
pub(crate) struct Entry {
    pub(crate) bytes: Arc<[u8]>,
    pub(crate) type_tag: String,
    pub(crate) created_at: SystemTime,
}

impl Entry {
    pub(crate) fn new(bytes: Vec<u8>, type_tag: &str) -> Self {
        Self {
            bytes: bytes.into(),
            type_tag: normalize_type_tag(type_tag),
            created_at: SystemTime::now(),
        }
    }

    pub(crate) fn info(&self) -> BlobInfo {
        BlobInfo {
            type_tag: self.type_tag.clone(),
            size: self.bytes.len(),
            created_at: self.created_at,
        }
    }
}

/// What [`Registry::resolve`](crate::Registry::resolve) reports about a
/// live entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlobInfo {
    /// Normalised MIME-like type tag; empty when none was usable.
    pub type_tag: String,
    /// Size of the registered bytes.
    pub size: usize,
    /// When the entry was created.
    pub created_at: SystemTime,
}

/// Lower-case `tag`, or return `""` if it holds anything but printable ASCII.
pub fn normalize_type_tag(tag: &str) -> String {
    if tag.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
        tag.to_ascii_lowercase()
    } else {
        String::new()
    }
}
