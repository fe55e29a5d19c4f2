//! Reusable test inputs.
//!
//! - [`SAMPLE_TEXTS`]: strings covering 1- to 4-byte UTF-8.
//! - [`all_byte_values`]: every byte value in ascending order.
//! - [`SparseArray`]: an array-like with holes, like a host object with
//!   numeric keys and a `length`.

use std::collections::HashMap;

use octet_core::{Arg, ArrayLike};

/// Strings exercising every UTF-8 sequence length.
pub const SAMPLE_TEXTS: &[&str] = &[
    "",
    "hello",
    "hello world",
    "café",
    "naïve résumé",
    "€100",
    "日本語テキスト",
    "😀 grinning",
    "mixed: a é € 😀",
    "line\nbreak\ttab",
];

/// `[0, 1, ..., 255]`.
pub fn all_byte_values() -> Vec<u8> {
    (0..=255).collect()
}

/// Array-like whose unset indices read as [`Arg::Undefined`].
#[derive(Clone, Debug, Default)]
pub struct SparseArray {
    pub length: usize,
    pub items: HashMap<usize, Arg>,
}

impl SparseArray {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            items: HashMap::new(),
        }
    }

    pub fn with(mut self, index: usize, value: impl Into<Arg>) -> Self {
        self.items.insert(index, value.into());
        self
    }
}

impl ArrayLike for SparseArray {
    fn length(&self) -> usize {
        self.length
    }

    fn element(&self, index: usize) -> Arg {
        self.items.get(&index).cloned().unwrap_or_default()
    }
}
