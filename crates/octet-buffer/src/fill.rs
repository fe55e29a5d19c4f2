//! Repeating a pattern across a range.

use octet_arena::view::normalize_range;
use octet_core::{Arg, BufferError};

use crate::buffer::Buffer;
use crate::pattern::{Pattern, PatternBytes};

impl Buffer {
    /// Repeat `pattern` across `[start, end)`.
    ///
    /// The range is normalised like [`Buffer::slice`]: negative indices
    /// count from the end and out-of-range indices clamp. The last
    /// repetition is truncated at `end`. An empty pattern or empty range
    /// leaves the bytes untouched.
    pub fn fill<'a>(
        &self,
        pattern: impl Into<Pattern<'a>>,
        start: impl Into<Arg>,
        end: impl Into<Arg>,
    ) -> Result<&Self, BufferError> {
        let (start, end) = normalize_range(self.len(), &start.into(), &end.into())?;
        let pattern = pattern.into().to_bytes();
        self.fill_range(&pattern, start, end);
        Ok(self)
    }

    fn fill_range(&self, pattern: &PatternBytes, start: usize, end: usize) {
        if pattern.is_empty() || start >= end {
            return;
        }
        self.view().with_bytes_mut(|bytes| repeat_into(&mut bytes[start..end], pattern));
    }
}

/// `size` bytes of `pattern` repeated, the last repetition truncated.
/// An empty pattern yields zeros.
pub(crate) fn repeat_pattern<'a>(size: usize, pattern: impl Into<Pattern<'a>>) -> Vec<u8> {
    let pattern = pattern.into().to_bytes();
    let mut out = vec![0; size];
    if !pattern.is_empty() {
        repeat_into(&mut out, &pattern);
    }
    out
}

fn repeat_into(target: &mut [u8], pattern: &[u8]) {
    if let [b] = pattern {
        target.fill(*b);
        return;
    }
    for chunk in target.chunks_mut(pattern.len()) {
        chunk.copy_from_slice(&pattern[..chunk.len()]);
    }
}
