//! Memmove-safe copy between buffers.

use octet_core::{Arg, BufferError};

use crate::buffer::Buffer;

impl Buffer {
    /// Copy `self[source_start..source_end]` into `target` at `target_start`.
    ///
    /// Correct when `self` and `target` alias the same arena with
    /// overlapping ranges in either direction. Indices default to `0`,
    /// `0` and `self.len()`; indices past a buffer's length clamp to it,
    /// but negative indices are bounds errors. Returns the number of
    /// bytes copied, limited by both the source range and the room left
    /// in `target`.
    pub fn copy(
        &self,
        target: &Buffer,
        target_start: impl Into<Arg>,
        source_start: impl Into<Arg>,
        source_end: impl Into<Arg>,
    ) -> Result<usize, BufferError> {
        let target_start = target_start.into().to_index("targetStart", 0)?;
        let source_start = source_start.into().to_index("sourceStart", 0)?;
        let source_end = source_end.into().to_index("sourceEnd", self.len())?;
        Ok(self
            .view()
            .copy_to(target.view(), target_start, source_start, source_end))
    }
}
