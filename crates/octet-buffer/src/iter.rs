//! Lazy index, byte, and pair sequences.
//!
//! Each iterator is a cursor `(buffer, next index)`. Bytes are read on
//! every pull, so writes made during iteration are observed. Once
//! exhausted an iterator keeps returning `None`; call the constructor
//! again for a fresh pass.

use std::iter::FusedIterator;

use crate::buffer::Buffer;

/// Iterator over the indices `0..len`.
#[derive(Clone, Debug)]
pub struct Keys {
    next: usize,
    len: usize,
}

/// Iterator over the byte values.
#[derive(Clone, Debug)]
pub struct Values {
    buffer: Buffer,
    next: usize,
}

/// Iterator over `(index, byte)` pairs.
#[derive(Clone, Debug)]
pub struct Entries {
    buffer: Buffer,
    next: usize,
}

impl Buffer {
    /// The index sequence.
    pub fn keys(&self) -> Keys {
        Keys {
            next: 0,
            len: self.len(),
        }
    }

    /// The byte-value sequence.
    pub fn values(&self) -> Values {
        Values {
            buffer: self.clone(),
            next: 0,
        }
    }

    /// The `(index, byte)` sequence.
    pub fn entries(&self) -> Entries {
        Entries {
            buffer: self.clone(),
            next: 0,
        }
    }
}

impl Iterator for Keys {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next >= self.len {
            return None;
        }
        self.next += 1;
        Some(self.next - 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.next.min(self.len);
        (n, Some(n))
    }
}

impl Iterator for Values {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let byte = self.buffer.get(self.next)?;
        self.next += 1;
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.buffer.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl Iterator for Entries {
    type Item = (usize, u8);

    fn next(&mut self) -> Option<(usize, u8)> {
        let byte = self.buffer.get(self.next)?;
        self.next += 1;
        Some((self.next - 1, byte))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.buffer.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Keys {}
impl ExactSizeIterator for Values {}
impl ExactSizeIterator for Entries {}

impl FusedIterator for Keys {}
impl FusedIterator for Values {}
impl FusedIterator for Entries {}

impl IntoIterator for &Buffer {
    type Item = u8;
    type IntoIter = Values;

    fn into_iter(self) -> Values {
        self.values()
    }
}
