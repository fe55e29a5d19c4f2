//! The [`Buffer`] type: construction, allocation, and slicing.

use std::rc::Rc;

use octet_arena::{alloc_dedicated, alloc_pooled, alloc_pooled_copy, Arena, View};
use octet_core::{Arg, ArrayLike, BufferError, Encoding};

use crate::fill::repeat_pattern;
use crate::pattern::Pattern;

/// A fixed-length, byte-addressable block of memory.
///
/// A `Buffer` is a [`View`] over a reference-counted arena. Cloning a
/// buffer, slicing it, or taking a [`subview`](Buffer::subview) yields
/// another window over the *same* bytes; writes through any of them are
/// visible through all. Use [`Buffer::copy_from`] for an independent copy.
///
/// Buffers are `!Send`: a buffer and its aliases belong to one logical
/// thread of execution.
#[derive(Clone)]
pub struct Buffer {
    view: View,
}

impl Buffer {
    // ── Allocation ──────────────────────────────────────────────

    /// Allocate `size` zero-filled bytes in a dedicated arena.
    ///
    /// `size` must be a non-negative integer no greater than
    /// [`MAX_LENGTH`](octet_core::MAX_LENGTH).
    pub fn alloc(size: impl Into<Arg>) -> Result<Self, BufferError> {
        let size = size.into().to_size()?;
        Ok(Self::from_view(alloc_dedicated(size)))
    }

    /// Allocate `size` bytes in a dedicated arena and repeat `pattern`
    /// across them.
    ///
    /// An empty pattern leaves the buffer zero-filled.
    pub fn alloc_filled<'a>(size: impl Into<Arg>, pattern: impl Into<Pattern<'a>>) -> Result<Self, BufferError> {
        let size = size.into().to_size()?;
        Ok(Self::from_view(View::from_vec(repeat_pattern(size, pattern))))
    }

    /// Allocate `size` bytes with unspecified contents.
    ///
    /// Small sizes are carved from this thread's shared pool slab.
    pub fn alloc_unsafe(size: impl Into<Arg>) -> Result<Self, BufferError> {
        let size = size.into().to_size()?;
        Ok(Self::from_view(alloc_pooled(size)))
    }

    /// Like [`Buffer::alloc_unsafe`], with `pattern` repeated across the
    /// bytes. An empty pattern zero-fills.
    pub fn alloc_unsafe_filled<'a>(
        size: impl Into<Arg>,
        pattern: impl Into<Pattern<'a>>,
    ) -> Result<Self, BufferError> {
        let size = size.into().to_size()?;
        Ok(Self::from_view(alloc_pooled_copy(&repeat_pattern(size, pattern))))
    }

    /// Allocate `size` bytes with unspecified contents, never pooled.
    pub fn alloc_unsafe_slow(size: impl Into<Arg>) -> Result<Self, BufferError> {
        let size = size.into().to_size()?;
        Ok(Self::from_view(alloc_dedicated(size)))
    }

    /// Like [`Buffer::alloc_unsafe_slow`], with `pattern` repeated across
    /// the bytes. An empty pattern zero-fills.
    pub fn alloc_unsafe_slow_filled<'a>(
        size: impl Into<Arg>,
        pattern: impl Into<Pattern<'a>>,
    ) -> Result<Self, BufferError> {
        Self::alloc_filled(size, pattern)
    }

    // ── Construction ────────────────────────────────────────────

    /// Wrap an existing view without copying.
    pub fn from_view(view: View) -> Self {
        Self { view }
    }

    /// A new buffer holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_view(alloc_pooled_copy(bytes))
    }

    /// A new buffer holding `text` encoded under `encoding`.
    pub fn from_text(text: &str, encoding: Encoding) -> Self {
        Self::from_bytes(&octet_codec::text::encode(text, encoding))
    }

    /// A new buffer with each element of `source` coerced to a byte.
    pub fn from_array_like<A: ArrayLike + ?Sized>(source: &A) -> Self {
        Self::from_bytes(&source.to_bytes())
    }

    /// A deep copy of `other`. Later writes to either are not shared.
    pub fn copy_from(other: &Buffer) -> Self {
        other.view.with_bytes(Self::from_bytes)
    }

    /// A buffer sharing `arena[offset..offset + length]` without copying.
    ///
    /// `offset` defaults to `0` and `length` to the rest of the arena.
    pub fn from_arena(
        arena: Rc<Arena>,
        offset: impl Into<Arg>,
        length: impl Into<Arg>,
    ) -> Result<Self, BufferError> {
        let capacity = arena.capacity();
        let offset = offset.into().to_offset("offset", capacity, 0)?;
        let length = match length.into() {
            Arg::Undefined => capacity - offset,
            other => other.to_offset("length", capacity - offset, 0)?,
        };
        Ok(Self::from_view(View::new(arena, offset, length)?))
    }

    /// Concatenate `list` into one fresh buffer.
    ///
    /// `total_length` defaults to the sum of the input lengths. A shorter
    /// total truncates the result; a longer one zero-fills the remainder.
    pub fn concat(list: &[Buffer], total_length: impl Into<Arg>) -> Result<Self, BufferError> {
        let total = match total_length.into() {
            Arg::Undefined => list.iter().map(Buffer::len).sum(),
            other => other.to_size()?,
        };
        let mut out = Vec::with_capacity(total);
        for buf in list {
            let room = total - out.len();
            if room == 0 {
                break;
            }
            buf.view
                .with_bytes(|bytes| out.extend_from_slice(&bytes[..bytes.len().min(room)]));
        }
        out.resize(total, 0);
        Ok(Self::from_bytes(&out))
    }

    // ── Static helpers ──────────────────────────────────────────

    /// Bytes `text` would occupy under `encoding`.
    pub fn byte_length(text: &str, encoding: Encoding) -> usize {
        octet_codec::text::byte_length(text, encoding)
    }

    /// Whether `name` is a recognised encoding name, ignoring case.
    pub fn is_encoding(name: &str) -> bool {
        Encoding::is_supported(name)
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// Whether the buffer is zero-length.
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// The underlying view.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Unwrap into the underlying view.
    pub fn into_view(self) -> View {
        self.view
    }

    /// Byte at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.view.get(index)
    }

    /// Store `value` (coerced modulo 256) at `index`.
    ///
    /// Returns `false` and writes nothing past the end.
    pub fn set(&self, index: usize, value: impl Into<Arg>) -> bool {
        self.view.set(index, value.into().to_uint8())
    }

    /// Copy the contents into a `Vec`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.view.to_vec()
    }

    /// Whether `self` and `other` are backed by the same arena.
    ///
    /// Pooled buffers can share an arena without overlapping.
    pub fn shares_memory(&self, other: &Buffer) -> bool {
        self.view.shares_arena(&other.view)
    }

    // ── Slicing ─────────────────────────────────────────────────

    /// A zero-copy window over `[start, end)`.
    ///
    /// Negative indices count from the end and out-of-range indices clamp;
    /// `start >= end` gives an empty buffer. Only fractional or
    /// wrong-kind indices fail.
    pub fn slice(&self, start: impl Into<Arg>, end: impl Into<Arg>) -> Result<Buffer, BufferError> {
        self.view.slice(start, end).map(Self::from_view)
    }

    /// A zero-copy window over `[start, end)`, clamped to the length.
    pub fn subview(&self, start: usize, end: usize) -> Buffer {
        Self::from_view(self.view.subview(start, end))
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_view(View::from_vec(bytes))
    }
}

impl From<&str> for Buffer {
    fn from(text: &str) -> Self {
        Self::from_text(text, Encoding::Utf8)
    }
}

impl From<View> for Buffer {
    fn from(view: View) -> Self {
        Self::from_view(view)
    }
}
