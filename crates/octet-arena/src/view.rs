//! Zero-copy `(arena, offset, len)` windows.

use std::fmt;
use std::rc::Rc;

use octet_core::{Arg, BufferError};

use crate::arena::Arena;

/// A window of `len` bytes starting at `offset` within an [`Arena`].
///
/// All indices taken by view methods are relative to the view, never to
/// the arena. Cloning a view clones the window, not the bytes: both
/// clones alias the same memory. The length is fixed for the lifetime of
/// the view.
#[derive(Clone)]
pub struct View {
    arena: Rc<Arena>,
    offset: usize,
    len: usize,
}

impl View {
    /// Create a view over `arena[offset..offset + len]`.
    ///
    /// Fails with [`BufferError::OutOfBounds`] if the window does not fit
    /// inside the arena.
    pub fn new(arena: Rc<Arena>, offset: usize, len: usize) -> Result<Self, BufferError> {
        let capacity = arena.capacity();
        if offset > capacity {
            return Err(BufferError::out_of_bounds("offset", offset, capacity));
        }
        if len > capacity - offset {
            return Err(BufferError::out_of_bounds("length", len, capacity - offset));
        }
        Ok(Self { arena, offset, len })
    }

    /// A view covering the whole of `arena`.
    pub fn whole(arena: Rc<Arena>) -> Self {
        let len = arena.capacity();
        Self {
            arena,
            offset: 0,
            len,
        }
    }

    /// A view over a fresh arena that takes ownership of `bytes`.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self::whole(Arena::from_vec(bytes))
    }

    /// Construct without bounds checking. Callers guarantee the window fits.
    pub(crate) fn from_parts(arena: Rc<Arena>, offset: usize, len: usize) -> Self {
        debug_assert!(offset + len <= arena.capacity());
        Self { arena, offset, len }
    }

    /// Length of the view in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the view is zero-length.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Starting offset of the view within its arena.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The backing arena.
    pub fn arena(&self) -> &Rc<Arena> {
        &self.arena
    }

    /// Whether `self` and `other` are backed by the same arena.
    pub fn shares_arena(&self, other: &View) -> bool {
        Rc::ptr_eq(&self.arena, &other.arena)
    }

    /// Run `f` over the view's bytes.
    ///
    /// # Panics
    ///
    /// Panics if called from inside [`View::with_bytes_mut`] on a view
    /// that shares this arena. Unrelated small buffers from the same
    /// [`BufferPool`](crate::BufferPool) slab share an arena too; see
    /// [`View::shares_arena`]. Allocating through
    /// [`alloc_pooled_copy`](crate::alloc_pooled_copy) inside `f` is fine.
    pub fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        let bytes = self.arena.bytes();
        f(&bytes[self.offset..self.offset + self.len])
    }

    /// Run `f` over the view's bytes mutably.
    ///
    /// # Panics
    ///
    /// Panics if the arena is already borrowed, i.e. when nested inside
    /// another `with_bytes*` call on a view that shares this arena,
    /// including any other view carved from the same pool slab.
    pub fn with_bytes_mut<R>(&self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        let mut bytes = self.arena.bytes_mut();
        f(&mut bytes[self.offset..self.offset + self.len])
    }

    /// Byte at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<u8> {
        if index >= self.len {
            return None;
        }
        Some(self.arena.bytes()[self.offset + index])
    }

    /// Overwrite the byte at `index`. Returns `false` past the end.
    pub fn set(&self, index: usize, value: u8) -> bool {
        if index >= self.len {
            return false;
        }
        self.arena.bytes_mut()[self.offset + index] = value;
        true
    }

    /// Copy the view's bytes into a new `Vec`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.with_bytes(<[u8]>::to_vec)
    }

    /// A view over `[start, end)` of this view, sharing the arena.
    ///
    /// Indices clamp to `[0, len]`; `start >= end` yields an empty view.
    pub fn subview(&self, start: usize, end: usize) -> View {
        let end = end.min(self.len);
        let start = start.min(end);
        Self::from_parts(Rc::clone(&self.arena), self.offset + start, end - start)
    }

    /// A view over a host-supplied `[start, end)` range, sharing the arena.
    ///
    /// Negative indices count from the end; out-of-range indices clamp.
    /// Only wrong-kind or fractional indices fail.
    pub fn slice(&self, start: impl Into<Arg>, end: impl Into<Arg>) -> Result<View, BufferError> {
        let (start, end) = normalize_range(self.len, &start.into(), &end.into())?;
        Ok(self.subview(start, end))
    }

    /// Copy `self[source_start..source_end]` into `target` at `target_start`.
    ///
    /// Behaves like `memmove`: when both views share an arena and the
    /// ranges overlap, the result equals copying through a temporary
    /// buffer. Ranges clamp to both views' lengths. Returns the number of
    /// bytes copied.
    pub fn copy_to(
        &self,
        target: &View,
        target_start: usize,
        source_start: usize,
        source_end: usize,
    ) -> usize {
        let source_end = source_end.min(self.len);
        if source_start >= source_end || target_start >= target.len {
            return 0;
        }
        let count = (source_end - source_start).min(target.len - target_start);
        let src = self.offset + source_start;
        let dst = target.offset + target_start;

        if self.shares_arena(target) {
            let mut bytes = self.arena.bytes_mut();
            bytes.copy_within(src..src + count, dst);
        } else {
            let from = self.arena.bytes();
            let mut to = target.arena.bytes_mut();
            to[dst..dst + count].copy_from_slice(&from[src..src + count]);
        }
        count
    }
}

/// Resolve host `start`/`end` arguments against a length.
///
/// Defaults are `0` and `len`. Negative values count from the end, the
/// result is clamped to `[0, len]`, and `end` is raised to `start` so the
/// range is never inverted.
pub fn normalize_range(len: usize, start: &Arg, end: &Arg) -> Result<(usize, usize), BufferError> {
    let start = start.to_relative_index("start", len, 0)?;
    let end = end.to_relative_index("end", len, len)?;
    Ok((start, end.max(start)))
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("offset", &self.offset)
            .field("len", &self.len)
            .field("arena_capacity", &self.arena.capacity())
            .finish()
    }
}
