//! Fixed-capacity byte storage shared by views.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// A contiguous, fixed-capacity block of bytes.
///
/// Arenas never grow or shrink after creation. They are always handed out
/// behind an `Rc` so that any number of [`View`](crate::View)s can alias
/// them; the memory is freed when the last `Rc` is dropped.
pub struct Arena {
    /// Backing storage. Allocated to full capacity at creation.
    bytes: RefCell<Box<[u8]>>,
    /// Cached length of `bytes`, readable while a mutable borrow is live.
    capacity: usize,
}

impl Arena {
    /// Allocate a zero-filled arena of `capacity` bytes.
    pub fn zeroed(capacity: usize) -> Rc<Self> {
        Self::from_vec(vec![0; capacity])
    }

    /// Take ownership of `bytes` as a new arena.
    pub fn from_vec(bytes: Vec<u8>) -> Rc<Self> {
        let capacity = bytes.len();
        Rc::new(Self {
            bytes: RefCell::new(bytes.into_boxed_slice()),
            capacity,
        })
    }

    /// Capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Shared access to the whole arena.
    ///
    /// # Panics
    ///
    /// Panics if the arena is currently borrowed mutably, i.e. when called
    /// from inside a [`View::with_bytes_mut`](crate::View::with_bytes_mut)
    /// closure over the same arena.
    pub(crate) fn bytes(&self) -> Ref<'_, [u8]> {
        Ref::map(self.bytes.borrow(), |b| &**b)
    }

    /// Exclusive access to the whole arena.
    ///
    /// # Panics
    ///
    /// Panics if the arena is already borrowed.
    pub(crate) fn bytes_mut(&self) -> RefMut<'_, [u8]> {
        RefMut::map(self.bytes.borrow_mut(), |b| &mut **b)
    }

    /// Exclusive access, or `None` if the arena is borrowed right now.
    pub(crate) fn try_bytes_mut(&self) -> Option<RefMut<'_, [u8]>> {
        self.bytes
            .try_borrow_mut()
            .ok()
            .map(|b| RefMut::map(b, |b| &mut **b))
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
