//! Pooled allocation of small views.
//!
//! [`BufferPool`] is a bump allocator over a shared slab arena. Requests
//! strictly below the configured threshold are carved from the slab at
//! 8-byte-aligned offsets; larger requests get a dedicated arena. When the
//! slab cannot satisfy a request it is replaced by a fresh one. Views
//! already carved from the old slab keep it alive through their `Rc`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::arena::Arena;
use crate::config::PoolConfig;
use crate::view::View;

/// Bump allocator handing out views over a shared slab.
pub struct BufferPool {
    config: PoolConfig,
    /// Current slab. Replaced, never reset.
    slab: Rc<Arena>,
    /// Next free byte in `slab`, always a multiple of the alignment.
    cursor: usize,
    /// Slabs allocated so far, including the current one.
    slabs: u64,
}

thread_local! {
    static DEFAULT_POOL: RefCell<BufferPool> = RefCell::new(BufferPool::new(PoolConfig::default()));
}

impl BufferPool {
    /// Create a pool with its first slab allocated.
    pub fn new(config: PoolConfig) -> Self {
        let slab = Arena::zeroed(config.pool_size());
        Self {
            config,
            slab,
            cursor: 0,
            slabs: 1,
        }
    }

    /// The pool's configuration.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Bytes still free in the current slab.
    pub fn remaining(&self) -> usize {
        self.slab.capacity() - self.cursor
    }

    /// Number of slabs allocated over the pool's lifetime.
    pub fn slab_count(&self) -> u64 {
        self.slabs
    }

    /// Allocate `size` bytes without initialising them.
    ///
    /// Sizes below [`PoolConfig::threshold`] share the slab; the contents
    /// of the returned view are unspecified. Larger sizes fall through to
    /// [`alloc_dedicated`].
    pub fn alloc(&mut self, size: usize) -> View {
        if size >= self.config.threshold() {
            return alloc_dedicated(size);
        }
        if size > self.remaining() {
            self.replace_slab();
        }
        let view = View::from_parts(Rc::clone(&self.slab), self.cursor, size);
        self.cursor = align_up(self.cursor + size).min(self.slab.capacity());
        view
    }

    /// Allocate a view holding a copy of `bytes`.
    ///
    /// The copy lands in the slab unless the slab is borrowed at this
    /// moment (the caller is inside a `with_bytes*` closure over some other
    /// pooled view); then it gets a dedicated arena instead of panicking.
    pub fn alloc_copy(&mut self, bytes: &[u8]) -> View {
        let view = self.alloc(bytes.len());
        let start = view.offset();
        let written = match view.arena().try_bytes_mut() {
            Some(mut slab) => {
                slab[start..start + bytes.len()].copy_from_slice(bytes);
                true
            }
            None => false,
        };
        if written {
            return view;
        }
        tracing::trace!(len = bytes.len(), "pool slab busy, copying into a dedicated arena");
        View::from_vec(bytes.to_vec())
    }

    fn replace_slab(&mut self) {
        tracing::trace!(
            pool_size = self.config.pool_size(),
            wasted = self.remaining(),
            slabs = self.slabs,
            "replacing exhausted pool slab"
        );
        self.slab = Arena::zeroed(self.config.pool_size());
        self.cursor = 0;
        self.slabs += 1;
    }
}

impl std::fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferPool")
            .field("config", &self.config)
            .field("cursor", &self.cursor)
            .field("slabs", &self.slabs)
            .finish()
    }
}

fn align_up(n: usize) -> usize {
    let a = PoolConfig::ALIGNMENT;
    n.div_ceil(a) * a
}

/// Allocate `size` uninitialised bytes from this thread's default pool.
pub fn alloc_pooled(size: usize) -> View {
    DEFAULT_POOL.with(|pool| pool.borrow_mut().alloc(size))
}

/// Copy `bytes` into a view from this thread's default pool.
///
/// Never panics on a busy slab; see [`BufferPool::alloc_copy`].
pub fn alloc_pooled_copy(bytes: &[u8]) -> View {
    DEFAULT_POOL.with(|pool| pool.borrow_mut().alloc_copy(bytes))
}

/// Allocate `size` zero-filled bytes in a dedicated arena, never pooled.
pub fn alloc_dedicated(size: usize) -> View {
    View::whole(Arena::zeroed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_pool() -> BufferPool {
        BufferPool::new(PoolConfig::new(64).unwrap())
    }

    #[test]
    fn small_allocations_share_a_slab() {
        let mut pool = small_pool();
        let a = pool.alloc(5);
        let b = pool.alloc(3);
        assert!(a.shares_arena(&b));
        assert_eq!(a.offset(), 0);
        assert_eq!(b.offset(), 8);
        assert_eq!(pool.remaining(), 64 - 16);
    }

    #[test]
    fn pooled_views_do_not_overlap() {
        let mut pool = small_pool();
        let a = pool.alloc(7);
        let b = pool.alloc(7);
        a.with_bytes_mut(|bytes| bytes.fill(0xAA));
        b.with_bytes_mut(|bytes| bytes.fill(0xBB));
        assert!(a.to_vec().iter().all(|&x| x == 0xAA));
        assert!(b.to_vec().iter().all(|&x| x == 0xBB));
    }

    #[test]
    fn threshold_sized_allocations_are_dedicated() {
        let mut pool = small_pool();
        let big = pool.alloc(32);
        assert_eq!(big.arena().capacity(), 32);
        assert_eq!(pool.remaining(), 64);
    }

    #[test]
    fn exhausted_slab_is_replaced() {
        let mut pool = small_pool();
        let first = pool.alloc(24);
        let second = pool.alloc(24);
        let third = pool.alloc(24);
        assert!(first.shares_arena(&second));
        assert!(!second.shares_arena(&third));
        assert_eq!(third.offset(), 0);
        assert_eq!(pool.slab_count(), 2);
        // The old slab stays alive through its views.
        first.set(0, 1);
        assert_eq!(first.get(0), Some(1));
    }

    #[test]
    fn zero_length_pooled_allocation() {
        let mut pool = small_pool();
        let empty = pool.alloc(0);
        assert!(empty.is_empty());
        assert_eq!(pool.remaining(), 64);
    }

    #[test]
    fn zeroed_allocation_is_zero_filled() {
        let v = alloc_dedicated(4096);
        assert_eq!(v.len(), 4096);
        assert!(v.to_vec().iter().all(|&b| b == 0));
    }

    #[test]
    fn default_pool_serves_small_requests() {
        let a = alloc_pooled(10);
        let b = alloc_pooled(10);
        assert_eq!(a.len(), 10);
        assert!(a.shares_arena(&b));
        assert!(!alloc_dedicated(10).shares_arena(&a));
    }

    #[test]
    fn copy_into_slab_while_a_neighbour_is_read() {
        let mut pool = small_pool();
        let first = pool.alloc_copy(b"ab");
        let second = first.with_bytes(|bytes| pool.alloc_copy(bytes));
        assert_eq!(second.to_vec(), b"ab");
        assert!(!second.shares_arena(&first));
        // A free slab is used again afterwards.
        let third = pool.alloc_copy(b"cd");
        assert!(third.shares_arena(&first));
        assert_eq!(first.to_vec(), b"ab");
    }

    #[test]
    fn copy_into_slab_while_a_neighbour_is_written() {
        let mut pool = small_pool();
        let first = pool.alloc_copy(&[1, 2, 3]);
        let second = first.with_bytes_mut(|bytes| {
            bytes[0] = 9;
            pool.alloc_copy(&[4, 5])
        });
        assert_eq!(first.to_vec(), vec![9, 2, 3]);
        assert_eq!(second.to_vec(), vec![4, 5]);
    }

    #[test]
    fn default_pool_copy_nested_in_a_read() {
        let a = alloc_pooled_copy(b"xy");
        let b = a.with_bytes(alloc_pooled_copy);
        assert_eq!(b.to_vec(), b"xy");
    }
}
