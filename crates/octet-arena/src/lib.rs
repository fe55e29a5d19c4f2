//! Byte arenas and zero-copy views.
//!
//! An [`Arena`] is a fixed-capacity block of bytes allocated once. A
//! [`View`] is an `(arena, offset, len)` window onto it; views over the
//! same arena alias each other, so a write through one is visible through
//! every other view that covers the same bytes.
//!
//! # Architecture
//!
//! ```text
//! BufferPool (bump allocator, thread-local default)
//! ├── slab: Rc<Arena>  (pool_size bytes, carved into small views)
//! └── dedicated Rc<Arena> per allocation >= threshold
//!
//! View { Rc<Arena>, offset, len }
//! └── subview() → View over the same Rc<Arena> (no copy)
//! ```
//!
//! Arenas are reference counted: the backing memory is released exactly
//! when the last view over it is dropped. Interior mutability is a
//! `RefCell`, so views are `!Send`; a view is meant to be driven from a
//! single logical thread.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod pool;
pub mod view;

pub use arena::Arena;
pub use config::PoolConfig;
pub use pool::{alloc_dedicated, alloc_pooled, alloc_pooled_copy, BufferPool};
pub use view::View;
