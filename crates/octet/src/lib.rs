//! Octet: arena-backed binary buffers with text and numeric codecs.
//!
//! This is the facade crate that re-exports the public API of the octet
//! sub-crates. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use octet::prelude::*;
//!
//! let buf = Buffer::alloc(8).unwrap();
//! buf.write_u32_be(0xDEAD_BEEFu32, 0).unwrap();
//! assert_eq!(buf.to_text(Encoding::Hex, 0, 4).unwrap(), "deadbeef");
//!
//! let greeting = Buffer::from_text("hello", Encoding::Utf8);
//! assert_eq!(greeting.index_of("lo", 0).unwrap(), Some(3));
//!
//! let ctx = Context::new();
//! let reference = ctx.registry().create(greeting.view(), "text/plain");
//! assert_eq!(ctx.registry().resolve(&reference).unwrap().size, 5);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `octet-core` | Errors, encodings, host arguments, limits |
//! | [`arena`] | `octet-arena` | Arenas, views, pooled allocation |
//! | [`codec`] | `octet-codec` | Text transcoding and integer bit codecs |
//! | [`buffer`] | `octet-buffer` | The [`Buffer`](buffer::Buffer) type |
//! | [`registry`] | `octet-registry` | Per-context opaque-object registry |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, encodings, host arguments, and limits (`octet-core`).
pub use octet_core as types;

/// Backing storage and views (`octet-arena`).
///
/// Most code goes through [`buffer::Buffer`] instead; use this module to
/// share an [`arena::Arena`] or drive an explicit [`arena::BufferPool`].
pub use octet_arena as arena;

/// Text and numeric codecs over plain byte slices (`octet-codec`).
pub use octet_codec as codec;

/// The buffer type and its operations (`octet-buffer`).
pub use octet_buffer as buffer;

/// Opaque-object registry (`octet-registry`).
pub use octet_registry as registry;

/// Common imports.
///
/// ```rust
/// use octet::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use octet_core::{Arg, ArrayLike, BufferError, Encoding, ErrorKind};

    // Storage
    pub use octet_arena::{Arena, PoolConfig, View};

    // Buffer
    pub use octet_buffer::{BinaryJson, Buffer, Direction, Pattern};

    // Registry
    pub use octet_registry::{BlobInfo, Context, RegistryError};
}
