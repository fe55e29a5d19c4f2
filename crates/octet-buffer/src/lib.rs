//! Fixed-length binary buffers.
//!
//! [`Buffer`] is the externally visible unit: a [`View`] over a shared
//! arena plus the full operation surface.
//!
//! - construction and pooled allocation ([`buffer`])
//! - fixed-width integer and float reads/writes ([`numeric`])
//! - ordering and equality ([`compare`])
//! - pattern search ([`search`]) and fill ([`fill`])
//! - memmove-safe copy ([`copy`]) and in-place byte swaps ([`swap`])
//! - text and JSON conversion ([`convert`])
//! - live, non-restartable iterators ([`iter`])
//!
//! Slicing never copies: a slice and its parent observe each other's
//! writes. [`Buffer::copy_from`] is the one deep-copy constructor.
//!
//! [`View`]: octet_arena::View

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod compare;
pub mod convert;
pub mod copy;
pub mod fill;
pub mod iter;
pub mod numeric;
pub mod pattern;
pub mod search;
pub mod swap;

pub use buffer::Buffer;
pub use convert::BinaryJson;
pub use iter::{Entries, Keys, Values};
pub use pattern::Pattern;
pub use search::Direction;
