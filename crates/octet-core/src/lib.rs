//! Core types for the octet binary buffer workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate: the error taxonomy,
//! the encoding alias table, the loosely-typed host argument model,
//! and the size limits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arg;
pub mod encoding;
pub mod error;
pub mod id;
pub mod limits;
pub mod traits;

pub use arg::Arg;
pub use encoding::Encoding;
pub use error::{BufferError, ErrorKind};
pub use id::ContextId;
pub use limits::{INSPECT_MAX_BYTES, MAX_LENGTH};
pub use traits::ArrayLike;
