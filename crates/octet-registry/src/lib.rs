//! Opaque-object registry scoped to an execution context.
//!
//! A [`Context`] owns a [`Registry`] mapping generated identifiers to
//! snapshots of binary data. [`Registry::create`] returns an opaque
//! reference string (`blob:octet:<uuid>`); [`Registry::resolve`] and
//! [`Registry::fetch`] look it up; [`Registry::revoke`] removes it.
//! Dropping or disposing the context revokes everything it still holds.
//!
//! # Entry lifecycle
//!
//! ```text
//! create ──► Resolvable ──► Revoked
//!                 │            ▲
//!                 └─ dispose ──┘
//! ```
//!
//! Lookups never fail loudly: unknown, malformed, revoked, and
//! other-context references all resolve to `None`. Each context's table is
//! its own; there is no process-wide state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod entry;
pub mod error;
pub mod reference;
pub mod registry;

pub use context::Context;
pub use entry::BlobInfo;
pub use error::RegistryError;
pub use reference::BlobRef;
pub use registry::{Registry, RegistryHandle};
