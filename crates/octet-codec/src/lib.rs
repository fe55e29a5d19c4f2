//! Codecs between byte ranges and typed values.
//!
//! - [`text`]: text to bytes and back for every [`Encoding`], including
//!   length prediction and bounded writes that never split a code point.
//! - [`numeric`]: two's-complement integers of 1 to 8 bytes in either
//!   byte order.
//!
//! Everything here works on plain slices. Bounds and argument checking
//! happen one layer up, in the buffer surface.
//!
//! [`Encoding`]: octet_core::Encoding

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod numeric;
pub mod text;

pub use numeric::ByteOrder;
