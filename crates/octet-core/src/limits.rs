//! Hard limits shared across the workspace.

/// Largest length, in bytes, a single view may have.
///
/// Allocation requests above this fail with
/// [`BufferError::InvalidSize`](crate::BufferError::InvalidSize).
pub const MAX_LENGTH: usize = u32::MAX as usize;

/// Number of bytes rendered by a buffer's `Debug` output before the
/// remainder is summarised as `... N more bytes`.
pub const INSPECT_MAX_BYTES: usize = 50;
