//! Pool configuration parameters.

use octet_core::BufferError;

/// Configuration for [`BufferPool`](crate::BufferPool).
///
/// Controls the size of the shared slab that small allocations are carved
/// from. Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Slab size in bytes. Non-zero multiple of [`PoolConfig::ALIGNMENT`].
    pool_size: usize,
}

impl PoolConfig {
    /// Default slab size: 8 KiB.
    pub const DEFAULT_POOL_SIZE: usize = 8 * 1024;

    /// Alignment of every pooled view's starting offset, in bytes.
    pub const ALIGNMENT: usize = 8;

    /// Create a config with the given slab size.
    ///
    /// Fails with [`BufferError::InvalidSize`] unless `pool_size` is a
    /// non-zero multiple of [`PoolConfig::ALIGNMENT`].
    pub fn new(pool_size: usize) -> Result<Self, BufferError> {
        if pool_size == 0 || pool_size % Self::ALIGNMENT != 0 {
            return Err(BufferError::InvalidSize {
                size: pool_size.to_string(),
            });
        }
        Ok(Self { pool_size })
    }

    /// Slab size in bytes.
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Allocations strictly smaller than this are served from the slab.
    pub fn threshold(&self) -> usize {
        self.pool_size >> 1
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            pool_size: Self::DEFAULT_POOL_SIZE,
        }
    }
}
