//! In-place byte-order swaps.

use octet_core::BufferError;

use crate::buffer::Buffer;

impl Buffer {
    fn swap_groups(&self, width: usize) -> Result<&Self, BufferError> {
        let len = self.len();
        if len % width != 0 {
            return Err(BufferError::InvalidBufferSize { width, len });
        }
        self.view()
            .with_bytes_mut(|bytes| bytes.chunks_exact_mut(width).for_each(<[u8]>::reverse));
        Ok(self)
    }

    /// Reverse the byte order of every 16-bit group.
    ///
    /// Fails with [`BufferError::InvalidBufferSize`] unless the length is
    /// a multiple of 2.
    pub fn swap16(&self) -> Result<&Self, BufferError> {
        self.swap_groups(2)
    }

    /// Reverse the byte order of every 32-bit group.
    pub fn swap32(&self) -> Result<&Self, BufferError> {
        self.swap_groups(4)
    }

    /// Reverse the byte order of every 64-bit group.
    pub fn swap64(&self) -> Result<&Self, BufferError> {
        self.swap_groups(8)
    }

    /// Reverse all bytes in place.
    pub fn reverse(&self) -> &Self {
        self.view().with_bytes_mut(<[u8]>::reverse);
        self
    }
}
