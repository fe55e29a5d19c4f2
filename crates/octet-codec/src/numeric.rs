//! Variable-width two's-complement integer codec.
//!
//! Widths run from 1 to 8 bytes. Reads zero-extend (unsigned) or
//! sign-extend (signed) into 64 bits; writes store the low `width` bytes
//! of the value's bit pattern. Range checking is the caller's job.

/// Byte order of a multi-byte value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

/// Largest supported width in bytes.
pub const MAX_WIDTH: usize = 8;

/// Read `bytes` as an unsigned integer.
///
/// # Panics
///
/// Panics if `bytes` is empty or longer than [`MAX_WIDTH`].
pub fn read_uint(bytes: &[u8], order: ByteOrder) -> u64 {
    assert!((1..=MAX_WIDTH).contains(&bytes.len()), "width must be 1..=8");
    let fold = |acc: u64, &b: &u8| (acc << 8) | u64::from(b);
    match order {
        ByteOrder::Big => bytes.iter().fold(0, fold),
        ByteOrder::Little => bytes.iter().rev().fold(0, fold),
    }
}

/// Read `bytes` as a two's-complement signed integer.
///
/// # Panics
///
/// Panics if `bytes` is empty or longer than [`MAX_WIDTH`].
pub fn read_int(bytes: &[u8], order: ByteOrder) -> i64 {
    let shift = 64 - 8 * bytes.len() as u32;
    let raw = read_uint(bytes, order);
    ((raw << shift) as i64) >> shift
}

/// Store the low `dst.len()` bytes of `value` into `dst`.
///
/// Signed values are passed as their bit pattern (`v as u64`).
///
/// # Panics
///
/// Panics if `dst` is empty or longer than [`MAX_WIDTH`].
pub fn write_uint(dst: &mut [u8], value: u64, order: ByteOrder) {
    assert!((1..=MAX_WIDTH).contains(&dst.len()), "width must be 1..=8");
    let width = dst.len();
    for (i, slot) in dst.iter_mut().enumerate() {
        let shift = match order {
            ByteOrder::Little => 8 * i,
            ByteOrder::Big => 8 * (width - 1 - i),
        };
        *slot = (value >> shift) as u8;
    }
}

/// Largest unsigned value representable in `width` bytes.
pub fn uint_max(width: usize) -> u64 {
    if width >= MAX_WIDTH {
        u64::MAX
    } else {
        (1u64 << (8 * width)) - 1
    }
}

/// Smallest signed value representable in `width` bytes.
pub fn int_min(width: usize) -> i64 {
    -int_max(width) - 1
}

/// Largest signed value representable in `width` bytes.
pub fn int_max(width: usize) -> i64 {
    (uint_max(width) >> 1) as i64
}
