//! Fixed-width integer and floating-point access at byte offsets.
//!
//! Every accessor validates its offset with [`Arg::to_offset`]: a
//! wrong-kind or fractional offset is a type mismatch, checked before the
//! bounds check (`offset + width <= len`). An omitted offset is `0`.
//! Writes return the offset just past the written bytes.
//!
//! Integer writes accept any numeric host value. `NaN` stores `0`;
//! anything outside the width's range, infinities included, is a
//! [`BufferError::ValueOutOfRange`]. Fractions are truncated after the
//! range check. Float writes store `NaN` with the canonical quiet-NaN bit
//! pattern and keep signed zero and infinities exactly.
//!
//! Nothing here allocates.

use octet_codec::numeric::{self, ByteOrder};
use octet_core::{Arg, BufferError};

use crate::buffer::Buffer;

/// Canonical quiet NaN for 64-bit writes.
const CANONICAL_NAN_F64: u64 = 0x7FF8_0000_0000_0000;
/// Canonical quiet NaN for 32-bit writes.
const CANONICAL_NAN_F32: u32 = 0x7FC0_0000;

/// Largest `byteLength` accepted by the variable-width accessors.
pub const MAX_VARIABLE_WIDTH: usize = 6;

// ── Argument coercion ───────────────────────────────────────────

/// Coerce a host value the way a numeric store does.
fn coerce_number(value: &Arg) -> Result<f64, BufferError> {
    match value {
        Arg::Number(n) => Ok(*n),
        Arg::Undefined => Ok(f64::NAN),
        Arg::Null => Ok(0.0),
        Arg::Bool(b) => Ok(f64::from(u8::from(*b))),
        Arg::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(0.0)
            } else {
                Ok(trimmed.parse().unwrap_or(f64::NAN))
            }
        }
        Arg::BigInt(_) => Err(BufferError::InvalidArgType {
            name: "value",
            expected: "a number",
            received: value.to_string(),
        }),
    }
}

/// Range-check an integer store. `NaN` becomes `0`.
fn check_int(value: f64, min: f64, max: f64) -> Result<f64, BufferError> {
    if value.is_nan() {
        return Ok(0.0);
    }
    if value < min || value > max {
        return Err(BufferError::ValueOutOfRange {
            name: "value",
            value: value.to_string(),
            range: format!(">= {min} and <= {max}"),
        });
    }
    Ok(value.trunc())
}

fn check_big(value: i128, min: i128, max: i128) -> Result<(), BufferError> {
    if value < min || value > max {
        return Err(BufferError::ValueOutOfRange {
            name: "value",
            value: format!("{value}n"),
            range: format!(">= {min}n and <= {max}n"),
        });
    }
    Ok(())
}

/// Validate the `byteLength` of a variable-width access.
fn variable_width(byte_length: &Arg) -> Result<usize, BufferError> {
    match *byte_length {
        Arg::Number(n) if n.fract() == 0.0 && (1.0..=MAX_VARIABLE_WIDTH as f64).contains(&n) => {
            Ok(n as usize)
        }
        Arg::Number(n) => Err(BufferError::out_of_bounds("byteLength", n, MAX_VARIABLE_WIDTH)),
        _ => Err(BufferError::InvalidArgType {
            name: "byteLength",
            expected: "an integer",
            received: byte_length.to_string(),
        }),
    }
}

// ── Primitive access ────────────────────────────────────────────

impl Buffer {
    fn read_fixed<const N: usize>(&self, offset: Arg) -> Result<[u8; N], BufferError> {
        let offset = offset.to_offset("offset", self.len(), N)?;
        let mut out = [0u8; N];
        self.view()
            .with_bytes(|bytes| out.copy_from_slice(&bytes[offset..offset + N]));
        Ok(out)
    }

    fn write_fixed<const N: usize>(&self, offset: Arg, value: [u8; N]) -> Result<usize, BufferError> {
        let offset = offset.to_offset("offset", self.len(), N)?;
        self.view()
            .with_bytes_mut(|bytes| bytes[offset..offset + N].copy_from_slice(&value));
        Ok(offset + N)
    }

    fn read_variable<T>(
        &self,
        offset: Arg,
        byte_length: Arg,
        decode: impl FnOnce(&[u8]) -> T,
    ) -> Result<T, BufferError> {
        let width = variable_width(&byte_length)?;
        let offset = offset.to_offset("offset", self.len(), width)?;
        Ok(self.view().with_bytes(|bytes| decode(&bytes[offset..offset + width])))
    }

    fn write_variable(
        &self,
        value: Arg,
        offset: Arg,
        byte_length: Arg,
        signed: bool,
        order: ByteOrder,
    ) -> Result<usize, BufferError> {
        let width = variable_width(&byte_length)?;
        let value = coerce_number(&value)?;
        let bits = if signed {
            let v = check_int(value, numeric::int_min(width) as f64, numeric::int_max(width) as f64)?;
            v as i64 as u64
        } else {
            check_int(value, 0.0, numeric::uint_max(width) as f64)? as u64
        };
        let offset = offset.to_offset("offset", self.len(), width)?;
        self.view().with_bytes_mut(|bytes| {
            numeric::write_uint(&mut bytes[offset..offset + width], bits, order);
        });
        Ok(offset + width)
    }
}

// ── Fixed-width integers ────────────────────────────────────────

macro_rules! int_accessors {
    ($($read:ident, $write:ident => $t:ty, $from:ident, $to:ident;)*) => {
        impl Buffer {
            $(
                #[doc = concat!("Read a `", stringify!($t), "` at `offset`.")]
                pub fn $read(&self, offset: impl Into<Arg>) -> Result<$t, BufferError> {
                    self.read_fixed::<{ std::mem::size_of::<$t>() }>(offset.into())
                        .map(<$t>::$from)
                }

                #[doc = concat!("Write `value` as a `", stringify!($t), "` at `offset`.")]
                pub fn $write(&self, value: impl Into<Arg>, offset: impl Into<Arg>) -> Result<usize, BufferError> {
                    let value = coerce_number(&value.into())?;
                    let value = check_int(value, <$t>::MIN as f64, <$t>::MAX as f64)? as $t;
                    self.write_fixed(offset.into(), value.$to())
                }
            )*
        }
    };
}

int_accessors! {
    read_u8, write_u8 => u8, from_le_bytes, to_le_bytes;
    read_i8, write_i8 => i8, from_le_bytes, to_le_bytes;
    read_u16_le, write_u16_le => u16, from_le_bytes, to_le_bytes;
    read_u16_be, write_u16_be => u16, from_be_bytes, to_be_bytes;
    read_i16_le, write_i16_le => i16, from_le_bytes, to_le_bytes;
    read_i16_be, write_i16_be => i16, from_be_bytes, to_be_bytes;
    read_u32_le, write_u32_le => u32, from_le_bytes, to_le_bytes;
    read_u32_be, write_u32_be => u32, from_be_bytes, to_be_bytes;
    read_i32_le, write_i32_le => i32, from_le_bytes, to_le_bytes;
    read_i32_be, write_i32_be => i32, from_be_bytes, to_be_bytes;
}

// ── 64-bit integers ─────────────────────────────────────────────

macro_rules! big_accessors {
    ($($read:ident, $write:ident => $t:ty, $from:ident, $to:ident;)*) => {
        impl Buffer {
            $(
                #[doc = concat!("Read a 64-bit `", stringify!($t), "` at `offset`.")]
                pub fn $read(&self, offset: impl Into<Arg>) -> Result<$t, BufferError> {
                    self.read_fixed::<8>(offset.into()).map(<$t>::$from)
                }

                #[doc = concat!("Write `value` as a 64-bit `", stringify!($t), "` at `offset`.")]
                pub fn $write(&self, value: impl Into<i128>, offset: impl Into<Arg>) -> Result<usize, BufferError> {
                    let value = value.into();
                    check_big(value, <$t>::MIN.into(), <$t>::MAX.into())?;
                    self.write_fixed(offset.into(), (value as $t).$to())
                }
            )*
        }
    };
}

big_accessors! {
    read_big_u64_le, write_big_u64_le => u64, from_le_bytes, to_le_bytes;
    read_big_u64_be, write_big_u64_be => u64, from_be_bytes, to_be_bytes;
    read_big_i64_le, write_big_i64_le => i64, from_le_bytes, to_le_bytes;
    read_big_i64_be, write_big_i64_be => i64, from_be_bytes, to_be_bytes;
}

// ── Floats ──────────────────────────────────────────────────────

impl Buffer {
    /// Read an `f32` at `offset`, little-endian.
    pub fn read_f32_le(&self, offset: impl Into<Arg>) -> Result<f32, BufferError> {
        self.read_fixed::<4>(offset.into()).map(f32::from_le_bytes)
    }

    /// Read an `f32` at `offset`, big-endian.
    pub fn read_f32_be(&self, offset: impl Into<Arg>) -> Result<f32, BufferError> {
        self.read_fixed::<4>(offset.into()).map(f32::from_be_bytes)
    }

    /// Read an `f64` at `offset`, little-endian.
    pub fn read_f64_le(&self, offset: impl Into<Arg>) -> Result<f64, BufferError> {
        self.read_fixed::<8>(offset.into()).map(f64::from_le_bytes)
    }

    /// Read an `f64` at `offset`, big-endian.
    pub fn read_f64_be(&self, offset: impl Into<Arg>) -> Result<f64, BufferError> {
        self.read_fixed::<8>(offset.into()).map(f64::from_be_bytes)
    }

    /// Write `value` rounded to `f32` at `offset`, little-endian.
    pub fn write_f32_le(&self, value: impl Into<Arg>, offset: impl Into<Arg>) -> Result<usize, BufferError> {
        let bits = f32_bits(&value.into())?;
        self.write_fixed(offset.into(), bits.to_le_bytes())
    }

    /// Write `value` rounded to `f32` at `offset`, big-endian.
    pub fn write_f32_be(&self, value: impl Into<Arg>, offset: impl Into<Arg>) -> Result<usize, BufferError> {
        let bits = f32_bits(&value.into())?;
        self.write_fixed(offset.into(), bits.to_be_bytes())
    }

    /// Write `value` as an `f64` at `offset`, little-endian.
    pub fn write_f64_le(&self, value: impl Into<Arg>, offset: impl Into<Arg>) -> Result<usize, BufferError> {
        let bits = f64_bits(&value.into())?;
        self.write_fixed(offset.into(), bits.to_le_bytes())
    }

    /// Write `value` as an `f64` at `offset`, big-endian.
    pub fn write_f64_be(&self, value: impl Into<Arg>, offset: impl Into<Arg>) -> Result<usize, BufferError> {
        let bits = f64_bits(&value.into())?;
        self.write_fixed(offset.into(), bits.to_be_bytes())
    }
}

fn f32_bits(value: &Arg) -> Result<u32, BufferError> {
    let v = coerce_number(value)?;
    Ok(if v.is_nan() {
        CANONICAL_NAN_F32
    } else {
        (v as f32).to_bits()
    })
}

fn f64_bits(value: &Arg) -> Result<u64, BufferError> {
    let v = coerce_number(value)?;
    Ok(if v.is_nan() { CANONICAL_NAN_F64 } else { v.to_bits() })
}

// ── Variable-width integers (1 to 6 bytes) ──────────────────────

impl Buffer {
    /// Read an unsigned integer of `byte_length` (1..=6) bytes, little-endian.
    pub fn read_uint_le(&self, offset: impl Into<Arg>, byte_length: impl Into<Arg>) -> Result<u64, BufferError> {
        self.read_variable(offset.into(), byte_length.into(), |b| {
            numeric::read_uint(b, ByteOrder::Little)
        })
    }

    /// Read an unsigned integer of `byte_length` (1..=6) bytes, big-endian.
    pub fn read_uint_be(&self, offset: impl Into<Arg>, byte_length: impl Into<Arg>) -> Result<u64, BufferError> {
        self.read_variable(offset.into(), byte_length.into(), |b| {
            numeric::read_uint(b, ByteOrder::Big)
        })
    }

    /// Read a signed integer of `byte_length` (1..=6) bytes, little-endian.
    pub fn read_int_le(&self, offset: impl Into<Arg>, byte_length: impl Into<Arg>) -> Result<i64, BufferError> {
        self.read_variable(offset.into(), byte_length.into(), |b| {
            numeric::read_int(b, ByteOrder::Little)
        })
    }

    /// Read a signed integer of `byte_length` (1..=6) bytes, big-endian.
    pub fn read_int_be(&self, offset: impl Into<Arg>, byte_length: impl Into<Arg>) -> Result<i64, BufferError> {
        self.read_variable(offset.into(), byte_length.into(), |b| {
            numeric::read_int(b, ByteOrder::Big)
        })
    }

    /// Write `value` as an unsigned `byte_length`-byte integer, little-endian.
    pub fn write_uint_le(
        &self,
        value: impl Into<Arg>,
        offset: impl Into<Arg>,
        byte_length: impl Into<Arg>,
    ) -> Result<usize, BufferError> {
        self.write_variable(value.into(), offset.into(), byte_length.into(), false, ByteOrder::Little)
    }

    /// Write `value` as an unsigned `byte_length`-byte integer, big-endian.
    pub fn write_uint_be(
        &self,
        value: impl Into<Arg>,
        offset: impl Into<Arg>,
        byte_length: impl Into<Arg>,
    ) -> Result<usize, BufferError> {
        self.write_variable(value.into(), offset.into(), byte_length.into(), false, ByteOrder::Big)
    }

    /// Write `value` as a signed `byte_length`-byte integer, little-endian.
    pub fn write_int_le(
        &self,
        value: impl Into<Arg>,
        offset: impl Into<Arg>,
        byte_length: impl Into<Arg>,
    ) -> Result<usize, BufferError> {
        self.write_variable(value.into(), offset.into(), byte_length.into(), true, ByteOrder::Little)
    }

    /// Write `value` as a signed `byte_length`-byte integer, big-endian.
    pub fn write_int_be(
        &self,
        value: impl Into<Arg>,
        offset: impl Into<Arg>,
        byte_length: impl Into<Arg>,
    ) -> Result<usize, BufferError> {
        self.write_variable(value.into(), offset.into(), byte_length.into(), true, ByteOrder::Big)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octet_core::ErrorKind;
    use proptest::prelude::*;

    #[test]
    fn big_endian_write_little_endian_read() {
        let buf = Buffer::alloc(5).unwrap();
        assert_eq!(buf.write_u32_be(0x1234_5678u32, 0).unwrap(), 4);
        assert_eq!(buf.read_u32_le(0).unwrap(), 0x7856_3412);
        assert_eq!(buf.to_vec(), vec![0x12, 0x34, 0x56, 0x78, 0]);
    }

    #[test]
    fn offset_defaults_to_zero() {
        let buf = Buffer::from_bytes(&[0xAB, 0xCD]);
        assert_eq!(buf.read_u16_be(Arg::Undefined).unwrap(), 0xABCD);
    }

    #[test]
    fn offset_kind_is_checked_before_bounds() {
        let buf = Buffer::alloc(4).unwrap();
        assert_eq!(buf.read_u32_le("0").unwrap_err().kind(), ErrorKind::TypeMismatch);
        assert_eq!(buf.read_u8(0.5).unwrap_err().kind(), ErrorKind::TypeMismatch);
        assert_eq!(buf.read_u8(f64::NAN).unwrap_err().kind(), ErrorKind::TypeMismatch);
        // Fractional offset past the end is still a type error.
        assert_eq!(buf.read_u8(10.5).unwrap_err().kind(), ErrorKind::TypeMismatch);
        assert_eq!(buf.read_u32_le(1).unwrap_err().kind(), ErrorKind::Bounds);
        assert_eq!(buf.read_u8(-1).unwrap_err().kind(), ErrorKind::Bounds);
        assert_eq!(buf.write_u16_le(1, 3).unwrap_err().kind(), ErrorKind::Bounds);
    }

    #[test]
    fn empty_buffer_rejects_every_read() {
        let buf = Buffer::alloc(0).unwrap();
        assert_eq!(buf.read_u8(0).unwrap_err().kind(), ErrorKind::Bounds);
        assert_eq!(buf.read_f64_be(0).unwrap_err().kind(), ErrorKind::Bounds);
    }

    #[test]
    fn integer_range_checks() {
        let buf = Buffer::alloc(8).unwrap();
        assert_eq!(buf.write_u8(256, 0).unwrap_err().kind(), ErrorKind::ValueRange);
        assert_eq!(buf.write_u8(-1, 0).unwrap_err().kind(), ErrorKind::ValueRange);
        assert_eq!(buf.write_i8(128, 0).unwrap_err().kind(), ErrorKind::ValueRange);
        assert_eq!(buf.write_u8(255.5, 0).unwrap_err().kind(), ErrorKind::ValueRange);
        assert_eq!(
            buf.write_i32_le(f64::INFINITY, 0).unwrap_err().kind(),
            ErrorKind::ValueRange
        );
        assert_eq!(
            buf.write_u16_be(f64::NEG_INFINITY, 0).unwrap_err().kind(),
            ErrorKind::ValueRange
        );
        assert_eq!(buf.write_u32_le(Arg::BigInt(1), 0).unwrap_err().kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn nan_stores_zero_and_fractions_truncate() {
        let buf = Buffer::alloc_filled(4, 0xFFu8).unwrap();
        buf.write_u16_le(f64::NAN, 0).unwrap();
        assert_eq!(buf.read_u16_le(0).unwrap(), 0);
        buf.write_i16_be(-1.9, 2).unwrap();
        assert_eq!(buf.read_i16_be(2).unwrap(), -1);
        buf.write_u8("42", 0).unwrap();
        assert_eq!(buf.read_u8(0).unwrap(), 42);
    }

    #[test]
    fn signed_minimum_shares_bits_with_unsigned() {
        let buf = Buffer::alloc(4).unwrap();
        buf.write_i8(-128, 0).unwrap();
        assert_eq!(buf.read_u8(0).unwrap(), 0x80);
        buf.write_i16_le(i16::MIN, 0).unwrap();
        assert_eq!(buf.read_u16_le(0).unwrap(), 0x8000);
        buf.write_i32_be(i32::MIN, 0).unwrap();
        assert_eq!(buf.read_u32_be(0).unwrap(), 0x8000_0000);
        buf.write_u32_be(0x8000_0000u32, 0).unwrap();
        assert_eq!(buf.read_i32_be(0).unwrap(), i32::MIN);
    }

    #[test]
    fn variable_width_24_and_48_bit() {
        let buf = Buffer::alloc(6).unwrap();
        buf.write_uint_be(0x12_3456, 0, 3).unwrap();
        assert_eq!(buf.read_uint_le(0, 3).unwrap(), 0x56_3412);
        assert_eq!(buf.write_int_le(-(1i64 << 47), 0, 6).unwrap(), 6);
        assert_eq!(buf.read_int_le(0, 6).unwrap(), -(1i64 << 47));
        assert_eq!(buf.read_uint_le(0, 6).unwrap(), 1u64 << 47);
        buf.write_uint_le(0xFFFF_FFFF_FFFFu64, 0, 6).unwrap();
        assert_eq!(buf.read_int_be(0, 6).unwrap(), -1);
        assert_eq!(
            buf.write_uint_le(0x1_0000_0000_0000u64, 0, 6).unwrap_err().kind(),
            ErrorKind::ValueRange
        );
    }

    #[test]
    fn variable_width_validates_byte_length() {
        let buf = Buffer::alloc(8).unwrap();
        assert_eq!(buf.read_uint_le(0, 0).unwrap_err().kind(), ErrorKind::Bounds);
        assert_eq!(buf.read_uint_le(0, 7).unwrap_err().kind(), ErrorKind::Bounds);
        assert_eq!(buf.read_int_be(0, 2.5).unwrap_err().kind(), ErrorKind::Bounds);
        assert_eq!(buf.read_int_be(0, "2").unwrap_err().kind(), ErrorKind::TypeMismatch);
        assert_eq!(buf.read_uint_be(4, 5).unwrap_err().kind(), ErrorKind::Bounds);
    }

    #[test]
    fn wide_integers_round_trip_extremes() {
        let buf = Buffer::alloc(8).unwrap();
        buf.write_big_u64_le(u64::MAX, 0).unwrap();
        assert_eq!(buf.read_big_u64_le(0).unwrap(), u64::MAX);
        assert_eq!(buf.read_big_i64_be(0).unwrap(), -1);
        buf.write_big_i64_be(i64::MIN, 0).unwrap();
        assert_eq!(buf.read_big_u64_be(0).unwrap(), 1 << 63);
        assert_eq!(buf.write_big_u64_be(-1, 0).unwrap_err().kind(), ErrorKind::ValueRange);
        assert_eq!(
            buf.write_big_i64_le(i128::from(i64::MAX) + 1, 0).unwrap_err().kind(),
            ErrorKind::ValueRange
        );
    }

    #[test]
    fn floats_keep_special_values() {
        let buf = Buffer::alloc(8).unwrap();
        for v in [0.0, -0.0, f64::INFINITY, f64::NEG_INFINITY, f64::MIN_POSITIVE, f64::MAX] {
            buf.write_f64_be(v, 0).unwrap();
            assert_eq!(buf.read_f64_be(0).unwrap().to_bits(), v.to_bits());
        }
        buf.write_f32_le(-0.0, 0).unwrap();
        assert!((1.0 / buf.read_f32_le(0).unwrap()).is_sign_negative());
    }

    #[test]
    fn nan_is_written_canonically() {
        let buf = Buffer::alloc(8).unwrap();
        let odd_nan = f64::from_bits(0x7FF0_0000_0000_0001);
        buf.write_f64_le(odd_nan, 0).unwrap();
        assert_eq!(buf.read_big_u64_le(0).unwrap(), CANONICAL_NAN_F64);
        assert!(buf.read_f64_le(0).unwrap().is_nan());
        buf.write_f32_be(f64::NAN, 0).unwrap();
        assert_eq!(buf.read_u32_be(0).unwrap(), CANONICAL_NAN_F32);
    }

    #[test]
    fn f32_rounds_and_overflows_to_infinity() {
        let buf = Buffer::alloc(4).unwrap();
        buf.write_f32_le(0.1, 0).unwrap();
        assert_eq!(buf.read_f32_le(0).unwrap(), 0.1f32);
        buf.write_f32_le(1e300, 0).unwrap();
        assert_eq!(buf.read_f32_le(0).unwrap(), f32::INFINITY);
    }

    #[test]
    fn writes_return_next_offset() {
        let buf = Buffer::alloc(16).unwrap();
        let mut at = 0;
        at = buf.write_u8(1, at).unwrap();
        at = buf.write_u16_be(2, at).unwrap();
        at = buf.write_f32_le(3.0, at).unwrap();
        at = buf.write_big_i64_le(4, at).unwrap();
        assert_eq!(at, 15);
    }

    #[test]
    fn reads_through_slices_are_relative() {
        let parent = Buffer::from_bytes(&[0, 0, 0x12, 0x34]);
        let tail = parent.slice(2, Arg::Undefined).unwrap();
        assert_eq!(tail.read_u16_be(0).unwrap(), 0x1234);
        tail.write_u16_le(0xBEEFu16, 0).unwrap();
        assert_eq!(parent.to_vec(), vec![0, 0, 0xEF, 0xBE]);
    }

    proptest! {
        #[test]
        fn i32_round_trip(v in any::<i32>(), offset in 0usize..5) {
            let buf = Buffer::alloc(8).unwrap();
            buf.write_i32_le(v, offset).unwrap();
            prop_assert_eq!(buf.read_i32_le(offset).unwrap(), v);
            buf.write_i32_be(v, offset).unwrap();
            prop_assert_eq!(buf.read_i32_be(offset).unwrap(), v);
        }

        #[test]
        fn variable_width_round_trip(width in 1usize..=6, raw in any::<i64>()) {
            let buf = Buffer::alloc(6).unwrap();
            let value = raw.clamp(numeric::int_min(width), numeric::int_max(width));
            buf.write_int_be(value, 0, width).unwrap();
            prop_assert_eq!(buf.read_int_be(0, width).unwrap(), value);
            let unsigned = (raw as u64) & numeric::uint_max(width);
            buf.write_uint_le(unsigned, 0, width).unwrap();
            prop_assert_eq!(buf.read_uint_le(0, width).unwrap(), unsigned);
        }

        #[test]
        fn f64_bits_round_trip(bits in any::<u64>()) {
            let v = f64::from_bits(bits);
            prop_assume!(!v.is_nan());
            let buf = Buffer::alloc(8).unwrap();
            buf.write_f64_le(v, 0).unwrap();
            prop_assert_eq!(buf.read_f64_le(0).unwrap().to_bits(), bits);
        }
    }
}
