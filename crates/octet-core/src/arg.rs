//! Loosely-typed host arguments and their coercion rules.
//!
//! Script hosts hand the buffer surface values whose kind is only known at
//! run time. [`Arg`] captures those values so that argument validation can
//! distinguish a wrong *kind* (type mismatch) from a wrong *magnitude*
//! (bounds / size) exactly as the error taxonomy requires. Rust callers
//! pass plain integers and strings; the `From` impls lift them.

use std::fmt;

use crate::error::BufferError;
use crate::limits::MAX_LENGTH;

/// A dynamically-typed argument supplied by a host.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Arg {
    /// Argument omitted. Coercions substitute their documented default.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// An arbitrary-precision integer, narrowed to 128 bits.
    BigInt(i128),
    /// A text value.
    Text(String),
}

impl Arg {
    /// Whether the argument was omitted.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// The numeric payload, if this is a [`Arg::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn mismatch(&self, name: &'static str, expected: &'static str) -> BufferError {
        BufferError::InvalidArgType {
            name,
            expected,
            received: self.to_string(),
        }
    }

    fn expect_number(&self, name: &'static str) -> Result<f64, BufferError> {
        self.as_number().ok_or_else(|| self.mismatch(name, "a number"))
    }

    /// Coerce an allocation size.
    ///
    /// Non-numbers are a type mismatch. NaN, infinities, fractions,
    /// negatives, and anything above [`MAX_LENGTH`] are size errors.
    pub fn to_size(&self) -> Result<usize, BufferError> {
        let n = self.expect_number("size")?;
        if !n.is_finite() || n.fract() != 0.0 || n < 0.0 || n > MAX_LENGTH as f64 {
            return Err(BufferError::InvalidSize {
                size: format_number(n),
            });
        }
        Ok(n as usize)
    }

    /// Coerce the offset of a fixed-width access of `width` bytes into a
    /// view of `len` bytes.
    ///
    /// An omitted offset is `0`. The kind check (number, finite, integral)
    /// runs before the bounds check, so `"1"` and `1.5` are type
    /// mismatches regardless of the view length.
    pub fn to_offset(&self, name: &'static str, len: usize, width: usize) -> Result<usize, BufferError> {
        let n = match self {
            Self::Undefined => return check_fits(0, name, len, width),
            Self::Number(n) => *n,
            _ => return Err(self.mismatch(name, "an integer")),
        };
        if !n.is_finite() || n.fract() != 0.0 {
            return Err(self.mismatch(name, "an integer"));
        }
        let limit = len.saturating_sub(width);
        if n < 0.0 || n > usize::MAX as f64 {
            return Err(BufferError::out_of_bounds(name, format_number(n), limit));
        }
        check_fits(n as usize, name, len, width)
    }

    /// Coerce a slicing index relative to a view of `len` bytes.
    ///
    /// Omitted indices become `default`. Negative indices count back from
    /// the end. Out-of-range values clamp to `[0, len]` rather than
    /// failing; only wrong kinds and fractional values are rejected.
    pub fn to_relative_index(
        &self,
        name: &'static str,
        len: usize,
        default: usize,
    ) -> Result<usize, BufferError> {
        let n = match self {
            Self::Undefined => return Ok(default.min(len)),
            Self::Number(n) => *n,
            _ => return Err(self.mismatch(name, "an integer")),
        };
        if n.is_nan() || (n.is_finite() && n.fract() != 0.0) {
            return Err(self.mismatch(name, "an integer"));
        }
        Ok(clamp_relative(n, len))
    }

    /// Coerce a non-negative index that callers clamp themselves.
    ///
    /// Omitted indices become `default`. Negative values are bounds errors;
    /// `+Infinity` saturates to `usize::MAX`.
    pub fn to_index(&self, name: &'static str, default: usize) -> Result<usize, BufferError> {
        let n = match self {
            Self::Undefined => return Ok(default),
            Self::Number(n) => *n,
            _ => return Err(self.mismatch(name, "an integer")),
        };
        if n.is_nan() || (n.is_finite() && n.fract() != 0.0) {
            return Err(self.mismatch(name, "an integer"));
        }
        if n < 0.0 {
            return Err(BufferError::out_of_bounds(name, format_number(n), usize::MAX));
        }
        if n >= usize::MAX as f64 {
            return Ok(usize::MAX);
        }
        Ok(n as usize)
    }

    /// Coerce an array-like element to a byte, modulo 256.
    ///
    /// Never fails: non-numeric text, NaN, infinities and absent values
    /// all become `0`, mirroring typed-array element conversion.
    pub fn to_uint8(&self) -> u8 {
        match self {
            Self::Undefined | Self::Null => 0,
            Self::Bool(b) => u8::from(*b),
            Self::Number(n) => wrap_u8(*n),
            Self::BigInt(i) => i.rem_euclid(256) as u8,
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0
                } else {
                    trimmed.parse::<f64>().map_or(0, wrap_u8)
                }
            }
        }
    }
}

fn check_fits(offset: usize, name: &'static str, len: usize, width: usize) -> Result<usize, BufferError> {
    match offset.checked_add(width) {
        Some(end) if end <= len => Ok(offset),
        _ => Err(BufferError::out_of_bounds(
            name,
            offset,
            len.saturating_sub(width),
        )),
    }
}

/// Map a (possibly negative or infinite) integral index onto `[0, len]`.
pub fn clamp_relative(n: f64, len: usize) -> usize {
    if n < 0.0 {
        let back = -n;
        if back >= len as f64 {
            0
        } else {
            len - back as usize
        }
    } else if n >= len as f64 {
        len
    } else {
        n as usize
    }
}

fn wrap_u8(n: f64) -> u8 {
    if !n.is_finite() {
        return 0;
    }
    let m = n.trunc() % 256.0;
    let m = if m < 0.0 { m + 256.0 } else { m };
    m as u8
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{}", n as i128)
    } else {
        format!("{n}")
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "type boolean ({b})"),
            Self::Number(n) => write!(f, "type number ({})", format_number(*n)),
            Self::BigInt(i) => write!(f, "type bigint ({i}n)"),
            Self::Text(s) => write!(f, "type string ('{s}')"),
        }
    }
}

macro_rules! impl_from_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Arg {
                fn from(v: $t) -> Self {
                    Self::Number(v as f64)
                }
            }
        )*
    };
}

impl_from_number!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl From<i128> for Arg {
    fn from(v: i128) -> Self {
        Self::BigInt(v)
    }
}

impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&Arg> for Arg {
    fn from(v: &Arg) -> Self {
        v.clone()
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Undefined, Into::into)
    }
}
