//! Lexicographic ordering and equality.
//!
//! Bytes compare as unsigned values; on a common prefix the shorter
//! buffer is lesser. `Buffer` implements `Ord` with this order, so
//! `list.sort()` and `list.sort_by(Buffer::compare)` agree.

use std::cmp::Ordering;

use octet_core::{Arg, BufferError};

use crate::buffer::Buffer;

impl Buffer {
    /// Three-way comparison of the full contents.
    pub fn compare(&self, other: &Buffer) -> Ordering {
        self.view()
            .with_bytes(|a| other.view().with_bytes(|b| a.cmp(b)))
    }

    /// Whether both buffers hold the same bytes. Different lengths are
    /// never equal.
    pub fn equals(&self, other: &Buffer) -> bool {
        self.len() == other.len() && self.compare(other) == Ordering::Equal
    }

    /// Compare `self[source_start..source_end]` with
    /// `target[target_start..target_end]`.
    ///
    /// Starts default to `0` and ends to the respective lengths. Any
    /// index beyond its buffer's length, or negative, is a bounds error.
    pub fn compare_range(
        &self,
        target: &Buffer,
        target_start: impl Into<Arg>,
        target_end: impl Into<Arg>,
        source_start: impl Into<Arg>,
        source_end: impl Into<Arg>,
    ) -> Result<Ordering, BufferError> {
        let target_start = bounded(target_start.into(), "targetStart", target.len(), 0)?;
        let target_end = bounded(target_end.into(), "targetEnd", target.len(), target.len())?;
        let source_start = bounded(source_start.into(), "sourceStart", self.len(), 0)?;
        let source_end = bounded(source_end.into(), "sourceEnd", self.len(), self.len())?;

        if source_start >= source_end {
            return Ok(if target_start >= target_end {
                Ordering::Equal
            } else {
                Ordering::Less
            });
        }
        if target_start >= target_end {
            return Ok(Ordering::Greater);
        }
        let ord = self.view().with_bytes(|a| {
            target
                .view()
                .with_bytes(|b| a[source_start..source_end].cmp(&b[target_start..target_end]))
        });
        Ok(ord)
    }
}

fn bounded(arg: Arg, name: &'static str, len: usize, default: usize) -> Result<usize, BufferError> {
    let index = arg.to_index(name, default)?;
    if index > len {
        return Err(BufferError::out_of_bounds(name, index, len));
    }
    Ok(index)
}

impl PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Buffer {}

impl PartialOrd for Buffer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Buffer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octet_core::ErrorKind;
    use proptest::prelude::*;

    fn buf(bytes: &[u8]) -> Buffer {
        Buffer::from_bytes(bytes)
    }

    #[test]
    fn shorter_prefix_is_lesser() {
        assert_eq!(buf(b"ab").compare(&buf(b"abc")), Ordering::Less);
        assert_eq!(buf(b"abc").compare(&buf(b"ab")), Ordering::Greater);
        assert_eq!(buf(b"b").compare(&buf(b"abc")), Ordering::Greater);
    }

    #[test]
    fn bytes_compare_unsigned() {
        assert_eq!(buf(&[0x80]).compare(&buf(&[0x7F])), Ordering::Greater);
    }

    #[test]
    fn empty_buffers() {
        let empty = buf(&[]);
        assert_eq!(empty.compare(&buf(&[])), Ordering::Equal);
        assert_eq!(empty.compare(&buf(&[0])), Ordering::Less);
        assert_eq!(buf(&[0]).compare(&empty), Ordering::Greater);
    }

    #[test]
    fn equality_requires_equal_length() {
        assert!(buf(b"abc").equals(&buf(b"abc")));
        assert!(!buf(b"abc").equals(&buf(b"ab")));
        assert_eq!(buf(b"x"), buf(b"x"));
        assert_ne!(buf(b"x"), buf(b"y"));
    }

    #[test]
    fn compare_range_defaults_and_bounds() {
        let a = buf(b"abcdef");
        let b = buf(b"cde");
        let u = Arg::Undefined;
        assert_eq!(a.compare_range(&b, u.clone(), u.clone(), 2, 5).unwrap(), Ordering::Equal);
        assert_eq!(a.compare_range(&b, 0, 2, 2, 4).unwrap(), Ordering::Equal);
        assert_eq!(a.compare_range(&b, u.clone(), u.clone(), u.clone(), u.clone()).unwrap(), Ordering::Less);
        assert_eq!(a.compare_range(&b, 1, 1, 0, 0).unwrap(), Ordering::Equal);
        assert_eq!(a.compare_range(&b, 0, 1, 3, 3).unwrap(), Ordering::Less);
        assert_eq!(a.compare_range(&b, 1, 1, 0, 1).unwrap(), Ordering::Greater);

        let err = a.compare_range(&b, 4, u.clone(), u.clone(), u.clone()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Bounds);
        let err = a.compare_range(&b, -1, u.clone(), u.clone(), u.clone()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Bounds);
        let err = a.compare_range(&b, u.clone(), u.clone(), u, "1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn sorting_is_deterministic() {
        let mut list = vec![buf(b"b"), buf(b""), buf(b"ab"), buf(b"a"), buf(&[0xFF])];
        list.sort_by(Buffer::compare);
        let sorted: Vec<_> = list.iter().map(Buffer::to_vec).collect();
        assert_eq!(sorted, vec![b"".to_vec(), b"a".to_vec(), b"ab".to_vec(), b"b".to_vec(), vec![0xFF]]);
        let mut again = list.clone();
        again.sort();
        assert_eq!(again, list);
    }

    proptest! {
        #[test]
        fn antisymmetric(a in prop::collection::vec(any::<u8>(), 0..8), b in prop::collection::vec(any::<u8>(), 0..8)) {
            let (x, y) = (buf(&a), buf(&b));
            prop_assert_eq!(x.compare(&y), y.compare(&x).reverse());
            prop_assert_eq!(x.compare(&y), a.cmp(&b));
        }

        #[test]
        fn transitive(mut v in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..4), 3)) {
            v.sort();
            let (a, b, c) = (buf(&v[0]), buf(&v[1]), buf(&v[2]));
            prop_assert!(a.compare(&b) != Ordering::Greater);
            prop_assert!(b.compare(&c) != Ordering::Greater);
            prop_assert!(a.compare(&c) != Ordering::Greater);
        }
    }
}
