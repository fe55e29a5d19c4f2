//! Capability traits for construction inputs.

use crate::arg::Arg;

/// Ordered, indexable access up to a declared count.
///
/// Hosts hand over duck-typed "array-like" objects (anything with a
/// `length` and numeric keys). Buffer construction only needs this
/// capability: it walks `0..length()` once, coerces each element with
/// [`Arg::to_uint8`], and never holds on to the source afterwards.
pub trait ArrayLike {
    /// Declared number of elements.
    fn length(&self) -> usize;

    /// Element at `index`. Missing elements read as [`Arg::Undefined`].
    fn element(&self, index: usize) -> Arg;

    /// Materialise the elements as bytes.
    fn to_bytes(&self) -> Vec<u8> {
        (0..self.length())
            .map(|i| self.element(i).to_uint8())
            .collect()
    }
}

impl<T> ArrayLike for [T]
where
    T: Clone + Into<Arg>,
{
    fn length(&self) -> usize {
        self.len()
    }

    fn element(&self, index: usize) -> Arg {
        self.get(index).cloned().map_or(Arg::Undefined, Into::into)
    }
}

impl<T> ArrayLike for Vec<T>
where
    T: Clone + Into<Arg>,
{
    fn length(&self) -> usize {
        self.len()
    }

    fn element(&self, index: usize) -> Arg {
        self.as_slice().element(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Sparse object with an explicit length, like `{0: 1, 2: 3, length: 4}`.
    struct Sparse {
        length: usize,
        keys: HashMap<usize, Arg>,
    }

    impl ArrayLike for Sparse {
        fn length(&self) -> usize {
            self.length
        }

        fn element(&self, index: usize) -> Arg {
            self.keys.get(&index).cloned().unwrap_or_default()
        }
    }

    #[test]
    fn slices_coerce_each_element() {
        let values = [1.0f64, 255.0, 256.0, -1.0];
        assert_eq!(values.to_bytes(), vec![1, 255, 0, 255]);
    }

    #[test]
    fn mixed_args_coerce() {
        let values = vec![Arg::from("7"), Arg::Null, Arg::from(true), Arg::Number(f64::NAN)];
        assert_eq!(values.to_bytes(), vec![7, 0, 1, 0]);
    }

    #[test]
    fn sparse_objects_fill_holes_with_zero() {
        let mut keys = HashMap::new();
        keys.insert(0, Arg::from(1));
        keys.insert(2, Arg::from(3));
        let obj = Sparse { length: 4, keys };
        assert_eq!(obj.to_bytes(), vec![1, 0, 3, 0]);
    }

    #[test]
    fn empty_array_like() {
        let empty: [u8; 0] = [];
        assert!(empty.to_bytes().is_empty());
    }
}
