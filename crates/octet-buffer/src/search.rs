//! Pattern search.
//!
//! Absence is `None`, never an error. Only a wrong-kind or fractional
//! start offset fails.

use octet_core::{Arg, BufferError};

use crate::buffer::Buffer;
use crate::pattern::Pattern;

/// Search direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// First match at or after the start offset.
    Forward,
    /// Last match starting at or before the start offset.
    Backward,
}

impl Buffer {
    /// Find `needle` starting from `start`.
    ///
    /// `start` defaults to `0` going forward and to the length going
    /// backward; negative values count from the end and the result clamps
    /// to `[0, len]`. An empty needle matches at the clamped start. A
    /// backward search whose start lies before the beginning finds nothing.
    pub fn search<'a>(
        &self,
        needle: impl Into<Pattern<'a>>,
        start: impl Into<Arg>,
        direction: Direction,
    ) -> Result<Option<usize>, BufferError> {
        let needle = needle.into().to_bytes();
        let start = start.into();
        let len = self.len();
        let default = match direction {
            Direction::Forward => 0,
            Direction::Backward => len,
        };
        let from = start.to_relative_index("byteOffset", len, default)?;
        if direction == Direction::Backward {
            if let Some(n) = start.as_number() {
                if n < 0.0 && -n > len as f64 {
                    return Ok(None);
                }
            }
        }
        if needle.is_empty() {
            return Ok(Some(from));
        }
        if needle.len() > len {
            return Ok(None);
        }
        let found = self.view().with_bytes(|hay| match direction {
            Direction::Forward => find_forward(hay, &needle, from),
            Direction::Backward => find_backward(hay, &needle, from),
        });
        Ok(found)
    }

    /// First index of `needle` at or after `start`.
    pub fn index_of<'a>(
        &self,
        needle: impl Into<Pattern<'a>>,
        start: impl Into<Arg>,
    ) -> Result<Option<usize>, BufferError> {
        self.search(needle, start, Direction::Forward)
    }

    /// Last index of `needle` at or before `start`.
    pub fn last_index_of<'a>(
        &self,
        needle: impl Into<Pattern<'a>>,
        start: impl Into<Arg>,
    ) -> Result<Option<usize>, BufferError> {
        self.search(needle, start, Direction::Backward)
    }

    /// Whether `needle` occurs at or after `start`.
    pub fn includes<'a>(&self, needle: impl Into<Pattern<'a>>, start: impl Into<Arg>) -> Result<bool, BufferError> {
        Ok(self.index_of(needle, start)?.is_some())
    }
}

fn find_forward(hay: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from + needle.len() > hay.len() {
        return None;
    }
    let rest = &hay[from..];
    let hit = if let [b] = needle {
        rest.iter().position(|x| x == b)
    } else {
        rest.windows(needle.len()).position(|w| w == needle)
    };
    hit.map(|i| i + from)
}

fn find_backward(hay: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    let last = from.min(hay.len() - needle.len());
    let window = &hay[..last + needle.len()];
    if let [b] = needle {
        window.iter().rposition(|x| x == b)
    } else {
        window.windows(needle.len()).rposition(|w| w == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octet_core::{Encoding, ErrorKind};

    const U: Arg = Arg::Undefined;

    #[test]
    fn finds_text_and_empty_needle() {
        let buf = Buffer::from("hello");
        assert_eq!(buf.index_of("lo", 0).unwrap(), Some(3));
        assert_eq!(buf.index_of("", 0).unwrap(), Some(0));
        assert_eq!(buf.index_of("", 10).unwrap(), Some(5));
        assert_eq!(buf.last_index_of("", U).unwrap(), Some(5));
        assert!(buf.includes("", U).unwrap());
    }

    #[test]
    fn absent_pattern_is_none() {
        let buf = Buffer::from("hello");
        assert_eq!(buf.index_of("z", U).unwrap(), None);
        assert_eq!(buf.index_of("hello!", U).unwrap(), None);
        assert_eq!(buf.index_of("h", 1).unwrap(), None);
        assert!(!buf.includes("world", U).unwrap());
    }

    #[test]
    fn byte_and_buffer_needles() {
        let buf = Buffer::from_bytes(&[1, 2, 3, 2, 1]);
        assert_eq!(buf.index_of(2u8, U).unwrap(), Some(1));
        assert_eq!(buf.last_index_of(2u8, U).unwrap(), Some(3));
        let needle = Buffer::from_bytes(&[3, 2]);
        assert_eq!(buf.index_of(&needle, U).unwrap(), Some(2));
        assert_eq!(buf.index_of(&[2u8, 1], U).unwrap(), Some(3));
    }

    #[test]
    fn negative_offsets_count_from_end() {
        let buf = Buffer::from("abcabc");
        assert_eq!(buf.index_of("a", -3).unwrap(), Some(3));
        assert_eq!(buf.index_of("a", -100).unwrap(), Some(0));
        assert_eq!(buf.last_index_of("a", -4).unwrap(), Some(0));
        assert_eq!(buf.last_index_of("c", -1).unwrap(), Some(5));
        assert_eq!(buf.last_index_of("a", -100).unwrap(), None);
    }

    #[test]
    fn backward_search_respects_start() {
        let buf = Buffer::from("abcabc");
        assert_eq!(buf.last_index_of("abc", U).unwrap(), Some(3));
        assert_eq!(buf.last_index_of("abc", 2).unwrap(), Some(0));
        assert_eq!(buf.last_index_of("bc", 4).unwrap(), Some(4));
        assert_eq!(buf.last_index_of("bc", 3).unwrap(), Some(1));
    }

    #[test]
    fn encoded_needles() {
        let buf = Buffer::from_text("hi there", Encoding::Utf16Le);
        let hit = buf.index_of(Pattern::Text("there", Encoding::Utf16Le), U).unwrap();
        assert_eq!(hit, Some(6));
        let buf = Buffer::from("hello");
        assert_eq!(buf.index_of(Pattern::Text("6c6c", Encoding::Hex), U).unwrap(), Some(2));
    }

    #[test]
    fn sees_live_content() {
        let buf = Buffer::from("aaaa");
        assert_eq!(buf.index_of("b", U).unwrap(), None);
        buf.set(2, b'b');
        assert_eq!(buf.index_of("b", U).unwrap(), Some(2));
    }

    #[test]
    fn bad_offsets_are_errors() {
        let buf = Buffer::from("abc");
        assert_eq!(buf.index_of("a", 1.5).unwrap_err().kind(), ErrorKind::TypeMismatch);
        assert_eq!(buf.index_of("a", "1").unwrap_err().kind(), ErrorKind::TypeMismatch);
    }
}
