//! Substring search and separator splitting.

use core::iter::FusedIterator;

use crate::seq::ByteSeq;
use crate::Strand;

impl Strand {
    /// Returns the position of the first occurrence of `needle`, if any.
    ///
    /// An empty needle matches at every position, so it is found at 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let s = Strand::from("abc##abc##abc");
    /// assert_eq!(s.find("abc"), Some(0));
    /// assert_eq!(s.find("##"), Some(3));
    /// assert_eq!(s.find("xyz"), None);
    /// assert_eq!(s.find(""), Some(0));
    /// ```
    #[inline]
    #[must_use]
    pub fn find(&self, needle: impl ByteSeq) -> Option<usize> {
        self.find_from(needle, 0)
    }

    /// Returns the position of the first occurrence of `needle` at or after
    /// `start`, if any.
    ///
    /// Nothing is found past the end: if `start > len()`, even an empty
    /// needle does not match.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let s = Strand::from("abc##abc##abc");
    /// assert_eq!(s.find_from("abc", 1), Some(5));
    /// assert_eq!(s.find_from("abc", 11), None);
    /// assert_eq!(s.find_from("", 4), Some(4));
    /// assert_eq!(s.find_from("", 200), None);
    /// ```
    #[must_use]
    pub fn find_from(&self, needle: impl ByteSeq, start: usize) -> Option<usize> {
        let haystack = self.as_slice();
        let needle = needle.as_slice();
        if start > haystack.len() || needle.len() > haystack.len() - start {
            return None;
        }
        (start..=haystack.len() - needle.len())
            .find(|&position| &haystack[position..position + needle.len()] == needle)
    }

    /// Returns the position of the last occurrence of `needle`, if any.
    ///
    /// An empty needle matches everywhere, so it is found at `len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let s = Strand::from("abc##abc##abc");
    /// assert_eq!(s.rfind("abc"), Some(10));
    /// assert_eq!(s.rfind("##"), Some(8));
    /// assert_eq!(s.rfind("xyz"), None);
    /// assert_eq!(s.rfind(""), Some(13));
    /// ```
    #[inline]
    #[must_use]
    pub fn rfind(&self, needle: impl ByteSeq) -> Option<usize> {
        self.rfind_from(needle, self.len())
    }

    /// Returns the largest match position at most `start`, if any.
    ///
    /// `start` may point anywhere, even past the end: it is clamped to the
    /// last viable candidate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let s = Strand::from("abc##abc##abc");
    /// assert_eq!(s.rfind_from("abc", 10), Some(10));
    /// assert_eq!(s.rfind_from("abc", 9), Some(5));
    /// assert_eq!(s.rfind_from("abc", 4), Some(0));
    /// assert_eq!(s.rfind_from("", 5), Some(5));
    /// ```
    #[must_use]
    pub fn rfind_from(&self, needle: impl ByteSeq, start: usize) -> Option<usize> {
        let haystack = self.as_slice();
        let needle = needle.as_slice();
        if needle.len() > haystack.len() {
            return None;
        }
        let upper = core::cmp::min(start, haystack.len() - needle.len());
        (0..=upper)
            .rev()
            .find(|&position| &haystack[position..position + needle.len()] == needle)
    }

    /// Returns `true` if `needle` occurs anywhere in this strand.
    #[inline]
    #[must_use]
    pub fn contains(&self, needle: impl ByteSeq) -> bool {
        self.find(needle).is_some()
    }

    /// Returns `true` if `needle` occurs exactly at `position`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let s = Strand::from("abc##abc");
    /// assert!(s.matches_at(5, "abc"));
    /// assert!(!s.matches_at(6, "abc"));   // would run past the end
    /// assert!(s.matches_at(8, ""));
    /// assert!(!s.matches_at(9, ""));      // past the end entirely
    /// ```
    #[must_use]
    pub fn matches_at(&self, position: usize, needle: impl ByteSeq) -> bool {
        let haystack = self.as_slice();
        let needle = needle.as_slice();
        position <= haystack.len()
            && haystack.len() - position >= needle.len()
            && &haystack[position..position + needle.len()] == needle
    }

    /// Returns `true` if this strand begins with `needle`.
    #[inline]
    #[must_use]
    pub fn starts_with(&self, needle: impl ByteSeq) -> bool {
        self.matches_at(0, needle)
    }

    /// Returns `true` if this strand ends with `needle`.
    #[inline]
    #[must_use]
    pub fn ends_with(&self, needle: impl ByteSeq) -> bool {
        let needle = needle.as_slice();
        self.len() >= needle.len() && self.matches_at(self.len() - needle.len(), needle)
    }

    /// Splits on every occurrence of `separator`, yielding zero-copy
    /// substrands left to right.
    ///
    /// Each piece aliases the source buffer (one reference per piece). A
    /// separator at the very end yields a trailing empty piece. An empty
    /// separator yields exactly one piece: the whole input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let record = Strand::from("0123$#456$#789");
    /// let fields: Vec<_> = record.split("$#").collect();
    /// assert_eq!(fields, ["0123", "456", "789"]);
    /// assert_eq!(record.references_count(), 4); // every field aliases the source
    /// ```
    #[inline]
    pub fn split<N: ByteSeq>(&self, separator: N) -> Split<'_, N> {
        Split::new(self, separator, None)
    }

    /// Like [`split`](Self::split), but after `limit` pieces have been cut
    /// the rest of the input is yielded whole as one final piece, so the
    /// iterator yields at most `limit + 1` pieces.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let line = Strand::from("a,b,c,d");
    /// let pieces: Vec<_> = line.split_limit(",", 2).collect();
    /// assert_eq!(pieces, ["a", "b", "c,d"]);
    /// ```
    #[inline]
    pub fn split_limit<N: ByteSeq>(&self, separator: N, limit: usize) -> Split<'_, N> {
        Split::new(self, separator, Some(limit))
    }
}

/// Lazy separator-split iterator over a [`Strand`], yielding aliasing
/// substrands.
///
/// Created by [`Strand::split`] and [`Strand::split_limit`].
pub struct Split<'h, N> {
    source: &'h Strand,
    separator: N,
    pos: usize,
    remaining: Option<usize>,
    done: bool,
}

impl<'h, N: ByteSeq> Split<'h, N> {
    fn new(source: &'h Strand, separator: N, limit: Option<usize>) -> Self {
        Self {
            source,
            separator,
            pos: 0,
            remaining: limit,
            done: false,
        }
    }
}

impl<N: ByteSeq> Iterator for Split<'_, N> {
    type Item = Strand;

    fn next(&mut self) -> Option<Strand> {
        if self.done {
            return None;
        }
        let sep_len = self.separator.len();
        if sep_len == 0 || self.remaining == Some(0) {
            self.done = true;
            return Some(self.source.alias(self.pos, self.source.len()));
        }
        match self.source.find_from(&self.separator, self.pos) {
            Some(hit) => {
                let piece = self.source.alias(self.pos, hit);
                self.pos = hit + sep_len;
                if let Some(remaining) = &mut self.remaining {
                    *remaining -= 1;
                }
                Some(piece)
            }
            None => {
                self.done = true;
                Some(self.source.alias(self.pos, self.source.len()))
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            // always at least the remainder
            (1, None)
        }
    }
}

impl<N: ByteSeq> FusedIterator for Split<'_, N> {}

#[cfg(test)]
mod tests {
    use crate::Strand;

    const HAYSTACK: &[u8] = b"abc##abc##abc";

    #[test]
    fn test_find_from() {
        let s = Strand::from(HAYSTACK);
        assert_eq!(s.find_from("abc", 0), Some(0));
        assert_eq!(s.find_from("abc", 1), Some(5));
        assert_eq!(s.find_from("abc", 5), Some(5));
        assert_eq!(s.find_from("abc", 6), Some(10));
        assert_eq!(s.find_from("abc", 10), Some(10));
        assert_eq!(s.find_from("abc", 11), None);
        assert_eq!(s.find_from("abc", 200), None);
        assert_eq!(s.find_from("##", 4), Some(8));
    }

    #[test]
    fn test_find_empty_needle() {
        let s = Strand::from(HAYSTACK);
        assert_eq!(s.find(""), Some(0));
        assert_eq!(s.find_from("", 1), Some(1));
        assert_eq!(s.find_from("", 13), Some(13));
        assert_eq!(s.find_from("", 14), None);
        assert_eq!(s.find_from("", 200), None);
    }

    #[test]
    fn test_find_empty_haystack() {
        let s = Strand::new();
        assert_eq!(s.find(""), Some(0));
        assert_eq!(s.find_from("", 1), None);
        assert_eq!(s.find("a"), None);
    }

    #[test]
    fn test_find_mixed_needle_types() {
        let s = Strand::from(HAYSTACK);
        assert_eq!(s.find(b"##"), Some(3));
        assert_eq!(s.find(String::from("##")), Some(3));
        assert_eq!(s.find(Strand::from("##")), Some(3));
        assert_eq!(s.find(&s), Some(0));
    }

    #[test]
    fn test_rfind() {
        let s = Strand::from(HAYSTACK);
        assert_eq!(s.rfind("abc"), Some(10));
        assert_eq!(s.rfind("##"), Some(8));
        assert_eq!(s.rfind("xyz"), None);
        assert_eq!(s.rfind("abc##abc##abc#"), None); // longer than the haystack
        assert_eq!(s.rfind(""), Some(13));
    }

    #[test]
    fn test_rfind_from() {
        let s = Strand::from(HAYSTACK);
        assert_eq!(s.rfind_from("abc", 200), Some(10));
        assert_eq!(s.rfind_from("abc", 10), Some(10));
        assert_eq!(s.rfind_from("abc", 9), Some(5));
        assert_eq!(s.rfind_from("abc", 5), Some(5));
        assert_eq!(s.rfind_from("abc", 4), Some(0));
        assert_eq!(s.rfind_from("abc", 0), Some(0));
        assert_eq!(s.rfind_from("", 5), Some(5));
        assert_eq!(s.rfind_from("", 200), Some(13));
    }

    #[test]
    fn test_rfind_empty_haystack() {
        let s = Strand::new();
        assert_eq!(s.rfind(""), Some(0));
        assert_eq!(s.rfind("a"), None);
    }

    #[test]
    fn test_contains() {
        let s = Strand::from(HAYSTACK);
        assert!(s.contains("##"));
        assert!(s.contains("c#"));
        assert!(s.contains(""));
        assert!(!s.contains("###"));
    }

    #[test]
    fn test_matches_at() {
        let s = Strand::from(HAYSTACK);
        assert!(s.matches_at(0, "abc"));
        assert!(s.matches_at(5, "abc"));
        assert!(!s.matches_at(4, "abc"));
        assert!(!s.matches_at(11, "abc")); // would run past the end
        assert!(s.matches_at(13, ""));
        assert!(!s.matches_at(14, ""));
    }

    #[test]
    fn test_starts_with_ends_with() {
        let s = Strand::from(HAYSTACK);
        assert!(s.starts_with("abc"));
        assert!(s.starts_with(""));
        assert!(!s.starts_with("bc"));
        assert!(!s.starts_with("abc##abc##abc#"));
        assert!(s.ends_with("abc"));
        assert!(s.ends_with("#abc"));
        assert!(s.ends_with(""));
        assert!(!s.ends_with("##"));

        let empty = Strand::new();
        assert!(empty.starts_with(""));
        assert!(empty.ends_with(""));
        assert!(!empty.starts_with("a"));
    }

    #[test]
    fn test_split() {
        let record = Strand::from("0123$#456$#789");
        let fields: Vec<Strand> = record.split("$#").collect();
        assert_eq!(fields, ["0123", "456", "789"]);
        // every piece aliases the source buffer
        assert_eq!(record.references_count(), 4);
        assert_eq!(fields[0].as_ptr(), record.as_ptr());
        assert_eq!(fields[1].as_ptr(), record.as_ptr().wrapping_add(6));
        assert_eq!(fields[2].as_ptr(), record.as_ptr().wrapping_add(11));
    }

    #[test]
    fn test_split_leading_trailing_adjacent() {
        let record = Strand::from("$#0123$#$#456$#789$#");
        let fields: Vec<Strand> = record.split("$#").collect();
        assert_eq!(fields, ["", "0123", "", "456", "789", ""]);
        assert_eq!(record.references_count(), 7);
    }

    #[test]
    fn test_split_limit() {
        let record = Strand::from("$#0123$#$#456$#789$#");
        let fields: Vec<Strand> = record.split_limit("$#", 3).collect();
        assert_eq!(fields, ["", "0123", "", "456$#789$#"]);
        assert_eq!(record.references_count(), 5);
    }

    #[test]
    fn test_split_limit_zero() {
        let record = Strand::from("a,b");
        let fields: Vec<Strand> = record.split_limit(",", 0).collect();
        assert_eq!(fields, ["a,b"]);
    }

    #[test]
    fn test_split_separator_absent() {
        let record = Strand::from("abc");
        let fields: Vec<Strand> = record.split(",").collect();
        assert_eq!(fields, ["abc"]);
    }

    #[test]
    fn test_split_empty_separator() {
        let record = Strand::from("abc");
        let fields: Vec<Strand> = record.split("").collect();
        assert_eq!(fields, ["abc"]);
    }

    #[test]
    fn test_split_empty_input() {
        let record = Strand::new();
        let fields: Vec<Strand> = record.split(",").collect();
        assert_eq!(fields, [""]);
    }

    #[test]
    fn test_split_input_equals_separator() {
        let record = Strand::from("ab");
        let fields: Vec<Strand> = record.split("ab").collect();
        assert_eq!(fields, ["", ""]);
    }

    #[test]
    fn test_split_fused() {
        let record = Strand::from("a,b");
        let mut pieces = record.split(",");
        assert_eq!(pieces.next().as_deref(), Some(b"a".as_slice()));
        assert_eq!(pieces.next().as_deref(), Some(b"b".as_slice()));
        assert_eq!(pieces.next(), None);
        assert_eq!(pieces.next(), None);
    }

    #[test]
    fn test_split_size_hint() {
        let record = Strand::from("a,b");
        let mut pieces = record.split(",");
        assert_eq!(pieces.size_hint(), (1, None));
        pieces.by_ref().for_each(drop);
        assert_eq!(pieces.size_hint(), (0, Some(0)));
    }
}
