//! `bstr` support: a printable face for byte strands.

use core::borrow::Borrow;
use std::borrow::Cow;

use bstr::{BStr, BString};

use crate::macros::{symmetric_eq, symmetric_ord};
use crate::seq::ByteSeq;
use crate::Strand;

impl Strand {
    /// Views the strand as a [`BStr`], which displays and debugs like a
    /// string even for non-UTF-8 contents.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let s = Strand::from("to be printed");
    /// assert_eq!(format!("{}", s.as_bstr()), "to be printed");
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(self.as_slice())
    }
}

impl ByteSeq for BStr {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl ByteSeq for BString {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl Borrow<BStr> for Strand {
    #[inline]
    fn borrow(&self) -> &BStr {
        self.as_bstr()
    }
}

impl AsRef<BStr> for Strand {
    #[inline]
    fn as_ref(&self) -> &BStr {
        self.as_bstr()
    }
}

impl From<&BStr> for Strand {
    #[inline]
    fn from(value: &BStr) -> Self {
        Self::copied_from(value)
    }
}

impl From<BString> for Strand {
    #[inline]
    fn from(value: BString) -> Self {
        Self::copied_from(&value)
    }
}

impl From<Cow<'_, BStr>> for Strand {
    #[inline]
    fn from(value: Cow<'_, BStr>) -> Self {
        match value {
            Cow::Borrowed(b) => Self::from(b),
            Cow::Owned(o) => Self::from(o),
        }
    }
}

impl From<Strand> for BString {
    #[inline]
    fn from(value: Strand) -> Self {
        Self::from(value.as_slice())
    }
}

symmetric_eq! {
    (Strand, BStr);
    ['a] (Strand, &'a BStr);
    (Strand, BString);
    ['a] (Strand, &'a BString);
}

symmetric_ord! {
    (Strand, BStr);
    ['a] (Strand, &'a BStr);
    (Strand, BString);
    ['a] (Strand, &'a BString);
}

#[cfg(test)]
mod tests {
    use bstr::ByteSlice;

    use super::*;

    #[test]
    fn test_as_bstr() {
        let s = Strand::from("Hello, World!");
        assert_eq!(format!("{}", s.as_bstr()), "Hello, World!");
        assert!(s.as_bstr().contains_str("World"));
    }

    #[test]
    fn test_borrow_bstr() {
        let s = Strand::from("Hello, World!");
        let b: &BStr = s.borrow();
        assert_eq!(b, "Hello, World!");

        let mut map = std::collections::HashMap::new();
        map.insert(Strand::from("key"), 1);
        assert_eq!(map.get(BStr::new("key")), Some(&1));
    }

    #[test]
    fn test_as_ref_bstr() {
        let s = Strand::from("Hello, World!");
        let b: &BStr = s.as_ref();
        assert_eq!(b, "Hello, World!");
    }

    #[test]
    fn test_from_bstr() {
        let s = Strand::from(BStr::new("Hello, World!"));
        assert_eq!(s, "Hello, World!");
    }

    #[test]
    fn test_from_bstring() {
        let s = Strand::from(BString::from("Hello, World!"));
        assert_eq!(s, "Hello, World!");
    }

    #[test]
    fn test_from_cow() {
        let s = Strand::from(Cow::Borrowed(BStr::new(b"Hello, World!")));
        assert_eq!(s, "Hello, World!");
        let s = Strand::from(Cow::<BStr>::Owned(BString::from(b"Hello, World!")));
        assert_eq!(s, "Hello, World!");
    }

    #[test]
    fn test_into_bstring() {
        let bstring: BString = Strand::from("Hello, World!").into();
        assert_eq!(bstring, "Hello, World!");
    }

    #[test]
    fn test_byte_seq_operands() {
        let mut s = Strand::from("Hello");
        s.push_slice(BStr::new(", World"));
        s.push_slice(BString::from("!"));
        assert_eq!(s, "Hello, World!");
        assert_eq!(s.find(BStr::new("World")), Some(7));
    }

    #[test]
    fn test_eq() {
        for (a, b) in [("abc", "abc"), ("abc", "def"), ("abc", "ab")] {
            let strand = Strand::from(a);
            let bstr = BStr::new(b);
            let bstring = BString::from(b);
            let expected = a == b;

            assert_eq!(strand == *bstr, expected);
            assert_eq!(strand == bstr, expected);
            assert_eq!(strand == bstring, expected);
            assert_eq!(strand == &bstring, expected);
            assert_eq!(*bstr == strand, expected);
            assert_eq!(bstring == strand, expected);
        }
    }

    #[test]
    fn test_ord() {
        for (a, b) in [
            ("abc", "abc"),
            ("abc", "abd"),
            ("abc", "abb"),
            ("abc", "ab"),
            ("ab", "abc"),
        ] {
            let a_strand = Strand::from(a);
            let b_bstr = BStr::new(b);
            let b_bstring = BString::from(b);
            let expected = a.as_bytes().cmp(b.as_bytes());

            assert_eq!(a_strand.partial_cmp(b_bstr), Some(expected));
            assert_eq!(a_strand.partial_cmp(&b_bstr), Some(expected));
            assert_eq!(a_strand.partial_cmp(&b_bstring), Some(expected));
            assert_eq!(b_bstr.partial_cmp(&a_strand), Some(expected.reverse()));
            assert_eq!(b_bstring.partial_cmp(&a_strand), Some(expected.reverse()));
        }
    }
}
