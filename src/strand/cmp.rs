//! Equality and ordering, for strands and against foreign byte types.

use core::cmp::Ordering;
use std::borrow::Cow;

use crate::macros::{symmetric_eq, symmetric_ord};
use crate::seq::ByteSeq;
use crate::Strand;

impl Strand {
    /// Compares byte-wise with any byte sequence.
    ///
    /// Lexicographic order on bytes; when one side is a prefix of the other,
    /// the shorter side is less. This is the same order as [`Ord`] on byte
    /// slices, and the one `Eq`, `Ord` and `Hash` for `Strand` agree with.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// # use core::cmp::Ordering;
    /// let s = Strand::from("abc");
    /// assert_eq!(s.compare("abd"), Ordering::Less);
    /// assert_eq!(s.compare(b"abc"), Ordering::Equal);
    /// assert_eq!(s.compare("ab"), Ordering::Greater); // prefix tie: shorter is less
    /// ```
    #[must_use]
    pub fn compare(&self, other: impl ByteSeq) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

#[inline]
pub(crate) fn eq_bytes<A, B>(a: &A, b: &B) -> bool
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    a.as_slice() == b.as_slice()
}

#[inline]
pub(crate) fn cmp_bytes<A, B>(a: &A, b: &B) -> Option<Ordering>
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    Some(a.as_slice().cmp(b.as_slice()))
}

impl PartialEq for Strand {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        eq_bytes(self, other)
    }
}

impl Eq for Strand {}

impl PartialOrd for Strand {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Strand {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

symmetric_eq! {
    (Strand, [u8]);
    ['a] (Strand, &'a [u8]);
    [const N: usize] (Strand, [u8; N]);
    ['a, const N: usize] (Strand, &'a [u8; N]);
    (Strand, Vec<u8>);
    (Strand, Box<[u8]>);
    ['a] (Strand, Cow<'a, [u8]>);
    (Strand, str);
    ['a] (Strand, &'a str);
    (Strand, String);
}

symmetric_ord! {
    (Strand, [u8]);
    ['a] (Strand, &'a [u8]);
    [const N: usize] (Strand, [u8; N]);
    ['a, const N: usize] (Strand, &'a [u8; N]);
    (Strand, Vec<u8>);
    (Strand, Box<[u8]>);
    ['a] (Strand, Cow<'a, [u8]>);
    (Strand, str);
    ['a] (Strand, &'a str);
    (Strand, String);
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;
    use std::borrow::Cow;

    use crate::Strand;

    #[test]
    fn test_eq() {
        let s = Strand::from("abc");
        assert_eq!(s, s.clone());
        assert_eq!(s, *b"abc");
        assert_eq!(s, b"abc");
        assert_eq!(s, b"abc".as_slice());
        assert_eq!(b"abc".as_slice(), s);
        assert_eq!(s, "abc");
        assert_eq!("abc", s);
        assert_eq!(s, String::from("abc"));
        assert_eq!(s, Vec::from(b"abc".as_slice()));
        assert_eq!(s, Vec::from(b"abc".as_slice()).into_boxed_slice());
        assert_eq!(s, Cow::Borrowed(b"abc".as_slice()));

        assert_ne!(s, "abd");
        assert_ne!(s, "ab");
        assert_ne!(s, "abcd");
        assert_ne!(Strand::new(), s);
        assert_eq!(Strand::new(), "");
    }

    #[test]
    fn test_compare() {
        let abc = Strand::from("abc");
        assert_eq!(abc.compare("abc"), Ordering::Equal);
        assert_eq!(abc.compare("abd"), Ordering::Less);
        assert_eq!(abc.compare("abb"), Ordering::Greater);
        assert_eq!(abc.compare(""), Ordering::Greater);
        assert_eq!(Strand::new().compare(""), Ordering::Equal);

        // prefix ties: the shorter side is less
        assert_eq!(abc.compare("abcd"), Ordering::Less);
        assert_eq!(abc.compare("ab"), Ordering::Greater);
        assert_eq!(Strand::new().compare("a"), Ordering::Less);
    }

    #[test]
    fn test_compare_matches_ord() {
        let pairs = [
            ("", ""),
            ("", "a"),
            ("a", "ab"),
            ("ab", "ab"),
            ("ab", "b"),
            ("ba", "ab"),
        ];
        for (left, right) in pairs {
            let strand = Strand::from(left);
            assert_eq!(
                strand.compare(right),
                left.as_bytes().cmp(right.as_bytes()),
                "compare({left:?}, {right:?})"
            );
            assert_eq!(
                strand.cmp(&Strand::from(right)),
                left.as_bytes().cmp(right.as_bytes()),
                "cmp({left:?}, {right:?})"
            );
        }
    }

    #[test]
    fn test_total_order_sort() {
        let mut strands = [
            Strand::from("b"),
            Strand::from("abc"),
            Strand::from(""),
            Strand::from("ab"),
            Strand::from("a"),
        ];
        strands.sort();
        let sorted: Vec<&[u8]> = strands.iter().map(Strand::as_slice).collect();
        assert_eq!(sorted, [b"".as_slice(), b"a", b"ab", b"abc", b"b"]);
    }

    #[test]
    fn test_ord_operators() {
        let s = Strand::from("abc");
        assert!(s < Strand::from("abd"));
        assert!(s < "abd");
        assert!(s > "ab");
        assert!("abb" < s);
        assert!(s <= "abc");
        assert!(s >= b"abc".as_slice());
        assert!(s < *b"abd");
        assert!(s < Vec::from(b"b".as_slice()));
    }
}
