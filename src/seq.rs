//! Byte sequence contract for mixed-type operands.

use std::borrow::Cow;

/// Types whose contents can be viewed as one contiguous byte sequence.
///
/// Search, append, comparison and concatenation on [`Strand`] accept any
/// `ByteSeq` operand, so strands mix freely with slices, arrays, vectors and
/// string types. The trait is deliberately open: implement it for your own
/// type to pass it to those operations directly.
///
/// [`Strand`]: crate::Strand
///
/// # Examples
///
/// ```
/// # use strand::{ByteSeq, Strand};
/// let s = Strand::from("abc##abc");
/// assert!(s.starts_with("abc"));
/// assert!(s.ends_with(b"##abc"));
/// assert_eq!(s.find(String::from("##")), Some(3));
/// ```
pub trait ByteSeq {
    /// Returns the contents as a byte slice.
    fn as_slice(&self) -> &[u8];

    /// Returns the number of bytes.
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if there are no bytes.
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns the byte at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.as_slice()[index]
    }
}

impl ByteSeq for [u8] {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> ByteSeq for [u8; N] {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl ByteSeq for str {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ByteSeq for String {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ByteSeq for Vec<u8> {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl ByteSeq for Box<[u8]> {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl ByteSeq for Cow<'_, [u8]> {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl<T: ByteSeq + ?Sized> ByteSeq for &T {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        T::as_slice(self)
    }
}
